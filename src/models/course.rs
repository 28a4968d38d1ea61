//! Course model.
//!
//! A course needs `hours_per_week` one-hour occurrences placed into the
//! weekly grid. Courses with zero hours are kept in the catalog but never
//! scheduled. Lab courses point at the theory course they accompany.

use serde::{Deserialize, Serialize};

/// Departments whose electives must not run against each other.
pub const ELECTIVE_EXCLUSIVE_DEPARTMENTS: [&str; 2] = ["CENG", "SENG"];

/// Course delivery type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    /// Lecture, held in a non-lab room.
    Theory,
    /// Practical session, held in a lab room.
    Lab,
}

fn default_semester() -> u8 {
    1
}

fn default_hours_per_week() -> u32 {
    3
}

fn default_enrollment() -> u32 {
    30
}

/// A course to be timetabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Study year (1-4).
    pub year: u8,
    /// Cumulative semester (1-8).
    #[serde(default = "default_semester")]
    pub semester: u8,
    /// Instructor name (resolved against the instructor list).
    pub instructor: String,
    /// Theory or lab.
    #[serde(rename = "type")]
    pub kind: CourseKind,
    /// Required weekly one-hour occurrences. Zero excludes the course.
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: u32,
    /// Number of enrolled students.
    #[serde(default = "default_enrollment")]
    pub enrollment: u32,
    /// Owning department (e.g. "CENG").
    #[serde(default)]
    pub department: String,
    /// Elective flag.
    #[serde(default)]
    pub is_elective: bool,
    /// Whether a lab accompanies this course.
    #[serde(default)]
    pub requires_lab: bool,
    /// For labs: code of the theory course.
    #[serde(default)]
    pub theory_course_code: Option<String>,
}

impl Course {
    /// Creates a theory course with one weekly hour and default enrollment.
    pub fn theory(code: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self::new(code, instructor, CourseKind::Theory)
    }

    /// Creates a lab course attached to a theory course.
    pub fn lab(
        code: impl Into<String>,
        instructor: impl Into<String>,
        theory_course_code: impl Into<String>,
    ) -> Self {
        let mut course = Self::new(code, instructor, CourseKind::Lab);
        course.theory_course_code = Some(theory_course_code.into());
        course
    }

    fn new(code: impl Into<String>, instructor: impl Into<String>, kind: CourseKind) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            year: 1,
            semester: default_semester(),
            instructor: instructor.into(),
            kind,
            hours_per_week: 1,
            enrollment: default_enrollment(),
            department: String::new(),
            is_elective: false,
            requires_lab: false,
            theory_course_code: None,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets year and semester.
    pub fn with_cohort(mut self, year: u8, semester: u8) -> Self {
        self.year = year;
        self.semester = semester;
        self
    }

    /// Sets the weekly hours.
    pub fn with_hours(mut self, hours_per_week: u32) -> Self {
        self.hours_per_week = hours_per_week;
        self
    }

    /// Sets the enrollment.
    pub fn with_enrollment(mut self, enrollment: u32) -> Self {
        self.enrollment = enrollment;
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Marks the course as elective.
    pub fn elective(mut self) -> Self {
        self.is_elective = true;
        self
    }

    /// Marks the course as requiring a lab.
    pub fn with_lab_required(mut self) -> Self {
        self.requires_lab = true;
        self
    }

    /// Whether the course needs any placement at all.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.hours_per_week > 0
    }

    /// Whether this is a theory course.
    #[inline]
    pub fn is_theory(&self) -> bool {
        self.kind == CourseKind::Theory
    }

    /// Whether this is a lab course.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind == CourseKind::Lab
    }

    /// Whether the department is one of the mutually exclusive elective departments.
    pub fn in_exclusive_department(&self) -> bool {
        ELECTIVE_EXCLUSIVE_DEPARTMENTS.contains(&self.department.as_str())
    }
}
