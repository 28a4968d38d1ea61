//! Input validation for timetabling requests.
//!
//! Checks structural integrity of instructors, classrooms, and courses
//! before scheduling. Detects:
//! - Missing entity lists
//! - Duplicate names and codes
//! - Unknown instructor and theory-course references
//! - Out-of-range course fields
//! - Availability that is empty or falls in the Friday exam block
//! - Courses that no classroom can hold
//!
//! The engine does not call this. It assumes a request already passed.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{Classroom, Course, Weekday, EXAM_BLOCK, MAX_LAB_CAPACITY};
use crate::scheduler::TimetableRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The request holds no instructors, classrooms, or courses.
    MissingData,
    /// Two entities share the same name or code.
    DuplicateId,
    /// A course names an instructor that doesn't exist.
    UnknownInstructor,
    /// An instructor declares no availability.
    NoAvailability,
    /// Friday availability overlaps the exam block.
    ExamBlockAvailability,
    /// Classroom capacity is zero or above the lab ceiling.
    InvalidCapacity,
    /// Enrollment, year, or semester out of range.
    InvalidCourseField,
    /// A lab's theory reference is missing, circular, or dangling.
    InvalidTheoryReference,
    /// No classroom of the right type can seat the course.
    NoSuitableRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetabling request.
///
/// Checks:
/// 1. Instructors, classrooms, and courses are all non-empty
/// 2. No duplicate instructor names, classroom names, or course codes
/// 3. Every instructor has availability, none of it in the exam block
/// 4. Classroom capacities are positive; lab rooms seat at most 40
/// 5. Every course names a known instructor
/// 6. Enrollment > 0, year in 1..=4, semester in 1..=8
/// 7. Every lab names a distinct, existing theory course
/// 8. Every schedulable course fits some room of its type
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(request: &TimetableRequest) -> ValidationResult {
    let mut errors = Vec::new();

    for (list, empty) in [
        ("instructors", request.instructors.is_empty()),
        ("classrooms", request.classrooms.is_empty()),
        ("courses", request.courses.is_empty()),
    ] {
        if empty {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingData,
                format!("No {list} defined"),
            ));
        }
    }

    // Instructors
    let mut instructor_names = HashSet::new();
    for instructor in &request.instructors {
        if !instructor_names.insert(instructor.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate instructor name: {}", instructor.name),
            ));
        }

        if instructor.availability.values().all(Vec::is_empty) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoAvailability,
                format!("Instructor '{}' has no availability", instructor.name),
            ));
        }

        let friday = instructor.availability.get(&Weekday::Friday);
        for range in friday.into_iter().flatten() {
            if EXAM_BLOCK.intersects(range.start, range.end) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ExamBlockAvailability,
                    format!(
                        "Instructor '{}' is available during the Friday exam block ({range})",
                        instructor.name
                    ),
                ));
            }
        }
    }

    // Classrooms
    let mut classroom_names = HashSet::new();
    for room in &request.classrooms {
        if !classroom_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom name: {}", room.name),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Classroom '{}' has zero capacity", room.name),
            ));
        } else if room.is_lab && room.capacity > MAX_LAB_CAPACITY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!(
                    "Lab '{}' capacity {} exceeds maximum of {MAX_LAB_CAPACITY}",
                    room.name, room.capacity
                ),
            ));
        }
    }

    // Courses
    let mut course_codes = HashSet::new();
    let theory_codes: HashSet<&str> = request
        .courses
        .iter()
        .filter(|c| c.is_theory())
        .map(|c| c.code.as_str())
        .collect();
    for course in &request.courses {
        if !course_codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course code: {}", course.code),
            ));
        }
    }

    for course in &request.courses {
        if !instructor_names.contains(course.instructor.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownInstructor,
                format!(
                    "Course '{}' references unknown instructor '{}'",
                    course.code, course.instructor
                ),
            ));
        }

        check_course_fields(course, &mut errors);

        if course.is_lab() {
            check_theory_reference(course, &course_codes, &theory_codes, &mut errors);
        }

        if course.is_schedulable() {
            check_room_fit(course, &request.classrooms, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_course_fields(course: &Course, errors: &mut Vec<ValidationError>) {
    if course.enrollment == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCourseField,
            format!("Course '{}' has zero enrollment", course.code),
        ));
    }
    if !(1..=4).contains(&course.year) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCourseField,
            format!("Course '{}' has invalid year {}", course.code, course.year),
        ));
    }
    if !(1..=8).contains(&course.semester) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCourseField,
            format!(
                "Course '{}' has invalid semester {}",
                course.code, course.semester
            ),
        ));
    }
}

fn check_theory_reference(
    course: &Course,
    course_codes: &HashSet<&str>,
    theory_codes: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    let message = match course.theory_course_code.as_deref() {
        None => format!("Lab course '{}' has no theory course", course.code),
        Some(theory) if theory == course.code => {
            format!("Lab course '{}' references itself as theory course", course.code)
        }
        Some(theory) if !course_codes.contains(theory) => format!(
            "Lab course '{}' references unknown theory course '{theory}'",
            course.code
        ),
        Some(theory) if !theory_codes.contains(theory) => format!(
            "Lab course '{}' references '{theory}', which is not a theory course",
            course.code
        ),
        Some(_) => return,
    };
    errors.push(ValidationError::new(
        ValidationErrorKind::InvalidTheoryReference,
        message,
    ));
}

fn check_room_fit(course: &Course, classrooms: &[Classroom], errors: &mut Vec<ValidationError>) {
    let largest = classrooms
        .iter()
        .filter(|room| room.suits(course.kind))
        .map(|room| room.capacity)
        .max();

    let room_type = if course.is_lab() { "lab" } else { "lecture" };
    match largest {
        None => errors.push(ValidationError::new(
            ValidationErrorKind::NoSuitableRoom,
            format!("No {room_type} room available for course '{}'", course.code),
        )),
        Some(capacity) if capacity < course.enrollment => errors.push(ValidationError::new(
            ValidationErrorKind::NoSuitableRoom,
            format!(
                "Course '{}' enrollment {} exceeds largest suitable room capacity {capacity}",
                course.code, course.enrollment
            ),
        )),
        Some(_) => {}
    }
}
