//! Eligibility Filter — which required courses a student can take next.
//!
//! Pure function of the completed set, the catalog, and the target curriculum.

use std::collections::HashSet;

use crate::catalog::{Catalog, Course, Curriculum};

/// Maximum number of next-course suggestions.
pub const NEXT_COURSES_LIMIT: usize = 6;

/// Returns up to six required courses the student has not completed and whose
/// prerequisites are all completed, in catalog order.
///
/// Algorithm:
/// 1. Candidate: listed in the curriculum as required or elective
/// 2. Skip anything already completed
/// 3. Every prerequisite must be completed (no partial credit)
/// 4. Keep required courses only
/// 5. First six in catalog order
pub fn next_courses(
    completed: &HashSet<String>,
    catalog: &Catalog,
    curriculum: &Curriculum,
) -> Vec<Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| curriculum.includes(&course.id))
        .filter(|course| !completed.contains(&course.id))
        .filter(|course| prerequisites_met(course, completed))
        .filter(|course| curriculum.requires(&course.id))
        .take(NEXT_COURSES_LIMIT)
        .cloned()
        .collect()
}

/// True when every prerequisite is in the completed set. An empty prerequisite
/// list is trivially satisfied.
pub fn prerequisites_met(course: &Course, completed: &HashSet<String>) -> bool {
    course
        .prerequisites
        .iter()
        .all(|prereq| completed.contains(prereq))
}
