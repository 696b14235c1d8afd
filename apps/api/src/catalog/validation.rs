//! Load-time consistency checks for the catalog.
//!
//! Issues are advisory: the catalog is served as loaded. Unknown ids never match
//! anything and courses on a prerequisite cycle can never become eligible.

use std::collections::HashMap;

use super::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    UnknownPrerequisite,
    UnknownCurriculumCourse,
    RequiredAndElective,
    PrerequisiteCycle,
}

#[derive(Debug, Clone)]
pub struct CatalogIssue {
    pub kind: IssueKind,
    /// The course or curriculum the issue was found on.
    pub subject_id: String,
    pub description: String,
}

/// Runs every check and returns the issues in a stable order.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    check_prerequisite_refs(catalog, &mut issues);
    check_curriculum_refs(catalog, &mut issues);
    check_prerequisite_cycles(catalog, &mut issues);
    issues
}

fn check_prerequisite_refs(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    for course in catalog.courses() {
        for prereq in &course.prerequisites {
            if !catalog.contains_course(prereq) {
                issues.push(CatalogIssue {
                    kind: IssueKind::UnknownPrerequisite,
                    subject_id: course.id.clone(),
                    description: format!(
                        "Course '{}' lists unknown prerequisite '{}'; it can never become eligible",
                        course.id, prereq
                    ),
                });
            }
        }
    }
}

fn check_curriculum_refs(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    for curriculum in catalog.curricula() {
        let referenced = curriculum
            .required_courses
            .iter()
            .chain(curriculum.elective_options.iter());

        for course_id in referenced {
            if !catalog.contains_course(course_id) {
                issues.push(CatalogIssue {
                    kind: IssueKind::UnknownCurriculumCourse,
                    subject_id: curriculum.id.clone(),
                    description: format!(
                        "Curriculum '{}' references unknown course '{}'",
                        curriculum.id, course_id
                    ),
                });
            }
        }

        for course_id in &curriculum.required_courses {
            if curriculum.offers_elective(course_id) {
                issues.push(CatalogIssue {
                    kind: IssueKind::RequiredAndElective,
                    subject_id: curriculum.id.clone(),
                    description: format!(
                        "Curriculum '{}' lists '{}' as both required and elective",
                        curriculum.id, course_id
                    ),
                });
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    InProgress,
    Done,
}

/// Depth-first walk over prerequisite links with an explicit stack, so chain
/// length is bounded by the heap rather than the thread stack.
fn check_prerequisite_cycles(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    let mut state: HashMap<&str, Visit> = HashMap::new();

    for root in catalog.courses() {
        if state.contains_key(root.id.as_str()) {
            continue;
        }

        // (course id, index of the next prerequisite to follow); doubles as the current path
        let mut stack: Vec<(&str, usize)> = vec![(root.id.as_str(), 0)];
        state.insert(root.id.as_str(), Visit::InProgress);

        while let Some(top) = stack.last_mut() {
            let (id, index) = *top;
            top.1 += 1;

            let prereqs = catalog
                .course(id)
                .map(|course| course.prerequisites.as_slice())
                .unwrap_or_default();

            let Some(prereq) = prereqs.get(index).map(String::as_str) else {
                stack.pop();
                state.insert(id, Visit::Done);
                continue;
            };

            if !catalog.contains_course(prereq) {
                continue;
            }
            match state.get(prereq) {
                None => {
                    state.insert(prereq, Visit::InProgress);
                    stack.push((prereq, 0));
                }
                Some(Visit::InProgress) => {
                    let start = stack.iter().position(|&(p, _)| p == prereq).unwrap_or(0);
                    let mut cycle: Vec<&str> = stack[start..].iter().map(|&(p, _)| p).collect();
                    cycle.push(prereq);
                    issues.push(CatalogIssue {
                        kind: IssueKind::PrerequisiteCycle,
                        subject_id: prereq.to_string(),
                        description: format!("Prerequisite cycle: {}", cycle.join(" -> ")),
                    });
                }
                Some(Visit::Done) => {}
            }
        }
    }
}
