use serde::{Deserialize, Serialize};

/// A single course in the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Course ids that must all be completed first. Order is irrelevant.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub category: String,
    /// Free-text tags, only used for interest matching.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A target program: the courses it requires and the electives it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub id: String,
    pub name: String,
    /// Informational priority, lower sorts first in listings.
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub required_courses: Vec<String>,
    #[serde(default)]
    pub elective_options: Vec<String>,
}

impl Curriculum {
    pub fn requires(&self, course_id: &str) -> bool {
        self.required_courses.iter().any(|id| id == course_id)
    }

    pub fn offers_elective(&self, course_id: &str) -> bool {
        self.elective_options.iter().any(|id| id == course_id)
    }

    /// True if the course is required or offered as an elective.
    pub fn includes(&self, course_id: &str) -> bool {
        self.requires(course_id) || self.offers_elective(course_id)
    }
}
