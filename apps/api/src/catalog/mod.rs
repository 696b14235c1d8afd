//! Read-only reference data: the course catalog and the curriculum catalog.
//!
//! Loaded once at startup and shared as `Arc<Catalog>`. Nothing mutates it after load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod handlers;
pub mod models;
pub mod validation;

pub use models::{Course, Curriculum};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Duplicate course id '{0}'")]
    DuplicateCourse(String),

    #[error("Duplicate curriculum id '{0}'")]
    DuplicateCurriculum(String),
}

/// Courses and curricula in file order, indexed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    curricula: Vec<Curriculum>,
    course_index: HashMap<String, usize>,
    curriculum_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(courses: Vec<Course>, curricula: Vec<Curriculum>) -> Result<Self, CatalogError> {
        let mut course_index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            if course_index.insert(course.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
        }

        let mut curriculum_index = HashMap::with_capacity(curricula.len());
        for (i, curriculum) in curricula.iter().enumerate() {
            if curriculum_index.insert(curriculum.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCurriculum(curriculum.id.clone()));
            }
        }

        Ok(Self {
            courses,
            curricula,
            course_index,
            curriculum_index,
        })
    }

    /// Reads both JSON catalog files from disk.
    pub fn load(courses_path: &Path, curricula_path: &Path) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = read_json(courses_path)?;
        let curricula: Vec<Curriculum> = read_json(curricula_path)?;
        Self::new(courses, curricula)
    }

    /// All courses in catalog iteration order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn curricula(&self) -> &[Curriculum] {
        &self.curricula
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_index.get(id).map(|&i| &self.courses[i])
    }

    pub fn curriculum(&self, id: &str) -> Option<&Curriculum> {
        self.curriculum_index.get(id).map(|&i| &self.curricula[i])
    }

    pub fn contains_course(&self, id: &str) -> bool {
        self.course_index.contains_key(id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
