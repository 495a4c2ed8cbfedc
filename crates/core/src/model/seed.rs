//! Static course description supplied once at startup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{LectureId, SectionId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error("seed section {0} has an empty title")]
    EmptySectionTitle(SectionId),

    #[error("seed lecture {lecture} in section {section} has an empty title")]
    EmptyLectureTitle {
        section: SectionId,
        lecture: LectureId,
    },

    #[error("seed lecture {lecture} in section {section} has an empty duration")]
    EmptyLectureDuration {
        section: SectionId,
        lecture: LectureId,
    },

    #[error("seed contains section id {0} more than once")]
    DuplicateSection(SectionId),

    #[error("seed section {section} contains lecture id {lecture} more than once")]
    DuplicateLecture {
        section: SectionId,
        lecture: LectureId,
    },

    #[error("invalid seed json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureSeed {
    pub id: LectureId,
    pub title: String,
    pub duration: String,
    #[serde(default = "default_is_video")]
    pub is_video: bool,
    #[serde(default)]
    pub is_completed: bool,
}

fn default_is_video() -> bool {
    true
}

/// Section as written in a seed. `duration` and `progress` are optional and
/// never trusted; the course recomputes both from the lectures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSeed {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub lectures: Vec<LectureSeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SectionSeed>,
}

impl CourseSeed {
    /// Parses a seed from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Json` for malformed input, or a validation error
    /// from [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks the id and title constraints the course relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in section order.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut section_ids = HashSet::new();
        for section in &self.sections {
            if !section_ids.insert(section.id) {
                return Err(SeedError::DuplicateSection(section.id));
            }
            if section.title.trim().is_empty() {
                return Err(SeedError::EmptySectionTitle(section.id));
            }
            let mut lecture_ids = HashSet::new();
            for lecture in &section.lectures {
                if !lecture_ids.insert(lecture.id) {
                    return Err(SeedError::DuplicateLecture {
                        section: section.id,
                        lecture: lecture.id,
                    });
                }
                if lecture.title.trim().is_empty() {
                    return Err(SeedError::EmptyLectureTitle {
                        section: section.id,
                        lecture: lecture.id,
                    });
                }
                if lecture.duration.trim().is_empty() {
                    return Err(SeedError::EmptyLectureDuration {
                        section: section.id,
                        lecture: lecture.id,
                    });
                }
            }
        }
        Ok(())
    }

    /// The bundled demo course.
    #[must_use]
    pub fn demo() -> Self {
        let section = |id: u64, title: &str, lectures: &[(&str, &str)]| SectionSeed {
            id: SectionId::new(id),
            title: title.to_owned(),
            lectures: lectures
                .iter()
                .zip(1..)
                .map(|((title, duration), lecture_id)| LectureSeed {
                    id: LectureId::new(lecture_id),
                    title: (*title).to_owned(),
                    duration: (*duration).to_owned(),
                    is_video: true,
                    is_completed: false,
                })
                .collect(),
            duration: None,
            progress: None,
        };

        Self {
            name: "Amazon Web Services (AWS) - Zero to Hero".into(),
            duration: "3 hours".into(),
            last_updated: "July 2019".into(),
            languages: vec!["English".into(), "Arabic".into()],
            sections: vec![
                section(
                    1,
                    "Introduction",
                    &[
                        ("Introduction", "9min"),
                        ("Lab Session - Intro to Storage Services", "22min"),
                        ("Lab Session - Intro to Database Services", "18min"),
                        ("Lab Session - Intro to Compute and Networking Services", "24min"),
                        ("Lab Session - Intro to Management Services", "10min"),
                    ],
                ),
                section(
                    2,
                    "AWS EC2 Basics",
                    &[
                        ("EC2 Overview", "8min"),
                        ("Launching Your First EC2 Instance", "12min"),
                        ("EC2 Instance Types", "7min"),
                        ("Security Groups", "10min"),
                        ("SSH Access to EC2", "8min"),
                    ],
                ),
            ],
        }
    }
}
