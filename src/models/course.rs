use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::Searchable;

use super::{Record, Validate, require_id, require_range, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedCourse {
    pub id: i64,
    pub name: String,
    pub progress: i32,
    pub students: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewManagedCourseRequest {
    pub name: String,
    pub progress: i32,
    pub students: i32,
}

fn check_managed(name: &str, progress: i32, students: i32) -> Result<(), ValidationError> {
    require_text("name", name)?;
    require_range("progress", progress, 0, Some(100))?;
    require_range("students", students, 0, None)
}

impl Validate for NewManagedCourseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_managed(&self.name, self.progress, self.students)
    }
}

impl Validate for ManagedCourse {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)?;
        check_managed(&self.name, self.progress, self.students)
    }
}

impl Record for ManagedCourse {
    type Draft = NewManagedCourseRequest;

    const LABEL: &'static str = "Course";
    const PATH: &'static str = "/api/instructor";
    const LIST_FIELD: Option<&'static str> = Some("courses");

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewManagedCourseRequest) -> Self {
        ManagedCourse {
            id,
            name: draft.name,
            progress: draft.progress,
            students: draft.students,
        }
    }
}

impl Searchable for ManagedCourse {
    fn search_text(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewCourse {
    pub id: i64,
    pub name: String,
    pub progress: i32,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOverviewCourseRequest {
    pub name: String,
    pub progress: i32,
    #[serde(default)]
    pub status: String,
}

impl Validate for NewOverviewCourseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_range("progress", self.progress, 0, Some(100))
    }
}

impl Validate for OverviewCourse {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)?;
        require_text("name", &self.name)?;
        require_range("progress", self.progress, 0, Some(100))
    }
}

impl Record for OverviewCourse {
    type Draft = NewOverviewCourseRequest;

    const LABEL: &'static str = "Course";
    const PATH: &'static str = "/api/courses";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewOverviewCourseRequest) -> Self {
        OverviewCourse {
            id,
            name: draft.name,
            progress: draft.progress,
            status: draft.status,
        }
    }
}

impl Searchable for OverviewCourse {
    fn search_text(&self) -> &str {
        &self.name
    }
}

impl OverviewCourse {
    pub fn progress_status(&self) -> ProgressStatus {
        ProgressStatus::from_progress(self.progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl ProgressStatus {
    pub fn from_progress(progress: i32) -> Self {
        if progress >= 100 {
            ProgressStatus::Completed
        } else if progress > 0 {
            ProgressStatus::InProgress
        } else {
            ProgressStatus::NotStarted
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ProgressStatus::Completed => "Completed",
            ProgressStatus::InProgress => "In Progress",
            ProgressStatus::NotStarted => "Not Started",
        }
    }

    pub fn color(&self) -> ProgressColor {
        match self {
            ProgressStatus::Completed => ProgressColor::Green,
            ProgressStatus::InProgress => ProgressColor::Yellow,
            ProgressStatus::NotStarted => ProgressColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressColor {
    Green,
    Yellow,
    Red,
}
