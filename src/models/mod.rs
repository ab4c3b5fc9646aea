pub mod course;
pub mod session;
pub mod summary;
pub mod user;

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::ValidationError;

pub use course::{
    ManagedCourse, NewManagedCourseRequest, NewOverviewCourseRequest, OverviewCourse,
    ProgressColor, ProgressStatus,
};
pub use session::{NewSessionRequest, Session};
pub use summary::{AdminSummary, EngagementPoint, StudentSummary};
pub use user::{NewUserRequest, Role, User, UserStatus};

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    type Draft: Clone + fmt::Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// Human readable name used in notifications ("User added successfully").
    const LABEL: &'static str;
    const PATH: &'static str;
    /// Field wrapping the list response, for resources that do not return a bare array.
    const LIST_FIELD: Option<&'static str> = None;

    fn id(&self) -> i64;

    fn from_draft(id: i64, draft: Self::Draft) -> Self;
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn require_range(
    field: &'static str,
    value: i32,
    min: i32,
    max: Option<i32>,
) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::new(
            field,
            format!("{} must be at least {}", field, min),
        ));
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::new(
                field,
                format!("{} must be between {} and {}", field, min, max),
            ));
        }
    }
    Ok(())
}

pub(crate) fn require_id(id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::new("id", "id must be a positive integer"));
    }
    Ok(())
}
