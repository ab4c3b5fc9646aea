use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::Searchable;

use super::{Record, Validate, require_id, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub role: Role,
    pub status: UserStatus,
}

impl Validate for NewUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)?;
        require_text("name", &self.name)
    }
}

impl Record for User {
    type Draft = NewUserRequest;

    const LABEL: &'static str = "User";
    const PATH: &'static str = "/api/users";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewUserRequest) -> Self {
        User {
            id,
            name: draft.name,
            role: draft.role,
            status: draft.status,
        }
    }
}

impl Searchable for User {
    fn search_text(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.role.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format() {
        let user = User {
            id: 3,
            name: "Alex Smith".to_string(),
            role: Role::Student,
            status: UserStatus::Active,
        };
        let json = serde_json::to_value(&user).expect("Failed to serialize user");
        assert_eq!(json["role"], "Student");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let req = NewUserRequest {
            name: "   ".to_string(),
            role: Role::Admin,
            status: UserStatus::Inactive,
        };
        let err = req.validate().expect_err("blank name should fail");
        assert_eq!(err.field, "name");
    }
}
