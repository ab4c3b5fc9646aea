use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::filter::Searchable;

use super::{Record, Validate, require_id, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub title: String,
    pub date: String,
    pub time: String,
}

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value.trim())
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn check_session(title: &str, date: &str, time: &str) -> Result<(), ValidationError> {
    require_text("title", title)?;
    if parse_day(date).is_none() {
        return Err(ValidationError::new(
            "date",
            format!("date must be an ISO date, got {:?}", date),
        ));
    }
    require_text("time", time)
}

impl Validate for NewSessionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_session(&self.title, &self.date, &self.time)
    }
}

impl Validate for Session {
    fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)?;
        check_session(&self.title, &self.date, &self.time)
    }
}

impl Record for Session {
    type Draft = NewSessionRequest;

    const LABEL: &'static str = "Session";
    const PATH: &'static str = "/api/upcomingSessions";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewSessionRequest) -> Self {
        Session {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
        }
    }
}

impl Searchable for Session {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Session {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    pub fn display_date(&self) -> Option<String> {
        self.day().map(|d| d.format("%A, %B %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let session = Session {
            id: 1,
            title: "React Fundamentals Live Session".to_string(),
            date: "2024-12-01".to_string(),
            time: "10:00 AM".to_string(),
        };
        assert_eq!(
            session.display_date().as_deref(),
            Some("Sunday, December 1, 2024")
        );
    }

    #[test]
    fn test_parse_day_accepts_timestamps() {
        assert_eq!(
            parse_day("2024-12-03T17:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 12, 3)
        );
        assert_eq!(parse_day("next tuesday"), None);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let req = NewSessionRequest {
            title: "Advanced JS Q&A".to_string(),
            date: "12/02/2024".to_string(),
            time: "2:00 PM".to_string(),
        };
        assert_eq!(req.validate().expect_err("bad date").field, "date");
    }
}
