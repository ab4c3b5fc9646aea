use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Session;

/// A Sunday..Saturday window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(day: NaiveDate) -> Self {
        let offset = u64::from(day.weekday().num_days_from_sunday());
        let start = day - Days::new(offset);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn following(&self) -> Self {
        let start = self.start + Days::new(7);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

pub fn is_this_week(day: NaiveDate, today: NaiveDate) -> bool {
    WeekWindow::containing(today).contains(day)
}

pub fn is_next_week(day: NaiveDate, today: NaiveDate) -> bool {
    WeekWindow::containing(today).following().contains(day)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionBucket {
    #[default]
    #[serde(rename = "This Week")]
    ThisWeek,
    #[serde(rename = "Next Week")]
    NextWeek,
    #[serde(rename = "All Sessions")]
    All,
}

impl SessionBucket {
    pub const TABS: [SessionBucket; 3] = [
        SessionBucket::ThisWeek,
        SessionBucket::NextWeek,
        SessionBucket::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SessionBucket::ThisWeek => "This Week",
            SessionBucket::NextWeek => "Next Week",
            SessionBucket::All => "All Sessions",
        }
    }

    pub fn includes(&self, session: &Session, today: NaiveDate) -> bool {
        match self {
            SessionBucket::All => true,
            SessionBucket::ThisWeek => session.day().is_some_and(|d| is_this_week(d, today)),
            SessionBucket::NextWeek => session.day().is_some_and(|d| is_next_week(d, today)),
        }
    }
}

impl fmt::Display for SessionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown session tab: {0}")]
pub struct UnknownBucket(String);

impl FromStr for SessionBucket {
    type Err = UnknownBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionBucket::TABS
            .into_iter()
            .find(|tab| tab.label() == s.trim())
            .ok_or_else(|| UnknownBucket(s.to_string()))
    }
}

pub fn sessions_in(sessions: &[Session], bucket: SessionBucket, today: NaiveDate) -> Vec<Session> {
    sessions
        .iter()
        .filter(|s| bucket.includes(s, today))
        .cloned()
        .collect()
}
