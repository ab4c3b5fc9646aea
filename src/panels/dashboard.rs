use tracing::warn;

use crate::charts::{self, Series};
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::models::{AdminSummary, StudentSummary};
use crate::notify::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentDashboard {
    pub summary: StudentSummary,
    pub cards: Vec<Card>,
    pub improvement: Series,
    pub performance: Series,
}

impl StudentDashboard {
    pub fn from_summary(summary: StudentSummary) -> Self {
        let cards = vec![
            Card {
                title: "Sessions Completed",
                value: summary.sessions_completed.to_string(),
            },
            Card {
                title: "Upcoming Sessions",
                value: summary.upcoming_sessions.to_string(),
            },
            Card {
                title: "Average Score",
                value: format!("{}%", summary.average_score),
            },
        ];
        Self {
            improvement: charts::weekly_improvement(&summary.performance),
            performance: charts::weekly_performance(&summary.performance),
            cards,
            summary,
        }
    }

    pub async fn load(api: &ApiClient, notifier: &Notifier) -> Result<Self, ClientError> {
        match api.student_summary().await {
            Ok(summary) => Ok(Self::from_summary(summary)),
            Err(err) => {
                warn!("student summary failed: {}", err);
                notifier.error("Failed to load data");
                Err(err)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub summary: AdminSummary,
    pub cards: Vec<Card>,
    pub engagement: Series,
}

impl AdminDashboard {
    pub fn from_summary(summary: AdminSummary) -> Self {
        let cards = vec![
            Card {
                title: "Total Users",
                value: summary.total_users.to_string(),
            },
            Card {
                title: "Engagement Rate",
                value: summary.engagement_rate.clone(),
            },
            Card {
                title: "New Registrations",
                value: summary.new_registrations.to_string(),
            },
        ];
        Self {
            engagement: charts::engagement_trends(&summary.engagement_trends),
            cards,
            summary,
        }
    }

    pub async fn load(api: &ApiClient, notifier: &Notifier) -> Result<Self, ClientError> {
        match api.admin_summary().await {
            Ok(summary) => Ok(Self::from_summary(summary)),
            Err(err) => {
                warn!("admin summary failed: {}", err);
                notifier.error("Failed to fetch admin dashboard data");
                Err(err)
            }
        }
    }
}
