use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub sessions_completed: u32,
    pub upcoming_sessions: u32,
    pub average_score: u32,
    #[serde(default)]
    pub performance: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_users: u32,
    pub engagement_rate: String,
    pub new_registrations: u32,
    #[serde(default)]
    pub engagement_trends: Vec<EngagementPoint>,
}
