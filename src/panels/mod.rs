pub mod collection;
pub mod dashboard;
pub mod overview;
pub mod sessions;

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{ManagedCourse, Role, User};
use crate::notify::{Notifications, Notifier};
use crate::preferences::LocalStorage;

pub use collection::CollectionPanel;
pub use dashboard::{AdminDashboard, Card, StudentDashboard};
pub use overview::{CourseOverview, CourseProgressRow};
pub use sessions::UpcomingSessions;

pub type UserManagement = CollectionPanel<User>;
pub type CourseManagement = CollectionPanel<ManagedCourse>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    StudentSummary,
    CourseOverview,
    UpcomingSessions,
    CourseManagement,
    AdminSummary,
    UserManagement,
}

impl PanelKind {
    pub fn for_role(role: Role) -> &'static [PanelKind] {
        match role {
            Role::Student => &[
                PanelKind::StudentSummary,
                PanelKind::UpcomingSessions,
                PanelKind::CourseOverview,
            ],
            Role::Instructor => &[PanelKind::CourseManagement],
            Role::Admin => &[PanelKind::AdminSummary, PanelKind::UserManagement],
        }
    }
}

#[derive(Clone)]
pub struct Dashboard {
    api: Arc<ApiClient>,
    notifier: Notifier,
    storage: LocalStorage,
}

impl Dashboard {
    pub fn new(config: &ClientConfig) -> Result<(Self, Notifications), ClientError> {
        let api = Arc::new(ApiClient::new(config)?);
        let (notifier, rx) = Notifier::channel();
        let storage = LocalStorage::new(config.storage_path.clone());
        Ok((
            Self {
                api,
                notifier,
                storage,
            },
            rx,
        ))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn user_management(&self) -> UserManagement {
        CollectionPanel::new(self.api.clone(), self.notifier.clone())
    }

    pub fn course_management(&self) -> CourseManagement {
        CollectionPanel::new(self.api.clone(), self.notifier.clone())
    }

    pub fn course_overview(&self) -> CourseOverview {
        CourseOverview::new(self.api.clone(), self.notifier.clone())
    }

    pub fn upcoming_sessions(&self) -> UpcomingSessions {
        UpcomingSessions::new(self.api.clone(), self.notifier.clone(), self.storage.clone())
    }

    pub async fn student_summary(&self) -> Result<StudentDashboard, ClientError> {
        StudentDashboard::load(&self.api, &self.notifier).await
    }

    pub async fn admin_summary(&self) -> Result<AdminDashboard, ClientError> {
        AdminDashboard::load(&self.api, &self.notifier).await
    }
}
