use std::sync::Arc;

use crate::client::CollectionService;
use crate::controller::CrudController;
use crate::error::ClientError;
use crate::models::{OverviewCourse, ProgressColor};
use crate::notify::Notifier;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub struct CourseProgressRow {
    pub course: OverviewCourse,
    pub status_text: &'static str,
    pub color: ProgressColor,
}

pub struct CourseOverview {
    controller: CrudController<OverviewCourse>,
}

impl CourseOverview {
    pub fn new(service: Arc<dyn CollectionService<OverviewCourse>>, notifier: Notifier) -> Self {
        let store = Store::new();
        store.set_loading(true);
        Self {
            controller: CrudController::new(service, store, notifier),
        }
    }

    pub fn store(&self) -> &Store<OverviewCourse> {
        self.controller.store()
    }

    pub async fn mount(&self) -> Result<(), ClientError> {
        self.store().mount();
        self.controller.load().await
    }

    pub fn unmount(&self) {
        self.store().unmount();
    }

    pub fn is_loading(&self) -> bool {
        self.store().is_loading()
    }

    pub fn rows(&self) -> Vec<CourseProgressRow> {
        self.store()
            .get()
            .into_iter()
            .map(|course| {
                let status = course.progress_status();
                CourseProgressRow {
                    status_text: status.text(),
                    color: status.color(),
                    course,
                }
            })
            .collect()
    }
}
