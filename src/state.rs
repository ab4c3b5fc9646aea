use std::sync::Arc;

use crate::repository::Repository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}
