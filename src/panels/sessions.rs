use std::sync::Arc;

use chrono::NaiveDate;
use tracing::warn;

use crate::client::CollectionService;
use crate::controller::CrudController;
use crate::error::ClientError;
use crate::models::Session;
use crate::notify::Notifier;
use crate::preferences::{ACTIVE_SESSION_TAB_KEY, LocalStorage, StorageError};
use crate::schedule::{self, SessionBucket};
use crate::store::Store;

pub struct UpcomingSessions {
    controller: CrudController<Session>,
    storage: LocalStorage,
    tab: SessionBucket,
}

impl UpcomingSessions {
    pub fn new(
        service: Arc<dyn CollectionService<Session>>,
        notifier: Notifier,
        storage: LocalStorage,
    ) -> Self {
        let tab = restore_tab(&storage);
        let store = Store::new();
        store.set_loading(true);
        Self {
            controller: CrudController::new(service, store, notifier),
            storage,
            tab,
        }
    }

    pub fn store(&self) -> &Store<Session> {
        self.controller.store()
    }

    pub async fn mount(&self) -> Result<(), ClientError> {
        self.store().mount();
        self.controller.load().await
    }

    pub fn unmount(&self) {
        self.store().unmount();
    }

    pub fn active_tab(&self) -> SessionBucket {
        self.tab
    }

    pub fn select_tab(&mut self, tab: SessionBucket) -> Result<(), StorageError> {
        self.tab = tab;
        self.storage.set(ACTIVE_SESSION_TAB_KEY, tab.label())
    }

    pub fn visible_on(&self, today: NaiveDate) -> Vec<Session> {
        schedule::sessions_in(&self.store().get(), self.tab, today)
    }

    pub fn visible(&self) -> Vec<Session> {
        self.visible_on(schedule::today())
    }

    pub fn empty_message(&self) -> String {
        format!("No sessions available for {}.", self.tab)
    }
}

fn restore_tab(storage: &LocalStorage) -> SessionBucket {
    match storage.get(ACTIVE_SESSION_TAB_KEY) {
        Some(saved) => saved.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to {}", e, SessionBucket::default());
            SessionBucket::default()
        }),
        None => SessionBucket::default(),
    }
}
