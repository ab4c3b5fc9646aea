use std::sync::Arc;

use crate::charts::{self, Series};
use crate::client::CollectionService;
use crate::controller::CrudController;
use crate::error::ClientError;
use crate::filter::Searchable;
use crate::models::{ManagedCourse, Record};
use crate::notify::Notifier;
use crate::pagination::PageView;
use crate::store::Store;
use crate::views::TableView;

pub struct CollectionPanel<R: Record + Searchable> {
    controller: CrudController<R>,
    table: TableView,
}

impl<R: Record + Searchable> CollectionPanel<R> {
    pub fn new(service: Arc<dyn CollectionService<R>>, notifier: Notifier) -> Self {
        Self {
            controller: CrudController::new(service, Store::new(), notifier),
            table: TableView::default(),
        }
    }

    pub fn controller(&self) -> &CrudController<R> {
        &self.controller
    }

    pub fn store(&self) -> &Store<R> {
        self.controller.store()
    }

    pub async fn mount(&self) -> Result<(), ClientError> {
        self.store().mount();
        self.controller.load().await
    }

    pub fn unmount(&self) {
        self.store().unmount();
    }

    pub fn search(&mut self, term: &str) {
        self.table.set_search(term);
    }

    pub fn filter_by(&mut self, category: &str) {
        self.table.set_category(category);
    }

    pub fn next_page(&mut self) {
        self.table.next_page();
    }

    pub fn prev_page(&mut self) {
        self.table.prev_page();
    }

    pub fn view(&mut self) -> PageView<R> {
        let items = self.store().get();
        self.table.render(&items)
    }

    pub async fn add(&self, draft: R::Draft) -> Result<R, ClientError> {
        self.controller.create(draft).await
    }

    pub async fn save(&self, record: R) -> Result<R, ClientError> {
        self.controller.update(record).await
    }

    pub fn ask_delete(&self, id: i64) {
        self.controller.request_delete(id);
    }

    pub fn cancel_delete(&self) {
        self.controller.cancel_delete();
    }

    pub async fn confirm_delete(&self) -> Result<(), ClientError> {
        self.controller.confirm_delete().await
    }
}

impl CollectionPanel<ManagedCourse> {
    pub fn student_distribution(&self) -> Series {
        charts::student_distribution(&self.store().get())
    }
}
