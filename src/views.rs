use crate::filter::{self, FilterQuery, Searchable};
use crate::pagination::{PageView, Paginator};

#[derive(Debug, Clone, Default)]
pub struct TableView {
    query: FilterQuery,
    paginator: Paginator,
    filtered_len: usize,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            paginator: Paginator::new(page_size),
            ..Self::default()
        }
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: &str) {
        self.query.set_search(term);
    }

    pub fn set_category(&mut self, category: &str) {
        self.query.set_category(category);
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Navigation works against the list size seen by the last render.
    pub fn next_page(&mut self) {
        self.paginator.next_page(self.filtered_len);
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    pub fn render<T: Searchable + Clone>(&mut self, items: &[T]) -> PageView<T> {
        let filtered = filter::apply(items, &self.query);
        self.filtered_len = filtered.len();
        self.paginator.clamp(filtered.len());

        PageView {
            items: self.paginator.page(&filtered).to_vec(),
            current_page: self.paginator.current_page(),
            total_pages: self.paginator.total_pages(filtered.len()),
            total_items: filtered.len(),
        }
    }
}
