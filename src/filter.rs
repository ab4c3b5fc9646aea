use std::borrow::Cow;

pub const ALL: &str = "all";

pub trait Searchable {
    fn search_text(&self) -> &str;

    /// Category compared against the categorical filter (a user's role, for
    /// example). Records without one only match [`CategoryFilter::All`].
    fn category(&self) -> Option<Cow<'_, str>> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_lowercase())
        }
    }

    fn matches(&self, category: Option<Cow<'_, str>>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => {
                category.is_some_and(|c| c.to_lowercase() == *wanted)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    search_term: String,
    category: CategoryFilter,
}

impl FilterQuery {
    pub fn new(search_term: &str, category: &str) -> Self {
        Self {
            search_term: search_term.to_lowercase(),
            category: CategoryFilter::parse(category),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = CategoryFilter::parse(category);
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        let text_ok = self.search_term.is_empty()
            || item.search_text().to_lowercase().contains(&self.search_term);
        text_ok && self.category.matches(item.category())
    }
}

pub fn apply<T: Searchable + Clone>(items: &[T], query: &FilterQuery) -> Vec<T> {
    items
        .iter()
        .filter(|item| query.matches(*item))
        .cloned()
        .collect()
}
