use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::models::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub mounted: bool,
    pub version: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            mounted: true,
            version: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action<T> {
    SetLoading(bool),
    ReplaceAll(Vec<T>),
    Insert(T),
    ReplaceById(T),
    RemoveById(i64),
    Mount,
    Unmount,
}

/// Applies `action` to `state`. Returns whether anything changed.
///
/// Once unmounted, every action other than [`Action::Mount`] is dropped.
pub fn reduce<T: Record>(state: &mut Snapshot<T>, action: Action<T>) -> bool {
    if !state.mounted && !matches!(action, Action::Mount) {
        debug!("dropping {} action on unmounted store", T::LABEL);
        return false;
    }

    let changed = match action {
        Action::SetLoading(loading) => {
            let changed = state.loading != loading;
            state.loading = loading;
            changed
        }
        Action::ReplaceAll(items) => {
            state.items = items;
            state.loading = false;
            true
        }
        Action::Insert(item) => match state.items.iter_mut().find(|x| x.id() == item.id()) {
            Some(existing) if *existing == item => false,
            Some(existing) => {
                *existing = item;
                true
            }
            None => {
                state.items.push(item);
                true
            }
        },
        Action::ReplaceById(item) => match state.items.iter_mut().find(|x| x.id() == item.id()) {
            Some(existing) if *existing != item => {
                *existing = item;
                true
            }
            _ => false,
        },
        Action::RemoveById(id) => {
            let before = state.items.len();
            state.items.retain(|x| x.id() != id);
            state.items.len() != before
        }
        Action::Mount => {
            let changed = !state.mounted;
            state.mounted = true;
            changed
        }
        Action::Unmount => {
            state.items.clear();
            state.loading = false;
            state.mounted = false;
            true
        }
    };

    if changed {
        state.version += 1;
    }
    changed
}

pub struct Store<T> {
    tx: Arc<watch::Sender<Snapshot<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn dispatch(&self, action: Action<T>) -> bool {
        self.tx.send_if_modified(|state| reduce(state, action))
    }

    pub fn replace_all(&self, items: Vec<T>) {
        self.dispatch(Action::ReplaceAll(items));
    }

    pub fn insert(&self, item: T) {
        self.dispatch(Action::Insert(item));
    }

    pub fn replace_by_id(&self, item: T) {
        self.dispatch(Action::ReplaceById(item));
    }

    pub fn remove_by_id(&self, id: i64) {
        self.dispatch(Action::RemoveById(id));
    }

    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn mount(&self) {
        self.dispatch(Action::Mount);
    }

    pub fn unmount(&self) {
        self.dispatch(Action::Unmount);
    }

    pub fn get(&self) -> Vec<T> {
        self.tx.borrow().items.clone()
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.tx.borrow().clone()
    }

    pub fn find(&self, id: i64) -> Option<T> {
        self.tx.borrow().items.iter().find(|x| x.id() == id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }

    pub fn is_mounted(&self) -> bool {
        self.tx.borrow().mounted
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.tx.subscribe()
    }
}
