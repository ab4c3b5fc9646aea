use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::client::CollectionService;
use crate::error::ClientError;
use crate::models::{Record, Validate};
use crate::notify::Notifier;
use crate::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Update,
    Delete,
}

impl Op {
    fn verb(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Update => "update",
            Op::Delete => "delete",
        }
    }

    fn past(&self) -> &'static str {
        match self {
            Op::Add => "added",
            Op::Update => "updated",
            Op::Delete => "deleted",
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sends mutations to the remote collection and applies their outcome to the
/// store. The store only changes on success; failures surface as a
/// notification and leave it untouched. Nothing is retried.
pub struct CrudController<R: Record> {
    service: Arc<dyn CollectionService<R>>,
    store: Store<R>,
    notifier: Notifier,
    state: Mutex<MutationState>,
    pending_delete: Mutex<Option<i64>>,
}

impl<R: Record> CrudController<R> {
    pub fn new(service: Arc<dyn CollectionService<R>>, store: Store<R>, notifier: Notifier) -> Self {
        Self {
            service,
            store,
            notifier,
            state: Mutex::new(MutationState::Idle),
            pending_delete: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    pub fn state(&self) -> MutationState {
        *lock(&self.state)
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == MutationState::Submitting
    }

    pub async fn load(&self) -> Result<(), ClientError> {
        self.store.set_loading(true);
        match self.service.list().await {
            Ok(items) => {
                info!("loaded {} {} records", items.len(), R::LABEL);
                self.store.replace_all(items);
                Ok(())
            }
            Err(err) => {
                self.store.set_loading(false);
                warn!("fetching {} records failed: {}", R::LABEL, err);
                if self.store.is_mounted() {
                    self.notifier
                        .error(format!("Failed to fetch {}s.", R::LABEL.to_lowercase()));
                }
                Err(err)
            }
        }
    }

    pub async fn create(&self, draft: R::Draft) -> Result<R, ClientError> {
        draft.validate()?;
        self.begin()?;
        let result = self.service.create(&draft).await;
        self.finish(Op::Add, result, |store, record| store.insert(record.clone()))
    }

    pub async fn update(&self, record: R) -> Result<R, ClientError> {
        record.validate()?;
        self.begin()?;
        let result = self.service.update(&record).await;
        self.finish(Op::Update, result, |store, record| {
            store.replace_by_id(record.clone())
        })
    }

    pub fn request_delete(&self, id: i64) {
        *lock(&self.pending_delete) = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i64> {
        *lock(&self.pending_delete)
    }

    pub fn cancel_delete(&self) {
        lock(&self.pending_delete).take();
    }

    pub async fn confirm_delete(&self) -> Result<(), ClientError> {
        let id = lock(&self.pending_delete)
            .take()
            .ok_or(ClientError::NoPendingDelete)?;
        if let Err(err) = self.begin() {
            *lock(&self.pending_delete) = Some(id);
            return Err(err);
        }
        let result = self.service.delete(id).await;
        self.finish(Op::Delete, result, |store, _| store.remove_by_id(id))
    }

    fn begin(&self) -> Result<(), ClientError> {
        let mut state = lock(&self.state);
        if *state == MutationState::Submitting {
            return Err(ClientError::Busy);
        }
        *state = MutationState::Submitting;
        Ok(())
    }

    fn finish<T>(
        &self,
        op: Op,
        result: Result<T, ClientError>,
        apply: impl FnOnce(&Store<R>, &T),
    ) -> Result<T, ClientError> {
        let mounted = self.store.is_mounted();
        match result {
            Ok(value) => {
                *lock(&self.state) = MutationState::Success;
                if mounted {
                    apply(&self.store, &value);
                    self.notifier
                        .success(format!("{} {} successfully", R::LABEL, op.past()));
                } else {
                    debug!("discarding {} {} result after unmount", R::LABEL, op.verb());
                }
                Ok(value)
            }
            Err(err) => {
                *lock(&self.state) = MutationState::Failed;
                warn!("{} {} failed: {}", R::LABEL, op.verb(), err);
                if mounted {
                    self.notifier
                        .error(format!("Failed to {} {}", op.verb(), R::LABEL.to_lowercase()));
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;
    use crate::models::{ManagedCourse, NewManagedCourseRequest};
    use crate::notify::{self, Level, Notifications};

    #[derive(Default)]
    struct FakeCourses {
        rows: Mutex<Vec<ManagedCourse>>,
        calls: AtomicUsize,
        fail_with_not_found: bool,
        fail_create: bool,
        fail_update: bool,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl CollectionService<ManagedCourse> for FakeCourses {
        async fn list(&self) -> Result<Vec<ManagedCourse>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(lock(&self.rows).clone())
        }

        async fn create(&self, draft: &NewManagedCourseRequest) -> Result<ManagedCourse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail_create {
                return Err(ClientError::Remote("500 Internal Server Error: boom".to_string()));
            }
            let mut rows = lock(&self.rows);
            let id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
            let course = ManagedCourse::from_draft(id, draft.clone());
            rows.push(course.clone());
            Ok(course)
        }

        async fn update(&self, record: &ManagedCourse) -> Result<ManagedCourse, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_update {
                return Err(ClientError::Remote("400 Bad Request: progress out of range".to_string()));
            }
            Ok(record.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_with_not_found {
                return Err(ClientError::NotFound(format!("Course {}", id)));
            }
            lock(&self.rows).retain(|c| c.id != id);
            Ok(())
        }
    }

    fn seeded() -> FakeCourses {
        FakeCourses {
            rows: Mutex::new(vec![
                ManagedCourse { id: 1, name: "React Basics".to_string(), progress: 80, students: 30 },
                ManagedCourse { id: 2, name: "Advanced JavaScript".to_string(), progress: 50, students: 25 },
            ]),
            ..Default::default()
        }
    }

    fn controller(fake: Arc<FakeCourses>) -> (CrudController<ManagedCourse>, Notifications) {
        let (notifier, rx) = Notifier::channel();
        (CrudController::new(fake, Store::new(), notifier), rx)
    }

    fn draft(name: &str, progress: i32) -> NewManagedCourseRequest {
        NewManagedCourseRequest {
            name: name.to_string(),
            progress,
            students: 0,
        }
    }

    #[tokio::test]
    async fn test_load_then_create() {
        let fake = Arc::new(seeded());
        let (ctl, mut rx) = controller(fake.clone());

        ctl.load().await.expect("Failed to load");
        assert_eq!(ctl.store().get().len(), 2);
        assert!(!ctl.store().is_loading());

        let created = ctl.create(draft("UI/UX Fundamentals", 0)).await.expect("Failed to create");
        assert_eq!(created.id, 3);
        assert_eq!(ctl.store().get().last(), Some(&created));
        assert_eq!(ctl.state(), MutationState::Success);

        let notes = notify::drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, Level::Success);
        assert_eq!(notes[0].message, "Course added successfully");
    }

    #[tokio::test]
    async fn test_invalid_progress_never_reaches_service() {
        let fake = Arc::new(seeded());
        let (ctl, mut rx) = controller(fake.clone());

        let err = ctl.create(draft("React Basics", -5)).await.expect_err("must be rejected");
        match err {
            ClientError::Validation(v) => assert_eq!(v.field, "progress"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
        assert_eq!(ctl.state(), MutationState::Idle);
        assert!(notify::drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_delete_not_found_leaves_store_alone() {
        let fake = Arc::new(FakeCourses {
            fail_with_not_found: true,
            ..seeded()
        });
        let (ctl, mut rx) = controller(fake.clone());
        ctl.load().await.expect("Failed to load");
        let before = ctl.store().get();

        ctl.request_delete(2);
        let err = ctl.confirm_delete().await.expect_err("404 must surface");
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(ctl.store().get(), before);
        assert_eq!(ctl.state(), MutationState::Failed);
        assert_eq!(ctl.pending_delete(), None);

        let notes = notify::drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, Level::Error);
        assert_eq!(notes[0].message, "Failed to delete course");
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_insert() {
        let fake = Arc::new(FakeCourses {
            fail_create: true,
            ..seeded()
        });
        let (ctl, mut rx) = controller(fake.clone());
        ctl.load().await.expect("Failed to load");
        let before = ctl.store().get();

        let err = ctl.create(draft("Rust Basics", 0)).await.expect_err("remote rejects");
        assert!(err.is_remote());
        assert_eq!(ctl.store().get(), before);
        assert_eq!(ctl.state(), MutationState::Failed);

        let notes = notify::drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, Level::Error);
        assert_eq!(notes[0].message, "Failed to add course");
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_old_record() {
        let fake = Arc::new(FakeCourses {
            fail_update: true,
            ..seeded()
        });
        let (ctl, mut rx) = controller(fake.clone());
        ctl.load().await.expect("Failed to load");
        let before = ctl.store().get();

        let mut course = ctl.store().find(1).expect("course 1");
        course.name = "React Basics (renamed)".to_string();
        let err = ctl.update(course).await.expect_err("remote rejects");
        assert!(matches!(err, ClientError::Remote(_)));
        assert_eq!(ctl.store().get(), before);
        assert_eq!(ctl.state(), MutationState::Failed);

        let notes = notify::drain(&mut rx);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, Level::Error);
        assert_eq!(notes[0].message, "Failed to update course");

        assert!(ctl.create(draft("After failure", 5)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let fake = Arc::new(seeded());
        let (ctl, _rx) = controller(fake.clone());
        ctl.load().await.expect("Failed to load");

        assert!(matches!(
            ctl.confirm_delete().await,
            Err(ClientError::NoPendingDelete)
        ));

        ctl.request_delete(1);
        ctl.cancel_delete();
        assert!(ctl.confirm_delete().await.is_err());
        assert_eq!(ctl.store().get().len(), 2);

        ctl.request_delete(1);
        ctl.confirm_delete().await.expect("Failed to delete");
        let ids: Vec<i64> = ctl.store().get().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let fake = Arc::new(seeded());
        let (ctl, _rx) = controller(fake);
        ctl.load().await.expect("Failed to load");

        let mut course = ctl.store().find(2).expect("course 2");
        course.progress = 100;
        ctl.update(course.clone()).await.expect("Failed to update");
        assert_eq!(ctl.store().find(2), Some(course));
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_refused() {
        let gate = Arc::new(Notify::new());
        let fake = Arc::new(FakeCourses {
            gate: Some(gate.clone()),
            ..seeded()
        });
        let (ctl, _rx) = controller(fake.clone());
        let ctl = Arc::new(ctl);

        let first = {
            let ctl = ctl.clone();
            tokio::spawn(async move { ctl.create(draft("First", 10)).await })
        };
        while !ctl.is_submitting() {
            tokio::task::yield_now().await;
        }

        let second = ctl.create(draft("Second", 10)).await;
        assert!(matches!(second, Err(ClientError::Busy)));

        gate.notify_one();
        first.await.expect("join").expect("Failed to create");
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctl.store().get().len(), 1);
    }

    #[tokio::test]
    async fn test_result_after_unmount_is_discarded() {
        let gate = Arc::new(Notify::new());
        let fake = Arc::new(FakeCourses {
            gate: Some(gate.clone()),
            ..Default::default()
        });
        let (ctl, mut rx) = controller(fake);
        let ctl = Arc::new(ctl);

        let pending = {
            let ctl = ctl.clone();
            tokio::spawn(async move { ctl.create(draft("Late", 0)).await })
        };
        while !ctl.is_submitting() {
            tokio::task::yield_now().await;
        }

        ctl.store().unmount();
        gate.notify_one();
        pending.await.expect("join").expect("service still succeeded");

        assert!(ctl.store().get().is_empty());
        assert!(notify::drain(&mut rx).is_empty());
    }
}
