use tokio::sync::RwLock;

use crate::models::{
    AdminSummary, ManagedCourse, OverviewCourse, Record, Session, StudentSummary, User,
};
use crate::seeds;

#[derive(Debug, Clone)]
pub struct Collection<R> {
    rows: Vec<R>,
    next_id: i64,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> Collection<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let next_id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self { rows, next_id }
    }

    pub fn all(&self) -> Vec<R> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Assigns the next id. Ids are never reused, even after a delete.
    pub fn insert(&mut self, draft: R::Draft) -> R {
        let record = R::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.rows.push(record.clone());
        record
    }

    pub fn update(&mut self, record: R) -> Option<R> {
        let slot = self.rows.iter_mut().find(|r| r.id() == record.id())?;
        *slot = record;
        Some(slot.clone())
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id() != id);
        self.rows.len() != before
    }
}

#[derive(Debug, Default)]
pub struct Repository {
    users: RwLock<Collection<User>>,
    instructor_courses: RwLock<Collection<ManagedCourse>>,
    student_courses: RwLock<Collection<OverviewCourse>>,
    sessions: RwLock<Collection<Session>>,
    student_summary: RwLock<StudentSummary>,
    admin_summary: RwLock<AdminSummary>,
}

impl Repository {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(Collection::new(seeds::users())),
            instructor_courses: RwLock::new(Collection::new(seeds::instructor_courses())),
            student_courses: RwLock::new(Collection::new(seeds::student_courses())),
            sessions: RwLock::new(Collection::new(seeds::sessions())),
            student_summary: RwLock::new(seeds::student_summary()),
            admin_summary: RwLock::new(seeds::admin_summary()),
        }
    }

    pub async fn reset(&self, seeded: bool) {
        let fresh = if seeded { Self::seeded() } else { Self::empty() };
        *self.users.write().await = fresh.users.into_inner();
        *self.instructor_courses.write().await = fresh.instructor_courses.into_inner();
        *self.student_courses.write().await = fresh.student_courses.into_inner();
        *self.sessions.write().await = fresh.sessions.into_inner();
        *self.student_summary.write().await = fresh.student_summary.into_inner();
        *self.admin_summary.write().await = fresh.admin_summary.into_inner();
    }

    pub async fn student_summary(&self) -> StudentSummary {
        self.student_summary.read().await.clone()
    }

    pub async fn admin_summary(&self) -> AdminSummary {
        self.admin_summary.read().await.clone()
    }

    /// Replaces one collection wholesale; the id counter continues past the
    /// largest id given.
    pub async fn replace<R: Stored>(&self, rows: Vec<R>) {
        *R::table(self).write().await = Collection::new(rows);
    }
}

pub trait Stored: Record {
    fn table(repo: &Repository) -> &RwLock<Collection<Self>>;
}

impl Stored for User {
    fn table(repo: &Repository) -> &RwLock<Collection<Self>> {
        &repo.users
    }
}

impl Stored for ManagedCourse {
    fn table(repo: &Repository) -> &RwLock<Collection<Self>> {
        &repo.instructor_courses
    }
}

impl Stored for OverviewCourse {
    fn table(repo: &Repository) -> &RwLock<Collection<Self>> {
        &repo.student_courses
    }
}

impl Stored for Session {
    fn table(repo: &Repository) -> &RwLock<Collection<Self>> {
        &repo.sessions
    }
}
