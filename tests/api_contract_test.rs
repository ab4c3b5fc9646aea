use std::sync::Arc;

use learnboard::{
    api::router,
    client::{ApiClient, CollectionService},
    config::ClientConfig,
    error::ClientError,
    models::{ManagedCourse, NewManagedCourseRequest, NewSessionRequest, OverviewCourse, Session, User},
    repository::Repository,
    state::AppState,
};
use tokio::net::TcpListener;

async fn spawn_server(repo: Repository) -> (String, Arc<Repository>) {
    let state = AppState::new(repo);
    let repo = state.repo.clone();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.ok();
    });
    (format!("http://{}", addr), repo)
}

fn api(base_url: &str) -> ApiClient {
    let config = ClientConfig::new(base_url, "unused.json");
    ApiClient::new(&config).expect("Failed to create api client")
}

#[tokio::test]
async fn test_list_every_resource() {
    let (url, _repo) = spawn_server(Repository::seeded()).await;
    let api = api(&url);

    let users: Vec<User> = api.list().await.expect("Failed to list users");
    assert_eq!(users.len(), 3);

    let courses: Vec<ManagedCourse> = api.list().await.expect("Failed to list instructor courses");
    assert_eq!(courses[2].name, "UI/UX Fundamentals");

    let overview: Vec<OverviewCourse> = api.list().await.expect("Failed to list student courses");
    assert_eq!(overview.len(), 3);

    let sessions: Vec<Session> = api.list().await.expect("Failed to list sessions");
    assert_eq!(sessions.len(), 10);
}

#[tokio::test]
async fn test_server_assigns_ids() {
    let (url, _repo) = spawn_server(Repository::seeded()).await;
    let api = api(&url);

    let created: ManagedCourse = api
        .create(&NewManagedCourseRequest {
            name: "Rust for Web Developers".to_string(),
            progress: 0,
            students: 0,
        })
        .await
        .expect("Failed to create course");
    assert_eq!(created.id, 4);

    CollectionService::<ManagedCourse>::delete(&api, created.id)
        .await
        .expect("Failed to delete course");

    let again: ManagedCourse = api
        .create(&NewManagedCourseRequest {
            name: "Rust for Web Developers".to_string(),
            progress: 10,
            students: 2,
        })
        .await
        .expect("Failed to create course");
    assert_eq!(again.id, 5);
}

#[tokio::test]
async fn test_update_round_trip_and_not_found() {
    let (url, _repo) = spawn_server(Repository::seeded()).await;
    let api = api(&url);

    let mut session = Session {
        id: 2,
        title: "Advanced JS Q&A (moved)".to_string(),
        date: "2024-12-03".to_string(),
        time: "3:00 PM".to_string(),
    };
    let echoed = api.update(&session).await.expect("Failed to update session");
    assert_eq!(echoed, session);

    session.id = 404;
    let err = api.update(&session).await.expect_err("unknown id");
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_invalid_payload_is_remote_bad_request() {
    let (url, _repo) = spawn_server(Repository::empty()).await;
    let api = api(&url);

    let err = CollectionService::<Session>::create(
        &api,
        &NewSessionRequest {
            title: "Office hours".to_string(),
            date: "someday".to_string(),
            time: "noon".to_string(),
        },
    )
    .await
    .expect_err("server must reject the date");
    match err {
        ClientError::Remote(msg) => assert!(msg.starts_with("400")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_remote_error() {
    let api = api("http://127.0.0.1:9");
    let err = CollectionService::<User>::list(&api)
        .await
        .expect_err("nothing listens on port 9");
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_summaries() {
    let (url, _repo) = spawn_server(Repository::seeded()).await;
    let api = api(&url);

    let student = api.student_summary().await.expect("Failed to fetch student summary");
    assert_eq!(student.performance, vec![75.0, 80.0, 85.0, 90.0]);

    let admin = api.admin_summary().await.expect("Failed to fetch admin summary");
    assert_eq!(admin.total_users, 2450);
    assert_eq!(admin.engagement_trends.len(), 4);
}
