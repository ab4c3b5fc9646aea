use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::error::AppError;
use crate::models::*;
use crate::repository::Stored;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
struct DeleteParams {
    id: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(User::PATH, collection::<User>())
        .route(ManagedCourse::PATH, collection::<ManagedCourse>())
        .route(OverviewCourse::PATH, collection::<OverviewCourse>())
        .route(Session::PATH, collection::<Session>())
        .route("/api/student", get(student_summary))
        .route("/api/admin", get(admin_summary))
        .with_state(state)
}

fn collection<R: Stored>() -> axum::routing::MethodRouter<AppState> {
    get(list::<R>)
        .post(create::<R>)
        .put(update::<R>)
        .delete(remove::<R>)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list<R: Stored>(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let items = R::table(&state.repo).read().await.all();
    let items = serde_json::to_value(items).map_err(|e| {
        error!("failed to encode {} list: {}", R::LABEL, e);
        AppError::InternalServerError
    })?;

    let body = match R::LIST_FIELD {
        Some(field) => {
            let mut wrapper = Map::new();
            wrapper.insert(field.to_string(), items);
            Value::Object(wrapper)
        }
        None => items,
    };
    Ok(Json(body))
}

async fn create<R: Stored>(
    State(state): State<AppState>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError> {
    let Json(draft) = payload?;
    draft.validate()?;

    let record = R::table(&state.repo).write().await.insert(draft);
    info!("created {} {}", R::LABEL, record.id());
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update<R: Stored>(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<R>, AppError> {
    let Json(body) = payload?;
    let Value::Object(patch) = body else {
        return Err(AppError::BadRequest("Expected a JSON object".to_string()));
    };
    let id = patch
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    let mut table = R::table(&state.repo).write().await;
    let existing = table
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("{} not found", R::LABEL)))?;

    let merged = merge(&existing, patch)?;
    merged.validate()?;

    let updated = table
        .update(merged)
        .ok_or_else(|| AppError::NotFound(format!("{} not found", R::LABEL)))?;
    info!("updated {} {}", R::LABEL, id);
    Ok(Json(updated))
}

/// Fields present in `patch` win; everything else keeps its stored value.
fn merge<R: Record>(existing: &R, patch: Map<String, Value>) -> Result<R, AppError> {
    let mut base = serde_json::to_value(existing).map_err(|e| {
        error!("failed to encode {} {}: {}", R::LABEL, existing.id(), e);
        AppError::InternalServerError
    })?;
    if let Value::Object(fields) = &mut base {
        fields.extend(patch);
    }
    serde_json::from_value(base).map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn remove<R: Stored>(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = params
        .id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest("Invalid ID".to_string()))?;

    if !R::table(&state.repo).write().await.remove(id) {
        return Err(AppError::NotFound(format!("{} not found", R::LABEL)));
    }
    info!("deleted {} {}", R::LABEL, id);
    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", R::LABEL),
    }))
}

async fn student_summary(State(state): State<AppState>) -> Json<StudentSummary> {
    Json(state.repo.student_summary().await)
}

async fn admin_summary(State(state): State<AppState>) -> Json<AdminSummary> {
    Json(state.repo.admin_summary().await)
}
