use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::MessageResponse;
use crate::config::ClientConfig;
use crate::error::{ClientError, ErrorResponse};
use crate::models::{AdminSummary, Record, StudentSummary};

#[async_trait]
pub trait CollectionService<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ClientError>;
    async fn create(&self, draft: &R::Draft) -> Result<R, ClientError>;
    async fn update(&self, record: &R) -> Result<R, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Remote(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = check(response).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn student_summary(&self) -> Result<StudentSummary, ClientError> {
        self.get_json("/api/student").await
    }

    pub async fn admin_summary(&self) -> Result<AdminSummary, ClientError> {
        self.get_json("/api/admin").await
    }
}

/// Turns non-2xx responses into errors, keeping the service's message.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.message)
        .unwrap_or(body);

    if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(message))
    } else {
        Err(ClientError::Remote(format!("{}: {}", status, message)))
    }
}

fn unwrap_list<R: Record>(body: Value) -> Result<Vec<R>, ClientError> {
    let list = match R::LIST_FIELD {
        Some(field) => match body {
            Value::Object(mut map) => map.remove(field).ok_or_else(|| {
                ClientError::Remote(format!("{} list is missing field {:?}", R::LABEL, field))
            })?,
            other => other,
        },
        None => body,
    };
    serde_json::from_value(list)
        .map_err(|e| ClientError::Remote(format!("Failed to parse {} list: {}", R::LABEL, e)))
}

#[async_trait]
impl<R: Record> CollectionService<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let body: Value = self.get_json(R::PATH).await?;
        let items = unwrap_list::<R>(body)?;
        debug!("fetched {} {} records", items.len(), R::LABEL);
        Ok(items)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, ClientError> {
        let response = self.client.post(self.url(R::PATH)).json(draft).send().await?;
        let response = check(response).await?;
        Ok(response.json::<R>().await?)
    }

    async fn update(&self, record: &R) -> Result<R, ClientError> {
        let response = self.client.put(self.url(R::PATH)).json(record).send().await?;
        let response = check(response).await?;
        Ok(response.json::<R>().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = format!("{}?id={}", self.url(R::PATH), id);
        let response = self.client.delete(url).send().await?;
        let response = check(response).await?;
        let confirmation = response.json::<MessageResponse>().await?;
        debug!("{}", confirmation.message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ManagedCourse, User};

    #[test]
    fn test_unwrap_wrapped_list() {
        let body = serde_json::json!({
            "courses": [{ "id": 1, "name": "React Basics", "progress": 80, "students": 30 }]
        });
        let courses = unwrap_list::<ManagedCourse>(body).expect("Failed to parse courses");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].students, 30);
    }

    #[test]
    fn test_unwrap_bare_list() {
        let body = serde_json::json!([
            { "id": 1, "name": "Venkat", "role": "Admin", "status": "active" }
        ]);
        let users = unwrap_list::<User>(body).expect("Failed to parse users");
        assert_eq!(users[0].name, "Venkat");
    }

    #[test]
    fn test_missing_envelope_field_is_remote_error() {
        let body = serde_json::json!({ "items": [] });
        let err = unwrap_list::<ManagedCourse>(body).expect_err("missing courses field");
        assert!(err.is_remote());
    }
}
