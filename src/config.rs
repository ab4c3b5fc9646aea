use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_STORAGE_PATH: &str = ".learnboard/local_storage.json";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub seed_data: bool,
}

impl ServerConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .parse()
            .map_err(|e| AppError::BadRequest(format!("BIND_ADDR {:?} is invalid: {}", raw, e)))?;
        let seed_data = env::var("SEED_DATA")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            seed_data,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub storage_path: PathBuf,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            storage_path: storage_path.into(),
        }
    }

    pub fn new_from_env() -> Self {
        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let storage_path =
            env::var("LEARNBOARD_STORAGE").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        Self::new(api_url, storage_path)
    }
}
