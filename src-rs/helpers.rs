use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::{GeminiBackend, GeminiConfig, GenerationClient, GenerationError};
use crate::session::Session;
use crate::store::{default_storage_path, LocalStorage, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Client(#[from] GenerationError),
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_opt("APP_IDEAS_BASE_URL").unwrap_or(defaults.base_url),
            model: env_opt("APP_IDEAS_MODEL").unwrap_or(defaults.model),
            timeout_secs: env_parse("APP_IDEAS_TIMEOUT_SECS", defaults.timeout_secs),
            storage_path: env_opt("APP_IDEAS_STORAGE").map(PathBuf::from),
            port: env_parse("PORT", defaults.port),
        }
    }

    pub fn resolve_storage_path(&self) -> Result<PathBuf, StoreError> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => default_storage_path(),
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env_opt(key)
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(fallback)
}

pub fn build_client(cfg: &AppConfig) -> Result<GenerationClient, GenerationError> {
    let backend = GeminiBackend::new(GeminiConfig {
        base_url: cfg.base_url.clone(),
        model: cfg.model.clone(),
        timeout_secs: cfg.timeout_secs,
    })?;
    Ok(GenerationClient::new(Arc::new(backend)))
}

pub fn build_session(cfg: &AppConfig) -> Result<Session, SetupError> {
    let storage = LocalStorage::new(cfg.resolve_storage_path()?);
    let client = build_client(cfg)?;
    Ok(Session::new(storage, client))
}
