use std::path::PathBuf;

use crate::llm::gemini_adapter::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// `None` means the platform config directory.
    pub storage_path: Option<PathBuf>,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
            storage_path: None,
            port: 8080,
        }
    }
}
