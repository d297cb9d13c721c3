use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::types::{GenerateContentRequest, GenerateContentResponse, GenerationError, GenerativeBackend};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

pub struct GeminiBackend {
    cfg: GeminiConfig,
    client: Client,
}

impl GeminiBackend {
    pub fn new(mut cfg: GeminiConfig) -> Result<Self, GenerationError> {
        if cfg.base_url.is_empty() {
            cfg.base_url = DEFAULT_BASE_URL.to_string();
        }
        if cfg.model.is_empty() {
            cfg.model = DEFAULT_MODEL.to_string();
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .build()?;
        Ok(Self { cfg, client })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.cfg.base_url.trim_end_matches('/'),
            self.cfg.model
        )
    }
}

impl GenerativeBackend for GeminiBackend {
    fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GenerationError> {
        let payload = GenerateContentRequest::from_prompt(prompt);
        debug!(model = %self.cfg.model, prompt_len = prompt.len(), "sending generateContent");

        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&payload)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            let err = GenerationError::RemoteRejected {
                status: status.as_u16(),
                body,
            };
            warn!(status = status.as_u16(), code = err.code(), "generateContent rejected");
            return Err(err);
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| GenerationError::MalformedResponse(format!("invalid json: {}", err)))?;
        Ok(parsed.first_text()?.to_string())
    }
}
