use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::local::{LocalStorage, StoreError};
use crate::llm::GenerationClient;

pub const CREDENTIAL_KEY: &str = "geminiApiKey";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

pub struct CredentialStore {
    storage: LocalStorage,
    client: GenerationClient,
}

impl CredentialStore {
    pub fn new(storage: LocalStorage, client: GenerationClient) -> Self {
        Self { storage, client }
    }

    pub fn load(&self) -> Option<String> {
        self.storage
            .get_item(CREDENTIAL_KEY)
            .filter(|key| !key.is_empty())
    }

    pub fn save(&self, key: &str) -> Result<(), StoreError> {
        self.storage.set_item(CREDENTIAL_KEY, key)
    }

    /// Asks the remote whether `key` is accepted. Touches no state.
    pub fn probe(&self, key: &str) -> ValidationStatus {
        match self.client.probe(key) {
            Ok(()) => {
                info!(key = %mask_key(key), "api key accepted");
                ValidationStatus::Valid
            }
            Err(err) => {
                warn!(key = %mask_key(key), code = err.code(), "api key rejected");
                ValidationStatus::Invalid
            }
        }
    }

    /// Probes the remote with `key` and persists it when accepted.
    /// A key that cannot be persisted is reported `Invalid`, so `load()`
    /// returns `key` exactly when this returns `Valid`.
    pub fn validate(&self, key: &str) -> ValidationStatus {
        if self.probe(key) != ValidationStatus::Valid {
            return ValidationStatus::Invalid;
        }
        match self.save(key) {
            Ok(()) => ValidationStatus::Valid,
            Err(err) => {
                error!(error = %err, "validated key could not be persisted");
                ValidationStatus::Invalid
            }
        }
    }
}

/// Keeps the last four characters visible.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
