use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{debug, error, info, info_span, warn};

use crate::llm::{GenerationClient, PLACEHOLDER};
use crate::result::GenerationOutcome;
use crate::state::{ResultSlot, SlotSnapshot, SlotState};
use crate::store::{mask_key, CredentialStore, LocalStorage, ValidationStatus};

struct ValidationState {
    token: u64,
    status: ValidationStatus,
}

/// All mutable application state, shared behind an `Arc`.
pub struct Session {
    store: CredentialStore,
    client: GenerationClient,
    credential: RwLock<Option<String>>,
    validation: Mutex<ValidationState>,
    ideas: ResultSlot,
    solution: ResultSlot,
}

impl Session {
    /// Reads the stored credential once; later changes come only from `validate_key`.
    pub fn new(storage: LocalStorage, client: GenerationClient) -> Self {
        info!(path = %storage.path().display(), "using local storage");
        let store = CredentialStore::new(storage, client.clone());
        let credential = store.load();
        if let Some(key) = &credential {
            info!(key = %mask_key(key), "loaded stored api key");
        }
        Self {
            store,
            client,
            credential: RwLock::new(credential),
            validation: Mutex::new(ValidationState {
                token: 0,
                status: ValidationStatus::Unknown,
            }),
            ideas: ResultSlot::new("ideas"),
            solution: ResultSlot::new("solution"),
        }
    }

    pub fn credential(&self) -> Option<String> {
        self.credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn validation_status(&self) -> ValidationStatus {
        self.lock_validation().status
    }

    pub fn ideas(&self) -> SlotSnapshot {
        self.ideas.snapshot()
    }

    pub fn solution(&self) -> SlotSnapshot {
        self.solution.snapshot()
    }

    /// Only the most recently started validation may change the status,
    /// the active credential or storage.
    pub fn validate_key(&self, key: &str) -> ValidationStatus {
        let _span = info_span!("validate_key", key = %mask_key(key)).entered();
        let token = {
            let mut validation = self.lock_validation();
            validation.token += 1;
            validation.status = ValidationStatus::Unknown;
            validation.token
        };

        let probed = self.store.probe(key);

        let mut validation = self.lock_validation();
        if validation.token != token {
            debug!(token, latest = validation.token, "discarding stale validation");
            return probed;
        }
        let status = match probed {
            ValidationStatus::Valid => match self.store.save(key) {
                Ok(()) => {
                    *self
                        .credential
                        .write()
                        .unwrap_or_else(PoisonError::into_inner) = Some(key.to_string());
                    ValidationStatus::Valid
                }
                Err(err) => {
                    error!(error = %err, "validated key could not be persisted");
                    ValidationStatus::Invalid
                }
            },
            other => other,
        };
        validation.status = status;
        status
    }

    pub fn generate_ideas(&self, prompt: &str) -> GenerationOutcome {
        let _span = info_span!("generate_ideas").entered();
        self.run(&self.ideas, |key| self.client.generate_ideas(key, prompt))
    }

    pub fn generate_solution(&self, problem: &str) -> GenerationOutcome {
        let _span = info_span!("generate_solution").entered();
        self.run(&self.solution, |key| self.client.generate_solution(key, problem))
    }

    fn run<F>(&self, slot: &ResultSlot, generate: F) -> GenerationOutcome
    where
        F: FnOnce(&str) -> Vec<String>,
    {
        let token = slot.issue();
        let items = match self.credential() {
            Some(key) => generate(&key),
            None => {
                warn!("no api key set, skipping remote call");
                vec![PLACEHOLDER.to_string()]
            }
        };
        let state = if is_placeholder(&items) {
            SlotState::Failed(PLACEHOLDER.to_string())
        } else {
            SlotState::Succeeded(items.clone())
        };
        let applied = slot.complete(token, state);
        GenerationOutcome {
            token,
            items,
            applied,
        }
    }

    fn lock_validation(&self) -> MutexGuard<'_, ValidationState> {
        self.validation.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_placeholder(items: &[String]) -> bool {
    items.len() == 1 && items[0] == PLACEHOLDER
}
