use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum SlotState {
    Idle,
    InFlight,
    Succeeded(Vec<String>),
    Failed(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlotSnapshot {
    #[serde(flatten)]
    pub state: SlotState,
    pub token: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SlotSnapshot {
    /// What the UI renders as cards.
    pub fn items(&self) -> Vec<String> {
        match &self.state {
            SlotState::Succeeded(items) => items.clone(),
            SlotState::Failed(message) => vec![message.clone()],
            SlotState::Idle | SlotState::InFlight => Vec::new(),
        }
    }
}
