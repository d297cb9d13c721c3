use serde::{Deserialize, Serialize};

/// What one generation call produced and whether it reached the result slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub token: u64,
    pub items: Vec<String>,
    pub applied: bool,
}
