use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    Ideas,
    Problems,
}

impl Tab {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "ideas" | "idea" => Some(Tab::Ideas),
            "problems" | "problem" | "solve" => Some(Tab::Problems),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Ideas => "Generate Ideas",
            Tab::Problems => "Solve Problems",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub tab: Tab,
}

#[derive(Debug, Serialize)]
pub struct ValidateRequest {
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CredentialInfo {
    pub saved: bool,
    pub masked: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct IdeasRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct SolutionRequest {
    pub problem: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub token: u64,
    pub items: Vec<String>,
    pub applied: bool,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlotInfo {
    pub state: String,
    pub token: u64,
    #[serde(default)]
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_are_forgiving() {
        assert_eq!(Tab::parse("Ideas"), Some(Tab::Ideas));
        assert_eq!(Tab::parse("solve"), Some(Tab::Problems));
        assert_eq!(Tab::parse("settings"), None);
    }

    #[test]
    fn slot_without_items_defaults_empty() {
        let slot: SlotInfo = serde_json::from_str(r#"{"state":"idle","token":0}"#).unwrap();
        assert!(slot.items.is_empty());
    }
}
