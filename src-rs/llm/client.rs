use std::sync::Arc;

use tracing::{info, warn};

use super::templates::{GenerationRequest, Template};
use super::types::{GenerationError, GenerativeBackend};

/// Returned in place of any result when an operation fails.
pub const PLACEHOLDER: &str = "Failed to generate ideas. Please check your API key and try again.";

#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn GenerativeBackend>,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub fn send(&self, api_key: &str, request: &GenerationRequest) -> Result<String, GenerationError> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingCredential);
        }
        self.backend.generate(api_key, &request.prompt())
    }

    pub fn probe(&self, api_key: &str) -> Result<(), GenerationError> {
        self.send(api_key, &GenerationRequest::probe()).map(|_| ())
    }

    /// Ideas parsed from the reply, or `[PLACEHOLDER]`. Never fails.
    pub fn generate_ideas(&self, api_key: &str, prompt_text: &str) -> Vec<String> {
        let request = GenerationRequest::new(Template::GenerateIdeas, prompt_text);
        let result = self.send(api_key, &request).and_then(|text| {
            let ideas = split_ideas(&text);
            if ideas.is_empty() {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(ideas)
            }
        });
        match result {
            Ok(ideas) => {
                info!(count = ideas.len(), "ideas generated");
                ideas
            }
            Err(err) => placeholder("generate_ideas", &err),
        }
    }

    /// The verbatim reply as one item, or `[PLACEHOLDER]`. Never fails.
    pub fn generate_solution(&self, api_key: &str, problem_text: &str) -> Vec<String> {
        let request = GenerationRequest::new(Template::GenerateSolution, problem_text);
        let result = self.send(api_key, &request).and_then(|text| {
            if text.trim().is_empty() {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(text)
            }
        });
        match result {
            Ok(text) => {
                info!(len = text.len(), "solution generated");
                vec![text]
            }
            Err(err) => placeholder("generate_solution", &err),
        }
    }
}

fn placeholder(operation: &str, err: &GenerationError) -> Vec<String> {
    warn!(operation, code = err.code(), error = %err, "generation failed");
    vec![PLACEHOLDER.to_string()]
}

/// Splits model output into ideas on runs of blank lines.
pub fn split_ideas(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut ideas = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.lines() {
        if line.trim().is_empty() {
            push_idea(&mut ideas, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_idea(&mut ideas, &current);
    ideas
}

fn push_idea(ideas: &mut Vec<String>, lines: &[&str]) {
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        ideas.push(trimmed.to_string());
    }
}
