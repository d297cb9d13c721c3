use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::result::GenerationOutcome;
use crate::session::Session;
use crate::state::SlotSnapshot;
use crate::store::{mask_key, ValidationStatus};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub status: ValidationStatus,
}

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub saved: bool,
    pub masked: Option<String>,
    pub status: ValidationStatus,
}

#[derive(Debug, Deserialize)]
pub struct IdeasRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct SolutionRequest {
    pub problem: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub token: u64,
    pub items: Vec<String>,
    pub applied: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SlotResponse {
    #[serde(flatten)]
    pub snapshot: SlotSnapshot,
    pub items: Vec<String>,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

pub async fn handle_credential(State(session): State<Arc<Session>>) -> Json<CredentialResponse> {
    let credential = session.credential();
    Json(CredentialResponse {
        saved: credential.is_some(),
        masked: credential.as_deref().map(mask_key),
        status: session.validation_status(),
    })
}

pub async fn handle_validate(
    State(session): State<Arc<Session>>,
    Json(req): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let key = req.api_key.trim().to_string();
    if key.is_empty() {
        return Json(ValidateResponse {
            status: ValidationStatus::Invalid,
        });
    }

    let status = tokio::task::spawn_blocking(move || session.validate_key(&key))
        .await
        .unwrap_or_else(|err| {
            error!(error = %err, "validation task failed");
            ValidationStatus::Invalid
        });
    Json(ValidateResponse { status })
}

pub async fn handle_generate_ideas(
    State(session): State<Arc<Session>>,
    Json(req): Json<IdeasRequest>,
) -> Json<GenerateResponse> {
    if req.prompt.trim().is_empty() {
        return Json(rejected("prompt required"));
    }
    let prompt = req.prompt;
    let result = tokio::task::spawn_blocking(move || session.generate_ideas(&prompt)).await;
    Json(to_response(result))
}

pub async fn handle_generate_solution(
    State(session): State<Arc<Session>>,
    Json(req): Json<SolutionRequest>,
) -> Json<GenerateResponse> {
    if req.problem.trim().is_empty() {
        return Json(rejected("problem required"));
    }
    let problem = req.problem;
    let result = tokio::task::spawn_blocking(move || session.generate_solution(&problem)).await;
    Json(to_response(result))
}

pub async fn handle_ideas_slot(State(session): State<Arc<Session>>) -> Json<SlotResponse> {
    Json(to_slot_response(session.ideas()))
}

pub async fn handle_solution_slot(State(session): State<Arc<Session>>) -> Json<SlotResponse> {
    Json(to_slot_response(session.solution()))
}

fn rejected(message: &str) -> GenerateResponse {
    GenerateResponse {
        token: 0,
        items: Vec::new(),
        applied: false,
        error: Some(message.to_string()),
    }
}

fn to_response(result: Result<GenerationOutcome, tokio::task::JoinError>) -> GenerateResponse {
    match result {
        Ok(outcome) => GenerateResponse {
            token: outcome.token,
            items: outcome.items,
            applied: outcome.applied,
            error: None,
        },
        Err(err) => {
            error!(error = %err, "generation task failed");
            rejected(&err.to_string())
        }
    }
}

fn to_slot_response(snapshot: SlotSnapshot) -> SlotResponse {
    let items = snapshot.items();
    SlotResponse { snapshot, items }
}
