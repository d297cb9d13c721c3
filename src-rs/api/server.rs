use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::api::handlers::{
    handle_credential, handle_generate_ideas, handle_generate_solution, handle_health, handle_ideas_slot,
    handle_solution_slot, handle_validate,
};
use crate::session::Session;

pub struct AppServer {
    pub port: u16,
    pub session: Arc<Session>,
}

impl AppServer {
    pub fn new(port: u16, session: Arc<Session>) -> Self {
        Self { port, session }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handle_health))
            .route("/credential", get(handle_credential))
            .route("/credential/validate", post(handle_validate))
            .route("/ideas", get(handle_ideas_slot).post(handle_generate_ideas))
            .route("/solution", get(handle_solution_slot).post(handle_generate_solution))
            .with_state(self.session.clone())
    }

    pub async fn start(&self) -> Result<(), String> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(%addr, "app-ideas listening");
        axum::Server::bind(&addr)
            .serve(self.router().into_make_service())
            .await
            .map_err(|err| err.to_string())
    }
}
