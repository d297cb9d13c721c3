pub mod config;
pub mod helpers;
pub mod result;
pub mod session;

#[path = "llm/lib.rs"]
pub mod llm;
#[path = "store/lib.rs"]
pub mod store;
#[path = "state/lib.rs"]
pub mod state;
#[path = "api/lib.rs"]
pub mod api;

pub use config::AppConfig;
pub use result::GenerationOutcome;
pub use session::Session;
