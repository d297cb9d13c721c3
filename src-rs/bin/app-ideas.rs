use std::sync::Arc;

use app_ideas_rs::api::AppServer;
use app_ideas_rs::helpers::build_session;
use app_ideas_rs::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    // The blocking HTTP client must be built outside the async runtime.
    let session = match build_session(&config) {
        Ok(session) => Arc::new(session),
        Err(err) => {
            eprintln!("startup error: {}", err);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("runtime error: {}", err);
            std::process::exit(1);
        }
    };

    let server = AppServer::new(config.port, session);
    if let Err(err) = runtime.block_on(server.start()) {
        eprintln!("server error: {}", err);
        std::process::exit(1);
    }
}
