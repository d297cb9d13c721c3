use clap::Parser;

use crate::models::{CLIConfig, Tab};

#[derive(Parser, Debug)]
#[command(
    name = "app-ideas-cli",
    version,
    about = "Generate app ideas and problem solutions from the terminal."
)]
struct Args {
    /// Base URL of the app-ideas service.
    #[arg(long = "base", env = "APP_IDEAS_URL", default_value = "http://localhost:8080")]
    base_url: String,
    /// Tab to start on.
    #[arg(long, value_enum, default_value_t = Tab::Ideas)]
    tab: Tab,
}

pub fn parse_config() -> CLIConfig {
    let args = Args::parse();
    CLIConfig {
        base_url: args.base_url,
        tab: args.tab,
    }
}
