//! CLI command execution.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::llm::GeminiGenerator;
use crate::server::{start_server, ServerState};
use crate::session::SessionStore;

use super::args::{Cli, Commands};

/// Execute the parsed CLI command.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { port } => serve(port).await,
    }
}

async fn serve(port: u16) -> Result<()> {
    let config = Config::from_env();

    // The key itself is never logged.
    let Some(api_key) = config.api_key else {
        bail!("API_KEY is not set; the generation service requires one");
    };

    let generator = GeminiGenerator::new(api_key, config.gemini_base_url, config.gemini_model);

    let state = Arc::new(ServerState {
        sessions: SessionStore::new(),
        generator: Arc::new(generator),
        session_secret: config.session_secret,
    });

    start_server(port, state).await
}
