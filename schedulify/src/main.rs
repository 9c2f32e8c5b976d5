//! Schedulify - store a daily schedule per session and ask a generative
//! model to fold new tasks into it.
//!
//! Architecture:
//! - axum HTTP server with four JSON endpoints plus an embedded landing page
//! - Cookie-identified sessions held in an in-memory store with a one-hour
//!   idle expiry
//! - One outbound call per `/analyze-task` request to the Google
//!   Generative AI API

mod cli;
mod config;
mod error;
mod llm;
mod models;
mod server;
mod session;

use anyhow::Result;
use clap::Parser;

use cli::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("schedulify=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    execute(cli).await
}
