// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::Parser;
use site_analysis_agent::app::{create_router, AppState, VERSION};
use site_analysis_agent::models::config::ServiceConfig;
use site_analysis_agent::routes::AnalysisState;
use site_analysis_agent::services::fetcher::PageFetcher;
use site_analysis_agent::services::llm::GeminiClient;
use site_analysis_agent::services::logging::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "site-analysis-agent", version = VERSION, about = "Website analysis API")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8001)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = ServiceConfig::from_env()?;

    let fetcher = PageFetcher::new(&config.fetch)?;
    let llm = Arc::new(GeminiClient::new(&config.llm)?);

    let state = AppState {
        analysis: AnalysisState::new(fetcher, llm),
    };
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(version = VERSION, %addr, "site-analysis-agent listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
