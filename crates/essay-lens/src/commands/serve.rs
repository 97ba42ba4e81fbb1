//! Serve command: run the MCP server over stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use essay_lens_core::config::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Stdio is the only transport; no options yet.
}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logs go to stderr, so stdout carries only protocol messages.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    info!(model = %config.model, "starting MCP server on stdio");

    let service = ProjectServer::with_config(config)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
