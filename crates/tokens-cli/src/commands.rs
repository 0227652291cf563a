use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use tokens_cli::config::SyncConfig;
use tokens_cli::sync::{SourceReport, run_sync};
use tokens_figma::FigmaClient;
use tokens_normalization::{NormalizePaths, build_canonical};
use tokens_output::write_canonical;

use crate::cli::{NormalizeArgs, SyncArgs};

/// Result of a `normalize` run.
pub struct NormalizeReport {
    pub output: PathBuf,
    pub groups: usize,
    pub tokens: usize,
}

pub async fn run_sync_command(args: &SyncArgs) -> Result<Vec<SourceReport>> {
    let config = SyncConfig::resolve(
        args.token.clone(),
        &args.file_keys,
        args.output.clone(),
        args.base_url.clone(),
        args.dry_run,
    )?;
    info!(
        sources = config.file_keys.len(),
        output = %config.output_dir.display(),
        dry_run = config.dry_run,
        "starting sync"
    );
    let client = FigmaClient::new(&config.token)
        .and_then(|client| client.with_base_url(&config.base_url))
        .context("failed to create API client")?;
    run_sync(&client, &config).await
}

pub fn run_normalize_command(args: &NormalizeArgs) -> Result<NormalizeReport> {
    let defaults = NormalizePaths::from_root(&args.root);
    let paths = NormalizePaths {
        options: args.options.clone().unwrap_or(defaults.options),
        alias: args.alias.clone().unwrap_or(defaults.alias),
        output: args.output.clone().unwrap_or(defaults.output),
    };
    let canonical = build_canonical(&paths).context("failed to normalize raw exports")?;
    write_canonical(&paths.output, &canonical)
        .with_context(|| format!("failed to write {}", paths.output.display()))?;
    Ok(NormalizeReport {
        output: paths.output,
        groups: canonical.color.len(),
        tokens: canonical.color.leaf_count(),
    })
}
