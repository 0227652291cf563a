//! The sync pipeline: fetch, map, validate, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Instrument, info, info_span};

use tokens_export::build_token_files;
use tokens_figma::{FigmaClient, Transport};
use tokens_output::{WriteOptions, WrittenFile, write_token_files};

use crate::config::SyncConfig;
use crate::error::SyncError;

/// Outcome of syncing one source file.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub file_key: String,
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

impl SourceReport {
    pub fn token_count(&self) -> usize {
        self.files.iter().map(|file| file.tokens).sum()
    }
}

/// Sync one source file into `output_dir`.
pub async fn sync_source<T: Transport>(
    client: &FigmaClient<T>,
    file_key: &str,
    output_dir: &Path,
    options: WriteOptions,
) -> Result<SourceReport> {
    let response = client
        .get_local_variables(file_key)
        .await
        .context("failed to fetch local variables")?;
    let dataset = response.meta;
    if dataset.is_empty() {
        return Err(SyncError::EmptyDataset {
            file_key: file_key.to_string(),
        }
        .into());
    }
    info!(
        variables = dataset.variables.len(),
        local = dataset.local_variable_count(),
        collections = dataset.variable_collections.len(),
        "fetched variables"
    );

    let files = build_token_files(&dataset).context("failed to build token files")?;
    if files.is_empty() {
        return Err(SyncError::NoTokenFiles {
            file_key: file_key.to_string(),
        }
        .into());
    }

    let files = write_token_files(output_dir, &files, options)
        .with_context(|| format!("failed to write token files to {}", output_dir.display()))?;
    Ok(SourceReport {
        file_key: file_key.to_string(),
        output_dir: output_dir.to_path_buf(),
        files,
    })
}

/// Sync every configured source, in order.
///
/// Stops at the first failing source; sources completed before it keep
/// their files on disk.
pub async fn run_sync<T: Transport>(
    client: &FigmaClient<T>,
    config: &SyncConfig,
) -> Result<Vec<SourceReport>> {
    let options = WriteOptions {
        dry_run: config.dry_run,
    };
    let mut reports = Vec::with_capacity(config.file_keys.len());
    for file_key in &config.file_keys {
        let output_dir = config.output_dir_for(file_key);
        let span = info_span!("sync", file_key = %file_key);
        let report = sync_source(client, file_key, &output_dir, options)
            .instrument(span)
            .await
            .with_context(|| format!("sync failed for file {file_key}"))?;
        reports.push(report);
    }
    Ok(reports)
}
