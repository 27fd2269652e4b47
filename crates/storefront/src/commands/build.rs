//! Site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use storefront_site::SiteBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building sites...");

    let config = load_config(config_path)?.build_config(output, minify);

    let result = SiteBuilder::new(config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!("Built {} sites in {}ms", result.sites, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
