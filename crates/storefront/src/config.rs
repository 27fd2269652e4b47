//! Configuration file (storefront.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use storefront_site::{BuildConfig, MockupViewport};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub sites: SitesConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SitesConfig {
    /// Directory containing business files
    #[serde(default = "default_sites_dir")]
    pub dir: String,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            dir: default_sites_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Mockup geometry; `mockup = false` disables preview pages
    #[serde(default)]
    pub mockup: MockupSetting,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: default_minify(),
            base_url: default_base_url(),
            title: default_title(),
            mockup: MockupSetting::default(),
        }
    }
}

/// Either a switch or a viewport table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MockupSetting {
    Enabled(bool),
    Viewport(MockupViewport),
}

impl Default for MockupSetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl MockupSetting {
    pub fn viewport(&self) -> Option<MockupViewport> {
        match self {
            Self::Enabled(true) => Some(MockupViewport::default()),
            Self::Enabled(false) => None,
            Self::Viewport(viewport) => Some(*viewport),
        }
    }
}

fn default_sites_dir() -> String {
    "sites".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_title() -> String {
    "Storefront".to_string()
}

/// Load configuration if the file exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

impl ConfigFile {
    /// Builder settings, with command-line overrides applied.
    pub fn build_config(self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            input_dir: PathBuf::from(&self.sites.dir),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.build.output)),
            minify: minify.unwrap_or(self.build.minify),
            mockup: self.build.mockup.viewport(),
            base_url: self.build.base_url,
            title: self.build.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("storefront.toml")).unwrap();
        let build = config.build_config(None, None);

        assert_eq!(build.input_dir, PathBuf::from("sites"));
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert!(build.minify);
        assert_eq!(build.mockup, Some(MockupViewport::default()));
    }

    #[test]
    fn flags_override_file_values() {
        let config: ConfigFile = toml::from_str(
            "[sites]\ndir = \"kunden\"\n[build]\noutput = \"public\"\nminify = true\ntitle = \"Kunden\"\n",
        )
        .unwrap();

        let build = config.build_config(Some(PathBuf::from("out")), Some(false));
        assert_eq!(build.input_dir, PathBuf::from("kunden"));
        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert!(!build.minify);
        assert_eq!(build.title, "Kunden");
        assert_eq!(build.base_url, "/");
    }

    #[test]
    fn mockup_accepts_switch_or_table() {
        let config: ConfigFile = toml::from_str("[build]\nmockup = false\n").unwrap();
        assert_eq!(config.build.mockup.viewport(), None);

        let config: ConfigFile =
            toml::from_str("[build.mockup]\nframe_width = 720.0\n").unwrap();
        let viewport = config.build.mockup.viewport().unwrap();
        assert_eq!(viewport.frame_width, 720.0);
        assert_eq!(viewport.content_width, 1440.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("storefront.toml");
        fs::write(&path, "[build\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
