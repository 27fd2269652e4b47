//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::mockup::MockupViewport;
use crate::model::{load_business, slugify, Business, BusinessFormat};
use crate::render::{RenderedSite, SiteRenderer};
use crate::templates::SiteLink;

/// Configuration for building sites.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory containing business files
    pub input_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify generated stylesheets
    pub minify: bool,

    /// Base URL the output directory is served under
    pub base_url: String,

    /// Title of the overview page
    pub title: String,

    /// Render a browser mockup page per site
    pub mockup: Option<MockupViewport>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("sites"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "Storefront".to_string(),
            mockup: Some(MockupViewport::default()),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sites generated
    pub sites: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error(transparent)]
    Load(#[from] crate::model::LoadError),

    #[error("Cannot derive a slug for {0}; set `slug` in the file")]
    EmptySlug(String),

    #[error("Slug '{slug}' is used by both {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("Failed to render {slug}: {message}")]
    RenderError { slug: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A business file found in the input directory.
#[derive(Debug)]
struct SiteSource {
    path: PathBuf,
    slug: String,
    business: Business,
}

/// Builds one page per business file.
pub struct SiteBuilder {
    config: BuildConfig,
    renderer: SiteRenderer,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        let mut renderer = SiteRenderer::new(config.minify);
        if let Some(viewport) = config.mockup {
            renderer = renderer.with_mockup(viewport);
        }

        Self { config, renderer }
    }

    /// Build all sites.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let sources = self.discover_sites()?;
        tracing::info!(
            "Found {} business files in {}",
            sources.len(),
            self.config.input_dir.display()
        );

        // Render and write in parallel
        let results: Vec<Result<RenderedSite, BuildError>> = sources
            .par_iter()
            .map(|source| self.build_site(source))
            .collect();

        let mut rendered = Vec::with_capacity(results.len());
        for result in results {
            rendered.push(result?);
        }

        self.generate_index(&rendered)?;
        self.generate_manifest(&rendered)?;
        self.generate_sitemap(&rendered)?;

        Ok(BuildResult {
            sites: rendered.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Find and load all business files, sorted by slug.
    fn discover_sites(&self) -> Result<Vec<SiteSource>, BuildError> {
        if !self.config.input_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Sites directory not found: {}",
                self.config.input_dir.display()
            )));
        }

        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.config.input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || BusinessFormat::from_path(path).is_none() {
                continue;
            }

            let mut business = load_business(path)?;
            let slug = site_slug(&mut business, path)?;
            sources.push(SiteSource {
                path: path.to_path_buf(),
                slug,
                business,
            });
        }

        sources.sort_by(|a, b| a.slug.cmp(&b.slug));

        // Sorted, so duplicates are adjacent
        if let Some(pair) = sources.windows(2).find(|pair| pair[0].slug == pair[1].slug) {
            return Err(BuildError::DuplicateSlug {
                slug: pair[0].slug.clone(),
                first: pair[0].path.display().to_string(),
                second: pair[1].path.display().to_string(),
            });
        }

        Ok(sources)
    }

    /// Render one business and write its files.
    fn build_site(&self, source: &SiteSource) -> Result<RenderedSite, BuildError> {
        let site = self
            .renderer
            .render(&source.business)
            .map_err(|e| BuildError::RenderError {
                slug: source.slug.clone(),
                message: e.to_string(),
            })?;

        let site_dir = self.config.output_dir.join(&site.slug);
        fs::create_dir_all(&site_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        write_file(&site_dir.join("index.html"), &site.html)?;
        write_file(&site_dir.join("theme.css"), &site.css)?;
        if let Some(preview) = &site.preview {
            write_file(&site_dir.join("preview.html"), preview)?;
        }

        tracing::info!("Built {} from {}", site.slug, source.path.display());

        Ok(site)
    }

    fn site_url(&self, slug: &str) -> String {
        format!("{}/{}/", self.config.base_url.trim_end_matches('/'), slug)
    }

    /// Generate the overview page.
    fn generate_index(&self, sites: &[RenderedSite]) -> Result<(), BuildError> {
        let links: Vec<SiteLink> = sites
            .iter()
            .map(|site| {
                let href = self.site_url(&site.slug);
                SiteLink {
                    name: site.name.clone(),
                    industry_name: site.industry.profile().name.to_string(),
                    layout: site.layout.to_string(),
                    preview_href: site
                        .preview
                        .as_ref()
                        .map(|_| format!("{}preview.html", href)),
                    href,
                }
            })
            .collect();

        let html = self
            .renderer
            .templates()
            .render_index(&self.config.title, &links)
            .map_err(|e| BuildError::RenderError {
                slug: "index".to_string(),
                message: e.to_string(),
            })?;

        write_file(&self.config.output_dir.join("index.html"), &html)
    }

    /// Generate a machine-readable list of the built sites.
    fn generate_manifest(&self, sites: &[RenderedSite]) -> Result<(), BuildError> {
        let manifest: Vec<serde_json::Value> = sites
            .iter()
            .map(|site| {
                serde_json::json!({
                    "name": site.name,
                    "slug": site.slug,
                    "industry": site.industry,
                    "layout": site.layout,
                    "url": self.site_url(&site.slug),
                    "preview": site.preview.is_some(),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        write_file(&self.config.output_dir.join("sites.json"), &json)
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, sites: &[RenderedSite]) -> Result<(), BuildError> {
        let urls: Vec<String> = sites
            .iter()
            .map(|site| format!("  <url>\n    <loc>{}</loc>\n  </url>", self.site_url(&site.slug)))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        write_file(&self.config.output_dir.join("sitemap.xml"), &sitemap)?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml",
            self.config.base_url.trim_end_matches('/')
        );
        write_file(&self.config.output_dir.join("robots.txt"), &robots)
    }
}

/// Output directory name for a business.
///
/// Names without any transliterable characters (`北京饭店`) fall back to the
/// file stem, which is stored as the business slug so rendering agrees.
fn site_slug(business: &mut Business, path: &Path) -> Result<String, BuildError> {
    let slug = business.slug();
    if !slug.is_empty() {
        return Ok(slug);
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(slugify)
        .unwrap_or_default();
    if stem.is_empty() {
        return Err(BuildError::EmptySlug(path.display().to_string()));
    }

    tracing::warn!(
        "{} has no usable name for a slug, using '{}'",
        path.display(),
        stem
    );
    business.slug = Some(stem.clone());
    Ok(stem)
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}
