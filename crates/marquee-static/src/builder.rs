//! Site builder.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Deserialize;
use walkdir::WalkDir;

use marquee_ref::{ExpandState, FilterState, ReferencePage};
use marquee_widgets::{default_tabs, page_export, Carousel, CarouselConfig, ShowcaseTab};

use crate::assets::AssetPipeline;
use crate::templates::{
    filter_contexts, markdown_to_html, EntryCtx, PageLink, SampleCtx, TemplateEngine,
};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory of authored reference YAML files
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Site title
    pub title: String,

    /// Landing-page tagline
    pub tagline: String,

    /// Base URL for the site
    pub base_url: String,

    /// Minify CSS output
    pub minify: bool,

    /// Optional showcase sample file (TOML); embedded defaults otherwise
    pub showcase_file: Option<PathBuf>,

    /// Showcase auto-advance period in milliseconds
    pub interval_ms: u64,

    /// Showcase manual-selection cooldown in milliseconds
    pub cooldown_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            title: "Documentation".to_string(),
            tagline: String::new(),
            base_url: "/".to_string(),
            minify: true,
            showcase_file: None,
            interval_ms: 3000,
            cooldown_ms: 5000,
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Reference pages generated (excluding the landing page)
    pub pages: usize,

    /// Reference entries rendered
    pub entries: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read content: {0}")]
    ReadError(String),

    #[error("Failed to parse reference page: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A discovered reference page ready to build.
#[derive(Debug)]
struct PageInfo {
    /// Parsed document
    page: ReferencePage,

    /// Output directory for this page (holds index.html and index.md)
    page_dir: PathBuf,

    /// URL of the page
    url: String,
}

/// Showcase sample file structure.
#[derive(Debug, Deserialize)]
struct ShowcaseFile {
    #[serde(default)]
    tab: Vec<ShowcaseTab>,
}

/// Static site builder.
pub struct SiteBuilder {
    config: SiteConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let pages = self.discover_pages()?;

        let links: Vec<PageLink> = pages
            .iter()
            .map(|p| PageLink {
                title: p.page.title.clone(),
                path: p.url.clone(),
            })
            .collect();

        let results: Vec<Result<usize, BuildError>> =
            pages.par_iter().map(|page| self.build_page(page)).collect();

        let mut total_entries = 0;
        for result in results {
            total_entries += result?;
        }

        self.build_home(&links)?;
        self.generate_assets()?;
        self.generate_search_index(&pages)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: pages.len(),
            entries: total_entries,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover reference pages in the content directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let mut pages = Vec::new();

        if !self.config.content_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Content directory not found: {}",
                self.config.content_dir.display()
            )));
        }

        for entry in WalkDir::new(&self.config.content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "yaml" && ext != "yml" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

            let page = ReferencePage::parse(&content).map_err(|e| BuildError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let slug = page.slug.clone().unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("page")
                    .to_string()
            });

            let page_dir = self.config.output_dir.join(&slug);
            let url = format!("{}{}/", self.config.base_url, slug);

            pages.push(PageInfo {
                page,
                page_dir,
                url,
            });
        }

        // Authored order from the page documents
        pages.sort_by_key(|p| p.page.order.unwrap_or(999));

        Ok(pages)
    }

    /// Build one reference page: HTML plus its markdown export.
    fn build_page(&self, info: &PageInfo) -> Result<usize, BuildError> {
        let page = &info.page;

        // Initial view state: no filters, everything collapsed
        let filter_state = FilterState::new();
        let expand_state = ExpandState::new();

        let entries: Vec<EntryCtx> = filter_state
            .visible(&page.entries)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| EntryCtx::new(entry, expand_state.is_expanded(i)))
            .collect();

        let filters = filter_contexts(&page.entries, &filter_state);
        let intro_html = page.intro.as_deref().map(markdown_to_html);

        let html = self
            .templates
            .render_reference(
                &self.config.title,
                &page.title,
                &self.config.base_url,
                intro_html.as_deref(),
                &filters,
                &entries,
                "index.md",
            )
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::create_dir_all(&info.page_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(info.page_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let export = page_export(&page.title, &page_markdown_body(page));
        fs::write(info.page_dir.join("index.md"), export)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(page.entries.len())
    }

    /// Build the landing page with the rotating showcase.
    fn build_home(&self, links: &[PageLink]) -> Result<(), BuildError> {
        let tabs = self.load_showcase();

        let carousel = Carousel::new(
            tabs.len(),
            CarouselConfig {
                interval: Duration::from_millis(self.config.interval_ms),
                cooldown: Duration::from_millis(self.config.cooldown_ms),
            },
        );

        let samples: Vec<SampleCtx> = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| SampleCtx::new(tab, i == carousel.active()))
            .collect();

        let html = self
            .templates
            .render_home(
                &self.config.title,
                &self.config.tagline,
                &self.config.base_url,
                &samples,
                carousel.interval().as_millis() as u64,
                self.config.cooldown_ms,
                links,
            )
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Load showcase samples from the configured file, falling back to the
    /// embedded defaults.
    fn load_showcase(&self) -> Vec<ShowcaseTab> {
        let Some(path) = &self.config.showcase_file else {
            return default_tabs();
        };

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ShowcaseFile>(&content) {
                Ok(file) if !file.tab.is_empty() => file.tab,
                Ok(_) => {
                    tracing::warn!("{} contains no samples, using defaults", path.display());
                    default_tabs()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    default_tabs()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                default_tabs()
            }
        }
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate a search index over all reference entries.
    fn generate_search_index(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = pages
            .iter()
            .flat_map(|info| {
                info.page.entries.iter().map(|entry| {
                    serde_json::json!({
                        "page": info.page.title,
                        "url": info.url,
                        "name": entry.name(),
                        "kind": entry.kind().as_str(),
                        "signature": entry.signature(),
                    })
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }
}

/// Markdown body for a page's clipboard export.
fn page_markdown_body(page: &ReferencePage) -> String {
    let mut body = String::new();

    if let Some(intro) = &page.intro {
        body.push_str(intro.trim_end());
        body.push_str("\n\n");
    }

    for entry in &page.entries {
        body.push_str(&format!("## {}\n\n", entry.name()));
        body.push_str(&format!("```haskell\n{}\n```\n\n", entry.signature()));

        if let Some(description) = &entry.meta().description {
            body.push_str(description.trim_end());
            body.push_str("\n\n");
        }
    }

    body.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_PAGE: &str = r#"
title: Web.Request
intro: Builders for the request side of a route.
order: 1
entries:
  - kind: function
    name: capture
    signature: "capture :: FromParam a => Text -> PathSpec a"
    description: Capture a typed path segment.
  - kind: data
    name: Method
    constructors:
      - name: GET
      - name: POST
"#;

    fn write_content(dir: &std::path::Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("web-request.yaml"), SAMPLE_PAGE).unwrap();
    }

    #[test]
    fn builds_a_simple_site() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_content(&content);

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: out.clone(),
            ..Default::default()
        });

        let result = builder.build().unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.entries, 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("web-request/index.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[test]
    fn writes_markdown_export_next_to_the_page() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_content(&content);

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: out.clone(),
            ..Default::default()
        });
        builder.build().unwrap();

        let export = fs::read_to_string(out.join("web-request/index.md")).unwrap();

        assert!(export.starts_with("# Web.Request\n\n"));
        assert!(export.contains("## capture"));
        assert!(export.contains("```haskell\ncapture :: FromParam a => Text -> PathSpec a\n```"));
    }

    #[test]
    fn landing_page_embeds_showcase_timing() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_content(&content);

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: out.clone(),
            interval_ms: 4000,
            cooldown_ms: 8000,
            ..Default::default()
        });
        builder.build().unwrap();

        let home = fs::read_to_string(out.join("index.html")).unwrap();

        assert!(home.contains("data-interval=\"4000\""));
        assert!(home.contains("data-cooldown=\"8000\""));
        assert!(home.contains("Web.Request"));
    }

    #[test]
    fn showcase_file_overrides_default_samples() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_content(&content);

        let showcase = temp.path().join("showcase.toml");
        fs::write(
            &showcase,
            "[[tab]]\nid = \"hello\"\nlabel = \"Hello\"\ncode = \"main = putStrLn 'hi'\"\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: out.clone(),
            showcase_file: Some(showcase),
            ..Default::default()
        });
        builder.build().unwrap();

        let home = fs::read_to_string(out.join("index.html")).unwrap();

        assert!(home.contains("Hello"));
        assert!(!home.contains("Compose routes into a server"));
    }

    #[test]
    fn search_index_lists_entries() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        write_content(&content);

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: out.clone(),
            ..Default::default()
        });
        builder.build().unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();

        assert!(index.contains("\"capture\""));
        assert!(index.contains("\"data\""));
    }

    #[test]
    fn missing_content_directory_errors() {
        let temp = tempdir().unwrap();

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: temp.path().join("nope"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        });

        let result = builder.build();

        assert!(matches!(result, Err(BuildError::ReadError(_))));
    }

    #[test]
    fn malformed_page_reports_its_path() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("bad.yaml"), "title: [unclosed").unwrap();

        let builder = SiteBuilder::new(SiteConfig {
            content_dir: content,
            output_dir: temp.path().join("dist"),
            ..Default::default()
        });

        match builder.build() {
            Err(BuildError::ParseError { path, .. }) => assert!(path.contains("bad.yaml")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
