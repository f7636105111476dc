//! Static site build command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use marquee_static::{SiteBuilder, SiteConfig};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSettings,
    #[serde(default)]
    build: BuildSettings,
    #[serde(default)]
    showcase: ShowcaseSettings,
}

#[derive(Debug, Deserialize)]
struct SiteSettings {
    #[serde(default = "default_content_dir")]
    content: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    tagline: String,
    #[serde(default = "default_base_url")]
    base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            content: default_content_dir(),
            output: default_output(),
            title: default_title(),
            tagline: String::new(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_minify")]
    minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShowcaseSettings {
    /// Optional TOML file of samples; embedded defaults otherwise
    #[serde(default)]
    file: Option<String>,
    #[serde(default = "default_interval_ms")]
    interval_ms: u64,
    #[serde(default = "default_cooldown_ms")]
    cooldown_ms: u64,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            file: None,
            interval_ms: default_interval_ms(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Documentation".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_interval_ms() -> u64 {
    3000
}
fn default_cooldown_ms() -> u64 {
    5000
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("site.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read site.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse site.toml: {}", e))?;
        tracing::info!("Loaded config from site.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config()?;

    let config = SiteConfig {
        content_dir: PathBuf::from(&file_config.site.content),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        title: file_config.site.title,
        tagline: file_config.site.tagline,
        base_url: file_config.site.base_url,
        minify: minify.unwrap_or(file_config.build.minify),
        showcase_file: file_config.showcase.file.map(PathBuf::from),
        interval_ms: file_config.showcase.interval_ms,
        cooldown_ms: file_config.showcase.cooldown_ms,
    };

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages with {} reference entries in {}ms",
        result.pages,
        result.entries,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
