//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing marquee site...");

    let content_dir = Path::new("content");

    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    let request_path = content_dir.join("web-request.yaml");
    if !request_path.exists() || yes {
        fs::write(&request_path, DEFAULT_REQUEST_PAGE)
            .context("Failed to write content/web-request.yaml")?;
        tracing::info!("Created content/web-request.yaml");
    }

    let response_path = content_dir.join("web-response.yaml");
    if !response_path.exists() || yes {
        fs::write(&response_path, DEFAULT_RESPONSE_PAGE)
            .context("Failed to write content/web-response.yaml")?;
        tracing::info!("Created content/web-response.yaml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'marquee build' and then 'marquee serve' to preview the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Marquee configuration

[site]
# Source directory for reference pages
content = "content"

# Output directory for the built site
output = "dist"

# Site title and landing-page tagline
title = "My Framework"
tagline = "Type-safe routes from request to response"

# Base URL (for deployment)
base_url = "/"

[build]
# Enable CSS minification
minify = true

[showcase]
# Landing-page rotation timing (milliseconds)
interval_ms = 3000
cooldown_ms = 5000

# Uncomment to replace the built-in samples
# file = "content/showcase.toml"
"#;

const DEFAULT_REQUEST_PAGE: &str = r#"title: Web.Request
intro: Builders for the request side of a route.
order: 1
entries:
  - kind: function
    name: capture
    signature: "capture :: FromParam a => Text -> PathSpec a"
    module: Web.Request.Path
    since: "0.1"
    description: Capture a typed path segment under the given name.
    example: |
      userId <- capture @Int "id"

  - kind: function
    name: param
    signature: "param :: FromParam a => Text -> QuerySpec a"
    module: Web.Request.Query
    description: Read a required query parameter.

  - kind: data
    name: Method
    description: HTTP request methods.
    constructors:
      - name: GET
      - name: POST
      - name: PUT
      - name: DELETE
    instances:
      - instance Show Method
      - instance Eq Method

  - kind: class
    name: FromParam
    params: [a]
    description: Types that can be decoded from a path or query parameter.
    methods:
      - name: fromParam
        signature: "fromParam :: Text -> Maybe a"
        description: Decode a raw parameter value.
    laws:
      - fromParam . toParam == Just
"#;

const DEFAULT_RESPONSE_PAGE: &str = r#"title: Web.Response
intro: Builders for the response side of a route.
order: 2
entries:
  - kind: function
    name: status
    signature: "status :: Int -> ResponseSpec -> ResponseSpec"
    module: Web.Response
    description: Set the response status code.

  - kind: newtype
    name: Body
    params: [a]
    description: Typed response body.
    instances:
      - instance ToJSON a => ToResponse (Body a)

  - kind: value
    name: none
    signature: "none :: HeaderSpec ()"
    description: The empty header specification.
"#;
