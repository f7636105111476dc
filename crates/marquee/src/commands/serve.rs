//! Preview server command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf) -> Result<()> {
    if !dir.join("index.html").exists() {
        anyhow::bail!(
            "No built site in {}. Run 'marquee build' first.",
            dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let url = format!("http://{}", addr);
    tracing::info!("Previewing {} at {}", dir.display(), url);

    let site = ServeDir::new(&dir).append_index_html_on_directories(true);
    let app = Router::new().fallback_service(site);

    // Open browser; ignore failure on headless machines
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}
