//! Static site export.
//!
//! Renders every page `SiteRoute::static_paths` lists by serving the real
//! router on an ephemeral loopback port and fetching each path, then copies
//! the WASM bundle and assets next to the pages. The output directory can be
//! hosted by any static file server.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use reqwest::redirect::Policy;

use client::routes::SiteRoute;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Errors produced while exporting the site.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem access failed.
    #[error("io failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be built or the page request failed.
    #[error("fetching {path} failed: {source}")]
    Fetch {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A page answered with something other than 200.
    #[error("fetching {path} returned status {status}")]
    Status { path: String, status: u16 },
}

/// What an export wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub files_copied: usize,
}

/// File, relative to the output directory, that holds the page for
/// `route_path`.
pub fn export_file_for(route_path: &str) -> PathBuf {
    let trimmed = route_path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

/// Render all static pages from `router` into `out_dir` and copy the bundle
/// and assets named by `config`.
///
/// # Errors
///
/// Returns an error if a page cannot be fetched or answers with a non-200
/// status, or if writing the output fails.
pub async fn export_site(router: Router, config: &ServerConfig, out_dir: &Path) -> Result<ExportSummary, ExportError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(io_err("127.0.0.1:0"))?;
    let addr = listener.local_addr().map_err(io_err("127.0.0.1:0"))?;
    let server = tokio::spawn(async move { axum::serve(listener, router).await });

    let pages = SiteRoute::static_paths();
    let fetched = fetch_pages(addr, &pages).await;
    server.abort();
    let fetched = fetched?;

    let mut summary = ExportSummary::default();
    for (route_path, html) in pages.iter().zip(fetched) {
        let file = out_dir.join(export_file_for(route_path));
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        std::fs::write(&file, html).map_err(io_err(&file))?;
        tracing::info!(route = %route_path, file = %file.display(), "exported page");
        summary.pages += 1;
    }

    for (from, name) in [(config.pkg_dir(), "pkg"), (config.assets_dir.clone(), "assets")] {
        if !from.is_dir() {
            tracing::warn!(dir = %from.display(), "skipping missing directory");
            continue;
        }
        summary.files_copied += copy_dir_recursive(&from, &out_dir.join(name))?;
    }

    Ok(summary)
}

async fn fetch_pages(addr: SocketAddr, pages: &[String]) -> Result<Vec<String>, ExportError> {
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .map_err(|source| ExportError::Fetch { path: String::new(), source })?;

    futures::future::try_join_all(pages.iter().map(|path| fetch_page(&client, addr, path))).await
}

async fn fetch_page(client: &reqwest::Client, addr: SocketAddr, path: &str) -> Result<String, ExportError> {
    let url = format!("http://{addr}{path}");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|source| ExportError::Fetch { path: path.to_owned(), source })?;
    if resp.status() != reqwest::StatusCode::OK {
        return Err(ExportError::Status { path: path.to_owned(), status: resp.status().as_u16() });
    }
    resp.text()
        .await
        .map_err(|source| ExportError::Fetch { path: path.to_owned(), source })
}

/// Copy a directory tree. Returns the number of files copied.
fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize, ExportError> {
    std::fs::create_dir_all(to).map_err(io_err(to))?;

    let mut copied = 0;
    for entry in std::fs::read_dir(from).map_err(io_err(from))? {
        let entry = entry.map_err(io_err(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copied += copy_dir_recursive(&source, &target)?;
        } else {
            std::fs::copy(&source, &target).map_err(io_err(&source))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn io_err(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> ExportError {
    let path = path.as_ref().to_path_buf();
    move |source| ExportError::Io { path, source }
}
