use super::*;

use axum::response::Html;
use axum::routing::get;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-export-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn config_at(root: &Path) -> ServerConfig {
    ServerConfig { port: 0, site_root: root.to_path_buf(), assets_dir: root.join("assets") }
}

fn page_router() -> Router {
    let mut router = Router::new();
    for path in SiteRoute::static_paths() {
        let body = format!("<html><body>{path}</body></html>");
        router = router.route(&path, get(move || async move { Html(body) }));
    }
    router
}

// =============================================================
// export_file_for
// =============================================================

#[test]
fn root_maps_to_index() {
    assert_eq!(export_file_for("/"), PathBuf::from("index.html"));
}

#[test]
fn nested_paths_map_to_directory_index() {
    assert_eq!(export_file_for("/post"), PathBuf::from("post/index.html"));
    assert_eq!(export_file_for("/post/chatbot"), PathBuf::from("post/chatbot/index.html"));
    assert_eq!(export_file_for("/post/chatbot/"), PathBuf::from("post/chatbot/index.html"));
}

// =============================================================
// copy_dir_recursive
// =============================================================

#[test]
fn copy_dir_recursive_counts_files() {
    let root = scratch("copy");
    let from = root.join("from");
    std::fs::create_dir_all(from.join("nested")).unwrap();
    std::fs::write(from.join("a.txt"), "a").unwrap();
    std::fs::write(from.join("nested/b.txt"), "b").unwrap();

    let copied = copy_dir_recursive(&from, &root.join("to")).unwrap();
    assert_eq!(copied, 2);
    assert_eq!(std::fs::read_to_string(root.join("to/nested/b.txt")).unwrap(), "b");

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn copy_dir_recursive_missing_source_is_io_error() {
    let root = scratch("copy-missing");
    let err = copy_dir_recursive(&root.join("absent"), &root.join("to")).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    let _ = std::fs::remove_dir_all(&root);
}

// =============================================================
// export_site
// =============================================================

#[tokio::test]
async fn export_writes_every_page_and_assets() {
    let root = scratch("site");
    let config = config_at(&root.join("site"));
    std::fs::create_dir_all(&config.assets_dir).unwrap();
    std::fs::write(config.assets_dir.join("logo.svg"), "<svg/>").unwrap();
    let out = root.join("out");

    let summary = export_site(page_router(), &config, &out).await.unwrap();

    assert_eq!(summary.pages, SiteRoute::static_paths().len());
    assert_eq!(summary.files_copied, 1);
    let home = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(home.contains("<body>/</body>"));
    let post = std::fs::read_to_string(out.join("post/chatbot/index.html")).unwrap();
    assert!(post.contains("/post/chatbot"));
    assert!(out.join("assets/logo.svg").is_file());
    assert!(!out.join("pkg").exists());

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn export_fails_on_redirecting_page() {
    let root = scratch("redirect");
    let config = config_at(&root.join("site"));

    let err = export_site(crate::routes::static_routes(&config), &config, &root.join("out"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Status { status: 307, .. }), "{err}");
    let _ = std::fs::remove_dir_all(&root);
}
