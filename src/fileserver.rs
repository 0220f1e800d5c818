// 🌐 Static File Server - development convenience
//
// GET-only: `/` maps to `index.html`, every other path is percent-decoded
// and resolved under a fixed document root. Known extensions get their
// content type from a fixed table, anything else is served as a generic
// binary. Missing files (and anything trying to escape the root) get a
// fixed 404 with the body "Not found".

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Body of every 404 response
pub const NOT_FOUND_BODY: &str = "Not found";

/// Default port of the dev server
pub const DEFAULT_PORT: u16 = 8080;

// ============================================================================
// CONTENT TYPES
// ============================================================================

/// Content type for a file path, from the fixed extension table.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// PATH RESOLUTION
// ============================================================================

/// Resolve a raw request path to a file under the document root.
///
/// Strips any query string, percent-decodes, maps `/` to `/index.html`, and
/// rejects any component that would climb out of the root. `None` means the
/// request gets the fixed 404.
pub fn resolve_request_path(root: &Path, raw_path: &str) -> Option<PathBuf> {
    let path = raw_path.split('?').next().unwrap_or(raw_path);

    let decoded = urlencoding::decode(path)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let rel = if decoded == "/" || decoded.is_empty() {
        "index.html".to_string()
    } else {
        decoded.trim_start_matches('/').to_string()
    };

    let mut full = root.to_path_buf();
    for component in Path::new(&rel).components() {
        match component {
            Component::Normal(part) => full.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, Prefix: would escape the root
            _ => return None,
        }
    }

    Some(full)
}

// ============================================================================
// ROUTER
// ============================================================================

#[derive(Clone)]
struct ServeState {
    root: Arc<PathBuf>,
}

/// Build the router serving files under `root`.
pub fn router(root: PathBuf) -> Router {
    let state = ServeState {
        root: Arc::new(root),
    };

    Router::new()
        .route("/", get(serve_file))
        .route("/*path", get(serve_file))
        .with_state(state)
}

async fn serve_file(State(state): State<ServeState>, uri: Uri) -> Response {
    let Some(path) = resolve_request_path(&state.root, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Serve the document root on the given port until the process exits.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    use anyhow::Context;

    let app = router(root);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    axum::serve(listener, app)
        .await
        .context("Server stopped unexpectedly")?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn site_root() -> PathBuf {
        // Package root is the cwd under `cargo test`
        PathBuf::from("site")
    }

    async fn get_path(path: &str) -> Response {
        router(site_root())
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_serves_index_html() {
        let response = get_path("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_fixed_404() {
        let response = get_path("/missing.png").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
    }

    #[tokio::test]
    async fn test_css_gets_its_content_type() {
        let response = get_path("/styles.css").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[tokio::test]
    async fn test_query_string_is_ignored() {
        let response = get_path("/index.html?cache=1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_traversal_cannot_escape_root() {
        let response = get_path("/%2e%2e/Cargo.toml").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_content_type_table() {
        assert_eq!(content_type_for(Path::new("a/index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("styles.css")), "text/css");
        assert_eq!(
            content_type_for(Path::new("app.js")),
            "application/javascript"
        );
        assert_eq!(content_type_for(Path::new("logo.PNG")), "image/png");
        assert_eq!(content_type_for(Path::new("bg.jpg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("icon.svg")), "image/svg+xml");
        assert_eq!(
            content_type_for(Path::new("portfolio.json")),
            "application/json"
        );
        assert_eq!(content_type_for(Path::new("font.woff2")), "font/woff2");
        // Unknown or missing extension: generic binary
        assert_eq!(
            content_type_for(Path::new("archive.tar.gz")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("LICENSE")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_resolve_maps_root_to_index() {
        let root = Path::new("site");
        assert_eq!(
            resolve_request_path(root, "/"),
            Some(PathBuf::from("site/index.html"))
        );
    }

    #[test]
    fn test_resolve_decodes_percent_encoding() {
        let root = Path::new("site");
        assert_eq!(
            resolve_request_path(root, "/assets/vast%20bg.png"),
            Some(PathBuf::from("site/assets/vast bg.png"))
        );
    }

    #[test]
    fn test_resolve_rejects_parent_components() {
        let root = Path::new("site");
        assert_eq!(resolve_request_path(root, "/../secrets.txt"), None);
        assert_eq!(resolve_request_path(root, "/a/../../b"), None);
    }

    #[test]
    fn test_resolve_strips_query() {
        let root = Path::new("site");
        assert_eq!(
            resolve_request_path(root, "/app.js?v=3"),
            Some(PathBuf::from("site/app.js"))
        );
    }
}
