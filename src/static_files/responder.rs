use std::path::Path;

use tracing::{debug, warn};

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Content, Response};
use crate::static_files::root::{DocumentRoot, Resolved};

/// Media type of index documents.
pub const INDEX_MEDIA_TYPE: &str = "text/html; charset=utf-8";

/// Produces the response for a request.
///
/// Checks run in a fixed order and the first match wins:
/// 1. non-GET methods get 405 before the filesystem is touched
/// 2. targets resolving outside the root get 404
/// 3. directories without a trailing slash get a 301 to `target/`
/// 4. directories with a trailing slash get their `index.html`
/// 5. regular files are returned as-is, typed by the requested name
/// 6. anything else is 404
pub async fn respond(req: &Request, root: &DocumentRoot) -> Response {
    if req.method != Method::GET {
        return Response::method_not_allowed();
    }

    match root.resolve(&req.target).await {
        Resolved::Outside(resolved) => {
            warn!(
                path = %req.target,
                resolved = %resolved.display(),
                "Path traversal attempt blocked"
            );
            Response::not_found()
        }
        Resolved::Missing => Response::not_found(),
        Resolved::Directory(_) if !req.has_trailing_slash() => {
            Response::redirect(format!("{}/", req.target))
        }
        Resolved::Directory(dir) => serve_index(root, &dir).await,
        Resolved::File(path) => serve_file(&path, &req.target).await,
    }
}

async fn serve_index(root: &DocumentRoot, dir: &Path) -> Response {
    let path = match root.resolve_index(dir).await {
        Resolved::File(path) => path,
        other => {
            debug!(dir = %dir.display(), outcome = ?other, "No usable index document");
            return Response::not_found();
        }
    };

    match read_file(&path).await {
        Some(body) => Response::ok(Content::new(body, INDEX_MEDIA_TYPE)),
        None => Response::not_found(),
    }
}

/// The media type follows the name the client asked for, not the file a
/// symlink points at.
async fn serve_file(path: &Path, target: &str) -> Response {
    match read_file(path).await {
        Some(body) => Response::ok(Content::new(body, mime::media_type_for(Path::new(target)))),
        None => Response::not_found(),
    }
}

async fn read_file(path: &Path) -> Option<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read file");
            None
        }
    }
}
