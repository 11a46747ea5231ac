//! Target resolution and response construction
//!
//! Maps a parsed request to a file under the document root, applying the
//! access checks before touching the filesystem.

use std::fs::Metadata;
use std::path::PathBuf;

use anyhow::Context;

use crate::http::mime::content_type_for;
use crate::http::parser::ParseError;
use crate::http::request::Request;
use crate::http::response::Response;

/// Serves files from a fixed document root.
///
/// The document root is the only shared resource between connections, and it
/// is read-only, so each connection gets its own cheap clone of this value.
#[derive(Debug, Clone)]
pub struct StaticResponder {
    document_root: PathBuf,
}

impl StaticResponder {
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
        }
    }

    /// Produces the response for one parsed request.
    ///
    /// Decision sequence, first match wins:
    ///
    /// 1. parse failure → 400
    /// 2. method other than GET → 501
    /// 3. target containing ".." → 403, before any filesystem access
    /// 4. target does not resolve to a file → 404
    /// 5. owner-read permission bit unset → 403
    /// 6. 200 with the whole file buffered as the body
    ///
    /// A failed read, or a read that yields fewer bytes than the file's
    /// reported size, is an `Err`: the connection aborts with nothing sent.
    pub async fn respond(
        &self,
        parsed: Result<Request, ParseError>,
    ) -> anyhow::Result<Response> {
        let req = match parsed {
            Ok(req) => req,
            Err(_) => return Ok(Response::bad_request()),
        };

        if !req.is_get() {
            return Ok(Response::not_implemented());
        }

        // The target is untrusted; reject traversal before the path is ever
        // handed to the filesystem.
        if req.target.contains("..") {
            tracing::warn!(target = %req.target, "Rejected traversal attempt");
            return Ok(Response::forbidden());
        }

        let path = self
            .document_root
            .join(req.target.trim_start_matches('/'));

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(target = %req.target, "File not found: {}", e);
                return Ok(Response::not_found());
            }
        };

        if !owner_readable(&metadata) {
            return Ok(Response::forbidden());
        }

        let contents = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;

        if contents.len() as u64 != metadata.len() {
            anyhow::bail!(
                "short read on {}: got {} of {} bytes",
                path.display(),
                contents.len(),
                metadata.len()
            );
        }

        Ok(Response::ok(content_type_for(&req.target), contents))
    }
}

#[cfg(unix)]
fn owner_readable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o400 != 0
}

#[cfg(not(unix))]
fn owner_readable(_metadata: &Metadata) -> bool {
    true
}
