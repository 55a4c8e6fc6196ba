//! Static file serving module
//!
//! Turns a confined absolute path into a servable regular file (resolving
//! directories to their index file) and builds the streamed response.

use std::path::PathBuf;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use super::error::ServeError;
use crate::http::{self, mime};

const INDEX_FILE: &str = "index.html";

/// A path confirmed to denote a regular file, with the metadata needed to
/// emit response headers. Produced per request, never cached.
#[derive(Debug)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub size: u64,
    pub content_type: &'static str,
}

/// Resolve a confined path to a servable regular file.
///
/// A directory resolves to its `index.html` when that is a regular file;
/// directory listings are never generated. Every stat failure collapses to
/// `NotFound`, so missing, unreadable, and special files are
/// indistinguishable to the client.
pub async fn resolve_file(path: PathBuf) -> Result<ResolvedFile, ServeError> {
    let meta = fs::metadata(&path).await.map_err(|_| ServeError::NotFound)?;

    let (path, meta) = if meta.is_dir() {
        let index = path.join(INDEX_FILE);
        let index_meta = fs::metadata(&index)
            .await
            .map_err(|_| ServeError::NotFound)?;
        (index, index_meta)
    } else {
        (path, meta)
    };

    if !meta.is_file() {
        return Err(ServeError::NotFound);
    }

    let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));

    Ok(ResolvedFile {
        path,
        size: meta.len(),
        content_type,
    })
}

/// Serve a resolved file.
///
/// HEAD emits the same headers as GET without touching the file content.
/// For GET the content is read in full; a read failure after the successful
/// stat (the file may have disappeared in between) surfaces as `Internal`.
pub async fn serve_file(
    file: ResolvedFile,
    is_head: bool,
) -> Result<Response<Full<Bytes>>, ServeError> {
    if is_head {
        return Ok(http::build_file_response(
            Bytes::new(),
            file.content_type,
            file.size,
        ));
    }

    let content = fs::read(&file.path)
        .await
        .map_err(|_| ServeError::Internal)?;
    let size = content.len() as u64;

    Ok(http::build_file_response(
        Bytes::from(content),
        file.content_type,
        size,
    ))
}
