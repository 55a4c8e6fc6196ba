//! Request dispatch module
//!
//! Entry point for HTTP request processing: method gate first, then path
//! resolution, then file resolution and serving, with every failure mapped
//! to exactly one status code.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};

use super::error::ServeError;
use super::{resolve, static_files};
use crate::config::ServerContext;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    ctx: Arc<ServerContext>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let is_head = method == Method::HEAD;

    let response = match process(&method, req.uri().path(), is_head, &ctx).await {
        Ok(resp) => resp,
        Err(err) => {
            log_rejection(err, &method, req.uri().path());
            error_response(err)
        }
    };

    if ctx.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.to_string(),
            time: Local::now(),
            method: method.to_string(),
            path: req.uri().path().to_string(),
            query: req.uri().query().map(ToString::to_string),
            http_version: format!("{:?}", req.version()),
            status: response.status().as_u16(),
            body_bytes: body_size(&response),
            referer: header_value(&req, "referer"),
            user_agent: header_value(&req, "user-agent"),
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &ctx.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run a request through the resolution pipeline.
///
/// The method gate comes first so a disallowed method is rejected before
/// any filesystem access occurs.
async fn process(
    method: &Method,
    path: &str,
    is_head: bool,
    ctx: &Arc<ServerContext>,
) -> Result<Response<Full<Bytes>>, ServeError> {
    check_method(method)?;

    let confined = resolve::resolve_request_path(path, &ctx.root)?;
    let file = static_files::resolve_file(confined).await?;

    static_files::serve_file(file, is_head).await
}

/// Only GET and HEAD reach the filesystem
fn check_method(method: &Method) -> Result<(), ServeError> {
    match *method {
        Method::GET | Method::HEAD => Ok(()),
        _ => Err(ServeError::MethodNotAllowed),
    }
}

/// Map a failure kind to its response
fn error_response(err: ServeError) -> Response<Full<Bytes>> {
    match err {
        ServeError::BadRequest => http::build_400_response(),
        ServeError::NotFound => http::build_404_response(),
        ServeError::MethodNotAllowed => http::build_405_response(),
        ServeError::Internal => http::build_500_response(),
    }
}

fn log_rejection(err: ServeError, method: &Method, path: &str) {
    match err {
        ServeError::BadRequest => {
            logger::log_warning(&format!("Rejected request path: {path}"));
        }
        ServeError::MethodNotAllowed => {
            logger::log_warning(&format!("Method not allowed: {method}"));
        }
        ServeError::Internal => {
            logger::log_error(&format!("Read failed for resolved file: {path}"));
        }
        ServeError::NotFound => {} // common case, not worth a log line
    }
}

/// Exact body size of an outgoing response (zero for HEAD)
fn body_size(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
