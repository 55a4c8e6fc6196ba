//! HTTP response building.
//!
//! Builders for the status codes this server can emit, decoupled from the
//! file-serving logic. Every response carries the permissive CORS header and
//! disables caching, matching the success path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Builder pre-populated with the headers present on every response.
fn base_builder(status: u16) -> hyper::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Cache-Control", "no-store")
}

/// Build a 200 response for a resolved file.
///
/// `content_length` is reported from the file's byte size, so a HEAD
/// response carries the same headers as a GET while the body stays empty.
pub fn build_file_response(
    body: Bytes,
    content_type: &'static str,
    content_length: u64,
) -> Response<Full<Bytes>> {
    base_builder(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response() -> Response<Full<Bytes>> {
    build_text_response(400, "Bad Request")
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(404, "Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    base_builder(405)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_text_response(500, "Internal Server Error")
}

/// Build a short plain-text response with the shared header set.
fn build_text_response(status: u16, body: &'static str) -> Response<Full<Bytes>> {
    base_builder(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("plain-text", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
