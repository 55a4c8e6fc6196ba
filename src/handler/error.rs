//! Request failure taxonomy.

use thiserror::Error;

/// Terminal failure kinds for a single request.
///
/// Filesystem and decoding errors are translated into one of these at the
/// boundary of the component that produced them; no variant carries the
/// underlying error, so no OS detail can reach a response body. Each kind
/// maps to exactly one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServeError {
    /// Malformed or root-escaping request target (400).
    #[error("bad request")]
    BadRequest,
    /// No resolvable regular file: missing, unreadable, special, or a
    /// directory without an index file (404).
    #[error("not found")]
    NotFound,
    /// Method outside the accepted GET/HEAD set (405).
    #[error("method not allowed")]
    MethodNotAllowed,
    /// File read failure after a successful stat (500).
    #[error("internal server error")]
    Internal,
}
