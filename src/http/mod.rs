//! HTTP protocol layer module
//!
//! MIME lookup and response builders shared by the request handler,
//! decoupled from the file-serving logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_404_response, build_405_response, build_500_response,
    build_file_response,
};
