//! Request handler module
//!
//! Responsible for turning an inbound request into a file response: method
//! gate, path confinement, file resolution, and response building.

mod error;
mod resolve;
pub mod router;
mod static_files;

// Re-export main entry point
pub use router::handle_request;
