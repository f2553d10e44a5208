//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod optimize;
pub mod policy;

// Re-export all handlers for use in router
pub use optimize::*;
pub use policy::*;
