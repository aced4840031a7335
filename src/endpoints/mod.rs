//! Selection of the endpoint for reading user ACLs.
//!
//! Which REST endpoint serves user ACLs depends on the Chef Server build:
//! - Chef Server after 11.0.1 serves them on the server root (standard API).
//! - Enterprise Chef 11.0.1 and lower only serves them on the internal account service,
//!   which is reachable on the Chef Server itself only.
//! - Otherwise user ACLs cannot be read, and are skipped.
//!
//! [select_endpoint] walks these in that order, unless the version check is skipped,
//! in which case the standard API is used without any check.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
