//! The preflight of a backup or restore, and the [Plan] it produces.
//!
//! [Plan::prepare] runs, in order:
//! - the credential setup ([crate::credentials::set_client_config]),
//! - the path checks for the backup directory and the webui key,
//! - the concurrency configuration ([crate::concurrency::ConcurrencyLevel::configure]),
//! - the user ACL endpoint selection ([crate::endpoints::select_endpoint]).
//!
//! The transfer pipeline takes it from there.
//!
mod structs;
mod functions;

pub use structs::*;
