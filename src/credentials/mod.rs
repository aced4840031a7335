//! Credential setup and path checks that have to pass before a backup or restore starts.
//!
//! Backup and restore read and write every organization, which needs the superuser `pivotal`.
//! When the configured client is not `pivotal` already, the pivotal key on the Chef Server is used instead.
//!
mod functions;

pub use functions::*;
