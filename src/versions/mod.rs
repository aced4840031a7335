//! Module for reading `/version` from the Chef Server root.
//!
//! The `/version` endpoint returns a plain text body, for example:
//! ```text
//! Chef Server 12.0.0
//! ...
//! ```
//! or, for Enterprise Chef:
//! ```text
//! enterprise-chef 11.1.3-1
//! ...
//! ```
//! The last token of the first line is the version.
//!
//! The version decides whether the standard Chef Server API serves user ACLs
//! ([ServerVersion::supports_standard_acl_endpoint]).
//! The version is read once per [VersionResolver].
//!
mod structs;
mod functions;

pub use structs::*;
