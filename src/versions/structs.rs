//! The structs
//!
use std::sync::Mutex;
/// The version of the Chef Server, parsed from the `/version` response.
///
/// Only major, minor and patch are kept, anything after these is ignored:
/// `11.1.3-1` is `11.1.3`, `12.0.0.1` is `12.0.0`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}
/// Reads the version of a single Chef Server once.
///
/// The first successful read is cached for the lifetime of the resolver.
/// The lock is held during the request, so concurrent callers wait for that request instead of sending their own.
#[derive(Debug)]
pub struct VersionResolver {
    pub(crate) server_root: String,
    pub(crate) cached: Mutex<Option<ServerVersion>>,
}
