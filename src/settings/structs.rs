//! The structs
//!
use std::path::PathBuf;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Requested number of simultaneous requests, `None` uses the default.
    pub concurrency: Option<usize>,
    pub skip_version_check: bool,
    pub skip_useracl: bool,
    pub chef_server_url: String,
    /// Derived from `chef_server_url` by the credential setup when not set.
    pub chef_server_root: Option<String>,
    pub node_name: Option<String>,
    pub client_key: Option<PathBuf>,
    pub webui_key: PathBuf,
    pub pivotal_key: PathBuf,
}
