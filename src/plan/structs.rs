//! The structs
//!
use std::path::PathBuf;
use crate::concurrency::ConcurrencyLevel;
use crate::endpoints::EndpointChoice;
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Backup,
    Restore,
}
/// Everything the transfer pipeline needs to know after the preflight.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub operation: Operation,
    pub directory: PathBuf,
    pub chef_server_root: String,
    pub node_name: String,
    pub concurrency: ConcurrencyLevel,
    pub endpoint: EndpointChoice,
    pub skip_useracl: bool,
}
