//! The structs
//!
use anyhow::Result;
use crate::probe::EndpointProbe;
use crate::versions::{ServerVersion, VersionResolver};
/// The outcome of the endpoint selection, one per selection.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum EndpointChoice {
    /// The Chef Server root.
    StandardClient(String),
    /// The account service on the loopback interface.
    FallbackClient(String),
    /// No endpoint serves user ACLs; they are skipped.
    Disabled,
}
/// What the endpoint selection needs to know about the server.
pub trait ServerInspector {
    fn server_version(&self) -> Result<ServerVersion>;
    fn fallback_reachable(&self) -> bool;
}
/// [ServerInspector] over http: the `/version` endpoint and the account service probe.
#[derive(Debug)]
pub struct HttpInspector {
    pub resolver: VersionResolver,
    pub probe: EndpointProbe,
}
