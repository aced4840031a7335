//! The impls and functions
//!
use std::{fmt, time::Instant};
use log::*;
use anyhow::Result;
use crate::endpoints::{EndpointChoice, HttpInspector, ServerInspector};
use crate::probe::EndpointProbe;
use crate::rest::RestClient;
use crate::settings::Settings;
use crate::ui::Ui;
use crate::versions::{ServerVersion, VersionResolver};
use crate::ACCOUNT_API_URL;

impl EndpointChoice {
    /// A client for the selected endpoint, `None` when user ACLs are skipped.
    pub fn client(&self) -> Result<Option<RestClient>>
    {
        match self {
            EndpointChoice::StandardClient(url) | EndpointChoice::FallbackClient(url) => Ok(Some(RestClient::new(url)?)),
            EndpointChoice::Disabled => Ok(None),
        }
    }
    pub fn is_disabled(&self) -> bool {
        matches!(self, EndpointChoice::Disabled)
    }
}

impl fmt::Display for EndpointChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointChoice::StandardClient(url) => write!(f, "standard API at {}", url),
            EndpointChoice::FallbackClient(url) => write!(f, "account service at {}", url),
            EndpointChoice::Disabled => write!(f, "disabled"),
        }
    }
}

impl HttpInspector {
    pub fn new(
        server_root: &str,
    ) -> Self
    {
        HttpInspector {
            resolver: VersionResolver::new(server_root),
            probe: EndpointProbe::default(),
        }
    }
}

impl ServerInspector for HttpInspector {
    fn server_version(&self) -> Result<ServerVersion> {
        self.resolver.resolve()
    }
    fn fallback_reachable(&self) -> bool {
        self.probe.fallback_reachable()
    }
}

/// Select the endpoint for reading user ACLs.
///
/// The order is:
/// 1. `skip_version_check`: the standard API, without reading the version or probing.
/// 2. a version after 11.0.1: the standard API.
/// 3. a reachable account service: the account service.
/// 4. otherwise disabled, and `settings.skip_useracl` is set.
///
/// An error reading the server version is returned, it does not lead to a fallback.
pub fn select_endpoint(
    settings: &mut Settings,
    server_root: &str,
    inspector: &dyn ServerInspector,
    ui: &mut Ui,
) -> Result<EndpointChoice>
{
    info!("begin endpoint selection");
    let timer = Instant::now();

    if settings.skip_version_check {
        ui.warn("Skipping the Chef Server version check.  This will also skip any auto-configured options");
        return Ok(EndpointChoice::StandardClient(server_root.to_string()));
    }

    let version = inspector.server_version()?;
    let choice = if version.supports_standard_acl_endpoint() {
        debug!("server version {} serves user ACLs", version);
        EndpointChoice::StandardClient(server_root.to_string())
    } else if inspector.fallback_reachable() {
        debug!("server version {} needs the account service for user ACLs", version);
        EndpointChoice::FallbackClient(ACCOUNT_API_URL.to_string())
    } else {
        ui.warn("Your version of Enterprise Chef Server does not support the downloading of User ACLs.  Setting skip-useracl to TRUE");
        settings.skip_useracl = true;
        EndpointChoice::Disabled
    };

    info!("end endpoint selection: {} {:?}", choice, timer.elapsed());
    Ok(choice)
}
