//! The impls and functions
//!
use log::*;
use anyhow::Result;
use crate::utility;
use crate::ACCOUNT_API_URL;

#[derive(Debug, Clone)]
pub struct EndpointProbe {
    base_url: String,
}

impl Default for EndpointProbe {
    fn default() -> Self {
        EndpointProbe::new(ACCOUNT_API_URL)
    }
}

impl EndpointProbe {
    pub fn new(
        base_url: &str,
    ) -> Self
    {
        EndpointProbe { base_url: base_url.trim_end_matches('/').to_string() }
    }
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    /// A single unauthenticated GET of `users`.
    pub fn check(&self) -> Result<()>
    {
        utility::http_get(&format!("{}/users", self.base_url))?;
        Ok(())
    }
    /// Any failure of [EndpointProbe::check] means not reachable:
    /// refused connections, timeouts and error statuses are not told apart.
    pub fn fallback_reachable(&self) -> bool
    {
        match self.check() {
            Ok(()) => {
                info!("account service reachable at {}", self.base_url);
                true
            }
            Err(error) => {
                debug!("account service not reachable at {}: {:#}", self.base_url, error);
                false
            }
        }
    }
}
