//! The impls and functions
//!
use log::*;
use anyhow::{bail, Context, Result};
use crate::utility;

#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RestClient {
    pub fn new(
        base_url: &str,
    ) -> Result<Self>
    {
        Ok(RestClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: utility::http_client()?,
        })
    }
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    pub fn url_for(
        &self,
        path: &str,
    ) -> String
    {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
    pub fn get_json(
        &self,
        path: &str,
    ) -> Result<serde_json::Value>
    {
        let url = self.url_for(path);
        debug!("GET {}", url);
        let response = self.client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .with_context(|| format!("Error requesting: {}", url))?;
        if !response.status().is_success() {
            bail!("Non success response: {} = {}", url, response.status());
        }
        let http_data = response.text()
            .with_context(|| format!("Error reading response body: {}", url))?;
        serde_json::from_str(&http_data)
            .with_context(|| format!("Error parsing json from: {}", url))
    }
    pub fn user_acl(
        &self,
        user: &str,
    ) -> Result<serde_json::Value>
    {
        self.get_json(&format!("users/{}/_acl", user))
    }
}
