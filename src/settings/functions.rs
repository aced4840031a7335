//! The impls and functions
//!
use std::{collections::HashMap, path::PathBuf};
use anyhow::{Context, Result};
use crate::utility::set_option;
use crate::settings::Settings;
use crate::{Opts, DEFAULT_PIVOTAL_KEY, DEFAULT_SERVER_URL, DEFAULT_WEBUI_KEY};

impl Default for Settings {
    fn default() -> Self {
        Settings {
            concurrency: None,
            skip_version_check: false,
            skip_useracl: false,
            chef_server_url: DEFAULT_SERVER_URL.to_string(),
            chef_server_root: None,
            node_name: None,
            client_key: None,
            webui_key: PathBuf::from(DEFAULT_WEBUI_KEY),
            pivotal_key: PathBuf::from(DEFAULT_PIVOTAL_KEY),
        }
    }
}

impl Settings {
    pub fn new() -> Self { Default::default() }
    /// Resolve the settings from the options; unset options are read from the environment (and .env).
    pub fn from_opts(
        options: &Opts,
        changed_options: &mut HashMap<&'static str, String>,
    ) -> Result<Settings>
    {
        let concurrency = set_option(&options.concurrency, "EC_CONCURRENCY", None, changed_options)
            .map(|value| value.trim().parse::<usize>()
                .with_context(|| format!("Invalid concurrency: {}", value)))
            .transpose()?;
        let chef_server_url = set_option(&options.server_url, "EC_SERVER_URL", Some(DEFAULT_SERVER_URL), changed_options)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let chef_server_root = set_option(&options.server_root, "EC_SERVER_ROOT", None, changed_options);
        let node_name = set_option(&options.node_name, "EC_NODE_NAME", None, changed_options);
        let client_key_option = options.client_key.as_ref().map(|path| path.display().to_string());
        let client_key = set_option(&client_key_option, "EC_CLIENT_KEY", None, changed_options)
            .map(PathBuf::from);

        Ok(Settings {
            concurrency,
            skip_version_check: options.skip_version,
            skip_useracl: options.skip_useracl,
            chef_server_url,
            chef_server_root,
            node_name,
            client_key,
            webui_key: options.webui_key.clone(),
            pivotal_key: options.pivotal_key.clone(),
        })
    }
}
