//! Utilities
use log::*;
use std::{env, fs, path::Path, collections::{BTreeMap, HashMap}};
use anyhow::{bail, Context, Result};

// This reads the constant set in lib.rs.
use crate::ACCEPT_INVALID_CERTS;

pub fn http_client() -> Result<reqwest::blocking::Client>
{
    reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(ACCEPT_INVALID_CERTS)
        .build()
        .with_context(|| "Error building http client")
}

/// Perform a GET request and return the body.
///
/// Transport errors as well as a non-success status are returned as error.
pub fn http_get(
    url: &str,
) -> Result<String>
{
    let response = http_client()?
        .get(url)
        .send()
        .with_context(|| format!("Error requesting: {}", url))?;
    if !response.status().is_success()
    {
        debug!("Non success response: {} = {}", url, response.status());
        bail!("Non success response: {} = {}", url, response.status());
    }
    debug!("Success response: {} = {}", url, response.status());
    response.text()
        .with_context(|| format!("Error reading response body: {}", url))
}

/// Resolve a setting from its option, the environment variable `env_name` (possibly set via .env),
/// or the default, in that order.
///
/// An option or environment variable that was used is added to `changed_options`,
/// so it can be written to .env later on.
pub fn set_option(
    option: &Option<String>,
    env_name: &'static str,
    default: Option<&str>,
    changed_options: &mut HashMap<&'static str, String>,
) -> Option<String>
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", env_name, value);
        changed_options.insert(env_name, value.to_string());
        return Some(value.to_string());
    }
    match env::var(env_name) {
        Ok(set_var) => {
            info!("{} not set: set via .env: {}", env_name, set_var);
            changed_options.insert(env_name, set_var.to_owned());
            Some(set_var)
        }
        Err(_e) => {
            match default {
                Some(default) => {
                    info!("{} not set: and not set via .env: using default: {}", env_name, default);
                    Some(default.to_string())
                }
                None => {
                    debug!("{} not set: and not set via .env: no default", env_name);
                    None
                }
            }
        }
    }
}

/// Write the options that were set (`changed_options`) to the .env file at `path`.
///
/// Keys already in the file that are not in `changed_options` are kept; keys are written in sorted order.
pub fn dotenv_writer(
    write_dotenv: bool,
    path: &Path,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if changed_options.is_empty() || !write_dotenv {
        return Ok(());
    }
    info!("begin write {}", path.display());

    let mut settings: BTreeMap<String, String> = BTreeMap::new();
    if path.exists() {
        let current = fs::read_to_string(path)
            .with_context(|| format!("Error reading .env file: {}", path.display()))?;
        for line in current.lines() {
            if let Some((key, value)) = line.split_once('=') {
                if !key.trim().is_empty() && !key.trim_start().starts_with('#') {
                    settings.insert(key.trim().to_string(), value.to_string());
                }
            }
        }
    }
    for (key, value) in changed_options {
        info!("{}={}", key, value);
        settings.insert(key.to_string(), value);
    }

    let contents: String = settings.iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect();
    fs::write(path, contents)
        .with_context(|| format!("Error writing .env file: {}", path.display()))?;

    info!("end write {}", path.display());
    Ok(())
}
