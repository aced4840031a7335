//! Shared preflight for the Chef Server `backup` and `restore` operations.
//!
//! Before any bulk transfer starts, both operations need to:
//! - act as the superuser (`pivotal`) with its private key,
//! - know which REST endpoint serves per-user ACL data on this server build
//!   ([endpoints::select_endpoint]), or that user ACLs must be skipped,
//! - size the worker pool that bounds the number of simultaneous requests
//!   ([concurrency::ConcurrencyLevel]).
//!
//! The transfer pipeline itself consumes the [plan::Plan] produced here.
#[macro_use]
extern crate serde_derive;

pub mod concurrency;
pub mod credentials;
pub mod endpoints;
pub mod plan;
pub mod probe;
pub mod rest;
pub mod settings;
pub mod ui;
pub mod utility;
pub mod versions;

use std::{collections::HashMap, path::{Path, PathBuf}, time::Instant};
use clap::{Parser, Subcommand};
use log::*;
use anyhow::Result;

/// The Chef Server version endpoint and the fallback account service run with self-signed certificates.
pub const ACCEPT_INVALID_CERTS: bool = true;
/// Number of simultaneous requests when `--concurrency` is not set.
pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_SERVER_URL: &str = "https://localhost";
/// The internal account service, only reachable on the Chef Server itself.
pub const ACCOUNT_API_URL: &str = "http://127.0.0.1:9465";
pub const SUPERUSER_NAME: &str = "pivotal";
pub const DEFAULT_PIVOTAL_KEY: &str = "/etc/opscode/pivotal.pem";
pub const DEFAULT_WEBUI_KEY: &str = "/etc/opscode/webui_priv.pem";

#[derive(Parser, Debug)]
#[command(name = "ec_tools", version, about = "Backup and restore preflight for Chef Server")]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,
    /// Maximum number of simultaneous requests to send (default: 10)
    #[arg(long, global = true, value_name = "THREADS")]
    pub concurrency: Option<String>,
    /// Path to the WebUI Key
    #[arg(long, global = true, value_name = "KEYPATH", default_value = DEFAULT_WEBUI_KEY)]
    pub webui_key: PathBuf,
    /// Skip downloading user ACLs.  This is required for EC 11.0.0 and lower
    #[arg(long, global = true)]
    pub skip_useracl: bool,
    /// Skip checking the Chef Server version and auto-configuring options.
    #[arg(long = "skip-version-check", global = true)]
    pub skip_version: bool,
    /// Chef Server URL, usually including /organizations/<org>
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,
    /// Chef Server root URL, derived from the server URL when not set
    #[arg(long, global = true, value_name = "URL")]
    pub server_root: Option<String>,
    /// Name of the client making the requests
    #[arg(long, global = true, value_name = "NAME")]
    pub node_name: Option<String>,
    /// Private key of the client making the requests
    #[arg(long, global = true, value_name = "PATH")]
    pub client_key: Option<PathBuf>,
    /// Private key of the superuser
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_PIVOTAL_KEY)]
    pub pivotal_key: PathBuf,
    /// Fetch the ACL of this user through the selected endpoint (repeatable)
    #[arg(long, global = true, value_name = "USER")]
    pub user_acl: Vec<String>,
    /// Print the plan as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Write the url, root, node name, key and concurrency settings to .env
    #[arg(long, global = true)]
    pub write_dotenv: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare a backup of the Chef Server into DIRECTORY
    Backup {
        directory: PathBuf,
    },
    /// Prepare a restore of the Chef Server from DIRECTORY
    Restore {
        directory: PathBuf,
    },
}

pub fn run(
    options: Opts,
) -> Result<()>
{
    info!("begin run");
    let timer = Instant::now();

    let mut changed_options = HashMap::new();
    let mut settings = settings::Settings::from_opts(&options, &mut changed_options)?;
    utility::dotenv_writer(options.write_dotenv, Path::new(".env"), changed_options)?;

    let mut ui = ui::Ui::new();
    let (operation, directory) = match &options.command {
        Command::Backup { directory } => (plan::Operation::Backup, directory),
        Command::Restore { directory } => (plan::Operation::Restore, directory),
    };
    let plan = plan::Plan::prepare(operation, directory, &mut settings, &mut ui)?;

    if options.json {
        plan.print_json()?;
    } else {
        plan.print();
    }

    if !options.user_acl.is_empty() {
        plan.print_user_acls(&options.user_acl, &mut ui)?;
    }

    info!("end run: {:?}", timer.elapsed());
    Ok(())
}
