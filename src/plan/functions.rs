//! The impls and functions
//!
use std::{fs, path::Path, time::Instant};
use log::*;
use anyhow::{anyhow, bail, Context, Result};
use crate::concurrency::{ConcurrencyLevel, WorkerPool};
use crate::credentials;
use crate::endpoints::{select_endpoint, EndpointChoice, HttpInspector, ServerInspector};
use crate::plan::{Operation, Plan};
use crate::settings::Settings;
use crate::ui::Ui;

impl Plan {
    /// The preflight against the Chef Server configured in `settings`.
    pub fn prepare(
        operation: Operation,
        directory: &Path,
        settings: &mut Settings,
        ui: &mut Ui,
    ) -> Result<Plan>
    {
        credentials::set_client_config(settings, ui)?;
        let server_root = settings.chef_server_root.clone()
            .ok_or_else(|| anyhow!("chef_server_root is not set"))?;
        let inspector = HttpInspector::new(&server_root);
        Plan::prepare_with(operation, directory, settings, &inspector, ui)
    }
    /// The preflight after the credential setup, asking `inspector` about the server.
    pub fn prepare_with(
        operation: Operation,
        directory: &Path,
        settings: &mut Settings,
        inspector: &dyn ServerInspector,
        ui: &mut Ui,
    ) -> Result<Plan>
    {
        info!("begin {:?} preflight", operation);
        let timer = Instant::now();

        let chef_server_root = settings.chef_server_root.clone()
            .ok_or_else(|| anyhow!("chef_server_root is not set"))?;
        let node_name = settings.node_name.clone()
            .ok_or_else(|| anyhow!("node_name is not set"))?;

        match operation {
            Operation::Backup => {
                fs::create_dir_all(directory)
                    .with_context(|| format!("Cannot create directory: {}", directory.display()))?;
            }
            Operation::Restore => credentials::assert_exists(directory)?,
        }
        credentials::assert_exists(&settings.webui_key)?;

        let concurrency = ConcurrencyLevel::configure(settings.concurrency)?;

        let endpoint = if settings.skip_useracl {
            info!("skip-useracl set: no user ACL endpoint selection");
            EndpointChoice::Disabled
        } else {
            select_endpoint(settings, &chef_server_root, inspector, ui)?
        };

        let plan = Plan {
            operation,
            directory: directory.to_path_buf(),
            chef_server_root,
            node_name,
            concurrency,
            endpoint,
            skip_useracl: settings.skip_useracl,
        };

        info!("end {:?} preflight: {:?}", operation, timer.elapsed());
        Ok(plan)
    }
    pub fn print(&self)
    {
        println!("{:20} {:?}", "operation", self.operation);
        println!("{:20} {}", "directory", self.directory.display());
        println!("{:20} {}", "chef_server_root", self.chef_server_root);
        println!("{:20} {}", "node_name", self.node_name);
        println!("{:20} {}", "concurrency", self.concurrency.concurrency);
        println!("{:20} {}", "worker_pool_size", self.concurrency.pool_size);
        println!("{:20} {}", "user_acl_endpoint", self.endpoint);
        println!("{:20} {}", "skip_useracl", self.skip_useracl);
    }
    pub fn print_json(&self) -> Result<()>
    {
        let json = serde_json::to_string_pretty(self)
            .with_context(|| "Unable to serialize plan")?;
        println!("{}", json);
        Ok(())
    }
    /// Read the ACL of every user through the selected endpoint, using the worker pool.
    pub fn print_user_acls(
        &self,
        users: &[String],
        ui: &mut Ui,
    ) -> Result<()>
    {
        let client = match self.endpoint.client()? {
            Some(client) => client,
            None => {
                ui.warn(format!("User ACLs are skipped, not reading the ACLs of: {}", users.join(", ")));
                return Ok(());
            }
        };

        let pool = WorkerPool::new(&self.concurrency)?;
        let results = pool.run(users.to_vec(), |user| {
            let acl = client.user_acl(&user);
            (user, acl)
        });

        let mut failed = 0;
        for (user, acl) in results {
            match acl {
                Ok(acl) => {
                    let json = serde_json::to_string_pretty(&acl)
                        .with_context(|| format!("Unable to serialize ACL of {}", user))?;
                    println!("{}: {}", user, json);
                }
                Err(error) => {
                    ui.error(format!("Unable to read the ACL of {}: {:#}", user, error));
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            bail!("Unable to read {} of {} user ACLs", failed, users.len());
        }
        Ok(())
    }
}
