//! MongoDB Flex commands

use super::context::{validate_uuid, CommandContext};
use super::display::output::render_structured;
use super::display::{render_update_result, TableRenderer};
use crate::domain::labels::{resolve_label, InstanceNameResolver};
use crate::domain::mongodbflex::model::{Flavor, ListStoragesResponse};
use crate::domain::mongodbflex::{
    available_instance_types, build_partial_update_payload, replicas_for, select_latest_version,
    InstanceRef, UpdateIntent,
};
use crate::infrastructure::api::wait::{wait_for_instance_deleted, wait_for_instance_ready};
use crate::infrastructure::api::{with_cancel, MongoDbFlexClient};
use crate::shared::error::{CliError, Result};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
pub struct MongodbflexCommand {
    #[command(subcommand)]
    pub command: MongodbflexSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MongodbflexSubcommand {
    /// Manage MongoDB Flex instances
    #[command(subcommand)]
    Instance(InstanceSubcommand),

    /// List available flavors, storages, versions and instance types
    Options(OptionsCommand),

    /// Manage MongoDB Flex backups
    #[command(subcommand)]
    Backup(BackupSubcommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum InstanceSubcommand {
    /// Update a MongoDB Flex instance
    Update(UpdateCommand),

    /// Delete a MongoDB Flex instance
    Delete(DeleteCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum BackupSubcommand {
    /// List the backups of an instance with their restore status
    List(BackupListCommand),
}

impl MongodbflexCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let client = ctx.mongodbflex_client()?;
        match &self.command {
            MongodbflexSubcommand::Instance(InstanceSubcommand::Update(cmd)) => {
                cmd.run(ctx, &client).await
            }
            MongodbflexSubcommand::Instance(InstanceSubcommand::Delete(cmd)) => {
                cmd.run(ctx, &client).await
            }
            MongodbflexSubcommand::Options(cmd) => cmd.run(ctx, &client).await,
            MongodbflexSubcommand::Backup(BackupSubcommand::List(cmd)) => {
                cmd.run(ctx, &client).await
            }
        }
    }
}

// ============================================================================
// instance update
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateCommand {
    /// Instance ID
    #[arg(value_name = "INSTANCE_ID")]
    pub instance_id: String,

    /// Instance name
    #[arg(long)]
    pub name: Option<String>,

    /// Flavor ID (mutually exclusive with --cpu and --ram)
    #[arg(long)]
    pub flavor_id: Option<String>,

    /// Number of CPUs, used together with --ram to pick a flavor
    #[arg(long)]
    pub cpu: Option<i64>,

    /// Amount of RAM in GB, used together with --cpu to pick a flavor
    #[arg(long)]
    pub ram: Option<i64>,

    /// IP ranges allowed to connect, in CIDR notation (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CIDR")]
    pub acl: Option<Vec<String>>,

    /// Backup schedule in cron format
    #[arg(long)]
    pub backup_schedule: Option<String>,

    /// Storage class
    #[arg(long)]
    pub storage_class: Option<String>,

    /// Storage size in GB
    #[arg(long)]
    pub storage_size: Option<i64>,

    /// MongoDB version
    #[arg(long)]
    pub version: Option<String>,

    /// Instance type (Single, Replica or Sharded)
    #[arg(long = "type")]
    pub instance_type: Option<String>,
}

/// Validated input of `instance update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInput {
    pub project_id: String,
    pub region: String,
    pub instance_id: String,
    pub intent: UpdateIntent,
}

impl UpdateCommand {
    pub fn parse_input(&self, ctx: &CommandContext) -> Result<UpdateInput> {
        let project_id = ctx.require_project_id()?;
        validate_uuid(&self.instance_id, "instance ID")?;

        let intent = UpdateIntent {
            instance_name: self.name.clone(),
            flavor_id: self.flavor_id.clone(),
            cpu: self.cpu,
            ram: self.ram,
            acl: self.acl.clone(),
            backup_schedule: self.backup_schedule.clone(),
            storage_class: self.storage_class.clone(),
            storage_size: self.storage_size,
            version: self.version.clone(),
            instance_type: self.instance_type.clone(),
        };
        if intent.is_empty() {
            return Err(CliError::EmptyUpdate);
        }
        intent.flavor_target()?;
        if let Some(instance_type) = &intent.instance_type {
            replicas_for(instance_type)?;
        }

        let input = UpdateInput {
            project_id,
            region: ctx.region.clone(),
            instance_id: self.instance_id.clone(),
            intent,
        };
        tracing::debug!(?input, "parsed input values");
        Ok(input)
    }

    pub async fn run(&self, ctx: &CommandContext, client: &dyn MongoDbFlexClient) -> anyhow::Result<()> {
        let input = self.parse_input(ctx)?;
        let cancel = &ctx.cancel;

        let resolver = InstanceNameResolver {
            client,
            project_id: &input.project_id,
            region: &input.region,
        };
        let label = resolve_label(&resolver, cancel, &input.instance_id).await;

        ctx.printer.prompt_for_confirmation(&format!(
            "Are you sure you want to update instance \"{}\"? (This may cause downtime)",
            label
        ))?;

        let instance = InstanceRef {
            project_id: &input.project_id,
            instance_id: &input.instance_id,
            region: &input.region,
        };
        let payload = build_partial_update_payload(cancel, &instance, &input.intent, client)
            .await
            .context("build MongoDB Flex instance update request")?;

        let resp = with_cancel(
            cancel,
            client.partial_update_instance(
                &input.project_id,
                &input.instance_id,
                &input.region,
                &payload,
            ),
        )
        .await
        .context("update MongoDB Flex instance")?;

        if !ctx.async_mode {
            ctx.printer.progress("Updating instance");
            wait_for_instance_ready(
                cancel,
                &ctx.wait,
                client,
                &input.project_id,
                &input.instance_id,
                &input.region,
            )
            .await
            .context("wait for MongoDB Flex instance update")?;
        }

        let output = render_update_result(ctx.output_format, ctx.async_mode, &label, Some(&resp))?;
        ctx.printer.output(&output);
        Ok(())
    }
}

// ============================================================================
// instance delete
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct DeleteCommand {
    /// Instance ID
    #[arg(value_name = "INSTANCE_ID")]
    pub instance_id: String,
}

impl DeleteCommand {
    pub async fn run(&self, ctx: &CommandContext, client: &dyn MongoDbFlexClient) -> anyhow::Result<()> {
        let project_id = ctx.require_project_id()?;
        validate_uuid(&self.instance_id, "instance ID")?;
        let region = ctx.region.as_str();
        let cancel = &ctx.cancel;

        let resolver = InstanceNameResolver {
            client,
            project_id: &project_id,
            region,
        };
        let label = resolve_label(&resolver, cancel, &self.instance_id).await;

        ctx.printer.prompt_for_confirmation(&format!(
            "Are you sure you want to delete instance \"{}\"? (This cannot be undone)",
            label
        ))?;

        with_cancel(
            cancel,
            client.delete_instance(&project_id, &self.instance_id, region),
        )
        .await
        .context("delete MongoDB Flex instance")?;

        if !ctx.async_mode {
            ctx.printer.progress("Deleting instance");
            wait_for_instance_deleted(cancel, &ctx.wait, client, &project_id, &self.instance_id, region)
                .await
                .context("wait for MongoDB Flex instance deletion")?;
        }

        let operation = if ctx.async_mode {
            "Triggered deletion of"
        } else {
            "Deleted"
        };
        ctx.printer
            .success(&format!("{} instance \"{}\"", operation, label));
        Ok(())
    }
}

// ============================================================================
// options
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct OptionsCommand {
    /// List the available flavors
    #[arg(long)]
    pub flavors: bool,

    /// List the storage options of the flavor given by --flavor-id
    // clap's `requires` is the only check for the --flavor-id pairing
    #[arg(long, requires = "flavor_id")]
    pub storages: bool,

    /// Flavor whose storage options are listed
    #[arg(long)]
    pub flavor_id: Option<String>,

    /// List the available MongoDB versions
    #[arg(long)]
    pub versions: bool,

    /// List the instance types and their replica counts
    #[arg(long)]
    pub instance_types: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<Flavor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storages: Option<ListStoragesResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<String>>,
}

impl OptionsCommand {
    pub fn validate(&self) -> Result<()> {
        if !(self.flavors || self.storages || self.versions || self.instance_types) {
            return Err(CliError::InvalidInput(
                "please specify at least one category for which to list the available options"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub async fn fetch(&self, ctx: &CommandContext, client: &dyn MongoDbFlexClient) -> Result<Options> {
        self.validate()?;
        let project_id = ctx.require_project_id()?;
        let region = ctx.region.as_str();
        let cancel = &ctx.cancel;
        let mut options = Options::default();

        if self.flavors {
            let resp = with_cancel(cancel, client.list_flavors(&project_id, region))
                .await
                .map_err(|e| CliError::collaborator("get MongoDB Flex flavors", e))?;
            options.flavors = Some(resp.flavors.unwrap_or_default());
        }

        if let (true, Some(flavor_id)) = (self.storages, self.flavor_id.as_deref()) {
            let resp = with_cancel(cancel, client.list_storages(&project_id, region, flavor_id))
                .await
                .map_err(|e| {
                    CliError::collaborator(format!("get MongoDB Flex storages for flavor {}", flavor_id), e)
                })?;
            options.storages = Some(resp);
        }

        if self.versions {
            let resp = with_cancel(cancel, client.list_versions(&project_id, region))
                .await
                .map_err(|e| CliError::collaborator("get MongoDB Flex versions", e))?;
            let versions = resp.versions.unwrap_or_default();
            options.latest_version = select_latest_version(&versions).ok();
            options.versions = Some(versions);
        }

        if self.instance_types {
            options.instance_types = Some(
                available_instance_types()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            );
        }

        Ok(options)
    }

    pub fn render(&self, options: &Options) -> Result<String> {
        let renderer = TableRenderer::new();
        let mut sections = Vec::new();

        if let Some(flavors) = &options.flavors {
            sections.push(renderer.render_flavors(flavors));
        }
        if let (Some(storages), Some(flavor_id)) = (&options.storages, self.flavor_id.as_deref()) {
            sections.push(renderer.render_storages(flavor_id, storages));
        }
        if let Some(versions) = &options.versions {
            sections.push(renderer.render_versions(versions, options.latest_version.as_deref()));
        }
        if let Some(types) = &options.instance_types {
            let rows = types
                .iter()
                .map(|t| replicas_for(t).map(|replicas| (t.as_str(), replicas)))
                .collect::<Result<Vec<_>>>()?;
            sections.push(renderer.render_instance_types(&rows));
        }

        Ok(sections.join("\n"))
    }

    pub async fn run(&self, ctx: &CommandContext, client: &dyn MongoDbFlexClient) -> anyhow::Result<()> {
        let options = self.fetch(ctx, client).await?;
        let output = match render_structured(ctx.output_format, &options)? {
            Some(out) => out,
            None => self.render(&options)?,
        };
        ctx.printer.output(&output);
        Ok(())
    }
}

// ============================================================================
// backup list
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct BackupListCommand {
    /// Instance ID
    #[arg(long)]
    pub instance_id: String,

    /// Maximum number of backups to list
    #[arg(long)]
    pub limit: Option<i64>,
}

impl BackupListCommand {
    pub async fn run(&self, ctx: &CommandContext, client: &dyn MongoDbFlexClient) -> anyhow::Result<()> {
        let project_id = ctx.require_project_id()?;
        validate_uuid(&self.instance_id, "instance ID")?;
        if let Some(limit) = self.limit.filter(|l| *l < 1) {
            return Err(CliError::InvalidInput(format!(
                "the limit must be greater than 0, got {}",
                limit
            ))
            .into());
        }
        let region = ctx.region.as_str();
        let cancel = &ctx.cancel;

        let resp = with_cancel(cancel, client.list_backups(&project_id, &self.instance_id, region))
            .await
            .context("get MongoDB Flex backups")?;
        let mut backups = resp.items.unwrap_or_default();

        if backups.is_empty() {
            let resolver = InstanceNameResolver {
                client,
                project_id: &project_id,
                region,
            };
            let label = resolve_label(&resolver, cancel, &self.instance_id).await;
            ctx.printer
                .output(&format!("No backups found for instance \"{}\"", label));
            return Ok(());
        }

        if let Some(limit) = self.limit {
            backups.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        if let Some(out) = render_structured(ctx.output_format, &backups)? {
            ctx.printer.output(&out);
            return Ok(());
        }

        let jobs = with_cancel(
            cancel,
            client.list_restore_jobs(&project_id, &self.instance_id, region),
        )
        .await
        .context("get MongoDB Flex restore jobs")?;

        let output = TableRenderer::new().render_backups(&backups, jobs.items.as_deref());
        ctx.printer.output(&output);
        Ok(())
    }
}
