//! IaaS commands

use super::context::{validate_uuid, CommandContext};
use crate::domain::iaas::ResourceKind;
use crate::domain::labels::{resolve_label, IaasNameResolver};
use crate::infrastructure::api::wait::wait_for_iaas_deleted;
use crate::infrastructure::api::{with_cancel, IaasClient};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
pub struct IaasCommand {
    #[command(subcommand)]
    pub command: IaasSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum IaasSubcommand {
    /// Delete an IaaS resource
    Delete(DeleteResourceCommand),
}

impl IaasCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let client = ctx.iaas_client()?;
        match &self.command {
            IaasSubcommand::Delete(cmd) => cmd.run(ctx, &client).await,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DeleteResourceCommand {
    /// Kind of resource to delete
    #[arg(value_enum)]
    pub kind: ResourceKind,

    /// Resource ID
    #[arg(value_name = "ID")]
    pub id: String,
}

impl DeleteResourceCommand {
    pub async fn run(&self, ctx: &CommandContext, client: &dyn IaasClient) -> anyhow::Result<()> {
        let project_id = ctx.require_project_id()?;
        validate_uuid(&self.id, &format!("{} ID", self.kind))?;
        let cancel = &ctx.cancel;

        let resolver = IaasNameResolver {
            client,
            project_id: &project_id,
            kind: self.kind,
        };
        let label = resolve_label(&resolver, cancel, &self.id).await;

        ctx.printer.prompt_for_confirmation(&format!(
            "Are you sure you want to delete {} \"{}\"? (This cannot be undone)",
            self.kind, label
        ))?;

        with_cancel(cancel, client.delete_resource(&project_id, self.kind, &self.id))
            .await
            .with_context(|| format!("delete {}", self.kind))?;

        if !ctx.async_mode {
            ctx.printer.progress(&format!("Deleting {}", self.kind));
            wait_for_iaas_deleted(cancel, &ctx.wait, client, &project_id, self.kind, &self.id)
                .await
                .with_context(|| format!("wait for {} deletion", self.kind))?;
        }

        let operation = if ctx.async_mode {
            "Triggered deletion of"
        } else {
            "Deleted"
        };
        ctx.printer
            .success(&format!("{} {} \"{}\"", operation, self.kind, label));
        Ok(())
    }
}
