// CLI command definitions

use super::context::{CommandContext, GlobalFlags};
use super::iaas::IaasCommand;
use super::mongodbflex::MongodbflexCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "flexctl",
    version,
    about = "Command-line client for MongoDB Flex and IaaS resources",
    long_about = "A CLI for updating and deleting managed MongoDB Flex instances and deleting IaaS resources"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Manage MongoDB Flex instances, options and backups
    Mongodbflex(MongodbflexCommand),

    /// Manage IaaS resources (volumes, servers, networks, ...)
    Iaas(IaasCommand),
}

impl Commands {
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        match self {
            Commands::Mongodbflex(cmd) => cmd.execute(ctx).await,
            Commands::Iaas(cmd) => cmd.execute(ctx).await,
        }
    }
}
