//! Global flags and the per-invocation context every command runs with

use crate::cli::display::Printer;
use crate::domain::config::{CliConf, OutputFormat, Verbosity};
use crate::infrastructure::api::{HttpTransport, IaasApi, MongoDbFlexApi, WaitSettings};
use crate::shared::error::{CliError, Result};
use clap::Args;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalFlags {
    /// Project ID (overrides project_id from the config file)
    #[arg(long, global = true, value_name = "UUID")]
    pub project_id: Option<String>,

    /// Region of the resources
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Do not ask for confirmation
    #[arg(short = 'y', long, global = true)]
    pub assume_yes: bool,

    /// Do not wait for long-running operations to finish
    #[arg(long = "async", global = true)]
    pub async_mode: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Log level written to stderr
    #[arg(long, global = true, value_enum)]
    pub verbosity: Option<Verbosity>,

    /// Path to config.toml (defaults to $FLEXCTL_CONFIG_FILE or ~/.config/flexctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<String>,
}

/// Everything a command needs besides its own flags
pub struct CommandContext {
    pub project_id: Option<String>,
    pub region: String,
    pub async_mode: bool,
    pub output_format: OutputFormat,
    pub printer: Printer,
    pub wait: WaitSettings,
    pub cancel: CancellationToken,
    conf: CliConf,
}

impl CommandContext {
    /// Command-line flags take precedence over the config file and environment
    pub fn new(global: &GlobalFlags, conf: CliConf, cancel: CancellationToken) -> Self {
        Self {
            project_id: global
                .project_id
                .clone()
                .or_else(|| conf.project_id.clone()),
            region: global.region.clone().unwrap_or_else(|| conf.region.clone()),
            async_mode: global.async_mode,
            output_format: global.output_format.unwrap_or(conf.output_format),
            printer: Printer::new(global.assume_yes),
            wait: WaitSettings::from(&conf.wait),
            cancel,
            conf,
        }
    }

    pub fn require_project_id(&self) -> Result<String> {
        let project_id = self
            .project_id
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(CliError::ProjectIdMissing)?;
        validate_uuid(project_id, "project ID")?;
        Ok(project_id.to_string())
    }

    pub fn mongodbflex_client(&self) -> Result<MongoDbFlexApi> {
        let transport = HttpTransport::new(
            &self.conf.api.mongodbflex_url,
            self.conf.api.access_token.clone(),
        )?;
        Ok(MongoDbFlexApi::new(transport))
    }

    pub fn iaas_client(&self) -> Result<IaasApi> {
        let transport =
            HttpTransport::new(&self.conf.api.iaas_url, self.conf.api.access_token.clone())?;
        Ok(IaasApi::new(transport))
    }
}

pub fn validate_uuid(value: &str, what: &str) -> Result<()> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|e| CliError::InvalidInput(format!("{} \"{}\" is not a valid UUID: {}", what, value, e)))
}
