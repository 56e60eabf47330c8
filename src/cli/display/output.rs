//! Command results in the selected output format

use crate::domain::config::OutputFormat;
use crate::domain::mongodbflex::model::UpdateInstanceResponse;
use crate::shared::error::{CliError, Result};
use serde::Serialize;

/// Serialize `value` as pretty JSON or YAML; `None` for the default format
pub fn render_structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        OutputFormat::Default => Ok(None),
    }
}

pub fn render_update_result(
    format: OutputFormat,
    async_mode: bool,
    instance_label: &str,
    resp: Option<&UpdateInstanceResponse>,
) -> Result<String> {
    let resp = resp.ok_or_else(|| CliError::EmptyResponse("update".to_string()))?;

    if let Some(out) = render_structured(format, resp)? {
        return Ok(out);
    }

    let operation = if async_mode {
        "Triggered update of"
    } else {
        "Updated"
    };
    Ok(format!("{} instance \"{}\"", operation, instance_label))
}
