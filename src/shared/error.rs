// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid instance type: {0}")]
    InvalidInstanceType(String),

    #[error("invalid number of replicas: {0}")]
    InvalidReplicaCount(i64),

    #[error("{details}\nGet details on the available flavors by running:\n  $ flexctl {service} options --flavors")]
    InvalidFlavor { service: String, details: String },

    #[error("{details}\nGet details on the available storages for the specified flavor by running:\n  $ flexctl {service} options --storages --flavor-id {flavor_id}")]
    InvalidStorage {
        service: String,
        details: String,
        flavor_id: String,
    },

    #[error("missing catalog: {0}")]
    MissingCatalog(String),

    #[error("the flavor ID and the CPU/RAM combination are mutually exclusive, provide only one of them")]
    AmbiguousFlavorTarget,

    #[error("no {0} versions found")]
    NoVersionsAvailable(String),

    #[error("{context}: {source}")]
    CollaboratorFailure {
        context: String,
        #[source]
        source: Box<CliError>,
    },

    #[error("operation cancelled")]
    Cancelled,

    #[error("Resource not found: {resource_type} '{id}'")]
    NotFound { resource_type: String, id: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("wait failed: {0}")]
    WaitFailed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("the project ID is not set, pass it with --project-id or set project_id in the config file")]
    ProjectIdMissing,

    #[error("please specify at least one field to update\nGet details on the available flags by re-running your command with the --help flag")]
    EmptyUpdate,

    #[error("operation aborted")]
    Aborted,

    #[error("{0} response is empty")]
    EmptyResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CliError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Wraps a collaborator error with the fetch that produced it.
    pub fn collaborator(context: impl Into<String>, source: CliError) -> Self {
        Self::CollaboratorFailure {
            context: context.into(),
            source: Box::new(source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::CollaboratorFailure { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::CollaboratorFailure { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_flavor_message_contains_hint() {
        let err = CliError::InvalidFlavor {
            service: "mongodbflex".to_string(),
            details: "You provided flavor ID 'abc', which is invalid.".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("You provided flavor ID 'abc', which is invalid."));
        assert!(msg.contains("flexctl mongodbflex options --flavors"));
    }

    #[test]
    fn test_invalid_storage_message_names_flavor() {
        let err = CliError::InvalidStorage {
            service: "mongodbflex".to_string(),
            details: "You provided storage class 'x', which is invalid.".to_string(),
            flavor_id: "flavor-1".to_string(),
        };
        assert!(err
            .to_string()
            .contains("options --storages --flavor-id flavor-1"));
    }

    #[test]
    fn test_collaborator_failure_keeps_source_kind() {
        let err = CliError::collaborator(
            "get MongoDB Flex instance",
            CliError::not_found("instance", "123"),
        );
        assert!(err.is_not_found());
        assert!(!err.is_cancelled());
        assert_eq!(
            err.to_string(),
            "get MongoDB Flex instance: Resource not found: instance '123'"
        );

        let cancelled = CliError::collaborator("list flavors", CliError::Cancelled);
        assert!(cancelled.is_cancelled());
    }
}
