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

//! MongoDB Flex resource types as exchanged with the API.
//! Every wire field is optional; callers decide how to treat gaps.

use crate::shared::error::{CliError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog types
// ============================================================================

/// A compute flavor offered for MongoDB Flex instances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flavor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    /// Memory in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Flavor {
    pub fn new(id: impl Into<String>, cpu: i64, memory: i64) -> Self {
        Self {
            id: Some(id.into()),
            cpu: Some(cpu),
            memory: Some(memory),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Storage options for one flavor, as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStoragesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_classes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_range: Option<StorageRange>,
}

/// Storage options with every field the validator needs present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageCatalog {
    pub classes: Vec<String>,
    pub min: i64,
    pub max: i64,
}

impl StorageCatalog {
    pub fn new(classes: Vec<String>, min: i64, max: i64) -> Self {
        Self { classes, min, max }
    }
}

impl TryFrom<&ListStoragesResponse> for StorageCatalog {
    type Error = CliError;

    fn try_from(resp: &ListStoragesResponse) -> Result<Self> {
        let range = resp
            .storage_range
            .as_ref()
            .ok_or_else(|| CliError::MissingCatalog("storage range not returned".to_string()))?;
        let (min, max) = match (range.min, range.max) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                return Err(CliError::MissingCatalog(
                    "storage range bounds not returned".to_string(),
                ))
            }
        };
        let classes = resp
            .storage_classes
            .clone()
            .ok_or_else(|| CliError::MissingCatalog("storage classes not returned".to_string()))?;

        Ok(Self { classes, min, max })
    }
}

// ============================================================================
// Instance types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<Acl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_schedule: Option<String>,
}

impl Instance {
    pub fn flavor_id(&self) -> Option<&str> {
        self.flavor.as_ref().and_then(|f| f.id.as_deref())
    }
}

/// Body of a partial (merge) update; absent fields are left untouched by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdateInstancePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<Acl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFlavorsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<Flavor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVersionsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInstanceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstanceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBackupsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Backup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRestoreJobsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RestoreJob>>,
}

// ============================================================================
// Backups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreJob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "backupID", skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_catalog_from_response() {
        let resp = ListStoragesResponse {
            storage_classes: Some(vec!["premium-perf2-mongodb".to_string()]),
            storage_range: Some(StorageRange {
                min: Some(10),
                max: Some(4000),
            }),
        };
        let catalog = StorageCatalog::try_from(&resp).unwrap();
        assert_eq!(catalog.min, 10);
        assert_eq!(catalog.max, 4000);
        assert_eq!(catalog.classes, vec!["premium-perf2-mongodb".to_string()]);
    }

    #[test]
    fn test_storage_catalog_missing_range() {
        let resp = ListStoragesResponse {
            storage_classes: Some(vec!["class".to_string()]),
            storage_range: Some(StorageRange {
                min: Some(10),
                max: None,
            }),
        };
        assert!(matches!(
            StorageCatalog::try_from(&resp),
            Err(CliError::MissingCatalog(_))
        ));

        let empty = ListStoragesResponse::default();
        assert!(matches!(
            StorageCatalog::try_from(&empty),
            Err(CliError::MissingCatalog(_))
        ));
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = PartialUpdateInstancePayload {
            storage: Some(Storage {
                class: Some("class".to_string()),
                size: None,
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "storage": { "class": "class" } }));
    }

    #[test]
    fn test_instance_deserializes_sparse_fields() {
        let instance: Instance = serde_json::from_str(
            r#"{"id":"abc","name":"db","flavor":{"id":"f1","cpu":2},"backupSchedule":"0 0 * * *"}"#,
        )
        .unwrap();
        assert_eq!(instance.flavor_id(), Some("f1"));
        assert_eq!(instance.backup_schedule.as_deref(), Some("0 0 * * *"));
        assert!(instance.storage.is_none());
    }

    #[test]
    fn test_restore_job_backup_id_field() {
        let job: RestoreJob =
            serde_json::from_str(r#"{"backupID":"b1","date":"2024-01-01T00:00:00Z","status":"done"}"#)
                .unwrap();
        assert_eq!(job.backup_id.as_deref(), Some("b1"));
    }
}
