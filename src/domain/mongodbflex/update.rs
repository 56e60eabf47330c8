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

//! Partial update of a MongoDB Flex instance

use super::flavor::{resolve_flavor, FlavorTarget};
use super::instance_type::replicas_for;
use super::model::{Acl, PartialUpdateInstancePayload, Storage, StorageCatalog};
use super::storage::validate_storage;
use crate::infrastructure::api::{with_cancel, MongoDbFlexClient};
use crate::shared::error::{CliError, Result};
use tokio_util::sync::CancellationToken;

/// Addresses one instance within a project and region
#[derive(Debug, Clone, Copy)]
pub struct InstanceRef<'a> {
    pub project_id: &'a str,
    pub instance_id: &'a str,
    pub region: &'a str,
}

/// The fields a user asked to change. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateIntent {
    pub instance_name: Option<String>,
    pub flavor_id: Option<String>,
    pub cpu: Option<i64>,
    pub ram: Option<i64>,
    pub acl: Option<Vec<String>>,
    pub backup_schedule: Option<String>,
    pub storage_class: Option<String>,
    pub storage_size: Option<i64>,
    pub version: Option<String>,
    pub instance_type: Option<String>,
}

impl UpdateIntent {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flavor ID and CPU/RAM are mutually exclusive, and CPU and RAM come as a pair
    pub fn flavor_target(&self) -> Result<Option<FlavorTarget>> {
        match (&self.flavor_id, self.cpu, self.ram) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CliError::AmbiguousFlavorTarget),
            (Some(id), None, None) => Ok(Some(FlavorTarget::Id(id.clone()))),
            (None, Some(cpu), Some(ram)) => Ok(Some(FlavorTarget::Compute { cpu, ram })),
            (None, Some(_), None) | (None, None, Some(_)) => Err(CliError::InvalidInput(
                "CPU and RAM must be provided together".to_string(),
            )),
            (None, None, None) => Ok(None),
        }
    }

    fn changes_storage(&self) -> bool {
        self.storage_class.is_some() || self.storage_size.is_some()
    }
}

/// Build the patch body for `intent`, validating flavor and storage against the
/// live catalogs. Nothing is returned unless every requested change is valid.
pub async fn build_partial_update_payload(
    cancel: &CancellationToken,
    instance: &InstanceRef<'_>,
    intent: &UpdateIntent,
    client: &dyn MongoDbFlexClient,
) -> Result<PartialUpdateInstancePayload> {
    let target = intent.flavor_target()?;
    let replicas = intent
        .instance_type
        .as_deref()
        .map(replicas_for)
        .transpose()?;

    let flavor_id = match &target {
        Some(target) => {
            let resp = with_cancel(cancel, client.list_flavors(instance.project_id, instance.region))
                .await
                .map_err(|e| {
                    CliError::collaborator(
                        format!("get MongoDB Flex flavors for project {}", instance.project_id),
                        e,
                    )
                })?;
            let resolved = resolve_flavor(target, resp.flavors.as_deref())?;
            tracing::debug!(flavor_id = %resolved, "resolved flavor");
            Some(resolved)
        }
        None => None,
    };

    let storage = if intent.changes_storage() {
        let validation_flavor_id = match &flavor_id {
            Some(id) => id.clone(),
            None => current_flavor_id(cancel, instance, client).await?,
        };

        let resp = with_cancel(
            cancel,
            client.list_storages(instance.project_id, instance.region, &validation_flavor_id),
        )
        .await
        .map_err(|e| {
            CliError::collaborator(
                format!("get MongoDB Flex storages for flavor {}", validation_flavor_id),
                e,
            )
        })?;
        let catalog = StorageCatalog::try_from(&resp)?;
        validate_storage(
            intent.storage_class.as_deref(),
            intent.storage_size,
            Some(&catalog),
            &validation_flavor_id,
        )?;

        Some(Storage {
            class: intent.storage_class.clone(),
            size: intent.storage_size,
        })
    } else {
        None
    };

    Ok(PartialUpdateInstancePayload {
        name: intent.instance_name.clone(),
        acl: intent.acl.clone().map(|items| Acl { items: Some(items) }),
        backup_schedule: intent.backup_schedule.clone(),
        flavor_id,
        replicas,
        storage,
        version: intent.version.clone(),
    })
}

async fn current_flavor_id(
    cancel: &CancellationToken,
    instance: &InstanceRef<'_>,
    client: &dyn MongoDbFlexClient,
) -> Result<String> {
    let current = with_cancel(
        cancel,
        client.get_instance(instance.project_id, instance.instance_id, instance.region),
    )
    .await
    .map_err(|e| {
        CliError::collaborator(
            format!("get MongoDB Flex instance {}", instance.instance_id),
            e,
        )
    })?;

    current.flavor_id().map(str::to_string).ok_or_else(|| {
        CliError::MissingCatalog(format!(
            "instance {} has no flavor to validate storage against",
            instance.instance_id
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_target_exclusive() {
        let intent = UpdateIntent {
            flavor_id: Some("f1".to_string()),
            cpu: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            intent.flavor_target(),
            Err(CliError::AmbiguousFlavorTarget)
        ));

        let intent = UpdateIntent {
            flavor_id: Some("f1".to_string()),
            ram: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            intent.flavor_target(),
            Err(CliError::AmbiguousFlavorTarget)
        ));
    }

    #[test]
    fn test_flavor_target_variants() {
        assert_eq!(UpdateIntent::default().flavor_target().unwrap(), None);

        let by_id = UpdateIntent {
            flavor_id: Some("f1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            by_id.flavor_target().unwrap(),
            Some(FlavorTarget::Id("f1".to_string()))
        );

        let by_compute = UpdateIntent {
            cpu: Some(2),
            ram: Some(4),
            ..Default::default()
        };
        assert_eq!(
            by_compute.flavor_target().unwrap(),
            Some(FlavorTarget::Compute { cpu: 2, ram: 4 })
        );
    }

    #[test]
    fn test_flavor_target_incomplete_pair() {
        let intent = UpdateIntent {
            cpu: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            intent.flavor_target(),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(UpdateIntent::default().is_empty());
        let intent = UpdateIntent {
            backup_schedule: Some("0 0 * * *".to_string()),
            ..Default::default()
        };
        assert!(!intent.is_empty());
    }
}
