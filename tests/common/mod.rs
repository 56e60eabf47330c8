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

#![allow(dead_code)]

use flexctl::domain::iaas::{IaasResource, ResourceKind};
use flexctl::domain::mongodbflex::model::{
    Flavor, Instance, ListBackupsResponse, ListFlavorsResponse, ListRestoreJobsResponse,
    ListStoragesResponse, ListVersionsResponse, PartialUpdateInstancePayload, StorageRange,
    UpdateInstanceResponse,
};
use flexctl::{CliError, IaasClient, MongoDbFlexClient, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const PROJECT_ID: &str = "5c6b2f4e-3d1a-4b8e-9f0a-1b2c3d4e5f60";
pub const INSTANCE_ID: &str = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";
pub const REGION: &str = "eu01";

/// In-memory MongoDB Flex API that records every call it receives
#[derive(Default)]
pub struct MockMongoDbFlex {
    pub flavors: Option<Vec<Flavor>>,
    pub storages: HashMap<String, ListStoragesResponse>,
    pub instance: Option<Instance>,
    pub versions: Option<Vec<String>>,
    pub fail_flavors: bool,
    pub deleted: AtomicBool,
    pub calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<PartialUpdateInstancePayload>>,
}

impl MockMongoDbFlex {
    /// Two flavors, storages for both, and an instance running on `flavor-1`
    pub fn with_catalog() -> Self {
        let mut storages = HashMap::new();
        storages.insert("flavor-1".to_string(), storages_response(&["premium"], 10, 100));
        storages.insert("flavor-2".to_string(), storages_response(&["premium", "standard"], 20, 500));

        Self {
            flavors: Some(vec![Flavor::new("flavor-1", 2, 4), Flavor::new("flavor-2", 4, 16)]),
            storages,
            instance: Some(Instance {
                id: Some(INSTANCE_ID.to_string()),
                name: Some("orders-db".to_string()),
                status: Some("READY".to_string()),
                flavor: Some(Flavor::new("flavor-1", 2, 4)),
                ..Default::default()
            }),
            versions: Some(vec!["5.0".to_string(), "6.0".to_string(), "7.0".to_string()]),
            ..Default::default()
        }
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }
}

pub fn storages_response(classes: &[&str], min: i64, max: i64) -> ListStoragesResponse {
    ListStoragesResponse {
        storage_classes: Some(classes.iter().map(|c| c.to_string()).collect()),
        storage_range: Some(StorageRange {
            min: Some(min),
            max: Some(max),
        }),
    }
}

#[async_trait::async_trait]
impl MongoDbFlexClient for MockMongoDbFlex {
    async fn list_flavors(&self, _project_id: &str, _region: &str) -> Result<ListFlavorsResponse> {
        self.record("list_flavors");
        if self.fail_flavors {
            return Err(CliError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(ListFlavorsResponse {
            flavors: self.flavors.clone(),
        })
    }

    async fn list_storages(
        &self,
        _project_id: &str,
        _region: &str,
        flavor_id: &str,
    ) -> Result<ListStoragesResponse> {
        self.record(&format!("list_storages:{}", flavor_id));
        self.storages
            .get(flavor_id)
            .cloned()
            .ok_or_else(|| CliError::not_found("flavor", flavor_id))
    }

    async fn get_instance(
        &self,
        _project_id: &str,
        instance_id: &str,
        _region: &str,
    ) -> Result<Instance> {
        self.record("get_instance");
        if self.deleted.load(Ordering::SeqCst) {
            return Err(CliError::not_found("instance", instance_id));
        }
        self.instance
            .clone()
            .ok_or_else(|| CliError::not_found("instance", instance_id))
    }

    async fn list_versions(&self, _project_id: &str, _region: &str) -> Result<ListVersionsResponse> {
        self.record("list_versions");
        Ok(ListVersionsResponse {
            versions: self.versions.clone(),
        })
    }

    async fn partial_update_instance(
        &self,
        _project_id: &str,
        _instance_id: &str,
        _region: &str,
        payload: &PartialUpdateInstancePayload,
    ) -> Result<UpdateInstanceResponse> {
        self.record("partial_update_instance");
        self.updates.lock().unwrap().push(payload.clone());
        Ok(UpdateInstanceResponse {
            item: self.instance.clone(),
        })
    }

    async fn delete_instance(&self, _project_id: &str, _instance_id: &str, _region: &str) -> Result<()> {
        self.record("delete_instance");
        self.deleted.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn list_backups(
        &self,
        _project_id: &str,
        _instance_id: &str,
        _region: &str,
    ) -> Result<ListBackupsResponse> {
        self.record("list_backups");
        Ok(ListBackupsResponse::default())
    }

    async fn list_restore_jobs(
        &self,
        _project_id: &str,
        _instance_id: &str,
        _region: &str,
    ) -> Result<ListRestoreJobsResponse> {
        self.record("list_restore_jobs");
        Ok(ListRestoreJobsResponse::default())
    }
}

/// In-memory IaaS API; resources disappear once deleted
#[derive(Default)]
pub struct MockIaas {
    pub resources: Mutex<HashMap<String, IaasResource>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockIaas {
    pub fn with_resource(id: &str, resource: IaasResource) -> Self {
        let mock = Self::default();
        mock.resources
            .lock()
            .unwrap()
            .insert(id.to_string(), resource);
        mock
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IaasClient for MockIaas {
    async fn get_resource(
        &self,
        _project_id: &str,
        kind: ResourceKind,
        id: &str,
    ) -> Result<IaasResource> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("get:{}", kind.path_segment()));
        self.resources
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| CliError::not_found(kind.display_name(), id))
    }

    async fn delete_resource(&self, _project_id: &str, kind: ResourceKind, id: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("delete:{}", kind.path_segment()));
        self.resources.lock().unwrap().remove(id);
        Ok(())
    }
}
