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

use super::http::HttpTransport;
use super::MongoDbFlexClient;
use crate::domain::mongodbflex::model::{
    GetInstanceResponse, Instance, ListBackupsResponse, ListFlavorsResponse,
    ListRestoreJobsResponse, ListStoragesResponse, ListVersionsResponse,
    PartialUpdateInstancePayload, UpdateInstanceResponse,
};
use crate::infrastructure::constants::MONGODBFLEX_API_VERSION;
use crate::shared::error::{CliError, Result};

/// REST client for the MongoDB Flex service
pub struct MongoDbFlexApi {
    transport: HttpTransport,
}

impl MongoDbFlexApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    fn region_path(project_id: &str, region: &str, rest: &str) -> String {
        format!(
            "{}/projects/{}/regions/{}/{}",
            MONGODBFLEX_API_VERSION, project_id, region, rest
        )
    }
}

#[async_trait::async_trait]
impl MongoDbFlexClient for MongoDbFlexApi {
    async fn list_flavors(&self, project_id: &str, region: &str) -> Result<ListFlavorsResponse> {
        self.transport
            .get_json(
                &Self::region_path(project_id, region, "flavors"),
                ("flavors of project", project_id),
            )
            .await
    }

    async fn list_storages(
        &self,
        project_id: &str,
        region: &str,
        flavor_id: &str,
    ) -> Result<ListStoragesResponse> {
        self.transport
            .get_json(
                &Self::region_path(project_id, region, &format!("storages/{}", flavor_id)),
                ("flavor", flavor_id),
            )
            .await
    }

    async fn get_instance(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<Instance> {
        let resp: GetInstanceResponse = self
            .transport
            .get_json(
                &Self::region_path(project_id, region, &format!("instances/{}", instance_id)),
                ("instance", instance_id),
            )
            .await?;
        resp.item
            .ok_or_else(|| CliError::not_found("instance", instance_id))
    }

    async fn list_versions(&self, project_id: &str, region: &str) -> Result<ListVersionsResponse> {
        self.transport
            .get_json(
                &Self::region_path(project_id, region, "versions"),
                ("versions of project", project_id),
            )
            .await
    }

    async fn partial_update_instance(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
        payload: &PartialUpdateInstancePayload,
    ) -> Result<UpdateInstanceResponse> {
        self.transport
            .patch_json(
                &Self::region_path(project_id, region, &format!("instances/{}", instance_id)),
                payload,
                ("instance", instance_id),
            )
            .await
    }

    async fn delete_instance(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<()> {
        self.transport
            .delete(
                &Self::region_path(project_id, region, &format!("instances/{}", instance_id)),
                ("instance", instance_id),
            )
            .await
    }

    async fn list_backups(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<ListBackupsResponse> {
        self.transport
            .get_json(
                &Self::region_path(
                    project_id,
                    region,
                    &format!("instances/{}/backups", instance_id),
                ),
                ("instance", instance_id),
            )
            .await
    }

    async fn list_restore_jobs(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<ListRestoreJobsResponse> {
        self.transport
            .get_json(
                &Self::region_path(
                    project_id,
                    region,
                    &format!("instances/{}/restores", instance_id),
                ),
                ("instance", instance_id),
            )
            .await
    }
}
