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
use super::IaasClient;
use crate::domain::iaas::{IaasResource, ResourceKind};
use crate::infrastructure::constants::IAAS_API_VERSION;
use crate::shared::error::Result;

/// REST client for the IaaS service
pub struct IaasApi {
    transport: HttpTransport,
}

impl IaasApi {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    fn resource_path(project_id: &str, kind: ResourceKind, id: &str) -> String {
        format!(
            "{}/projects/{}/{}/{}",
            IAAS_API_VERSION,
            project_id,
            kind.path_segment(),
            id
        )
    }
}

#[async_trait::async_trait]
impl IaasClient for IaasApi {
    async fn get_resource(
        &self,
        project_id: &str,
        kind: ResourceKind,
        id: &str,
    ) -> Result<IaasResource> {
        self.transport
            .get_json(
                &Self::resource_path(project_id, kind, id),
                (kind.display_name(), id),
            )
            .await
    }

    async fn delete_resource(&self, project_id: &str, kind: ResourceKind, id: &str) -> Result<()> {
        self.transport
            .delete(
                &Self::resource_path(project_id, kind, id),
                (kind.display_name(), id),
            )
            .await
    }
}
