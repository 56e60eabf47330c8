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

//! Platform API collaborators

pub mod http;
pub mod iaas;
pub mod mongodbflex;
pub mod wait;

pub use self::http::HttpTransport;
pub use self::iaas::IaasApi;
pub use self::mongodbflex::MongoDbFlexApi;
pub use self::wait::{WaitHandler, WaitSettings};

use crate::domain::iaas::{IaasResource, ResourceKind};
use crate::domain::mongodbflex::model::{
    Instance, ListBackupsResponse, ListFlavorsResponse, ListRestoreJobsResponse,
    ListStoragesResponse, ListVersionsResponse, PartialUpdateInstancePayload,
    UpdateInstanceResponse,
};
use crate::shared::error::{CliError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Run `fut` unless `cancel` fires first
pub async fn with_cancel<T, F>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CliError::Cancelled),
        res = fut => res,
    }
}

#[async_trait::async_trait]
pub trait MongoDbFlexClient: Send + Sync {
    async fn list_flavors(&self, project_id: &str, region: &str) -> Result<ListFlavorsResponse>;

    async fn list_storages(
        &self,
        project_id: &str,
        region: &str,
        flavor_id: &str,
    ) -> Result<ListStoragesResponse>;

    async fn get_instance(&self, project_id: &str, instance_id: &str, region: &str)
        -> Result<Instance>;

    async fn list_versions(&self, project_id: &str, region: &str) -> Result<ListVersionsResponse>;

    async fn partial_update_instance(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
        payload: &PartialUpdateInstancePayload,
    ) -> Result<UpdateInstanceResponse>;

    async fn delete_instance(&self, project_id: &str, instance_id: &str, region: &str)
        -> Result<()>;

    async fn list_backups(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<ListBackupsResponse>;

    async fn list_restore_jobs(
        &self,
        project_id: &str,
        instance_id: &str,
        region: &str,
    ) -> Result<ListRestoreJobsResponse>;
}

#[async_trait::async_trait]
pub trait IaasClient: Send + Sync {
    async fn get_resource(
        &self,
        project_id: &str,
        kind: ResourceKind,
        id: &str,
    ) -> Result<IaasResource>;

    async fn delete_resource(&self, project_id: &str, kind: ResourceKind, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_with_cancel_passes_result_through() {
        let cancel = CancellationToken::new();
        let value = with_cancel(&cancel, async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_with_cancel_returns_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let res: Result<()> = with_cancel(&cancel, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;
        assert!(matches!(res, Err(CliError::Cancelled)));
    }
}
