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

//! Human-readable labels for confirmation prompts and result messages

use crate::domain::iaas::ResourceKind;
use crate::infrastructure::api::{with_cancel, IaasClient, MongoDbFlexClient};
use crate::shared::error::{CliError, Result};
use tokio_util::sync::CancellationToken;

/// Looks up the display name of one kind of resource
#[async_trait::async_trait]
pub trait NameResolver: Send + Sync {
    async fn get_name(&self, cancel: &CancellationToken, id: &str) -> Result<String>;
}

/// Name of the resource, or its raw ID when the lookup fails for any reason
pub async fn resolve_label(
    resolver: &dyn NameResolver,
    cancel: &CancellationToken,
    id: &str,
) -> String {
    match resolver.get_name(cancel, id).await {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!(id, error = %e, "get resource name failed, using ID as label");
            id.to_string()
        }
    }
}

pub struct InstanceNameResolver<'a> {
    pub client: &'a dyn MongoDbFlexClient,
    pub project_id: &'a str,
    pub region: &'a str,
}

#[async_trait::async_trait]
impl NameResolver for InstanceNameResolver<'_> {
    async fn get_name(&self, cancel: &CancellationToken, id: &str) -> Result<String> {
        let instance = with_cancel(cancel, self.client.get_instance(self.project_id, id, self.region))
            .await?;
        instance
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CliError::not_found("instance name", id))
    }
}

pub struct IaasNameResolver<'a> {
    pub client: &'a dyn IaasClient,
    pub project_id: &'a str,
    pub kind: ResourceKind,
}

#[async_trait::async_trait]
impl NameResolver for IaasNameResolver<'_> {
    async fn get_name(&self, cancel: &CancellationToken, id: &str) -> Result<String> {
        let resource = with_cancel(
            cancel,
            self.client.get_resource(self.project_id, self.kind, id),
        )
        .await?;
        resource
            .label(self.kind)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CliError::not_found(format!("{} name", self.kind), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(Option<&'static str>);

    #[async_trait::async_trait]
    impl NameResolver for FixedResolver {
        async fn get_name(&self, _cancel: &CancellationToken, id: &str) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| CliError::not_found("instance", id))
        }
    }

    #[tokio::test]
    async fn test_resolve_label_uses_name() {
        let cancel = CancellationToken::new();
        let label = resolve_label(&FixedResolver(Some("orders-db")), &cancel, "id-1").await;
        assert_eq!(label, "orders-db");
    }

    #[tokio::test]
    async fn test_resolve_label_falls_back_to_id() {
        let cancel = CancellationToken::new();
        let label = resolve_label(&FixedResolver(None), &cancel, "id-1").await;
        assert_eq!(label, "id-1");
    }
}
