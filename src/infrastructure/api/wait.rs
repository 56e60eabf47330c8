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

//! Polling until an asynchronous operation reaches a terminal state

use super::{with_cancel, IaasClient, MongoDbFlexClient};
use crate::domain::iaas::ResourceKind;
use crate::domain::mongodbflex::model::Instance;
use crate::infrastructure::constants::{
    IAAS_STATUS_DELETED, IAAS_STATUS_ERROR, IAAS_WAIT_TIMEOUT, INSTANCE_STATUS_FAILED,
    INSTANCE_STATUS_READY, MONGODBFLEX_WAIT_TIMEOUT, WAIT_POLL_INTERVAL,
};
use crate::shared::error::{CliError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    pub interval: Duration,
    pub mongodbflex_timeout: Duration,
    pub iaas_timeout: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(WAIT_POLL_INTERVAL),
            mongodbflex_timeout: Duration::from_secs(MONGODBFLEX_WAIT_TIMEOUT),
            iaas_timeout: Duration::from_secs(IAAS_WAIT_TIMEOUT),
        }
    }
}

pub struct WaitHandler {
    description: String,
    interval: Duration,
    timeout: Duration,
}

impl WaitHandler {
    pub fn new(description: impl Into<String>, interval: Duration, timeout: Duration) -> Self {
        Self {
            description: description.into(),
            interval,
            timeout,
        }
    }

    /// Call `check` every interval until it yields a value, fails, or the deadline passes.
    ///
    /// `check` returns `Ok(Some(v))` when done, `Ok(None)` to keep polling and `Err` to abort.
    pub async fn wait<T, F, Fut>(&self, cancel: &CancellationToken, mut check: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        let deadline = Instant::now() + self.timeout;
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            if let Some(value) = with_cancel(cancel, check()).await? {
                tracing::debug!(attempts, "{} finished", self.description);
                return Ok(value);
            }

            if Instant::now() >= deadline {
                return Err(CliError::Timeout(format!(
                    "{} did not finish within {} seconds",
                    self.description,
                    self.timeout.as_secs()
                )));
            }

            tracing::debug!(attempts, "{} still in progress", self.description);
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(CliError::Cancelled),
                _ = sleep(self.interval) => {}
            }
        }
    }
}

/// Wait for an instance to report `READY` after an update
pub async fn wait_for_instance_ready(
    cancel: &CancellationToken,
    settings: &WaitSettings,
    client: &dyn MongoDbFlexClient,
    project_id: &str,
    instance_id: &str,
    region: &str,
) -> Result<Instance> {
    let handler = WaitHandler::new(
        format!("update of instance {}", instance_id),
        settings.interval,
        settings.mongodbflex_timeout,
    );

    handler
        .wait(cancel, move || async move {
            let instance = client.get_instance(project_id, instance_id, region).await?;
            match instance.status.as_deref() {
                Some(INSTANCE_STATUS_READY) => Ok(Some(instance)),
                Some(INSTANCE_STATUS_FAILED) => Err(CliError::WaitFailed(format!(
                    "update of instance {} failed",
                    instance_id
                ))),
                _ => Ok(None),
            }
        })
        .await
}

/// Wait until the instance is gone (the API answers 404)
pub async fn wait_for_instance_deleted(
    cancel: &CancellationToken,
    settings: &WaitSettings,
    client: &dyn MongoDbFlexClient,
    project_id: &str,
    instance_id: &str,
    region: &str,
) -> Result<()> {
    let handler = WaitHandler::new(
        format!("deletion of instance {}", instance_id),
        settings.interval,
        settings.mongodbflex_timeout,
    );

    handler
        .wait(cancel, move || async move {
            match client.get_instance(project_id, instance_id, region).await {
                Ok(_) => Ok(None),
                Err(e) if e.is_not_found() => Ok(Some(())),
                Err(e) => Err(e),
            }
        })
        .await
}

/// Wait until an IaaS resource is gone or reports `DELETED`
pub async fn wait_for_iaas_deleted(
    cancel: &CancellationToken,
    settings: &WaitSettings,
    client: &dyn IaasClient,
    project_id: &str,
    kind: ResourceKind,
    id: &str,
) -> Result<()> {
    let handler = WaitHandler::new(
        format!("deletion of {} {}", kind, id),
        settings.interval,
        settings.iaas_timeout,
    );

    handler
        .wait(cancel, move || async move {
            match client.get_resource(project_id, kind, id).await {
                Ok(resource) => match resource.status.as_deref() {
                    Some(IAAS_STATUS_DELETED) => Ok(Some(())),
                    Some(IAAS_STATUS_ERROR) => Err(CliError::WaitFailed(format!(
                        "deletion of {} {} failed",
                        kind, id
                    ))),
                    _ => Ok(None),
                },
                Err(e) if e.is_not_found() => Ok(Some(())),
                Err(e) => Err(e),
            }
        })
        .await
}
