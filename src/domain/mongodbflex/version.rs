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

use crate::infrastructure::api::{with_cancel, MongoDbFlexClient};
use crate::shared::error::{CliError, Result};
use regex::Regex;
use semver::Version;
use std::sync::OnceLock;
use tokio_util::sync::CancellationToken;

const ENGINE_NAME: &str = "MongoDB";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d+)(?:\.(\d+)(?:\.(\d+)(-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)?)?$",
        )
            .expect("version pattern is valid")
    })
}

/// Parse an engine version such as `"5.0"` or `"6.0.1-rc1"`.
///
/// Missing minor and patch components count as zero and build metadata is dropped,
/// so `"7"`, `"7.0"` and `"7.0.0+b1"` compare equal. Pre-release and build suffixes
/// need all three components: `"7.0-rc1"` does not parse.
pub fn parse_version(raw: &str) -> Option<Version> {
    let caps = version_regex().captures(raw.trim())?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());
    let pre = caps.get(4).map_or("", |m| m.as_str());

    Version::parse(&format!("{}.{}.{}{}", major, minor, patch, pre)).ok()
}

/// Pick the semantically highest version; on ties the first occurrence wins.
pub fn select_latest_version<S: AsRef<str>>(versions: &[S]) -> Result<String> {
    let mut latest: Option<(Version, &str)> = None;

    for raw in versions {
        let raw = raw.as_ref();
        let Some(candidate) = parse_version(raw) else {
            tracing::debug!(version = raw, "skipping unparseable version");
            continue;
        };
        let newer = match &latest {
            Some((current, _)) => candidate > *current,
            None => true,
        };
        if newer {
            latest = Some((candidate, raw));
        }
    }

    latest
        .map(|(_, raw)| raw.to_string())
        .ok_or_else(|| CliError::NoVersionsAvailable(ENGINE_NAME.to_string()))
}

/// Fetch the versions offered in `region` and return the latest one
pub async fn latest_version(
    cancel: &CancellationToken,
    client: &dyn MongoDbFlexClient,
    project_id: &str,
    region: &str,
) -> Result<String> {
    let resp = with_cancel(cancel, client.list_versions(project_id, region))
        .await
        .map_err(|e| {
            CliError::collaborator(
                format!("get MongoDB versions for project {}", project_id),
                e,
            )
        })?;

    select_latest_version(resp.versions.as_deref().unwrap_or_default())
}
