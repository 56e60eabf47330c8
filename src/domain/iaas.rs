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

//! IaaS resource kinds that can be deleted from the command line

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ResourceKind {
    Volume,
    Server,
    Network,
    SecurityGroup,
    PublicIp,
    Image,
    AffinityGroup,
    Backup,
    Snapshot,
}

impl ResourceKind {
    /// Collection name in the REST path
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Volume => "volumes",
            ResourceKind::Server => "servers",
            ResourceKind::Network => "networks",
            ResourceKind::SecurityGroup => "security-groups",
            ResourceKind::PublicIp => "public-ips",
            ResourceKind::Image => "images",
            ResourceKind::AffinityGroup => "affinity-groups",
            ResourceKind::Backup => "backups",
            ResourceKind::Snapshot => "snapshots",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Volume => "volume",
            ResourceKind::Server => "server",
            ResourceKind::Network => "network",
            ResourceKind::SecurityGroup => "security group",
            ResourceKind::PublicIp => "public IP",
            ResourceKind::Image => "image",
            ResourceKind::AffinityGroup => "affinity group",
            ResourceKind::Backup => "backup",
            ResourceKind::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The subset of an IaaS resource the CLI reads back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IaasResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Public IPs have no name, the address serves as their label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl IaasResource {
    pub fn label(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::PublicIp => self.ip.as_deref(),
            _ => self.name.as_deref(),
        }
    }
}
