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

use crate::shared::error::{CliError, Result};

/// The number of replicas is enforced by the API according to the instance type.
/// Names and replica counts are both unique.
const INSTANCE_TYPE_REPLICAS: [(&str, i64); 3] = [("Single", 1), ("Replica", 3), ("Sharded", 9)];

/// Instance type names in lexicographic order
pub fn available_instance_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = INSTANCE_TYPE_REPLICAS.iter().map(|(name, _)| *name).collect();
    types.sort_unstable();
    types
}

pub fn replicas_for(instance_type: &str) -> Result<i64> {
    INSTANCE_TYPE_REPLICAS
        .iter()
        .find(|(name, _)| *name == instance_type)
        .map(|(_, replicas)| *replicas)
        .ok_or_else(|| CliError::InvalidInstanceType(instance_type.to_string()))
}

pub fn type_for_replicas(replicas: i64) -> Result<&'static str> {
    INSTANCE_TYPE_REPLICAS
        .iter()
        .find(|(_, count)| *count == replicas)
        .map(|(name, _)| *name)
        .ok_or(CliError::InvalidReplicaCount(replicas))
}
