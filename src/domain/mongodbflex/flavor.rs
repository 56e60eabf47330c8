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

use super::model::Flavor;
use crate::infrastructure::constants::SERVICE_MONGODBFLEX;
use crate::shared::error::{CliError, Result};

/// What the user asked the instance to run on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlavorTarget {
    Id(String),
    Compute { cpu: i64, ram: i64 },
}

/// Resolve a flavor target against the catalog.
///
/// An explicit ID is only checked for existence and returned as given.
/// A CPU/RAM pair must match one flavor exactly, there is no closest fit.
pub fn resolve_flavor(target: &FlavorTarget, flavors: Option<&[Flavor]>) -> Result<String> {
    match target {
        FlavorTarget::Id(id) => {
            validate_flavor_id(id, flavors)?;
            Ok(id.clone())
        }
        FlavorTarget::Compute { cpu, ram } => load_flavor_id(*cpu, *ram, flavors),
    }
}

pub fn validate_flavor_id(flavor_id: &str, flavors: Option<&[Flavor]>) -> Result<()> {
    let flavors = flavors.ok_or_else(|| CliError::MissingCatalog("nil flavors".to_string()))?;

    let found = flavors.iter().any(|f| {
        f.id
            .as_deref()
            .is_some_and(|id| id.eq_ignore_ascii_case(flavor_id))
    });
    if found {
        return Ok(());
    }

    Err(CliError::InvalidFlavor {
        service: SERVICE_MONGODBFLEX.to_string(),
        details: format!("You provided flavor ID '{}', which is invalid.", flavor_id),
    })
}

/// Find the first flavor with exactly `cpu` cores and `ram` GB of memory
pub fn load_flavor_id(cpu: i64, ram: i64, flavors: Option<&[Flavor]>) -> Result<String> {
    let flavors = flavors.ok_or_else(|| CliError::MissingCatalog("nil flavors".to_string()))?;

    let mut available = Vec::new();
    for flavor in flavors {
        let (Some(id), Some(f_cpu), Some(f_memory)) = (&flavor.id, flavor.cpu, flavor.memory)
        else {
            continue;
        };
        if f_cpu == cpu && f_memory == ram {
            return Ok(id.clone());
        }
        available.push(format!("- {} CPU, {} GB RAM", f_cpu, f_memory));
    }

    let details = if available.is_empty() {
        "You provided an invalid combination for CPU and RAM. No flavors are available."
            .to_string()
    } else {
        format!(
            "You provided an invalid combination for CPU and RAM. The available combinations are:\n{}",
            available.join("\n")
        )
    };

    Err(CliError::InvalidFlavor {
        service: SERVICE_MONGODBFLEX.to_string(),
        details,
    })
}
