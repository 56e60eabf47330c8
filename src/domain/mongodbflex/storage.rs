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

use super::model::StorageCatalog;
use crate::infrastructure::constants::SERVICE_MONGODBFLEX;
use crate::shared::error::{CliError, Result};

/// Check a requested storage class and size against the options of `flavor_id`.
///
/// The size range is inclusive. A missing catalog is a precondition failure,
/// reported as `MissingCatalog` rather than `InvalidStorage`.
pub fn validate_storage(
    storage_class: Option<&str>,
    storage_size: Option<i64>,
    catalog: Option<&StorageCatalog>,
    flavor_id: &str,
) -> Result<()> {
    let catalog = catalog.ok_or_else(|| CliError::MissingCatalog("nil storages".to_string()))?;

    if let Some(size) = storage_size {
        if size < catalog.min || size > catalog.max {
            return Err(CliError::InvalidStorage {
                service: SERVICE_MONGODBFLEX.to_string(),
                details: format!(
                    "You provided storage size '{}', which is invalid. The valid range is {}-{}.",
                    size, catalog.min, catalog.max
                ),
                flavor_id: flavor_id.to_string(),
            });
        }
    }

    let Some(class) = storage_class else {
        return Ok(());
    };

    if catalog
        .classes
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(class))
    {
        return Ok(());
    }

    Err(CliError::InvalidStorage {
        service: SERVICE_MONGODBFLEX.to_string(),
        details: format!("You provided storage class '{}', which is invalid.", class),
        flavor_id: flavor_id.to_string(),
    })
}
