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

//! MongoDB Flex domain: catalogs, validation and update requests

pub mod flavor;
pub mod instance_type;
pub mod model;
pub mod restore;
pub mod storage;
pub mod update;
pub mod version;

pub use self::flavor::{load_flavor_id, resolve_flavor, validate_flavor_id, FlavorTarget};
pub use self::instance_type::{available_instance_types, replicas_for, type_for_replicas};
pub use self::model::{
    Acl, Backup, Flavor, Instance, ListFlavorsResponse, ListStoragesResponse,
    ListVersionsResponse, PartialUpdateInstancePayload, RestoreJob, Storage, StorageCatalog,
    StorageRange, UpdateInstanceResponse,
};
pub use self::restore::restore_status;
pub use self::storage::validate_storage;
pub use self::update::{build_partial_update_payload, InstanceRef, UpdateIntent};
pub use self::version::{latest_version, parse_version, select_latest_version};
