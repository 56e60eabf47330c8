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

/// Service name used in hints
pub const SERVICE_MONGODBFLEX: &str = "mongodbflex";

/// Default API endpoints
pub const DEFAULT_MONGODBFLEX_URL: &str = "https://mongodb-flex-service.api.cloud.example";
pub const DEFAULT_IAAS_URL: &str = "https://iaas.api.cloud.example";
pub const DEFAULT_REGION: &str = "eu01";

/// API versions
pub const MONGODBFLEX_API_VERSION: &str = "v2";
pub const IAAS_API_VERSION: &str = "v1";

/// Configuration file discovery
pub const CONFIG_FILE_ENV: &str = "FLEXCTL_CONFIG_FILE";
pub const CONFIG_DIR_NAME: &str = "flexctl";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment overrides
pub const ENV_PROJECT_ID: &str = "FLEXCTL_PROJECT_ID";
pub const ENV_REGION: &str = "FLEXCTL_REGION";
pub const ENV_ACCESS_TOKEN: &str = "FLEXCTL_ACCESS_TOKEN";

/// Wait handler settings (seconds)
pub const WAIT_POLL_INTERVAL: u64 = 5;
pub const MONGODBFLEX_WAIT_TIMEOUT: u64 = 45 * 60;
pub const IAAS_WAIT_TIMEOUT: u64 = 20 * 60;

/// HTTP client settings
pub const HTTP_TIMEOUT: u64 = 60;
pub const USER_AGENT: &str = concat!("flexctl/", env!("CARGO_PKG_VERSION"));

/// MongoDB Flex instance states
pub const INSTANCE_STATUS_READY: &str = "READY";
pub const INSTANCE_STATUS_FAILED: &str = "FAILED";

/// IaaS resource states
pub const IAAS_STATUS_DELETED: &str = "DELETED";
pub const IAAS_STATUS_ERROR: &str = "ERROR";

/// Placeholder for a backup that was never restored
pub const RESTORE_STATUS_NONE: &str = "-";
