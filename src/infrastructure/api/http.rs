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

use crate::infrastructure::constants::{HTTP_TIMEOUT, USER_AGENT};
use crate::shared::error::{CliError, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON over HTTPS against one service endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: (&str, &str)) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self.authorize(self.client.get(&url)).send().await?;
        let resp = check_status(resp, resource).await?;
        Ok(resp.json::<T>().await?)
    }

    /// PATCH with a JSON body. An empty response body yields `T::default()`.
    pub async fn patch_json<B, T>(&self, path: &str, body: &B, resource: (&str, &str)) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let url = self.url(path);
        tracing::debug!(%url, body = %serde_json::to_string(body)?, "PATCH");
        let resp = self
            .authorize(self.client.patch(&url))
            .json(body)
            .send()
            .await?;
        let resp = check_status(resp, resource).await?;
        let bytes = resp.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn delete(&self, path: &str, resource: (&str, &str)) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let resp = self.authorize(self.client.delete(&url)).send().await?;
        check_status(resp, resource).await?;
        Ok(())
    }
}

/// Map non-2xx responses onto `CliError`; `resource` is `(type, id)` for 404s
async fn check_status(resp: Response, resource: (&str, &str)) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(CliError::not_found(resource.0, resource.1));
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(text);
    tracing::debug!(status = status.as_u16(), %message, "API request failed");

    Err(CliError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = HttpTransport::new("https://api.example/", None).unwrap();
        assert_eq!(
            transport.url("/v2/projects/p"),
            "https://api.example/v2/projects/p"
        );
        assert_eq!(transport.url("v1/x"), "https://api.example/v1/x");
    }
}
