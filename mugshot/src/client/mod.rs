pub mod builder;
pub mod config;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use secrecy::Secret;

use crate::error::{map_deserialization_error, MugshotError, MugshotResult};
use builder::MugshotClientBuilder;
use config::{MugshotConfig, MugshotConfigTrait};

/// Handle to the Mugshot API.
///
/// Never mutated after construction, so it can be shared across tasks.
/// Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct MugshotClient {
    http_client: reqwest::Client,
    pub config: MugshotConfig,
}

impl MugshotClient {
    /// Client for the production endpoint.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self::from_config(MugshotConfig::new().with_api_key(api_key))
    }

    /// Client for a non-default endpoint, e.g. a staging deployment.
    pub fn with_endpoint<S: Into<String>, E: AsRef<str>>(api_key: S, endpoint: E) -> Self {
        Self::from_config(
            MugshotConfig::new()
                .with_api_key(api_key)
                .with_endpoint(endpoint),
        )
    }

    pub fn builder() -> MugshotClientBuilder {
        MugshotClientBuilder::default()
    }

    pub fn from_config(config: MugshotConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }

    pub fn api_key(&self) -> Option<&Secret<String>> {
        self.config.api_config.api_key.as_ref()
    }

    /// POST a multipart form to `{path}` and deserialize the response body.
    pub(crate) async fn post_multipart<O>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> MugshotResult<O>
    where
        O: DeserializeOwned,
    {
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .multipart(form)
            .build()?;
        self.execute(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body to `{path}` and deserialize the response body.
    pub(crate) async fn post_form<F, O>(&self, path: &str, fields: &F) -> MugshotResult<O>
    where
        F: serde::Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers()?)
            .form(fields)
            .build()?;
        self.execute(request).await
    }

    /// Send once, no retries. Any non-2xx status is an error and its body is only logged.
    async fn execute_raw(&self, request: reqwest::Request) -> MugshotResult<Bytes> {
        crate::debug!("{} {}", request.method(), request.url());
        let response = self.http_client.execute(request).await?;

        let status = response.status();
        crate::debug!("response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            crate::error!("request failed with {}: {}", status, body);
            return Err(MugshotError::status(status));
        }

        Ok(response.bytes().await?)
    }

    async fn execute<O>(&self, request: reqwest::Request) -> MugshotResult<O>
    where
        O: DeserializeOwned,
    {
        let bytes = self.execute_raw(request).await?;
        crate::trace!("Serialized response: {}", String::from_utf8_lossy(&bytes));

        serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))
    }
}
