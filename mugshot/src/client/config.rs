use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use secrecy::{ExposeSecret, Secret};

use crate::{
    error::{MugshotError, MugshotResult},
    logging::LoggingConfig,
};

/// Production API base url
pub const MUGSHOT_API_ENDPOINT: &str = "https://v1.mugshot.dev";
/// Sent as `User-Agent` on every request
pub const MUGSHOT_USER_AGENT: &str = "Mugshot-SDK/1.0.0";
/// Where the builder looks for a key when none is set explicitly
pub const MUGSHOT_API_KEY_ENV_VAR: &str = "MUGSHOT_API_KEY";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: Option<Secret<String>>,
    pub api_key_env_var: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: MUGSHOT_API_ENDPOINT.to_string(),
            api_key: None,
            api_key_env_var: MUGSHOT_API_KEY_ENV_VAR.to_string(),
        }
    }
}

impl ApiConfig {
    pub(crate) fn load_api_key(&self) -> MugshotResult<Secret<String>> {
        if let Some(api_key) = self.api_key.as_ref() {
            crate::trace!("Using api_key from parameter");
            return Ok(api_key.to_owned());
        }
        crate::trace!("api_key not set. Attempting to load from .env");
        dotenvy::dotenv().ok();

        match dotenvy::var(&self.api_key_env_var) {
            Ok(api_key) => {
                crate::trace!("Successfully loaded api_key from .env");
                Ok(api_key.into())
            }
            Err(_) => {
                crate::trace!(
                    "{} not found in dotenv, nor was it set manually",
                    self.api_key_env_var
                );
                Err(MugshotError::MissingApiKey {
                    env_var: self.api_key_env_var.clone(),
                })
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct MugshotConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
    pub user_agent: String,
}

impl Default for MugshotConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig::default(),
            logging_config: LoggingConfig::default(),
            user_agent: MUGSHOT_USER_AGENT.to_string(),
        }
    }
}

impl MugshotConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Headers attached to every request.
    ///
    /// The key is sent verbatim in `Authorization`, without a scheme prefix.
    pub(crate) fn headers(&self) -> MugshotResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = &self.api_config.api_key {
            let mut value = HeaderValue::from_str(api_key.expose_secret()).map_err(|e| {
                MugshotError::InvalidHeader {
                    name: "Authorization",
                    reason: e.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|e| MugshotError::InvalidHeader {
                name: "User-Agent",
                reason: e.to_string(),
            })?,
        );

        Ok(headers)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.endpoint.trim_end_matches('/'), path)
    }

    pub fn endpoint(&self) -> &str {
        &self.api_config.endpoint
    }
}

pub trait MugshotConfigTrait {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig;

    fn api_config(&self) -> &ApiConfig;

    fn with_endpoint<S: AsRef<str>>(mut self, endpoint: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().endpoint = endpoint.as_ref().to_string();
        self
    }

    fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key = Some(Secret::from(api_key.into()));
        self
    }

    /// Set the environment variable name for the API key. Default is `MUGSHOT_API_KEY`.
    fn with_api_key_env_var<S: Into<String>>(mut self, api_key_env_var: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key_env_var = api_key_env_var.into();
        self
    }
}

impl MugshotConfigTrait for MugshotConfig {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.api_config
    }
}
