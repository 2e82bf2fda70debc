use super::{
    config::{ApiConfig, MugshotConfig, MugshotConfigTrait},
    MugshotClient,
};
use crate::{
    error::MugshotResult,
    logging::{LoggingConfig, LoggingConfigTrait},
};

#[derive(Default)]
pub struct MugshotClientBuilder {
    pub config: MugshotConfig,
}

impl MugshotClientBuilder {
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Resolves the api key (explicit, then env var) and starts the logger if enabled.
    pub fn build(mut self) -> MugshotResult<MugshotClient> {
        self.config.logging_config.load_logger()?;
        self.config.api_config.api_key = Some(self.config.api_config.load_api_key()?);
        crate::debug!("Mugshot client targeting {}", self.config.endpoint());
        Ok(MugshotClient::from_config(self.config))
    }
}

impl MugshotConfigTrait for MugshotClientBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for MugshotClientBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
