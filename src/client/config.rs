use secrecy::SecretString;

use crate::client::consts::{AVS_ACCESS_TOKEN, BASE_URL};

pub struct Config {
    base_url: String,
    access_token: SecretString,
    profile: Option<String>,
    locale: Option<String>,
}

pub struct ConfigBuilder {
    config: Config,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.config.access_token = SecretString::from(access_token.to_string());
        self
    }

    pub fn with_profile(mut self, profile: &str) -> Self {
        self.config.profile = Some(profile.to_string());
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.config.locale = Some(locale.to_string());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults to the North American endpoint and takes the access token
    /// from `AVS_ACCESS_TOKEN`, if set.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            access_token: std::env::var(AVS_ACCESS_TOKEN)
                .unwrap_or_default()
                .into(),
            profile: None,
            locale: None,
        }
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}
