use serde::Deserialize;

pub use config::ConfigError;

/// Runtime settings, read from `CART_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartConfig {
    /// Storage slot holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory used by the file storage backend.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    /// Storefront API base URL. Without it the demo catalog is used.
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default)]
    pub log_json: bool,
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("CART"))
            .build()?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: config::Config) -> Result<Self, ConfigError> {
        let config: CartConfig = settings.try_deserialize()?;
        if config.channel_capacity == 0 {
            return Err(ConfigError::Message("channel_capacity must be greater than zero".to_string()));
        }
        Ok(config)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_dir: default_storage_dir(),
            api_url: None,
            channel_capacity: default_channel_capacity(),
            log_json: false,
        }
    }
}

fn default_storage_key() -> String {
    "@RocketShoes:cart".to_string()
}

fn default_storage_dir() -> String {
    ".cart".to_string()
}

fn default_channel_capacity() -> usize {
    32
}
