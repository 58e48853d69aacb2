//! Configuration module for the Deepgram TTS adapter
//!
//! Settings come from several sources: .env files, YAML files and
//! environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `pricing`: Per-model synthesis pricing
//!
//! # Example
//! ```rust,no_run
//! use waav_deepgram_tts::config::AdapterConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = AdapterConfig::from_env()?;
//!
//! // Load from YAML file with environment variable base
//! let config_path = PathBuf::from("config.yaml");
//! let config = AdapterConfig::from_file(&config_path)?;
//!
//! println!("Using model {}", config.model.as_deref().unwrap_or("aura-2"));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

mod env;
pub mod pricing;
mod yaml;

pub use pricing::{
    ModelPricing, PricingUnit, estimate_tts_cost, get_tts_pricing, list_tts_models,
};

use crate::core::tts::TTSConfig;

/// Adapter configuration resolved from YAML, environment and defaults.
///
/// Unset fields fall through to the provider defaults when the configuration
/// is turned into a [`TTSConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub voice: Option<String>,
    pub language: Option<String>,
    pub audio_format: Option<String>,
    pub sample_rate: Option<u32>,
    pub request_timeout_seconds: Option<u64>,
    pub connection_timeout_seconds: Option<u64>,
}

/// Zeroize the API key when the configuration is dropped.
impl Drop for AdapterConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        if let Some(ref mut key) = self.api_key {
            key.zeroize();
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables.
    ///
    /// The .env file is loaded by the binary at startup, so its values are
    /// already visible as environment variables here.
    ///
    /// # Errors
    /// Returns an error naming the variable when a numeric value does not parse.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            api_key: env::string(env::ENV_API_KEY),
            base_url: env::string(env::ENV_BASE_URL),
            model: env::string(env::ENV_MODEL),
            voice: env::string(env::ENV_VOICE),
            language: env::string(env::ENV_LANGUAGE),
            audio_format: env::string(env::ENV_ENCODING),
            sample_rate: env::number(env::ENV_SAMPLE_RATE)?,
            request_timeout_seconds: env::number(env::ENV_REQUEST_TIMEOUT)?,
            connection_timeout_seconds: env::number(env::ENV_CONNECT_TIMEOUT)?,
        })
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = yaml::YamlConfig::from_file(path)?;
        let mut config = Self::from_env()?;

        if let Some(deepgram) = yaml_config.deepgram {
            config.api_key = deepgram.api_key.or(config.api_key.take());
            config.base_url = deepgram.base_url.or(config.base_url.take());
            config.model = deepgram.model.or(config.model.take());
            config.voice = deepgram.voice.or(config.voice.take());
            config.language = deepgram.language.or(config.language.take());
            config.audio_format = deepgram.audio_format.or(config.audio_format.take());
            config.sample_rate = deepgram.sample_rate.or(config.sample_rate);
            config.request_timeout_seconds = deepgram
                .request_timeout_seconds
                .or(config.request_timeout_seconds);
            config.connection_timeout_seconds = deepgram
                .connection_timeout_seconds
                .or(config.connection_timeout_seconds);
        }

        Ok(config)
    }

    /// Whether an API key is configured (the provider may still find one in the env).
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Build the configuration bag consumed by the TTS providers.
    pub fn to_tts_config(&self) -> TTSConfig {
        TTSConfig {
            provider: Some("deepgram".to_string()),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            voice_id: self.voice.clone(),
            language: self.language.clone(),
            audio_format: self.audio_format.clone(),
            sample_rate: self.sample_rate,
            request_timeout: self.request_timeout_seconds,
            connection_timeout: self.connection_timeout_seconds,
            ..Default::default()
        }
    }
}
