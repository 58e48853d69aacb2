//! Shared text-to-speech contract.
//!
//! Every provider in `core::tts` exposes the same capability set through
//! [`BaseTTS`]: model listing, voice listing, default voice resolution and
//! one-shot synthesis. The data shapes here ([`Model`], [`Voice`],
//! [`AudioResponse`], [`TTSConfig`]) are provider-neutral; vendor specifics
//! live in the provider modules.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for TTS operations
pub type TTSResult<T> = Result<T, TTSError>;

/// Error type shared by all TTS providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TTSError {
    /// Missing credentials, unknown model/voice, invalid audio options
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The vendor answered with an HTTP error status
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The vendor could not be reached (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The vendor accepted the request but the audio could not be read
    #[error("Audio generation failed: {0}")]
    AudioGenerationFailed(String),

    /// Text rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Open-ended configuration bag passed to provider constructors.
///
/// All fields are optional; each provider documents which ones it reads and
/// which defaults apply. Unknown provider-specific settings go into `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TTSConfig {
    /// Provider name (informational, the factory takes the name separately)
    pub provider: Option<String>,
    /// API key; providers fall back to their environment variable when unset
    pub api_key: Option<String>,
    /// Model name, e.g. "aura-2"
    pub model: Option<String>,
    /// Endpoint override
    pub base_url: Option<String>,
    /// Voice identifier
    pub voice_id: Option<String>,
    /// Language used to pick a default voice when `voice_id` is unset
    pub language: Option<String>,
    /// Audio encoding, e.g. "mp3", "linear16"
    pub audio_format: Option<String>,
    /// Output sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Output bit rate in bits per second (compressed encodings)
    pub bit_rate: Option<u32>,
    /// Audio container, e.g. "wav", "none", "ogg"
    pub container: Option<String>,
    /// Whole-request timeout in seconds
    pub request_timeout: Option<u64>,
    /// Connect timeout in seconds
    pub connection_timeout: Option<u64>,
    /// Idle connections kept per host
    pub request_pool_size: Option<usize>,
    /// Provider-specific settings without a dedicated field
    pub extra: HashMap<String, serde_json::Value>,
}

/// One selectable synthesis engine offered by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub owned_by: String,
    /// Token context size; always `None` for speech models
    pub context_window: Option<u32>,
}

impl Model {
    pub fn new(id: impl Into<String>, owned_by: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owned_by: owned_by.into(),
            context_window: None,
        }
    }
}

/// Voice gender tag as published by the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceGender {
    Female,
    Male,
}

impl VoiceGender {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "FEMALE",
            Self::Male => "MALE",
        }
    }
}

impl std::fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor of one named synthesized voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// Identifier sent to the vendor; equal to `name` for catalog voices
    pub id: String,
    pub gender: VoiceGender,
    /// Free-text style description, e.g. "Clear, Confident, Energetic"
    pub description: String,
    /// Locale code, e.g. "en-us"
    pub language_code: String,
    pub accent: String,
    /// Age category: "young", "adult" or "mature"
    pub age: String,
    pub use_case: String,
    pub preview_url: String,
}

/// Audio produced by one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioResponse {
    /// Raw audio bytes exactly as returned by the vendor
    #[serde(skip)]
    pub audio_data: Vec<u8>,
    /// MIME type of `audio_data`
    pub content_type: String,
    pub model: String,
    pub voice: String,
    pub provider: String,
    /// Playback length, known only for uncompressed output
    pub duration_ms: Option<u64>,
    /// Vendor response metadata (request id, billed characters, ...)
    pub metadata: HashMap<String, serde_json::Value>,
}

impl AudioResponse {
    /// Write the audio bytes to `path`, replacing any existing file.
    pub async fn save(&self, path: impl AsRef<Path>) -> TTSResult<()> {
        let path = path.as_ref();
        tokio::fs::write(path, &self.audio_data)
            .await
            .map_err(|e| {
                TTSError::InternalError(format!(
                    "Failed to write audio to {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    /// Number of audio bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.audio_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.audio_data.is_empty()
    }
}

/// Capability set every TTS provider implements.
#[async_trait]
pub trait BaseTTS: Send + Sync {
    /// Create a provider from the configuration bag
    fn new(config: TTSConfig) -> TTSResult<Self>
    where
        Self: Sized;

    /// Provider tag, e.g. "deepgram"
    fn provider(&self) -> &'static str;

    /// Models this provider can synthesize with
    fn get_models(&self) -> Vec<Model>;

    /// All voices the provider offers, keyed by voice id
    fn available_voices(&self) -> HashMap<String, Voice>;

    /// Voice used for `language` on `model` when the caller names none
    fn default_voice(&self, model: &str, language: &str) -> Option<String>;

    /// Synthesize `text`, optionally overriding the configured voice
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TTSResult<AudioResponse>;

    /// Static description of the provider for diagnostics
    fn get_provider_info(&self) -> serde_json::Value;
}

/// Boxed provider as returned by the factory
pub type BoxedTTS = Box<dyn BaseTTS>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_new_has_no_context_window() {
        let model = Model::new("aura-2", "deepgram");
        assert_eq!(model.id, "aura-2");
        assert_eq!(model.owned_by, "deepgram");
        assert!(model.context_window.is_none());
    }

    #[test]
    fn test_voice_gender_serde() {
        let json = serde_json::to_string(&VoiceGender::Female).unwrap();
        assert_eq!(json, "\"FEMALE\"");
        let parsed: VoiceGender = serde_json::from_str("\"MALE\"").unwrap();
        assert_eq!(parsed, VoiceGender::Male);
    }

    #[test]
    fn test_tts_config_deserializes_partial() {
        let config: TTSConfig =
            serde_json::from_str(r#"{"voice_id": "thalia", "sample_rate": 24000}"#).unwrap();
        assert_eq!(config.voice_id.as_deref(), Some("thalia"));
        assert_eq!(config.sample_rate, Some(24000));
        assert!(config.api_key.is_none());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = TTSError::ProviderError("Deepgram API error: rate limited".to_string());
        assert_eq!(
            err.to_string(),
            "Provider error: Deepgram API error: rate limited"
        );
    }

    #[tokio::test]
    async fn test_audio_response_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        let response = AudioResponse {
            audio_data: vec![1, 2, 3, 4],
            content_type: "audio/mpeg".to_string(),
            model: "aura-2".to_string(),
            voice: "thalia".to_string(),
            provider: "deepgram".to_string(),
            duration_ms: None,
            metadata: HashMap::new(),
        };

        response.save(&path).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(response.len(), 4);
        assert!(!response.is_empty());
    }

    #[tokio::test]
    async fn test_audio_response_save_missing_dir() {
        let response = AudioResponse {
            audio_data: vec![0],
            content_type: "audio/mpeg".to_string(),
            model: "aura".to_string(),
            voice: "asteria".to_string(),
            provider: "deepgram".to_string(),
            duration_ms: None,
            metadata: HashMap::new(),
        };
        let result = response.save("/nonexistent-dir/sub/out.mp3").await;
        assert!(matches!(result, Err(TTSError::InternalError(_))));
    }
}
