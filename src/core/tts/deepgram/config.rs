//! Configuration types for the Deepgram Aura TTS API.
//!
//! This module contains:
//! - Audio encoding and container selection with Deepgram's per-encoding rules
//! - Model string parsing (`aura-2`, or a full `aura-2-thalia-en` model id)
//! - [`DeepgramTTSConfig`], the resolved provider configuration built from the
//!   generic [`TTSConfig`] bag

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::catalog::{self, DEFAULT_LANGUAGE, DEFAULT_MODEL};
use crate::core::tts::base::{TTSConfig, TTSError, TTSResult};

/// Deepgram Aura REST endpoint
pub const DEEPGRAM_TTS_URL: &str = "https://api.deepgram.com/v1/speak";

/// Environment variable consulted when no API key is passed
pub const DEEPGRAM_API_KEY_ENV: &str = "DEEPGRAM_API_KEY";

/// Default whole-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle connections kept per host
pub const DEFAULT_POOL_SIZE: usize = 4;

// =============================================================================
// Audio Encoding
// =============================================================================

/// Audio encodings accepted by the `encoding` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeepgramEncoding {
    /// 16-bit signed little-endian PCM
    Linear16,
    /// 8-bit G.711 μ-law
    Mulaw,
    /// 8-bit G.711 A-law
    Alaw,
    /// MP3 (Deepgram's default)
    #[default]
    Mp3,
    /// Opus in an Ogg container
    Opus,
    Flac,
    Aac,
}

impl DeepgramEncoding {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear16 => "linear16",
            Self::Mulaw => "mulaw",
            Self::Alaw => "alaw",
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Flac => "flac",
            Self::Aac => "aac",
        }
    }

    /// Parse an encoding name or one of its common aliases.
    pub fn parse(s: &str) -> TTSResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear16" | "pcm" | "wav" | "l16" => Ok(Self::Linear16),
            "mulaw" | "ulaw" | "mu-law" => Ok(Self::Mulaw),
            "alaw" | "a-law" => Ok(Self::Alaw),
            "mp3" | "mpeg" => Ok(Self::Mp3),
            "opus" | "ogg" => Ok(Self::Opus),
            "flac" => Ok(Self::Flac),
            "aac" => Ok(Self::Aac),
            other => Err(TTSError::InvalidConfiguration(format!(
                "Unsupported Deepgram encoding '{other}'. Supported: linear16, mulaw, alaw, mp3, opus, flac, aac"
            ))),
        }
    }

    /// Sample rates the API accepts; empty when the rate is fixed by the codec.
    pub fn supported_sample_rates(&self) -> &'static [u32] {
        match self {
            Self::Linear16 => &[8000, 16000, 24000, 32000, 48000],
            Self::Mulaw | Self::Alaw => &[8000, 16000],
            Self::Flac => &[8000, 16000, 22050, 32000, 48000],
            Self::Mp3 | Self::Opus | Self::Aac => &[],
        }
    }

    /// Sample rate used when none is configured.
    pub fn default_sample_rate(&self) -> u32 {
        match self {
            Self::Linear16 => 24000,
            Self::Mulaw | Self::Alaw => 8000,
            Self::Mp3 | Self::Aac => 22050,
            Self::Opus | Self::Flac => 48000,
        }
    }

    /// Whether `sample_rate` may be sent for this encoding.
    #[inline]
    pub fn has_configurable_sample_rate(&self) -> bool {
        !self.supported_sample_rates().is_empty()
    }

    /// Accepted `bit_rate` range, `None` for uncompressed encodings.
    pub fn bit_rate_range(&self) -> Option<(u32, u32)> {
        match self {
            Self::Mp3 => Some((32000, 48000)),
            Self::Opus => Some((4000, 650000)),
            Self::Aac => Some((4000, 192000)),
            Self::Linear16 | Self::Mulaw | Self::Alaw | Self::Flac => None,
        }
    }

    /// Bytes per sample for raw telephony/PCM encodings.
    pub fn bytes_per_sample(&self) -> Option<u32> {
        match self {
            Self::Linear16 => Some(2),
            Self::Mulaw | Self::Alaw => Some(1),
            _ => None,
        }
    }

    /// Containers the API accepts for this encoding.
    pub fn supported_containers(&self) -> &'static [DeepgramContainer] {
        match self {
            Self::Linear16 | Self::Mulaw | Self::Alaw => {
                &[DeepgramContainer::Wav, DeepgramContainer::None]
            }
            Self::Opus => &[DeepgramContainer::Ogg],
            Self::Mp3 | Self::Flac | Self::Aac => &[],
        }
    }

    /// Container used when none is configured.
    pub fn default_container(&self) -> Option<DeepgramContainer> {
        self.supported_containers().first().copied()
    }

    /// MIME type of the audio Deepgram returns.
    pub fn mime_type(&self, container: Option<DeepgramContainer>) -> &'static str {
        match (self, container) {
            (Self::Linear16 | Self::Mulaw | Self::Alaw, Some(DeepgramContainer::Wav)) => {
                "audio/wav"
            }
            (Self::Linear16, _) => "audio/l16",
            (Self::Mulaw, _) => "audio/basic",
            (Self::Alaw, _) => "audio/x-alaw-basic",
            (Self::Mp3, _) => "audio/mpeg",
            (Self::Opus, _) => "audio/ogg",
            (Self::Flac, _) => "audio/flac",
            (Self::Aac, _) => "audio/aac",
        }
    }
}

impl std::fmt::Display for DeepgramEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio container wrapped around the encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeepgramContainer {
    Wav,
    Ogg,
    /// Raw samples without a container
    None,
}

impl DeepgramContainer {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::None => "none",
        }
    }

    pub fn parse(s: &str) -> TTSResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wav" => Ok(Self::Wav),
            "ogg" => Ok(Self::Ogg),
            "none" | "raw" => Ok(Self::None),
            other => Err(TTSError::InvalidConfiguration(format!(
                "Unsupported Deepgram container '{other}'. Supported: wav, ogg, none"
            ))),
        }
    }
}

impl std::fmt::Display for DeepgramContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Model Selection
// =============================================================================

/// A model name split into its catalog model and optional voice/language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub model: &'static str,
    pub voice: Option<String>,
    pub language: Option<&'static str>,
}

/// Parse `aura-2`, `aura`, or a full Deepgram model id such as
/// `aura-2-thalia-en` / `aura-asteria-en`.
pub fn parse_model_name(name: &str) -> TTSResult<ModelSelection> {
    let name = name.trim().to_lowercase();

    // Longest model ids first so "aura-2-" wins over "aura-"
    let mut ids: Vec<&'static str> = catalog::MODEL_LANGUAGE_VOICES
        .iter()
        .map(|(id, _)| *id)
        .collect();
    ids.sort_by_key(|id| std::cmp::Reverse(id.len()));

    for model in ids {
        if name == model {
            return Ok(ModelSelection {
                model,
                voice: None,
                language: None,
            });
        }

        let Some(rest) = name.strip_prefix(model).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };
        if let Some((voice, language)) = rest.rsplit_once('-')
            && catalog::voices_for(model, language).contains(&voice)
        {
            return Ok(ModelSelection {
                model,
                voice: Some(voice.to_string()),
                language: catalog::language_of(model, voice),
            });
        }
    }

    Err(TTSError::InvalidConfiguration(format!(
        "Unsupported Deepgram model '{name}'. Supported: aura-2, aura"
    )))
}

// =============================================================================
// Resolved Provider Configuration
// =============================================================================

/// Fully resolved Deepgram configuration.
///
/// Built once per adapter; all values are validated. The API key is wiped
/// from memory when the configuration is dropped.
#[derive(Clone)]
pub struct DeepgramTTSConfig {
    pub api_key: String,
    pub base_url: Url,
    /// Catalog model id ("aura-2" or "aura")
    pub model: &'static str,
    /// Configured voice; `None` means the language default
    pub voice: Option<String>,
    /// Primary language subtag used for default voice selection
    pub language: String,
    pub encoding: DeepgramEncoding,
    /// Sample rate, only set for encodings with a configurable rate
    pub sample_rate: Option<u32>,
    pub bit_rate: Option<u32>,
    pub container: Option<DeepgramContainer>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_size: usize,
}

impl DeepgramTTSConfig {
    /// Resolve and validate the provider configuration from the generic bag.
    ///
    /// The API key comes from `config.api_key`, falling back to the
    /// `DEEPGRAM_API_KEY` environment variable. Empty values count as unset.
    pub fn from_base(config: &TTSConfig) -> TTSResult<Self> {
        let api_key = resolve_api_key(config.api_key.as_deref())?;

        let base_url_str = config
            .base_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEEPGRAM_TTS_URL);
        let base_url = Url::parse(base_url_str).map_err(|e| {
            TTSError::InvalidConfiguration(format!("Invalid base URL '{base_url_str}': {e}"))
        })?;

        let selection = match config.model.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(name) => parse_model_name(name)?,
            None => parse_model_name(DEFAULT_MODEL)?,
        };

        let language = config
            .language
            .as_deref()
            .map(catalog::normalize_language)
            .filter(|l| !l.is_empty())
            .or_else(|| selection.language.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        if !catalog::supported_languages(selection.model).contains(&language.as_str()) {
            return Err(TTSError::InvalidConfiguration(format!(
                "Language '{}' is not supported by model '{}'. Supported: {}",
                language,
                selection.model,
                catalog::supported_languages(selection.model).join(", ")
            )));
        }

        let voice = config
            .voice_id
            .as_deref()
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .or(selection.voice);

        if let Some(ref voice) = voice
            && catalog::language_of(selection.model, voice).is_none()
        {
            return Err(TTSError::InvalidConfiguration(format!(
                "Voice '{}' is not available for model '{}'",
                voice, selection.model
            )));
        }

        let encoding = match config.audio_format.as_deref() {
            Some(format) if !format.trim().is_empty() => DeepgramEncoding::parse(format)?,
            _ => DeepgramEncoding::default(),
        };

        let container = match config.container.as_deref() {
            Some(c) if !c.trim().is_empty() => Some(DeepgramContainer::parse(c)?),
            _ => encoding.default_container(),
        };

        let sample_rate = if encoding.has_configurable_sample_rate() {
            Some(config.sample_rate.unwrap_or(encoding.default_sample_rate()))
        } else {
            None
        };

        let resolved = Self {
            api_key,
            base_url,
            model: selection.model,
            voice,
            language,
            encoding,
            sample_rate,
            bit_rate: config.bit_rate,
            container,
            request_timeout: Duration::from_secs(
                config
                    .request_timeout
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            connect_timeout: Duration::from_secs(
                config
                    .connection_timeout
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            pool_size: config.request_pool_size.unwrap_or(DEFAULT_POOL_SIZE),
        };

        // A fixed-rate codec silently ignores a configured sample rate upstream;
        // reject it here so the caller is not surprised by the output rate.
        if !encoding.has_configurable_sample_rate() && config.sample_rate.is_some() {
            return Err(TTSError::InvalidConfiguration(format!(
                "Encoding '{encoding}' has a fixed sample rate; remove sample_rate"
            )));
        }

        resolved.validate().map_err(TTSError::InvalidConfiguration)?;
        Ok(resolved)
    }

    /// Validate audio options against Deepgram's per-encoding rules.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rate) = self.sample_rate {
            let supported = self.encoding.supported_sample_rates();
            if !supported.contains(&rate) {
                return Err(format!(
                    "sample_rate {} is not supported for {}; expected one of {:?}",
                    rate, self.encoding, supported
                ));
            }
        }

        if let Some(bit_rate) = self.bit_rate {
            match self.encoding.bit_rate_range() {
                Some((min, max)) if self.encoding == DeepgramEncoding::Mp3 => {
                    if bit_rate != min && bit_rate != max {
                        return Err(format!(
                            "bit_rate {bit_rate} is not supported for mp3; expected {min} or {max}"
                        ));
                    }
                }
                Some((min, max)) => {
                    if !(min..=max).contains(&bit_rate) {
                        return Err(format!(
                            "bit_rate {} is out of range for {}; expected {}..={}",
                            bit_rate, self.encoding, min, max
                        ));
                    }
                }
                None => {
                    return Err(format!(
                        "bit_rate is not applicable to {}",
                        self.encoding
                    ));
                }
            }
        }

        if let Some(container) = self.container
            && !self.encoding.supported_containers().contains(&container)
        {
            return Err(format!(
                "container {} is not supported for {}",
                container, self.encoding
            ));
        }

        if self.pool_size == 0 {
            return Err("request_pool_size must be at least 1".to_string());
        }

        Ok(())
    }

    /// Voice name used when the caller does not pick one.
    pub fn effective_voice(&self) -> Option<String> {
        self.voice.clone().or_else(|| {
            catalog::default_voice(self.model, &self.language).map(str::to_string)
        })
    }

    /// Query parameters for one synthesis request.
    pub fn build_query_params(&self, model_param: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("model", model_param.to_string()),
            ("encoding", self.encoding.as_str().to_string()),
        ];
        if let Some(rate) = self.sample_rate {
            params.push(("sample_rate", rate.to_string()));
        }
        if let Some(bit_rate) = self.bit_rate {
            params.push(("bit_rate", bit_rate.to_string()));
        }
        if let Some(container) = self.container {
            params.push(("container", container.as_str().to_string()));
        }
        params
    }

    /// Sample rate of the returned audio.
    #[inline]
    pub fn effective_sample_rate(&self) -> u32 {
        self.sample_rate
            .unwrap_or_else(|| self.encoding.default_sample_rate())
    }
}

impl std::fmt::Debug for DeepgramTTSConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepgramTTSConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("model", &self.model)
            .field("voice", &self.voice)
            .field("language", &self.language)
            .field("encoding", &self.encoding)
            .field("sample_rate", &self.sample_rate)
            .field("bit_rate", &self.bit_rate)
            .field("container", &self.container)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

impl Drop for DeepgramTTSConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.api_key.zeroize();
    }
}

/// Explicit key first, then `DEEPGRAM_API_KEY`; empty strings count as missing.
pub fn resolve_api_key(explicit: Option<&str>) -> TTSResult<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(DEEPGRAM_API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty())
        })
        .ok_or_else(|| {
            TTSError::InvalidConfiguration(format!(
                "Deepgram API key not provided. Set {DEEPGRAM_API_KEY_ENV} env or pass api_key parameter."
            ))
        })
}
