//! Deepgram Aura TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.deepgram.com/v1/speak`
//! - Auth: `Authorization: Token <api_key>`
//! - Query: `model=<model>-<voice>-<language>`, `encoding`, optional
//!   `sample_rate`, `bit_rate`, `container`
//! - Body: `{"text": "..."}` (at most 2000 characters)
//! - Response: raw audio bytes; `dg-request-id`, `dg-model-name` and
//!   `dg-char-count` response headers

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::{debug, error, info};

use super::catalog::{self, DEFAULT_LANGUAGE, PROVIDER};
use super::config::{
    DEEPGRAM_TTS_URL, DeepgramContainer, DeepgramEncoding, DeepgramTTSConfig,
};
use crate::core::tts::base::{
    AudioResponse, BaseTTS, Model, TTSConfig, TTSError, TTSResult, Voice,
};

/// Maximum characters Deepgram accepts in one request
pub const MAX_TEXT_LENGTH: usize = 2000;

/// Size of the canonical RIFF/WAVE header for integer PCM
const PCM_WAV_HEADER_LEN: usize = 44;

/// RIFF/WAVE header for G.711 output: 18-byte `fmt` chunk plus a `fact` chunk
const G711_WAV_HEADER_LEN: usize = 58;

// =============================================================================
// Deepgram TTS Provider
// =============================================================================

/// Deepgram Aura text-to-speech adapter.
///
/// Holds a validated [`DeepgramTTSConfig`] and a pooled HTTP client. All
/// state is read-only after construction apart from the request counter, so
/// one instance can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use waav_deepgram_tts::core::tts::{BaseTTS, DeepgramTTS, TTSConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let tts = DeepgramTTS::new(TTSConfig {
///         api_key: Some("dg-key".to_string()),
///         voice_id: Some("andromeda".to_string()),
///         ..Default::default()
///     })
///     .unwrap();
///
///     let audio = tts.synthesize("Hello from Aura", None).await.unwrap();
///     audio.save("hello.mp3").await.unwrap();
/// }
/// ```
pub struct DeepgramTTS {
    config: DeepgramTTSConfig,
    client: Client,
    /// Request counter for logging (atomic for lock-free access)
    request_counter: AtomicU64,
}

impl DeepgramTTS {
    /// Create a Deepgram adapter from the generic configuration bag.
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        let config = DeepgramTTSConfig::from_base(&config)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(|e| {
                TTSError::InternalError(format!("Failed to create HTTP client: {e}"))
            })?;

        info!(
            model = config.model,
            voice = ?config.voice,
            language = %config.language,
            encoding = %config.encoding,
            "Deepgram TTS provider initialized"
        );

        Ok(Self {
            config,
            client,
            request_counter: AtomicU64::new(0),
        })
    }

    /// Create an adapter from explicit arguments layered over `config`.
    ///
    /// `model_name`, `api_key` and `base_url` take precedence over the
    /// corresponding fields of `config` when given.
    pub fn with_options(
        model_name: Option<&str>,
        api_key: Option<&str>,
        base_url: Option<&str>,
        config: TTSConfig,
    ) -> TTSResult<Self> {
        let mut config = config;
        if let Some(model) = model_name {
            config.model = Some(model.to_string());
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            config.api_key = Some(key.to_string());
        }
        if let Some(url) = base_url {
            config.base_url = Some(url.to_string());
        }
        Self::new(config)
    }

    /// Catalog model id in use ("aura-2" or "aura").
    #[inline]
    pub fn model(&self) -> &'static str {
        self.config.model
    }

    /// Voice used when `synthesize` is called without one.
    pub fn voice(&self) -> Option<String> {
        self.config.effective_voice()
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    #[inline]
    pub fn encoding(&self) -> DeepgramEncoding {
        self.config.encoding
    }

    #[inline]
    pub fn config(&self) -> &DeepgramTTSConfig {
        &self.config
    }

    /// Request headers for the Deepgram API.
    ///
    /// Built per request so the key never sits in a long-lived header map.
    pub fn headers(&self) -> TTSResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Token {}", self.config.api_key))
            .map_err(|e| {
                TTSError::InvalidConfiguration(format!("API key is not a valid header value: {e}"))
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Convert an HTTP error response into a [`TTSError::ProviderError`].
    ///
    /// Statuses below 400 pass; anything else is [`Self::error_from_response`].
    pub fn handle_error(status: StatusCode, body: &str) -> TTSResult<()> {
        if status.as_u16() < 400 {
            return Ok(());
        }
        Err(Self::error_from_response(status, body))
    }

    /// Build the provider error for a failed response.
    ///
    /// The message is the first non-empty `details` or `message` field of a
    /// JSON object body, `HTTP <code>` when neither is set, or
    /// `HTTP <code>: <body>` when the body is not a JSON object.
    pub fn error_from_response(status: StatusCode, body: &str) -> TTSError {
        let code = status.as_u16();
        let message = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => ["details", "message"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(error_text))
                .unwrap_or_else(|| format!("HTTP {code}")),
            _ => format!("HTTP {code}: {body}"),
        };

        TTSError::ProviderError(format!("Deepgram API error: {message}"))
    }

    /// Resolve the voice for one request and the language it is listed under.
    fn resolve_voice(&self, voice: Option<&str>) -> TTSResult<(String, &'static str)> {
        let requested = voice
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty());

        let name = match requested.or_else(|| self.config.voice.clone()) {
            Some(name) => name,
            None => catalog::default_voice(self.config.model, &self.config.language)
                .or_else(|| catalog::default_voice(self.config.model, DEFAULT_LANGUAGE))
                .map(str::to_string)
                .ok_or_else(|| {
                    TTSError::InvalidConfiguration(format!(
                        "No default voice for model '{}' and language '{}'",
                        self.config.model, self.config.language
                    ))
                })?,
        };

        let language = catalog::language_of(self.config.model, &name).ok_or_else(|| {
            TTSError::InvalidConfiguration(format!(
                "Voice '{}' is not available for model '{}'",
                name, self.config.model
            ))
        })?;

        Ok((name, language))
    }

    /// Deepgram model parameter, e.g. `aura-2-thalia-en`.
    #[inline]
    pub fn model_parameter(model: &str, voice: &str, language: &str) -> String {
        format!("{model}-{voice}-{language}")
    }

    /// Playback length for uncompressed output, `None` otherwise.
    fn compute_duration_ms(&self, audio_len: usize) -> Option<u64> {
        let bytes_per_sample = self.config.encoding.bytes_per_sample()?;
        let payload = match self.config.container {
            Some(DeepgramContainer::Wav) => {
                audio_len.saturating_sub(wav_header_len(self.config.encoding))
            }
            _ => audio_len,
        };
        let bytes_per_second =
            u64::from(self.config.effective_sample_rate()) * u64::from(bytes_per_sample);
        if bytes_per_second == 0 {
            return None;
        }
        Some(payload as u64 * 1000 / bytes_per_second)
    }

    fn response_metadata(&self, headers: &HeaderMap) -> HashMap<String, Value> {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let mut metadata = HashMap::new();
        if let Some(request_id) = header_str("dg-request-id") {
            metadata.insert("request_id".to_string(), json!(request_id));
        }
        if let Some(model_name) = header_str("dg-model-name") {
            metadata.insert("model_name".to_string(), json!(model_name));
        }
        if let Some(char_count) = header_str("dg-char-count") {
            let value = char_count
                .parse::<u64>()
                .map(|n| json!(n))
                .unwrap_or_else(|_| json!(char_count));
            metadata.insert("char_count".to_string(), value);
        }
        metadata.insert("encoding".to_string(), json!(self.config.encoding.as_str()));
        if let Some(rate) = self.config.sample_rate {
            metadata.insert("sample_rate".to_string(), json!(rate));
        }
        if let Some(container) = self.config.container {
            metadata.insert("container".to_string(), json!(container.as_str()));
        }
        metadata
    }

    /// Voices usable with `model`, keyed by id.
    pub fn voices_for_model(&self, model: &str) -> HashMap<String, Voice> {
        catalog::voices_for_model(model)
    }

    /// Ordered voice ids for `model` in `language`.
    pub fn voices_for(&self, model: &str, language: &str) -> Vec<String> {
        catalog::voices_for(model, language)
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    pub fn supported_languages(&self, model: &str) -> Vec<&'static str> {
        catalog::supported_languages(model)
    }
}

/// Header bytes in front of the samples of a WAV-wrapped response.
fn wav_header_len(encoding: DeepgramEncoding) -> usize {
    match encoding {
        DeepgramEncoding::Mulaw | DeepgramEncoding::Alaw => G711_WAV_HEADER_LEN,
        _ => PCM_WAV_HEADER_LEN,
    }
}

/// Python-style truthiness for the error message fields.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl BaseTTS for DeepgramTTS {
    fn new(config: TTSConfig) -> TTSResult<Self> {
        DeepgramTTS::new(config)
    }

    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn get_models(&self) -> Vec<Model> {
        catalog::models()
    }

    fn available_voices(&self) -> HashMap<String, Voice> {
        catalog::all_voices()
    }

    fn default_voice(&self, model: &str, language: &str) -> Option<String> {
        catalog::default_voice(model, language).map(str::to_string)
    }

    async fn synthesize(&self, text: &str, voice: Option<&str>) -> TTSResult<AudioResponse> {
        if text.trim().is_empty() {
            return Err(TTSError::InvalidInput("Text must not be empty".to_string()));
        }
        let char_count = text.chars().count();
        if char_count > MAX_TEXT_LENGTH {
            return Err(TTSError::InvalidInput(format!(
                "Text is {char_count} characters; Deepgram accepts at most {MAX_TEXT_LENGTH}"
            )));
        }

        let (voice_name, language) = self.resolve_voice(voice)?;
        let model_param = Self::model_parameter(self.config.model, &voice_name, language);
        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed);

        debug!(
            request_id = request_id,
            model = %model_param,
            voice = %voice_name,
            chars = char_count,
            "Sending Deepgram TTS request"
        );

        let response = self
            .client
            .post(self.config.base_url.clone())
            .headers(self.headers()?)
            .query(&self.config.build_query_params(&model_param))
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| {
                error!(request_id = request_id, error = %e, "Deepgram TTS API request failed");
                TTSError::NetworkError(format!("Request failed: {e}"))
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            error!(
                request_id = request_id,
                status = %status,
                body = %body,
                "Deepgram TTS API returned error"
            );
            return Err(Self::error_from_response(status, &body));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                self.config
                    .encoding
                    .mime_type(self.config.container)
                    .to_string()
            });
        let metadata = self.response_metadata(response.headers());

        let audio: Bytes = response.bytes().await.map_err(|e| {
            error!(request_id = request_id, error = %e, "Failed to read audio response");
            TTSError::AudioGenerationFailed(format!("Failed to read audio: {e}"))
        })?;

        debug!(
            request_id = request_id,
            audio_bytes = audio.len(),
            "Successfully synthesized audio"
        );

        Ok(AudioResponse {
            duration_ms: self.compute_duration_ms(audio.len()),
            audio_data: audio.to_vec(),
            content_type,
            model: self.config.model.to_string(),
            voice: voice_name,
            provider: PROVIDER.to_string(),
            metadata,
        })
    }

    fn get_provider_info(&self) -> Value {
        json!({
            "provider": PROVIDER,
            "version": "1.0.0",
            "api_type": "HTTP REST",
            "connection_pooling": true,
            "supported_formats": ["linear16", "mulaw", "alaw", "mp3", "opus", "flac", "aac"],
            "supported_models": catalog::models().iter().map(|m| m.id.clone()).collect::<Vec<_>>(),
            "supported_languages": {
                "aura-2": catalog::supported_languages("aura-2"),
                "aura": catalog::supported_languages("aura"),
            },
            "default_model": catalog::DEFAULT_MODEL,
            "max_text_length": MAX_TEXT_LENGTH,
            "endpoint": DEEPGRAM_TTS_URL,
            "documentation": "https://developers.deepgram.com/docs/text-to-speech",
        })
    }
}
