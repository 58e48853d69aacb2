//! Deepgram Aura Text-to-Speech provider implementation.
//!
//! This module adapts Deepgram's Aura REST API to the shared [`BaseTTS`]
//! contract: static model and voice catalogs, default voice resolution and
//! one-shot synthesis.
//!
//! [`BaseTTS`]: crate::core::tts::BaseTTS
//!
//! # Models
//!
//! | Model | Languages |
//! |-------|-----------|
//! | `aura-2` (default) | en, es, nl, fr, de, it, ja |
//! | `aura` | en |
//!
//! A full Deepgram model id such as `aura-2-thalia-en` is also accepted and
//! selects the model, voice and language at once.
//!
//! # Default Voices
//!
//! - **aura-2**: thalia (en), celeste (es), rhea (nl), agathe (fr),
//!   julius (de), livia (it), fujin (ja)
//! - **aura**: asteria (en)
//!
//! # Audio Encodings
//!
//! mp3 (default), linear16, mulaw, alaw, opus, flac, aac. Raw encodings
//! default to a `wav` container; `container = "none"` returns bare samples.
//!
//! # Configuration
//!
//! ```bash
//! export DEEPGRAM_API_KEY="your-api-key"
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use waav_deepgram_tts::core::tts::{BaseTTS, TTSConfig};
//! use waav_deepgram_tts::core::tts::deepgram::DeepgramTTS;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tts = DeepgramTTS::new(TTSConfig {
//!         language: Some("es".to_string()),
//!         audio_format: Some("linear16".to_string()),
//!         sample_rate: Some(16000),
//!         ..Default::default()
//!     })?;
//!
//!     let audio = tts.synthesize("Hola, ¿cómo estás?", None).await?;
//!     audio.save("hola.wav").await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
mod config;
mod provider;

pub use config::{
    DEEPGRAM_API_KEY_ENV, DEEPGRAM_TTS_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DeepgramContainer, DeepgramEncoding, DeepgramTTSConfig,
    ModelSelection, parse_model_name, resolve_api_key,
};
pub use provider::{DeepgramTTS, MAX_TEXT_LENGTH};

#[cfg(test)]
mod tests;
