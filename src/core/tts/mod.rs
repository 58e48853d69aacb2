mod base;
pub mod deepgram;

pub use base::{
    AudioResponse, BaseTTS, BoxedTTS, Model, TTSConfig, TTSError, TTSResult, Voice, VoiceGender,
};
pub use deepgram::{DEEPGRAM_TTS_URL, DeepgramTTS};

use std::collections::HashMap;

/// Factory function to create a TTS provider.
///
/// # Supported Providers
///
/// - `"deepgram"` or `"deepgram-aura"` or `"aura"` - Deepgram Aura TTS API
///
/// # Example
///
/// ```rust,ignore
/// use waav_deepgram_tts::core::tts::{create_tts_provider, TTSConfig};
///
/// let config = TTSConfig {
///     api_key: Some("your-api-key".to_string()),
///     voice_id: Some("thalia".to_string()),
///     ..Default::default()
/// };
///
/// let provider = create_tts_provider("deepgram", config)?;
/// ```
pub fn create_tts_provider(provider_type: &str, config: TTSConfig) -> TTSResult<BoxedTTS> {
    match provider_type.trim().to_lowercase().as_str() {
        "deepgram" | "deepgram-aura" | "deepgram_aura" | "aura" => {
            Ok(Box::new(DeepgramTTS::new(config)?))
        }
        _ => Err(TTSError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: deepgram"
        ))),
    }
}

/// Returns a map of provider names to their default API endpoint URLs.
pub fn get_tts_provider_urls() -> HashMap<String, String> {
    let mut urls = HashMap::new();
    urls.insert("deepgram".to_string(), DEEPGRAM_TTS_URL.to_string());
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed() -> TTSConfig {
        TTSConfig {
            api_key: Some("test_key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_tts_provider() {
        let provider = create_tts_provider("deepgram", keyed()).unwrap();
        assert_eq!(provider.provider(), "deepgram");

        let invalid_result = create_tts_provider("invalid", keyed());
        assert!(invalid_result.is_err());
    }

    #[test]
    fn test_create_tts_provider_aliases() {
        for alias in ["deepgram-aura", "aura", "DeepGram", " AURA "] {
            let provider = create_tts_provider(alias, keyed());
            assert!(provider.is_ok(), "alias {alias} should resolve");
        }
    }

    #[test]
    fn test_create_tts_provider_propagates_config_errors() {
        let config = TTSConfig {
            model: Some("nova-2".to_string()),
            ..keyed()
        };
        assert!(matches!(
            create_tts_provider("deepgram", config),
            Err(TTSError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_provider_error_message() {
        let result = create_tts_provider("elevenlabs", keyed());
        match result {
            Err(TTSError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("elevenlabs"));
                assert!(msg.contains("deepgram"));
            }
            Err(other) => panic!("Expected InvalidConfiguration error, got: {:?}", other),
            Ok(_) => panic!("Expected error for invalid provider"),
        }
    }

    #[test]
    fn test_get_tts_provider_urls() {
        let urls = get_tts_provider_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls.get("deepgram").map(String::as_str),
            Some("https://api.deepgram.com/v1/speak")
        );
    }
}
