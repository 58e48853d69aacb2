//! Tests for the Deepgram Aura TTS provider.
//!
//! Covers construction and credential resolution, catalog queries, header
//! construction, error normalization and input validation. HTTP round trips
//! live in `tests/deepgram_tts_integration.rs`.

use reqwest::StatusCode;
use serial_test::serial;

use super::*;
use crate::core::tts::base::{BaseTTS, TTSConfig, TTSError};

fn keyed_config() -> TTSConfig {
    TTSConfig {
        api_key: Some("explicit_key".to_string()),
        ..Default::default()
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

mod construction_tests {
    use super::*;

    #[test]
    #[serial]
    fn test_missing_api_key_is_rejected() {
        unsafe {
            std::env::remove_var(DEEPGRAM_API_KEY_ENV);
        }

        let result = DeepgramTTS::new(TTSConfig::default());
        match result {
            Err(TTSError::InvalidConfiguration(msg)) => {
                assert!(msg.contains(DEEPGRAM_API_KEY_ENV));
                assert!(msg.contains("api_key"));
            }
            Err(other) => panic!("Expected InvalidConfiguration, got {other:?}"),
            Ok(_) => panic!("Expected InvalidConfiguration, got a provider"),
        }
    }

    #[test]
    #[serial]
    fn test_empty_api_key_counts_as_missing() {
        unsafe {
            std::env::set_var(DEEPGRAM_API_KEY_ENV, "");
        }

        let result = DeepgramTTS::with_options(None, Some(""), None, TTSConfig::default());
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));

        unsafe {
            std::env::remove_var(DEEPGRAM_API_KEY_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_api_key_from_env() {
        unsafe {
            std::env::set_var(DEEPGRAM_API_KEY_ENV, "env_key");
        }

        let tts = DeepgramTTS::new(TTSConfig::default()).unwrap();
        assert_eq!(tts.config().api_key, "env_key");

        unsafe {
            std::env::remove_var(DEEPGRAM_API_KEY_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_explicit_api_key_wins_over_env() {
        unsafe {
            std::env::set_var(DEEPGRAM_API_KEY_ENV, "env_key");
        }

        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        assert_eq!(tts.config().api_key, "explicit_key");

        let tts =
            DeepgramTTS::with_options(None, Some("option_key"), None, keyed_config()).unwrap();
        assert_eq!(tts.config().api_key, "option_key");

        unsafe {
            std::env::remove_var(DEEPGRAM_API_KEY_ENV);
        }
    }

    #[test]
    fn test_defaults() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        assert_eq!(tts.model(), "aura-2");
        assert_eq!(tts.voice().as_deref(), Some("thalia"));
        assert_eq!(tts.base_url(), DEEPGRAM_TTS_URL);
        assert_eq!(tts.encoding(), DeepgramEncoding::Mp3);
        assert_eq!(tts.provider(), "deepgram");
    }

    #[test]
    fn test_with_options_overrides() {
        let tts = DeepgramTTS::with_options(
            Some("aura"),
            None,
            Some("http://localhost:8080/v1/speak"),
            keyed_config(),
        )
        .unwrap();
        assert_eq!(tts.model(), "aura");
        assert_eq!(tts.voice().as_deref(), Some("asteria"));
        assert_eq!(tts.base_url(), "http://localhost:8080/v1/speak");
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let result = DeepgramTTS::with_options(Some("nova-3"), None, None, keyed_config());
        match result {
            Err(TTSError::InvalidConfiguration(msg)) => assert!(msg.contains("nova-3")),
            Err(other) => panic!("Expected InvalidConfiguration, got {other:?}"),
            Ok(_) => panic!("Expected InvalidConfiguration, got a provider"),
        }
    }

    #[test]
    fn test_full_model_id() {
        let tts =
            DeepgramTTS::with_options(Some("aura-2-andromeda-en"), None, None, keyed_config())
                .unwrap();
        assert_eq!(tts.model(), "aura-2");
        assert_eq!(tts.voice().as_deref(), Some("andromeda"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = DeepgramTTS::with_options(None, None, Some("::not-a-url"), keyed_config());
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_get_models() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let models = tts.get_models();
        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["aura-2", "aura"]);
        for model in &models {
            assert_eq!(model.owned_by, "deepgram");
            assert!(model.context_window.is_none());
        }
    }

    #[test]
    fn test_available_voices_keyed_by_id() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let voices = tts.available_voices();
        assert!(!voices.is_empty());
        for (key, voice) in &voices {
            assert_eq!(key, &voice.id);
        }
        // Global listing spans both models
        assert!(voices.contains_key("thalia"));
        assert!(voices.contains_key("stella"));
        assert!(voices.contains_key("celeste"));
    }

    #[test]
    fn test_default_voice_language_forms() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        for language in ["en", "EN", "en-US", "en_us"] {
            assert_eq!(
                tts.default_voice("aura-2", language).as_deref(),
                Some("thalia"),
                "language {language}"
            );
        }
        assert_eq!(tts.default_voice("aura", "en").as_deref(), Some("asteria"));
        assert_eq!(tts.default_voice("aura-2", "ja").as_deref(), Some("fujin"));
        assert!(tts.default_voice("aura", "es").is_none());
        assert!(tts.default_voice("nova-2", "en").is_none());
    }

    #[test]
    fn test_every_default_voice_is_in_its_voice_set() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        for model in ["aura-2", "aura"] {
            for language in tts.supported_languages(model) {
                let default = tts
                    .default_voice(model, language)
                    .unwrap_or_else(|| panic!("no default for {model}/{language}"));
                assert!(
                    tts.voices_for(model, language).contains(&default),
                    "{default} missing from {model}/{language}"
                );
            }
        }
    }

    #[test]
    fn test_voices_for_model_is_scoped() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let aura = tts.voices_for_model("aura");
        assert!(aura.contains_key("asteria"));
        assert!(!aura.contains_key("thalia"));
        assert!(aura.len() < tts.available_voices().len());
    }

    #[test]
    fn test_provider_info() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let info = tts.get_provider_info();
        assert_eq!(info["provider"], "deepgram");
        assert_eq!(info["api_type"], "HTTP REST");
        assert_eq!(info["max_text_length"], 2000);
        assert_eq!(info["endpoint"], DEEPGRAM_TTS_URL);
        let models = info["supported_models"].as_array().unwrap();
        assert_eq!(models.len(), 2);
    }
}

// =============================================================================
// Request Building Tests
// =============================================================================

mod request_tests {
    use super::*;

    #[test]
    fn test_headers() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let headers = tts.headers().unwrap();
        assert_eq!(headers["authorization"], "Token explicit_key");
        assert_eq!(headers["content-type"], "application/json");
    }

    #[test]
    fn test_headers_reject_invalid_key() {
        let tts = DeepgramTTS::new(TTSConfig {
            api_key: Some("bad\nkey".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            tts.headers(),
            Err(TTSError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_model_parameter() {
        assert_eq!(
            DeepgramTTS::model_parameter("aura-2", "thalia", "en"),
            "aura-2-thalia-en"
        );
        assert_eq!(
            DeepgramTTS::model_parameter("aura", "asteria", "en"),
            "aura-asteria-en"
        );
    }

    #[test]
    fn test_query_params_for_default_mp3() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let params = tts.config().build_query_params("aura-2-thalia-en");
        assert_eq!(
            params,
            vec![
                ("model", "aura-2-thalia-en".to_string()),
                ("encoding", "mp3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_synthesize_rejects_empty_text() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let result = tts.synthesize("   ", None).await;
        assert!(matches!(result, Err(TTSError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_synthesize_rejects_long_text() {
        let tts = DeepgramTTS::new(keyed_config()).unwrap();
        let text = "a".repeat(MAX_TEXT_LENGTH + 1);
        let result = tts.synthesize(&text, None).await;
        assert!(matches!(result, Err(TTSError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_synthesize_rejects_voice_from_other_model() {
        let tts = DeepgramTTS::with_options(Some("aura"), None, None, keyed_config()).unwrap();
        let result = tts.synthesize("Hello", Some("thalia")).await;
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));
    }
}

// =============================================================================
// Error Handling Tests
// =============================================================================

mod error_tests {
    use super::*;

    fn provider_message(status: u16, body: &str) -> String {
        let status = StatusCode::from_u16(status).unwrap();
        match DeepgramTTS::handle_error(status, body) {
            Err(TTSError::ProviderError(msg)) => msg,
            other => panic!("Expected ProviderError, got {other:?}"),
        }
    }

    #[test]
    fn test_success_status_passes() {
        assert!(DeepgramTTS::handle_error(StatusCode::OK, "").is_ok());
        assert!(DeepgramTTS::handle_error(StatusCode::from_u16(399).unwrap(), "x").is_ok());
    }

    #[test]
    fn test_details_field() {
        let msg = provider_message(429, r#"{"details": "rate limited"}"#);
        assert_eq!(msg, "Deepgram API error: rate limited");
    }

    #[test]
    fn test_message_field_fallback() {
        let msg = provider_message(400, r#"{"details": "", "message": "bad voice"}"#);
        assert_eq!(msg, "Deepgram API error: bad voice");
    }

    #[test]
    fn test_status_code_fallback() {
        let msg = provider_message(403, r#"{"err_code": "FORBIDDEN"}"#);
        assert_eq!(msg, "Deepgram API error: HTTP 403");
    }

    #[test]
    fn test_non_json_body() {
        let msg = provider_message(500, "internal error");
        assert!(msg.contains("500"));
        assert!(msg.contains("internal error"));
        assert_eq!(msg, "Deepgram API error: HTTP 500: internal error");
    }

    #[test]
    fn test_non_object_json_body() {
        let msg = provider_message(502, r#"["upstream"]"#);
        assert_eq!(msg, r#"Deepgram API error: HTTP 502: ["upstream"]"#);
    }

    #[test]
    fn test_error_from_response_matches_handle_error() {
        let status = StatusCode::UNAUTHORIZED;
        let body = r#"{"details": "", "message": "invalid credentials"}"#;
        match DeepgramTTS::error_from_response(status, body) {
            TTSError::ProviderError(msg) => {
                assert_eq!(msg, "Deepgram API error: invalid credentials");
                assert_eq!(msg, provider_message(401, body));
            }
            other => panic!("Expected ProviderError, got {other:?}"),
        }
    }
}
