pub mod tts;

// Re-export commonly used types for convenience
pub use tts::{
    AudioResponse, BaseTTS, BoxedTTS, DeepgramTTS, Model, TTSConfig, TTSError, TTSResult, Voice,
    VoiceGender, create_tts_provider, get_tts_provider_urls,
};
