//! Environment variable loading for the adapter configuration.

use std::env;
use std::str::FromStr;

pub const ENV_API_KEY: &str = "DEEPGRAM_API_KEY";
pub const ENV_BASE_URL: &str = "DEEPGRAM_TTS_URL";
pub const ENV_MODEL: &str = "DEEPGRAM_TTS_MODEL";
pub const ENV_VOICE: &str = "DEEPGRAM_TTS_VOICE";
pub const ENV_LANGUAGE: &str = "DEEPGRAM_TTS_LANGUAGE";
pub const ENV_ENCODING: &str = "DEEPGRAM_TTS_ENCODING";
pub const ENV_SAMPLE_RATE: &str = "DEEPGRAM_TTS_SAMPLE_RATE";
pub const ENV_REQUEST_TIMEOUT: &str = "DEEPGRAM_TTS_REQUEST_TIMEOUT";
pub const ENV_CONNECT_TIMEOUT: &str = "DEEPGRAM_TTS_CONNECT_TIMEOUT";

/// Every variable the adapter reads
pub const ALL_VARS: &[&str] = &[
    ENV_API_KEY,
    ENV_BASE_URL,
    ENV_MODEL,
    ENV_VOICE,
    ENV_LANGUAGE,
    ENV_ENCODING,
    ENV_SAMPLE_RATE,
    ENV_REQUEST_TIMEOUT,
    ENV_CONNECT_TIMEOUT,
];

/// Read a string variable; unset and blank values yield `None`.
pub fn string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read and parse a numeric variable, naming the variable on failure.
pub fn number<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match string(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Invalid value for {name}: '{raw}' ({e})")),
        None => Ok(None),
    }
}
