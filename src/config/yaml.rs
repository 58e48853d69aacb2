use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present
/// here override environment variables.
///
/// # Example YAML structure
/// ```yaml
/// deepgram:
///   api_key: "your-deepgram-key"
///   base_url: "https://api.deepgram.com/v1/speak"
///   model: "aura-2"
///   voice: "thalia"
///   language: "en"
///   audio_format: "mp3"
///   sample_rate: 24000
///   request_timeout_seconds: 60
///   connection_timeout_seconds: 30
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub deepgram: Option<DeepgramYaml>,
}

/// Deepgram adapter settings from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeepgramYaml {
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

impl YamlConfig {
    /// Load YAML configuration from a file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The YAML is malformed
    /// - Fields have invalid types
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_config_full() {
        let yaml = r#"
deepgram:
  api_key: "dg-key"
  base_url: "http://localhost:9000/v1/speak"
  model: "aura"
  voice: "orion"
  language: "en-US"
  audio_format: "linear16"
  sample_rate: 16000
  request_timeout_seconds: 10
  connection_timeout_seconds: 5
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        let deepgram = config.deepgram.unwrap();
        assert_eq!(deepgram.api_key, Some("dg-key".to_string()));
        assert_eq!(
            deepgram.base_url,
            Some("http://localhost:9000/v1/speak".to_string())
        );
        assert_eq!(deepgram.model, Some("aura".to_string()));
        assert_eq!(deepgram.voice, Some("orion".to_string()));
        assert_eq!(deepgram.language, Some("en-US".to_string()));
        assert_eq!(deepgram.audio_format, Some("linear16".to_string()));
        assert_eq!(deepgram.sample_rate, Some(16000));
        assert_eq!(deepgram.request_timeout_seconds, Some(10));
        assert_eq!(deepgram.connection_timeout_seconds, Some(5));
    }

    #[test]
    fn test_yaml_config_partial() {
        let yaml = r#"
deepgram:
  voice: "luna"
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        let deepgram = config.deepgram.unwrap();
        assert_eq!(deepgram.voice, Some("luna".to_string()));
        assert!(deepgram.api_key.is_none());
        assert!(deepgram.sample_rate.is_none());
    }

    #[test]
    fn test_yaml_config_empty() {
        let config: YamlConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.deepgram.is_none());
    }

    #[test]
    fn test_yaml_config_wrong_type() {
        let yaml = r#"
deepgram:
  sample_rate: "fast"
"#;
        let result: Result<YamlConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(&config_path, "deepgram:\n  model: \"aura-2\"\n").unwrap();

        let config = YamlConfig::from_file(&config_path).unwrap();
        assert_eq!(
            config.deepgram.as_ref().unwrap().model,
            Some("aura-2".to_string())
        );
    }

    #[test]
    fn test_from_file_not_found() {
        let path = PathBuf::from("/nonexistent/config.yaml");
        let result = YamlConfig::from_file(&path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.yaml");

        fs::write(&config_path, "invalid: yaml: content:").unwrap();

        let result = YamlConfig::from_file(&config_path);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse YAML")
        );
    }
}
