use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing::info;

use waav_deepgram_tts::config::estimate_tts_cost;
use waav_deepgram_tts::core::tts::deepgram::catalog;
use waav_deepgram_tts::{AdapterConfig, BaseTTS, DeepgramTTS};

/// WaaV Deepgram TTS - Deepgram Aura text-to-speech adapter
#[derive(Parser, Debug)]
#[command(name = "waav-deepgram-tts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available models
    Models,

    /// List voices as JSON
    Voices {
        /// Restrict to one model
        #[arg(short = 'm', long = "model")]
        model: Option<String>,

        /// Restrict to one language (requires --model)
        #[arg(short = 'l', long = "language", requires = "model")]
        language: Option<String>,
    },

    /// Print the default voice for a model and language
    DefaultVoice {
        #[arg(short = 'm', long = "model", default_value = catalog::DEFAULT_MODEL)]
        model: String,

        #[arg(short = 'l', long = "language", default_value = catalog::DEFAULT_LANGUAGE)]
        language: String,
    },

    /// Synthesize text to an audio file
    Speak {
        /// Text to synthesize
        #[arg(short = 't', long = "text")]
        text: String,

        /// Voice override
        #[arg(short = 'v', long = "voice")]
        voice: Option<String>,

        /// Output file path
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => {
            let models = catalog::models();
            println!("{}", serde_json::to_string_pretty(&models)?);
        }
        Commands::Voices { model, language } => {
            let voices = match (model.as_deref(), language.as_deref()) {
                (Some(model), Some(language)) => {
                    let voices: Vec<_> = catalog::voices_for(model, language)
                        .iter()
                        .filter_map(|name| catalog::voice(name))
                        .collect();
                    serde_json::to_value(voices)?
                }
                (Some(model), None) => {
                    let mut voices: Vec<_> =
                        catalog::voices_for_model(model).into_values().collect();
                    voices.sort_by(|a, b| a.id.cmp(&b.id));
                    serde_json::to_value(voices)?
                }
                _ => {
                    let mut voices: Vec<_> = catalog::all_voices().into_values().collect();
                    voices.sort_by(|a, b| a.id.cmp(&b.id));
                    serde_json::to_value(voices)?
                }
            };
            println!("{}", serde_json::to_string_pretty(&voices)?);
        }
        Commands::DefaultVoice { model, language } => {
            let voice = catalog::default_voice(&model, &language).ok_or_else(|| {
                anyhow!("No default voice for model '{model}' and language '{language}'")
            })?;
            println!("{voice}");
        }
        Commands::Speak {
            text,
            voice,
            output,
        } => {
            let config = if let Some(config_path) = cli.config {
                info!("Loading configuration from {}", config_path.display());
                AdapterConfig::from_file(&config_path).map_err(|e| anyhow!(e.to_string()))?
            } else {
                AdapterConfig::from_env().map_err(|e| anyhow!(e.to_string()))?
            };

            let tts = DeepgramTTS::new(config.to_tts_config())?;
            let audio = tts.synthesize(&text, voice.as_deref()).await?;
            audio.save(&output).await?;

            let cost = estimate_tts_cost("deepgram", tts.model(), text.chars().count());
            info!(
                bytes = audio.len(),
                voice = %audio.voice,
                content_type = %audio.content_type,
                estimated_cost_usd = ?cost,
                "Audio written to {}",
                output.display()
            );
            println!("{}", output.display());
        }
    }

    Ok(())
}
