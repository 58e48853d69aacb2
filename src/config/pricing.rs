//! Pricing table for Deepgram Aura synthesis.
//!
//! Prices are based on Deepgram's pay-as-you-go pricing page and are in USD
//! per 1000 characters of input text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waav_deepgram_tts::config::pricing::{estimate_tts_cost, get_tts_pricing};
//!
//! let pricing = get_tts_pricing("deepgram", "aura-2");
//! let cost = estimate_tts_cost("deepgram", "aura-2", "Hello there".chars().count());
//! ```
//!
//! # Updates
//!
//! When provider pricing changes, update the constants in this file.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::tts::deepgram::parse_model_name;

// =============================================================================
// Pricing Types
// =============================================================================

/// Pricing unit for a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingUnit {
    /// Price per 1000 characters (TTS text input)
    Per1KChars,
}

/// Pricing information for a model.
#[derive(Debug, Clone)]
pub struct ModelPricing {
    /// Price amount in USD
    pub price: f64,
    /// Unit for the price
    pub unit: PricingUnit,
    /// Optional notes about pricing
    pub notes: Option<&'static str>,
}

impl ModelPricing {
    /// Create new pricing entry.
    pub const fn new(price: f64, unit: PricingUnit) -> Self {
        Self {
            price,
            unit,
            notes: None,
        }
    }

    /// Create pricing entry with notes.
    pub const fn with_notes(price: f64, unit: PricingUnit, notes: &'static str) -> Self {
        Self {
            price,
            unit,
            notes: Some(notes),
        }
    }

    /// Price for `char_count` characters.
    pub fn cost_for_chars(&self, char_count: usize) -> f64 {
        match self.unit {
            PricingUnit::Per1KChars => self.price * (char_count as f64 / 1000.0),
        }
    }
}

// =============================================================================
// TTS Provider Pricing
// =============================================================================

/// TTS pricing database.
/// Key format: "provider:model" (lowercase)
static TTS_PRICING: LazyLock<HashMap<&'static str, ModelPricing>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // -------------------------------------------------------------------------
    // Deepgram Aura
    // https://deepgram.com/pricing
    // -------------------------------------------------------------------------
    m.insert(
        "deepgram:aura-2",
        ModelPricing::new(0.030, PricingUnit::Per1KChars), // $30 per 1M chars
    );
    m.insert(
        "deepgram:aura",
        ModelPricing::with_notes(0.015, PricingUnit::Per1KChars, "English only"),
    );

    m
});

/// Get pricing for a TTS model.
///
/// `model` may be a catalog model ("aura-2") or a full Deepgram model id
/// ("aura-2-thalia-en").
pub fn get_tts_pricing(provider: &str, model: &str) -> Option<&'static ModelPricing> {
    let provider = provider.to_lowercase();
    let key = format!("{}:{}", provider, model.to_lowercase());
    TTS_PRICING.get(key.as_str()).or_else(|| {
        let selection = parse_model_name(model).ok()?;
        TTS_PRICING.get(format!("{}:{}", provider, selection.model).as_str())
    })
}

/// Calculate estimated cost for text-to-speech synthesis.
///
/// # Returns
/// * `Option<f64>` - Estimated cost in USD
pub fn estimate_tts_cost(provider: &str, model: &str, char_count: usize) -> Option<f64> {
    get_tts_pricing(provider, model).map(|pricing| pricing.cost_for_chars(char_count))
}

/// List all priced TTS models for a provider.
pub fn list_tts_models(provider: &str) -> Vec<&'static str> {
    let prefix = format!("{}:", provider.to_lowercase());
    let mut models: Vec<&'static str> = TTS_PRICING
        .keys()
        .filter(|k| k.starts_with(&prefix))
        .map(|k| k.strip_prefix(&prefix).unwrap_or(k))
        .collect();
    models.sort_unstable();
    models
}
