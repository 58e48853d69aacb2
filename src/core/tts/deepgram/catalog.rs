//! Static Deepgram Aura catalogs.
//!
//! Three read-only tables describe what the Aura API offers:
//!
//! - [`VOICES`]: one descriptor per voice name
//! - [`MODEL_LANGUAGE_VOICES`]: which voice names are valid per model and language
//! - [`DEFAULT_VOICES`]: the voice picked per model and language when none is named
//!
//! The tables are fixed per vendor release and never mutated. Lookups by id go
//! through lazily built indexes.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::tts::base::{Model, Voice, VoiceGender};

/// Provider tag used as model owner and in responses
pub const PROVIDER: &str = "deepgram";

/// Multilingual model used when none is configured
pub const DEFAULT_MODEL: &str = "aura-2";

/// Language used to pick a default voice when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

const PREVIEW_BASE_URL: &str = "https://static.deepgram.com/examples/";

// =============================================================================
// Voice Descriptors
// =============================================================================

/// Compile-time voice record; converted to an owned [`Voice`] on lookup.
#[derive(Debug, Clone, Copy)]
pub struct VoiceEntry {
    pub name: &'static str,
    pub gender: VoiceGender,
    pub description: &'static str,
    pub language_code: &'static str,
    pub accent: &'static str,
    pub age: &'static str,
    pub use_case: &'static str,
    pub preview_url: &'static str,
}

impl From<&VoiceEntry> for Voice {
    fn from(entry: &VoiceEntry) -> Self {
        Voice {
            name: entry.name.to_string(),
            id: entry.name.to_string(),
            gender: entry.gender,
            description: entry.description.to_string(),
            language_code: entry.language_code.to_string(),
            accent: entry.accent.to_string(),
            age: entry.age.to_string(),
            use_case: entry.use_case.to_string(),
            preview_url: entry.preview_url.to_string(),
        }
    }
}

/// Aura-2 voice; preview samples live under `Aura-2-<name>.wav`.
macro_rules! aura2 {
    ($name:literal, $gender:ident, $desc:literal, $lang:literal, $accent:literal, $age:literal, $use_case:literal) => {
        VoiceEntry {
            name: $name,
            gender: VoiceGender::$gender,
            description: $desc,
            language_code: $lang,
            accent: $accent,
            age: $age,
            use_case: $use_case,
            preview_url: concat!("https://static.deepgram.com/examples/Aura-2-", $name, ".wav"),
        }
    };
}

/// First generation Aura voice not carried over to Aura-2.
macro_rules! aura1 {
    ($name:literal, $gender:ident, $desc:literal, $lang:literal, $accent:literal, $age:literal, $use_case:literal) => {
        VoiceEntry {
            name: $name,
            gender: VoiceGender::$gender,
            description: $desc,
            language_code: $lang,
            accent: $accent,
            age: $age,
            use_case: $use_case,
            preview_url: concat!("https://static.deepgram.com/examples/Aura-", $name, ".wav"),
        }
    };
}

/// Every voice descriptor, keyed by name through [`voice`].
///
/// Names offered by both models share one descriptor. Its preview URL points
/// at the Aura-2 sample; [`voices_for_model`] swaps in the sample of the
/// requested model.
pub static VOICES: &[VoiceEntry] = &[
    // -------------------------------------------------------------------------
    // Aura-2 English
    // -------------------------------------------------------------------------
    aura2!("amalthea", Female, "Engaging, Natural, Cheerful", "en-ph", "Filipino", "young", "Casual chat"),
    aura2!("andromeda", Female, "Casual, Expressive, Comfortable", "en-us", "American", "adult", "Customer service, IVR"),
    aura2!("apollo", Male, "Confident, Comfortable, Casual", "en-us", "American", "adult", "Casual chat"),
    aura2!("arcas", Male, "Natural, Smooth, Clear, Comfortable", "en-us", "American", "adult", "Customer service, casual chat"),
    aura2!("aries", Male, "Warm, Energetic, Caring", "en-us", "American", "adult", "Casual chat"),
    aura2!("asteria", Female, "Clear, Confident, Knowledgeable, Energetic", "en-us", "American", "adult", "Advertising"),
    aura2!("athena", Female, "Calm, Smooth, Professional", "en-us", "American", "mature", "Storytelling"),
    aura2!("atlas", Male, "Enthusiastic, Confident, Approachable, Friendly", "en-us", "American", "mature", "Advertising"),
    aura2!("aurora", Female, "Cheerful, Expressive, Energetic", "en-us", "American", "adult", "Interview"),
    aura2!("callista", Female, "Clear, Energetic, Professional, Smooth", "en-us", "American", "adult", "IVR"),
    aura2!("cora", Female, "Smooth, Melodic, Caring", "en-us", "American", "adult", "Storytelling"),
    aura2!("cordelia", Female, "Approachable, Warm, Polite", "en-us", "American", "young", "Storytelling"),
    aura2!("delia", Female, "Casual, Friendly, Cheerful, Breathy", "en-us", "American", "young", "Interview"),
    aura2!("draco", Male, "Warm, Approachable, Trustworthy, Baritone", "en-gb", "British", "adult", "Storytelling"),
    aura2!("electra", Female, "Professional, Engaging, Knowledgeable", "en-us", "American", "adult", "IVR, advertising, customer service"),
    aura2!("harmonia", Female, "Empathetic, Clear, Calm, Confident", "en-us", "American", "adult", "Customer service"),
    aura2!("helena", Female, "Caring, Natural, Positive, Friendly, Raspy", "en-us", "American", "adult", "IVR, casual chat"),
    aura2!("hera", Female, "Smooth, Warm, Professional", "en-us", "American", "adult", "Informative"),
    aura2!("hermes", Male, "Expressive, Engaging, Professional", "en-us", "American", "adult", "Informative"),
    aura2!("hyperion", Male, "Caring, Warm, Empathetic", "en-au", "Australian", "adult", "Interview"),
    aura2!("iris", Female, "Cheerful, Positive, Approachable", "en-us", "American", "young", "IVR, advertising, customer service"),
    aura2!("janus", Female, "Southern, Smooth, Trustworthy", "en-us", "American", "adult", "Storytelling"),
    aura2!("juno", Female, "Natural, Engaging, Melodic, Breathy", "en-us", "American", "adult", "Interview"),
    aura2!("jupiter", Male, "Expressive, Knowledgeable, Baritone", "en-us", "American", "adult", "Informative"),
    aura2!("luna", Female, "Friendly, Natural, Engaging", "en-us", "American", "young", "IVR"),
    aura2!("mars", Male, "Smooth, Patient, Trustworthy, Baritone", "en-us", "American", "adult", "Customer service"),
    aura2!("minerva", Female, "Positive, Friendly, Natural", "en-us", "American", "adult", "Storytelling"),
    aura2!("neptune", Male, "Professional, Patient, Polite", "en-us", "American", "adult", "Customer service"),
    aura2!("odysseus", Male, "Calm, Smooth, Comfortable, Professional", "en-us", "American", "adult", "Advertising"),
    aura2!("ophelia", Female, "Expressive, Enthusiastic, Cheerful", "en-us", "American", "adult", "Interview"),
    aura2!("orion", Male, "Approachable, Comfortable, Calm, Polite", "en-us", "American", "adult", "Informative"),
    aura2!("orpheus", Male, "Professional, Clear, Confident, Trustworthy", "en-us", "American", "adult", "Customer service, storytelling"),
    aura2!("pandora", Female, "Smooth, Calm, Melodic, Breathy", "en-gb", "British", "adult", "IVR, informative"),
    aura2!("phoebe", Female, "Energetic, Warm, Casual", "en-us", "American", "adult", "Customer service"),
    aura2!("pluto", Male, "Smooth, Calm, Empathetic, Baritone", "en-us", "American", "adult", "Interview, storytelling"),
    aura2!("saturn", Male, "Knowledgeable, Confident, Baritone", "en-us", "American", "adult", "Customer service"),
    aura2!("selene", Female, "Expressive, Engaging, Energetic", "en-us", "American", "adult", "Informative"),
    aura2!("thalia", Female, "Clear, Confident, Energetic, Enthusiastic", "en-us", "American", "adult", "Casual chat, customer service, IVR"),
    aura2!("theia", Female, "Expressive, Polite, Sincere", "en-au", "Australian", "adult", "Informative"),
    aura2!("vesta", Female, "Natural, Expressive, Patient, Empathetic", "en-us", "American", "adult", "Customer service, interview, storytelling"),
    aura2!("zeus", Male, "Deep, Trustworthy, Smooth", "en-us", "American", "adult", "IVR"),
    // -------------------------------------------------------------------------
    // Aura-2 Spanish
    // -------------------------------------------------------------------------
    aura2!("sirio", Male, "Calm, Professional, Comfortable, Empathetic, Baritone", "es-mx", "Mexican", "adult", "Casual chat, customer service"),
    aura2!("nestor", Male, "Calm, Professional, Approachable, Clear, Confident", "es-es", "Peninsular", "adult", "Customer service, informative"),
    aura2!("carina", Female, "Professional, Raspy, Energetic, Breathy, Confident", "es-es", "Peninsular", "adult", "Interview, customer service, IVR"),
    aura2!("celeste", Female, "Clear, Energetic, Positive, Friendly, Enthusiastic", "es-co", "Colombian", "young", "Casual chat, advertising, IVR"),
    aura2!("alvaro", Male, "Calm, Professional, Clear, Knowledgeable, Approachable", "es-es", "Peninsular", "adult", "Interview, customer service"),
    aura2!("diana", Female, "Professional, Confident, Expressive, Polite, Knowledgeable", "es-es", "Peninsular", "adult", "Storytelling, advertising"),
    aura2!("aquila", Male, "Expressive, Enthusiastic, Confident, Casual, Comfortable", "es-419", "Latin American", "adult", "Casual chat, informative"),
    aura2!("selena", Female, "Approachable, Casual, Friendly, Calm, Positive", "es-419", "Latin American", "young", "Customer service, informative"),
    aura2!("estrella", Female, "Approachable, Natural, Calm, Comfortable, Expressive", "es-mx", "Mexican", "mature", "Casual chat, interview"),
    aura2!("javier", Male, "Approachable, Professional, Friendly, Comfortable, Calm", "es-mx", "Mexican", "adult", "Customer service, IVR"),
    aura2!("agustina", Female, "Calm, Clear, Expressive, Knowledgeable, Professional", "es-es", "Peninsular", "adult", "Advertising, informative"),
    aura2!("antonia", Female, "Approachable, Enthusiastic, Friendly, Professional, Warm", "es-ar", "Argentine", "adult", "Casual chat, storytelling"),
    aura2!("gloria", Female, "Casual, Clear, Expressive, Natural, Smooth", "es-co", "Colombian", "young", "Casual chat, customer service"),
    aura2!("luciano", Male, "Charismatic, Cheerful, Energetic, Expressive, Friendly", "es-mx", "Mexican", "adult", "Storytelling, advertising"),
    aura2!("olivia", Female, "Breathy, Calm, Casual, Expressive, Warm", "es-mx", "Mexican", "young", "Interview, storytelling"),
    aura2!("silvia", Female, "Charismatic, Clear, Expressive, Natural, Warm", "es-es", "Peninsular", "adult", "Storytelling, informative"),
    aura2!("valerio", Male, "Deep, Knowledgeable, Natural, Polite, Professional", "es-mx", "Mexican", "adult", "Informative, IVR"),
    // -------------------------------------------------------------------------
    // Aura-2 Dutch
    // -------------------------------------------------------------------------
    aura2!("beatrix", Female, "Cheerful, Enthusiastic, Friendly, Trustworthy, Warm", "nl-nl", "Dutch", "adult", "Customer service, IVR"),
    aura2!("daphne", Female, "Calm, Clear, Confident, Professional, Smooth", "nl-nl", "Dutch", "adult", "Informative, advertising"),
    aura2!("cornelia", Female, "Approachable, Friendly, Polite, Positive, Warm", "nl-nl", "Dutch", "adult", "Casual chat, customer service"),
    aura2!("sander", Male, "Calm, Clear, Deep, Professional, Smooth", "nl-nl", "Dutch", "adult", "Storytelling, informative"),
    aura2!("hestia", Female, "Approachable, Caring, Expressive, Friendly, Knowledgeable", "nl-nl", "Dutch", "adult", "Interview, storytelling"),
    aura2!("lars", Male, "Breathy, Casual, Comfortable, Sincere, Trustworthy", "nl-nl", "Dutch", "adult", "Casual chat"),
    aura2!("roman", Male, "Calm, Casual, Deep, Natural, Patient", "nl-nl", "Dutch", "adult", "Storytelling"),
    aura2!("rhea", Female, "Caring, Knowledgeable, Positive, Smooth, Warm", "nl-nl", "Dutch", "adult", "Customer service, casual chat"),
    aura2!("leda", Female, "Caring, Comfortable, Empathetic, Friendly, Sincere", "nl-nl", "Dutch", "adult", "Interview, IVR"),
    // -------------------------------------------------------------------------
    // Aura-2 French
    // -------------------------------------------------------------------------
    aura2!("agathe", Female, "Charismatic, Cheerful, Enthusiastic, Friendly, Natural", "fr-fr", "French", "adult", "Casual chat, customer service"),
    aura2!("hector", Male, "Confident, Empathetic, Expressive, Friendly, Patient", "fr-fr", "French", "adult", "Storytelling, informative"),
    // -------------------------------------------------------------------------
    // Aura-2 German
    // -------------------------------------------------------------------------
    aura2!("elara", Female, "Calm, Clear, Natural, Patient, Trustworthy", "de-de", "German", "adult", "Customer service, informative"),
    aura2!("aurelia", Female, "Approachable, Casual, Comfortable, Natural, Sincere", "de-de", "German", "adult", "Casual chat"),
    aura2!("lara", Female, "Caring, Cheerful, Empathetic, Expressive, Warm", "de-de", "German", "adult", "Storytelling"),
    aura2!("julius", Male, "Casual, Cheerful, Engaging, Expressive, Friendly", "de-de", "German", "adult", "Casual chat, advertising"),
    aura2!("fabian", Male, "Confident, Knowledgeable, Natural, Polite, Professional", "de-de", "German", "adult", "Informative, IVR"),
    aura2!("kara", Female, "Caring, Empathetic, Expressive, Professional, Warm", "de-de", "German", "adult", "Customer service, interview"),
    aura2!("viktoria", Female, "Charismatic, Cheerful, Enthusiastic, Friendly, Warm", "de-de", "German", "adult", "Advertising"),
    // -------------------------------------------------------------------------
    // Aura-2 Italian
    // -------------------------------------------------------------------------
    aura2!("melia", Female, "Clear, Comfortable, Engaging, Friendly, Natural", "it-it", "Italian", "adult", "Casual chat, customer service"),
    aura2!("elio", Male, "Breathy, Calm, Professional, Smooth, Trustworthy", "it-it", "Italian", "adult", "Informative, IVR"),
    aura2!("flavio", Male, "Confident, Deep, Empathetic, Professional, Trustworthy", "it-it", "Italian", "adult", "Storytelling"),
    aura2!("maia", Female, "Caring, Energetic, Expressive, Professional, Warm", "it-it", "Italian", "adult", "Interview, advertising"),
    aura2!("cinzia", Female, "Approachable, Friendly, Smooth, Warm", "it-it", "Italian", "adult", "Customer service"),
    aura2!("cesare", Male, "Clear, Empathetic, Knowledgeable, Natural, Smooth", "it-it", "Italian", "adult", "Informative"),
    aura2!("livia", Female, "Approachable, Cheerful, Clear, Engaging, Expressive", "it-it", "Italian", "adult", "Casual chat, advertising"),
    aura2!("perseo", Male, "Casual, Clear, Natural, Polite, Smooth", "it-it", "Italian", "adult", "Customer service, IVR"),
    aura2!("dionisio", Male, "Confident, Engaging, Friendly, Melodic, Positive", "it-it", "Italian", "adult", "Storytelling, advertising"),
    aura2!("demetra", Female, "Calm, Comfortable, Patient", "it-it", "Italian", "mature", "Interview, storytelling"),
    // -------------------------------------------------------------------------
    // Aura-2 Japanese
    // -------------------------------------------------------------------------
    aura2!("uzume", Female, "Approachable, Clear, Polite, Trustworthy", "ja-jp", "Japanese", "adult", "Customer service, IVR"),
    aura2!("ebisu", Male, "Calm, Deep, Natural, Patient, Sincere", "ja-jp", "Japanese", "adult", "Storytelling, informative"),
    aura2!("fujin", Male, "Calm, Confident, Knowledgeable, Smooth", "ja-jp", "Japanese", "adult", "Informative, casual chat"),
    aura2!("izanami", Female, "Approachable, Clear, Knowledgeable, Polite, Professional", "ja-jp", "Japanese", "adult", "Customer service, interview"),
    aura2!("ama", Female, "Casual, Comfortable, Confident, Natural, Polite", "ja-jp", "Japanese", "adult", "Casual chat"),
    // -------------------------------------------------------------------------
    // Aura (first generation, English only)
    // -------------------------------------------------------------------------
    aura1!("stella", Female, "Clear, Professional, Engaging", "en-us", "American", "young", "Customer service"),
    aura1!("perseus", Male, "Confident, Professional, Clear", "en-us", "American", "adult", "Customer service"),
    aura1!("angus", Male, "Warm, Friendly, Natural", "en-ie", "Irish", "adult", "Storytelling"),
    aura1!("helios", Male, "Professional, Clear, Confident", "en-gb", "British", "adult", "Customer service"),
];

// =============================================================================
// Model → Language → Voices
// =============================================================================

const AURA_2_EN: &[&str] = &[
    "amalthea", "andromeda", "apollo", "arcas", "aries", "asteria", "athena", "atlas", "aurora",
    "callista", "cora", "cordelia", "delia", "draco", "electra", "harmonia", "helena", "hera",
    "hermes", "hyperion", "iris", "janus", "juno", "jupiter", "luna", "mars", "minerva", "neptune",
    "odysseus", "ophelia", "orion", "orpheus", "pandora", "phoebe", "pluto", "saturn", "selene",
    "thalia", "theia", "vesta", "zeus",
];

const AURA_2_ES: &[&str] = &[
    "sirio", "nestor", "carina", "celeste", "alvaro", "diana", "aquila", "selena", "estrella",
    "javier", "agustina", "antonia", "gloria", "luciano", "olivia", "silvia", "valerio",
];

const AURA_2_NL: &[&str] = &[
    "beatrix", "daphne", "cornelia", "sander", "hestia", "lars", "roman", "rhea", "leda",
];

const AURA_2_FR: &[&str] = &["agathe", "hector"];

const AURA_2_DE: &[&str] = &[
    "elara", "aurelia", "lara", "julius", "fabian", "kara", "viktoria",
];

const AURA_2_IT: &[&str] = &[
    "melia", "elio", "flavio", "maia", "cinzia", "cesare", "livia", "perseo", "dionisio", "demetra",
];

const AURA_2_JA: &[&str] = &["uzume", "ebisu", "fujin", "izanami", "ama"];

const AURA_EN: &[&str] = &[
    "asteria", "luna", "stella", "athena", "hera", "orion", "arcas", "perseus", "angus", "orpheus",
    "helios", "zeus",
];

/// Valid voice names per model and language, in catalog order.
pub static MODEL_LANGUAGE_VOICES: &[(&str, &[(&str, &[&str])])] = &[
    (
        "aura-2",
        &[
            ("en", AURA_2_EN),
            ("es", AURA_2_ES),
            ("nl", AURA_2_NL),
            ("fr", AURA_2_FR),
            ("de", AURA_2_DE),
            ("it", AURA_2_IT),
            ("ja", AURA_2_JA),
        ],
    ),
    ("aura", &[("en", AURA_EN)]),
];

/// Default voice per (model, language).
pub static DEFAULT_VOICES: &[(&str, &str, &str)] = &[
    ("aura-2", "en", "thalia"),
    ("aura-2", "es", "celeste"),
    ("aura-2", "nl", "rhea"),
    ("aura-2", "fr", "agathe"),
    ("aura-2", "de", "julius"),
    ("aura-2", "it", "livia"),
    ("aura-2", "ja", "fujin"),
    ("aura", "en", "asteria"),
];

// =============================================================================
// Indexes
// =============================================================================

static VOICE_INDEX: LazyLock<HashMap<&'static str, &'static VoiceEntry>> =
    LazyLock::new(|| VOICES.iter().map(|v| (v.name, v)).collect());

// =============================================================================
// Public API
// =============================================================================

/// Sample clip for `name` as spoken by `model`.
pub fn preview_url(model: &str, name: &str) -> Option<String> {
    let prefix = match model {
        "aura-2" => "Aura-2",
        "aura" => "Aura",
        _ => return None,
    };
    Some(format!("{PREVIEW_BASE_URL}{prefix}-{name}.wav"))
}

/// Reduce a language tag to its lowercase primary subtag.
///
/// `"en"`, `"EN"`, `"en-US"` and `"en_us"` all map to `"en"`.
pub fn normalize_language(language: &str) -> String {
    language
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Model descriptors in catalog order.
pub fn models() -> Vec<Model> {
    MODEL_LANGUAGE_VOICES
        .iter()
        .map(|(model, _)| Model::new(*model, PROVIDER))
        .collect()
}

/// Whether `model` is a catalog model id.
pub fn is_supported_model(model: &str) -> bool {
    language_table(model).is_some()
}

fn language_table(model: &str) -> Option<&'static [(&'static str, &'static [&'static str])]> {
    MODEL_LANGUAGE_VOICES
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, languages)| *languages)
}

/// Languages `model` can speak, in catalog order.
pub fn supported_languages(model: &str) -> Vec<&'static str> {
    language_table(model)
        .map(|languages| languages.iter().map(|(lang, _)| *lang).collect())
        .unwrap_or_default()
}

/// Voice names valid for `model` in `language`, in catalog order.
pub fn voices_for(model: &str, language: &str) -> &'static [&'static str] {
    let language = normalize_language(language);
    language_table(model)
        .and_then(|languages| languages.iter().find(|(lang, _)| *lang == language))
        .map(|(_, voices)| *voices)
        .unwrap_or_default()
}

/// Language under which `voice` is listed for `model`.
pub fn language_of(model: &str, voice: &str) -> Option<&'static str> {
    language_table(model)?
        .iter()
        .find(|(_, voices)| voices.contains(&voice))
        .map(|(lang, _)| *lang)
}

/// Default voice name for `model` in `language`.
pub fn default_voice(model: &str, language: &str) -> Option<&'static str> {
    let language = normalize_language(language);
    DEFAULT_VOICES
        .iter()
        .find(|(m, lang, _)| *m == model && *lang == language)
        .map(|(_, _, voice)| *voice)
}

/// Descriptor for the voice named `id`.
pub fn voice(id: &str) -> Option<Voice> {
    VOICE_INDEX.get(id).map(|entry| Voice::from(*entry))
}

/// Every voice across all models and languages, keyed by id.
pub fn all_voices() -> HashMap<String, Voice> {
    VOICES
        .iter()
        .map(|entry| (entry.name.to_string(), Voice::from(entry)))
        .collect()
}

/// Voices usable with `model`, keyed by id, with that model's preview clips.
pub fn voices_for_model(model: &str) -> HashMap<String, Voice> {
    language_table(model)
        .into_iter()
        .flatten()
        .flat_map(|(_, voices)| voices.iter())
        .filter_map(|name| {
            let mut v = voice(name)?;
            if let Some(url) = preview_url(model, name) {
                v.preview_url = url;
            }
            Some((v.id.clone(), v))
        })
        .collect()
}
