use lingua::Language;

/// Language codes served by the Indian backend (Sarvam bulbul:v2).
/// Anything not in this table routes to the international backend.
pub const INDIAN_LANGUAGES: &[&str] = &[
    "bn-IN", "en-IN", "gu-IN", "hi-IN", "kn-IN", "ml-IN", "mr-IN", "od-IN",
    "pa-IN", "ta-IN", "te-IN", "as-IN", "brx-IN", "doi-IN", "kok-IN", "ks-IN",
    "mai-IN", "mni-IN", "ne-IN", "sa-IN", "sat-IN", "sd-IN", "ur-IN",
];

/// Language codes served by the international backend (AWS Polly).
pub const INTERNATIONAL_LANGUAGES: &[&str] = &[
    "en-US", "en-GB", "es-ES", "es-US", "fr-FR", "de-DE", "it-IT", "pt-PT",
    "pt-BR", "ja-JP", "ko-KR", "cmn-CN", "arb",
];

/// Sarvam speaker identifiers, as exposed by /speakers.
pub const SARVAM_SPEAKERS_FEMALE: &[&str] = &["anushka", "manisha", "vidya", "arya"];
pub const SARVAM_SPEAKERS_MALE: &[&str] = &["abhilash", "karun", "hitesh"];

/// Neural-capable Polly voices exposed by /speakers.
pub const POLLY_VOICES: &[&str] = &[
    "Joanna", "Matthew", "Lupe", "Pedro", "Lea", "Remi", "Vicki", "Daniel",
    "Bianca", "Adriano", "Ines", "Camila", "Takumi", "Kazuha", "Seoyeon",
    "Zhiyu", "Hala",
];

/// Which provider serves a request. Selection is a static table lookup on
/// the target language code; there is no runtime fallback between backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Indian,
    International,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Indian => write!(f, "indian"),
            Backend::International => write!(f, "international"),
        }
    }
}

pub fn select_backend(target_lang: &str) -> Backend {
    if INDIAN_LANGUAGES.contains(&target_lang) {
        Backend::Indian
    } else {
        Backend::International
    }
}

/// Primary subtag of a BCP 47 code ("hi-IN" -> "hi").
pub fn primary_subtag(lang: &str) -> &str {
    match lang.split_once('-') {
        Some((primary, _)) => primary,
        None => lang,
    }
}

/// Human-readable name used in the Gemini translation prompt.
/// Unknown codes fall back to the code itself.
pub fn language_name(code: &str) -> &str {
    match code {
        "bn-IN" => "Bengali",
        "en-IN" => "English",
        "gu-IN" => "Gujarati",
        "hi-IN" => "Hindi",
        "kn-IN" => "Kannada",
        "ml-IN" => "Malayalam",
        "mr-IN" => "Marathi",
        "od-IN" => "Odia",
        "pa-IN" => "Punjabi",
        "ta-IN" => "Tamil",
        "te-IN" => "Telugu",
        "as-IN" => "Assamese",
        "brx-IN" => "Bodo",
        "doi-IN" => "Dogri",
        "kok-IN" => "Konkani",
        "ks-IN" => "Kashmiri",
        "mai-IN" => "Maithili",
        "mni-IN" => "Manipuri (Meiteilon)",
        "ne-IN" => "Nepali",
        "sa-IN" => "Sanskrit",
        "sat-IN" => "Santali",
        "sd-IN" => "Sindhi",
        "ur-IN" => "Urdu",
        other => other,
    }
}

/// lingua equivalent of a language code, where detection is supported.
/// Used to skip translation when `source_lang` is "auto" and the text is
/// already in the target language.
pub fn lingua_language(code: &str) -> Option<Language> {
    match primary_subtag(code) {
        "en" => Some(Language::English),
        "hi" => Some(Language::Hindi),
        "bn" => Some(Language::Bengali),
        "gu" => Some(Language::Gujarati),
        "mr" => Some(Language::Marathi),
        "pa" => Some(Language::Punjabi),
        "ta" => Some(Language::Tamil),
        "te" => Some(Language::Telugu),
        "ur" => Some(Language::Urdu),
        "es" => Some(Language::Spanish),
        "fr" => Some(Language::French),
        "de" => Some(Language::German),
        "it" => Some(Language::Italian),
        "pt" => Some(Language::Portuguese),
        _ => None,
    }
}

/// Default Polly voice for a target language.
pub fn default_polly_voice(target_lang: &str) -> &'static str {
    match primary_subtag(target_lang) {
        "en" => "Joanna",
        "es" => "Lupe",
        "fr" => "Lea",
        "de" => "Vicki",
        "it" => "Bianca",
        "pt" => "Ines",
        "ja" => "Takumi",
        "ko" => "Seoyeon",
        "cmn" | "zh" => "Zhiyu",
        "ar" | "arb" => "Hala",
        _ => "Joanna",
    }
}
