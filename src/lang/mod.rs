// Language code resolution for the recognize prompt
// Author: kelexine (https://github.com/kelexine)

use phf::phf_map;
use std::collections::HashMap;

/// Built-in table of pot-style short codes to the English language names
/// embedded in the prompt.
static LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "zh_cn" => "Simplified Chinese",
    "zh_tw" => "Traditional Chinese",
    "en" => "English",
    "ja" => "Japanese",
    "ko" => "Korean",
    "fr" => "French",
    "es" => "Spanish",
    "ru" => "Russian",
    "de" => "German",
    "it" => "Italian",
    "tr" => "Turkish",
    "pt_pt" => "Portuguese",
    "pt_br" => "Brazilian Portuguese",
    "vi" => "Vietnamese",
    "id" => "Indonesian",
    "th" => "Thai",
    "ms" => "Malay",
    "ar" => "Arabic",
    "hi" => "Hindi",
    "mn_mo" => "Traditional Mongolian",
    "mn_cy" => "Mongolian",
    "km" => "Khmer",
    "nb_no" => "Norwegian Bokmål",
    "nn_no" => "Norwegian Nynorsk",
    "fa" => "Persian",
    "sv" => "Swedish",
    "pl" => "Polish",
    "nl" => "Dutch",
    "uk" => "Ukrainian",
};

/// Language-name resolver: the built-in table plus optional host-supplied
/// overrides. Overrides shadow built-in entries; both are read-only once
/// the map is constructed.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap {
    overrides: HashMap<String, String>,
}

impl LanguageMap {
    /// The built-in table with no overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A map whose entries shadow the built-in table (the host `langMap`
    /// injection variant).
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Resolve a short code to the name used inside the prompt.
    ///
    /// Unknown codes resolve to the raw code itself, which then appears in
    /// the prompt verbatim.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        if let Some(name) = self.overrides.get(code) {
            return name;
        }
        LANGUAGES.get(code).copied().unwrap_or(code)
    }

    /// Whether a code has a mapped name (built-in or override).
    pub fn contains(&self, code: &str) -> bool {
        self.overrides.contains_key(code) || LANGUAGES.contains_key(code)
    }
}
