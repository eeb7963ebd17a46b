//! Installer languages shipped with Inno Setup.

use serde::Serialize;

/// A language with a message file bundled by the Inno Setup compiler.
///
/// The catalog is closed: every variant maps to a `.isl` file under the
/// compiler's install directory.
///
/// # Configuration
///
/// ```yaml
/// inno_bundle:
///   languages:
///     - english
///     - french
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Armenian,
    BrazilianPortuguese,
    Bulgarian,
    Catalan,
    Corsican,
    Czech,
    Danish,
    Dutch,
    Finnish,
    French,
    German,
    Hebrew,
    Hungarian,
    Icelandic,
    Italian,
    Japanese,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Slovak,
    Slovenian,
    Spanish,
    Turkish,
    Ukrainian,
}

impl Language {
    /// Every language in catalog order; English comes first.
    pub const ALL: [Language; 26] = [
        Language::English,
        Language::Armenian,
        Language::BrazilianPortuguese,
        Language::Bulgarian,
        Language::Catalan,
        Language::Corsican,
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Hebrew,
        Language::Hungarian,
        Language::Icelandic,
        Language::Italian,
        Language::Japanese,
        Language::Norwegian,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Slovak,
        Language::Slovenian,
        Language::Spanish,
        Language::Turkish,
        Language::Ukrainian,
    ];

    /// Canonical lowercase name, also used as the `Name:` of the directive.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Armenian => "armenian",
            Language::BrazilianPortuguese => "brazilianportuguese",
            Language::Bulgarian => "bulgarian",
            Language::Catalan => "catalan",
            Language::Corsican => "corsican",
            Language::Czech => "czech",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Hebrew => "hebrew",
            Language::Hungarian => "hungarian",
            Language::Icelandic => "icelandic",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Norwegian => "norwegian",
            Language::Polish => "polish",
            Language::Portuguese => "portuguese",
            Language::Russian => "russian",
            Language::Slovak => "slovak",
            Language::Slovenian => "slovenian",
            Language::Spanish => "spanish",
            Language::Turkish => "turkish",
            Language::Ukrainian => "ukrainian",
        }
    }

    /// Message file reference understood by the compiler.
    pub fn messages_file(self) -> &'static str {
        match self {
            Language::English => "compiler:Default.isl",
            Language::Armenian => "compiler:Languages\\Armenian.isl",
            Language::BrazilianPortuguese => "compiler:Languages\\BrazilianPortuguese.isl",
            Language::Bulgarian => "compiler:Languages\\Bulgarian.isl",
            Language::Catalan => "compiler:Languages\\Catalan.isl",
            Language::Corsican => "compiler:Languages\\Corsican.isl",
            Language::Czech => "compiler:Languages\\Czech.isl",
            Language::Danish => "compiler:Languages\\Danish.isl",
            Language::Dutch => "compiler:Languages\\Dutch.isl",
            Language::Finnish => "compiler:Languages\\Finnish.isl",
            Language::French => "compiler:Languages\\French.isl",
            Language::German => "compiler:Languages\\German.isl",
            Language::Hebrew => "compiler:Languages\\Hebrew.isl",
            Language::Hungarian => "compiler:Languages\\Hungarian.isl",
            Language::Icelandic => "compiler:Languages\\Icelandic.isl",
            Language::Italian => "compiler:Languages\\Italian.isl",
            Language::Japanese => "compiler:Languages\\Japanese.isl",
            Language::Norwegian => "compiler:Languages\\Norwegian.isl",
            Language::Polish => "compiler:Languages\\Polish.isl",
            Language::Portuguese => "compiler:Languages\\Portuguese.isl",
            Language::Russian => "compiler:Languages\\Russian.isl",
            Language::Slovak => "compiler:Languages\\Slovak.isl",
            Language::Slovenian => "compiler:Languages\\Slovenian.isl",
            Language::Spanish => "compiler:Languages\\Spanish.isl",
            Language::Turkish => "compiler:Languages\\Turkish.isl",
            Language::Ukrainian => "compiler:Languages\\Ukrainian.isl",
        }
    }

    /// Looks a language up by exact name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
