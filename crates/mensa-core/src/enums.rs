// Shared enums: Language, DietaryCategory

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0:?} (expected \"de\" or \"en\")")]
pub struct LanguageError(pub String);

/// Target language of a rendered menu field.
///
/// Menus are published in German and English; every localized text field
/// and every taxonomy description exists in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German ("de"), the language of the upstream feed.
    #[default]
    German,
    /// English ("en").
    English,
}

impl Language {
    /// Both languages, German first.
    pub const ALL: [Language; 2] = [Language::German, Language::English];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Accepts `de`/`en` and the long forms `german`/`english`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" | "german" | "deutsch" => Ok(Language::German),
            "en" | "english" => Ok(Language::English),
            _ => Err(LanguageError(s.to_string())),
        }
    }
}

/// Dietary classification of a menu item.
///
/// Derived from the item's ingredient and allergen annotations; see
/// `mensa_annot::aggregate::Annotations::dietary_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryCategory {
    /// Default when no vegan, vegetarian or fish marker is present.
    #[default]
    Meat,
    Fish,
    Vegetarian,
    Vegan,
}

impl DietaryCategory {
    /// Machine-readable name as used in the JSON API.
    pub fn as_str(self) -> &'static str {
        match self {
            DietaryCategory::Meat => "meat",
            DietaryCategory::Fish => "fish",
            DietaryCategory::Vegetarian => "vegetarian",
            DietaryCategory::Vegan => "vegan",
        }
    }

    /// Whether this category restricts what is served (anything but meat).
    pub fn is_restricted(self) -> bool {
        self != DietaryCategory::Meat
    }

    /// Human-readable label.
    pub fn text(self, lang: Language) -> &'static str {
        match (self, lang) {
            (DietaryCategory::Meat, Language::English) => "Meat",
            (DietaryCategory::Meat, Language::German) => "Fleisch",
            (DietaryCategory::Fish, Language::English) => "Fish",
            (DietaryCategory::Fish, Language::German) => "Fisch",
            (DietaryCategory::Vegetarian, Language::English) => "Vegetarian",
            (DietaryCategory::Vegetarian, Language::German) => "Vegetarisch",
            (DietaryCategory::Vegan, _) => "Vegan",
        }
    }
}

impl fmt::Display for DietaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
