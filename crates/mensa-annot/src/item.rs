// Menu items and their computed fields.
//
// A menu item carries six localized text fields and a pictogram blob as
// delivered by the upstream feed. Computing an item renders all six fields
// against one shared annotation aggregate, then derives the sorted code lists,
// the gluten-free flag and the dietary category. Computation is a pure
// function of the item: recomputing always replaces every computed field.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use mensa_core::{DiagnosticSink, DietaryCategory, ItemIdentity, Language};

use crate::aggregate::{AnnotationSets, Annotations};
use crate::extract::Extractor;

/// Whole-string and per-word translations of category names.
pub const CATEGORY_TRANSLATIONS: &[(&str, &str)] = &[
    ("Essen", "Meal"),
    ("Aktionsessen", "Special Meal"),
    ("Aktion", "Special"),
    ("Suppe", "Soup"),
    ("Suppen", "Soups"),
    ("SB-Theke", "Self-Service Counter"),
    ("Tagesangebot", "Daily Special"),
    ("Tipp des Tages", "Tip Of The Day"),
];

fn lookup_category(name: &str) -> Option<&'static str> {
    CATEGORY_TRANSLATIONS
        .iter()
        .find(|(de, _)| *de == name)
        .map(|(_, en)| *en)
}

/// Translate a German category name into English.
///
/// A category that matches a known name as a whole is translated directly.
/// Otherwise each whitespace-separated word is translated on its own and
/// words without a translation are kept, so "Essen 3" becomes "Meal 3".
pub fn translate_category(category: &str) -> String {
    if let Some(en) = lookup_category(category) {
        return en.to_string();
    }

    let mut words = Vec::new();
    for word in category.split_whitespace() {
        match lookup_category(word) {
            Some(en) => words.push(en),
            None => {
                if !word.chars().all(|c| c.is_ascii_digit()) {
                    tracing::debug!(part = word, category, "untranslatable category part");
                }
                words.push(word);
            }
        }
    }
    words.join(" ")
}

/// One dish as delivered by the upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Cafeteria the item is served at.
    pub location: String,
    /// Day the item is served on.
    pub day: String,
    /// Serving line, e.g. "Essen 1".
    pub category: String,

    pub title_de: String,
    pub title_en: String,
    pub description_de: String,
    pub description_en: String,
    pub sides_de: String,
    pub sides_en: String,

    /// Raw pictogram references.
    pub pictograms: String,
}

impl MenuItem {
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity::new(self.location.as_str(), self.day.as_str())
    }

    /// Sort weight of the category: main meals first, then specials, then
    /// soups, then everything else.
    fn category_score(&self) -> u8 {
        let c = self.category.as_str();
        if c.starts_with("Essen ") {
            0
        } else if c.starts_with("Aktionsessen ") {
            1
        } else if c.starts_with("Suppe ") {
            2
        } else {
            3
        }
    }

    /// Menu display order: by category group, then by category name.
    pub fn cmp_category(&self, other: &Self) -> Ordering {
        self.category_score()
            .cmp(&other.category_score())
            .then_with(|| self.category.cmp(&other.category))
    }

    /// The six localized text fields in rendering order.
    pub fn text_fields(&self) -> [(&str, Language); 6] {
        [
            (self.title_de.as_str(), Language::German),
            (self.title_en.as_str(), Language::English),
            (self.description_de.as_str(), Language::German),
            (self.description_en.as_str(), Language::English),
            (self.sides_de.as_str(), Language::German),
            (self.sides_en.as_str(), Language::English),
        ]
    }

    /// Compute all derived fields of this item.
    pub fn compute(&self, sink: &dyn DiagnosticSink) -> ComputedFields {
        compute_annotations(self, sink)
    }
}

/// Everything derived from one [`MenuItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedFields {
    #[serde(flatten)]
    pub item: ItemIdentity,
    pub category: String,
    pub category_en: String,

    pub html_title_de: String,
    pub html_title_en: String,
    pub html_description_de: String,
    pub html_description_en: String,
    pub html_sides_de: String,
    pub html_sides_en: String,

    #[serde(flatten)]
    pub annotations: Annotations,

    pub gluten_free: bool,
    pub dietary_category: DietaryCategory,
}

/// Render the text fields of `item` and derive its annotation facts.
///
/// The ingredient set is seeded from the pictograms; then title, description
/// and sides are rendered in German and English, in that order, all adding to
/// the same aggregate.
pub fn compute_annotations(item: &MenuItem, sink: &dyn DiagnosticSink) -> ComputedFields {
    let identity = item.identity();
    let extractor = Extractor::new(&identity, sink);

    let mut sets = AnnotationSets::with_ingredients(extractor.pictograms(&item.pictograms));
    let [title_de, title_en, description_de, description_en, sides_de, sides_en] = item
        .text_fields()
        .map(|(text, lang)| extractor.render(text, lang, &mut sets));

    let annotations = sets.into_sorted();
    let gluten_free = annotations.gluten_free();
    let dietary_category = annotations.dietary_category();

    ComputedFields {
        category: item.category.clone(),
        category_en: translate_category(&item.category),
        html_title_de: title_de,
        html_title_en: title_en,
        html_description_de: description_de,
        html_description_en: description_en,
        html_sides_de: sides_de,
        html_sides_en: sides_en,
        annotations,
        gluten_free,
        dietary_category,
        item: identity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{Additive, Allergen, Ingredient};
    use mensa_core::{CollectingSink, NullSink};

    fn category(name: &str) -> MenuItem {
        MenuItem {
            category: name.to_string(),
            ..MenuItem::default()
        }
    }

    #[test]
    fn translate_whole_category() {
        assert_eq!(translate_category("Tipp des Tages"), "Tip Of The Day");
        assert_eq!(translate_category("SB-Theke"), "Self-Service Counter");
        assert_eq!(translate_category("Aktion"), "Special");
    }

    #[test]
    fn translate_per_word() {
        assert_eq!(translate_category("Essen 1"), "Meal 1");
        assert_eq!(translate_category("Aktionsessen 12"), "Special Meal 12");
        assert_eq!(translate_category("Suppen  2"), "Soups 2");
    }

    #[test]
    fn untranslatable_words_are_kept() {
        assert_eq!(translate_category("Pasta Essen"), "Pasta Meal");
        assert_eq!(translate_category("Grill"), "Grill");
        assert_eq!(translate_category(""), "");
    }

    #[test]
    fn category_order() {
        let mut items = vec![
            category("Salat"),
            category("Suppe 1"),
            category("Essen 2"),
            category("Aktionsessen 1"),
            category("Essen 1"),
            category("Aktion"),
        ];
        items.sort_by(MenuItem::cmp_category);
        let names: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(
            names,
            vec!["Essen 1", "Essen 2", "Aktionsessen 1", "Suppe 1", "Aktion", "Salat"]
        );
    }

    #[test]
    fn category_prefix_needs_trailing_space() {
        assert_eq!(
            category("Essen").cmp_category(&category("Suppe 1")),
            Ordering::Greater
        );
    }

    #[test]
    fn computes_all_fields() {
        let item = MenuItem {
            location: "sued".into(),
            day: "2024-05-13".into(),
            category: "Essen 1".into(),
            title_de: "Schnitzel (S,Wz)".into(),
            title_en: "Schnitzel (S,Wz)".into(),
            description_de: "mit Pommes (1,Ei)".into(),
            description_en: "with fries (1,Ei)".into(),
            sides_de: "Salat (9)".into(),
            sides_en: "salad (9)".into(),
            pictograms: "https://www.max-manager.de/daten-extern/sw-erlangen-nuernberg/icons/R.png"
                .into(),
        };
        let sink = CollectingSink::new();
        let computed = item.compute(&sink);

        assert_eq!(computed.item, item.identity());
        assert_eq!(computed.category_en, "Meal 1");
        assert!(computed.html_title_de.contains("title='Schwein'"));
        assert!(computed.html_title_en.contains("title='pork'"));
        assert!(computed.html_sides_en.starts_with("salad <span class='annot'>"));
        assert_eq!(
            computed.annotations.additives,
            vec![Additive::COLOR, Additive::SULPHURATED]
        );
        assert_eq!(computed.annotations.allergens, vec![Allergen::WHEAT, Allergen::EGGS]);
        assert_eq!(
            computed.annotations.ingredients,
            vec![Ingredient::BEEF, Ingredient::PORK]
        );
        assert!(!computed.gluten_free);
        assert_eq!(computed.dietary_category, DietaryCategory::Meat);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn empty_item() {
        let computed = MenuItem::default().compute(&NullSink);
        assert!(computed.annotations.is_empty());
        assert!(computed.gluten_free);
        assert_eq!(computed.dietary_category, DietaryCategory::Meat);
        assert_eq!(computed.html_title_de, "");
    }

    #[test]
    fn pictograms_feed_dietary_category() {
        let item = MenuItem {
            title_de: "Bowl".into(),
            pictograms: "https://www.max-manager.de/daten-extern/sw-erlangen-nuernberg/icons/veg.png"
                .into(),
            ..MenuItem::default()
        };
        let computed = item.compute(&NullSink);
        assert_eq!(computed.dietary_category, DietaryCategory::Vegan);
        assert_eq!(computed.html_title_de, "Bowl");
    }

    #[test]
    fn recomputation_is_stable() {
        let item = MenuItem {
            title_de: "Fisch (Fi,xyz)".into(),
            title_en: "Fish (Fi)".into(),
            ..MenuItem::default()
        };
        let a = item.compute(&NullSink);
        let b = item.compute(&NullSink);
        assert_eq!(a, b);
        assert_eq!(a.dietary_category, DietaryCategory::Fish);
    }

    #[test]
    fn diagnostics_carry_field_language() {
        let item = MenuItem {
            location: "nord".into(),
            title_en: "Soup (Mi,zz)".into(),
            ..MenuItem::default()
        };
        let sink = CollectingSink::new();
        item.compute(&sink);
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].language, Some(Language::English));
        assert_eq!(events[0].item.location, "nord");
    }

    #[test]
    fn item_json_defaults_missing_fields() {
        let item: MenuItem =
            serde_json::from_str(r#"{"category": "Suppe 1", "title_de": "Linsen"}"#).unwrap();
        assert_eq!(item.category, "Suppe 1");
        assert_eq!(item.title_en, "");
        assert_eq!(item.pictograms, "");
    }

    #[test]
    fn computed_json_shape() {
        let item = MenuItem {
            location: "sued".into(),
            day: "2024-05-13".into(),
            title_de: "Tofu (veg)".into(),
            ..MenuItem::default()
        };
        let json = serde_json::to_value(item.compute(&NullSink)).unwrap();
        assert_eq!(json["location"], "sued");
        assert_eq!(json["day"], "2024-05-13");
        assert_eq!(json["ingredients"], serde_json::json!(["veg"]));
        assert_eq!(json["dietary_category"], "vegan");
        assert_eq!(json["gluten_free"], true);
    }
}
