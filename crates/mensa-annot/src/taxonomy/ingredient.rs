// Ingredient codes (meat/fish markers, vegan/vegetarian, labels).
//
// Ingredients appear both inline in menu text and as pictograms. The feed
// switched the organic marker from "Bio" to "B" at some point; "B" is kept as
// an alias of "Bio".

use std::sync::LazyLock;

use mensa_core::Language;

use super::{Annotation, AnnotationKind, Taxonomy, TaxonomyEntry, anchor, annotation_code};

/// Ingredient table in display order.
static INGREDIENTS: [TaxonomyEntry; 14] = [
    TaxonomyEntry::new("V", "vegetarian", "Vegetarisch"),
    TaxonomyEntry::new("R", "beef", "Rind"),
    TaxonomyEntry::new("G", "poultry", "Geflügel"),
    TaxonomyEntry::new("L", "lamb", "Lamm"),
    TaxonomyEntry::new("F", "fish", "Fisch"),
    TaxonomyEntry::new("S", "pork", "Schwein"),
    TaxonomyEntry::new("W", "game", "Wild"),
    TaxonomyEntry::new("veg", "vegan", "Vegan"),
    TaxonomyEntry::new("MV", "Cafeteria Vital", "Mensa Vital"),
    TaxonomyEntry::new("Bio", "organic (certified by DE-ÖKO-006)", "aus biologischem Anbau DE-ÖKO-006"),
    TaxonomyEntry::new(
        "MSC",
        "sustainable fish (certified by MSC - C - 51840)",
        "zertifizierte nachhaltige Fischerei - MSC - C - 51840",
    ),
    TaxonomyEntry::new("A", "with alcohol", "mit Alkohol"),
    TaxonomyEntry::new("Gf", "gluten free", "Glutenfrei"),
    TaxonomyEntry::new("CO2", "CO2 Neutral", "CO2 Neutral"),
];

/// Legacy spellings.
static ALIASES: [(&str, &str); 1] = [("B", "Bio")];

static TAXONOMY: LazyLock<Taxonomy> =
    LazyLock::new(|| Taxonomy::new(AnnotationKind::Ingredient, &INGREDIENTS, &ALIASES));

/// A known ingredient code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ingredient(&'static TaxonomyEntry);

impl Ingredient {
    pub const VEGETARIAN: Ingredient = Ingredient(&INGREDIENTS[0]);
    pub const BEEF: Ingredient = Ingredient(&INGREDIENTS[1]);
    pub const POULTRY: Ingredient = Ingredient(&INGREDIENTS[2]);
    pub const LAMB: Ingredient = Ingredient(&INGREDIENTS[3]);
    pub const FISH: Ingredient = Ingredient(&INGREDIENTS[4]);
    pub const PORK: Ingredient = Ingredient(&INGREDIENTS[5]);
    pub const GAME: Ingredient = Ingredient(&INGREDIENTS[6]);
    pub const VEGAN: Ingredient = Ingredient(&INGREDIENTS[7]);
    pub const MENSA_VITAL: Ingredient = Ingredient(&INGREDIENTS[8]);
    pub const ORGANIC: Ingredient = Ingredient(&INGREDIENTS[9]);
    pub const FISH_MSC: Ingredient = Ingredient(&INGREDIENTS[10]);
    pub const ALCOHOL: Ingredient = Ingredient(&INGREDIENTS[11]);
    pub const GLUTEN_FREE: Ingredient = Ingredient(&INGREDIENTS[12]);
    pub const CO2_NEUTRAL: Ingredient = Ingredient(&INGREDIENTS[13]);

    /// Anchor whose visible label is the description rather than the code.
    ///
    /// Used for the legend listing every ingredient of a menu.
    pub fn definition_html(self, lang: Language) -> String {
        anchor(Self::KIND, self.code(), self.text(lang), self.text(lang))
    }
}

impl Annotation for Ingredient {
    const KIND: AnnotationKind = AnnotationKind::Ingredient;

    fn taxonomy() -> &'static Taxonomy {
        &TAXONOMY
    }

    fn from_entry(entry: &'static TaxonomyEntry) -> Self {
        Ingredient(entry)
    }

    fn entry(self) -> &'static TaxonomyEntry {
        self.0
    }
}

annotation_code!(Ingredient);
