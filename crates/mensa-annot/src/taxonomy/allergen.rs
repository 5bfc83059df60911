// Allergen codes (the 14 EU allergen groups, with cereals and nuts split up).

use std::sync::LazyLock;

use super::{Annotation, AnnotationKind, Taxonomy, TaxonomyEntry, annotation_code};

/// Allergen table in display order.
static ALLERGENS: [TaxonomyEntry; 24] = [
    TaxonomyEntry::new(
        "Wz",
        "cereals containing gluten wheat (spelt, kamut)",
        "glutenhaltiges Getreide Weizen (Dinkel, Kamut)",
    ),
    TaxonomyEntry::new("Ro", "cereals containing gluten rye", "glutenhaltiges Getreide Roggen"),
    TaxonomyEntry::new("Ge", "cereals containing gluten barley", "glutenhaltiges Getreide Gerste"),
    TaxonomyEntry::new("Hf", "cereals containing gluten oats", "glutenhaltiges Getreide Hafer"),
    TaxonomyEntry::new("Kr", "contains crustaceans", "Krebstiere"),
    TaxonomyEntry::new("Ei", "eggs", "Eier"),
    TaxonomyEntry::new("Fi", "fish", "Fisch"),
    TaxonomyEntry::new("Er", "peanuts", "Erdnüsse"),
    TaxonomyEntry::new("So", "soybeans", "Sojabohnen"),
    TaxonomyEntry::new("Mi", "milk/lactose", "Milch/Laktose"),
    TaxonomyEntry::new("Man", "almonds", "Schalenfrüchte Mandeln"),
    TaxonomyEntry::new("Hs", "hazelnuts", "Schalenfrüchte Haselnüsse"),
    TaxonomyEntry::new("Wa", "walnuts", "Schalenfrüchte Walnüsse"),
    TaxonomyEntry::new("Ka", "cashew nuts", "Schalenfrüchte Kaschu(Cashew)nüsse"),
    TaxonomyEntry::new("Pe", "pecan nuts", "Schalenfrüchte Pekannüsse"),
    TaxonomyEntry::new("Pa", "brazil nuts", "Schalenfrüchte Paranüsse"),
    TaxonomyEntry::new("Pi", "pistachios", "Schalenfrüchte Pistazien"),
    TaxonomyEntry::new("Mac", "macadamia nuts", "Schalenfrüchte Macadamianüsse"),
    TaxonomyEntry::new("Sel", "celeriac", "Sellerie"),
    TaxonomyEntry::new("Sen", "mustard", "Senf"),
    TaxonomyEntry::new("Ses", "sesame", "Sesam"),
    TaxonomyEntry::new("Su", "sulphur dioxide and sulphites", "Schwefeldioxid und Sulfite"),
    TaxonomyEntry::new("Lu", "lupines", "Lupinen"),
    TaxonomyEntry::new("We", "mollusca", "Weichtiere"),
];

static TAXONOMY: LazyLock<Taxonomy> =
    LazyLock::new(|| Taxonomy::new(AnnotationKind::Allergen, &ALLERGENS, &[]));

/// A known allergen code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Allergen(&'static TaxonomyEntry);

impl Allergen {
    pub const WHEAT: Allergen = Allergen(&ALLERGENS[0]);
    pub const RYE: Allergen = Allergen(&ALLERGENS[1]);
    pub const BARLEY: Allergen = Allergen(&ALLERGENS[2]);
    pub const OATS: Allergen = Allergen(&ALLERGENS[3]);
    pub const CRUSTACEANS: Allergen = Allergen(&ALLERGENS[4]);
    pub const EGGS: Allergen = Allergen(&ALLERGENS[5]);
    pub const FISH: Allergen = Allergen(&ALLERGENS[6]);
    pub const PEANUTS: Allergen = Allergen(&ALLERGENS[7]);
    pub const SOYBEANS: Allergen = Allergen(&ALLERGENS[8]);
    pub const MILK: Allergen = Allergen(&ALLERGENS[9]);
    pub const ALMONDS: Allergen = Allergen(&ALLERGENS[10]);
    pub const HAZELNUTS: Allergen = Allergen(&ALLERGENS[11]);
    pub const WALNUTS: Allergen = Allergen(&ALLERGENS[12]);
    pub const CASHEW_NUTS: Allergen = Allergen(&ALLERGENS[13]);
    pub const PECAN_NUTS: Allergen = Allergen(&ALLERGENS[14]);
    pub const BRAZIL_NUTS: Allergen = Allergen(&ALLERGENS[15]);
    pub const PISTACHIOS: Allergen = Allergen(&ALLERGENS[16]);
    pub const MACADAMIA_NUTS: Allergen = Allergen(&ALLERGENS[17]);
    pub const CELERIAC: Allergen = Allergen(&ALLERGENS[18]);
    pub const MUSTARD: Allergen = Allergen(&ALLERGENS[19]);
    pub const SESAME: Allergen = Allergen(&ALLERGENS[20]);
    pub const SULPHUR: Allergen = Allergen(&ALLERGENS[21]);
    pub const LUPINES: Allergen = Allergen(&ALLERGENS[22]);
    pub const MOLLUSCA: Allergen = Allergen(&ALLERGENS[23]);

    /// Cereals whose presence makes a dish not gluten free.
    pub const GLUTEN_CEREALS: [Allergen; 4] =
        [Allergen::WHEAT, Allergen::RYE, Allergen::BARLEY, Allergen::OATS];

    /// Whether this allergen is a gluten-containing cereal.
    pub fn contains_gluten(self) -> bool {
        Self::GLUTEN_CEREALS.contains(&self)
    }
}

impl Annotation for Allergen {
    const KIND: AnnotationKind = AnnotationKind::Allergen;

    fn taxonomy() -> &'static Taxonomy {
        &TAXONOMY
    }

    fn from_entry(entry: &'static TaxonomyEntry) -> Self {
        Allergen(entry)
    }

    fn entry(self) -> &'static TaxonomyEntry {
        self.0
    }
}

annotation_code!(Allergen);
