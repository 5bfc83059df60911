// Additive codes (numeric markers such as "(1,4)").

use std::sync::LazyLock;

use super::{Annotation, AnnotationKind, Taxonomy, TaxonomyEntry, annotation_code};

/// Additive table in display order.
static ADDITIVES: [TaxonomyEntry; 12] = [
    TaxonomyEntry::new("1", "contains colour additives", "mit Farbstoff"),
    TaxonomyEntry::new("2", "contains caffeine", "mit Coffein"),
    TaxonomyEntry::new("4", "contains preservatives", "mit Konservierungsstoff"),
    TaxonomyEntry::new("5", "contains sweeteners", "mit Süßungsmittel"),
    TaxonomyEntry::new("7", "contains antioxidant", "mit Antioxidationsmittel"),
    TaxonomyEntry::new("8", "contains flavour enhancers", "mit Geschmacksverstärker"),
    TaxonomyEntry::new("9", "sulphurated", "geschwefelt"),
    TaxonomyEntry::new("10", "blackened", "geschwärzt"),
    TaxonomyEntry::new("11", "waxed", "gewachst"),
    TaxonomyEntry::new("12", "contains phosphate", "mit Phosphat"),
    TaxonomyEntry::new(
        "13",
        "contains sweeteners = contains a source of phenylalanine",
        "mit Süßungsmittel = enthält eine Phenylalaninquelle",
    ),
    TaxonomyEntry::new("30", "compound coating", "mit Fettglasur"),
];

static TAXONOMY: LazyLock<Taxonomy> =
    LazyLock::new(|| Taxonomy::new(AnnotationKind::Additive, &ADDITIVES, &[]));

/// A known additive code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Additive(&'static TaxonomyEntry);

impl Additive {
    pub const COLOR: Additive = Additive(&ADDITIVES[0]);
    pub const CAFFEINE: Additive = Additive(&ADDITIVES[1]);
    pub const PRESERVATIVES: Additive = Additive(&ADDITIVES[2]);
    pub const SWEETENERS: Additive = Additive(&ADDITIVES[3]);
    pub const ANTIOXIDANT: Additive = Additive(&ADDITIVES[4]);
    pub const FLAVOR_ENHANCERS: Additive = Additive(&ADDITIVES[5]);
    pub const SULPHURATED: Additive = Additive(&ADDITIVES[6]);
    pub const BLACKENED: Additive = Additive(&ADDITIVES[7]);
    pub const WAXED: Additive = Additive(&ADDITIVES[8]);
    pub const PHOSPHATE: Additive = Additive(&ADDITIVES[9]);
    pub const PHENYLALANINE: Additive = Additive(&ADDITIVES[10]);
    pub const COATING: Additive = Additive(&ADDITIVES[11]);
}

impl Annotation for Additive {
    const KIND: AnnotationKind = AnnotationKind::Additive;

    fn taxonomy() -> &'static Taxonomy {
        &TAXONOMY
    }

    fn from_entry(entry: &'static TaxonomyEntry) -> Self {
        Additive(entry)
    }

    fn entry(self) -> &'static TaxonomyEntry {
        self.0
    }
}

annotation_code!(Additive);
