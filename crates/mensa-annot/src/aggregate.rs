// Per-item annotation aggregates and the facts derived from them.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use mensa_core::DietaryCategory;

use crate::resolve::ResolvedAnnotation;
use crate::taxonomy::{Additive, Allergen, Ingredient};

/// The three annotation sets collected while processing one menu item.
///
/// A fresh value is created per item and threaded through the pictogram seed
/// and all six field renders. Set semantics make the collection order
/// irrelevant to the final sorted result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSets {
    pub additives: HashSet<Additive>,
    pub allergens: HashSet<Allergen>,
    pub ingredients: HashSet<Ingredient>,
}

impl AnnotationSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given ingredients, e.g. from the item's pictograms.
    pub fn with_ingredients(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        Self {
            ingredients: ingredients.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Add a resolved annotation to the matching set. Unknown tokens are ignored.
    ///
    /// Returns `true` if the code was not yet present.
    pub fn insert(&mut self, annotation: ResolvedAnnotation<'_>) -> bool {
        match annotation {
            ResolvedAnnotation::Additive(a) => self.additives.insert(a),
            ResolvedAnnotation::Allergen(a) => self.allergens.insert(a),
            ResolvedAnnotation::Ingredient(i) => self.ingredients.insert(i),
            ResolvedAnnotation::Unknown(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.additives.is_empty() && self.allergens.is_empty() && self.ingredients.is_empty()
    }

    /// Convert into rank-sorted sequences.
    pub fn into_sorted(self) -> Annotations {
        Annotations {
            additives: sorted(self.additives),
            allergens: sorted(self.allergens),
            ingredients: sorted(self.ingredients),
        }
    }
}

fn sorted<T: Ord>(set: HashSet<T>) -> Vec<T> {
    let mut v: Vec<T> = set.into_iter().collect();
    v.sort();
    v
}

/// Rank-sorted, de-duplicated annotation lists of one menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub additives: Vec<Additive>,
    pub allergens: Vec<Allergen>,
    pub ingredients: Vec<Ingredient>,
}

impl Annotations {
    /// Gluten free unless a gluten-containing cereal is listed.
    ///
    /// An empty allergen list counts as gluten free.
    pub fn gluten_free(&self) -> bool {
        !self.allergens.iter().any(|a| a.contains_gluten())
    }

    /// Dietary category, in order of precedence: vegan, vegetarian, fish,
    /// and meat as the default.
    pub fn dietary_category(&self) -> DietaryCategory {
        if self.ingredients.contains(&Ingredient::VEGAN) {
            return DietaryCategory::Vegan;
        }
        if self.ingredients.contains(&Ingredient::VEGETARIAN) {
            return DietaryCategory::Vegetarian;
        }
        if self.ingredients.contains(&Ingredient::FISH) || self.allergens.contains(&Allergen::FISH) {
            return DietaryCategory::Fish;
        }
        DietaryCategory::Meat
    }

    pub fn is_empty(&self) -> bool {
        self.additives.is_empty() && self.allergens.is_empty() && self.ingredients.is_empty()
    }
}

/// Merge the annotations of several items into one sorted legend.
pub fn merge_legend<'a, I>(items: I) -> Annotations
where
    I: IntoIterator<Item = &'a Annotations>,
{
    let mut sets = AnnotationSets::new();
    for item in items {
        sets.additives.extend(item.additives.iter().copied());
        sets.allergens.extend(item.allergens.iter().copied());
        sets.ingredients.extend(item.ingredients.iter().copied());
    }
    sets.into_sorted()
}
