// Resolution of a single corrected token against the three taxonomies.

use mensa_core::Language;

use crate::taxonomy::{Additive, Allergen, Annotation, AnnotationKind, Ingredient};

/// Result of resolving one annotation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedAnnotation<'a> {
    Additive(Additive),
    Allergen(Allergen),
    Ingredient(Ingredient),
    /// No taxonomy recognizes the token.
    Unknown(&'a str),
}

impl<'a> ResolvedAnnotation<'a> {
    /// Resolve `token`, trying additives, then allergens, then ingredients.
    ///
    /// The first taxonomy whose normalization succeeds wins.
    pub fn resolve(token: &'a str) -> Self {
        if let Some(additive) = Additive::normalize(token) {
            return ResolvedAnnotation::Additive(additive);
        }
        if let Some(allergen) = Allergen::normalize(token) {
            return ResolvedAnnotation::Allergen(allergen);
        }
        if let Some(ingredient) = Ingredient::normalize(token) {
            return ResolvedAnnotation::Ingredient(ingredient);
        }
        ResolvedAnnotation::Unknown(token)
    }

    pub fn kind(&self) -> Option<AnnotationKind> {
        match self {
            ResolvedAnnotation::Additive(_) => Some(AnnotationKind::Additive),
            ResolvedAnnotation::Allergen(_) => Some(AnnotationKind::Allergen),
            ResolvedAnnotation::Ingredient(_) => Some(AnnotationKind::Ingredient),
            ResolvedAnnotation::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ResolvedAnnotation::Unknown(_))
    }

    /// Canonical code, or the raw token if unknown.
    pub fn code(&self) -> &'a str {
        match *self {
            ResolvedAnnotation::Additive(a) => a.code(),
            ResolvedAnnotation::Allergen(a) => a.code(),
            ResolvedAnnotation::Ingredient(i) => i.code(),
            ResolvedAnnotation::Unknown(token) => token,
        }
    }

    /// Anchor markup for a known code; `None` if unknown.
    pub fn html(&self, lang: Language) -> Option<String> {
        match *self {
            ResolvedAnnotation::Additive(a) => Some(a.html(lang)),
            ResolvedAnnotation::Allergen(a) => Some(a.html(lang)),
            ResolvedAnnotation::Ingredient(i) => Some(i.html(lang)),
            ResolvedAnnotation::Unknown(_) => None,
        }
    }
}

/// Whether `token` is spelled exactly like a code of any taxonomy.
///
/// This decides whether a bracket group is an annotation group at all.
pub fn is_declared_anywhere(token: &str) -> bool {
    Additive::is_declared(token) || Allergen::is_declared(token) || Ingredient::is_declared(token)
}
