// Pictogram resolver: ingredient codes from upstream icon references.
//
// The upstream feed marks some ingredients with icons instead of (or in
// addition to) inline codes. The pictogram field holds zero or more icon
// URLs in arbitrary surrounding markup; the file stem of each URL is an
// ingredient code.

use std::sync::LazyLock;

use hashbrown::HashSet;
use regex::Regex;

use mensa_core::{Diagnostic, DiagnosticSink, ItemIdentity};

use crate::extract::Extractor;
use crate::taxonomy::{Annotation, Ingredient};

static ICON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://www\.max-manager\.de/daten-extern/sw-erlangen-nuernberg/icons/([^.]+)\.png")
        .unwrap_or_else(|e| panic!("invalid icon pattern: {e}"))
});

/// Identifiers of all icon references in `refs`, in order of appearance.
pub fn icon_ids(refs: &str) -> impl Iterator<Item = &str> {
    ICON_PATTERN
        .captures_iter(refs)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Resolve every icon reference in `refs` to an ingredient.
///
/// Identifiers that name no ingredient are dropped and reported as
/// `unknown-ingredient`.
pub fn extract_pictograms(
    refs: &str,
    item: &ItemIdentity,
    sink: &dyn DiagnosticSink,
) -> HashSet<Ingredient> {
    let mut found = HashSet::new();
    for id in icon_ids(refs) {
        match Ingredient::normalize(id) {
            Some(ingredient) => {
                found.insert(ingredient);
            }
            None => sink.report(Diagnostic::unknown_ingredient(item, id)),
        }
    }
    found
}

impl Extractor<'_> {
    /// Resolve the pictogram references of the current item.
    pub fn pictograms(&self, refs: &str) -> HashSet<Ingredient> {
        extract_pictograms(refs, self.item(), self.sink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_core::{CollectingSink, DiagnosticKind};

    const BASE: &str = "https://www.max-manager.de/daten-extern/sw-erlangen-nuernberg/icons/";

    fn icon(id: &str) -> String {
        format!("<img src='{BASE}{id}.png'>")
    }

    fn item() -> ItemIdentity {
        ItemIdentity::new("sued", "2024-05-14")
    }

    #[test]
    fn extracts_known_ingredients() {
        let refs = format!("{} {}", icon("S"), icon("Gf"));
        let sink = CollectingSink::new();
        let found = extract_pictograms(&refs, &item(), &sink);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&Ingredient::PORK));
        assert!(found.contains(&Ingredient::GLUTEN_FREE));
        assert!(sink.take().is_empty());
    }

    #[test]
    fn legacy_b_is_organic() {
        let sink = CollectingSink::new();
        let found = extract_pictograms(&icon("B"), &item(), &sink);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![Ingredient::ORGANIC]);
    }

    #[test]
    fn deduplicates() {
        let refs = [icon("veg"), icon("VEG"), icon("veg")].concat();
        let sink = CollectingSink::new();
        let found = extract_pictograms(&refs, &item(), &sink);
        assert_eq!(found.len(), 1);
        assert!(found.contains(&Ingredient::VEGAN));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let refs = format!("{}{}", icon("Kinder"), icon("F"));
        let sink = CollectingSink::new();
        let found = extract_pictograms(&refs, &item(), &sink);
        assert_eq!(found.len(), 1);
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token, "Kinder");
        assert_eq!(events[0].kind, DiagnosticKind::UnknownIngredient);
        assert_eq!(events[0].language, None);
    }

    #[test]
    fn other_urls_are_ignored() {
        let refs = "https://example.org/icons/S.png http://www.max-manager.de/daten-extern/sw-erlangen-nuernberg/icons/S.png";
        let sink = CollectingSink::new();
        assert!(extract_pictograms(refs, &item(), &sink).is_empty());
        assert!(sink.take().is_empty());
    }

    #[test]
    fn empty_input() {
        let sink = CollectingSink::new();
        assert!(extract_pictograms("", &item(), &sink).is_empty());
        assert_eq!(icon_ids("").count(), 0);
    }

    #[test]
    fn extractor_method_uses_item_identity() {
        let item = item();
        let sink = CollectingSink::new();
        let extractor = Extractor::new(&item, &sink);
        let found = extractor.pictograms(&icon("nope"));
        assert!(found.is_empty());
        assert_eq!(sink.take()[0].item, item);
    }
}
