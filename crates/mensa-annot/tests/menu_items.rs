//! Fixture-driven tests: compute menu items and compare against expected fields.
//!
//! Cases live in `tests/fixtures/items.json`. Each case holds a menu item and
//! the subset of computed fields to check; omitted fields are not compared.
//!
//! Run: cargo test -p mensa-annot --test menu_items

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use mensa_annot::{
    Additive, Allergen, AnnotationSets, Annotations, ComputedFields, Extractor, Ingredient,
    MenuItem, merge_legend,
};
use mensa_core::{CollectingSink, DiagnosticKind, ItemIdentity, Language, NullSink};

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    item: MenuItem,
    expect: Value,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/items.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

fn compute(item: &MenuItem) -> (ComputedFields, Vec<String>) {
    let sink = CollectingSink::new();
    let computed = item.compute(&sink);
    let tokens = sink.take().into_iter().map(|d| d.token).collect();
    (computed, tokens)
}

// ---------------------------------------------------------------------------
// Fixture cases
// ---------------------------------------------------------------------------

#[test]
fn fixture_cases_match_expected_fields() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        let (computed, diagnostics) = compute(&case.item);
        let actual = serde_json::to_value(&computed).unwrap();
        let expect = case
            .expect
            .as_object()
            .unwrap_or_else(|| panic!("{}: expect must be an object", case.name));

        for (field, expected) in expect {
            if field == "diagnostics" {
                assert_eq!(
                    serde_json::to_value(&diagnostics).unwrap(),
                    *expected,
                    "{}: diagnostics",
                    case.name
                );
                continue;
            }
            assert_eq!(
                actual.get(field),
                Some(expected),
                "{}: field {field}",
                case.name
            );
        }
    }
}

#[test]
fn fixture_cases_are_idempotent() {
    for case in load_cases() {
        let (a, da) = compute(&case.item);
        let (b, db) = compute(&case.item);
        assert_eq!(a, b, "{}", case.name);
        assert_eq!(da, db, "{}", case.name);
    }
}

#[test]
fn fixture_legend_is_sorted_union() {
    let computed: Vec<ComputedFields> = load_cases()
        .iter()
        .map(|c| c.item.compute(&NullSink))
        .collect();
    let legend = merge_legend(computed.iter().map(|c| &c.annotations));

    let mut expected = legend.allergens.clone();
    expected.sort();
    assert_eq!(legend.allergens, expected);
    assert!(legend.ingredients.contains(&Ingredient::ORGANIC));
    assert!(legend.allergens.contains(&Allergen::RYE));
    assert_eq!(
        legend.additives,
        vec![Additive::COLOR, Additive::ANTIOXIDANT, Additive::SULPHURATED]
    );
}

#[test]
fn fixture_sort_by_category() {
    let mut items: Vec<MenuItem> = load_cases().into_iter().map(|c| c.item).collect();
    items.sort_by(MenuItem::cmp_category);
    let order: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "Essen 1",
            "Essen 2",
            "Aktionsessen 1",
            "Suppe 1",
            "Grill 3",
            "SB-Theke",
            "Tipp des Tages",
        ]
    );
}

// ---------------------------------------------------------------------------
// Rendering properties
// ---------------------------------------------------------------------------

fn render(text: &str, lang: Language) -> (String, Annotations, CollectingSink) {
    let item = ItemIdentity::new("test", "2024-01-01");
    let sink = CollectingSink::new();
    let mut sets = AnnotationSets::new();
    let html = Extractor::new(&item, &sink).render(text, lang, &mut sets);
    (html, sets.into_sorted(), sink)
}

#[test]
fn text_without_groups_is_only_escaped() {
    let texts = [
        "Currywurst mit Pommes",
        "Salat \"Caesar\" mit 'Dressing'",
        "Reis (mit Gemüse",
        "Nudeln (mit Soße)",
        "Brot & Butter > nichts",
    ];
    for text in texts {
        for lang in Language::ALL {
            let (html, annotations, sink) = render(text, lang);
            assert_eq!(html, mensa_core::html::escape(text), "{text}");
            assert!(annotations.is_empty(), "{text}");
            assert!(sink.take().is_empty(), "{text}");
        }
    }
}

#[test]
fn invalid_group_round_trips() {
    for group in ["(abc)", "(1a)", "(xyz,zz)", "(3)", "(cond,3)"] {
        let text = format!("Menü {group}");
        let (html, annotations, _) = render(&text, Language::German);
        assert_eq!(html, text);
        assert!(annotations.is_empty());
    }
}

#[test]
fn single_declared_token_renders_whole_group() {
    let (html, annotations, sink) = render("Eintopf (foo,Wz,bar)", Language::German);
    assert_eq!(
        html,
        "Eintopf <span class='annot'>foo, \
         <a class='annot' href='#all-Wz' title='glutenhaltiges Getreide Weizen (Dinkel, Kamut)'>Wz</a>, bar</span>"
    );
    assert_eq!(annotations.allergens, vec![Allergen::WHEAT]);

    let events = sink.take();
    let tokens: Vec<&str> = events.iter().map(|d| d.token.as_str()).collect();
    assert_eq!(tokens, vec!["foo", "bar"]);
    assert!(events.iter().all(|d| d.kind == DiagnosticKind::UnknownAnnotation));
    assert!(events.iter().all(|d| d.language == Some(Language::German)));
}

#[test]
fn lookup_is_case_insensitive_with_canonical_output() {
    let (html, annotations, _) = render("(Ei,WZ,mi)", Language::English);
    assert!(html.contains(">Wz</a>"));
    assert!(html.contains(">Mi</a>"));
    assert!(!html.contains("WZ"));
    assert_eq!(
        annotations.allergens,
        vec![Allergen::WHEAT, Allergen::EGGS, Allergen::MILK]
    );
}

#[test]
fn sort_order_is_independent_of_text_order() {
    let (_, a, _) = render("(Mi,Wz,Ei) (12,1)", Language::German);
    let (_, b, _) = render("(1) (Ei) (12) (Wz,Mi)", Language::German);
    assert_eq!(a, b);
    assert_eq!(a.additives, vec![Additive::COLOR, Additive::PHOSPHATE]);
}

#[test]
fn descriptions_with_parentheses_stay_in_titles() {
    let (html, _, _) = render("(MSC)", Language::English);
    assert_eq!(
        html,
        "<span class='annot'><a class='annot' href='#ing-MSC' \
         title='sustainable fish (certified by MSC - C - 51840)'>MSC</a></span>"
    );
}
