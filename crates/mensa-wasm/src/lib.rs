// WASM bindings for the mensa annotation engine.
//
// Provides a `WasmMensa` class exported via wasm-bindgen. Rendered text,
// computed item fields and diagnostics are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const mensa = new WasmMensa("de");
//   mensa.render("Schnitzel (S,Wz)");       // => { html: "...", allergens: ["Wz"], ... }
//   mensa.render("Soup (Sel)", "en");       // => { html: "...", allergens: ["Sel"], ... }
//   mensa.computeItem({ title_de: "..." }); // => { category_en: "...", html_title_de: "...", ... }
//   mensa.taxonomy("allergen", "en");       // => [{ code: "Wz", text: "wheat", ... }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use mensa_annot::{Annotation, AnnotationKind, AnnotationSets, ComputedFields, Extractor, MenuItem};
use mensa_core::{CollectingSink, Diagnostic, ItemIdentity, Language};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a diagnostic event.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    location: String,
    day: String,
    token: String,
    kind: &'static str,
    language: Option<&'static str>,
}

impl From<Diagnostic> for JsDiagnostic {
    fn from(d: Diagnostic) -> Self {
        JsDiagnostic {
            location: d.item.location,
            day: d.item.day,
            token: d.token,
            kind: d.kind.as_str(),
            language: d.language.map(Language::code),
        }
    }
}

/// Serializable result of rendering one text.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRendered {
    html: String,
    additives: Vec<&'static str>,
    allergens: Vec<&'static str>,
    ingredients: Vec<&'static str>,
    diagnostics: Vec<JsDiagnostic>,
}

/// Serializable computed fields of one menu item.
#[derive(Serialize)]
struct JsComputed {
    #[serde(flatten)]
    fields: ComputedFields,
    diagnostics: Vec<JsDiagnostic>,
}

/// Serializable taxonomy row.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTaxonomyEntry {
    code: &'static str,
    text: &'static str,
    rank: usize,
    link: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn codes<A: Annotation>(list: &[A]) -> Vec<&'static str> {
    list.iter().map(|a| a.code()).collect()
}

fn parse_lang(code: &str) -> Result<Language, JsError> {
    code.parse::<Language>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn diagnostics(sink: CollectingSink) -> Vec<JsDiagnostic> {
    sink.take().into_iter().map(JsDiagnostic::from).collect()
}

// ============================================================================
// WasmMensa
// ============================================================================

/// Menu annotation engine for WebAssembly.
///
/// Renders annotated menu text as HTML and computes the derived fields of
/// menu items. Diagnostics are returned alongside each result instead of
/// being logged.
#[wasm_bindgen]
pub struct WasmMensa {
    default_lang: Language,
}

#[wasm_bindgen]
impl WasmMensa {
    /// Create a new instance.
    ///
    /// - `default_lang`: language used when a call omits one ("de" or "en",
    ///   default "de")
    #[wasm_bindgen(constructor)]
    pub fn new(default_lang: Option<String>) -> Result<WasmMensa, JsError> {
        let default_lang = match default_lang {
            Some(code) => parse_lang(&code)?,
            None => Language::default(),
        };
        Ok(WasmMensa { default_lang })
    }

    /// Render one text as HTML.
    ///
    /// Returns an object with fields `html`, `additives`, `allergens`,
    /// `ingredients` (sorted codes) and `diagnostics`.
    pub fn render(&self, text: &str, lang: Option<String>) -> Result<JsValue, JsError> {
        let lang = self.lang(lang)?;
        let item = ItemIdentity::new("wasm", "");
        let sink = CollectingSink::new();
        let mut sets = AnnotationSets::new();
        let html = Extractor::new(&item, &sink).render(text, lang, &mut sets);
        let sorted = sets.into_sorted();

        to_js(&JsRendered {
            html,
            additives: codes(&sorted.additives),
            allergens: codes(&sorted.allergens),
            ingredients: codes(&sorted.ingredients),
            diagnostics: diagnostics(sink),
        })
    }

    /// Compute all derived fields of a menu item.
    ///
    /// `item` is a plain object with the fields of a menu item (`location`,
    /// `day`, `category`, `title_de`, ..., `pictograms`); missing fields are
    /// treated as empty.
    #[wasm_bindgen(js_name = "computeItem")]
    pub fn compute_item(&self, item: JsValue) -> Result<JsValue, JsError> {
        let item: MenuItem =
            serde_wasm_bindgen::from_value(item).map_err(|e| JsError::new(&e.to_string()))?;
        let sink = CollectingSink::new();
        let fields = item.compute(&sink);
        to_js(&JsComputed {
            fields,
            diagnostics: diagnostics(sink),
        })
    }

    /// List one taxonomy in rank order.
    ///
    /// - `kind`: "additive", "allergen" or "ingredient"
    /// - `lang`: description language (default: the instance default)
    pub fn taxonomy(&self, kind: &str, lang: Option<String>) -> Result<JsValue, JsError> {
        let lang = self.lang(lang)?;
        let kind = kind
            .parse::<AnnotationKind>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        let rows: Vec<JsTaxonomyEntry> = kind
            .taxonomy()
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, e)| JsTaxonomyEntry {
                code: e.code,
                text: e.text(lang),
                rank,
                link: format!("{}-{}", kind.link_prefix(), e.code),
            })
            .collect();
        to_js(&rows)
    }

    /// Translate a German category name into English.
    #[wasm_bindgen(js_name = "translateCategory")]
    pub fn translate_category(category: &str) -> String {
        mensa_annot::translate_category(category)
    }
}

impl WasmMensa {
    fn lang(&self, lang: Option<String>) -> Result<Language, JsError> {
        match lang {
            Some(code) => parse_lang(&code),
            None => Ok(self.default_lang),
        }
    }
}
