//! Annotation normalization and rendering engine for cafeteria menus.
//!
//! Menu text from the upstream feed carries bracketed annotation groups such
//! as `"Schnitzel (S,Wz,1)"`. This crate recognizes those groups, corrects
//! known data-entry errors, resolves the codes against three ranked bilingual
//! taxonomies and renders the text as HTML with linked codes.
//!
//! - [`taxonomy`] -- Additive, allergen and ingredient tables
//! - [`correction`] -- Token rewrite table applied before lookup
//! - [`resolve`] -- Resolution of one token against all taxonomies
//! - [`extract`] -- Bracket group extraction and HTML rendering
//! - [`pictogram`] -- Ingredient codes from icon references
//! - [`aggregate`] -- Per-item annotation sets and derived facts
//! - [`item`] -- Menu items and their computed fields
//!
//! ```
//! use mensa_annot::{AnnotationSets, Extractor};
//! use mensa_core::{ItemIdentity, Language, NullSink};
//!
//! let item = ItemIdentity::new("sued", "2024-05-13");
//! let mut sets = AnnotationSets::new();
//! let html = Extractor::new(&item, &NullSink).render("Ei (Ei)", Language::English, &mut sets);
//! assert_eq!(
//!     html,
//!     "Ei <span class='annot'><a class='annot' href='#all-Ei' title='eggs'>Ei</a></span>"
//! );
//! ```

pub mod aggregate;
pub mod correction;
pub mod extract;
pub mod item;
pub mod pictogram;
pub mod resolve;
pub mod taxonomy;

pub use aggregate::{AnnotationSets, Annotations, merge_legend};
pub use extract::Extractor;
pub use item::{ComputedFields, MenuItem, compute_annotations, translate_category};
pub use pictogram::extract_pictograms;
pub use resolve::ResolvedAnnotation;
pub use taxonomy::{
    Additive, Allergen, Annotation, AnnotationError, AnnotationKind, Ingredient, Taxonomy,
    TaxonomyEntry,
};
