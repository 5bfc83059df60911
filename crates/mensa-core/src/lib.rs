//! Shared types and utilities for the mensa annotation engine.
//!
//! - [`fold_map`] -- Case-insensitive, insertion-ordered lookup used by the taxonomy tables
//! - [`enums`] -- [`Language`] and [`DietaryCategory`]
//! - [`html`] -- HTML escaping
//! - [`diagnostic`] -- Non-fatal diagnostic events and sinks

pub mod diagnostic;
pub mod enums;
pub mod fold_map;
pub mod html;

pub use diagnostic::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, ItemIdentity, NullSink,
    TracingSink,
};
pub use enums::{DietaryCategory, Language, LanguageError};
pub use fold_map::FoldMap;
