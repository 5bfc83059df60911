// Diagnostic channel for non-fatal data-quality events.
//
// Unknown annotation tokens and unknown pictograms never fail a render. They
// are reported through a `DiagnosticSink` so the surrounding application can
// log them and curate the taxonomy and correction tables offline.

use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::enums::Language;

/// Identifies the menu item a diagnostic belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIdentity {
    /// Cafeteria the item is served at.
    pub location: String,
    /// Day the item is served on.
    pub day: String,
}

impl ItemIdentity {
    pub fn new(location: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            day: day.into(),
        }
    }
}

impl fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.location, self.day)
    }
}

/// Kind of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A token inside an otherwise valid annotation group matched no taxonomy.
    UnknownAnnotation,
    /// A pictogram reference named no known ingredient.
    UnknownIngredient,
}

impl DiagnosticKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnknownAnnotation => "unknown-annotation",
            DiagnosticKind::UnknownIngredient => "unknown-ingredient",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-fatal diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub item: ItemIdentity,
    /// The offending token or pictogram identifier.
    pub token: String,
    /// Language of the field being rendered; `None` for pictograms.
    pub language: Option<Language>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn unknown_annotation(item: &ItemIdentity, token: &str, language: Language) -> Self {
        Self {
            item: item.clone(),
            token: token.to_string(),
            language: Some(language),
            kind: DiagnosticKind::UnknownAnnotation,
        }
    }

    pub fn unknown_ingredient(item: &ItemIdentity, token: &str) -> Self {
        Self {
            item: item.clone(),
            token: token.to_string(),
            language: None,
            kind: DiagnosticKind::UnknownIngredient,
        }
    }
}

/// Receiver of diagnostic events.
///
/// Sinks must be shareable between threads: items are independent and may be
/// processed in parallel against the same sink.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that emits every diagnostic as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let language = diagnostic.language.map(Language::code).unwrap_or("-");
        match diagnostic.kind {
            DiagnosticKind::UnknownAnnotation => tracing::warn!(
                location = %diagnostic.item.location,
                day = %diagnostic.item.day,
                annot = %diagnostic.token,
                language,
                kind = %diagnostic.kind,
                "unknown annotation"
            ),
            DiagnosticKind::UnknownIngredient => tracing::warn!(
                location = %diagnostic.item.location,
                day = %diagnostic.item.day,
                ingredient = %diagnostic.token,
                kind = %diagnostic.kind,
                "unknown ingredient"
            ),
        }
    }
}

/// Sink that stores diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all diagnostics collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ItemIdentity {
        ItemIdentity::new("mensa-sued", "2024-05-13")
    }

    #[test]
    fn unknown_annotation_event() {
        let d = Diagnostic::unknown_annotation(&item(), "xyz", Language::English);
        assert_eq!(d.token, "xyz");
        assert_eq!(d.language, Some(Language::English));
        assert_eq!(d.kind, DiagnosticKind::UnknownAnnotation);
        assert_eq!(d.item.location, "mensa-sued");
    }

    #[test]
    fn unknown_ingredient_event_has_no_language() {
        let d = Diagnostic::unknown_ingredient(&item(), "Foo");
        assert_eq!(d.language, None);
        assert_eq!(d.kind.as_str(), "unknown-ingredient");
    }

    #[test]
    fn collecting_sink_take_drains() {
        let sink = CollectingSink::new();
        sink.report(Diagnostic::unknown_ingredient(&item(), "X"));
        sink.report(Diagnostic::unknown_ingredient(&item(), "Y"));
        let events = sink.take();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].token, "Y");
        assert!(sink.take().is_empty());
    }

    #[test]
    fn null_and_tracing_sinks_accept_events() {
        NullSink.report(Diagnostic::unknown_ingredient(&item(), "X"));
        TracingSink.report(Diagnostic::unknown_annotation(&item(), "X", Language::German));
    }

    #[test]
    fn identity_display() {
        assert_eq!(item().to_string(), "mensa-sued@2024-05-13");
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&DiagnosticKind::UnknownAnnotation).unwrap();
        assert_eq!(json, "\"unknown-annotation\"");
    }
}
