// Annotation extractor: finds bracketed annotation groups in menu text and
// renders the text as HTML with linked annotation codes.
//
// Menu text looks like "Schnitzel (S,Gf) mit Soße (Sel,Mi)". A bracket group
// is a parenthesized run of characters without whitespace and without a
// closing parenthesis. Its interior is split on commas and periods into
// tokens, which are corrected and resolved against the taxonomies.
//
// A group counts as an annotation group if at least one corrected token is a
// declared code of any taxonomy. All tokens of such a group are rendered,
// including the ones that fail to resolve; those are reported to the
// diagnostic sink. Groups without any declared token are ordinary text.

use std::sync::LazyLock;

use regex::Regex;

use mensa_core::html;
use mensa_core::{Diagnostic, DiagnosticSink, ItemIdentity, Language};

use crate::aggregate::AnnotationSets;
use crate::correction;
use crate::resolve::{ResolvedAnnotation, is_declared_anywhere};

/// A bracket group: "(" + non-whitespace, non-")" characters + ")".
static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^)\t\n\x0C\r ]+)\)").unwrap_or_else(|e| panic!("invalid group pattern: {e}"))
});

/// Opening tag of a rendered annotation group.
const SPAN_OPEN: &str = "<span class='annot'>";
/// Closing tag of a rendered annotation group.
const SPAN_CLOSE: &str = "</span>";
/// Separator between rendered tokens of one group.
const TOKEN_SEPARATOR: &str = ", ";

/// Split a group interior into tokens on `,` and `.`, dropping empty tokens.
pub fn split_tokens(group: &str) -> impl Iterator<Item = &str> {
    group.split([',', '.']).filter(|t| !t.is_empty())
}

/// Renders the text fields of one menu item.
///
/// The extractor knows which item it is working on so that diagnostics can
/// name it. It holds no other state: annotation sets are passed to every call.
#[derive(Clone, Copy)]
pub struct Extractor<'a> {
    item: &'a ItemIdentity,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Extractor<'a> {
    pub fn new(item: &'a ItemIdentity, sink: &'a dyn DiagnosticSink) -> Self {
        Self { item, sink }
    }

    pub fn item(&self) -> &'a ItemIdentity {
        self.item
    }

    pub(crate) fn sink(&self) -> &'a dyn DiagnosticSink {
        self.sink
    }

    /// Render `text` as HTML in `lang`, adding every resolved code to `sets`.
    ///
    /// Never fails: text without groups, unmatched parentheses and groups
    /// without known codes all come out as escaped literal text.
    pub fn render(&self, text: &str, lang: Language, sets: &mut AnnotationSets) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        let mut last = 0;

        for captures in GROUP_PATTERN.captures_iter(text) {
            let (Some(whole), Some(interior)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            html::escape_into(&mut out, &text[last..whole.start()]);
            last = whole.end();
            self.render_group(&mut out, interior.as_str(), lang, sets);
        }
        html::escape_into(&mut out, &text[last..]);

        out
    }

    /// Render one bracket group given its interior (without parentheses).
    fn render_group(
        &self,
        out: &mut String,
        interior: &str,
        lang: Language,
        sets: &mut AnnotationSets,
    ) {
        let tokens = correction::correct(split_tokens(interior));

        if !tokens.iter().any(|t| is_declared_anywhere(t)) {
            out.push('(');
            html::escape_into(out, interior);
            out.push(')');
            return;
        }

        out.push_str(SPAN_OPEN);
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(TOKEN_SEPARATOR);
            }
            self.render_token(out, token, lang, sets);
        }
        out.push_str(SPAN_CLOSE);
    }

    /// Resolve and render a single corrected token.
    fn render_token(&self, out: &mut String, token: &str, lang: Language, sets: &mut AnnotationSets) {
        let resolved = ResolvedAnnotation::resolve(token);
        match resolved.html(lang) {
            Some(anchor) => {
                sets.insert(resolved);
                out.push_str(&anchor);
            }
            None => {
                self.sink
                    .report(Diagnostic::unknown_annotation(self.item, token, lang));
                html::escape_into(out, token);
            }
        }
    }
}
