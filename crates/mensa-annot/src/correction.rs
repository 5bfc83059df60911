// Typo and alias correction for annotation tokens.
//
// The upstream feed contains a number of recurring data-entry errors in the
// annotation groups: glued codes ("Mi7"), long forms ("Vegan"), English
// spellings ("Egg") and markers that are no longer used ("3", "cond").
// Tokens are rewritten before any taxonomy lookup.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// Rewrite rules: token -> replacement tokens. An empty replacement drops
/// the token. Matching is exact and case-sensitive.
pub const CORRECTIONS: &[(&str, &[&str])] = &[
    ("Vegan", &["veg"]),
    ("EiEi", &["Ei"]),
    ("Egg", &["Ei"]),
    ("Mi7", &["Mi", "7"]),
    ("Sel1", &["Sel", "1"]),
    ("RWz", &["R", "Wz"]),
    // uncertain
    ("Sul", &["Su"]),
    ("VWz", &["V", "Wz"]),
    ("SelGe", &["Sel", "Ge"]),
    ("SuGe", &["Su", "Ge"]),
    ("Wzel", &["Wz"]),
    ("Sun", &["So"]),
    ("Ma", &["Man"]),
    ("Wed", &["Mi"]),
    // uncertain
    ("Se", &["Wa"]),
    // no longer used
    ("3", &[]),
    ("cond", &[]),
];

static RULES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| CORRECTIONS.iter().copied().collect());

/// Look up the replacement for a single token.
pub fn lookup(token: &str) -> Option<&'static [&'static str]> {
    RULES.get(token).copied()
}

/// Apply the correction table to a token sequence.
///
/// Each token is replaced in place by its zero, one or two replacements;
/// tokens without a rule pass through unchanged.
pub fn correct<'a, I>(tokens: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens = tokens.into_iter();
    let mut out = Vec::with_capacity(tokens.size_hint().0);
    for token in tokens {
        match lookup(token) {
            Some(replacement) => out.extend_from_slice(replacement),
            None => out.push(token),
        }
    }
    out
}
