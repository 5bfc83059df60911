// Taxonomy tables: the closed, ranked, bilingual code sets.
//
// Each of the three taxonomies (additives, allergens, ingredients) is a static
// table of codes with an English and a German description. The declaration
// order of the table defines the display rank of every code. Lookups resolve
// codes case-insensitively and return the canonical spelling.
//
// Tables are built once into process-wide `LazyLock` singletons and are never
// mutated afterwards.

pub mod additive;
pub mod allergen;
pub mod ingredient;

use std::fmt;

use mensa_core::fold_map::FoldMap;
use mensa_core::html;
use mensa_core::Language;

pub use additive::Additive;
pub use allergen::Allergen;
pub use ingredient::Ingredient;

// ---------------------------------------------------------------------------
// Table data
// ---------------------------------------------------------------------------

/// One row of a taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxonomyEntry {
    /// Canonical code as it appears in menu text.
    pub code: &'static str,
    /// English description.
    pub en: &'static str,
    /// German description.
    pub de: &'static str,
}

impl TaxonomyEntry {
    pub const fn new(code: &'static str, en: &'static str, de: &'static str) -> Self {
        Self { code, en, de }
    }

    /// Description in the given language.
    pub fn text(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.en,
            Language::German => self.de,
        }
    }
}

/// The three annotation taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    Additive,
    Allergen,
    Ingredient,
}

impl AnnotationKind {
    /// All kinds, in resolution priority order.
    pub const ALL: [AnnotationKind; 3] = [
        AnnotationKind::Additive,
        AnnotationKind::Allergen,
        AnnotationKind::Ingredient,
    ];

    /// Prefix of the anchor target used when linking codes of this kind.
    pub fn link_prefix(self) -> &'static str {
        match self {
            AnnotationKind::Additive => "add",
            AnnotationKind::Allergen => "all",
            AnnotationKind::Ingredient => "ing",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::Additive => "additive",
            AnnotationKind::Allergen => "allergen",
            AnnotationKind::Ingredient => "ingredient",
        }
    }

    /// The taxonomy table for this kind.
    pub fn taxonomy(self) -> &'static Taxonomy {
        match self {
            AnnotationKind::Additive => Additive::taxonomy(),
            AnnotationKind::Allergen => Allergen::taxonomy(),
            AnnotationKind::Ingredient => Ingredient::taxonomy(),
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnnotationKind {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" | "additives" | "add" => Ok(AnnotationKind::Additive),
            "allergen" | "allergens" | "all" => Ok(AnnotationKind::Allergen),
            "ingredient" | "ingredients" | "ing" => Ok(AnnotationKind::Ingredient),
            _ => Err(AnnotationError::UnknownKind(s.to_string())),
        }
    }
}

/// Error for codes or kinds that are not part of any taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("unknown {kind} code: {code:?}")]
    UnknownCode { kind: AnnotationKind, code: String },
    #[error("unknown annotation kind: {0:?}")]
    UnknownKind(String),
}

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// A ranked, bilingual table of annotation codes.
pub struct Taxonomy {
    kind: AnnotationKind,
    entries: &'static [TaxonomyEntry],
    /// Legacy spellings and the canonical code they stand for.
    aliases: &'static [(&'static str, &'static str)],
    /// Code -> rank (index into `entries`).
    ranks: FoldMap<usize>,
}

impl Taxonomy {
    /// Build a taxonomy from its declaration-ordered table.
    pub fn new(
        kind: AnnotationKind,
        entries: &'static [TaxonomyEntry],
        aliases: &'static [(&'static str, &'static str)],
    ) -> Self {
        let ranks = FoldMap::from_order(entries.iter().map(|e| e.code));
        Self {
            kind,
            entries,
            aliases,
            ranks,
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// All entries in rank order.
    pub fn entries(&self) -> &'static [TaxonomyEntry] {
        self.entries
    }

    /// Canonical code of a legacy alias, compared exactly.
    fn alias_target(&self, code: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == code)
            .map(|(_, target)| *target)
    }

    /// Resolve `code` to its table entry.
    ///
    /// Aliases are replaced by their canonical code first; the lookup itself
    /// is case-insensitive.
    pub fn normalize(&self, code: &str) -> Option<&'static TaxonomyEntry> {
        let code = self.alias_target(code).unwrap_or(code);
        let (_, &rank) = self.ranks.get(code)?;
        self.entries.get(rank)
    }

    /// Whether `code` (or an alias of it) names an entry, in any casing.
    pub fn is_known(&self, code: &str) -> bool {
        self.normalize(code).is_some()
    }

    /// Whether `code` is spelled exactly like a declared code or alias.
    pub fn is_declared(&self, code: &str) -> bool {
        self.ranks.contains_exact(code) || self.alias_target(code).is_some()
    }

    /// Rank of `code` after alias resolution, if known.
    pub fn rank(&self, code: &str) -> Option<usize> {
        let code = self.alias_target(code).unwrap_or(code);
        self.ranks.get(code).map(|(_, &rank)| rank)
    }

    /// Description of `code` in `lang`, or the empty string if unknown.
    pub fn text(&self, code: &str, lang: Language) -> &'static str {
        self.normalize(code).map_or("", |e| e.text(lang))
    }
}

impl fmt::Debug for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Taxonomy")
            .field("kind", &self.kind)
            .field("len", &self.entries.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render an annotation anchor:
/// `<a class='annot' href='#PREFIX-CODE' title='TITLE'>LABEL</a>`.
pub(crate) fn anchor(kind: AnnotationKind, code: &str, title: &str, label: &str) -> String {
    let mut out = String::with_capacity(48 + code.len() * 2 + title.len() + label.len());
    out.push_str("<a class='annot' href='#");
    out.push_str(kind.link_prefix());
    out.push('-');
    html::escape_into(&mut out, code);
    out.push_str("' title='");
    html::escape_into(&mut out, title);
    out.push_str("'>");
    html::escape_into(&mut out, label);
    out.push_str("</a>");
    out
}

// ---------------------------------------------------------------------------
// Annotation trait
// ---------------------------------------------------------------------------

/// Common behavior of the three annotation code types.
///
/// Values of an `Annotation` type always hold a canonical, known code.
pub trait Annotation: Copy + Eq + std::hash::Hash + fmt::Debug + 'static {
    const KIND: AnnotationKind;

    /// The static table this type is drawn from.
    fn taxonomy() -> &'static Taxonomy;

    /// Wrap a canonical entry. Only called with entries of `Self::taxonomy()`.
    fn from_entry(entry: &'static TaxonomyEntry) -> Self;

    /// The table entry of this code.
    fn entry(self) -> &'static TaxonomyEntry;

    /// Resolve a possibly mis-cased or legacy code.
    fn normalize(code: &str) -> Option<Self> {
        Self::taxonomy().normalize(code).map(Self::from_entry)
    }

    /// Parse a code, failing with [`AnnotationError::UnknownCode`].
    fn parse(code: &str) -> Result<Self, AnnotationError> {
        Self::normalize(code).ok_or_else(|| AnnotationError::UnknownCode {
            kind: Self::KIND,
            code: code.to_string(),
        })
    }

    fn is_known(code: &str) -> bool {
        Self::taxonomy().is_known(code)
    }

    fn is_declared(code: &str) -> bool {
        Self::taxonomy().is_declared(code)
    }

    /// All codes in rank order.
    fn all() -> Vec<Self> {
        Self::taxonomy().entries().iter().map(Self::from_entry).collect()
    }

    fn code(self) -> &'static str {
        self.entry().code
    }

    /// Display and sort rank; dense from 0 in declaration order.
    fn rank(self) -> usize {
        Self::taxonomy().rank(self.code()).unwrap_or(usize::MAX)
    }

    /// Description in `lang`.
    fn text(self, lang: Language) -> &'static str {
        self.entry().text(lang)
    }

    /// Anchor whose visible label is the code itself.
    fn html(self, lang: Language) -> String {
        anchor(Self::KIND, self.code(), self.text(lang), self.code())
    }
}

/// Implement ordering, formatting and serde for a code newtype in terms of
/// its [`Annotation`] impl.
macro_rules! annotation_code {
    ($ty:ident) => {
        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                use $crate::taxonomy::Annotation;
                self.rank().cmp(&other.rank())
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::taxonomy::Annotation;
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::taxonomy::AnnotationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::taxonomy::Annotation>::parse(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use $crate::taxonomy::Annotation;
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$ty as $crate::taxonomy::Annotation>::parse(&code)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use annotation_code;

#[cfg(test)]
mod tests {
    use super::*;

    static ENTRIES: [TaxonomyEntry; 3] = [
        TaxonomyEntry::new("Aa", "first", "erstes"),
        TaxonomyEntry::new("b", "second", "zweites"),
        TaxonomyEntry::new("C<", "third", "drittes"),
    ];
    static ALIASES: [(&str, &str); 1] = [("Z", "b")];

    fn table() -> Taxonomy {
        Taxonomy::new(AnnotationKind::Allergen, &ENTRIES, &ALIASES)
    }

    #[test]
    fn normalize_case_insensitive() {
        let t = table();
        assert_eq!(t.normalize("aa").map(|e| e.code), Some("Aa"));
        assert_eq!(t.normalize("B").map(|e| e.code), Some("b"));
        assert!(t.normalize("d").is_none());
    }

    #[test]
    fn normalize_alias() {
        let t = table();
        assert_eq!(t.normalize("Z").map(|e| e.code), Some("b"));
        // aliases match exactly
        assert!(t.normalize("z").is_none());
    }

    #[test]
    fn declared_is_exact() {
        let t = table();
        assert!(t.is_declared("Aa"));
        assert!(!t.is_declared("aa"));
        assert!(t.is_declared("Z"));
        assert!(t.is_known("aa"));
    }

    #[test]
    fn ranks_follow_declaration() {
        let t = table();
        assert_eq!(t.rank("Aa"), Some(0));
        assert_eq!(t.rank("b"), Some(1));
        assert_eq!(t.rank("c<"), Some(2));
        assert_eq!(t.rank("Z"), Some(1));
        assert_eq!(t.rank("x"), None);
    }

    #[test]
    fn text_by_language() {
        let t = table();
        assert_eq!(t.text("b", Language::English), "second");
        assert_eq!(t.text("b", Language::German), "zweites");
        assert_eq!(t.text("nope", Language::German), "");
    }

    #[test]
    fn anchor_escapes_code_and_title() {
        let html = anchor(AnnotationKind::Allergen, "C<", "a 'b'", "C<");
        assert_eq!(
            html,
            "<a class='annot' href='#all-C&lt;' title='a &#x27;b&#x27;'>C&lt;</a>"
        );
    }

    #[test]
    fn kind_from_str() {
        assert_eq!(
            "Allergens".parse::<AnnotationKind>(),
            Ok(AnnotationKind::Allergen)
        );
        assert_eq!(
            "ing".parse::<AnnotationKind>(),
            Ok(AnnotationKind::Ingredient)
        );
        assert!("foo".parse::<AnnotationKind>().is_err());
    }

    #[test]
    fn kind_prefixes() {
        assert_eq!(AnnotationKind::Additive.link_prefix(), "add");
        assert_eq!(AnnotationKind::Allergen.link_prefix(), "all");
        assert_eq!(AnnotationKind::Ingredient.link_prefix(), "ing");
    }

    #[test]
    fn kind_taxonomies_have_matching_kind() {
        for kind in AnnotationKind::ALL {
            assert_eq!(kind.taxonomy().kind(), kind);
        }
    }
}
