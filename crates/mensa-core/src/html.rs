// HTML escaping for menu text and annotation markup.

/// Append `s` to `out`, escaping the characters that are significant in HTML
/// text and in single- or double-quoted attribute values.
///
/// `<`, `>`, `&`, `'` and `"` become character references and NUL becomes
/// U+FFFD. Everything else is copied unchanged.
pub fn escape_into(out: &mut String, s: &str) {
    if s.contains('\0') {
        html_escape::encode_quoted_attribute_to_string(s.replace('\0', "\u{FFFD}"), out);
    } else {
        html_escape::encode_quoted_attribute_to_string(s, out);
    }
}

/// Return `s` with HTML-significant characters escaped.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}
