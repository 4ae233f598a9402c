//! Context-aware escaping for HTML text and attribute values.
//!
//! Two contexts with different (minimal-necessary) rules:
//! - body text escapes the five characters that can change document
//!   structure: `&`, `<`, `>`, `'`, `"`;
//! - attribute values escape only `"`, since they always render inside
//!   double quotes.
//!
//! Attribute *keys* use the body-text rule; keys driven by untrusted data
//! must not be able to break out of the tag.
//!
//! Escaping is pure and total; it never fails.

/// Escape a string for use as HTML body text.
///
/// Replaces `&` with `&amp;`, `<` with `&lt;`, `>` with `&gt;`, `'` with
/// `&#39;` and `"` with `&#34;`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped_text(&mut out, s);
    out
}

/// Escape a string for use inside a double-quoted attribute value.
///
/// Only `"` needs replacing (`&quot;`); everything else is inert inside
/// double quotes and passes through unchanged.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_escaped_attr(&mut out, s);
    out
}

/// Append the body-text-escaped form of `s` to `out`.
pub(crate) fn push_escaped_text(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
}

/// Append the attribute-value-escaped form of `s` to `out`.
pub(crate) fn push_escaped_attr(out: &mut String, s: &str) {
    // Split on quotes instead of walking chars: clean values copy in one
    // memcpy-sized push.
    let mut rest = s;
    while let Some(pos) = rest.find('"') {
        out.push_str(&rest[..pos]);
        out.push_str("&quot;");
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
}
