//! Attribute list building.
//!
//! Attributes live in an ordered list on the element, in insertion order.
//! Duplicate keys are allowed and simply render twice. Values are a closed
//! string-or-flag union; anything else is unrepresentable, so the only
//! attribute error left to catch at render time is a blank key.

use std::borrow::Cow;

/// An attribute value: a quoted string or a boolean flag.
///
/// - `Str` renders as `key="escaped-value"`.
/// - `Flag(true)` renders as the bare key; `Flag(false)` renders nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrValue {
    /// String value, rendered double-quoted with `"` escaped.
    Str(String),
    /// Boolean flag, rendered as a valueless key when true.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(s: Cow<'_, str>) -> Self {
        AttrValue::Str(s.into_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        AttrValue::Flag(flag)
    }
}

/// A single key/value attribute pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name. Validated (trimmed, non-empty) at render time.
    pub key: Cow<'static, str>,
    /// Attribute value.
    pub value: AttrValue,
}

impl Attribute {
    /// Creates an attribute pair.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        Attribute {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Grow `attrs` so a batch of `additional` entries fits without another
/// reallocation, rounding the capacity up to the next power of two.
///
/// An element's attributes may be appended in several batches during
/// construction; power-of-two sizing amortizes the copies across those
/// calls.
pub(crate) fn reserve_batch(attrs: &mut Vec<Attribute>, additional: usize) {
    let required = attrs.len() + additional;
    if required > attrs.capacity() {
        let target = required.next_power_of_two();
        attrs.reserve_exact(target - attrs.len());
    }
}

/// Builds an ordered attribute batch from `key => value` pairs.
///
/// This is the deterministic construction path: entries keep the order they
/// are written in, across runs. Values may mix strings and flags.
///
/// ```
/// use hypertag::{Element, attrs};
///
/// let el = Element::new("div").attrs(attrs! { "class" => "card", "hidden" => true });
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::core::iter::empty::<(&'static str, $crate::AttrValue)>()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$(($key, $crate::AttrValue::from($value))),+]
    };
}
