//! The node model: elements, escaped text and raw markup.
//!
//! A tree is built bottom-up by value through the [`Element`] builder
//! methods and is immutable once handed off for rendering, so one tree can
//! be rendered concurrently from any number of threads.

use std::borrow::Cow;
use std::io::Write;

use crate::RenderError;
use crate::attrs::{AttrValue, Attribute, reserve_batch};

/// A renderable piece of an HTML document.
///
/// The variant set is closed: the render engine matches on the concrete
/// variant instead of going through dynamic dispatch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// An element (or, with an empty tag, a transparent fragment).
    Element(Element),
    /// Text content, HTML-escaped when rendered.
    Text(String),
    /// Markup emitted byte-for-byte with no escaping. The caller is
    /// responsible for its safety.
    Raw(String),
}

impl Node {
    /// Renders this node (and its subtree) to `w`.
    ///
    /// The subtree is serialized into a pooled scratch buffer first and
    /// reaches `w` in a single write, so a failed render delivers zero
    /// bytes to the destination.
    pub fn render<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        crate::render::render(w, self)
    }

    /// Renders this node to an owned string.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        crate::render::render_to_string(self)
    }
}

/// Creates a text node. Content is HTML-escaped at render time.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Creates a raw markup node, rendered without escaping.
pub fn raw(content: impl Into<String>) -> Node {
    Node::Raw(content.into())
}

/// Creates a fragment: an element with no tag that renders as the
/// transparent concatenation of its children.
pub fn fragment() -> Element {
    Element::new("")
}

/// An HTML element: tag name, attribute list and children.
///
/// Built in two phases: construct with [`Element::new`] (usually via a
/// `hypertag-html` factory), then chain [`attr`](Element::attr) /
/// [`attrs`](Element::attrs) / [`child`](Element::child) /
/// [`children`](Element::children). The builder takes `self` by value;
/// single-writer construction is enforced by ownership.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub(crate) tag: Cow<'static, str>,
    pub(crate) is_void: bool,
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Creates a container element with the given tag name.
    ///
    /// An empty tag produces a fragment (children render with no wrapping
    /// markup).
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Element {
            tag: tag.into(),
            is_void: false,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a void (self-closing) element: no children, no closing tag.
    pub fn new_void(tag: impl Into<Cow<'static, str>>) -> Self {
        Element {
            tag: tag.into(),
            is_void: true,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this is a void element.
    pub fn is_void(&self) -> bool {
        self.is_void
    }

    /// Appends one attribute. Keys keep insertion order; duplicates are
    /// kept and render twice.
    #[must_use]
    pub fn attr(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.attrs.push(Attribute::new(key, value));
        self
    }

    /// Appends a batch of attributes, preserving the iterator's order.
    ///
    /// Arrays of pairs and the [`attrs!`](crate::attrs!) macro give
    /// deterministic output across runs. A `HashMap` is accepted too, but
    /// its iteration order is unspecified, so don't rely on it for
    /// reproducible output.
    #[must_use]
    pub fn attrs<K, V, I>(mut self, batch: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<AttrValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = batch.into_iter();
        reserve_batch(&mut self.attrs, iter.size_hint().0);
        for (key, value) in iter {
            self.attrs.push(Attribute::new(key, value));
        }
        self
    }

    /// Appends one child. Anything convertible into a [`Node`] is accepted:
    /// nodes, elements, strings, numbers, `bool`, `char`, and `Option`s of
    /// those.
    ///
    /// Children attached to a void element are dropped at render time.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a sequence of children in order.
    #[must_use]
    pub fn children<N, I>(mut self, children: I) -> Self
    where
        N: Into<Node>,
        I: IntoIterator<Item = N>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Renders this element to `w`. Equivalent to [`Node::render`].
    pub fn render<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        crate::render::render_element(w, self)
    }

    /// Renders this element to an owned string.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        crate::render::render_element_to_string(self)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(s: Cow<'_, str>) -> Self {
        Node::Text(s.into_owned())
    }
}

/// `None` is deliberately not filtered out: it coerces to the visible
/// placeholder `"None"` so a missing value shows up in the output during
/// development instead of disappearing.
impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Node::Text("None".to_owned()),
        }
    }
}

macro_rules! node_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Text(value.to_string())
                }
            }
        )+
    };
}

node_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
