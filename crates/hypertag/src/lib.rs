//! Composable HTML node trees with a buffered, escaping serializer.
//!
//! This crate is the core engine: a sealed [`Node`] model (element, escaped
//! text, raw markup), context-aware escaping, an ordered attribute builder
//! and a render engine that serializes a whole subtree into a pooled
//! scratch buffer before a single write reaches the destination.
//!
//! Trees are built bottom-up by value and are immutable afterwards, so one
//! tree renders concurrently from any number of threads.
//!
//! Tag factories (`div()`, `br()`, ...) live in the `hypertag-html` crate;
//! htmx attribute constants live in `hypertag-htmx`.
//!
//! # Example
//!
//! ```
//! use hypertag::{Element, attrs, each, render};
//!
//! let page = Element::new("ul")
//!     .attrs(attrs! { "class" => "fruit" })
//!     .child(each(["Apple", "Banana"], |name| {
//!         Element::new("li").child(name).into()
//!     }));
//!
//! let mut out = Vec::new();
//! render(&mut out, &page.into())?;
//! assert_eq!(
//!     out,
//!     br#"<ul class="fruit"><li>Apple</li><li>Banana</li></ul>"#
//! );
//! # Ok::<(), hypertag::RenderError>(())
//! ```

mod attrs;
mod error;
mod escape;
mod helpers;
mod node;
mod render;

pub use attrs::{AttrValue, Attribute};
pub use error::RenderError;
pub use escape::{escape_attr, escape_text};
pub use helpers::{each, either, repeat, when};
pub use node::{Element, Node, fragment, raw, text};
pub use render::render;
