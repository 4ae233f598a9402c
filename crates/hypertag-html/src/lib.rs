//! HTML5 element factories for `hypertag` node trees.
//!
//! One factory per element, returning a bare [`Element`] ready for the
//! core builder methods. Container elements accept attributes and
//! children; void elements (`br()`, `img()`, ...) are self-closing and
//! take attributes only.
//!
//! # Example
//!
//! ```
//! use hypertag::attrs;
//! use hypertag_html::{body, div, doctype, fragment, h1, head, html, p, title};
//!
//! let page = fragment()
//!     .child(doctype())
//!     .child(
//!         html()
//!             .attrs(attrs! { "lang" => "en" })
//!             .child(head().child(title().child("Hello")))
//!             .child(body().child(div().child(h1().child("Hi")).child(p().child("There")))),
//!     );
//!
//! assert_eq!(
//!     page.render_to_string().unwrap(),
//!     "<!DOCTYPE html><html lang=\"en\"><head><title>Hello</title></head>\
//!      <body><div><h1>Hi</h1><p>There</p></div></body></html>"
//! );
//! ```

mod tags;

pub use hypertag::{Element, Node, fragment, raw, text};
pub use tags::*;
