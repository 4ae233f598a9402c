//! The render engine: depth-first, pre-order serialization of a node tree.
//!
//! A top-level render checks a scratch `String` out of a process-wide pool,
//! serializes the whole subtree into it, then writes the accumulated bytes
//! to the destination in a single `write_all`. One render call costs one
//! write syscall on the destination, which matters when the sink is a
//! socket. The buffer goes back to the pool unconditionally, before any
//! error propagates.
//!
//! Failure short-circuits: the first malformed attribute aborts the render
//! before the final copy, so an erroring render delivers zero bytes.

use std::io::Write;
use std::sync::{LazyLock, Mutex};

use crate::attrs::{AttrValue, Attribute};
use crate::error::RenderError;
use crate::escape::{push_escaped_attr, push_escaped_text};
use crate::node::{Element, Node};

/// Pre-allocated capacity of pooled scratch buffers.
const BUF_CAPACITY: usize = 1024;

/// Idle buffers kept in the pool. Checkouts past this bound allocate;
/// returns past it drop the buffer.
const POOL_LIMIT: usize = 64;

/// Process-wide scratch buffer pool, shared by all concurrent renders.
static POOL: LazyLock<Mutex<Vec<String>>> = LazyLock::new(|| Mutex::new(Vec::new()));

fn checkout() -> String {
    if let Ok(mut pool) = POOL.lock() {
        if let Some(buf) = pool.pop() {
            return buf;
        }
    }
    String::with_capacity(BUF_CAPACITY)
}

fn restore(mut buf: String) {
    buf.clear();
    if let Ok(mut pool) = POOL.lock() {
        if pool.len() < POOL_LIMIT {
            pool.push(buf);
        }
    }
}

/// Renders a node tree to the given destination.
///
/// Equivalent to calling [`Node::render`]; exists so writing to files,
/// HTTP response bodies or in-memory buffers reads the same way.
///
/// ```
/// use hypertag::{Element, render};
///
/// let mut out = Vec::new();
/// render(&mut out, &Element::new("div").child("Hello").into())?;
/// assert_eq!(out, b"<div>Hello</div>");
/// # Ok::<(), hypertag::RenderError>(())
/// ```
pub fn render<W: Write>(w: &mut W, node: &Node) -> Result<(), RenderError> {
    let mut buf = checkout();
    let result = render_node_buf(node, &mut buf)
        .and_then(|()| w.write_all(buf.as_bytes()).map_err(RenderError::from));
    restore(buf);
    result
}

pub(crate) fn render_element<W: Write>(w: &mut W, el: &Element) -> Result<(), RenderError> {
    let mut buf = checkout();
    let result = render_element_buf(el, &mut buf)
        .and_then(|()| w.write_all(buf.as_bytes()).map_err(RenderError::from));
    restore(buf);
    result
}

pub(crate) fn render_to_string(node: &Node) -> Result<String, RenderError> {
    let mut out = String::new();
    render_node_buf(node, &mut out)?;
    Ok(out)
}

pub(crate) fn render_element_to_string(el: &Element) -> Result<String, RenderError> {
    let mut out = String::new();
    render_element_buf(el, &mut out)?;
    Ok(out)
}

fn render_node_buf(node: &Node, buf: &mut String) -> Result<(), RenderError> {
    match node {
        Node::Element(el) => render_element_buf(el, buf),
        Node::Text(content) => {
            push_escaped_text(buf, content);
            Ok(())
        }
        Node::Raw(markup) => {
            buf.push_str(markup);
            Ok(())
        }
    }
}

fn render_element_buf(el: &Element, buf: &mut String) -> Result<(), RenderError> {
    // Empty tag: a fragment, children only.
    if el.tag.is_empty() {
        return render_children(&el.children, buf);
    }

    buf.push('<');
    // Tag names are programmer-controlled literals and are not escaped.
    buf.push_str(&el.tag);
    render_attrs(&el.attrs, buf)?;
    buf.push('>');

    // Void elements: no children, no closing tag, even if children were
    // attached.
    if el.is_void {
        return Ok(());
    }

    render_children(&el.children, buf)?;

    buf.push_str("</");
    buf.push_str(&el.tag);
    buf.push('>');
    Ok(())
}

fn render_children(children: &[Node], buf: &mut String) -> Result<(), RenderError> {
    for child in children {
        render_node_buf(child, buf)?;
    }
    Ok(())
}

fn render_attrs(attrs: &[Attribute], buf: &mut String) -> Result<(), RenderError> {
    for attr in attrs {
        let key = attr.key.trim();
        if key.is_empty() {
            return Err(RenderError::EmptyAttrKey);
        }
        match &attr.value {
            AttrValue::Str(value) => {
                buf.push(' ');
                push_escaped_text(buf, key);
                buf.push_str("=\"");
                push_escaped_attr(buf, value);
                buf.push('"');
            }
            AttrValue::Flag(true) => {
                buf.push(' ');
                push_escaped_text(buf, key);
            }
            AttrValue::Flag(false) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{fragment, raw, text};
    use pretty_assertions::assert_eq;

    fn html(el: Element) -> String {
        el.render_to_string().expect("render failed")
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(html(Element::new("div")), "<div></div>");
    }

    #[test]
    fn test_element_with_text() {
        assert_eq!(html(Element::new("div").child("Hello")), "<div>Hello</div>");
    }

    #[test]
    fn test_nested_elements() {
        let el = Element::new("div")
            .child("Hello")
            .child(Element::new("p").child("World"));
        assert_eq!(html(el), "<div>Hello<p>World</p></div>");
    }

    #[test]
    fn test_void_element() {
        assert_eq!(html(Element::new_void("br")), "<br>");
    }

    #[test]
    fn test_void_element_drops_children() {
        let with_child = Element::new_void("br").child("X");
        assert_eq!(
            html(with_child),
            html(Element::new_void("br")),
        );
    }

    #[test]
    fn test_fragment_is_transparent() {
        let frag = fragment().child("a").child(Element::new("b").child("c"));
        let a = text("a").render_to_string().expect("render failed");
        let b = html(Element::new("b").child("c"));
        assert_eq!(html(frag.clone()), format!("{a}{b}"));
        assert_eq!(html(frag), "a<b>c</b>");
    }

    #[test]
    fn test_string_attribute() {
        let el = Element::new("div").attr("class", "container");
        assert_eq!(html(el), r#"<div class="container"></div>"#);
    }

    #[test]
    fn test_flag_attributes() {
        let el = Element::new("div").attr("contenteditable", true).attr("hidden", false);
        assert_eq!(html(el), "<div contenteditable></div>");
        let el = Element::new_void("input").attr("disabled", true).attr("hidden", false);
        assert_eq!(html(el), "<input disabled>");
    }

    #[test]
    fn test_attribute_value_escaping() {
        let el = Element::new("div").attr("title", r#"say "hi" & <go>"#);
        // Only quotes are escaped inside double-quoted values.
        assert_eq!(html(el), r#"<div title="say &quot;hi&quot; & <go>"></div>"#);
    }

    #[test]
    fn test_attribute_key_escaping() {
        let el = Element::new("div").attr("data-<x>", "1");
        assert_eq!(html(el), r#"<div data-&lt;x&gt;="1"></div>"#);
    }

    #[test]
    fn test_duplicate_keys_render_twice() {
        let el = Element::new("div").attr("class", "a").attr("class", "b");
        assert_eq!(html(el), r#"<div class="a" class="b"></div>"#);
    }

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        assert_eq!(
            html(Element::new("div").child("<script>")),
            "<div>&lt;script&gt;</div>"
        );
        assert_eq!(
            html(Element::new("div").child(raw("<script>"))),
            "<div><script></div>"
        );
    }

    #[test]
    fn test_empty_attr_key_fails() {
        for key in ["", "   ", "\t\n"] {
            let el = Element::new("div").attr(key.to_owned(), "x");
            let err = el.render_to_string().expect_err("blank key must fail");
            assert!(matches!(err, RenderError::EmptyAttrKey));
        }
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let el = Element::new("div")
            .child(Element::new("p").child("partial"))
            .child(Element::new("span").attr(" ", "boom"));
        let mut out = Vec::new();
        assert!(el.render(&mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_key_trimmed_before_render() {
        let el = Element::new("div").attr("  class  ".to_owned(), "x");
        assert_eq!(html(el), r#"<div class="x"></div>"#);
    }

    struct FailWriter;

    impl Write for FailWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_surfaced() {
        let err = Element::new("div")
            .child("x")
            .render(&mut FailWriter)
            .expect_err("writer always fails");
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_complex_document() {
        let page = Element::new("html")
            .attr("lang", "en")
            .child(Element::new("head").child(Element::new("title").child("Test Page")))
            .child(
                Element::new("body").child(
                    Element::new("div")
                        .attr("class", "container")
                        .child(Element::new("h1").child("Welcome"))
                        .child(Element::new("p").child("This is a test."))
                        .child(
                            Element::new("ul")
                                .child(Element::new("li").child("Item 1"))
                                .child(Element::new("li").child("Item 2")),
                        ),
                ),
            );
        assert_eq!(
            html(page),
            concat!(
                r#"<html lang="en"><head><title>Test Page</title></head>"#,
                r#"<body><div class="container"><h1>Welcome</h1>"#,
                "<p>This is a test.</p><ul><li>Item 1</li><li>Item 2</li></ul>",
                "</div></body></html>",
            )
        );
    }

    #[test]
    fn test_render_free_function_matches_node_render() {
        let node: Node = Element::new("p").child("hi").into();
        let mut via_fn = Vec::new();
        render(&mut via_fn, &node).expect("render failed");
        let mut via_method = Vec::new();
        node.render(&mut via_method).expect("render failed");
        assert_eq!(via_fn, via_method);
        assert_eq!(via_fn, b"<p>hi</p>");
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let el = Element::new("div").attr("id", "x").child("same");
        assert_eq!(html(el.clone()), html(el));
    }

    #[test]
    fn test_concurrent_renders_are_identical() {
        let tree: Node = Element::new("section")
            .attr("id", "news")
            .children((0..50).map(|i| Element::new("article").child(format!("item {i}"))))
            .into();
        let expected = tree.render_to_string().expect("render failed");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let mut out = Vec::new();
                        tree.render(&mut out).expect("render failed");
                        out
                    })
                })
                .collect();
            for handle in handles {
                let out = handle.join().expect("thread panicked");
                assert_eq!(out, expected.as_bytes());
            }
        });
    }

    #[test]
    fn test_pool_buffer_reuse_does_not_leak_content() {
        // Back-to-back renders on one thread reuse the pooled buffer; the
        // second render must not see residue from the first.
        let mut first = Vec::new();
        render(&mut first, &Element::new("p").child("aaaa").into()).expect("render failed");
        let mut second = Vec::new();
        render(&mut second, &Element::new("i").child("b").into()).expect("render failed");
        assert_eq!(second, b"<i>b</i>");
    }
}
