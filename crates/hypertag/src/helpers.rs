//! Composition helpers: conditionals and iteration over the node contract.
//!
//! These are pure functions producing a [`Node`], so they compose anywhere
//! a node is expected.

use crate::node::{Node, fragment};

/// Returns `yes` when the condition holds, otherwise `no`.
///
/// Inline ternary select for builder-style expressions:
///
/// ```
/// use hypertag::{Element, either};
///
/// let active = true;
/// let el = Element::new("div").attr("class", either(active, "active", "inactive"));
/// ```
pub fn either<T>(condition: bool, yes: T, no: T) -> T {
    if condition { yes } else { no }
}

/// Returns the node when the condition holds, otherwise an empty fragment
/// that renders to nothing.
pub fn when(condition: bool, node: impl Into<Node>) -> Node {
    if condition {
        node.into()
    } else {
        fragment().into()
    }
}

/// Builds a fragment by calling `f` exactly `n` times.
///
/// Each invocation constructs an independent node; nothing is cached or
/// shared between repetitions.
pub fn repeat(n: usize, mut f: impl FnMut() -> Node) -> Node {
    let mut result = fragment();
    for _ in 0..n {
        result.children.push(f());
    }
    result.into()
}

/// Builds a fragment by mapping every item of a sequence through `f`.
///
/// ```
/// use hypertag::{Element, each};
///
/// let items = ["Apple", "Banana", "Cherry"];
/// let list = Element::new("ul")
///     .child(each(items, |item| Element::new("li").child(item).into()));
/// ```
pub fn each<T, I, F>(items: I, mut f: F) -> Node
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Node,
{
    let mut result = fragment();
    for item in items {
        result.children.push(f(item));
    }
    result.into()
}
