//! htmx attribute, swap-value and event name constants.
//!
//! Only names: using the constants prevents typos and keeps attribute
//! keys findable by the compiler. To use htmx you must still include its
//! JavaScript runtime in your page; see <https://htmx.org> and [`script`].
//!
//! # Example
//!
//! ```
//! use hypertag_htmx::{attr, swap};
//! use hypertag_html::button;
//!
//! let b = button()
//!     .attr(attr::GET, "/clicked")
//!     .attr(attr::SWAP, swap::OUTER_HTML)
//!     .child("Click me");
//!
//! assert_eq!(
//!     b.render_to_string().unwrap(),
//!     r#"<button hx-get="/clicked" hx-swap="outerHTML">Click me</button>"#
//! );
//! ```

use hypertag::Element;

/// htmx attribute names.
pub mod attr {
    /// Issues a GET request to the given URL.
    pub const GET: &str = "hx-get";
    /// Issues a POST request to the given URL.
    pub const POST: &str = "hx-post";
    /// Issues a PUT request to the given URL.
    pub const PUT: &str = "hx-put";
    /// Issues a PATCH request to the given URL.
    pub const PATCH: &str = "hx-patch";
    /// Issues a DELETE request to the given URL.
    pub const DELETE: &str = "hx-delete";
    /// Pushes the URL into the browser history.
    pub const PUSH_URL: &str = "hx-push-url";
    /// Selects a subset of the response to swap in.
    pub const SELECT: &str = "hx-select";
    /// Selects out-of-band content from the response.
    pub const SELECT_OOB: &str = "hx-select-oob";
    /// Controls how the response is swapped in (see [`crate::swap`]).
    pub const SWAP: &str = "hx-swap";
    /// Marks content for out-of-band swapping.
    pub const SWAP_OOB: &str = "hx-swap-oob";
    /// The target element to swap the response into.
    pub const TARGET: &str = "hx-target";
    /// The event that triggers the request.
    pub const TRIGGER: &str = "hx-trigger";
    /// Extra values to submit with the request.
    pub const VALS: &str = "hx-vals";
    /// Progressively enhances anchors and forms with AJAX.
    pub const BOOST: &str = "hx-boost";
    /// Shows a confirmation dialog before the request.
    pub const CONFIRM: &str = "hx-confirm";
    /// Disables htmx processing for this element.
    pub const DISABLE: &str = "hx-disable";
    /// Elements to disable while the request is in flight.
    pub const DISABLED_ELT: &str = "hx-disabled-elt";
    /// Controls attribute inheritance from ancestors (deny list).
    pub const DISINHERIT: &str = "hx-disinherit";
    /// The encoding of the request.
    pub const ENCODING: &str = "hx-encoding";
    /// Enables htmx extensions for this element.
    pub const EXT: &str = "hx-ext";
    /// Extra headers to submit with the request.
    pub const HEADERS: &str = "hx-headers";
    /// Controls history snapshotting.
    pub const HISTORY: &str = "hx-history";
    /// The element snapshotted into the history cache.
    pub const HISTORY_ELT: &str = "hx-history-elt";
    /// Additional elements whose values are included in the request.
    pub const INCLUDE: &str = "hx-include";
    /// The element shown while the request is in flight.
    pub const INDICATOR: &str = "hx-indicator";
    /// Controls attribute inheritance from ancestors (allow list).
    pub const INHERIT: &str = "hx-inherit";
    /// Filters the parameters submitted with the request.
    pub const PARAMS: &str = "hx-params";
    /// Keeps the element unchanged across swaps.
    pub const PRESERVE: &str = "hx-preserve";
    /// Prompts the user for a value sent with the request.
    pub const PROMPT: &str = "hx-prompt";
    /// Replaces the current URL in the browser history.
    pub const REPLACE_URL: &str = "hx-replace-url";
    /// Configures aspects of the request.
    pub const REQUEST: &str = "hx-request";
    /// Synchronizes requests between elements.
    pub const SYNC: &str = "hx-sync";
    /// Forces validation before the request.
    pub const VALIDATE: &str = "hx-validate";
    /// Extra values computed at request time (prefer `VALS`).
    pub const VARS: &str = "hx-vars";

    /// The `hx-on` attribute name for an inline event handler.
    ///
    /// ```
    /// use hypertag_htmx::attr;
    ///
    /// assert_eq!(attr::hx_on("click"), "hx-on:click");
    /// assert_eq!(attr::hx_on("htmx:before-swap"), "hx-on:htmx:before-swap");
    /// ```
    #[must_use]
    pub fn hx_on(event: &str) -> String {
        format!("hx-on:{event}")
    }
}

/// Valid values for the `hx-swap` attribute.
pub mod swap {
    /// Replace the target's inner HTML (the default).
    pub const INNER_HTML: &str = "innerHTML";
    /// Replace the entire target element.
    pub const OUTER_HTML: &str = "outerHTML";
    /// Insert before the target element.
    pub const BEFORE_BEGIN: &str = "beforebegin";
    /// Insert before the target's first child.
    pub const AFTER_BEGIN: &str = "afterbegin";
    /// Insert after the target's last child.
    pub const BEFORE_END: &str = "beforeend";
    /// Insert after the target element.
    pub const AFTER_END: &str = "afterend";
    /// Delete the target element regardless of response.
    pub const DELETE: &str = "delete";
    /// Do not swap the response in.
    pub const NONE: &str = "none";
}

/// htmx event names, usable with [`attr::hx_on`].
pub mod event {
    pub const ABORT: &str = "htmx:abort";
    pub const AFTER_ON_LOAD: &str = "htmx:after-on-load";
    pub const AFTER_PROCESS_NODE: &str = "htmx:after-process-node";
    pub const AFTER_REQUEST: &str = "htmx:after-request";
    pub const AFTER_SETTLE: &str = "htmx:after-settle";
    pub const AFTER_SWAP: &str = "htmx:after-swap";
    pub const BEFORE_CLEANUP_ELEMENT: &str = "htmx:before-cleanup-element";
    pub const BEFORE_ON_LOAD: &str = "htmx:before-on-load";
    pub const BEFORE_PROCESS_NODE: &str = "htmx:before-process-node";
    pub const BEFORE_REQUEST: &str = "htmx:before-request";
    pub const BEFORE_SEND: &str = "htmx:before-send";
    pub const BEFORE_SETTLE: &str = "htmx:before-settle";
    pub const BEFORE_SWAP: &str = "htmx:before-swap";
    pub const CONFIG_REQUEST: &str = "htmx:config-request";
    pub const CONFIRM: &str = "htmx:confirm";
    pub const HISTORY_CACHE_ERROR: &str = "htmx:history-cache-error";
    pub const HISTORY_CACHE_MISS: &str = "htmx:history-cache-miss";
    pub const HISTORY_CACHE_MISS_ERROR: &str = "htmx:history-cache-miss-error";
    pub const HISTORY_RESTORE: &str = "htmx:history-restore";
    pub const LOAD: &str = "htmx:load";
    pub const NO_SSE_SOURCE_ERROR: &str = "htmx:no-sse-source-error";
    pub const ON_LOAD_ERROR: &str = "htmx:on-load-error";
    pub const OOB_AFTER_SWAP: &str = "htmx:oob-after-swap";
    pub const OOB_BEFORE_SWAP: &str = "htmx:oob-before-swap";
    pub const OOB_ERROR_NO_TARGET: &str = "htmx:oob-error-no-target";
    pub const PROMPT: &str = "htmx:prompt";
    pub const RESPONSE_ERROR: &str = "htmx:response-error";
    pub const SEND_ERROR: &str = "htmx:send-error";
    pub const SSE_ERROR: &str = "htmx:sse-error";
    pub const SSE_OPEN: &str = "htmx:sse-open";
    pub const SSE_MESSAGE: &str = "htmx:sse-message";
    pub const SWAP_ERROR: &str = "htmx:swap-error";
    pub const TARGET_ERROR: &str = "htmx:target-error";
    pub const TIMEOUT: &str = "htmx:timeout";
    pub const VALIDATION_VALIDATE: &str = "htmx:validation:validate";
    pub const VALIDATION_FAILED: &str = "htmx:validation:failed";
    pub const VALIDATION_HALTED: &str = "htmx:validation:halted";
    pub const XHR_ABORT: &str = "htmx:xhr:abort";
    pub const XHR_LOADEND: &str = "htmx:xhr:loadend";
    pub const XHR_LOADSTART: &str = "htmx:xhr:loadstart";
    pub const XHR_PROGRESS: &str = "htmx:xhr:progress";
}

/// The htmx WebSocket extension (`hx-ext="ws"`).
///
/// Names only, like the rest of this crate: the extension's JavaScript
/// must be included alongside the htmx runtime. See
/// <https://htmx.org/extensions/ws/>.
pub mod ws {
    /// WebSocket extension attribute names.
    pub mod attr {
        /// The WebSocket URL to connect to.
        pub const CONNECT: &str = "ws-connect";
        /// Sends the enclosing form's values over the socket.
        pub const SEND: &str = "ws-send";
    }

    /// WebSocket extension event names, usable with
    /// [`attr::hx_on`](crate::attr::hx_on).
    pub mod event {
        pub const CONNECTING: &str = "htmx:ws-connecting";
        pub const OPEN: &str = "htmx:ws-open";
        pub const CLOSE: &str = "htmx:ws-close";
        pub const ERROR: &str = "htmx:ws-error";
        pub const BEFORE_MESSAGE: &str = "htmx:ws-before-message";
        pub const AFTER_MESSAGE: &str = "htmx:ws-after-message";
        pub const CONFIG_SEND: &str = "htmx:ws-config-send";
        pub const BEFORE_SEND: &str = "htmx:ws-before-send";
        pub const AFTER_SEND: &str = "htmx:ws-after-send";
    }
}

/// A `<script>` element loading the htmx runtime from `src`.
///
/// Point it at your vendored copy or a CDN build, e.g.
/// `https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js`.
pub fn script(src: impl Into<String>) -> Element {
    hypertag_html::script().attr("src", src.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypertag_html::{button, div};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attr_constants() {
        assert_eq!(attr::GET, "hx-get");
        assert_eq!(attr::SWAP_OOB, "hx-swap-oob");
        assert_eq!(attr::DISABLED_ELT, "hx-disabled-elt");
        assert_eq!(attr::REPLACE_URL, "hx-replace-url");
    }

    #[test]
    fn test_ws_constants() {
        assert_eq!(ws::attr::CONNECT, "ws-connect");
        assert_eq!(ws::attr::SEND, "ws-send");
        assert_eq!(ws::event::CONNECTING, "htmx:ws-connecting");
        assert_eq!(ws::event::BEFORE_MESSAGE, "htmx:ws-before-message");
        assert_eq!(ws::event::AFTER_SEND, "htmx:ws-after-send");
    }

    #[test]
    fn test_ws_extension_markup() {
        let d = div()
            .attr(attr::EXT, "ws")
            .attr(ws::attr::CONNECT, "/chatroom");
        assert_eq!(
            d.render_to_string().expect("render failed"),
            r#"<div hx-ext="ws" ws-connect="/chatroom"></div>"#
        );
    }

    #[test]
    fn test_hx_on() {
        assert_eq!(attr::hx_on("click"), "hx-on:click");
        assert_eq!(attr::hx_on(event::BEFORE_SWAP), "hx-on:htmx:before-swap");
    }

    #[test]
    fn test_swap_values() {
        assert_eq!(swap::INNER_HTML, "innerHTML");
        assert_eq!(swap::BEFORE_BEGIN, "beforebegin");
        assert_eq!(swap::NONE, "none");
    }

    #[test]
    fn test_constants_compose_with_elements() {
        let b = button()
            .attr(attr::POST, "/items")
            .attr(attr::TARGET, "#list")
            .attr(attr::SWAP, swap::BEFORE_END)
            .child("Add");
        assert_eq!(
            b.render_to_string().expect("render failed"),
            r##"<button hx-post="/items" hx-target="#list" hx-swap="beforeend">Add</button>"##
        );
    }

    #[test]
    fn test_hx_on_as_attribute_key() {
        let d = div().attr(attr::hx_on("click"), "alert('hi')");
        assert_eq!(
            d.render_to_string().expect("render failed"),
            r#"<div hx-on:click="alert('hi')"></div>"#
        );
    }

    #[test]
    fn test_script_element() {
        let s = script("/static/htmx.min.js");
        assert_eq!(
            s.render_to_string().expect("render failed"),
            r#"<script src="/static/htmx.min.js"></script>"#
        );
    }
}
