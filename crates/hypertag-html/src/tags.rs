//! The element factory catalog.
//!
//! Descriptions follow the MDN element reference
//! (<https://developer.mozilla.org/en-US/docs/Web/HTML/Reference/Elements>).

use hypertag::Element;

/// The `<!DOCTYPE html>` declaration. Render it ahead of the `html()`
/// root, typically inside a fragment.
pub fn doctype() -> Element {
    Element::new_void("!DOCTYPE html")
}

/// The root element of an HTML document.
pub fn html() -> Element {
    Element::new("html")
}

/// Machine-readable information about the document.
pub fn head() -> Element {
    Element::new("head")
}

/// The document's title, shown in the browser's title bar or tab.
pub fn title() -> Element {
    Element::new("title")
}

/// A relationship between the document and an external resource. Void.
pub fn link() -> Element {
    Element::new_void("link")
}

/// Metadata not representable by other meta-related elements. Void.
pub fn meta() -> Element {
    Element::new_void("meta")
}

/// Style information for the document.
pub fn style() -> Element {
    Element::new("style")
}

/// Base URL and default browsing context for relative URLs. Void.
pub fn base() -> Element {
    Element::new_void("base")
}

/// The content of the document.
pub fn body() -> Element {
    Element::new("body")
}

/// A level 1 section heading.
pub fn h1() -> Element {
    Element::new("h1")
}

/// A level 2 section heading.
pub fn h2() -> Element {
    Element::new("h2")
}

/// A level 3 section heading.
pub fn h3() -> Element {
    Element::new("h3")
}

/// A level 4 section heading.
pub fn h4() -> Element {
    Element::new("h4")
}

/// A level 5 section heading.
pub fn h5() -> Element {
    Element::new("h5")
}

/// A level 6 section heading.
pub fn h6() -> Element {
    Element::new("h6")
}

/// A group of h1–h6 elements forming a multi-level heading.
pub fn hgroup() -> Element {
    Element::new("hgroup")
}

/// Introductory content or navigational aids.
pub fn header() -> Element {
    Element::new("header")
}

/// A footer for its nearest sectioning content.
pub fn footer() -> Element {
    Element::new("footer")
}

/// A section of navigation links.
pub fn nav() -> Element {
    Element::new("nav")
}

/// The dominant content of the document.
pub fn main() -> Element {
    Element::new("main")
}

/// A generic standalone section.
pub fn section() -> Element {
    Element::new("section")
}

/// A self-contained composition, independently distributable.
pub fn article() -> Element {
    Element::new("article")
}

/// Content only indirectly related to the main content.
pub fn aside() -> Element {
    Element::new("aside")
}

/// Contact information for a person or organization.
pub fn address() -> Element {
    Element::new("address")
}

/// A search or filtering interface.
pub fn search() -> Element {
    Element::new("search")
}

/// A thematic break between paragraph-level elements. Void.
pub fn hr() -> Element {
    Element::new_void("hr")
}

/// Preformatted text.
pub fn pre() -> Element {
    Element::new("pre")
}

/// A section quoted from another source.
pub fn blockquote() -> Element {
    Element::new("blockquote")
}

/// An ordered list.
pub fn ol() -> Element {
    Element::new("ol")
}

/// An unordered list.
pub fn ul() -> Element {
    Element::new("ul")
}

/// A list item.
pub fn li() -> Element {
    Element::new("li")
}

/// A description list.
pub fn dl() -> Element {
    Element::new("dl")
}

/// A term in a description list.
pub fn dt() -> Element {
    Element::new("dt")
}

/// The description or value for the preceding term.
pub fn dd() -> Element {
    Element::new("dd")
}

/// Self-contained content with an optional caption.
pub fn figure() -> Element {
    Element::new("figure")
}

/// A caption for the contents of its parent figure.
pub fn figcaption() -> Element {
    Element::new("figcaption")
}

/// A set of commands or options.
pub fn menu() -> Element {
    Element::new("menu")
}

/// The generic container for flow content.
pub fn div() -> Element {
    Element::new("div")
}

/// A paragraph.
pub fn p() -> Element {
    Element::new("p")
}

/// A hyperlink to anything a URL can address.
pub fn a() -> Element {
    Element::new("a")
}

/// Emphasized text.
pub fn em() -> Element {
    Element::new("em")
}

/// Text of strong importance.
pub fn strong() -> Element {
    Element::new("strong")
}

/// Side-comments and small print.
pub fn small() -> Element {
    Element::new("small")
}

/// Text rendered with a strikethrough.
pub fn s() -> Element {
    Element::new("s")
}

/// The title of a creative work.
pub fn cite() -> Element {
    Element::new("cite")
}

/// A short inline quotation.
pub fn q() -> Element {
    Element::new("q")
}

/// The defining instance of a term.
pub fn dfn() -> Element {
    Element::new("dfn")
}

/// An abbreviation.
pub fn abbr() -> Element {
    Element::new("abbr")
}

/// Ruby annotations for East Asian typography.
pub fn ruby() -> Element {
    Element::new("ruby")
}

/// Ruby text for ruby annotations.
pub fn rt() -> Element {
    Element::new("rt")
}

/// Fallback parentheses for browsers without ruby support.
pub fn rp() -> Element {
    Element::new("rp")
}

/// Content linked with a machine-readable translation.
pub fn data() -> Element {
    Element::new("data")
}

/// A specific period in time.
pub fn time() -> Element {
    Element::new("time")
}

/// Inline computer code.
pub fn code() -> Element {
    Element::new("code")
}

/// A variable in a mathematical or programming context.
pub fn var() -> Element {
    Element::new("var")
}

/// Sample output from a computer program.
pub fn samp() -> Element {
    Element::new("samp")
}

/// Text the user should enter.
pub fn kbd() -> Element {
    Element::new("kbd")
}

/// Inline subscript text.
pub fn sub() -> Element {
    Element::new("sub")
}

/// Inline superscript text.
pub fn sup() -> Element {
    Element::new("sup")
}

/// Text in an alternate voice or mood.
pub fn i() -> Element {
    Element::new("i")
}

/// Text drawn attention to without conveying importance.
pub fn b() -> Element {
    Element::new("b")
}

/// Text with an unarticulated annotation.
pub fn u() -> Element {
    Element::new("u")
}

/// Text highlighted for reference.
pub fn mark() -> Element {
    Element::new("mark")
}

/// Text isolated for bidirectional formatting.
pub fn bdi() -> Element {
    Element::new("bdi")
}

/// An override of the current text direction.
pub fn bdo() -> Element {
    Element::new("bdo")
}

/// The generic inline container for phrasing content.
pub fn span() -> Element {
    Element::new("span")
}

/// A line break. Void.
pub fn br() -> Element {
    Element::new_void("br")
}

/// A word break opportunity. Void.
pub fn wbr() -> Element {
    Element::new_void("wbr")
}

/// A range of text deleted from the document.
pub fn del() -> Element {
    Element::new("del")
}

/// A range of text added to the document.
pub fn ins() -> Element {
    Element::new("ins")
}

/// An embedded image. Void.
pub fn img() -> Element {
    Element::new_void("img")
}

/// A nested browsing context embedding another HTML page.
pub fn iframe() -> Element {
    Element::new("iframe")
}

/// External content embedded at this point in the document. Void.
pub fn embed() -> Element {
    Element::new_void("embed")
}

/// An external resource handled as image, browsing context or plugin.
pub fn object() -> Element {
    Element::new("object")
}

/// Alternative image sources for different display scenarios.
pub fn picture() -> Element {
    Element::new("picture")
}

/// A media resource for picture, audio or video. Void.
pub fn source() -> Element {
    Element::new_void("source")
}

/// A timed text track for media elements. Void.
pub fn track() -> Element {
    Element::new_void("track")
}

/// An embedded video player.
pub fn video() -> Element {
    Element::new("video")
}

/// Embedded sound content.
pub fn audio() -> Element {
    Element::new("audio")
}

/// A graphics canvas for the canvas scripting or WebGL APIs.
pub fn canvas() -> Element {
    Element::new("canvas")
}

/// An image map defined together with area elements.
pub fn map() -> Element {
    Element::new("map")
}

/// A clickable area inside an image map. Void.
pub fn area() -> Element {
    Element::new_void("area")
}

/// An SVG container defining a new coordinate system and viewport.
pub fn svg() -> Element {
    Element::new("svg")
}

/// The top-level element of a MathML expression.
pub fn math() -> Element {
    Element::new("math")
}

/// Embedded executable code or data, typically JavaScript.
pub fn script() -> Element {
    Element::new("script")
}

/// Content shown when scripting is unsupported or disabled.
pub fn noscript() -> Element {
    Element::new("noscript")
}

/// A table of rows and columns.
pub fn table() -> Element {
    Element::new("table")
}

/// The caption of a table.
pub fn caption() -> Element {
    Element::new("caption")
}

/// A group of columns within a table.
pub fn colgroup() -> Element {
    Element::new("colgroup")
}

/// One or more columns in a column group. Void.
pub fn col() -> Element {
    Element::new_void("col")
}

/// The header rows of a table.
pub fn thead() -> Element {
    Element::new("thead")
}

/// The body rows of a table.
pub fn tbody() -> Element {
    Element::new("tbody")
}

/// The footer rows of a table.
pub fn tfoot() -> Element {
    Element::new("tfoot")
}

/// A row of table cells.
pub fn tr() -> Element {
    Element::new("tr")
}

/// A header cell in a table row.
pub fn th() -> Element {
    Element::new("th")
}

/// A data cell in a table row.
pub fn td() -> Element {
    Element::new("td")
}

/// A document section with interactive controls for submitting data.
pub fn form() -> Element {
    Element::new("form")
}

/// A group of controls and labels within a form.
pub fn fieldset() -> Element {
    Element::new("fieldset")
}

/// A caption for the content of its parent fieldset.
pub fn legend() -> Element {
    Element::new("legend")
}

/// A caption for an item in a user interface.
pub fn label() -> Element {
    Element::new("label")
}

/// An interactive form control for accepting user data. Void.
pub fn input() -> Element {
    Element::new_void("input")
}

/// An interactive button.
pub fn button() -> Element {
    Element::new("button")
}

/// A control providing a menu of options.
pub fn select() -> Element {
    Element::new("select")
}

/// Permissible or recommended options for other controls.
pub fn datalist() -> Element {
    Element::new("datalist")
}

/// A grouping of options within a select element.
pub fn optgroup() -> Element {
    Element::new("optgroup")
}

/// An item in a select, optgroup or datalist.
pub fn option() -> Element {
    Element::new("option")
}

/// A multi-line plain-text editing control.
pub fn textarea() -> Element {
    Element::new("textarea")
}

/// A container for the result of a calculation or user action.
pub fn output() -> Element {
    Element::new("output")
}

/// A progress indicator for a task.
pub fn progress() -> Element {
    Element::new("progress")
}

/// A scalar value within a known range.
pub fn meter() -> Element {
    Element::new("meter")
}

/// A disclosure widget toggled open and closed.
pub fn details() -> Element {
    Element::new("details")
}

/// The summary or label of a details element.
pub fn summary() -> Element {
    Element::new("summary")
}

/// A dialog box or other interactive component.
pub fn dialog() -> Element {
    Element::new("dialog")
}

/// A placeholder inside a web component.
pub fn slot() -> Element {
    Element::new("slot")
}

/// HTML that is not rendered on load but can be instantiated later.
pub fn template() -> Element {
    Element::new("template")
}

/// A nested browsing context with stronger privacy isolation than iframe.
pub fn fencedframe() -> Element {
    Element::new("fencedframe")
}

/// The content of the currently selected option in a closed select.
pub fn selectedcontent() -> Element {
    Element::new("selectedcontent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(el: Element) -> String {
        el.render_to_string().expect("render failed")
    }

    #[test]
    fn test_container_factories() {
        assert_eq!(html(div()), "<div></div>");
        assert_eq!(html(p().child("text")), "<p>text</p>");
        assert_eq!(html(h1().child("Title")), "<h1>Title</h1>");
        assert_eq!(html(var().child("x")), "<var>x</var>");
    }

    #[test]
    fn test_void_factories() {
        assert_eq!(html(br()), "<br>");
        assert_eq!(html(hr()), "<hr>");
        assert_eq!(html(img().attr("src", "a.png")), r#"<img src="a.png">"#);
        assert_eq!(
            html(input().attr("type", "text").attr("required", true)),
            r#"<input type="text" required>"#
        );
        assert_eq!(html(meta().attr("charset", "utf-8")), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_doctype() {
        assert_eq!(html(doctype()), "<!DOCTYPE html>");
    }

    #[test]
    fn test_table_structure() {
        let t = table()
            .child(thead().child(tr().child(th().child("H"))))
            .child(tbody().child(tr().child(td().child("D"))));
        assert_eq!(
            html(t),
            "<table><thead><tr><th>H</th></tr></thead>\
             <tbody><tr><td>D</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_form_controls() {
        let f = form()
            .attr("method", "post")
            .child(label().attr("for", "name").child("Name"))
            .child(input().attr("id", "name").attr("name", "name"));
        assert_eq!(
            html(f),
            r#"<form method="post"><label for="name">Name</label><input id="name" name="name"></form>"#
        );
    }
}
