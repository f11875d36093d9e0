use std::fmt::Write as _;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A fragment of markup. All text and attribute values pass through
/// escaping; there is no raw-string constructor, so untrusted input cannot
/// reach the output unescaped.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Boolean attribute such as `disabled`, emitted without a value.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, String::new()));
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
            }
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl Node {
    fn write(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write(&mut out);
    }
    out
}

pub fn render_one(node: impl Into<Node>) -> String {
    render(&[node.into()])
}

pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{Element, render_one};

    #[test]
    fn text_is_escaped() {
        let markup = render_one(
            Element::new("p").text(r#"<script>alert("hi")</script> & more"#),
        );
        assert_eq!(
            markup,
            r#"<p>&lt;script&gt;alert("hi")&lt;/script&gt; &amp; more</p>"#
        );
    }

    #[test]
    fn attributes_escape_quotes() {
        let markup = render_one(Element::new("div").attr("title", r#"a "quoted" value"#));
        assert_eq!(markup, r#"<div title="a &quot;quoted&quot; value"></div>"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let markup = render_one(Element::new("img").attr("src", "/assets/a.jpg"));
        assert_eq!(markup, r#"<img src="/assets/a.jpg">"#);
    }

    #[test]
    fn boolean_attributes_render_bare() {
        let markup = render_one(Element::new("button").flag("disabled", true).text("Prev"));
        assert_eq!(markup, "<button disabled>Prev</button>");
        let markup = render_one(Element::new("button").flag("disabled", false).text("Prev"));
        assert_eq!(markup, "<button>Prev</button>");
    }

    #[test]
    fn nested_children_render_in_order() {
        let markup = render_one(
            Element::new("ul")
                .child(Element::new("li").text("one"))
                .child(Element::new("li").text("two")),
        );
        assert_eq!(markup, "<ul><li>one</li><li>two</li></ul>");
    }
}
