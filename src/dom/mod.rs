/*
    A small owned document tree that rendered diagrams are mounted into
*/

use std::fmt::Display;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    // Markup that is already serialised, e.g. an exported SVG
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn append_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    #[cfg(test)]
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None
        })
    }

    /// First descendant (depth first, self included) whose attribute `name`
    /// equals `value`.
    pub fn find_by_attr_mut(&mut self, name: &str, value: &str) -> Option<&mut Element> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_by_attr_mut(name, value),
            _ => None
        })
    }

    #[cfg(test)]
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.child_elements().find_map(|element| element.find_by_attr(name, value))
    }

    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    // Concatenated text of the subtree, raw markup excluded
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        self.children.iter().map(|child| match child {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
            Node::Raw(_) => String::new()
        }).collect()
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let attributes = self.attributes.iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape(value)))
            .join("");
        write!(f, "<{}{}>", self.tag, attributes)?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Element(element) => write!(f, "{}", element),
            Node::Text(text) => write!(f, "{}", escape(text)),
            Node::Raw(markup) => write!(f, "{}", markup)
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c)
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::new("main")
            .with_child(Element::new("div").with_attr("data-section", "expressions"))
            .with_child(Element::new("section")
                .with_child(Element::new("div").with_attr("data-section", "statements")))
    }

    #[test]
    fn find_nested_by_attribute() {
        let mut root = tree();

        let container = root.find_by_attr_mut("data-section", "statements").unwrap();
        container.append_element(Element::new("p").with_text("found"));

        assert_eq!(root.text_content(), "found");
        assert!(root.find_by_attr("data-section", "declarations").is_none());
    }

    #[test]
    fn serialise_with_escaping() {
        let element = Element::new("h3")
            .with_attr("title", "a \"quoted\" <name>")
            .with_text("x && y");

        assert_eq!(
            element.to_string(),
            "<h3 title=\"a &quot;quoted&quot; &lt;name&gt;\">x &amp;&amp; y</h3>"
        );
    }

    #[test]
    fn raw_markup_is_not_escaped() {
        let mut element = Element::new("div");
        element.append(Node::Raw("<svg></svg>".to_string()));

        assert_eq!(element.to_string(), "<div><svg></svg></div>");
        assert_eq!(element.text_content(), "");
    }

    #[test]
    fn attributes_are_replaced_in_place() {
        let mut element = Element::new("div").with_attr("class", "rule").with_attr("id", "x");
        element.set_attr("class", "rule broken");

        assert_eq!(element.attributes[0], ("class".to_string(), "rule broken".to_string()));
        assert!(element.has_class("broken"));
        assert!(!element.has_class("rul"));
    }
}
