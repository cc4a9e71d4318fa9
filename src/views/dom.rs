// Retained element tree for cards.
// Cards are built off-screen into this tree, owned by the grid, and painted by egui
// every frame. Class names and attributes mirror what a web page would carry.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Article,
    Div,
    Img,
    Button,
    H3,
    Span,
    P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub class: String,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub hidden: bool,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag, class: impl Into<String>) -> Self {
        Self {
            tag,
            class: class.into(),
            attrs: BTreeMap::new(),
            text: String::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    /// Class-list membership, like `classList.contains`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    /// First element (self included, depth-first) carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }

    pub fn find_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(class))
    }

    /// Number of elements (self included) carrying `class`.
    #[cfg(test)]
    pub fn count(&self, class: &str) -> usize {
        let own = usize::from(self.has_class(class));
        own + self.children.iter().map(|c| c.count(class)).sum::<usize>()
    }

    /// Concatenated text of the subtree, like `textContent`.
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new(Tag::Article, "card");
        let mut body = Element::new(Tag::Div, "card__body");
        body.append(Element::new(Tag::H3, "card__title").with_text("Hola"));
        body.append(Element::new(Tag::Span, "card__tag extra").with_text(" mundo"));
        root.append(body);
        root.append(Element::new(Tag::Span, "card__tag"));
        root
    }

    #[test]
    fn finds_by_class_token() {
        let root = sample();
        assert_eq!(root.find("card__title").unwrap().text, "Hola");
        assert!(root.find("extra").is_some());
        assert!(root.find("card__tag ex").is_none());
        assert_eq!(root.count("card__tag"), 2);
    }

    #[test]
    fn text_content_walks_depth_first() {
        assert_eq!(sample().text_content(), "Hola mundo");
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut root = sample();
        root.find_mut("card__title")
            .unwrap()
            .set_attr("data-id", "1");
        assert_eq!(root.find("card__title").unwrap().attr("data-id"), Some("1"));
    }
}
