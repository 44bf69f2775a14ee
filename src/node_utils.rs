use crate::parser::NodeRef;
use html5ever::{LocalName, QualName};
use kuchikikiki::{Attributes, ElementData, NodeData};
use std::cell::RefCell;

/// DOM-navigation and element-manipulation helpers implemented on [`NodeRef`].
///
/// This trait is automatically in scope when you import from
/// [`crate::parser`] or [`crate::shared_utils`].
pub trait NodeExt {
    /// Return the local tag name of this node if it is an element (e.g.
    /// `"div"`, `"a"`), or `None` for text / comment / document nodes.
    fn element_name(&self) -> Option<&str>;

    /// Look up an attribute by name and return its value, or `None` if the
    /// attribute is absent or this is not an element node.
    fn attr_value(&self, name: &str) -> Option<String>;

    /// Set an attribute on this element, overwriting any existing value of
    /// the same name. No-op for non-element nodes.
    fn set_attr_value(&self, name: &str, value: &str);

    /// Serialise the *children* of this node to an HTML string (the node's
    /// own open/close tags are **not** included).
    fn inner_html(&self) -> String;

    /// Replace the children of this node with the given markup, parsed
    /// permissively as a fragment. An empty string just clears the children.
    fn set_inner_html(&self, html: &str);
}

/// Create a new, detached HTML element node with the given tag name and no
/// attributes or children.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::parser::{new_html_element, NodeExt};
///
/// let div = new_html_element("div");
/// assert_eq!(div.element_name(), Some("div"));
/// ```
pub fn new_html_element(tag_name: &str) -> NodeRef {
    let name = QualName::new(None, html5ever::ns!(html), LocalName::from(tag_name));
    let attributes = Attributes {
        map: Default::default(),
    };
    NodeRef::new(NodeData::Element(ElementData {
        name,
        attributes: RefCell::new(attributes),
        template_contents: None,
    }))
}

/// Move every child node of `from` (in order) to be the last children of
/// `to`. After the call, `from` has no children.
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    let mut child = from.first_child();
    while let Some(current) = child {
        child = current.next_sibling();
        to.append(current);
    }
}

impl NodeExt for NodeRef {
    fn element_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.local.as_ref())
    }

    fn attr_value(&self, name: &str) -> Option<String> {
        self.as_element()
            .and_then(|e| e.attributes.borrow().get(name).map(|v| v.to_string()))
    }

    fn set_attr_value(&self, name: &str, value: &str) {
        if let Some(e) = self.as_element() {
            e.attributes.borrow_mut().insert(name, value.to_string());
        }
    }

    fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            out.push_str(&child.to_string());
        }
        out
    }

    fn set_inner_html(&self, html: &str) {
        while let Some(child) = self.first_child() {
            child.detach();
        }
        if html.is_empty() {
            return;
        }
        let parsed = crate::parser::parse_html(html);
        if let Ok(body) = parsed.select_first("body") {
            move_children(body.as_node(), self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_html;

    #[test]
    fn set_attr_value_overwrites() {
        let doc = parse_html("<a class=\"old\">x</a>");
        let a = doc.select_first("a").unwrap().as_node().clone();
        a.set_attr_value("class", "new");
        a.set_attr_value("href", "/cart");
        assert_eq!(a.attr_value("class"), Some("new".to_string()));
        assert_eq!(a.attr_value("href"), Some("/cart".to_string()));
    }

    #[test]
    fn set_inner_html_replaces_children() {
        let doc = parse_html("<div><span>old</span></div>");
        let div = doc.select_first("div").unwrap().as_node().clone();
        div.set_inner_html("<b>new</b> text");
        assert_eq!(div.inner_html(), "<b>new</b> text");
    }

    #[test]
    fn set_inner_html_empty_clears() {
        let doc = parse_html("<div><span>old</span></div>");
        let div = doc.select_first("div").unwrap().as_node().clone();
        div.set_inner_html("");
        assert_eq!(div.inner_html(), "");
        assert!(div.first_child().is_none());
    }

    #[test]
    fn attr_value_on_text_node_is_none() {
        let doc = parse_html("<div>text</div>");
        let div = doc.select_first("div").unwrap().as_node().clone();
        let text = div.first_child().unwrap();
        assert_eq!(text.attr_value("class"), None);
    }
}
