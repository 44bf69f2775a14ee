use crate::attributes::AttributeMap;
use crate::error::Error;
use crate::node_utils::move_children;
use crate::nodes::NodeKey;
use crate::parser::{parse_html, NodeExt, NodeRef};
use std::collections::BTreeMap;

/// One block's markup, parsed into a traversable tree.
///
/// The input is treated as a document fragment: the HTML5 parser
/// synthesizes the missing `<html>/<head>/<body>` scaffolding and the
/// fragment is the body's children. Each `Fragment` owns its own tree;
/// nothing is shared between parses, so concurrent render calls never
/// contend.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::Fragment;
///
/// let fragment = Fragment::parse("<div><a class=\"button\">Buy</a></div>").unwrap();
/// assert!(fragment.primary_node().is_some());
/// assert_eq!(fragment.to_html(), "<div><a class=\"button\">Buy</a></div>");
/// ```
pub struct Fragment {
    body: NodeRef,
}

/// Which of the patch targets were actually present in the fragment.
///
/// Missing targets are expected variability, not errors: the author may
/// have omitted the clickable control or any placeholder slot.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PatchReport {
    /// Whether a primary node was found (and primary attributes applied).
    pub primary_found: bool,
    /// Placeholder keys that were found and whose content was replaced.
    pub patched: Vec<NodeKey>,
    /// Placeholder keys that had replacement content but no matching node.
    pub missing: Vec<NodeKey>,
}

impl Fragment {
    /// Parse a fragment string.
    ///
    /// Fails with [`Error::Parse`] only when the parse yields zero root
    /// nodes. Permissive HTML parsing rarely fails outright, so in
    /// practice this means empty (or head-only) input.
    pub fn parse(html: &str) -> Result<Fragment, Error> {
        let document = parse_html(html);
        let body = document
            .select_first("body")
            .map_err(|_| Error::Parse)?
            .as_node()
            .clone();
        if body.first_child().is_none() {
            return Err(Error::Parse);
        }
        Ok(Fragment { body })
    }

    /// The fragment root. Children of this node are the fragment's
    /// top-level nodes.
    pub fn root(&self) -> &NodeRef {
        &self.body
    }

    /// Serialise back to a string. Surrounding whitespace is not guaranteed
    /// byte-for-byte, but untouched attributes, node order, and nesting
    /// survive, and the output re-parses to an equal tree.
    pub fn to_html(&self) -> String {
        self.body.inner_html()
    }

    /// The primary actionable node: the first descendant element that is an
    /// anchor or carries a `button` class token.
    pub fn primary_node(&self) -> Option<NodeRef> {
        self.first_match("a, .button")
    }

    /// The placeholder container for `key`: the first element whose class
    /// list contains the `<prefix>__<key>` convention token.
    pub fn placeholder(&self, class_prefix: &str, key: NodeKey) -> Option<NodeRef> {
        self.first_match(&format!(".{}__{}", class_prefix, key.as_str()))
    }

    fn first_match(&self, selector: &str) -> Option<NodeRef> {
        self.body
            .select(selector)
            .ok()?
            .next()
            .map(|element| element.as_node().clone())
    }

    /// Apply `primary_attributes` to the primary node and replace the
    /// content of each placeholder in `placeholder_content`.
    ///
    /// Attribute values overwrite existing values of the same name; the
    /// `class` value in particular is a full replacement, so callers
    /// pre-merge class lists before calling. Everything outside the
    /// targeted nodes is left untouched. Missing targets are skipped and
    /// reported, never raised.
    pub fn patch(
        &self,
        primary_attributes: &AttributeMap,
        placeholder_content: &BTreeMap<NodeKey, String>,
        class_prefix: &str,
    ) -> PatchReport {
        let mut report = PatchReport::default();

        if let Some(primary) = self.primary_node() {
            report.primary_found = true;
            for (name, value) in primary_attributes {
                primary.set_attr_value(name, value);
            }
        }

        for (key, html) in placeholder_content {
            match self.placeholder(class_prefix, *key) {
                Some(node) => {
                    node.set_inner_html(html);
                    report.patched.push(*key);
                }
                None => report.missing.push(*key),
            }
        }

        report
    }

    /// Append `html` after the fragment's existing top-level nodes.
    pub fn append_html(&self, html: &str) {
        if html.is_empty() {
            return;
        }
        let parsed = parse_html(html);
        if let Ok(body) = parsed.select_first("body") {
            move_children(body.as_node(), &self.body);
        }
    }
}
