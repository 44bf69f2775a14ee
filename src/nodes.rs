use crate::models::ProductState;
use crate::utils::sanitize_html_class;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The optional display nodes a block can carry next to its primary
/// add-to-cart control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKey {
    Stock,
    Price,
}

impl NodeKey {
    /// The key as it appears in class tokens (`<prefix>__stock`) and in the
    /// stored `hiddenNodes` list.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKey::Stock => "stock",
            NodeKey::Price => "price",
        }
    }

    /// Human-readable label shown in the authoring UI's hide/show list.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKey::Stock => "Stock status",
            NodeKey::Price => "Price",
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The display-node registry, in presentation order.
pub fn display_nodes() -> &'static [NodeKey] {
    &[NodeKey::Stock, NodeKey::Price]
}

/// The key → label mapping served by the read endpoint that populates the
/// authoring UI's hide/show list.
///
/// # Examples
///
/// ```rust
/// let nodes = cartable_rs::display_nodes_map();
/// assert_eq!(nodes["stock"], "Stock status");
/// assert_eq!(nodes["price"], "Price");
/// ```
pub fn display_nodes_map() -> BTreeMap<&'static str, &'static str> {
    display_nodes()
        .iter()
        .map(|key| (key.as_str(), key.label()))
        .collect()
}

/// The replacement content written into an authored placeholder node for
/// `key`. The placeholder already carries the convention class, so this is
/// the bare display HTML.
pub fn placeholder_html(key: NodeKey, product: &ProductState) -> String {
    match key {
        NodeKey::Stock => product.stock_html.clone(),
        NodeKey::Price => product.price_html.clone(),
    }
}

/// A standalone stock section, or `None` when the catalog has no
/// availability text for this product.
pub fn stock_section(product: &ProductState, class_prefix: &str) -> Option<String> {
    if product.stock_html.trim().is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"{}__stock\">{}</div>",
        sanitize_html_class(class_prefix),
        product.stock_html
    ))
}

/// A standalone price section.
pub fn price_section(product: &ProductState, class_prefix: &str) -> String {
    format!(
        "<div class=\"{}__price\">{}</div>",
        sanitize_html_class(class_prefix),
        product.price_html
    )
}

/// The section markup for one display node, or `None` when the node has
/// nothing to show.
pub fn section_html(key: NodeKey, product: &ProductState, class_prefix: &str) -> Option<String> {
    match key {
        NodeKey::Stock => stock_section(product, class_prefix),
        NodeKey::Price => Some(price_section(product, class_prefix)),
    }
}

/// Concatenated section markup for `keys`, in the given order; `None` when
/// no section applies. This is the content of the appended
/// `<prefix>__meta` container.
pub fn meta_sections_html(
    product: &ProductState,
    keys: &[NodeKey],
    class_prefix: &str,
) -> Option<String> {
    let mut out = String::new();
    for key in keys {
        if let Some(section) = section_html(*key, product, class_prefix) {
            out.push_str(&section);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// The notice rendered in place of the block when the configured product
/// no longer exists.
pub fn not_found_fragment(class_prefix: &str) -> String {
    let class = sanitize_html_class(class_prefix);
    format!(
        "<div class=\"{class}\"><p class=\"{class}__not-found\">The selected product could not be found.</p></div>"
    )
}
