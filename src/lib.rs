//! Server-side rendering core for an e-commerce "Add to Cart" content
//! block: patches an authored HTML fragment with product-derived attributes
//! and display sections, without disturbing the rest of the markup.
//!
//! ## Quick start
//!
//! ```rust
//! use cartable_rs::{render, BlockConfig, ProductState, RenderOptions, StaticCatalog};
//!
//! let catalog: StaticCatalog = [ProductState {
//!     id: 42,
//!     purchasable: true,
//!     in_stock: true,
//!     product_type: "simple".to_string(),
//!     add_to_cart_url: "?add-to-cart=42".to_string(),
//!     ..ProductState::default()
//! }]
//! .into_iter()
//! .collect();
//!
//! let config = BlockConfig {
//!     product_id: Some(42),
//!     ..BlockConfig::default()
//! };
//!
//! let saved = "<div><a class=\"button\">Buy now</a></div>";
//! let html = render(saved, &config, &catalog, RenderOptions::default())
//!     .unwrap()
//!     .expect("block is visible");
//! assert!(html.contains("href=\"?add-to-cart=42\""));
//! ```
//!
//! ## Module layout
//!
//! * **Top level** – [`render`] is the single entry-point; [`Renderer`]
//!   is the reusable form. [`BlockConfig`], [`ProductState`], and
//!   [`RenderOptions`] are the main public types.
//! * [`Fragment`] – the fragment parse/query/patch core, for hosts that
//!   drive the patching themselves.
//! * [`parser`] – thin wrappers around the underlying HTML parser
//!   ([`parser::NodeRef`], [`parser::parse_html`]).
//! * [`shared_utils`] – a curated subset of the internal helpers useful
//!   when pre- or post-processing block markup.

mod attributes;
mod catalog;
mod error;
mod hooks;
mod models;
mod node_utils;
mod nodes;
mod patcher;
mod policy;
mod renderer;
mod utils;

pub use attributes::{compute_attributes, AttributeMap};
pub use catalog::{ProductCatalog, StaticCatalog};
pub use error::Error;
pub use hooks::{AttributeFilter, ContentFilter};
pub use models::{BlockConfig, ProductState, RenderOptions, TextAlign, SCHEMA_VERSION};
pub use nodes::{display_nodes, display_nodes_map, not_found_fragment, NodeKey};
pub use patcher::{Fragment, PatchReport};
pub use policy::{should_render, visible_nodes};
pub use renderer::Renderer;

/// Convenience re-exports of helpers for pre- and post-processing block
/// markup.
///
/// These are a stable, curated subset of the internal utility library.
pub mod shared_utils {
    pub use crate::nodes::{
        meta_sections_html, placeholder_html, price_section, section_html, stock_section,
    };
    pub use crate::utils::{absolutize_url, sanitize_html_class};
}

/// Thin wrappers around the underlying HTML parser.
///
/// [`NodeRef`] is the reference-counted DOM node type used throughout the
/// crate.  [`parse_html`] parses an HTML string into a [`NodeRef`] tree.
pub mod parser {
    use kuchikikiki::traits::TendrilSink;
    pub use kuchikikiki::{Attributes, NodeRef};
    pub use crate::node_utils::{new_html_element, NodeExt};

    /// Parse an HTML string into a [`NodeRef`] document tree.
    ///
    /// The parser follows the HTML5 specification; an implicit `<html>`,
    /// `<head>`, and `<body>` are synthesised when missing, which is what
    /// lets block fragments parse without a document wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartable_rs::parser::parse_html;
    ///
    /// let doc = parse_html("<div><a class=\"button\">Buy</a></div>");
    /// assert!(doc.select_first("a").is_ok());
    /// ```
    pub fn parse_html(html: &str) -> NodeRef {
        kuchikikiki::parse_html().one(html)
    }
}

/// Render one add-to-cart block.
///
/// This is the primary entry-point of the crate: it looks the configured
/// product up in `catalog`, computes the add-to-cart attributes, patches
/// them into `saved_fragment`, fills or appends the visible display
/// sections, and applies the visibility policy.
///
/// # Arguments
///
/// * `saved_fragment` – the block's authored markup.
/// * `config` – the block's stored configuration (see
///   [`BlockConfig::from_value`] for migrating stored attribute JSON).
/// * `catalog` – the product catalog collaborator.
/// * `options` – host-wide rendering knobs; [`RenderOptions::default()`]
///   is a sensible starting point.
///
/// # Returns
///
/// * `Ok(Some(html))` – the patched markup (or the not-found notice when
///   the product no longer exists).
/// * `Ok(None)` – the visibility policy suppressed the block; render
///   nothing.
/// * `Err(Error::Parse)` – the fragment had no parseable content at all.
pub fn render(
    saved_fragment: &str,
    config: &BlockConfig,
    catalog: &dyn ProductCatalog,
    options: RenderOptions,
) -> Result<Option<String>, Error> {
    Renderer::new(catalog, options).render(config, saved_fragment)
}
