use crate::attributes::compute_attributes;
use crate::catalog::ProductCatalog;
use crate::error::Error;
use crate::models::{BlockConfig, RenderOptions};
use crate::node_utils::new_html_element;
use crate::nodes::{meta_sections_html, not_found_fragment, placeholder_html, NodeKey};
use crate::parser::NodeExt;
use crate::patcher::Fragment;
use crate::policy::{should_render, visible_nodes};
use crate::utils::{absolutize_url, sanitize_html_class};
use log::debug;
use std::collections::BTreeMap;

/// Renders add-to-cart blocks against a product catalog.
///
/// One `Renderer` serves any number of blocks; every call is an independent
/// pure transform over its own parse tree.
pub struct Renderer<'a> {
    catalog: &'a dyn ProductCatalog,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog, options: RenderOptions) -> Renderer<'a> {
        Renderer { catalog, options }
    }

    /// Render one block: patch `saved_fragment` with the state of the
    /// configured product.
    ///
    /// Returns `Ok(None)` when the visibility policy suppresses the block
    /// entirely. A fragment with no configured product id is returned
    /// unchanged; a product id that no longer resolves yields the
    /// not-found notice instead of the fragment.
    pub fn render(
        &self,
        config: &BlockConfig,
        saved_fragment: &str,
    ) -> Result<Option<String>, Error> {
        let class_prefix = sanitize_html_class(&self.options.class_prefix);

        let product_id = match config.product_id {
            Some(id) => id,
            None => return Ok(Some(saved_fragment.to_string())),
        };
        let product = match self.catalog.lookup_product(product_id) {
            Some(product) => product,
            None => {
                debug!("product {product_id} not found, rendering fallback notice");
                return Ok(Some(not_found_fragment(&class_prefix)));
            }
        };
        if !should_render(&product, config.hide_if_out_of_stock) {
            debug!("product {product_id} is out of stock, suppressing block");
            return Ok(None);
        }

        let fragment = Fragment::parse(saved_fragment)?;

        // The authored class list of the control is the pre-merge input to
        // the full-replacement `class` attribute.
        let authored_classes = fragment
            .primary_node()
            .and_then(|node| node.attr_value("class"))
            .unwrap_or_default();
        let custom_classes: Vec<&str> = authored_classes.split_whitespace().collect();

        let mut attributes = compute_attributes(Some(&product), &custom_classes, &class_prefix);
        if config.quantity != 1 {
            attributes.insert(String::from("data-quantity"), config.quantity.to_string());
        }
        if let Some(base) = &self.options.base_url {
            if let Some(href) = attributes.get("href") {
                let absolute = absolutize_url(href, base);
                attributes.insert(String::from("href"), absolute);
            }
        }
        for filter in &self.options.attribute_filters {
            attributes = filter.apply(attributes, &product);
        }

        let visible = visible_nodes(config);
        let placeholder_content: BTreeMap<NodeKey, String> = visible
            .iter()
            .map(|key| (*key, placeholder_html(*key, &product)))
            .collect();

        let report = fragment.patch(&attributes, &placeholder_content, &class_prefix);
        if !report.primary_found {
            debug!("fragment has no primary node, attributes skipped");
        }
        for key in &report.missing {
            debug!("fragment has no {key} placeholder");
        }

        if self.options.append_meta && !report.missing.is_empty() {
            if let Some(sections) = meta_sections_html(&product, &report.missing, &class_prefix) {
                let container = new_html_element("div");
                container.set_attr_value("class", &format!("{class_prefix}__meta"));
                container.set_inner_html(&sections);
                fragment.root().append(container);
            }
        }

        let mut output = fragment.to_html();
        for filter in &self.options.content_filters {
            output = filter.apply(output, config);
        }
        Ok(Some(output))
    }
}
