use crate::error::Error;
use crate::hooks::{AttributeFilter, ContentFilter};
use crate::nodes::NodeKey;
use serde::{Deserialize, Serialize};

/// The schema version written by the current authoring UI. Older stored
/// configurations are migrated on read; see [`BlockConfig::from_value`].
pub const SCHEMA_VERSION: u32 = 2;

/// Read-only snapshot of the catalog data needed to render one product.
///
/// Owned by the catalog collaborator; the renderer reads it once per call
/// and never caches or mutates it. Absence (product deleted, hidden, or the
/// id never existed) is expressed as `Option<ProductState>` at the
/// [`crate::ProductCatalog`] seam rather than a probe on a loosely-typed
/// object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    /// Catalog identifier.
    pub id: u64,
    /// Whether the product can currently be purchased at all.
    pub purchasable: bool,
    /// Whether the product is in stock.
    pub in_stock: bool,
    /// Whether the storefront supports adding this product to the cart
    /// via ajax (listing pages without a reload).
    pub supports_ajax: bool,
    /// Ready-to-embed stock/availability display HTML. Empty when the
    /// catalog has no availability text for this product.
    pub stock_html: String,
    /// Ready-to-embed price display HTML.
    pub price_html: String,
    /// Stock-keeping unit. May be empty.
    pub sku: String,
    /// Product type tag (e.g. `"simple"`, `"variable"`, `"external"`).
    pub product_type: String,
    /// Human-readable description of the add-to-cart action, used for the
    /// accessible label (e.g. `"Add “Tee” to your cart"`).
    pub add_to_cart_description: String,
    /// Target URL of the add-to-cart action. Often relative
    /// (`?add-to-cart=42`); see `RenderOptions::base_url`.
    pub add_to_cart_url: String,
}

/// Horizontal text alignment authored on the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The block's authored configuration, stored alongside the fragment as
/// attribute JSON. Immutable per render call.
///
/// This is the canonical (version 2) schema. Version 1 stored per-node
/// display opt-ins (`displayPrice` / `displayStock`) instead of
/// [`hidden_nodes`](Self::hidden_nodes); [`BlockConfig::from_value`]
/// migrates those transparently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockConfig {
    /// Schema version of the stored attributes.
    pub version: u32,
    /// Target product id. `None` while the author has not picked a product
    /// yet; rendering then leaves the fragment untouched.
    #[serde(rename = "postId")]
    pub product_id: Option<u64>,
    /// Quantity added per click. Emitted as `data-quantity` on the primary
    /// node when it differs from 1.
    pub quantity: u32,
    /// Authored text alignment. Carried for the authoring UI; the saved
    /// markup already contains the matching alignment class.
    pub text_align: Option<TextAlign>,
    /// Suppress the whole block when the product is out of stock.
    pub hide_if_out_of_stock: bool,
    /// Display-node keys the author chose to hide.
    pub hidden_nodes: Vec<NodeKey>,
    /// Custom text color, when the author picked one outside the palette.
    pub custom_text_color: Option<String>,
    /// Custom background color, when the author picked one outside the
    /// palette.
    pub custom_background_color: Option<String>,
}

impl Default for BlockConfig {
    fn default() -> BlockConfig {
        BlockConfig {
            version: SCHEMA_VERSION,
            product_id: None,
            quantity: 1,
            text_align: None,
            hide_if_out_of_stock: false,
            hidden_nodes: vec![],
            custom_text_color: None,
            custom_background_color: None,
        }
    }
}

/// The version-1 attribute shape: per-node display flags, both defaulting
/// to off.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LegacyConfig {
    post_id: Option<u64>,
    quantity: u32,
    text_align: Option<TextAlign>,
    hide_if_out_of_stock: bool,
    display_price: bool,
    display_stock: bool,
    custom_text_color: Option<String>,
    custom_background_color: Option<String>,
}

impl Default for LegacyConfig {
    fn default() -> LegacyConfig {
        LegacyConfig {
            post_id: None,
            quantity: 1,
            text_align: None,
            hide_if_out_of_stock: false,
            display_price: false,
            display_stock: false,
            custom_text_color: None,
            custom_background_color: None,
        }
    }
}

impl BlockConfig {
    /// Deserialize a stored attribute object, migrating historical schema
    /// versions to the canonical one.
    ///
    /// A missing `version` field means version 1. Versions newer than
    /// [`SCHEMA_VERSION`] fail with [`Error::Config`] rather than being
    /// silently reinterpreted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cartable_rs::BlockConfig;
    ///
    /// let config = BlockConfig::from_value(serde_json::json!({
    ///     "postId": 42,
    ///     "displayPrice": true,
    /// }))
    /// .unwrap();
    /// assert_eq!(config.product_id, Some(42));
    /// // v1 `displayStock` defaulted to off, so the stock node is hidden.
    /// assert_eq!(config.hidden_nodes, vec![cartable_rs::NodeKey::Stock]);
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<BlockConfig, Error> {
        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(1);
        match version {
            1 => {
                let legacy: LegacyConfig =
                    serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
                let mut hidden_nodes = vec![];
                if !legacy.display_stock {
                    hidden_nodes.push(NodeKey::Stock);
                }
                if !legacy.display_price {
                    hidden_nodes.push(NodeKey::Price);
                }
                log::debug!("migrated block configuration from schema version 1");
                Ok(BlockConfig {
                    version: SCHEMA_VERSION,
                    product_id: legacy.post_id,
                    quantity: legacy.quantity,
                    text_align: legacy.text_align,
                    hide_if_out_of_stock: legacy.hide_if_out_of_stock,
                    hidden_nodes,
                    custom_text_color: legacy.custom_text_color,
                    custom_background_color: legacy.custom_background_color,
                })
            }
            2 => serde_json::from_value(value).map_err(|e| Error::Config(e.to_string())),
            other => Err(Error::Config(format!(
                "unsupported schema version {other}"
            ))),
        }
    }

    /// Deserialize from the raw attribute JSON text.
    pub fn from_json(json: &str) -> Result<BlockConfig, Error> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        BlockConfig::from_value(value)
    }
}

/// Knobs that control rendering, shared across blocks of one host.
///
/// All fields have sensible defaults via [`Default`]; start there and only
/// override what you need.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::RenderOptions;
///
/// let mut opts = RenderOptions::default();
/// opts.base_url = Some("https://shop.example/product/tee".to_string());
/// opts.append_meta = false; // never synthesize missing display sections
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base CSS class of the block. Placeholder nodes are located by the
    /// `<prefix>__<key>` token convention, and generated sections reuse it.
    /// Sanitized before use; see
    /// [`sanitize_html_class`](crate::shared_utils::sanitize_html_class).
    pub class_prefix: String,
    /// When set, relative add-to-cart URLs are resolved against this base
    /// before being written to `href`.
    pub base_url: Option<String>,
    /// Append a `<prefix>__meta` section for visible display nodes that
    /// have no authored placeholder in the fragment.
    pub append_meta: bool,
    /// Ordered transforms applied to the computed attribute map before it
    /// is patched onto the primary node.
    pub attribute_filters: Vec<AttributeFilter>,
    /// Ordered transforms applied to the serialized output before it is
    /// returned.
    pub content_filters: Vec<ContentFilter>,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            class_prefix: String::from("wp-block-add-to-cart"),
            base_url: None,
            append_meta: true,
            attribute_filters: vec![],
            content_filters: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v1_display_flags_become_hidden_nodes() {
        let config = BlockConfig::from_value(serde_json::json!({
            "postId": 7,
            "displayStock": true,
        }))
        .unwrap();
        assert_eq!(config.version, SCHEMA_VERSION);
        assert_eq!(config.product_id, Some(7));
        assert_eq!(config.hidden_nodes, vec![NodeKey::Price]);
    }

    #[test]
    fn v1_defaults_hide_everything() {
        let config = BlockConfig::from_value(serde_json::json!({ "postId": 7 })).unwrap();
        assert_eq!(config.hidden_nodes, vec![NodeKey::Stock, NodeKey::Price]);
    }

    #[test]
    fn v2_round_trips() {
        let config = BlockConfig {
            product_id: Some(3),
            quantity: 2,
            hidden_nodes: vec![NodeKey::Price],
            hide_if_out_of_stock: true,
            ..BlockConfig::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["postId"], 3);
        assert_eq!(value["hiddenNodes"][0], "price");
        let parsed = BlockConfig::from_value(value).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn future_versions_are_rejected() {
        let err = BlockConfig::from_value(serde_json::json!({ "version": 3 })).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        assert!(matches!(
            BlockConfig::from_json("{ not json"),
            Err(Error::Config(_))
        ));
    }
}
