use crate::models::{BlockConfig, ProductState};
use crate::nodes::{display_nodes, NodeKey};

/// Whether the block should be rendered at all.
///
/// `false` only when `hide_if_out_of_stock` is set and the product is not
/// in stock; the caller then suppresses the whole fragment instead of
/// invoking the patcher.
pub fn should_render(product: &ProductState, hide_if_out_of_stock: bool) -> bool {
    product.in_stock || !hide_if_out_of_stock
}

/// The display-node keys to render for this block: the registry minus the
/// author's hidden keys, in registry order.
pub fn visible_nodes(config: &BlockConfig) -> Vec<NodeKey> {
    display_nodes()
        .iter()
        .copied()
        .filter(|key| !config.hidden_nodes.contains(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_only_when_flagged_and_out_of_stock() {
        let in_stock = ProductState {
            in_stock: true,
            ..ProductState::default()
        };
        let out_of_stock = ProductState::default();

        assert!(should_render(&in_stock, true));
        assert!(should_render(&in_stock, false));
        assert!(should_render(&out_of_stock, false));
        assert!(!should_render(&out_of_stock, true));
    }

    #[test]
    fn hidden_nodes_are_filtered_in_registry_order() {
        let config = BlockConfig {
            hidden_nodes: vec![NodeKey::Stock],
            ..BlockConfig::default()
        };
        assert_eq!(visible_nodes(&config), vec![NodeKey::Price]);

        let all_visible = BlockConfig::default();
        assert_eq!(
            visible_nodes(&all_visible),
            vec![NodeKey::Stock, NodeKey::Price]
        );
    }
}
