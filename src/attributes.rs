use crate::models::ProductState;
use std::collections::BTreeMap;

/// Attribute name → value mapping applied to the primary node.
///
/// A `BTreeMap` so that application order is deterministic regardless of
/// how the map was assembled.
pub type AttributeMap = BTreeMap<String, String>;

/// Compute the attributes of the add-to-cart control for `product`.
///
/// `custom_classes` are the class tokens the control already carries in the
/// authored markup; they come first in the generated `class` value, followed
/// by the computed tokens. The `class` value is a full replacement (the
/// patcher overwrites, it never merges), so the caller pre-merges by passing
/// the existing tokens here.
///
/// An absent product yields an empty map; the caller renders the not-found
/// notice instead of patching.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::{compute_attributes, ProductState};
///
/// let product = ProductState {
///     id: 42,
///     purchasable: true,
///     in_stock: true,
///     product_type: "simple".to_string(),
///     add_to_cart_url: "?add-to-cart=42".to_string(),
///     ..ProductState::default()
/// };
/// let attributes = compute_attributes(Some(&product), &["button"], "wp-block-add-to-cart");
/// assert_eq!(
///     attributes["class"],
///     "button product_type_simple wp-block-add-to-cart__add-to-cart add_to_cart_button"
/// );
/// assert_eq!(attributes["href"], "?add-to-cart=42");
/// ```
pub fn compute_attributes(
    product: Option<&ProductState>,
    custom_classes: &[&str],
    class_prefix: &str,
) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    let product = match product {
        Some(product) => product,
        None => return attributes,
    };

    let saleable = product.purchasable && product.in_stock;
    let mut class_tokens: Vec<String> = custom_classes
        .iter()
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect();
    class_tokens.push(format!("product_type_{}", product.product_type));
    if !class_prefix.is_empty() {
        class_tokens.push(format!("{class_prefix}__add-to-cart"));
    }
    if saleable {
        class_tokens.push(String::from("add_to_cart_button"));
    }
    if product.supports_ajax && saleable {
        class_tokens.push(String::from("ajax_add_to_cart"));
    }

    attributes.insert(
        String::from("aria-label"),
        product.add_to_cart_description.clone(),
    );
    attributes.insert(String::from("class"), class_tokens.join(" "));
    attributes.insert(String::from("data-product_id"), product.id.to_string());
    attributes.insert(String::from("data-product_sku"), product.sku.clone());
    attributes.insert(String::from("href"), product.add_to_cart_url.clone());
    attributes.insert(String::from("rel"), String::from("nofollow"));
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductState {
        ProductState {
            id: 42,
            purchasable: true,
            in_stock: true,
            supports_ajax: true,
            sku: "SKU-42".to_string(),
            product_type: "simple".to_string(),
            add_to_cart_description: "Add “Tee” to your cart".to_string(),
            add_to_cart_url: "?add-to-cart=42".to_string(),
            ..ProductState::default()
        }
    }

    #[test]
    fn saleable_ajax_product_gets_both_cart_tokens() {
        let attributes = compute_attributes(Some(&product()), &[], "cart");
        let class = &attributes["class"];
        assert!(class.contains("add_to_cart_button"));
        assert!(class.contains("ajax_add_to_cart"));
    }

    #[test]
    fn non_purchasable_product_gets_neither_cart_token() {
        let mut product = product();
        product.purchasable = false;
        let attributes = compute_attributes(Some(&product), &[], "cart");
        let class = &attributes["class"];
        assert!(!class.contains("add_to_cart_button"));
        assert!(!class.contains("ajax_add_to_cart"));
    }

    #[test]
    fn out_of_stock_product_gets_neither_cart_token() {
        let mut product = product();
        product.in_stock = false;
        let class = &compute_attributes(Some(&product), &[], "cart")["class"];
        assert!(!class.contains("add_to_cart_button"));
        assert!(!class.contains("ajax_add_to_cart"));
    }

    #[test]
    fn custom_classes_come_first_and_empties_are_dropped() {
        let attributes = compute_attributes(Some(&product()), &["button", "", "wide"], "cart");
        assert!(attributes["class"].starts_with("button wide product_type_simple"));
    }

    #[test]
    fn identity_attributes_are_present() {
        let attributes = compute_attributes(Some(&product()), &[], "cart");
        assert_eq!(attributes["data-product_id"], "42");
        assert_eq!(attributes["data-product_sku"], "SKU-42");
        assert_eq!(attributes["aria-label"], "Add “Tee” to your cart");
        assert_eq!(attributes["rel"], "nofollow");
    }

    #[test]
    fn absent_product_yields_empty_map() {
        assert!(compute_attributes(None, &["button"], "cart").is_empty());
    }
}
