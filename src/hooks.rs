//! Extension points of the render pipeline.
//!
//! Hosts that want to adjust the generated attributes or post-process the
//! serialized output register ordered transform lists on
//! [`RenderOptions`](crate::RenderOptions) instead of a process-wide hook
//! registry; each render call sees exactly the transforms it was handed.

use crate::attributes::AttributeMap;
use crate::models::{BlockConfig, ProductState};
use std::fmt;
use std::rc::Rc;

/// A clonable transform applied to the computed [`AttributeMap`] before it
/// is patched onto the primary node. Clone is cheap (an `Rc` bump).
///
/// # Examples
///
/// ```rust
/// use cartable_rs::AttributeFilter;
///
/// let force_target = AttributeFilter::new(|mut attributes, _product| {
///     attributes.insert("target".to_string(), "_top".to_string());
///     attributes
/// });
/// ```
#[derive(Clone)]
pub struct AttributeFilter {
    inner: Rc<dyn Fn(AttributeMap, &ProductState) -> AttributeMap>,
}

impl AttributeFilter {
    pub fn new<F>(filter: F) -> AttributeFilter
    where
        F: Fn(AttributeMap, &ProductState) -> AttributeMap + 'static,
    {
        AttributeFilter {
            inner: Rc::new(filter),
        }
    }

    pub fn apply(&self, attributes: AttributeMap, product: &ProductState) -> AttributeMap {
        (self.inner)(attributes, product)
    }
}

impl fmt::Debug for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AttributeFilter")
    }
}

/// A clonable transform applied to the serialized block output before it is
/// returned to the host.
#[derive(Clone)]
pub struct ContentFilter {
    inner: Rc<dyn Fn(String, &BlockConfig) -> String>,
}

impl ContentFilter {
    pub fn new<F>(filter: F) -> ContentFilter
    where
        F: Fn(String, &BlockConfig) -> String + 'static,
    {
        ContentFilter {
            inner: Rc::new(filter),
        }
    }

    pub fn apply(&self, content: String, config: &BlockConfig) -> String {
        (self.inner)(content, config)
    }
}

impl fmt::Debug for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentFilter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_apply_in_hand_written_order() {
        let config = BlockConfig::default();
        let filters = vec![
            ContentFilter::new(|content, _| format!("{content}a")),
            ContentFilter::new(|content, _| format!("{content}b")),
        ];
        let mut out = String::from("x");
        for filter in &filters {
            out = filter.apply(out, &config);
        }
        assert_eq!(out, "xab");
    }

    #[test]
    fn attribute_filter_can_override_entries() {
        let product = ProductState::default();
        let filter = AttributeFilter::new(|mut attributes, _| {
            attributes.insert("rel".to_string(), "noopener".to_string());
            attributes
        });
        let mut attributes = AttributeMap::new();
        attributes.insert("rel".to_string(), "nofollow".to_string());
        let attributes = filter.apply(attributes, &product);
        assert_eq!(attributes["rel"], "noopener");
    }
}
