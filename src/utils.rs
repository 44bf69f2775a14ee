use regex::Regex;
use std::sync::LazyLock;

/// Characters that are not valid inside a single HTML class name.
static INVALID_CLASS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

/// Reduce a string to a safe HTML class name by stripping everything
/// outside `[A-Za-z0-9_-]`.
///
/// Applied to the configurable class prefix before it is interpolated into
/// selectors and generated markup.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::shared_utils::sanitize_html_class;
///
/// assert_eq!(sanitize_html_class("wp-block-add-to-cart"), "wp-block-add-to-cart");
/// assert_eq!(sanitize_html_class("bad class\"><script>"), "badclassscript");
/// ```
pub fn sanitize_html_class(class: &str) -> String {
    INVALID_CLASS_CHARS.replace_all(class, "").into_owned()
}

/// Resolve a possibly-relative URL against a base. Already-absolute URLs are
/// returned unchanged; when the base itself does not parse, the input is
/// returned as-is.
///
/// Add-to-cart URLs are frequently relative (`?add-to-cart=42`), which only
/// works when the fragment is served from the product page itself.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::shared_utils::absolutize_url;
///
/// assert_eq!(
///     absolutize_url("?add-to-cart=42", "https://shop.example/product/tee"),
///     "https://shop.example/product/tee?add-to-cart=42"
/// );
/// assert_eq!(
///     absolutize_url("https://shop.example/cart", "https://other.example/"),
///     "https://shop.example/cart"
/// );
/// ```
pub fn absolutize_url(href: &str, base: &str) -> String {
    let href = href.trim();
    if let Ok(parsed) = url::Url::parse(href) {
        return parsed.into();
    }
    if let Ok(parsed_base) = url::Url::parse(base) {
        if let Ok(joined) = parsed_base.join(href) {
            return joined.into();
        }
    }
    href.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_valid_tokens() {
        assert_eq!(sanitize_html_class("a_b-c9"), "a_b-c9");
    }

    #[test]
    fn sanitize_strips_separators_and_markup() {
        assert_eq!(sanitize_html_class("x y"), "xy");
        assert_eq!(sanitize_html_class("cart__price"), "cart__price");
        assert_eq!(sanitize_html_class("<div>"), "div");
    }

    #[test]
    fn absolutize_relative_path() {
        assert_eq!(
            absolutize_url("/cart/", "https://shop.example/product/tee"),
            "https://shop.example/cart/"
        );
    }

    #[test]
    fn absolutize_with_unparseable_base_returns_input() {
        assert_eq!(absolutize_url("?add-to-cart=1", "not a url"), "?add-to-cart=1");
    }
}
