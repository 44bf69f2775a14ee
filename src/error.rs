use thiserror::Error;

/// Errors surfaced by the render pipeline.
///
/// Missing optional structure (no primary node, no placeholder for a key) is
/// *not* an error; fragments legitimately vary in which nodes they include.
/// An absent product is a state ([`crate::ProductCatalog`] returns
/// `None`), not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// The fragment produced no root nodes at all. The HTML5 parser is
    /// permissive, so this only happens for input with no body content
    /// (e.g. an empty string).
    #[error("fragment could not be parsed: no root nodes")]
    Parse,

    /// The stored block configuration could not be understood: an
    /// unsupported schema version or malformed attribute JSON.
    #[error("invalid block configuration: {0}")]
    Config(String),
}
