//! Error type for rendering.

/// Error from rendering a node tree.
///
/// The first error aborts the whole render call. When the pooled buffer
/// path is used (every top-level [`render`](crate::render()) call), an
/// attribute error is caught before anything reaches the destination, so a
/// failed render delivers zero bytes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// An attribute key was empty or whitespace-only after trimming.
    #[error("attribute key is empty or whitespace")]
    EmptyAttrKey,

    /// The destination sink rejected the final write.
    #[error("write to destination failed")]
    Io(#[from] std::io::Error),
}
