use thiserror::Error;

/// Failure classes for one generation attempt.
///
/// `Render` and `Format` cost one (schema, layer) file and the run keeps
/// going; `Io` aborts the entire run (see [`crate::generator::generate_all`]).
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Template parse or execution failure.
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    /// The rendered text is not valid Rust.
    #[error("generated source failed to parse: {0}")]
    Format(#[from] syn::Error),

    /// Directory creation or file write failure.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
