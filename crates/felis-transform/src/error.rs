//! Transformation errors.

/// Why a raw record could not become a [`felis_core::Breed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A field the canonical model cannot do without was absent or blank.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}
