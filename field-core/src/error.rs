use thiserror::Error;

/// Errors raised while building a [`crate::field::Field`].
///
/// Only construction can fail; once a field exists every frame succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The drawing surface has no area to scatter points over.
    #[error("invalid drawing surface: {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },
}
