//! Input validation errors.

use thiserror::Error;

/// Reasons a generation request is refused before reaching the generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is empty or whitespace.
    #[error("A description is required: describe your app or SaaS to generate names")]
    EmptyDescription,

    /// Description exceeds the accepted length.
    #[error("Description is too long: {len} characters (max {max})")]
    DescriptionTooLong {
        /// Length of the submitted description, in characters.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
}
