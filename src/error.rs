// src/error.rs
//! Error types for the checked view tier.
//!
//! Only the checked wrappers ([`RecordView`](crate::RecordView) and the
//! validating reinterpretation functions) return these errors. The unchecked
//! tier reports nothing: violating one of its preconditions is undefined
//! behavior, not a recoverable error.

use std::fmt;

use crate::layout::PrimitiveKind;

/// Errors produced by the checked view operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A byte range does not fit inside the region it was resolved against.
    OutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        size: usize,
        /// Length of the region.
        len: usize,
    },
    /// A field index is not present in the record layout.
    NoSuchField {
        /// The requested field index.
        index: usize,
        /// Number of fields in the layout.
        field_count: usize,
    },
    /// A field was accessed as a different kind than the layout declares.
    KindMismatch {
        /// The kind implied by the access.
        expected: PrimitiveKind,
        /// The kind the layout declares.
        actual: PrimitiveKind,
    },
    /// Bytes reinterpreted as text were not valid UTF-8.
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { offset, size, len } => write!(
                f,
                "Byte range {}..{} out of bounds for region of {} bytes",
                offset,
                offset + size,
                len
            ),
            Self::NoSuchField { index, field_count } => {
                write!(f, "No field {} in layout with {} fields", index, field_count)
            }
            Self::KindMismatch { expected, actual } => write!(
                f,
                "Field accessed as {:?} but layout declares {:?}",
                expected, actual
            ),
            Self::InvalidEncoding { valid_up_to } => {
                write!(f, "Invalid UTF-8 after {} bytes", valid_up_to)
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Result type alias for checked view operations.
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`rawview::Result<T>`) or use [`ResultExt`].
pub type Result<T> = std::result::Result<T, ViewError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for folding view errors into `anyhow::Result`.
///
/// An explicit trait method is used instead of a `From<ViewError>` impl for
/// `anyhow::Error`, which would collide with anyhow's blanket conversion for
/// `std::error::Error` types.
#[cfg(feature = "anyhow")]
pub trait ResultExt<T> {
    /// Convert to anyhow::Result.
    fn into_anyhow(self) -> anyhow::Result<T>;
}

#[cfg(feature = "anyhow")]
impl<T> ResultExt<T> for Result<T> {
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(anyhow::Error::new)
    }
}
