// src/lib.rs
//! # Raw Memory View Library
//!
//! Zero-copy typed views over raw memory: read and write fields of a record
//! at computed byte offsets, address elements of a homogeneous sequence by
//! stride, and reinterpret text as bytes (and back) over shared storage.
//!
//! The API comes in two tiers. The unchecked tier ([`RawRegion`],
//! [`FieldHandle`], the `*_unchecked` reinterpretations) does no validation
//! in release builds and makes misuse undefined behavior; debug builds add
//! assertions. The checked tier ([`RecordView`], [`RecordViewMut`], the
//! validating reinterpretations) turns the same misuse into [`ViewError`]
//! values.
//!
//! Features:
//! - Typed field handles at computed byte offsets into live records
//! - Element handles over homogeneous sequences, stride taken from the type
//! - Record layouts computed from host `size_of`/`align_of`, never hardcoded
//! - Checked record views over byte buffers, fully safe via `bytemuck`
//! - Zero-copy text/byte reinterpretation, borrowed and owned
//! - Debug-only assertions backing every unchecked operation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod layout;
pub mod region;
pub mod reinterp;

// Re-export main types
pub use error::{Result, ViewError};
pub use field::{FieldHandle, RecordView, RecordViewMut};
pub use layout::{FieldDescriptor, PrimitiveKind, RecordLayout, Scalar};
pub use region::RawRegion;

#[cfg(feature = "anyhow")]
pub use error::ResultExt;

/// Commonly used imports.
pub mod prelude {
    pub use crate::error::{Result, ViewError};
    pub use crate::field::{FieldHandle, RecordView, RecordViewMut};
    pub use crate::layout::{FieldDescriptor, PrimitiveKind, RecordLayout, Scalar};
    pub use crate::region::RawRegion;
}
