// src/field/mod.rs
//! Field View: typed read/write access to fields embedded in records.
//!
//! Two tiers over the same idea. [`handle`] is the unchecked core: a
//! [`FieldHandle`] aliases a field of a live record at a computed offset,
//! every access is `unsafe`, and misuse is undefined behavior. [`view`] is
//! the checked wrapper: a [`RecordView`] interprets a byte buffer through a
//! [`RecordLayout`](crate::layout::RecordLayout) and turns misuse into
//! [`ViewError`](crate::error::ViewError) values.

pub mod handle;
pub mod view;

pub use handle::FieldHandle;
pub use view::{RecordView, RecordViewMut};
