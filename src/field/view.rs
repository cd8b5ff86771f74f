// src/field/view.rs
//! Checked record views over byte buffers.
//!
//! [`RecordView`] and [`RecordViewMut`] pair a borrowed byte buffer with a
//! [`RecordLayout`] and validate every access against it: field index,
//! declared kind, and byte range. Misuse surfaces as a [`ViewError`] instead
//! of undefined behavior. Scalar fields are read and written through
//! `bytemuck`, whose `Pod` bound is what keeps this tier free of `unsafe`.
//!
//! Variable-length descriptor fields (`Text`, `Seq`) hold owning handles;
//! reading one out of a byte buffer by value would duplicate that ownership,
//! so the checked tier refuses them with [`ViewError::KindMismatch`]. They
//! stay reachable through the unchecked tier only.
//!
//! There is no checked counterpart to element derivation: for homogeneous
//! sequences, safe slice indexing already is the bounds-checked path. Records
//! have no safe by-offset accessor, which is the gap these views fill.

use crate::error::{Result, ViewError};
use crate::layout::{FieldDescriptor, RecordLayout, Scalar};

/// Validates `index` against the layout and the requested scalar kind.
fn scalar_field<'l, T: Scalar>(
    layout: &'l RecordLayout,
    index: usize,
) -> Result<&'l FieldDescriptor> {
    let descriptor = layout.field(index).ok_or(ViewError::NoSuchField {
        index,
        field_count: layout.field_count(),
    })?;
    if descriptor.kind != T::KIND {
        return Err(ViewError::KindMismatch {
            expected: T::KIND,
            actual: descriptor.kind,
        });
    }
    Ok(descriptor)
}

/// A read-only, bounds- and kind-checked view of one record's bytes.
///
/// The buffer is interpreted according to `layout`; nothing is copied at
/// construction. Construction fails if the layout does not fit the buffer,
/// and every access re-validates its range, so no combination of safe calls
/// can read outside the buffer.
///
/// # Examples
///
/// ```
/// use rawview::{PrimitiveKind, RecordLayout, RecordView, RecordViewMut};
///
/// let layout = RecordLayout::new(&[
///     ("id", PrimitiveKind::U32),
///     ("balance", PrimitiveKind::I64),
/// ]);
///
/// let mut record = vec![0u8; layout.size()];
/// let mut view = RecordViewMut::new(&mut record, &layout)?;
/// view.write::<u32>(0, 17)?;
/// view.write::<i64>(1, -250)?;
///
/// let view = RecordView::new(&record, &layout)?;
/// assert_eq!(view.read::<u32>(0)?, 17);
/// assert_eq!(view.read::<i64>(1)?, -250);
/// # Ok::<(), rawview::ViewError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    bytes: &'a [u8],
    layout: &'a RecordLayout,
}

impl<'a> RecordView<'a> {
    /// Creates a view of `bytes` interpreted per `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if `layout.size()` exceeds
    /// `bytes.len()`.
    pub fn new(bytes: &'a [u8], layout: &'a RecordLayout) -> Result<Self> {
        if layout.size() > bytes.len() {
            return Err(ViewError::OutOfBounds {
                offset: 0,
                size: layout.size(),
                len: bytes.len(),
            });
        }
        Ok(Self { bytes, layout })
    }

    /// The layout this view interprets its bytes with.
    pub fn layout(&self) -> &'a RecordLayout {
        self.layout
    }

    /// Reads the scalar field at `index`.
    ///
    /// The load is unaligned-tolerant, so the buffer itself needs no
    /// particular alignment.
    ///
    /// # Errors
    ///
    /// [`ViewError::NoSuchField`] if `index` is not a field of the layout;
    /// [`ViewError::KindMismatch`] if the field's declared kind is not
    /// `T`'s kind (including the `Text`/`Seq` descriptor kinds, which this
    /// tier refuses).
    pub fn read<T: Scalar>(&self, index: usize) -> Result<T> {
        let descriptor = scalar_field::<T>(self.layout, index)?;
        let bytes = self.range(descriptor)?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Borrows the raw bytes of the field at `index`, any kind.
    ///
    /// # Errors
    ///
    /// [`ViewError::NoSuchField`] if `index` is not a field of the layout.
    pub fn field_bytes(&self, index: usize) -> Result<&'a [u8]> {
        let descriptor = self.layout.field(index).ok_or(ViewError::NoSuchField {
            index,
            field_count: self.layout.field_count(),
        })?;
        self.range(descriptor)
    }

    fn range(&self, descriptor: &FieldDescriptor) -> Result<&'a [u8]> {
        let bytes: &'a [u8] = self.bytes;
        bytes
            .get(descriptor.offset..descriptor.offset + descriptor.size())
            .ok_or(ViewError::OutOfBounds {
                offset: descriptor.offset,
                size: descriptor.size(),
                len: bytes.len(),
            })
    }
}

/// A mutable, bounds- and kind-checked view of one record's bytes.
///
/// Same contract as [`RecordView`], plus [`write`](Self::write).
#[derive(Debug)]
pub struct RecordViewMut<'a> {
    bytes: &'a mut [u8],
    layout: &'a RecordLayout,
}

impl<'a> RecordViewMut<'a> {
    /// Creates a mutable view of `bytes` interpreted per `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OutOfBounds`] if `layout.size()` exceeds
    /// `bytes.len()`.
    pub fn new(bytes: &'a mut [u8], layout: &'a RecordLayout) -> Result<Self> {
        if layout.size() > bytes.len() {
            return Err(ViewError::OutOfBounds {
                offset: 0,
                size: layout.size(),
                len: bytes.len(),
            });
        }
        Ok(Self { bytes, layout })
    }

    /// Reborrows this view read-only.
    pub fn as_view(&self) -> RecordView<'_> {
        RecordView {
            bytes: self.bytes,
            layout: self.layout,
        }
    }

    /// The layout this view interprets its bytes with.
    pub fn layout(&self) -> &'a RecordLayout {
        self.layout
    }

    /// Reads the scalar field at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`RecordView::read`].
    pub fn read<T: Scalar>(&self, index: usize) -> Result<T> {
        self.as_view().read(index)
    }

    /// Borrows the raw bytes of the field at `index`, any kind.
    ///
    /// # Errors
    ///
    /// Same as [`RecordView::field_bytes`].
    pub fn field_bytes(&self, index: usize) -> Result<&[u8]> {
        let descriptor = self.layout.field(index).ok_or(ViewError::NoSuchField {
            index,
            field_count: self.layout.field_count(),
        })?;
        self.bytes
            .get(descriptor.offset..descriptor.offset + descriptor.size())
            .ok_or(ViewError::OutOfBounds {
                offset: descriptor.offset,
                size: descriptor.size(),
                len: self.bytes.len(),
            })
    }

    /// Writes `value` into the scalar field at `index`.
    ///
    /// All other bytes of the buffer are left untouched; the store is
    /// unaligned-tolerant.
    ///
    /// # Errors
    ///
    /// Same as [`RecordView::read`].
    pub fn write<T: Scalar>(&mut self, index: usize, value: T) -> Result<()> {
        let layout = self.layout;
        let descriptor = scalar_field::<T>(layout, index)?;
        let len = self.bytes.len();
        let slot = self
            .bytes
            .get_mut(descriptor.offset..descriptor.offset + descriptor.size())
            .ok_or(ViewError::OutOfBounds {
                offset: descriptor.offset,
                size: descriptor.size(),
                len,
            })?;
        slot.copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PrimitiveKind;

    fn account_layout() -> RecordLayout {
        RecordLayout::new(&[
            ("id", PrimitiveKind::U32),
            ("age", PrimitiveKind::I64),
            ("score", PrimitiveKind::F64),
        ])
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let layout = account_layout();
        let bytes = vec![0u8; layout.size() - 1];

        let err = RecordView::new(&bytes, &layout).unwrap_err();
        assert_eq!(
            err,
            ViewError::OutOfBounds {
                offset: 0,
                size: layout.size(),
                len: layout.size() - 1,
            }
        );
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let layout = account_layout();
        let mut bytes = vec![0u8; layout.size()];

        let mut view = RecordViewMut::new(&mut bytes, &layout).unwrap();
        view.write::<u32>(0, 7).unwrap();
        view.write::<i64>(1, -3).unwrap();
        view.write::<f64>(2, 1.5).unwrap();

        assert_eq!(view.read::<u32>(0).unwrap(), 7);
        assert_eq!(view.read::<i64>(1).unwrap(), -3);
        assert_eq!(view.read::<f64>(2).unwrap(), 1.5);
    }

    #[test]
    fn test_write_stores_at_layout_offset() {
        let layout = account_layout();
        let mut bytes = vec![0u8; layout.size()];

        let mut view = RecordViewMut::new(&mut bytes, &layout).unwrap();
        view.write::<i64>(1, 34).unwrap();

        let offset = layout.offset_of(1).unwrap();
        assert_eq!(&bytes[offset..offset + 8], 34i64.to_ne_bytes());
    }

    #[test]
    fn test_write_leaves_other_fields_untouched() {
        let layout = account_layout();
        let mut bytes = vec![0xAB; layout.size()];

        let mut view = RecordViewMut::new(&mut bytes, &layout).unwrap();
        let age_before = view.field_bytes(1).unwrap().to_vec();
        let score_before = view.field_bytes(2).unwrap().to_vec();

        view.write::<u32>(0, 0xFFFF_FFFF).unwrap();

        assert_eq!(view.field_bytes(1).unwrap(), age_before);
        assert_eq!(view.field_bytes(2).unwrap(), score_before);
    }

    #[test]
    fn test_no_such_field() {
        let layout = account_layout();
        let bytes = vec![0u8; layout.size()];
        let view = RecordView::new(&bytes, &layout).unwrap();

        let err = view.read::<u32>(3).unwrap_err();
        assert_eq!(
            err,
            ViewError::NoSuchField {
                index: 3,
                field_count: 3,
            }
        );
    }

    #[test]
    fn test_kind_mismatch_on_wrong_scalar() {
        let layout = account_layout();
        let bytes = vec![0u8; layout.size()];
        let view = RecordView::new(&bytes, &layout).unwrap();

        let err = view.read::<u32>(1).unwrap_err();
        assert_eq!(
            err,
            ViewError::KindMismatch {
                expected: PrimitiveKind::U32,
                actual: PrimitiveKind::I64,
            }
        );
    }

    #[test]
    fn test_descriptor_fields_refused() {
        let layout = RecordLayout::new(&[
            ("name", PrimitiveKind::Text),
            ("age", PrimitiveKind::I64),
        ]);
        let bytes = vec![0u8; layout.size()];
        let view = RecordView::new(&bytes, &layout).unwrap();

        let err = view.read::<u64>(0).unwrap_err();
        assert_eq!(
            err,
            ViewError::KindMismatch {
                expected: PrimitiveKind::U64,
                actual: PrimitiveKind::Text,
            }
        );

        // The descriptor's raw bytes stay inspectable.
        let name_bytes = view.field_bytes(0).unwrap();
        assert_eq!(name_bytes.len(), PrimitiveKind::Text.size());
    }

    #[test]
    fn test_field_bytes_spans_exact_range() {
        let layout = account_layout();
        let bytes: Vec<u8> = (0..layout.size() as u8).collect();
        let view = RecordView::new(&bytes, &layout).unwrap();

        let offset = layout.offset_of(2).unwrap();
        assert_eq!(view.field_bytes(2).unwrap(), &bytes[offset..offset + 8]);
    }

    #[test]
    fn test_view_over_oversized_buffer() {
        let layout = account_layout();
        let mut bytes = vec![0u8; layout.size() + 13];

        let mut view = RecordViewMut::new(&mut bytes, &layout).unwrap();
        view.write::<u32>(0, 1).unwrap();
        assert_eq!(view.read::<u32>(0).unwrap(), 1);
    }
}
