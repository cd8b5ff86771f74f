// src/field/handle.rs
//! Unchecked typed field handles.
//!
//! A [`FieldHandle`] is a typed pointer into a [`RawRegion`]: the region's
//! base plus a byte offset, reinterpreted as a `T`. Every access is `unsafe`
//! and performs no runtime validation in release builds; the contract is the
//! caller's to uphold. Debug builds add assertions that catch alignment
//! misuse where the operation requires alignment.
//!
//! [`RawRegion`]: crate::region::RawRegion

use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// A typed handle onto one field (or sequence element) inside a region.
///
/// Handles are `Copy` and cheap to pass around. A handle created through a
/// region derived by [`RawRegion::of`] must never be written through; that
/// rule is inherited from the region, not re-checked here.
///
/// `read` and `write` tolerate unaligned addresses. `replace`, `as_ref` and
/// `as_mut` do not: they produce references (or move out of the slot) and
/// so require the address to satisfy `align_of::<T>()`.
///
/// [`RawRegion::of`]: crate::region::RawRegion::of
///
/// # Examples
///
/// ```
/// use rawview::RawRegion;
///
/// #[repr(C)]
/// struct Counter {
///     hits: u64,
/// }
///
/// let mut counter = Counter { hits: 0 };
/// let region = RawRegion::of_mut(&mut counter);
///
/// // SAFETY: offset 0 holds the initialized u64 field.
/// unsafe {
///     let hits = region.field::<u64>(core::mem::offset_of!(Counter, hits));
///     hits.write(hits.read() + 1);
/// }
/// assert_eq!(counter.hits, 1);
/// ```
#[derive(Debug)]
pub struct FieldHandle<'a, T> {
    ptr: NonNull<T>,
    _region: PhantomData<&'a ()>,
}

impl<T> Clone for FieldHandle<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldHandle<'_, T> {}

impl<'a, T> FieldHandle<'a, T> {
    pub(crate) fn from_ptr(ptr: NonNull<T>) -> Self {
        Self {
            ptr,
            _region: PhantomData,
        }
    }

    /// The raw address this handle points at.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reads the value out of the slot.
    ///
    /// Uses an unaligned load, so the address need not satisfy
    /// `align_of::<T>()`.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - the slot holds an initialized, valid `T`;
    /// - no `&mut` borrow of the same bytes is live elsewhere.
    #[inline(always)]
    pub unsafe fn read(&self) -> T
    where
        T: Copy,
    {
        unsafe { ptr::read_unaligned(self.ptr.as_ptr()) }
    }

    /// Writes `value` into the slot, overwriting the previous bytes without
    /// dropping them.
    ///
    /// Uses an unaligned store. `T: Copy` keeps the overwrite leak-free; for
    /// types with destructors use [`replace`](Self::replace).
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - the handle's region was derived with write access
    ///   ([`RawRegion::of_mut`] or a writable [`from_raw_parts`] region);
    /// - no other borrow of the same bytes is live elsewhere.
    ///
    /// [`RawRegion::of_mut`]: crate::region::RawRegion::of_mut
    /// [`from_raw_parts`]: crate::region::RawRegion::from_raw_parts
    #[inline(always)]
    pub unsafe fn write(&self, value: T)
    where
        T: Copy,
    {
        unsafe { ptr::write_unaligned(self.ptr.as_ptr(), value) }
    }

    /// Moves `value` into the slot and returns the previous value.
    ///
    /// The previous value is returned rather than dropped, so this is the
    /// right operation for owning types such as `String`: drop (or keep) the
    /// returned value and storage is neither leaked nor double-freed.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - the slot holds an initialized, valid `T`;
    /// - the address satisfies `align_of::<T>()`;
    /// - the handle's region was derived with write access and no other
    ///   borrow of the same bytes is live elsewhere.
    #[inline(always)]
    pub unsafe fn replace(&self, value: T) -> T {
        debug_assert!(
            self.ptr.as_ptr().is_aligned(),
            "replace: address {:p} not aligned to {}",
            self.ptr,
            std::mem::align_of::<T>()
        );

        unsafe { ptr::replace(self.ptr.as_ptr(), value) }
    }

    /// Borrows the slot as `&T` for the region's source lifetime.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - the slot holds an initialized, valid `T`;
    /// - the address satisfies `align_of::<T>()`;
    /// - no `&mut` borrow of the same bytes is live while the reference is.
    #[inline(always)]
    pub unsafe fn as_ref(&self) -> &'a T {
        debug_assert!(
            self.ptr.as_ptr().is_aligned(),
            "as_ref: address {:p} not aligned to {}",
            self.ptr,
            std::mem::align_of::<T>()
        );

        unsafe { self.ptr.as_ref() }
    }

    /// Borrows the slot as `&mut T` for the region's source lifetime.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - the slot holds an initialized, valid `T`;
    /// - the address satisfies `align_of::<T>()`;
    /// - the handle's region was derived with write access;
    /// - no other borrow of the same bytes is live while the reference is.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn as_mut(&self) -> &'a mut T {
        debug_assert!(
            self.ptr.as_ptr().is_aligned(),
            "as_mut: address {:p} not aligned to {}",
            self.ptr,
            std::mem::align_of::<T>()
        );

        unsafe { &mut *self.ptr.as_ptr() }
    }
}
