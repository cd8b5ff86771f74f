// src/region.rs
//! Raw regions: non-owning `(base, length)` aliases over existing memory.
//!
//! A [`RawRegion`] never owns the memory it names. It is created on demand
//! from a live value and carries that borrow's lifetime, so the borrow
//! checker enforces the core validity rule: the region (and every handle
//! derived from it) dies before the source value can be moved, resized, or
//! deallocated. The [`RawRegion::from_raw_parts`] escape hatch opts out of
//! that enforcement and falls back to caller discipline.
//!
//! Regions embed [`NonNull`], so they are `!Send + !Sync`; handing one to
//! another thread is rejected at compile time.

use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::field::FieldHandle;

/// A non-owning alias over a block of memory owned elsewhere.
///
/// The region is the root of the unchecked tier: typed [`FieldHandle`]s are
/// derived from it by offset or element index. Derivation and access are
/// `unsafe`; the region itself only records where the memory is and how long
/// it is.
///
/// # Examples
///
/// ```
/// use rawview::RawRegion;
///
/// #[repr(C)]
/// struct Pair {
///     a: u32,
///     b: u32,
/// }
///
/// let mut pair = Pair { a: 1, b: 2 };
/// let region = RawRegion::of_mut(&mut pair);
/// assert_eq!(region.len(), core::mem::size_of::<Pair>());
///
/// // SAFETY: offset 4 + size 4 lies inside the region and holds a u32.
/// unsafe {
///     let b = region.field::<u32>(core::mem::offset_of!(Pair, b));
///     b.write(7);
/// }
/// assert_eq!(pair.b, 7);
/// ```
#[derive(Debug)]
pub struct RawRegion<'a> {
    base: NonNull<u8>,
    len: usize,
    _source: PhantomData<&'a mut [u8]>,
}

impl<'a> RawRegion<'a> {
    /// Creates a read-only region aliasing `value`'s memory.
    ///
    /// The length is `size_of_val(value)`, so slices and other unsized
    /// values cover all of their contents.
    ///
    /// Handles derived from a read-only region must not be written through;
    /// doing so is undefined behavior. Use [`of_mut`](Self::of_mut) when
    /// write access is needed.
    pub fn of<T: ?Sized>(value: &'a T) -> Self {
        let len = mem::size_of_val(value);
        Self {
            base: NonNull::from(value).cast::<u8>(),
            len,
            _source: PhantomData,
        }
    }

    /// Creates a writable region aliasing `value`'s memory.
    ///
    /// The source stays mutably borrowed until the last use of the region or
    /// of any handle derived from it.
    pub fn of_mut<T: ?Sized>(value: &'a mut T) -> Self {
        let len = mem::size_of_val(value);
        Self {
            base: NonNull::from(value).cast::<u8>(),
            len,
            _source: PhantomData,
        }
    }

    /// Creates a region from a raw base pointer and length.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee:
    /// - `base` points to `len` bytes of memory that stay valid (not moved,
    ///   resized, or deallocated) for the chosen lifetime `'a`;
    /// - writes go through handles only if the memory is writable and not
    ///   aliased by an active shared borrow.
    #[inline]
    pub unsafe fn from_raw_parts(base: NonNull<u8>, len: usize) -> Self {
        Self {
            base,
            len,
            _source: PhantomData,
        }
    }

    /// The region's base address.
    #[inline(always)]
    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// The region's length in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the region covers no bytes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Derives a typed handle onto the field at `offset`.
    ///
    /// The handle outlives the region value itself; it is tied to the
    /// region's *source* borrow, so independently derived handles over the
    /// same bytes may coexist.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `offset + size_of::<T>() <= self.len()`, and
    /// the byte range holds a valid `T` whenever the handle reads or borrows
    /// it. Out-of-range offsets are undefined behavior in release builds; a
    /// debug assertion catches them in debug builds only.
    #[inline]
    pub unsafe fn field<T>(&self, offset: usize) -> FieldHandle<'a, T> {
        debug_assert!(
            offset
                .checked_add(mem::size_of::<T>())
                .is_some_and(|end| end <= self.len),
            "field: offset {} + size {} > region length {}",
            offset,
            mem::size_of::<T>(),
            self.len
        );

        let ptr = unsafe { self.base.as_ptr().add(offset) };
        // SAFETY: base is non-null and add() stays in bounds per the caller
        // contract, so the result cannot wrap to null.
        unsafe { FieldHandle::from_ptr(NonNull::new_unchecked(ptr.cast::<T>())) }
    }

    /// Derives a typed handle onto the element at `index` of a homogeneous
    /// sequence starting at the region base.
    ///
    /// The element stride is `size_of::<T>()`, which already includes any
    /// trailing padding; the address is `base + index * size_of::<T>()`.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `(index + 1) * size_of::<T>() <= self.len()`,
    /// i.e. `index` is in bounds for the sequence the region was built from.
    /// `index == length` or beyond is undefined behavior.
    #[inline]
    pub unsafe fn element<T>(&self, index: usize) -> FieldHandle<'a, T> {
        debug_assert!(
            index
                .checked_add(1)
                .and_then(|n| n.checked_mul(mem::size_of::<T>()))
                .is_some_and(|end| end <= self.len),
            "element: index {} out of range for region of {} bytes",
            index,
            self.len
        );

        unsafe { self.field::<T>(index * mem::size_of::<T>()) }
    }
}
