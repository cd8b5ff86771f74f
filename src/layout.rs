// src/layout.rs
//! Record layout descriptors with computed field offsets.
//!
//! A [`RecordLayout`] describes the in-memory shape of a `#[repr(C)]` record:
//! an ordered list of named fields whose byte offsets are computed from the
//! declaration order and each field's host size/alignment. Offsets are never
//! hardcoded; they are derived with the same rules the compiler applies
//! (align each field up to its alignment, round the total size up to the
//! struct alignment), so a layout built from the true field order agrees with
//! `core::mem::offset_of!`.
//!
//! Rust's default `repr(Rust)` may reorder fields. Records accessed through a
//! layout must therefore be `#[repr(C)]`.

use std::mem;

use bytemuck::Pod;

/// The kinds of field a record layout can describe.
///
/// Scalar kinds cover the fixed-size primitives. `Text` and `Seq` are the
/// fixed-size *descriptors* of variable-length data: the pointer-carrying
/// handle (`String`, `Vec<T>`) embedded in the record, not the heap data it
/// points to. All sizes and alignments are measured on the host, never
/// assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 8 bit unsigned int
    U8,
    /// 8 bit signed int
    I8,
    /// 16 bit unsigned int
    U16,
    /// 16 bit signed int
    I16,
    /// 32 bit unsigned int
    U32,
    /// 32 bit signed int
    I32,
    /// 64 bit unsigned int
    U64,
    /// 64 bit signed int
    I64,
    /// Pointer-sized unsigned int
    Usize,
    /// Pointer-sized signed int
    Isize,
    /// 32 bit float
    F32,
    /// 64 bit float
    F64,
    /// Owned UTF-8 text handle (`String`)
    Text,
    /// Owned sequence handle (`Vec<T>`; all element types share one shape)
    Seq,
}

impl PrimitiveKind {
    /// The size of the field in bytes, as measured on the host.
    pub fn size(&self) -> usize {
        match self {
            Self::U8 => mem::size_of::<u8>(),
            Self::I8 => mem::size_of::<i8>(),
            Self::U16 => mem::size_of::<u16>(),
            Self::I16 => mem::size_of::<i16>(),
            Self::U32 => mem::size_of::<u32>(),
            Self::I32 => mem::size_of::<i32>(),
            Self::U64 => mem::size_of::<u64>(),
            Self::I64 => mem::size_of::<i64>(),
            Self::Usize => mem::size_of::<usize>(),
            Self::Isize => mem::size_of::<isize>(),
            Self::F32 => mem::size_of::<f32>(),
            Self::F64 => mem::size_of::<f64>(),
            Self::Text => mem::size_of::<String>(),
            Self::Seq => mem::size_of::<Vec<u8>>(),
        }
    }

    /// The alignment of the field in bytes, as measured on the host.
    pub fn align(&self) -> usize {
        match self {
            Self::U8 => mem::align_of::<u8>(),
            Self::I8 => mem::align_of::<i8>(),
            Self::U16 => mem::align_of::<u16>(),
            Self::I16 => mem::align_of::<i16>(),
            Self::U32 => mem::align_of::<u32>(),
            Self::I32 => mem::align_of::<i32>(),
            Self::U64 => mem::align_of::<u64>(),
            Self::I64 => mem::align_of::<i64>(),
            Self::Usize => mem::align_of::<usize>(),
            Self::Isize => mem::align_of::<isize>(),
            Self::F32 => mem::align_of::<f32>(),
            Self::F64 => mem::align_of::<f64>(),
            Self::Text => mem::align_of::<String>(),
            Self::Seq => mem::align_of::<Vec<u8>>(),
        }
    }

    /// Returns `true` for the fixed-size scalar kinds.
    ///
    /// Only scalar fields can be read or written through the checked tier;
    /// `Text` and `Seq` descriptors own resources and are reachable only
    /// through the unchecked tier.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Text | Self::Seq)
    }
}

/// Rust scalar types that can be accessed through the checked tier.
///
/// The `Pod` supertrait is what makes the checked tier fully safe: every bit
/// pattern is a valid value, so a bounds- and kind-validated read can never
/// produce an invalid one.
pub trait Scalar: Pod {
    /// The layout kind corresponding to this type.
    const KIND: PrimitiveKind;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;
            }
        )*
    };
}

impl_scalar! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    usize => Usize,
    isize => Isize,
    f32 => F32,
    f64 => F64,
}

/// A single field in a record layout: name, computed byte offset, kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, for lookup and diagnostics.
    pub name: &'static str,
    /// Byte offset from the start of the record.
    pub offset: usize,
    /// The field's kind.
    pub kind: PrimitiveKind,
}

impl FieldDescriptor {
    /// The field's size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// The field's alignment in bytes.
    #[inline]
    pub fn align(&self) -> usize {
        self.kind.align()
    }
}

/// The computed memory layout of a `#[repr(C)]` record.
///
/// Offsets are computed once at construction, in declaration order, with each
/// field aligned up to its own alignment and the total size rounded up to the
/// record alignment, the same rules `#[repr(C)]` applies.
///
/// # Examples
///
/// ```
/// use rawview::{PrimitiveKind, RecordLayout};
///
/// #[repr(C)]
/// struct User {
///     name: String,
///     age: i64,
///     animals: Vec<String>,
/// }
///
/// let layout = RecordLayout::new(&[
///     ("name", PrimitiveKind::Text),
///     ("age", PrimitiveKind::I64),
///     ("animals", PrimitiveKind::Seq),
/// ]);
///
/// assert_eq!(layout.offset_of(0), Some(core::mem::offset_of!(User, name)));
/// assert_eq!(layout.offset_of(1), Some(core::mem::offset_of!(User, age)));
/// assert_eq!(layout.offset_of(2), Some(core::mem::offset_of!(User, animals)));
/// assert_eq!(layout.size(), core::mem::size_of::<User>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    fields: Vec<FieldDescriptor>,
    size: usize,
    align: usize,
}

impl RecordLayout {
    /// Computes a layout from fields given in declaration order.
    ///
    /// Offsets are monotonically non-decreasing:
    /// `offset[i + 1] >= offset[i] + size[i]` holds for every adjacent pair,
    /// with equality unless alignment padding intervenes.
    pub fn new(fields: &[(&'static str, PrimitiveKind)]) -> Self {
        let mut descriptors = Vec::with_capacity(fields.len());
        let mut offset = 0;
        let mut align = 1;

        for &(name, kind) in fields {
            offset = align_up(offset, kind.align());
            descriptors.push(FieldDescriptor { name, offset, kind });
            offset += kind.size();
            align = align.max(kind.align());
        }

        Self {
            fields: descriptors,
            size: align_up(offset, align),
            align,
        }
    }

    /// Returns the descriptor for the field at `index`.
    #[inline]
    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Returns the byte offset of the field at `index`.
    #[inline]
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        self.fields.get(index).map(|f| f.offset)
    }

    /// Returns the index of the field named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields in the layout.
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All field descriptors, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Total size of the record in bytes, including trailing padding.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alignment of the record in bytes.
    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }
}

/// Rounds `offset` up to the next multiple of `align`.
///
/// `align` must be a power of two (every Rust alignment is).
#[inline]
fn align_up(offset: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (offset + align - 1) & !(align - 1)
}
