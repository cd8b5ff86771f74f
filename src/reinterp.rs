// src/reinterp.rs
//! Buffer Reinterpreter: zero-copy conversion between text and bytes.
//!
//! Every function here returns a value that aliases (or takes over) the
//! source's storage. Nothing is allocated and nothing is copied; the
//! conversions are O(1) pointer reinterpretations. The price is the usual
//! one: a byte view and a text view of the same storage observe each
//! other's mutations, and the bytes must be valid UTF-8 whenever they are
//! interpreted as text.
//!
//! The checked conversions ([`bytes_as_text`], [`bytes_into_text`]) validate
//! UTF-8 and fail with [`ViewError::InvalidEncoding`]; the unchecked ones
//! skip validation in release builds and make the encoding a caller
//! obligation, with a `debug_assert!` backstop in debug builds.

use crate::error::{Result, ViewError};

/// Reinterprets text as its underlying bytes.
///
/// The returned slice aliases `text`'s storage: same address, same length,
/// zero allocation.
///
/// # Examples
///
/// ```
/// let text = "neato burrito";
/// let bytes = rawview::reinterp::text_as_bytes(text);
///
/// assert_eq!(bytes.len(), text.len());
/// assert_eq!(bytes.as_ptr(), text.as_ptr());
/// ```
#[inline(always)]
pub fn text_as_bytes(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Reinterprets text as its underlying bytes, mutably.
///
/// # Safety
///
/// Caller MUST guarantee: the bytes are valid UTF-8 again by the time the
/// returned borrow ends. Text holding invalid UTF-8 is undefined behavior
/// once used as text.
#[inline(always)]
pub unsafe fn text_as_bytes_mut(text: &mut str) -> &mut [u8] {
    unsafe { text.as_bytes_mut() }
}

/// Reinterprets bytes as text after validating the encoding.
///
/// Still zero-copy on success: the returned text aliases `bytes`' storage.
///
/// # Errors
///
/// Returns [`ViewError::InvalidEncoding`] when the bytes are not valid
/// UTF-8, carrying the length of the valid prefix.
#[inline]
pub fn bytes_as_text(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| ViewError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}

/// Reinterprets bytes as text without validating the encoding.
///
/// # Safety
///
/// Caller MUST guarantee: `bytes` is valid UTF-8. No validation happens in
/// release builds; a `debug_assert!` validates in debug builds only.
#[inline(always)]
pub unsafe fn bytes_as_text_unchecked(bytes: &[u8]) -> &str {
    debug_assert!(
        std::str::from_utf8(bytes).is_ok(),
        "bytes_as_text_unchecked: input is not valid UTF-8"
    );

    unsafe { std::str::from_utf8_unchecked(bytes) }
}

/// Converts owned text into its backing byte buffer.
///
/// The allocation moves, it is not copied: the buffer keeps the text's
/// address and capacity.
pub fn text_into_bytes(text: String) -> Vec<u8> {
    text.into_bytes()
}

/// Converts an owned byte buffer into text after validating the encoding.
///
/// The allocation moves on success.
///
/// # Errors
///
/// Returns [`ViewError::InvalidEncoding`] when the bytes are not valid
/// UTF-8; the buffer is dropped in that case.
pub fn bytes_into_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ViewError::InvalidEncoding {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Converts an owned byte buffer into text without validating the encoding.
///
/// # Safety
///
/// Caller MUST guarantee: `bytes` is valid UTF-8. No validation happens in
/// release builds; a `debug_assert!` validates in debug builds only.
pub unsafe fn bytes_into_text_unchecked(bytes: Vec<u8>) -> String {
    debug_assert!(
        std::str::from_utf8(&bytes).is_ok(),
        "bytes_into_text_unchecked: input is not valid UTF-8"
    );

    unsafe { String::from_utf8_unchecked(bytes) }
}
