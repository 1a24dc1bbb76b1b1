//! `extern "C"` boundary for embedding this crate behind a native host
//! binding layer (an N-API addon, a Python extension module, and so on).
//!
//! Every export here takes raw pointers and lengths because that is what a
//! host binding layer actually has: a pinned view over buffers it owns. The
//! real validation and decision work all happens in safe Rust in
//! [`crate::calculate`] and [`crate::worker`]; these wrappers only
//! reconstruct slices and translate the result into a plain integer status
//! a C caller can branch on.
//!
//! Status codes:
//! - `0`: success.
//! - `1`: cyclic reference among the version vectors.
//! - `2`: a validation error; its message is written (UTF-8, truncated, not
//!   NUL-terminated) into `error_message`, and the written length is
//!   returned through `error_message_len`.

use std::slice;

use crate::{calculate, CalculateError};

/// Minimum number of sources a decision can be computed over.
pub const SOURCES_MIN: i32 = quorum_core::SOURCES_MIN as i32;
/// Maximum number of sources a decision can be computed over.
pub const SOURCES_MAX: i32 = quorum_core::SOURCES_MAX as i32;
/// Width in bytes of an id.
pub const ID: i32 = quorum_core::ID as i32;
/// Width in bytes of a version vector.
pub const VECTOR: i32 = quorum_core::VECTOR as i32;
/// Byte offset of the `leader` field within an encoded decision.
pub const LEADER_OFFSET: i32 = quorum_core::decision::LEADER_OFFSET as i32;
/// Byte offset of the `length` field within an encoded decision.
pub const LENGTH_OFFSET: i32 = quorum_core::decision::LENGTH_OFFSET as i32;
/// Byte offset of the `repair` field within an encoded decision.
pub const REPAIR_OFFSET: i32 = quorum_core::decision::REPAIR_OFFSET as i32;
/// Byte offset of the `forked` field within an encoded decision.
pub const FORKED_OFFSET: i32 = quorum_core::decision::FORKED_OFFSET as i32;
/// Size in bytes of an encoded decision.
pub const SIZE: i32 = quorum_core::decision::SIZE as i32;

/// A borrowed, host-owned byte buffer: a pointer and a length, the same
/// shape a host binding layer already has for a pinned source buffer.
#[repr(C)]
pub struct ByteSpan {
    pub ptr: *const u8,
    pub len: usize,
}

/// A borrowed, host-owned mutable byte buffer.
#[repr(C)]
pub struct MutByteSpan {
    pub ptr: *mut u8,
    pub len: usize,
}

/// Runs `calculate` synchronously over host-owned buffers.
///
/// `sources` must point to `sources_length` contiguous [`ByteSpan`]
/// records. On a validation error (status `2`), up to
/// `error_message_capacity` bytes of the error message are written into
/// `error_message` and the written length into `*error_message_len`; pass a
/// null `error_message` (with capacity `0`) to discard the message.
///
/// # Safety
///
/// - `sources` must be valid for reads of `sources_length` [`ByteSpan`]
///   records, and every span's `ptr`/`len` must describe a valid, readable
///   byte buffer.
/// - `quorum.ptr` and `target.ptr` must be valid for reads and writes of
///   `quorum.len` and `target.len` bytes respectively, and must not alias
///   any source buffer or each other.
/// - `error_message` must be valid for writes of `error_message_capacity`
///   bytes, or be null when `error_message_capacity` is `0`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn quorum_calculate(
    vector_offset: i64,
    object_size: i64,
    source_offset: i64,
    source_size: i64,
    sources: *const ByteSpan,
    sources_length: usize,
    quorum: MutByteSpan,
    quorum_offset: i64,
    target: MutByteSpan,
    target_offset: i64,
    error_message: *mut u8,
    error_message_capacity: usize,
    error_message_len: *mut usize,
) -> i32 {
    // SAFETY: forwarding this function's own safety contract.
    let spans = unsafe { slice::from_raw_parts(sources, sources_length) };
    let sources: Vec<&[u8]> = spans
        .iter()
        .map(|span| unsafe { slice::from_raw_parts(span.ptr, span.len) })
        .collect();
    // SAFETY: forwarding this function's own safety contract.
    let quorum = unsafe { slice::from_raw_parts_mut(quorum.ptr, quorum.len) };
    // SAFETY: forwarding this function's own safety contract.
    let target = unsafe { slice::from_raw_parts_mut(target.ptr, target.len) };

    let result = calculate(
        vector_offset,
        object_size,
        source_offset,
        source_size,
        &sources,
        quorum,
        quorum_offset,
        target,
        target_offset,
    );

    match result {
        Ok(()) => 0,
        Err(CalculateError::Core(_)) => 1,
        Err(err @ CalculateError::Validation(_)) => {
            // SAFETY: forwarding this function's own safety contract.
            unsafe {
                write_error_message(
                    &err.to_string(),
                    error_message,
                    error_message_capacity,
                    error_message_len,
                );
            }
            2
        }
    }
}

/// # Safety
///
/// Same contract as `error_message`/`error_message_capacity`/
/// `error_message_len` in [`quorum_calculate`].
unsafe fn write_error_message(
    message: &str,
    buf: *mut u8,
    capacity: usize,
    len_out: *mut usize,
) {
    let bytes = message.as_bytes();
    let written = bytes.len().min(capacity);
    if written > 0 {
        // SAFETY: forwarding this function's own safety contract.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf, written);
        }
    }
    if !len_out.is_null() {
        // SAFETY: forwarding this function's own safety contract.
        unsafe {
            *len_out = written;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(own: u8, pred: u8) -> [u8; 32] {
        let mut r = [0u8; 32];
        r[0..16].fill(own);
        r[16..32].fill(pred);
        r
    }

    #[test]
    fn exported_constants_match_the_core() {
        assert_eq!(SOURCES_MIN, 1);
        assert_eq!(SOURCES_MAX, 255);
        assert_eq!(ID, 16);
        assert_eq!(VECTOR, 32);
        assert_eq!(SIZE, 4);
    }

    #[test]
    fn successful_call_returns_zero_and_writes_outputs() {
        let s0 = record(0xAA, 0x00);
        let s1 = record(0xAA, 0x00);
        let spans = [
            ByteSpan {
                ptr: s0.as_ptr(),
                len: s0.len(),
            },
            ByteSpan {
                ptr: s1.as_ptr(),
                len: s1.len(),
            },
        ];
        let mut quorum = [0u8; 4];
        let mut target = [0u8; 32];

        let status = unsafe {
            quorum_calculate(
                0,
                32,
                0,
                32,
                spans.as_ptr(),
                spans.len(),
                MutByteSpan {
                    ptr: quorum.as_mut_ptr(),
                    len: quorum.len(),
                },
                0,
                MutByteSpan {
                    ptr: target.as_mut_ptr(),
                    len: target.len(),
                },
                0,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, 0);
        assert_eq!(quorum, [0, 2, 0, 0]);
        assert_eq!(target, s0);
    }

    #[test]
    fn cyclic_reference_returns_one() {
        let s0 = record(0xAA, 0xAA);
        let spans = [ByteSpan {
            ptr: s0.as_ptr(),
            len: s0.len(),
        }];
        let mut quorum = [0u8; 4];
        let mut target = [0u8; 32];

        let status = unsafe {
            quorum_calculate(
                0,
                32,
                0,
                32,
                spans.as_ptr(),
                spans.len(),
                MutByteSpan {
                    ptr: quorum.as_mut_ptr(),
                    len: quorum.len(),
                },
                0,
                MutByteSpan {
                    ptr: target.as_mut_ptr(),
                    len: target.len(),
                },
                0,
                std::ptr::null_mut(),
                0,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(status, 1);
    }

    #[test]
    fn validation_error_returns_two_and_writes_the_message() {
        let s0 = record(0xAA, 0x00);
        let spans = [ByteSpan {
            ptr: s0.as_ptr(),
            len: s0.len(),
        }];
        let mut quorum = [0u8; 4];
        let mut target = [0u8; 32];
        let mut message = [0u8; 64];
        let mut message_len = 0usize;

        let status = unsafe {
            quorum_calculate(
                -1,
                32,
                0,
                32,
                spans.as_ptr(),
                spans.len(),
                MutByteSpan {
                    ptr: quorum.as_mut_ptr(),
                    len: quorum.len(),
                },
                0,
                MutByteSpan {
                    ptr: target.as_mut_ptr(),
                    len: target.len(),
                },
                0,
                message.as_mut_ptr(),
                message.len(),
                &mut message_len,
            )
        };
        assert_eq!(status, 2);
        assert!(message_len > 0);
        let text = std::str::from_utf8(&message[..message_len]).unwrap();
        assert!(text.contains("vectorOffset"));
    }
}
