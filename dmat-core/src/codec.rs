//! Binary codec for DMAT fields
//!
//! All fields in a matrix file are little-endian: the two u32 header
//! counts and the f64 values of the data region. Decoding is an exact bit
//! transform; a field with fewer bytes available than it requires fails
//! with [`DmatError::ShortRead`] and is never zero-filled.

use crate::DmatError;

/// Size in bytes of one encoded matrix value
pub const VALUE_SIZE: usize = 8;

/// Size in bytes of one encoded header field
pub const FIELD_SIZE: usize = 4;

/// Decode a little-endian u32 from the start of `bytes`
pub fn decode_u32(bytes: &[u8]) -> Result<u32, DmatError> {
    if bytes.len() < FIELD_SIZE {
        return Err(DmatError::ShortRead {
            expected: FIELD_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Encode a u32 as little-endian bytes
pub const fn encode_u32(value: u32) -> [u8; FIELD_SIZE] {
    value.to_le_bytes()
}

/// Decode a little-endian f64 from the start of `bytes`
///
/// The conversion reinterprets the raw bits, so round-tripping through
/// [`encode_f64`] is exact for every value including NaN payloads.
pub fn decode_f64(bytes: &[u8]) -> Result<f64, DmatError> {
    if bytes.len() < VALUE_SIZE {
        return Err(DmatError::ShortRead {
            expected: VALUE_SIZE,
            actual: bytes.len(),
        });
    }
    let bits = u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]);
    Ok(f64::from_bits(bits))
}

/// Encode an f64 as little-endian bytes
pub const fn encode_f64(value: f64) -> [u8; VALUE_SIZE] {
    value.to_bits().to_le_bytes()
}
