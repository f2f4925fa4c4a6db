//! Byte-region validation for the zero-copy loading path
//!
//! Reinterpreting a mapped byte region as f64 values is the single
//! largest hazard of the format. These helpers keep every such cast
//! behind length, overflow, and alignment checks; callers never touch a
//! raw pointer.

use crate::DmatError;

/// Validate that a byte length describes a whole number of `T` elements
///
/// Rejects lengths that are not a multiple of the element size and
/// element counts large enough to overflow downstream offset math.
pub const fn validate_array_bounds<T>(byte_len: usize) -> Result<usize, DmatError> {
    let element_size = core::mem::size_of::<T>();

    if byte_len % element_size != 0 {
        return Err(DmatError::Misaligned);
    }

    let count = byte_len / element_size;

    // Conservative cap so later byte-offset calculations cannot overflow
    if count > usize::MAX / 8 {
        return Err(DmatError::SizeOverflow);
    }

    Ok(count)
}

/// Validate that a pointer meets the alignment requirement of `T`
pub fn validate_alignment<T>(ptr: *const u8) -> Result<(), DmatError> {
    if (ptr as usize) % core::mem::align_of::<T>() != 0 {
        return Err(DmatError::Misaligned);
    }
    Ok(())
}

/// Reinterpret a byte region as f64 values
///
/// This is the only sanctioned byte-to-value cast in the crate. It fails
/// with [`DmatError::Misaligned`] instead of producing a skewed view when
/// the region is not a whole number of values or is not suitably aligned.
/// The returned slice borrows `bytes` and carries its lifetime.
pub fn cast_values(bytes: &[u8]) -> Result<&[f64], DmatError> {
    let count = validate_array_bounds::<f64>(bytes.len())?;
    let values: &[f64] = bytemuck::try_cast_slice(bytes).map_err(|_| DmatError::Misaligned)?;
    debug_assert_eq!(values.len(), count);
    Ok(values)
}
