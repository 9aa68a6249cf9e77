//! # Bitmap Engine - field presence encoding
//!
//! ## Purpose
//!
//! Translates between the set of present data elements and the wire bitmap:
//! 8 bytes covering fields 1-64, MSB-first (bit 1 = most significant bit of
//! byte 0), optionally followed by a second 8 bytes covering 65-128. Bit 1
//! is metadata - it signals that the secondary bitmap follows - and is never
//! reported or accepted as a data field.

use crate::error::{CodecError, CodecResult};

/// Wire size of one bitmap.
pub const BITMAP_BYTES: usize = 8;

/// Ascending field numbers whose bit is set in an 8- or 16-byte bitmap.
///
/// Bit 1 is skipped regardless of its value: it only means "secondary bitmap
/// follows", and malformed peers that set it as a data bit must not leak a
/// phantom field 1 into the result.
pub(crate) fn active_fields(map: &[u8]) -> Vec<u8> {
    let bits = map.len() * 8;
    (2..=bits)
        .filter(|&bit| map[(bit - 1) / 8] >> (7 - ((bit - 1) % 8)) & 1 == 1)
        .map(|bit| bit as u8)
        .collect()
}

/// Decode the bitmap(s) at `offset`, returning the ascending present-field
/// list and the number of bytes consumed (8 or 16).
pub fn decode_bitmap(data: &[u8], offset: usize) -> CodecResult<(Vec<u8>, usize)> {
    let primary = data
        .get(offset..offset + BITMAP_BYTES)
        .ok_or_else(|| {
            CodecError::truncated(
                offset + BITMAP_BYTES,
                data.len(),
                "primary bitmap",
            )
        })?;

    let secondary_present = primary[0] & 0x80 != 0;
    let consumed = if secondary_present {
        2 * BITMAP_BYTES
    } else {
        BITMAP_BYTES
    };

    let map = data.get(offset..offset + consumed).ok_or_else(|| {
        CodecError::truncated(offset + consumed, data.len(), "secondary bitmap")
    })?;

    Ok((active_fields(map), consumed))
}

/// Encode the present-field set into 8 or 16 bitmap bytes.
///
/// Bit 1 of the primary bitmap is set exactly when any field >= 65 is
/// present. Field numbers outside 2-128 are rejected.
pub fn encode_bitmap(fields: &[u8]) -> CodecResult<Vec<u8>> {
    let secondary = fields.iter().any(|&field| field >= 65);
    let mut map = vec![0u8; if secondary { 2 * BITMAP_BYTES } else { BITMAP_BYTES }];

    if secondary {
        map[0] |= 0x80;
    }
    for &field in fields {
        if !(2..=128).contains(&field) {
            return Err(CodecError::InvalidField { field });
        }
        let bit = field as usize - 1;
        map[bit / 8] |= 0x80 >> (bit % 8);
    }

    Ok(map)
}
