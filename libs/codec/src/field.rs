//! # Field Codec - single data element serialization
//!
//! ## Purpose
//!
//! Serializes one field value to wire bytes per its catalog descriptor and
//! reads it back, reporting exactly how many bytes were consumed. Fixed
//! fields pad to their declared width (numerics left-zero, text right-space);
//! variable fields carry a 2/3/4-digit decimal ASCII length prefix. All
//! content - including binary-typed fields - travels as ASCII text, binary
//! values as hex characters.
//!
//! The same routines serve composite subfields: extension payloads are hex
//! text, so the byte-oriented decoder applies unchanged one level down.

use crate::error::{CodecError, CodecResult};
use types::catalog::{self, FieldDescriptor, LengthKind};

/// Encode one top-level field, appending its wire bytes to `out`.
pub fn encode_field(field: u8, value: &str, out: &mut Vec<u8>) -> CodecResult<()> {
    let desc = catalog::descriptor(field).ok_or_else(|| CodecError::unknown_field(field))?;
    encode_value(&field.to_string(), desc, value, out)
}

/// Decode one top-level field at `offset`, returning the value and the
/// number of bytes consumed.
pub fn decode_field(field: u8, data: &[u8], offset: usize) -> CodecResult<(String, usize)> {
    let desc = catalog::descriptor(field).ok_or_else(|| CodecError::unknown_field(field))?;
    decode_value(&field.to_string(), desc, data, offset)
}

/// Descriptor-driven encode shared by fields and composite subfields.
pub(crate) fn encode_value(
    label: &str,
    desc: &FieldDescriptor,
    value: &str,
    out: &mut Vec<u8>,
) -> CodecResult<()> {
    match desc.length {
        LengthKind::Fixed => {
            let width = desc.max_len as usize;
            if value.len() > width {
                return Err(CodecError::too_long(label, value.len(), width));
            }
            if desc.content.pads_left() {
                for _ in value.len()..width {
                    out.push(b'0');
                }
                out.extend_from_slice(value.as_bytes());
            } else {
                out.extend_from_slice(value.as_bytes());
                for _ in value.len()..width {
                    out.push(b' ');
                }
            }
        }
        kind => {
            let capacity = desc.capacity();
            if value.len() > capacity {
                return Err(CodecError::too_long(label, value.len(), capacity));
            }
            let digits = kind.prefix_digits();
            let prefix = format!("{:0width$}", value.len(), width = digits);
            out.extend_from_slice(prefix.as_bytes());
            out.extend_from_slice(value.as_bytes());
        }
    }
    Ok(())
}

/// Descriptor-driven decode shared by fields and composite subfields.
pub(crate) fn decode_value(
    label: &str,
    desc: &FieldDescriptor,
    data: &[u8],
    offset: usize,
) -> CodecResult<(String, usize)> {
    let (len, prefix_len) = match desc.length {
        LengthKind::Fixed => (desc.max_len as usize, 0),
        kind => {
            let digits = kind.prefix_digits();
            let prefix = data.get(offset..offset + digits).ok_or_else(|| {
                CodecError::truncated(offset + digits, data.len(), format!("field {label} length prefix"))
            })?;
            if !prefix.iter().all(u8::is_ascii_digit) {
                return Err(CodecError::malformed_value(
                    label,
                    "length prefix is not decimal digits",
                ));
            }
            let len = prefix
                .iter()
                .fold(0usize, |acc, &d| acc * 10 + (d - b'0') as usize);
            (len, digits)
        }
    };

    let start = offset + prefix_len;
    let body = data.get(start..start + len).ok_or_else(|| {
        CodecError::truncated(start + len, data.len(), format!("field {label} body"))
    })?;

    if !body.is_ascii() {
        return Err(CodecError::malformed_value(
            label,
            "field body is not valid ASCII text",
        ));
    }
    // ASCII was just checked, so this cannot fail
    let value = std::str::from_utf8(body)
        .map_err(|_| CodecError::malformed_value(label, "field body is not valid ASCII text"))?;

    Ok((value.to_owned(), prefix_len + len))
}
