//! # Extension Expander - composite field decoding
//!
//! ## Purpose
//!
//! Composite fields (field 127 and its ICC subfield 127.25) carry a nested
//! bitmap-plus-subfields structure inside a single hex-text payload: 16 hex
//! characters of sub-bitmap followed by subfield encodings described by the
//! field's own sub-catalog. Expansion is the same problem as top-level
//! unpacking, one level down, so it is a small recursive descent
//! parameterized by the sub-catalog prefix.
//!
//! ```text
//! field 127 raw text → [sub-bitmap][subfield…] → "127.25" → recurse
//!                                                      ↓
//!                                     "127.25.30" = "BAC24959" (leaf)
//! ```
//!
//! Expansion is explicit and opt-in: `unpack` never calls it. It mutates the
//! message in place, replacing the raw composite slot with dotted leaf keys,
//! and is therefore a no-op when invoked again on an already-expanded
//! message.

use crate::bitmap;
use crate::error::{CodecError, CodecResult};
use crate::field;
use std::collections::BTreeMap;
use tracing::debug;
use types::catalog;
use types::IsoMessage;

/// Hex characters in one nested sub-bitmap.
const SUB_BITMAP_CHARS: usize = 16;

/// Expand every composite field present in `msg` into dotted leaf keys,
/// removing the raw composite values.
///
/// Returns `Ok(true)` when at least one field was expanded and `Ok(false)`
/// when there was nothing to do (already expanded, or no composite field
/// present). All-or-nothing per message: on error no slot is consumed and
/// no dotted key is added.
pub fn rebuild_extensions(msg: &mut IsoMessage) -> CodecResult<bool> {
    let composites: Vec<u8> = msg
        .present_fields()
        .into_iter()
        .filter(|&f| catalog::descriptor(f).is_some_and(|d| d.composite))
        .collect();

    if composites.is_empty() {
        debug!("no raw composite field present, nothing to expand");
        return Ok(false);
    }

    let mut leaves = BTreeMap::new();
    for &field in &composites {
        let raw = msg
            .get(field)
            .ok_or_else(|| CodecError::unknown_field(field))?;
        expand(&field.to_string(), raw, &mut leaves)?;
    }

    for field in composites {
        msg.take(field);
    }
    for (path, value) in leaves {
        msg.set_path(path, value)
            .map_err(|e| CodecError::malformed_extension("127", e.to_string()))?;
    }
    Ok(true)
}

/// Recursively expand one composite payload into `out`.
fn expand(prefix: &str, payload: &str, out: &mut BTreeMap<String, String>) -> CodecResult<()> {
    if !payload.is_ascii() {
        return Err(CodecError::malformed_extension(
            prefix,
            "payload is not ASCII hex text",
        ));
    }
    if payload.len() < SUB_BITMAP_CHARS {
        return Err(CodecError::malformed_extension(
            prefix,
            format!(
                "need {SUB_BITMAP_CHARS} sub-bitmap characters, got {}",
                payload.len()
            ),
        ));
    }

    let mut map = decode_hex_bitmap(prefix, &payload[..SUB_BITMAP_CHARS])?;
    let mut pos = SUB_BITMAP_CHARS;

    // Bit 1 of the sub-bitmap extends it by another 8 bytes, same convention
    // as the top level.
    if map[0] & 0x80 != 0 {
        let end = pos + SUB_BITMAP_CHARS;
        let extra = payload.get(pos..end).ok_or_else(|| {
            CodecError::malformed_extension(prefix, "extended sub-bitmap signaled but missing")
        })?;
        map.extend(decode_hex_bitmap(prefix, extra)?);
        pos = end;
    }

    let subcatalog = catalog::subfields(prefix)
        .ok_or_else(|| CodecError::unknown_field(prefix))?;

    for subfield in bitmap::active_fields(&map) {
        let path = format!("{prefix}.{subfield}");
        let desc = subcatalog
            .get(&subfield)
            .ok_or_else(|| CodecError::unknown_field(&path))?;

        let (value, consumed) = field::decode_value(&path, desc, payload.as_bytes(), pos)
            .map_err(|err| match err {
                CodecError::TruncatedBuffer { need, got, .. } => CodecError::malformed_extension(
                    &path,
                    format!("sub-bitmap claims more data than available: need {need}, got {got}"),
                ),
                other => other,
            })?;
        pos += consumed;

        if desc.composite {
            expand(&path, &value, out)?;
        } else {
            out.insert(path, value);
        }
    }

    if pos < payload.len() {
        debug!(
            prefix,
            consumed = pos,
            total = payload.len(),
            "composite payload has trailing characters"
        );
    }
    Ok(())
}

fn decode_hex_bitmap(prefix: &str, chars: &str) -> CodecResult<Vec<u8>> {
    hex::decode(chars).map_err(|_| {
        CodecError::malformed_extension(prefix, format!("sub-bitmap {chars:?} is not hex"))
    })
}
