//! # Message Codec - top-level pack/unpack orchestration
//!
//! ## Purpose
//!
//! Assembles a validated structured message into one wire buffer
//! (MTI + bitmap(s) + fields in strictly ascending field-number order) and
//! disassembles a buffer back into a structured message. Ascending order is
//! the contract every ISO 8583 peer assumes; an out-of-order encoding is
//! unparseable on the other end.
//!
//! Also hosts the derived accessors over a structured message: MTI, the
//! active-field list, and the transaction/account-type lookups keyed by the
//! digit pairs of field 3.

use crate::bitmap;
use crate::error::{CodecError, CodecResult};
use crate::field;
use std::collections::BTreeMap;
use tracing::debug;
use types::lookup::{self, CodeLookup};
use types::{dictionary, IsoMessage};

/// Lookup-miss reason when field 3 is absent; surfaced as a value, never an
/// error, because out-of-range business codes are an expected outcome.
pub const PROCESSING_CODE_MISSING: &str = "transaction type not defined in message";

/// Lookup-miss reason when field 3 is present but the code has no table
/// entry.
pub const PROCESSING_CODE_UNKNOWN: &str = "transaction type not defined in reference table";

/// Unpack behavior toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpackOptions {
    /// Tolerate bytes after the last signaled field instead of reporting
    /// `TrailingBytes`
    pub ignore_trailing: bool,
}

/// Pack a structured message into its binary wire form.
///
/// Precondition: the message has passed [`crate::validate::validate`]; field
/// contents are not re-validated here, but the MTI shape is enforced because
/// the first four wire bytes depend on it.
pub fn pack(msg: &IsoMessage) -> CodecResult<Vec<u8>> {
    let mti = msg
        .get(0)
        .ok_or_else(|| CodecError::invalid_mti("", "field 0 (MTI) is missing"))?;
    if mti.len() != 4 || !mti.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::invalid_mti(mti, "MTI must be 4 ASCII digits"));
    }

    let fields = msg.present_fields();
    let map = bitmap::encode_bitmap(&fields)?;

    let mut out = Vec::with_capacity(4 + map.len() + 32 * fields.len());
    out.extend_from_slice(mti.as_bytes());
    out.extend_from_slice(&map);
    for &f in &fields {
        let value = msg.get(f).ok_or_else(|| CodecError::unknown_field(f))?;
        field::encode_field(f, value, &mut out)?;
    }

    debug!(fields = fields.len(), bytes = out.len(), "packed message");
    Ok(out)
}

/// Unpack a binary wire buffer into a structured message.
///
/// Composite fields are left raw; expansion into dotted keys is the caller's
/// explicit choice via [`crate::extensions::rebuild_extensions`].
pub fn unpack(data: &[u8], options: UnpackOptions) -> CodecResult<IsoMessage> {
    let mti_bytes = data
        .get(..4)
        .ok_or_else(|| CodecError::truncated(4, data.len(), "MTI"))?;
    if !mti_bytes.iter().all(u8::is_ascii_digit) {
        return Err(CodecError::invalid_mti(
            String::from_utf8_lossy(mti_bytes),
            "MTI must be 4 ASCII digits",
        ));
    }
    // Digits are ASCII, so the conversion cannot fail
    let mti = std::str::from_utf8(mti_bytes)
        .map_err(|_| CodecError::invalid_mti("", "MTI is not ASCII"))?;

    let (fields, consumed) = bitmap::decode_bitmap(data, 4)?;
    let mut offset = 4 + consumed;

    let mut msg = IsoMessage::new();
    msg.set(0, mti)
        .map_err(|_| CodecError::InvalidField { field: 0 })?;

    for f in fields {
        let (value, used) = field::decode_field(f, data, offset)?;
        msg.set(f, value)
            .map_err(|_| CodecError::InvalidField { field: f })?;
        offset += used;
    }

    if offset < data.len() {
        if options.ignore_trailing {
            debug!(
                consumed = offset,
                total = data.len(),
                "ignoring trailing bytes after last signaled field"
            );
        } else {
            return Err(CodecError::TrailingBytes {
                consumed: offset,
                total: data.len(),
            });
        }
    }

    Ok(msg)
}

/// MTI of the message, verbatim and unvalidated (pure accessor).
pub fn mti(msg: &IsoMessage) -> Option<&str> {
    msg.get(0)
}

/// Ascending data element numbers the bitmap would describe: never includes
/// the MTI slot or the bitmap's own metadata bit.
pub fn bitmap_fields(msg: &IsoMessage) -> Vec<u8> {
    msg.present_fields()
}

fn processing_code_pair(
    msg: &IsoMessage,
    start: usize,
    table: fn(&str) -> Option<&'static str>,
) -> CodeLookup {
    let Some(code) = msg.get(3) else {
        return CodeLookup::NotFound {
            reason: PROCESSING_CODE_MISSING,
        };
    };
    match code.get(start..start + 2).and_then(table) {
        Some(name) => CodeLookup::Found(name),
        None => CodeLookup::NotFound {
            reason: PROCESSING_CODE_UNKNOWN,
        },
    }
}

/// Transaction-type description from digit pair 1-2 of field 3.
pub fn transaction_type(msg: &IsoMessage) -> CodeLookup {
    processing_code_pair(msg, 0, lookup::transaction_type)
}

/// Alias for [`transaction_type`], matching the historical short name.
#[inline]
pub fn t_type(msg: &IsoMessage) -> CodeLookup {
    transaction_type(msg)
}

/// Account-from description from digit pair 3-4 of field 3.
pub fn account_type_from(msg: &IsoMessage) -> CodeLookup {
    processing_code_pair(msg, 2, lookup::account_type_from)
}

/// Alias for [`account_type_from`], matching the historical short name.
#[inline]
pub fn acc_type(msg: &IsoMessage) -> CodeLookup {
    account_type_from(msg)
}

/// Account-to description from digit pair 5-6 of field 3.
pub fn account_type_to(msg: &IsoMessage) -> CodeLookup {
    processing_code_pair(msg, 4, lookup::account_type_to)
}

/// Human-readable name of one data element, if known.
pub fn field_description(field: u16) -> Option<&'static str> {
    dictionary::describe(field)
}

/// Names for a batch of data elements; unknown numbers silently dropped.
pub fn field_descriptions<I>(fields: I) -> BTreeMap<u16, &'static str>
where
    I: IntoIterator<Item = u16>,
{
    dictionary::describe_all(fields)
}
