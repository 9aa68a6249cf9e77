//! Structured-message validation
//!
//! Checks a message before it is allowed near the wire: the MTI must pass
//! its digit rules, every present field must have a catalog entry, and every
//! value must satisfy its descriptor's charset and length constraints. The
//! message is never mutated; validation either passes completely or reports
//! the first failure.

use crate::error::{CodecError, CodecResult};
use crate::mti::check_mti;
use tracing::warn;
use types::catalog;
use types::IsoMessage;

/// Validate `msg`, reporting the first failure with full context.
pub fn validate(msg: &IsoMessage) -> CodecResult<()> {
    let mti = msg
        .get(0)
        .ok_or_else(|| CodecError::invalid_mti("", "field 0 (MTI) is missing"))?;
    if !check_mti(mti) {
        return Err(CodecError::invalid_mti(
            mti,
            "digit rules failed (class/function out of range)",
        ));
    }

    for field in msg.present_fields() {
        let desc =
            catalog::descriptor(field).ok_or_else(|| CodecError::unknown_field(field))?;
        let value = msg
            .get(field)
            .ok_or_else(|| CodecError::unknown_field(field))?;

        if let Some(bad) = value.chars().find(|&c| !desc.content.permits(c)) {
            return Err(CodecError::malformed_value(
                field,
                format!("character {bad:?} not allowed for {:?} content", desc.content),
            ));
        }

        let capacity = desc.capacity();
        if value.len() > capacity {
            return Err(CodecError::too_long(field, value.len(), capacity));
        }
    }

    Ok(())
}

/// Boolean form of [`validate`]: the contract callers branch on. Failures
/// are logged, never propagated.
pub fn validate_message(msg: &IsoMessage) -> bool {
    match validate(msg) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "message failed validation");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(mti: &str) -> IsoMessage {
        let mut msg = IsoMessage::new();
        msg.set(0, mti).unwrap();
        msg
    }

    #[test]
    fn accepts_a_minimal_valid_message() {
        let mut msg = minimal("0100");
        msg.set(2, "4761739001010119").unwrap();
        assert!(validate_message(&msg));
    }

    #[test]
    fn accepts_a_network_management_message() {
        let mut msg = minimal("0800");
        msg.set(70, "001").unwrap();
        assert!(validate_message(&msg));
    }

    #[test]
    fn missing_mti_fails() {
        let mut msg = IsoMessage::new();
        msg.set(2, "4761739001010119").unwrap();
        assert!(matches!(
            validate(&msg).unwrap_err(),
            CodecError::InvalidMti { .. }
        ));
    }

    #[test]
    fn invalid_mti_fails_before_field_checks() {
        let mut msg = minimal("1899");
        msg.set(70, "001").unwrap();
        assert!(!validate_message(&msg));
    }

    #[test]
    fn oversized_fixed_field_fails() {
        let mut msg = minimal("0100");
        msg.set(25, "123").unwrap(); // POS condition code is n-2
        assert!(matches!(
            validate(&msg).unwrap_err(),
            CodecError::FieldTooLong { .. }
        ));
    }

    #[test]
    fn charset_violations_fail() {
        let mut msg = minimal("0100");
        msg.set(3, "00A000").unwrap(); // processing code is numeric-only
        assert!(matches!(
            validate(&msg).unwrap_err(),
            CodecError::MalformedValue { .. }
        ));
    }

    #[test]
    fn track2_separator_is_permitted() {
        let mut msg = minimal("0100");
        msg.set(35, "4761739001010119D22122011758928889").unwrap();
        assert!(validate_message(&msg));
    }

    #[test]
    fn variable_field_over_capacity_fails() {
        let mut msg = minimal("0100");
        msg.set(2, &"9".repeat(20)).unwrap(); // PAN maximum is 19
        assert!(matches!(
            validate(&msg).unwrap_err(),
            CodecError::FieldTooLong { .. }
        ));
    }

    #[test]
    fn full_sample_message_validates() {
        let msg = IsoMessage::from_fields([
            (0u8, "0100"),
            (2, "4761739001010119"),
            (3, "000000"),
            (4, "000000005000"),
            (7, "0911131411"),
            (12, "131411"),
            (13, "0911"),
            (14, "2212"),
            (18, "4111"),
            (22, "051"),
            (23, "001"),
            (25, "00"),
            (26, "12"),
            (32, "423935"),
            (33, "111111111"),
            (35, "4761739001010119D22122011758928889"),
            (41, "12345678"),
            (42, "MOTITILL_000001"),
            (43, "My Termianl Business                    "),
            (49, "404"),
            (52, "7434F67813BAE545"),
            (56, "1510"),
            (123, "91010151134C101"),
            (127, "000000800000000001927E1E5F7C0000000000000000500000000000000014A00000000310105C000128FF0061F379D43D5AEEBC8002800000000000000001E0302031F000203001406010A03A09000008CE0D0C840421028004880040417091180000014760BAC24959"),
        ])
        .unwrap();
        assert!(validate_message(&msg));
    }
}
