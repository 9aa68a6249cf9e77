//! Full validate → pack → unpack → expand pipeline over the canonical
//! authorization fixture.

use codec::{
    pack, rebuild_extensions, unpack, validate_message, CodecError, UnpackOptions,
};
use switchline_e2e_tests::{init_tracing, sample_auth_message, SAMPLE_WIRE_LEN};
use types::lookup::CodeLookup;

#[test]
fn authorization_survives_the_full_pipeline() {
    init_tracing();
    let msg = sample_auth_message();

    assert!(validate_message(&msg));

    let wire = pack(&msg).unwrap();
    assert_eq!(wire.len(), SAMPLE_WIRE_LEN);
    assert_eq!(&wire[..4], b"0100");
    // Secondary bitmap is present (fields 123 and 127)
    assert_eq!(wire[4] & 0x80, 0x80);

    let unpacked = unpack(&wire, UnpackOptions::default()).unwrap();
    assert_eq!(unpacked, msg);

    let repacked = pack(&unpacked).unwrap();
    assert_eq!(repacked, wire);
}

#[test]
fn expansion_exposes_the_icc_leaves() {
    init_tracing();
    let wire = pack(&sample_auth_message()).unwrap();
    let mut msg = unpack(&wire, UnpackOptions::default()).unwrap();

    assert!(rebuild_extensions(&mut msg).unwrap());
    assert!(!msg.is_present(127));
    assert_eq!(msg.get_path("127.25.2"), Some("000000005000"));
    assert_eq!(msg.get_path("127.25.4"), Some("A0000000031010"));
    assert_eq!(msg.get_path("127.25.12"), Some("61F379D43D5AEEBC"));
    assert_eq!(msg.get_path("127.25.30"), Some("BAC24959"));

    // Expanding twice changes nothing
    assert!(!rebuild_extensions(&mut msg).unwrap());
    assert_eq!(msg.get_path("127.25.30"), Some("BAC24959"));
}

#[test]
fn business_lookups_read_the_processing_code() {
    let msg = sample_auth_message();
    assert_eq!(
        codec::transaction_type(&msg),
        CodeLookup::Found("Goods and services")
    );
    assert_eq!(
        codec::account_type_from(&msg),
        CodeLookup::Found("Default \u{2013} unspecified")
    );
    assert_eq!(
        codec::account_type_to(&msg),
        CodeLookup::Found("Default \u{2013} unspecified")
    );
    assert_eq!(codec::bitmap_fields(&msg).len(), 23);
}

#[test]
fn expanded_message_serializes_to_flat_json() {
    let wire = pack(&sample_auth_message()).unwrap();
    let mut msg = unpack(&wire, UnpackOptions::default()).unwrap();
    rebuild_extensions(&mut msg).unwrap();

    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["0"], "0100");
    assert_eq!(json["2"], "4761739001010119");
    assert_eq!(json["127.25.30"], "BAC24959");
    assert!(json.get("127").is_none());

    let back: types::IsoMessage = serde_json::from_value(json).unwrap();
    assert_eq!(back, msg);
}

#[test]
fn corrupted_wire_is_reported_not_misparsed() {
    let wire = pack(&sample_auth_message()).unwrap();

    // Truncation mid-field
    let err = unpack(&wire[..200], UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, CodecError::TruncatedBuffer { .. }));

    // Garbage MTI
    let mut bad = wire.clone();
    bad[0] = b'X';
    let err = unpack(&bad, UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, CodecError::InvalidMti { .. }));

    // Extra bytes after the last field
    let mut padded = wire;
    padded.extend_from_slice(b"\0\0");
    let err = unpack(&padded, UnpackOptions::default()).unwrap_err();
    assert!(matches!(err, CodecError::TrailingBytes { .. }));
}
