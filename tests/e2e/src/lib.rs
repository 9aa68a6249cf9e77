//! Shared fixtures for the end-to-end pipeline tests.
//!
//! The canonical fixture is a 23-field 0100 authorization with EMV data in
//! field 127; its wire form is exactly 468 bytes. Tests build on it rather
//! than inventing per-test messages so that regressions surface as diffs
//! against one well-understood transaction.

use types::IsoMessage;

/// Raw field 127 payload of the sample authorization: subfield 25 only,
/// which in turn carries 21 ICC items (ending in cryptogram 127.25.30).
pub const SAMPLE_127: &str = "000000800000000001927E1E5F7C0000000000000000500000000000000014A00000000310105C000128FF0061F379D43D5AEEBC8002800000000000000001E0302031F000203001406010A03A09000008CE0D0C840421028004880040417091180000014760BAC24959";

/// Wire length of [`sample_auth_message`] after packing.
pub const SAMPLE_WIRE_LEN: usize = 468;

/// The canonical 0100 authorization fixture.
pub fn sample_auth_message() -> IsoMessage {
    IsoMessage::from_fields([
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
        (127, SAMPLE_127),
    ])
    .unwrap_or_else(|e| panic!("fixture is well-formed: {e}"))
}

/// Install a test-friendly tracing subscriber; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
