//! # Switchline Codec - ISO 8583 Rules Layer
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the Switchline system:
//! - Bitmap encoding/decoding (primary + secondary, MSB-first)
//! - MTI positional digit validation
//! - Per-field wire serialization driven by the catalog in `types`
//! - Composite extension expansion (field 127 and ICC subfield 127.25)
//! - Whole-message validation, pack and unpack orchestration
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types  →  [codec]      →  host application
//!     ↑             ↓                  ↓
//! Pure Data    Protocol Rules      Transport
//! Structures   Validation/Codec    (out of scope here)
//! IsoMessage   pack/unpack
//! catalogs     rebuild_extensions
//! ```
//!
//! ## What This Crate Contains
//! - **bitmap**: 64/128-bit presence maps, bit 1 reserved as metadata
//! - **mti**: `Mti` classification plus the `check_mti` predicate
//! - **field**: fixed/LLVAR/LLLVAR/LLLLVAR value codec
//! - **extensions**: opt-in composite expansion into dotted leaf keys
//! - **validate**: charset/length/MTI checks over a whole message
//! - **message**: `pack`/`unpack` and the field-3 business lookups
//!
//! ## What This Crate Does NOT Contain
//! - Field catalogs or the message container (belongs in libs/types)
//! - Network transport, framing or connection handling

pub mod bitmap;
pub mod error;
pub mod extensions;
pub mod field;
pub mod message;
pub mod mti;
pub mod validate;

// Re-export key items for convenience
pub use bitmap::{decode_bitmap, encode_bitmap, BITMAP_BYTES};
pub use error::{CodecError, CodecResult};
pub use extensions::rebuild_extensions;
pub use field::{decode_field, encode_field};
pub use message::{
    account_type_from, account_type_to, acc_type, bitmap_fields, field_description,
    field_descriptions, mti, pack, t_type, transaction_type, unpack, UnpackOptions,
};
pub use mti::{check_mti, MessageClass, MessageFunction, Mti};
pub use validate::{validate, validate_message};
