//! # Switchline Types Library
//!
//! Pure data layer for ISO 8583 messaging: the structured message container,
//! the per-field catalog (including the composite field 127 sub-catalogs) and
//! the read-only reference tables (field descriptions, processing-code
//! lookups).
//!
//! ## Design Philosophy
//!
//! - **Data, not rules**: nothing in this crate parses or serializes wire
//!   bytes. Encoding rules live in `codec`.
//! - **Dense message storage**: a message is a fixed-capacity slot array
//!   indexed by data element number (0-128), not a hash map. Presence is the
//!   slot being occupied, which keeps the hot pack/unpack path free of
//!   hashing while preserving sparse semantics.
//! - **Digit strings, not machine integers**: numeric field values are stored
//!   as decimal-digit strings. Account numbers and amounts routinely exceed
//!   64-bit range; digit sequences sidestep that entirely.
//! - **Static reference data**: catalogs and lookup tables are process-wide
//!   `once_cell` statics, immutable after first touch.
//!
//! ## Architecture Role
//!
//! ```text
//! caller input → [types] → codec → wire bytes
//!                   ↑          ↓
//!             IsoMessage   pack/unpack rules
//!             FieldCatalog bitmap/field codecs
//! ```

pub mod catalog;
pub mod dictionary;
pub mod lookup;
pub mod message;

// Re-export key types for convenience
pub use catalog::{descriptor, subfield, subfields, ContentType, FieldDescriptor, LengthKind};
pub use dictionary::{describe, describe_all};
pub use lookup::{account_type_from, account_type_to, transaction_type, CodeLookup};
pub use message::{IsoMessage, MessageError, MAX_FIELD};
