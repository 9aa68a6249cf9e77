//! # Field Catalog - ISO 8583:1987 data element registry
//!
//! ## Purpose
//!
//! Static, process-wide description of every data element a message may
//! carry: its content class, its length discipline (fixed width or a
//! 2/3/4-digit decimal length prefix) and its maximum length. The codec
//! consults the catalog for every field it touches; a field without an entry
//! is unknown and unprocessable.
//!
//! Composite fields (private-use field 127 and its ICC subfield 127.25) own
//! sub-catalogs keyed by dotted prefix. Each sub-catalog describes a nested
//! bitmap-plus-subfields space that is structurally identical to the top
//! level, one level down.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Content class of a data element, deciding charset validation and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    /// Decimal digits only; fixed-width values are left-padded with zeros
    Numeric,
    /// Letters and spaces
    Alpha,
    /// Letters, digits and spaces
    AlphaNumeric,
    /// Any printable ASCII
    AlphaNumericSpecial,
    /// Track-2 data: digits plus the `D`/`=` field separators
    Track2,
    /// Binary content carried as hex text on the wire
    Binary,
}

impl ContentType {
    /// Whether `c` belongs to this content class.
    pub fn permits(self, c: char) -> bool {
        match self {
            ContentType::Numeric => c.is_ascii_digit(),
            ContentType::Alpha => c.is_ascii_alphabetic() || c == ' ',
            ContentType::AlphaNumeric => c.is_ascii_alphanumeric() || c == ' ',
            ContentType::AlphaNumericSpecial => c.is_ascii() && !c.is_ascii_control(),
            ContentType::Track2 => c.is_ascii_digit() || matches!(c, 'D' | 'd' | '='),
            ContentType::Binary => c.is_ascii_hexdigit(),
        }
    }

    /// Fixed-width padding style: numerics pad on the left with zeros,
    /// everything else pads on the right with spaces.
    pub fn pads_left(self) -> bool {
        matches!(self, ContentType::Numeric | ContentType::Binary)
    }
}

/// Length discipline of a data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthKind {
    /// Exactly `max_len` wire bytes, no prefix
    Fixed,
    /// 2-digit decimal length prefix
    LlVar,
    /// 3-digit decimal length prefix
    LllVar,
    /// 4-digit decimal length prefix (composite ICC data uses this)
    LlllVar,
}

impl LengthKind {
    /// Number of decimal prefix digits on the wire.
    pub fn prefix_digits(self) -> usize {
        match self {
            LengthKind::Fixed => 0,
            LengthKind::LlVar => 2,
            LengthKind::LllVar => 3,
            LengthKind::LlllVar => 4,
        }
    }

    /// Largest length the prefix itself can express.
    pub fn prefix_capacity(self) -> usize {
        match self {
            LengthKind::Fixed => usize::MAX,
            LengthKind::LlVar => 99,
            LengthKind::LllVar => 999,
            LengthKind::LlllVar => 9999,
        }
    }
}

/// Immutable description of one data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub content: ContentType,
    pub length: LengthKind,
    /// Fixed width for `Fixed` fields, maximum length otherwise
    pub max_len: u16,
    /// Composite fields expand into a nested bitmap-plus-subfields space
    pub composite: bool,
}

impl FieldDescriptor {
    pub const fn fixed(content: ContentType, len: u16) -> Self {
        Self {
            content,
            length: LengthKind::Fixed,
            max_len: len,
            composite: false,
        }
    }

    pub const fn var(content: ContentType, length: LengthKind, max_len: u16) -> Self {
        Self {
            content,
            length,
            max_len,
            composite: false,
        }
    }

    pub const fn composite(mut self) -> Self {
        self.composite = true;
        self
    }

    /// Longest value this descriptor can carry, considering both the
    /// declared maximum and what the length prefix can express.
    pub fn capacity(&self) -> usize {
        (self.max_len as usize).min(self.length.prefix_capacity())
    }
}

use ContentType::{Alpha, AlphaNumeric, AlphaNumericSpecial, Binary, Numeric, Track2};
use FieldDescriptor as D;
use LengthKind::{LlVar, LllVar, LlllVar};

/// Primary catalog: data elements 2-128 of the 1987 dialect. Field 1 is the
/// bitmap's own metadata bit and deliberately has no entry.
static PRIMARY: Lazy<BTreeMap<u8, FieldDescriptor>> = Lazy::new(|| {
    let mut cat = BTreeMap::new();
    let mut put = |field: u8, desc: FieldDescriptor| {
        cat.insert(field, desc);
    };

    put(2, D::var(Numeric, LlVar, 19)); // Primary account number
    put(3, D::fixed(Numeric, 6)); // Processing code
    put(4, D::fixed(Numeric, 12)); // Amount, transaction
    put(5, D::fixed(Numeric, 12));
    put(6, D::fixed(Numeric, 12));
    put(7, D::fixed(Numeric, 10)); // Transmission date and time
    put(8, D::fixed(Numeric, 8));
    put(9, D::fixed(Numeric, 8));
    put(10, D::fixed(Numeric, 8));
    put(11, D::fixed(Numeric, 6)); // System trace audit number
    put(12, D::fixed(Numeric, 6)); // Local transaction time
    put(13, D::fixed(Numeric, 4)); // Local transaction date
    put(14, D::fixed(Numeric, 4)); // Expiration date
    put(15, D::fixed(Numeric, 4));
    put(16, D::fixed(Numeric, 4));
    put(17, D::fixed(Numeric, 4));
    put(18, D::fixed(Numeric, 4)); // Merchant type
    put(19, D::fixed(Numeric, 3));
    put(20, D::fixed(Numeric, 3));
    put(21, D::fixed(Numeric, 3));
    put(22, D::fixed(Numeric, 3)); // POS entry mode
    put(23, D::fixed(Numeric, 3)); // Card sequence number
    put(24, D::fixed(Numeric, 3));
    put(25, D::fixed(Numeric, 2)); // POS condition code
    put(26, D::fixed(Numeric, 2)); // POS PIN capture code
    put(27, D::fixed(Numeric, 1));
    put(28, D::fixed(AlphaNumeric, 9)); // x+n8 amounts
    put(29, D::fixed(AlphaNumeric, 9));
    put(30, D::fixed(AlphaNumeric, 9));
    put(31, D::fixed(AlphaNumeric, 9));
    put(32, D::var(Numeric, LlVar, 11)); // Acquiring institution id
    put(33, D::var(Numeric, LlVar, 11)); // Forwarding institution id
    put(34, D::var(AlphaNumericSpecial, LlVar, 28));
    put(35, D::var(Track2, LlVar, 37)); // Track-2 data
    put(36, D::var(Numeric, LllVar, 104));
    put(37, D::fixed(AlphaNumeric, 12)); // Retrieval reference number
    put(38, D::fixed(AlphaNumeric, 6));
    put(39, D::fixed(AlphaNumeric, 2)); // Response code
    put(40, D::fixed(AlphaNumeric, 3));
    put(41, D::fixed(AlphaNumericSpecial, 8)); // Terminal id
    put(42, D::fixed(AlphaNumericSpecial, 15)); // Merchant id
    put(43, D::fixed(AlphaNumericSpecial, 40)); // Merchant name and location
    put(44, D::var(AlphaNumeric, LlVar, 25));
    put(45, D::var(AlphaNumeric, LlVar, 76));
    put(46, D::var(AlphaNumeric, LllVar, 999));
    put(47, D::var(AlphaNumeric, LllVar, 999));
    put(48, D::var(AlphaNumeric, LllVar, 999));
    put(49, D::fixed(AlphaNumeric, 3)); // Currency code, transaction
    put(50, D::fixed(AlphaNumeric, 3));
    put(51, D::fixed(AlphaNumeric, 3));
    put(52, D::fixed(Binary, 16)); // PIN data, 64 bits as hex text
    put(53, D::fixed(Numeric, 16));
    put(54, D::var(AlphaNumeric, LllVar, 120)); // Additional amounts
    put(55, D::var(AlphaNumericSpecial, LllVar, 999));
    put(56, D::fixed(Numeric, 4)); // Message reason code
    put(57, D::var(AlphaNumeric, LllVar, 999));
    put(58, D::var(AlphaNumeric, LllVar, 999));
    put(59, D::var(AlphaNumeric, LllVar, 999));
    for field in 60..=63 {
        put(field, D::var(AlphaNumericSpecial, LllVar, 999));
    }
    put(64, D::fixed(Binary, 16)); // MAC, 64 bits as hex text

    put(65, D::fixed(Binary, 16)); // Extended bitmap placeholder
    put(66, D::fixed(Numeric, 1));
    put(67, D::fixed(Numeric, 2));
    put(68, D::fixed(Numeric, 3));
    put(69, D::fixed(Numeric, 3));
    put(70, D::fixed(Numeric, 3)); // Network management information code
    put(71, D::fixed(Numeric, 4));
    put(72, D::fixed(Numeric, 4));
    put(73, D::fixed(Numeric, 6));
    for field in 74..=81 {
        put(field, D::fixed(Numeric, 10)); // Reconciliation counts
    }
    for field in 82..=85 {
        put(field, D::fixed(Numeric, 12)); // Reconciliation amounts
    }
    for field in 86..=89 {
        put(field, D::fixed(Numeric, 16));
    }
    put(90, D::fixed(Numeric, 42)); // Original data elements
    put(91, D::fixed(Alpha, 1)); // File update code
    put(92, D::fixed(AlphaNumeric, 2));
    put(93, D::fixed(AlphaNumeric, 5));
    put(94, D::fixed(AlphaNumeric, 7));
    put(95, D::fixed(AlphaNumeric, 42)); // Replacement amounts
    put(96, D::fixed(Binary, 16)); // Message security code
    put(97, D::fixed(AlphaNumeric, 17)); // x+n16 net settlement amount
    put(98, D::fixed(AlphaNumericSpecial, 25)); // Payee
    put(99, D::var(Numeric, LlVar, 11));
    put(100, D::var(Numeric, LlVar, 11)); // Receiving institution id
    put(101, D::var(AlphaNumericSpecial, LlVar, 17)); // File name
    put(102, D::var(AlphaNumericSpecial, LlVar, 28)); // Account id 1
    put(103, D::var(AlphaNumericSpecial, LlVar, 28)); // Account id 2
    put(104, D::var(AlphaNumericSpecial, LllVar, 100)); // Transaction description
    for field in 105..=126 {
        put(field, D::var(AlphaNumericSpecial, LllVar, 999)); // Reserved
    }
    put(127, D::var(AlphaNumericSpecial, LllVar, 999).composite()); // Private use
    put(128, D::fixed(Binary, 16)); // MAC, 64 bits as hex text

    cat
});

/// Sub-catalog for field 127 (Postilion-style private-use subfields).
static EXT_127: Lazy<BTreeMap<u8, FieldDescriptor>> = Lazy::new(|| {
    let mut cat = BTreeMap::new();
    let mut put = |field: u8, desc: FieldDescriptor| {
        cat.insert(field, desc);
    };

    put(2, D::var(AlphaNumericSpecial, LlVar, 32)); // Switch key
    put(3, D::fixed(AlphaNumericSpecial, 48)); // Routing information
    put(4, D::fixed(AlphaNumericSpecial, 22)); // POS data
    put(5, D::fixed(AlphaNumericSpecial, 73)); // Service station data
    put(6, D::fixed(Numeric, 2)); // Authorization profile
    put(7, D::var(AlphaNumericSpecial, LlVar, 50)); // Check data
    put(8, D::var(AlphaNumericSpecial, LllVar, 999)); // Retention data
    put(9, D::var(AlphaNumericSpecial, LllVar, 255)); // Additional node data
    put(10, D::fixed(Numeric, 3)); // CVV2
    put(11, D::var(AlphaNumericSpecial, LlVar, 32)); // Original key
    put(12, D::var(AlphaNumericSpecial, LlVar, 25)); // Terminal owner
    put(13, D::fixed(AlphaNumericSpecial, 27)); // POS geographic data
    put(14, D::fixed(AlphaNumericSpecial, 8)); // Sponsor bank
    put(15, D::var(AlphaNumericSpecial, LlVar, 29)); // Address verification data
    put(16, D::fixed(AlphaNumericSpecial, 1)); // Address verification result
    put(17, D::fixed(AlphaNumericSpecial, 1)); // Cardholder information
    put(18, D::fixed(AlphaNumericSpecial, 1)); // Validation data
    put(19, D::fixed(AlphaNumericSpecial, 3)); // Bank details
    put(20, D::fixed(Numeric, 8)); // Authorizer date settlement
    put(21, D::var(AlphaNumericSpecial, LlVar, 12)); // Record identification
    put(22, D::var(AlphaNumericSpecial, LlllVar, 9999)); // Structured data
    put(23, D::fixed(AlphaNumericSpecial, 156)); // Payee name and address
    put(24, D::var(AlphaNumericSpecial, LlVar, 35)); // Payer account
    put(25, D::var(AlphaNumericSpecial, LlllVar, 9999).composite()); // ICC data
    put(26, D::var(AlphaNumericSpecial, LlVar, 88)); // Original node
    put(27, D::fixed(AlphaNumericSpecial, 1)); // Card verification result

    cat
});

/// Sub-catalog for field 127.25 (EMV/ICC items, hex text).
static EXT_127_25: Lazy<BTreeMap<u8, FieldDescriptor>> = Lazy::new(|| {
    let mut cat = BTreeMap::new();
    let mut put = |field: u8, desc: FieldDescriptor| {
        cat.insert(field, desc);
    };

    put(2, D::fixed(Numeric, 12)); // Amount, authorised
    put(3, D::fixed(Numeric, 12)); // Amount, other
    put(4, D::var(AlphaNumericSpecial, LlVar, 32)); // Application identifier
    put(5, D::fixed(Binary, 4)); // Application interchange profile
    put(6, D::fixed(Binary, 4)); // Application transaction counter
    put(7, D::fixed(Binary, 4)); // Application usage control
    put(8, D::fixed(AlphaNumeric, 2)); // Authorization response code
    put(9, D::fixed(Numeric, 1)); // Card authentication reliability
    put(10, D::fixed(AlphaNumeric, 2)); // Card authentication result code
    put(11, D::fixed(Numeric, 1)); // Chip condition code
    put(12, D::fixed(Binary, 16)); // Cryptogram
    put(13, D::fixed(Binary, 2)); // Cryptogram information data
    put(14, D::fixed(Binary, 6)); // CVM results
    put(15, D::fixed(Numeric, 12)); // Issuer authentication indicator
    for field in 16..=30 {
        put(field, D::fixed(Binary, 8)); // Terminal and transaction items
    }

    cat
});

/// Descriptor for a top-level data element (2-128).
pub fn descriptor(field: u8) -> Option<&'static FieldDescriptor> {
    PRIMARY.get(&field)
}

/// Sub-catalog of a composite field, keyed by dotted prefix
/// (`"127"`, `"127.25"`).
pub fn subfields(prefix: &str) -> Option<&'static BTreeMap<u8, FieldDescriptor>> {
    match prefix {
        "127" => Some(&EXT_127),
        "127.25" => Some(&EXT_127_25),
        _ => None,
    }
}

/// Descriptor for one subfield of a composite field.
pub fn subfield(prefix: &str, number: u8) -> Option<&'static FieldDescriptor> {
    subfields(prefix).and_then(|cat| cat.get(&number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_catalog_covers_2_through_128() {
        for field in 2..=128u8 {
            assert!(descriptor(field).is_some(), "field {field} missing");
        }
        assert!(descriptor(0).is_none());
        assert!(descriptor(1).is_none());
    }

    #[test]
    fn known_wire_widths() {
        let pan = descriptor(2).unwrap();
        assert_eq!(pan.length, LengthKind::LlVar);
        assert_eq!(pan.capacity(), 19);

        let pin = descriptor(52).unwrap();
        assert_eq!(pin.length, LengthKind::Fixed);
        assert_eq!(pin.max_len, 16);
        assert_eq!(pin.content, ContentType::Binary);

        let private = descriptor(127).unwrap();
        assert!(private.composite);
        assert_eq!(private.length, LengthKind::LllVar);
    }

    #[test]
    fn variable_capacity_is_bounded_by_prefix() {
        let d = D::var(AlphaNumericSpecial, LlVar, 500);
        assert_eq!(d.capacity(), 99);
    }

    #[test]
    fn composite_chain_reaches_icc_items() {
        let icc = subfield("127", 25).unwrap();
        assert!(icc.composite);
        assert_eq!(icc.length, LengthKind::LlllVar);

        let serial = subfield("127.25", 30).unwrap();
        assert_eq!(serial.max_len, 8);
        assert!(subfields("127.25.30").is_none());
    }

    #[test]
    fn content_charsets() {
        assert!(ContentType::Numeric.permits('7'));
        assert!(!ContentType::Numeric.permits('A'));
        assert!(ContentType::Track2.permits('D'));
        assert!(ContentType::Binary.permits('F'));
        assert!(!ContentType::Binary.permits('G'));
        assert!(ContentType::AlphaNumericSpecial.permits('_'));
    }
}
