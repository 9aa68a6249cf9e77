//! Structured ISO 8583 message container
//!
//! A message maps data element numbers to string values. Slot 0 carries the
//! MTI; slots 2-128 carry data elements. Slot 1 is the bitmap's own metadata
//! bit and never holds data. Storage is a dense fixed-capacity array so the
//! pack/unpack hot path never hashes, plus an ordered side map for the dotted
//! keys produced by composite-field expansion (`"127.25.30"` and friends).

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Highest addressable data element number.
pub const MAX_FIELD: u8 = 128;

const SLOT_COUNT: usize = MAX_FIELD as usize + 1;

/// Errors raised by the message container itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Data element number outside 0-128
    #[error("field {0} is outside the supported range 0-128")]
    FieldOutOfRange(u16),

    /// Extension key that is not a dotted field path
    #[error("key {0:?} is not a dotted field path")]
    InvalidPath(String),
}

/// A structured ISO 8583 message: MTI plus sparse data elements.
///
/// Values are owned strings. Numeric and binary elements are stored in their
/// text form (decimal digits, hex characters); the codec layer decides how
/// they hit the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoMessage {
    slots: Box<[Option<String>; SLOT_COUNT]>,
    extended: BTreeMap<String, String>,
}

impl Default for IsoMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl IsoMessage {
    /// Create an empty message.
    pub fn new() -> Self {
        Self {
            slots: Box::new(std::array::from_fn(|_| None)),
            extended: BTreeMap::new(),
        }
    }

    /// Build a message from `(field, value)` pairs.
    pub fn from_fields<I, V>(fields: I) -> Result<Self, MessageError>
    where
        I: IntoIterator<Item = (u8, V)>,
        V: Into<String>,
    {
        let mut msg = Self::new();
        for (field, value) in fields {
            msg.set(field, value)?;
        }
        Ok(msg)
    }

    /// Store a value in a numbered slot, replacing any previous value.
    pub fn set(&mut self, field: u8, value: impl Into<String>) -> Result<(), MessageError> {
        if field > MAX_FIELD {
            return Err(MessageError::FieldOutOfRange(field as u16));
        }
        self.slots[field as usize] = Some(value.into());
        Ok(())
    }

    /// Value of a numbered slot, if present.
    pub fn get(&self, field: u8) -> Option<&str> {
        self.slots
            .get(field as usize)
            .and_then(|slot| slot.as_deref())
    }

    /// Remove and return a slot value.
    pub fn take(&mut self, field: u8) -> Option<String> {
        self.slots.get_mut(field as usize).and_then(Option::take)
    }

    /// Whether a numbered slot holds a value.
    pub fn is_present(&self, field: u8) -> bool {
        self.get(field).is_some()
    }

    /// Ascending data element numbers currently present.
    ///
    /// Excludes slot 0 (the MTI) and slot 1 (bitmap metadata); this is the
    /// exact set a bitmap must describe.
    pub fn present_fields(&self) -> Vec<u8> {
        (2..=MAX_FIELD)
            .filter(|&field| self.slots[field as usize].is_some())
            .collect()
    }

    /// Store a dotted extension value (`"127.25.30"` style key).
    pub fn set_path(
        &mut self,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), MessageError> {
        let path = path.into();
        if !path.contains('.') || path.split('.').any(|seg| seg.parse::<u8>().is_err()) {
            return Err(MessageError::InvalidPath(path));
        }
        self.extended.insert(path, value.into());
        Ok(())
    }

    /// Value of a dotted extension key, if present.
    pub fn get_path(&self, path: &str) -> Option<&str> {
        self.extended.get(path).map(String::as_str)
    }

    /// The dotted extension entries, ordered by key.
    pub fn extended(&self) -> &BTreeMap<String, String> {
        &self.extended
    }

    /// Total number of populated entries (slots plus dotted keys).
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every populated entry as `(key, value)` text pairs: numbered
    /// slots in ascending order first, then dotted keys.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(n, slot)| slot.as_deref().map(|v| (n.to_string(), v)));
        let dotted = self
            .extended
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str()));
        slots.chain(dotted)
    }
}

// The external shape is the flat JSON object the rest of the payments world
// expects: {"0": "0100", "2": "4761…", "127.25.30": "BAC24959"}.
impl Serialize for IsoMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IsoMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IsoMessageVisitor;

        impl<'de> Visitor<'de> for IsoMessageVisitor {
            type Value = IsoMessage;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field numbers or dotted paths to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut msg = IsoMessage::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    let result = match key.parse::<u8>() {
                        Ok(field) => msg.set(field, value),
                        Err(_) => msg.set_path(key, value),
                    };
                    result.map_err(serde::de::Error::custom)?;
                }
                Ok(msg)
            }
        }

        deserializer.deserialize_map(IsoMessageVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip() {
        let mut msg = IsoMessage::new();
        msg.set(0, "0100").unwrap();
        msg.set(2, "4761739001010119").unwrap();
        msg.set(127, "CAFE").unwrap();

        assert_eq!(msg.get(0), Some("0100"));
        assert_eq!(msg.get(2), Some("4761739001010119"));
        assert!(!msg.is_present(3));
        assert_eq!(msg.present_fields(), vec![2, 127]);
    }

    #[test]
    fn present_fields_never_reports_mti_or_bit_one() {
        let mut msg = IsoMessage::new();
        msg.set(0, "0100").unwrap();
        msg.set(1, "FFFF").unwrap();
        msg.set(3, "000000").unwrap();
        assert_eq!(msg.present_fields(), vec![3]);
    }

    #[test]
    fn rejects_out_of_range_field() {
        let mut msg = IsoMessage::new();
        assert_eq!(
            msg.set(129, "x"),
            Err(MessageError::FieldOutOfRange(129))
        );
    }

    #[test]
    fn dotted_paths_validate_segments() {
        let mut msg = IsoMessage::new();
        msg.set_path("127.25.30", "BAC24959").unwrap();
        assert_eq!(msg.get_path("127.25.30"), Some("BAC24959"));
        assert!(msg.set_path("127", "x").is_err());
        assert!(msg.set_path("127.abc", "x").is_err());
    }

    #[test]
    fn take_removes_the_slot() {
        let mut msg = IsoMessage::new();
        msg.set(127, "00FF").unwrap();
        assert_eq!(msg.take(127).as_deref(), Some("00FF"));
        assert!(!msg.is_present(127));
        assert_eq!(msg.take(127), None);
    }

    #[test]
    fn json_object_round_trip() {
        let mut msg = IsoMessage::new();
        msg.set(0, "0100").unwrap();
        msg.set(3, "000000").unwrap();
        msg.set_path("127.25.30", "BAC24959").unwrap();

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"127.25.30\":\"BAC24959\""));

        let back: IsoMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn json_rejects_bad_keys() {
        assert!(serde_json::from_str::<IsoMessage>("{\"300\": \"x\"}").is_err());
        assert!(serde_json::from_str::<IsoMessage>("{\"abc\": \"x\"}").is_err());
    }
}
