//! MTI (Message Type Indicator) validation and classification
//!
//! The MTI is four ASCII digits: version, class, function, origin. Version
//! and origin accept any digit; class and function are drawn from closed
//! sets, and network-management messages (class 8) never carry an
//! advice-response function. A message whose MTI fails these rules is not
//! processable at all.

use num_enum::TryFromPrimitive;

/// Message class (second MTI digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum MessageClass {
    Authorization = 1,
    Financial = 2,
    FileAction = 3,
    Reversal = 4,
    Reconciliation = 5,
    Administrative = 6,
    NetworkManagement = 8,
}

/// Message function (third MTI digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum MessageFunction {
    Request = 0,
    RequestResponse = 1,
    Advice = 2,
    AdviceResponse = 3,
}

/// A parsed, rule-checked MTI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mti {
    /// Standard version digit: 0 = 1987, 1 = 1993, 2 = 2003
    pub version: u8,
    pub class: MessageClass,
    pub function: MessageFunction,
    /// Origin digit, unconstrained beyond being a digit
    pub origin: u8,
}

impl Mti {
    /// Parse and rule-check a 4-digit MTI. `None` when any positional rule
    /// fails.
    pub fn parse(mti: &str) -> Option<Self> {
        let bytes = mti.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let class = MessageClass::try_from(bytes[1] - b'0').ok()?;
        let function = MessageFunction::try_from(bytes[2] - b'0').ok()?;

        // Network management pairs only with request/response/advice
        if class == MessageClass::NetworkManagement
            && function == MessageFunction::AdviceResponse
        {
            return None;
        }

        Some(Self {
            version: bytes[0] - b'0',
            class,
            function,
            origin: bytes[3] - b'0',
        })
    }
}

/// Whether `mti` satisfies every positional digit rule.
pub fn check_mti(mti: &str) -> bool {
    Mti::parse(mti).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_1987_base_set() {
        for mti in [
            "0100", "0110", "0101", "0120", "0121", "0130", "0200", "0201", "0202", "0203",
            "0210", "0212", "0220", "0221", "0230", "0320", "0321", "0322", "0323", "0330",
            "0332", "0400", "0401", "0410", "0420", "0421", "0430", "0500", "0501", "0510",
            "0520", "0521", "0522", "0532", "0523", "0530", "0600", "0601", "0610", "0620",
            "0621", "0630", "0800", "0801", "0810", "0820",
        ] {
            assert!(check_mti(mti), "{mti} should be valid");
        }
    }

    #[test]
    fn accepts_the_1993_base_set() {
        for mti in [
            "1100", "1110", "1101", "1120", "1121", "1130", "1200", "1201", "1202", "1203",
            "1210", "1212", "1220", "1221", "1230", "1320", "1321", "1322", "1323", "1330",
            "1332", "1400", "1401", "1410", "1420", "1421", "1430", "1500", "1501", "1510",
            "1520", "1521", "1522", "1532", "1523", "1530", "1600", "1601", "1610", "1620",
            "1621", "1630", "1800", "1801", "1810", "1820",
        ] {
            assert!(check_mti(mti), "{mti} should be valid");
        }
    }

    #[test]
    fn rejects_out_of_range_digits() {
        assert!(!check_mti("1899")); // function 9 does not exist
        assert!(!check_mti("0030")); // class 0 does not exist
        assert!(!check_mti("0700")); // class 7 does not exist
        assert!(!check_mti("0940")); // class 9, function 4
        assert!(!check_mti("0840")); // function 4 does not exist
    }

    #[test]
    fn network_management_never_pairs_with_advice_response() {
        assert!(!check_mti("0830"));
        assert!(!check_mti("1830"));
        assert!(check_mti("0430")); // reversal advice response is fine
    }

    #[test]
    fn rejects_non_digit_and_wrong_width() {
        assert!(!check_mti(""));
        assert!(!check_mti("010"));
        assert!(!check_mti("01000"));
        assert!(!check_mti("01a0"));
    }

    #[test]
    fn parse_exposes_classification() {
        let mti = Mti::parse("0800").unwrap();
        assert_eq!(mti.version, 0);
        assert_eq!(mti.class, MessageClass::NetworkManagement);
        assert_eq!(mti.function, MessageFunction::Request);
        assert_eq!(mti.origin, 0);
    }
}
