//! Processing-code reference tables
//!
//! Transaction-type and account-type lookups keyed by the digit pairs of
//! field 3 (processing code). A miss here is an expected business outcome,
//! not a fault: callers get a tagged result they branch on, never an error.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Outcome of a business-code lookup.
///
/// `NotFound` carries the reason the caller is expected to surface. Misses
/// are recoverable by contract; nothing here ever aborts an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLookup {
    Found(&'static str),
    NotFound { reason: &'static str },
}

impl CodeLookup {
    pub fn found(self) -> Option<&'static str> {
        match self {
            CodeLookup::Found(name) => Some(name),
            CodeLookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, CodeLookup::Found(_))
    }
}

/// Transaction types: digit pair 1-2 of the processing code.
static TRANSACTION_TYPES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("00", "Goods and services"),
        ("01", "Cash withdrawal"),
        ("02", "Debit adjustment"),
        ("03", "Cheque guarantee"),
        ("04", "Cheque verification"),
        ("09", "Goods and services with cash disbursement"),
        ("11", "Quasi-cash transaction"),
        ("20", "Returns (refund)"),
        ("21", "Deposit"),
        ("22", "Credit adjustment"),
        ("23", "Cheque deposit guarantee"),
        ("24", "Cheque deposit"),
        ("30", "Balance inquiry"),
        ("31", "Statement request"),
        ("40", "Cardholder account transfer"),
        ("50", "Payment"),
        ("90", "PIN change"),
    ])
});

/// Account types: digit pairs 3-4 (from) and 5-6 (to) of the processing
/// code. The from/to tables carry the same entries but are looked up through
/// separate entry points, matching the interface contract.
static ACCOUNT_TYPES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("00", "Default \u{2013} unspecified"),
        ("10", "Savings account"),
        ("20", "Cheque account"),
        ("30", "Credit account"),
        ("40", "Universal account"),
        ("50", "Investment account"),
        ("60", "Electronic purse account"),
    ])
});

/// Transaction-type description for a two-digit code.
pub fn transaction_type(code: &str) -> Option<&'static str> {
    TRANSACTION_TYPES.get(code).copied()
}

/// Account-from description for a two-digit code.
pub fn account_type_from(code: &str) -> Option<&'static str> {
    ACCOUNT_TYPES.get(code).copied()
}

/// Account-to description for a two-digit code.
pub fn account_type_to(code: &str) -> Option<&'static str> {
    ACCOUNT_TYPES.get(code).copied()
}
