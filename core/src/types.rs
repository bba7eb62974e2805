//! Typed request keys, validated once at the boundary.
//!
//! A malformed key is an `InvalidInput` (400). A well-formed key outside
//! its numeric domain is a `NotFound` (404) and never reaches the RNG.

use crate::error::{MockError, MockResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const REPORT_MIN: u64 = 1;
pub const REPORT_MAX: u64 = 99_999;

pub const MSISDN_MIN: u64 = 18_111_111;
pub const MSISDN_MAX: u64 = 99_900_000_000_000;

pub const FOLIO_MIN: u64 = 100_000;
pub const FOLIO_MAX: u64 = 900_000;
pub const FOLIO_LEN: usize = 6;

static MSISDN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d{7,13}$").expect("valid msisdn pattern"));

/// Incident report number in [1, 99999].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportNumber(u64);

impl ReportNumber {
    pub fn new(value: u64) -> MockResult<Self> {
        if !(REPORT_MIN..=REPORT_MAX).contains(&value) {
            return Err(MockError::not_found("Reporte", value));
        }
        Ok(Self(value))
    }

    /// Parse a path segment. Non-integers are invalid; integers
    /// outside the range (including negatives and overflow) are misses.
    pub fn parse(raw: &str) -> MockResult<Self> {
        let raw = raw.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MockError::invalid("report", format!("'{raw}' is not an integer")));
        }
        if negative {
            return Err(MockError::not_found("Reporte", raw));
        }
        match digits.parse::<u64>() {
            Ok(value) => Self::new(value),
            Err(_) => Err(MockError::not_found("Reporte", raw)),
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReportNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mobile subscriber number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Msisdn(u64);

impl Msisdn {
    pub fn parse(raw: &str) -> MockResult<Self> {
        if !MSISDN_PATTERN.is_match(raw) {
            return Err(MockError::invalid(
                "msisdn",
                format!("'{raw}' does not match ^[1-9]\\d{{7,13}}$"),
            ));
        }
        let value: u64 = raw
            .parse()
            .map_err(|_| MockError::invalid("msisdn", format!("'{raw}' is not numeric")))?;
        if !(MSISDN_MIN..=MSISDN_MAX).contains(&value) {
            return Err(MockError::not_found("Cliente", value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Six-digit tracking code for block/reactivate actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Folio(u64);

impl Folio {
    pub fn from_value(value: u64) -> MockResult<Self> {
        if !(FOLIO_MIN..=FOLIO_MAX).contains(&value) {
            return Err(MockError::not_found("Folio", value));
        }
        Ok(Self(value))
    }

    pub fn parse(raw: &str) -> MockResult<Self> {
        if raw.len() != FOLIO_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MockError::invalid("folio", format!("'{raw}' is not a 6-digit string")));
        }
        let value: u64 = raw
            .parse()
            .map_err(|_| MockError::invalid("folio", format!("'{raw}' is not numeric")))?;
        Self::from_value(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Folio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = FOLIO_LEN)
    }
}

impl Serialize for Folio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The identifying input of a request, as seen by the outcome policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKey {
    Report(ReportNumber),
    Msisdn(Msisdn),
    /// Report creation has no key yet; only the customer name can pin it.
    CustomerName(String),
}

impl RequestKey {
    /// RNG seed for this key. Customer names never seed.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Report(r) => Some(r.value()),
            Self::Msisdn(m) => Some(m.value()),
            Self::CustomerName(_) => None,
        }
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(r) => write!(f, "report:{r}"),
            Self::Msisdn(m) => write!(f, "msisdn:{m}"),
            Self::CustomerName(n) => write!(f, "nombre:{n}"),
        }
    }
}
