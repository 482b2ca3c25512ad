use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Composite identifier of a calendar month: year plus zero-based month index.
///
/// On the wire a month key is the string `"{year}-{monthIndex}"`, e.g. `"2025-2"`
/// for March 2025. That format is what the savings endpoints exchange, so the
/// serde implementations go through [`fmt::Display`] / [`FromStr`] rather than
/// a derived struct representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// Zero-based month index (0 = January, 11 = December)
    pub month0: u32,
}

impl MonthKey {
    /// Create a month key, rejecting out-of-range month indices.
    pub fn new(year: i32, month0: u32) -> Result<Self, ParseMonthKeyError> {
        if month0 > 11 {
            return Err(ParseMonthKeyError(format!("{}-{}", year, month0)));
        }
        Ok(Self { year, month0 })
    }

    /// Month key for the current local month.
    pub fn current() -> Self {
        use chrono::Datelike;
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month0: now.month0(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month0)
    }
}

/// Error returned when a wire string is not a valid `"{year}-{monthIndex}"` key.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid month key '{0}': expected \"{{year}}-{{monthIndex}}\" with index 0-11")]
pub struct ParseMonthKeyError(pub String);

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last '-' so negative years ("-44-0") stay parseable.
        let (year_part, month_part) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseMonthKeyError(s.to_string()))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| ParseMonthKeyError(s.to_string()))?;
        let month0: u32 = month_part
            .parse()
            .map_err(|_| ParseMonthKeyError(s.to_string()))?;
        MonthKey::new(year, month0).map_err(|_| ParseMonthKeyError(s.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One calendar month of daily savings: day of month (1-31) to amount in PKR.
///
/// JSON objects stringify the day keys, which matches the wire contract
/// (`{"10": 800.0}`). Zero-amount entries are kept, not pruned.
pub type MonthLedger = BTreeMap<u32, f64>;

/// The complete per-user record of daily savings entries across all months.
///
/// Serializes transparently as the month-key-to-month-ledger mapping the
/// savings endpoints exchange. Invariant: at most one month ledger per key
/// (guaranteed by the map), all amounts >= 0 (guaranteed by the store that
/// mutates this).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    pub months: BTreeMap<MonthKey, MonthLedger>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Entries for one month, if any were ever recorded.
    pub fn month(&self, key: &MonthKey) -> Option<&MonthLedger> {
        self.months.get(key)
    }
}

/// Body of both savings endpoints: `{ "savings": { "<year>-<month>": { "<day>": amount } } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPayload {
    pub savings: Ledger,
}

/// Request to register a new user id at sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub unique_id: String,
    pub full_name: String,
}

/// Request to verify a returning user's id/name pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub unique_id: String,
    pub full_name: String,
}

/// Outcome of a verify call. `message` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
}

/// One row of the Pakistani bank comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRate {
    pub name: String,
    /// Quoted annual profit rate as displayed, e.g. "20.5%" or "18% (Halal)"
    pub rate: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// One row of the investment comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOption {
    pub name: String,
    pub risk: String,
    #[serde(rename = "return")]
    pub expected_return: String,
    pub description: String,
    pub minimum_amount: String,
    pub duration: String,
    pub liquidity: String,
}
