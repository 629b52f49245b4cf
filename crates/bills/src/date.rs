//! Bill dates: a calendar day with an optional time of day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";
// `%.f` prints nothing for whole seconds and keeps any sub-second part.
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// When an expense occurred.
///
/// Ordering is by day first, then time of day; a date without a time sorts
/// before any timed entry on the same day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillDate {
    day: NaiveDate,
    time: Option<NaiveTime>,
}

impl BillDate {
    pub fn from_date(day: NaiveDate) -> Self {
        Self { day, time: None }
    }

    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self {
            day: at.date(),
            time: Some(at.time()),
        }
    }

    /// Calendar day, independent of any time of day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Parse an ISO-8601 date or date-time.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]` (a space may replace
    /// the `T`) and RFC 3339 with an offset. For offset forms the wall-clock
    /// date and time as written are kept.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(day) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
            return Some(Self::from_date(day));
        }
        for fmt in [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(at) = NaiveDateTime::parse_from_str(input, fmt) {
                return Some(Self::from_datetime(at));
            }
        }
        DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|at| Self::from_datetime(at.naive_local()))
    }
}

impl From<NaiveDate> for BillDate {
    fn from(value: NaiveDate) -> Self {
        Self::from_date(value)
    }
}

impl From<NaiveDateTime> for BillDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::from_datetime(value)
    }
}

impl core::fmt::Display for BillDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.time {
            Some(time) => write!(f, "{}", self.day.and_time(time).format(DATETIME_FORMAT)),
            None => write!(f, "{}", self.day.format(DATE_FORMAT)),
        }
    }
}

impl Serialize for BillDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BillDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        BillDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }
}
