//! Snapshot filters for the statistics view.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use billsplit_bills::{Bill, CategoryId};

/// Period relative to a reference day (usually today).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Monday–Sunday week containing the reference day.
    Week,
    /// Calendar month of the reference day.
    #[default]
    Month,
    /// Calendar year of the reference day.
    Year,
    All,
}

impl TimeRange {
    pub fn contains(self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TimeRange::Week => day.iso_week() == today.iso_week(),
            TimeRange::Month => day.year() == today.year() && day.month() == today.month(),
            TimeRange::Year => day.year() == today.year(),
            TimeRange::All => true,
        }
    }
}

/// Which bills a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub range: TimeRange,
    /// `None` means every category.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl ReportFilter {
    pub fn everything() -> Self {
        Self {
            range: TimeRange::All,
            category: None,
        }
    }

    pub fn matches(&self, bill: &Bill, today: NaiveDate) -> bool {
        self.range.contains(bill.date().day(), today)
            && self.category.is_none_or(|c| c == bill.category())
    }

    /// Bills passing the filter, in snapshot order.
    pub fn apply(&self, bills: &[Bill], today: NaiveDate) -> Vec<Bill> {
        bills
            .iter()
            .filter(|b| self.matches(b, today))
            .cloned()
            .collect()
    }
}
