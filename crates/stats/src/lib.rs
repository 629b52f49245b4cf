//! Statistics over bill snapshots.
//!
//! Every function here is a pure, deterministic transform of a `&[Bill]`
//! snapshot. Nothing reads or writes storage; callers take a snapshot from the
//! store and pass it in.

pub mod breakdown;
pub mod filter;
pub mod report;
pub mod summary;

pub use breakdown::{
    CategoryShare, CategoryTotal, DailyTotal, average, by_category, by_day, category_shares, max,
};
pub use filter::{ReportFilter, TimeRange};
pub use report::StatisticsReport;
pub use summary::{BillSummary, Settlement, summarize};
