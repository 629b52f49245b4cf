//! Everything the statistics view shows, computed in one call.

use chrono::NaiveDate;
use serde::Serialize;

use billsplit_bills::Bill;
use billsplit_core::Amount;

use crate::breakdown::{self, CategoryShare, DailyTotal};
use crate::filter::ReportFilter;
use crate::summary::{self, BillSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub filter: ReportFilter,
    pub bill_count: usize,
    pub summary: BillSummary,
    pub by_category: Vec<CategoryShare>,
    pub by_day: Vec<DailyTotal>,
    pub average_daily: Amount,
    pub max_daily: Amount,
}

impl StatisticsReport {
    pub fn build(bills: &[Bill], filter: &ReportFilter, today: NaiveDate) -> Self {
        let selected = filter.apply(bills, today);
        let by_day = breakdown::by_day(&selected);

        Self {
            filter: *filter,
            bill_count: selected.len(),
            summary: summary::summarize(&selected),
            by_category: breakdown::category_shares(&selected),
            average_daily: breakdown::average(&by_day),
            max_daily: breakdown::max(&by_day),
            by_day,
        }
    }
}
