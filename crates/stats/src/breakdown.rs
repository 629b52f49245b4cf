//! Per-category and per-day aggregation.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use billsplit_bills::{Bill, CategoryId};
use billsplit_core::Amount;

/// Summed spend for one category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: CategoryId,
    /// Display name, resolved at output time.
    pub name: &'static str,
    pub amount: Amount,
}

/// A category total with its share of the grand total.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: CategoryId,
    pub name: &'static str,
    pub amount: Amount,
    /// 0.0..=100.0
    pub percent: f64,
}

/// Summed spend for one calendar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: Amount,
}

/// Totals per category, largest first.
///
/// Ties keep the order in which categories were first seen in the snapshot.
/// Categories without bills are omitted.
pub fn by_category(bills: &[Bill]) -> Vec<CategoryTotal> {
    let mut slots: HashMap<CategoryId, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for bill in bills {
        let category = bill.category();
        let slot = *slots.entry(category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category,
                name: category.name(),
                amount: Amount::ZERO,
            });
            totals.len() - 1
        });
        totals[slot].amount += bill.amount();
    }

    // `sort_by` is stable.
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// Totals per calendar day, oldest first. Time of day is ignored.
pub fn by_day(bills: &[Bill]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, Amount> = BTreeMap::new();
    for bill in bills {
        *days.entry(bill.date().day()).or_default() += bill.amount();
    }
    days.into_iter()
        .map(|(date, amount)| DailyTotal { date, amount })
        .collect()
}

/// Mean spend per recorded day; zero when there are no days.
pub fn average(daily: &[DailyTotal]) -> Amount {
    let total: Amount = daily.iter().map(|d| d.amount).sum();
    total.div_rounded(daily.len() as u64)
}

/// Largest single-day spend; zero when there are no days.
pub fn max(daily: &[DailyTotal]) -> Amount {
    daily.iter().map(|d| d.amount).max().unwrap_or(Amount::ZERO)
}

/// [`by_category`] rows annotated with their percentage of the grand total.
pub fn category_shares(bills: &[Bill]) -> Vec<CategoryShare> {
    let rows = by_category(bills);
    let total: Amount = rows.iter().map(|r| r.amount).sum();
    rows.into_iter()
        .filter_map(|row| {
            row.amount.percent_of(total).map(|percent| CategoryShare {
                category: row.category,
                name: row.name,
                amount: row.amount,
                percent,
            })
        })
        .collect()
}
