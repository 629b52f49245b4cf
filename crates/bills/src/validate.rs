//! Command-boundary validation.
//!
//! Raw caller input (a form submission) is checked here, field by field,
//! before anything reaches the store. The store itself trusts what it is given.

use serde::{Deserialize, Serialize};

use billsplit_core::{Amount, DomainError, DomainResult};

use crate::bill::{BillPatch, NewBill, Payer};
use crate::category::CategoryId;
use crate::date::BillDate;

pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_DATE: &str = "date";
pub const FIELD_PAID_BY: &str = "paidBy";

/// Unvalidated input for a new bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    /// Category id or display name.
    pub category: String,
    /// Amount in major units.
    pub amount: f64,
    pub description: String,
    /// ISO-8601 date or date-time.
    pub date: String,
    pub paid_by: String,
}

impl BillDraft {
    /// Check every field; the first failing field is reported.
    ///
    /// Fields are checked in form order: category, amount, description, date,
    /// payer. Nothing is coerced or clamped.
    pub fn validate(&self) -> DomainResult<NewBill> {
        Ok(NewBill {
            category: parse_category(&self.category)?,
            amount: parse_amount(self.amount)?,
            description: parse_description(&self.description)?,
            date: parse_date(&self.date)?,
            paid_by: parse_payer(&self.paid_by)?,
        })
    }
}

/// Unvalidated partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPatchDraft {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub paid_by: Option<String>,
}

impl BillPatchDraft {
    /// Check every present field with the same rules as [`BillDraft::validate`].
    pub fn validate(&self) -> DomainResult<BillPatch> {
        Ok(BillPatch {
            category: self.category.as_deref().map(parse_category).transpose()?,
            amount: self.amount.map(parse_amount).transpose()?,
            description: self.description.as_deref().map(parse_description).transpose()?,
            date: self.date.as_deref().map(parse_date).transpose()?,
            paid_by: self.paid_by.as_deref().map(parse_payer).transpose()?,
        })
    }
}

fn parse_category(raw: &str) -> DomainResult<CategoryId> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(FIELD_CATEGORY, "is required"));
    }
    CategoryId::resolve(raw).ok_or_else(|| {
        DomainError::validation(FIELD_CATEGORY, format!("unknown category '{raw}'"))
    })
}

fn parse_amount(raw: f64) -> DomainResult<Amount> {
    let amount = Amount::try_from_major(raw)
        .ok_or_else(|| DomainError::validation(FIELD_AMOUNT, "must be a finite number"))?;
    if !amount.is_positive() {
        return Err(DomainError::validation(FIELD_AMOUNT, "must be greater than zero"));
    }
    if amount > Amount::MAX_BILL {
        return Err(DomainError::validation(
            FIELD_AMOUNT,
            format!("must not exceed {}", Amount::MAX_BILL),
        ));
    }
    Ok(amount)
}

fn parse_description(raw: &str) -> DomainResult<String> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(FIELD_DESCRIPTION, "is required"));
    }
    Ok(raw.to_string())
}

fn parse_date(raw: &str) -> DomainResult<BillDate> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(FIELD_DATE, "is required"));
    }
    BillDate::parse(raw).ok_or_else(|| {
        DomainError::validation(FIELD_DATE, format!("'{raw}' is not an ISO-8601 date"))
    })
}

fn parse_payer(raw: &str) -> DomainResult<Payer> {
    Payer::parse(raw).ok_or_else(|| {
        DomainError::validation(FIELD_PAID_BY, "must be 'partner1' or 'partner2'")
    })
}
