use serde::{Deserialize, Serialize};

use billsplit_core::{Amount, BillId, Entity};

use crate::category::CategoryId;
use crate::date::BillDate;

/// Which of the two partners paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    Partner1,
    Partner2,
}

impl Payer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::Partner1 => "partner1",
            Payer::Partner2 => "partner2",
        }
    }

    pub fn parse(s: &str) -> Option<Payer> {
        match s.trim() {
            "partner1" => Some(Payer::Partner1),
            "partner2" => Some(Payer::Partner2),
            _ => None,
        }
    }

    /// The other partner.
    pub fn other(&self) -> Payer {
        match self {
            Payer::Partner1 => Payer::Partner2,
            Payer::Partner2 => Payer::Partner1,
        }
    }
}

impl core::fmt::Display for Payer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded expense.
///
/// Fields are read-only; a stored bill changes only through [`Bill::with_patch`]
/// (the store's update operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    id: BillId,
    category: CategoryId,
    amount: Amount,
    description: String,
    date: BillDate,
    paid_by: Payer,
}

impl Bill {
    /// Attach a freshly assigned id to a new bill.
    pub fn new(id: BillId, bill: NewBill) -> Self {
        Self {
            id,
            category: bill.category,
            amount: bill.amount,
            description: bill.description,
            date: bill.date,
            paid_by: bill.paid_by,
        }
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> BillDate {
        self.date
    }

    pub fn paid_by(&self) -> Payer {
        self.paid_by
    }

    /// Replace every field the patch names; the id never changes.
    pub fn with_patch(mut self, patch: BillPatch) -> Self {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(paid_by) = patch.paid_by {
            self.paid_by = paid_by;
        }
        self
    }
}

impl Entity for Bill {
    type Id = BillId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A bill that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub category: CategoryId,
    pub amount: Amount,
    pub description: String,
    pub date: BillDate,
    pub paid_by: Payer,
}

/// Partial update: `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<BillDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<Payer>,
}

impl BillPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.paid_by.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> NewBill {
        NewBill {
            category: CategoryId::Food,
            amount: Amount::from_minor(5_000),
            description: "Lunch".to_string(),
            date: BillDate::parse("2024-01-01").unwrap(),
            paid_by: Payer::Partner1,
        }
    }

    #[test]
    fn new_bill_keeps_every_field() {
        let bill = Bill::new(BillId::from_sequence(1), lunch());
        assert_eq!(bill.id(), &BillId::from_sequence(1));
        assert_eq!(bill.category(), CategoryId::Food);
        assert_eq!(bill.amount(), Amount::from_minor(5_000));
        assert_eq!(bill.description(), "Lunch");
        assert_eq!(bill.paid_by(), Payer::Partner1);
    }

    #[test]
    fn patch_replaces_only_named_fields() {
        let bill = Bill::new(BillId::from_sequence(1), lunch());
        let updated = bill.clone().with_patch(BillPatch {
            amount: Some(Amount::from_minor(4_200)),
            paid_by: Some(Payer::Partner2),
            ..BillPatch::default()
        });

        assert!(updated.same_identity(&bill));
        assert_eq!(updated.amount(), Amount::from_minor(4_200));
        assert_eq!(updated.paid_by(), Payer::Partner2);
        assert_eq!(updated.description(), bill.description());
        assert_eq!(updated.date(), bill.date());
    }

    #[test]
    fn empty_patch_is_identity() {
        let bill = Bill::new(BillId::from_sequence(1), lunch());
        assert!(BillPatch::default().is_empty());
        assert_eq!(bill.clone().with_patch(BillPatch::default()), bill);
    }

    #[test]
    fn persisted_layout_uses_camel_case_fields() {
        let bill = Bill::new(BillId::from_sequence(1), lunch());
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "category": "food",
                "amount": 50.0,
                "description": "Lunch",
                "date": "2024-01-01",
                "paidBy": "partner1",
            })
        );
    }

    #[test]
    fn legacy_records_decode() {
        let raw = r#"{"id":1704067200000,"category":"Food","amount":12.5,
            "description":"Noodles","date":"2024-01-01","paidBy":"partner2"}"#;
        let bill: Bill = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.id().as_sequence(), Some(1_704_067_200_000));
        assert_eq!(bill.category(), CategoryId::Food);
        assert_eq!(bill.amount(), Amount::from_minor(1_250));
    }

    #[test]
    fn unknown_payer_does_not_decode() {
        let raw = r#"{"id":"1","category":"food","amount":1,
            "description":"x","date":"2024-01-01","paidBy":"partner3"}"#;
        assert!(serde_json::from_str::<Bill>(raw).is_err());
    }

    #[test]
    fn payer_other_flips() {
        assert_eq!(Payer::Partner1.other(), Payer::Partner2);
        assert_eq!(Payer::parse("partner2"), Some(Payer::Partner2));
        assert_eq!(Payer::parse("partner3"), None);
    }
}
