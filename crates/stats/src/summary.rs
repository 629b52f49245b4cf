//! Totals per payer and the balance between the two partners.

use serde::Serialize;

use billsplit_bills::{Bill, Payer};
use billsplit_core::Amount;

/// Derived totals for a snapshot. Never persisted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub total: Amount,
    pub partner1_total: Amount,
    pub partner2_total: Amount,
    /// `partner1_total - partner2_total`.
    pub balance: Amount,
}

/// Who owes whom after splitting the snapshot evenly by payer totals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Settlement {
    Settled,
    /// `creditor` paid more and is owed `amount` by `debtor`.
    Owed {
        creditor: Payer,
        debtor: Payer,
        amount: Amount,
    },
}

impl BillSummary {
    pub fn paid_by(&self, payer: Payer) -> Amount {
        match payer {
            Payer::Partner1 => self.partner1_total,
            Payer::Partner2 => self.partner2_total,
        }
    }

    pub fn settlement(&self) -> Settlement {
        let creditor = match self.balance.minor().signum() {
            0 => return Settlement::Settled,
            1 => Payer::Partner1,
            _ => Payer::Partner2,
        };
        Settlement::Owed {
            creditor,
            debtor: creditor.other(),
            amount: self.balance.abs(),
        }
    }
}

/// Single pass over the snapshot.
pub fn summarize(bills: &[Bill]) -> BillSummary {
    let mut summary = BillSummary::default();
    for bill in bills {
        summary.total += bill.amount();
        match bill.paid_by() {
            Payer::Partner1 => summary.partner1_total += bill.amount(),
            Payer::Partner2 => summary.partner2_total += bill.amount(),
        }
    }
    summary.balance = summary.partner1_total - summary.partner2_total;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{bill, scenario};
    use billsplit_bills::CategoryId;
    use proptest::prelude::*;

    #[test]
    fn scenario_summary() {
        let summary = summarize(&scenario());
        assert_eq!(
            summary,
            BillSummary {
                total: Amount::from_minor(10_000),
                partner1_total: Amount::from_minor(7_000),
                partner2_total: Amount::from_minor(3_000),
                balance: Amount::from_minor(4_000),
            }
        );
        assert_eq!(summary.paid_by(Payer::Partner2), Amount::from_minor(3_000));
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(summarize(&[]), BillSummary::default());
        assert_eq!(summarize(&[]).settlement(), Settlement::Settled);
    }

    #[test]
    fn settlement_follows_the_sign_of_the_balance() {
        assert_eq!(
            summarize(&scenario()).settlement(),
            Settlement::Owed {
                creditor: Payer::Partner1,
                debtor: Payer::Partner2,
                amount: Amount::from_minor(4_000),
            }
        );

        let bills = vec![
            bill(1, 1_000, CategoryId::Food, Payer::Partner1, "2024-01-01"),
            bill(2, 2_500, CategoryId::Food, Payer::Partner2, "2024-01-01"),
        ];
        assert_eq!(
            summarize(&bills).settlement(),
            Settlement::Owed {
                creditor: Payer::Partner2,
                debtor: Payer::Partner1,
                amount: Amount::from_minor(1_500),
            }
        );

        let even = vec![
            bill(1, 1_000, CategoryId::Food, Payer::Partner1, "2024-01-01"),
            bill(2, 1_000, CategoryId::Other, Payer::Partner2, "2024-01-03"),
        ];
        assert_eq!(summarize(&even).settlement(), Settlement::Settled);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: permuting the snapshot does not change the summary.
        #[test]
        fn summary_is_order_independent(
            entries in prop::collection::vec((1i64..100_000i64, any::<bool>()), 0..40),
            seed in any::<u64>(),
        ) {
            let bills: Vec<Bill> = entries
                .iter()
                .enumerate()
                .map(|(i, (minor, first))| {
                    let payer = if *first { Payer::Partner1 } else { Payer::Partner2 };
                    bill(i as u64, *minor, CategoryId::Other, payer, "2024-01-01")
                })
                .collect();

            let mut shuffled = bills.clone();
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
                shuffled.reverse();
            }

            prop_assert_eq!(summarize(&bills), summarize(&shuffled));
            let s = summarize(&bills);
            prop_assert_eq!(s.total, s.partner1_total + s.partner2_total);
        }
    }
}
