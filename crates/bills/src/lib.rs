//! Bills domain module (expense records shared between two partners).
//!
//! Pure domain logic only: the bill record, its fixed reference sets
//! (categories, payers), dates, and the validation applied at the command
//! boundary. No IO, no persistence concerns.

pub mod bill;
pub mod category;
pub mod date;
pub mod validate;

pub use bill::{Bill, BillPatch, NewBill, Payer};
pub use category::{Category, CategoryId};
pub use date::BillDate;
pub use validate::{BillDraft, BillPatchDraft};
