//! Invoice entity, discount codes, and derived amounts.
//!
//! An [`Invoice`] models exactly one pretax subtotal plus a tax rate.
//! Discount codes adjust it; [`Breakdown`] holds every derived amount so
//! totals and the receipt never disagree.

mod discount;
mod error;
mod invoice;
mod totals;

pub use discount::*;
pub use error::*;
pub use invoice::*;
pub use totals::*;
