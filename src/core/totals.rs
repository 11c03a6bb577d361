use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::discount::DiscountCode;
use super::invoice::Invoice;

/// Flat shipping charge added unless waived.
pub const FLAT_SHIPPING: Decimal = dec!(5.00);

/// SHIPFREE only waives shipping for subtotals strictly below this amount.
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50);

/// Derived amounts of an invoice, computed once and shared by
/// [`Invoice::calculate_total`] and the receipt renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Pretax subtotal as constructed.
    pub subtotal: Decimal,
    /// Tax rate as a fraction (0.08 = 8%).
    pub tax_rate: Decimal,
    /// subtotal * tax_rate. Discounts do not reduce the taxable base.
    pub tax_amount: Decimal,
    /// Amount taken off by the applied SAVE code, zero if none.
    pub discount_amount: Decimal,
    /// Flat shipping, or zero when waived.
    pub shipping_amount: Decimal,
    /// subtotal - discount + tax + shipping, rounded to cents.
    pub total: Decimal,
}

impl Breakdown {
    /// Compute all derived amounts for `invoice`.
    pub fn of(invoice: &Invoice) -> Self {
        let subtotal = invoice.subtotal();
        let tax_rate = invoice.tax_rate();
        let codes = invoice.discount_codes();

        let tax_amount = subtotal * tax_rate;
        let discount_amount = discount_for(subtotal, codes);
        let shipping_amount = shipping_for(subtotal, codes);
        let total = round_half_away(subtotal - discount_amount + tax_amount + shipping_amount, 2);

        Self {
            subtotal,
            tax_rate,
            tax_amount,
            discount_amount,
            shipping_amount,
            total,
        }
    }

    /// True when a SAVE code produced a non-zero discount.
    pub fn has_discount(&self) -> bool {
        !self.discount_amount.is_zero()
    }

    /// True when shipping was waived.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_amount.is_zero()
    }
}

/// Precedence SAVE10, SAVE20, SAVE30 in case more than one is ever present.
fn discount_for(subtotal: Decimal, codes: &[DiscountCode]) -> Decimal {
    let rate = if codes.contains(&DiscountCode::Save10) {
        DiscountCode::Save10.percentage()
    } else if codes.contains(&DiscountCode::Save20) {
        DiscountCode::Save20.percentage()
    } else if codes.contains(&DiscountCode::Save30) {
        DiscountCode::Save30.percentage()
    } else {
        None
    };

    rate.map_or(Decimal::ZERO, |rate| subtotal * rate)
}

fn shipping_for(subtotal: Decimal, codes: &[DiscountCode]) -> Decimal {
    if subtotal < FREE_SHIPPING_THRESHOLD && codes.contains(&DiscountCode::ShipFree) {
        Decimal::ZERO
    } else {
        FLAT_SHIPPING
    }
}

/// Round a Decimal to `dp` decimal places, midpoints away from zero.
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
