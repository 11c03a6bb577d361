use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::discount::DiscountCode;
use super::error::InvoiceError;
use super::totals::Breakdown;

/// A single-subtotal invoice with optional discount codes.
///
/// Subtotal and tax rate are fixed at construction. Discount codes
/// accumulate through [`Invoice::try_apply_discount_code`]; there is no
/// way to remove one except by applying another code of the SAVE family.
///
/// ```
/// use tillslip::core::*;
/// use rust_decimal_macros::dec;
///
/// let mut invoice = Invoice::new(dec!(100), dec!(0.08)).unwrap();
/// assert!(invoice.try_apply_discount_code(Some("SAVE10")));
/// assert_eq!(invoice.calculate_total(), dec!(103.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InvoiceRecord")]
pub struct Invoice {
    subtotal: Decimal,
    tax_rate: Decimal,
    discount_codes: Vec<DiscountCode>,
}

impl Invoice {
    /// Create an invoice. Zero is valid for both arguments.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::InvalidArgument`] if `subtotal` or `tax_rate` is negative.
    pub fn new(subtotal: Decimal, tax_rate: Decimal) -> Result<Self, InvoiceError> {
        if subtotal < Decimal::ZERO {
            debug!(%subtotal, "rejected negative subtotal");
            return Err(InvoiceError::negative_subtotal());
        }
        if tax_rate < Decimal::ZERO {
            debug!(%tax_rate, "rejected negative tax rate");
            return Err(InvoiceError::negative_tax_rate());
        }

        Ok(Self {
            subtotal,
            tax_rate,
            discount_codes: Vec::new(),
        })
    }

    /// Pretax subtotal.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Tax rate as a fraction.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Applied codes, in application order.
    pub fn discount_codes(&self) -> &[DiscountCode] {
        &self.discount_codes
    }

    /// Whether the code with canonical text `code` is currently applied.
    pub fn has_discount_code(&self, code: &str) -> bool {
        DiscountCode::from_code(code).is_some_and(|c| self.discount_codes.contains(&c))
    }

    /// Apply a discount code given as text.
    ///
    /// Returns `false` without touching the invoice when `code` is `None`,
    /// not on the allow-list, or already applied. A SAVE code replaces any
    /// SAVE code already present; SHIPFREE never evicts one and is never
    /// evicted by one.
    pub fn try_apply_discount_code(&mut self, code: Option<&str>) -> bool {
        let Some(text) = code else {
            debug!("rejected missing discount code");
            return false;
        };
        match DiscountCode::from_code(text) {
            Some(parsed) => self.apply(parsed),
            None => {
                debug!(code = text, "rejected unknown discount code");
                false
            }
        }
    }

    /// Typed form of [`Invoice::try_apply_discount_code`].
    pub fn apply(&mut self, code: DiscountCode) -> bool {
        if self.discount_codes.contains(&code) {
            debug!(%code, "discount code already applied");
            return false;
        }

        if code.is_percentage() {
            self.discount_codes.retain(|existing| {
                let evict = existing.is_percentage();
                if evict {
                    debug!(replaced = %existing, by = %code, "replacing percentage discount");
                }
                !evict
            });
        }

        self.discount_codes.push(code);
        debug!(%code, "applied discount code");
        true
    }

    /// Derived discount, tax, shipping and total.
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::of(self)
    }

    /// Total after discount, tax and shipping, rounded to two decimals
    /// (midpoints away from zero).
    pub fn calculate_total(&self) -> Decimal {
        self.breakdown().total
    }
}

/// Unchecked wire shape; converted through [`Invoice::new`] on deserialize.
#[derive(Deserialize)]
struct InvoiceRecord {
    subtotal: Decimal,
    tax_rate: Decimal,
    #[serde(default)]
    discount_codes: Vec<DiscountCode>,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = InvoiceError;

    fn try_from(record: InvoiceRecord) -> Result<Self, Self::Error> {
        let mut invoice = Invoice::new(record.subtotal, record.tax_rate)?;
        for code in record.discount_codes {
            invoice.apply(code);
        }
        Ok(invoice)
    }
}
