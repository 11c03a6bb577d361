//! The fixed allow-list of discount codes.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::InvoiceError;

/// A discount code accepted by [`Invoice`](super::Invoice).
///
/// The `SAVE` codes form the percentage family: at most one of them is
/// applied at a time. `SHIPFREE` is independent of that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountCode {
    /// SAVE10: 10% off the subtotal.
    #[serde(rename = "SAVE10")]
    Save10,
    /// SAVE20: 20% off the subtotal.
    #[serde(rename = "SAVE20")]
    Save20,
    /// SAVE30: 30% off the subtotal.
    #[serde(rename = "SAVE30")]
    Save30,
    /// SHIPFREE: waives flat shipping below the threshold.
    #[serde(rename = "SHIPFREE")]
    ShipFree,
}

impl DiscountCode {
    /// Every accepted code, in canonical order.
    pub const ALL: [DiscountCode; 4] = [Self::Save10, Self::Save20, Self::Save30, Self::ShipFree];

    /// Canonical code text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Save10 => "SAVE10",
            Self::Save20 => "SAVE20",
            Self::Save30 => "SAVE30",
            Self::ShipFree => "SHIPFREE",
        }
    }

    /// Look up a code on the allow-list. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SAVE10" => Some(Self::Save10),
            "SAVE20" => Some(Self::Save20),
            "SAVE30" => Some(Self::Save30),
            "SHIPFREE" => Some(Self::ShipFree),
            _ => None,
        }
    }

    /// True for members of the SAVE family.
    pub fn is_percentage(&self) -> bool {
        self.code().starts_with("SAVE")
    }

    /// Fraction of the subtotal taken off, for SAVE codes.
    pub fn percentage(&self) -> Option<Decimal> {
        match self {
            Self::Save10 => Some(dec!(0.10)),
            Self::Save20 => Some(dec!(0.20)),
            Self::Save30 => Some(dec!(0.30)),
            Self::ShipFree => None,
        }
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DiscountCode {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| InvoiceError::UnknownDiscountCode(s.to_string()))
    }
}
