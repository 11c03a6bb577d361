//! # tillslip
//!
//! Single-line retail invoice calculator: a pretax subtotal, a tax rate,
//! at most one percentage discount code (`SAVE10`, `SAVE20`, `SAVE30`)
//! and an independent `SHIPFREE` code, rendered as an 80-column receipt.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use tillslip::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = Invoice::new(dec!(40), dec!(0.05)).unwrap();
//! assert!(invoice.try_apply_discount_code(Some("SHIPFREE")));
//! assert!(!invoice.try_apply_discount_code(Some("FREESHIP")));
//!
//! let breakdown = invoice.breakdown();
//! assert!(breakdown.is_free_shipping());
//! assert_eq!(invoice.calculate_total(), dec!(42.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice, discount codes, breakdown |
//! | `receipt` (default) | Fixed-width text receipt |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "receipt")]
pub mod receipt;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
