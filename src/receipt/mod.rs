//! Fixed-width text receipt.
//!
//! Renders an [`Invoice`](crate::core::Invoice) as an 80-column bordered
//! block: banner, subtotal, taxes, optional discount, shipping, total.
//!
//! # Example
//!
//! ```
//! use tillslip::core::Invoice;
//! use tillslip::receipt::{LineEnding, ReceiptConfigBuilder, render_with};
//! use rust_decimal_macros::dec;
//!
//! let invoice = Invoice::new(dec!(40), dec!(0.05)).unwrap();
//! let config = ReceiptConfigBuilder::new().line_ending(LineEnding::CrLf).build();
//! let text = render_with(&invoice, &config);
//! assert!(text.lines().all(|l| l.trim_end_matches('\r').chars().count() == 80));
//! ```

pub mod format;
mod render;

pub use format::{format_currency, format_percent};
pub use render::{LineEnding, RECEIPT_WIDTH, ReceiptConfig, ReceiptConfigBuilder, render, render_with};
