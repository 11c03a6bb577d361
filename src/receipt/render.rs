use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::{format_currency, format_percent};
use crate::core::{Breakdown, Invoice};

/// Width of every receipt line, borders included.
pub const RECEIPT_WIDTH: usize = 80;

const INNER_WIDTH: usize = RECEIPT_WIDTH - 2;
// Right-aligned field after "| SUBTOTAL:", "| DISCOUNT:", "| SHIPPING:".
const LABELED_FIELD: usize = 68;
// Right-aligned field after "| TOTAL:".
const TOTAL_FIELD: usize = 71;
const TITLE: &str = "INVOICE";
const FREE_SHIPPING: &str = "Free Shipping!";

/// Line terminator written after every receipt line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Receipt output options. Layout and widths are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptConfig {
    /// Terminator after each line (default `\n`).
    pub line_ending: LineEnding,
}

/// Builder for [`ReceiptConfig`].
///
/// ```
/// use tillslip::receipt::{LineEnding, ReceiptConfigBuilder};
///
/// let config = ReceiptConfigBuilder::new().line_ending(LineEnding::CrLf).build();
/// assert_eq!(config.line_ending.as_str(), "\r\n");
/// ```
#[derive(Debug, Default)]
pub struct ReceiptConfigBuilder {
    config: ReceiptConfig,
}

impl ReceiptConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line terminator.
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = ending;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ReceiptConfig {
        self.config
    }
}

/// Render `invoice` with the default configuration.
pub fn render(invoice: &Invoice) -> String {
    render_with(invoice, &ReceiptConfig::default())
}

/// Render `invoice` as a fixed-width receipt.
///
/// The DISCOUNT line is omitted when no discount applies. The sign column
/// of TAXES, DISCOUNT, SHIPPING and TOTAL lines up; its width derives from
/// the formatted subtotal.
pub fn render_with(invoice: &Invoice, config: &ReceiptConfig) -> String {
    render_breakdown(&invoice.breakdown(), config)
}

fn render_breakdown(breakdown: &Breakdown, config: &ReceiptConfig) -> String {
    let subtotal = format_currency(breakdown.subtotal);
    let rate = format_percent(breakdown.tax_rate);
    let amount_width = subtotal.chars().count() + 4;
    let signed = |sign: char, amount: Decimal| {
        format!("{sign}{:>amount_width$}", format_currency(amount))
    };

    let mut out = Lines::new(config.line_ending);

    out.rule('=');
    out.push(format!(
        "|{}{}{}|",
        " ".repeat(36),
        TITLE,
        " ".repeat(INNER_WIDTH - 36 - TITLE.len())
    ));
    out.rule('=');

    out.push(format!("| SUBTOTAL:{subtotal:>w$}|", w = LABELED_FIELD));

    let tax = signed('+', breakdown.tax_amount);
    let tax_field = LABELED_FIELD.saturating_sub(rate.chars().count());
    out.push(format!("| TAXES ({rate}):{tax:>tax_field$}|"));

    if breakdown.has_discount() {
        let discount = signed('-', breakdown.discount_amount);
        out.push(format!("| DISCOUNT:{discount:>w$}|", w = LABELED_FIELD));
    }

    let shipping = if breakdown.is_free_shipping() {
        FREE_SHIPPING.to_string()
    } else {
        signed('+', breakdown.shipping_amount)
    };
    out.push(format!("| SHIPPING:{shipping:>w$}|", w = LABELED_FIELD));

    out.rule('-');

    let total = signed('=', breakdown.total);
    out.push(format!("| TOTAL:{total:>w$}|", w = TOTAL_FIELD));

    out.rule('=');

    out.finish()
}

struct Lines {
    buf: String,
    ending: &'static str,
}

impl Lines {
    fn new(ending: LineEnding) -> Self {
        Self {
            buf: String::with_capacity(11 * (RECEIPT_WIDTH + 2)),
            ending: ending.as_str(),
        }
    }

    fn push(&mut self, line: String) {
        self.buf.push_str(&line);
        self.buf.push_str(self.ending);
    }

    fn rule(&mut self, fill: char) {
        let bar: String = std::iter::repeat_n(fill, INNER_WIDTH).collect();
        self.push(format!("|{bar}|"));
    }

    fn finish(self) -> String {
        self.buf
    }
}

impl Invoice {
    /// Render this invoice as a fixed-width receipt (`\n` line endings).
    pub fn render(&self) -> String {
        render(self)
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
