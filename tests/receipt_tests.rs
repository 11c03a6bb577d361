#![cfg(feature = "receipt")]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tillslip::core::*;
use tillslip::receipt::{self, LineEnding, RECEIPT_WIDTH, ReceiptConfigBuilder};

fn invoice_with(subtotal: Decimal, tax_rate: Decimal, codes: &[&str]) -> Invoice {
    let mut inv = Invoice::new(subtotal, tax_rate).unwrap();
    for code in codes {
        assert!(inv.try_apply_discount_code(Some(code)), "{code}");
    }
    inv
}

/// Column of the sign character on a line, counted in chars.
fn sign_column(line: &str, sign: char) -> usize {
    line.chars().skip(1).position(|c| c == sign).unwrap() + 1
}

#[test]
fn discounted_receipt_exact_layout() {
    let inv = invoice_with(dec!(496), dec!(0.08), &["SAVE20"]);
    let expected = "\
|==============================================================================|
|                                    INVOICE                                   |
|==============================================================================|
| SUBTOTAL:                                                             $496.00|
| TAXES (8.00%):                                                   +     $39.68|
| DISCOUNT:                                                        -     $99.20|
| SHIPPING:                                                        +      $5.00|
|------------------------------------------------------------------------------|
| TOTAL:                                                           =    $441.48|
|==============================================================================|
";
    assert_eq!(inv.render(), expected);
    assert_eq!(inv.calculate_total(), dec!(441.48));
}

#[test]
fn free_shipping_receipt_exact_layout() {
    let inv = invoice_with(dec!(49), dec!(0.08), &["SHIPFREE"]);
    let expected = "\
|==============================================================================|
|                                    INVOICE                                   |
|==============================================================================|
| SUBTOTAL:                                                              $49.00|
| TAXES (8.00%):                                                    +     $3.92|
| SHIPPING:                                                      Free Shipping!|
|------------------------------------------------------------------------------|
| TOTAL:                                                            =    $52.92|
|==============================================================================|
";
    assert_eq!(inv.render(), expected);
}

#[test]
fn crlf_receipt_matches_windows_rendering() {
    let inv = invoice_with(dec!(49), dec!(0.08), &["SHIPFREE"]);
    let config = ReceiptConfigBuilder::new()
        .line_ending(LineEnding::CrLf)
        .build();
    let text = receipt::render_with(&inv, &config);
    assert!(text.starts_with(
        "|==============================================================================|\r\n\
         |                                    INVOICE                                   |\r\n"
    ));
    assert!(text.contains(
        "| SHIPPING:                                                      Free Shipping!|\r\n"
    ));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn discount_line_omitted_without_discount() {
    let with = invoice_with(dec!(100), dec!(0.08), &["SAVE10"]).render();
    let without = invoice_with(dec!(100), dec!(0.08), &[]).render();
    assert_eq!(with.lines().count(), 10);
    assert_eq!(without.lines().count(), 9);
    assert!(with.contains("| DISCOUNT:"));
    assert!(!without.contains("DISCOUNT"));
}

#[test]
fn shipfree_alone_keeps_discount_line_out() {
    let text = invoice_with(dec!(10), dec!(0.05), &["SHIPFREE"]).render();
    assert_eq!(text.lines().count(), 9);
    assert!(!text.contains("DISCOUNT"));
}

#[test]
fn zero_subtotal_with_save_code_has_no_discount_line() {
    // 0 * 10% is zero, so the line is suppressed
    let text = invoice_with(dec!(0), dec!(0.08), &["SAVE10"]).render();
    assert!(!text.contains("DISCOUNT"));
}

#[test]
fn shipping_shows_amount_at_threshold() {
    let text = invoice_with(dec!(50), dec!(0.05), &["SHIPFREE"]).render();
    assert!(!text.contains("Free Shipping!"));
    let shipping = text.lines().find(|l| l.starts_with("| SHIPPING:")).unwrap();
    assert!(shipping.contains('+'));
    assert!(shipping.contains("$5.00"));
}

#[test]
fn sign_columns_align() {
    let inv = invoice_with(dec!(496), dec!(0.08), &["SAVE20"]);
    let text = inv.render();
    let lines: Vec<&str> = text.lines().collect();

    let cols = [
        sign_column(lines[4], '+'),
        sign_column(lines[5], '-'),
        sign_column(lines[6], '+'),
        sign_column(lines[8], '='),
    ];
    assert!(cols.iter().all(|c| *c == cols[0]), "{cols:?}");
}

#[test]
fn free_shipping_does_not_shift_sign_column() {
    let free = invoice_with(dec!(49), dec!(0.08), &["SHIPFREE"]).render();
    let paid = invoice_with(dec!(49), dec!(0.08), &[]).render();
    let free: Vec<&str> = free.lines().collect();
    let paid: Vec<&str> = paid.lines().collect();

    assert_eq!(free[4], paid[4]);
    assert_eq!(sign_column(free[4], '+'), sign_column(free[7], '='));
    assert_eq!(sign_column(paid[5], '+'), sign_column(paid[7], '='));
    assert_eq!(sign_column(free[4], '+'), sign_column(paid[5], '+'));
}

#[test]
fn large_amounts_group_thousands() {
    let inv = invoice_with(dec!(1234.5), dec!(0.0825), &["SAVE30", "SHIPFREE"]);
    let text = inv.render();
    assert!(text.contains("| SUBTOTAL:                                                           $1,234.50|"));
    assert!(text.contains("| TAXES (8.25%):                                                 +      $101.85|"));
    assert!(text.contains("| DISCOUNT:                                                      -      $370.35|"));
    assert!(text.contains("| TOTAL:                                                         =      $971.00|"));
    for line in text.lines() {
        assert_eq!(line.chars().count(), RECEIPT_WIDTH, "{line:?}");
    }
}

#[test]
fn display_and_free_function_agree() {
    let inv = invoice_with(dec!(75.25), dec!(0.06), &["SAVE10"]);
    assert_eq!(inv.to_string(), receipt::render(&inv));
    assert_eq!(format!("{inv}"), inv.render());
}

#[test]
fn total_line_matches_calculated_total() {
    let inv = invoice_with(dec!(19.99), dec!(0.0875), &["SAVE30", "SHIPFREE"]);
    let total = receipt::format_currency(inv.calculate_total());
    let text = inv.render();
    let line = text.lines().find(|l| l.starts_with("| TOTAL:")).unwrap();
    assert!(line.ends_with(&format!("{total}|")), "{line:?}");
}

#[test]
fn snapshot_mixed_codes() {
    let inv = invoice_with(dec!(40), dec!(0.05), &["SHIPFREE", "SAVE10"]);
    insta::assert_snapshot!("mixed_codes_receipt", inv.render());
}
