#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;
use tillslip::core::{DiscountCode, Invoice};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let subtotal = Decimal::new(i64::from(u16::from_le_bytes([data[0], data[1]])), 2);
    let tax_rate = Decimal::new(i64::from(u16::from_le_bytes([data[2], data[3]])), 4);
    let Ok(mut invoice) = Invoice::new(subtotal, tax_rate) else {
        return;
    };

    // One code attempt per whitespace-separated token; "-" is a missing code.
    if let Ok(s) = std::str::from_utf8(&data[4..]) {
        for token in s.split_whitespace() {
            let code = if token == "-" { None } else { Some(token) };
            invoice.try_apply_discount_code(code);

            let codes = invoice.discount_codes();
            assert!(codes.iter().filter(|c| c.is_percentage()).count() <= 1);
            assert!(codes.iter().filter(|c| **c == DiscountCode::ShipFree).count() <= 1);
        }
    }

    let text = invoice.render();
    assert!(text.lines().all(|l| l.chars().count() == 80));
    assert_eq!(invoice.calculate_total(), invoice.breakdown().total);
});
