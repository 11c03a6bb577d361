use rust_decimal_macros::dec;
use tillslip::core::*;

fn main() -> Result<(), InvoiceError> {
    let mut invoice = Invoice::new(dec!(496), dec!(0.08))?;

    for code in ["SAVE10", "SAVE20", "SAVE20", "FREESHIP", "SHIPFREE"] {
        let applied = invoice.try_apply_discount_code(Some(code));
        println!("{code:<10} {}", if applied { "applied" } else { "rejected" });
    }

    let codes: Vec<&str> = invoice.discount_codes().iter().map(|c| c.code()).collect();
    println!("Active codes: {}", codes.join(", "));
    println!("Total: {}", invoice.calculate_total());
    println!();
    print!("{invoice}");

    if let Err(e) = Invoice::new(dec!(-1), dec!(0.08)) {
        println!("\nConstruction error: {e}");
    }

    Ok(())
}
