/// schedule preview - bounded windows, zero-rate loans, json output
use loan_scenario_rs::{schedule_preview, LoanTerms, DEFAULT_PREVIEW_MONTHS};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== schedule preview ===\n");

    // long loan: the window bounds the preview
    let mortgage = LoanTerms::new(dec!(250000), dec!(5.5), 360)?;
    let preview = schedule_preview(&mortgage, DEFAULT_PREVIEW_MONTHS)?;
    println!("mortgage payment: {}", preview.payment);
    println!("previewed months: {}", preview.rows.len());
    println!("interest over the window: {}", preview.total_interest());
    println!("principal over the window: {}\n", preview.total_principal());

    // short zero-rate loan: the term bounds the preview instead
    let interest_free = LoanTerms::new(dec!(1000), dec!(0), 6)?;
    let preview = schedule_preview(&interest_free, DEFAULT_PREVIEW_MONTHS)?;
    println!("interest-free payment: {}", preview.payment);
    println!(
        "rows returned: {} (term is shorter than the window)",
        preview.rows.len()
    );
    for row in &preview.rows {
        println!(
            "month {}: principal {}, balance {}",
            row.month, row.principal_paid, row.remaining_balance
        );
    }
    // the final month pays 166.65 rather than 166.67: five payments of
    // 166.67 leave only 166.65, and the last period settles what remains

    println!("\nfirst mortgage month as json:");
    let single = schedule_preview(&mortgage, 1)?;
    println!("{}", single.to_json_pretty()?);

    Ok(())
}
