/// quick start - price a loan and preview its first months
use loan_scenario_rs::{monthly_payment, schedule_preview, LoanTerms};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $250,000 mortgage at 5.5% over 30 years
    let terms = LoanTerms::new(dec!(250000), dec!(5.5), 360)?;

    let payment = monthly_payment(&terms)?;
    println!("monthly payment: {}", payment);

    // first three months of the ledger
    let preview = schedule_preview(&terms, 3)?;
    for row in &preview.rows {
        println!(
            "month {}: interest {}, principal {}, balance {}",
            row.month, row.interest_paid, row.principal_paid, row.remaining_balance
        );
    }

    Ok(())
}
