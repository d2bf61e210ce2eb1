/// scenario store - record quotes, list newest first, fetch details
use chrono::{Duration, TimeZone, Utc};
use loan_scenario_rs::{
    LoanTerms, SafeTimeProvider, ScenarioStore, TimeSource, DEFAULT_PREVIEW_MONTHS,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== scenario store ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let mut store = ScenarioStore::new();

    // record a few quotes on different days
    let mortgage = store.create(LoanTerms::new(dec!(250000), dec!(5.5), 360)?, &time)?;
    println!("recorded mortgage, payment {}", mortgage.monthly_payment);

    controller.advance(Duration::days(1));
    let car = store.create(LoanTerms::new(dec!(18000), dec!(6.9), 60)?, &time)?;
    println!("recorded car loan, payment {}", car.monthly_payment);

    controller.advance(Duration::days(1));
    let interest_free = store.create(LoanTerms::new(dec!(1200), dec!(0), 12)?, &time)?;
    println!(
        "recorded interest-free loan, payment {}\n",
        interest_free.monthly_payment
    );

    // newest first
    println!("{} scenarios on record:", store.len());
    for scenario in store.list() {
        println!(
            "  {} | payment {} | {}",
            scenario.created_at.format("%Y-%m-%d"),
            scenario.monthly_payment,
            scenario.id
        );
    }

    // full detail recomputes the schedule preview on demand
    let detail = store.detail(car.id, DEFAULT_PREVIEW_MONTHS)?;
    println!("\ncar loan detail:");
    println!("{}", detail.to_json_pretty()?);

    // out-of-range terms are rejected at the boundary
    if let Err(e) = store.create(LoanTerms::new(dec!(1000), dec!(250), 12)?, &time) {
        println!("\nrejected quote: {}", e);
    }

    // checkpoint and restore
    let json = store.to_json()?;
    let restored = ScenarioStore::from_json(&json)?;
    println!("\nrestored store holds {} scenarios", restored.len());

    Ok(())
}
