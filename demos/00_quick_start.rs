/// quick start - minimal example to get started
use renegotiation_rs::chrono::NaiveDate;
use renegotiation_rs::{compute_plan, CalculationContext, Invoice, Money, Periodicity, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // one overdue invoice for $1.000.000
    let invoices = vec![Invoice::new(
        Money::from_major(1_000_000),
        NaiveDate::from_ymd_opt(2023, 12, 4),
    )];

    // 0.33% monthly, three monthly installments starting today
    let ctx = CalculationContext::new(
        NaiveDate::from_ymd_opt(2024, 1, 3).ok_or("bad date")?,
        Rate::from_percentage(dec!(0.33)),
        Periodicity::Monthly,
        3,
    );

    let computation = compute_plan(&invoices, &ctx)?;

    println!("consolidated balance: {}", computation.balance.total_balance);
    for inst in &computation.plan.installments {
        println!(
            "  #{} {} capital {} interest {} -> {}",
            inst.sequence_number,
            inst.payment_date,
            inst.capital_share,
            inst.interest_total,
            inst.installment_total
        );
    }
    println!("total plan: {}", computation.plan.total_plan_amount);

    Ok(())
}
