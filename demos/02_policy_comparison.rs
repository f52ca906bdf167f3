/// policy comparison - the two balance-evolution policies on the same
/// balance, side by side
use renegotiation_rs::chrono::NaiveDate;
use renegotiation_rs::{
    compute_plan, BalancePolicy, CalculationContext, Invoice, Money, Periodicity, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let invoices = vec![Invoice::new(
        Money::from_major(5_000_000),
        NaiveDate::from_ymd_opt(2023, 10, 1),
    )];
    let base_ctx = CalculationContext::new(
        NaiveDate::from_ymd_opt(2024, 1, 3).ok_or("bad date")?,
        Rate::from_percentage(dec!(1.2)),
        Periodicity::Monthly,
        6,
    );

    for policy in [BalancePolicy::SimpleDeclining, BalancePolicy::RollingCompound] {
        let ctx = base_ctx.clone().with_balance_policy(policy);
        let computation = compute_plan(&invoices, &ctx)?;

        let interest: Money = computation
            .plan
            .installments
            .iter()
            .map(|x| x.interest_total)
            .sum();
        println!(
            "{:?}: total interest {}, total plan {}",
            policy, interest, computation.plan.total_plan_amount
        );
    }

    Ok(())
}
