use log::debug;

use crate::config::CalculationContext;
use crate::decimal::Money;
use crate::errors::{PlanError, Result};
use crate::interest::ConsolidatedBalance;
use crate::plan::Installment;
use crate::rounding::distribute;
use crate::schedule::DateSequence;
use crate::types::BalancePolicy;

/// Turns a consolidated balance into the N installment records of a plan.
///
/// Capital and ancillary costs are split with the rounding distributor, so
/// each sums exactly to its rounded total. Interest is simple daily-rate
/// interest over the actual days between consecutive payment dates, on a
/// base that evolves per the configured policy. The final installment is
/// charged no interest: there is no subsequent period to bill for.
pub struct InstallmentScheduler {
    policy: BalancePolicy,
}

impl InstallmentScheduler {
    pub fn new(policy: BalancePolicy) -> Self {
        Self { policy }
    }

    pub fn schedule(
        &self,
        balance: &ConsolidatedBalance,
        ctx: &CalculationContext,
    ) -> Result<Vec<Installment>> {
        let n = ctx.installment_count;
        if n == 0 {
            return Err(PlanError::InvalidInstallmentCount { count: n });
        }

        let capital_shares = distribute(balance.total_capital.as_decimal(), n);
        let cost_shares = distribute(ctx.ancillary_costs.total().as_decimal(), n);

        let sequence = DateSequence::generate(ctx.calculation_date, n, ctx.periodicity)?;
        let mut days = sequence.period_days();
        if let Some(last) = days.last_mut() {
            // the final installment projects no days past its own payment date
            *last = 0;
        }

        let daily_rate = ctx.monthly_rate.daily();
        let last_index = (n - 1) as usize;

        let mut installments = Vec::with_capacity(n as usize);
        let mut opening_balance = balance.total_balance;
        let mut prior_interest_total = Money::ZERO;

        for i in 0..n as usize {
            let capital_share = capital_shares[i];

            let base_for_interest = match self.policy {
                BalancePolicy::SimpleDeclining => opening_balance - capital_share,
                // unpaid interest from the prior period compounds into the base
                BalancePolicy::RollingCompound => {
                    opening_balance - capital_share + prior_interest_total
                }
            };

            let interest_net = if i == last_index {
                Money::ZERO
            } else {
                base_for_interest.accrue_daily(daily_rate, days[i])
            };
            let vat_amount = interest_net.times_rate(ctx.vat_rate);
            let interest_total = interest_net + vat_amount;

            debug!(
                "installment {}: opening {}, capital {}, {} days, interest {}",
                i + 1,
                opening_balance,
                capital_share,
                days[i],
                interest_total
            );

            installments.push(Installment {
                sequence_number: (i + 1) as u32,
                payment_date: sequence.payment_dates[i],
                days_in_period: days[i],
                opening_balance,
                capital_share,
                interest_net,
                vat_amount,
                interest_total,
                cost_share: cost_shares[i],
                installment_total: capital_share + interest_total + cost_shares[i],
            });

            opening_balance = base_for_interest;
            prior_interest_total = interest_total;
        }

        Ok(installments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::types::{AncillaryCosts, Periodicity};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn capital_only(amount: i64) -> ConsolidatedBalance {
        ConsolidatedBalance {
            total_capital: Money::from_major(amount),
            total_interest: Money::ZERO,
            total_balance: Money::from_major(amount),
        }
    }

    fn context(n: u32) -> CalculationContext {
        CalculationContext::new(
            ymd(2024, 1, 3),
            Rate::from_percentage(dec!(0.33)),
            Periodicity::Monthly,
            n,
        )
    }

    #[test]
    fn test_reference_scenario_simple_declining() {
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let installments = scheduler.schedule(&capital_only(1_000_000), &context(3)).unwrap();

        assert_eq!(installments.len(), 3);

        let first = &installments[0];
        assert_eq!(first.payment_date, ymd(2024, 1, 3));
        assert_eq!(first.days_in_period, 31);
        assert_eq!(first.opening_balance, Money::from_major(1_000_000));
        assert_eq!(first.capital_share, Money::from_major(333_333));
        // base 666_667 at 0.00011/day for 31 days
        assert_eq!(first.interest_net, Money::from_major(2_273));
        assert_eq!(first.vat_amount, Money::from_major(432));
        assert_eq!(first.installment_total, Money::from_major(336_038));

        let second = &installments[1];
        assert_eq!(second.payment_date, ymd(2024, 2, 3));
        assert_eq!(second.days_in_period, 29);
        assert_eq!(second.opening_balance, Money::from_major(666_667));
        assert_eq!(second.interest_net, Money::from_major(1_063));
        assert_eq!(second.vat_amount, Money::from_major(202));

        let last = &installments[2];
        assert_eq!(last.payment_date, ymd(2024, 3, 3));
        assert_eq!(last.days_in_period, 0);
        assert_eq!(last.capital_share, Money::from_major(333_334));
        assert_eq!(last.interest_total, Money::ZERO);
        assert_eq!(last.installment_total, Money::from_major(333_334));

        // capital conservation across the schedule
        let capital: Money = installments.iter().map(|x| x.capital_share).sum();
        assert_eq!(capital, Money::from_major(1_000_000));
    }

    #[test]
    fn test_rolling_compound_diverges_from_second_installment() {
        let balance = capital_only(1_000_000);
        let ctx = context(3);

        let declining = InstallmentScheduler::new(BalancePolicy::SimpleDeclining)
            .schedule(&balance, &ctx)
            .unwrap();
        let rolling = InstallmentScheduler::new(BalancePolicy::RollingCompound)
            .schedule(&balance, &ctx)
            .unwrap();

        // no prior interest yet, the first installment agrees
        assert_eq!(declining[0], rolling[0]);

        // from the second on, the rolled-in interest raises the base:
        // 333_334 + 2_705 at 0.00011/day for 29 days
        assert_eq!(rolling[1].opening_balance, Money::from_major(666_667));
        assert_eq!(rolling[1].interest_net, Money::from_major(1_072));
        assert_eq!(rolling[1].vat_amount, Money::from_major(204));
        assert!(rolling[1].interest_net > declining[1].interest_net);
    }

    #[test]
    fn test_single_installment_pays_entire_balance() {
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let installments = scheduler.schedule(&capital_only(1_000_000), &context(1)).unwrap();

        assert_eq!(installments.len(), 1);
        let only = &installments[0];
        assert_eq!(only.capital_share, Money::from_major(1_000_000));
        assert_eq!(only.days_in_period, 0);
        assert_eq!(only.interest_total, Money::ZERO);
        assert_eq!(only.installment_total, Money::from_major(1_000_000));
    }

    #[test]
    fn test_final_installment_never_charges_interest() {
        for n in [1u32, 2, 5, 12] {
            let scheduler = InstallmentScheduler::new(BalancePolicy::RollingCompound);
            let installments = scheduler
                .schedule(&capital_only(2_500_000), &context(n))
                .unwrap();
            let last = installments.last().unwrap();
            assert_eq!(last.interest_total, Money::ZERO, "n = {}", n);
            assert_eq!(last.days_in_period, 0, "n = {}", n);
        }
    }

    #[test]
    fn test_vat_derived_from_net_on_every_installment() {
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let installments = scheduler.schedule(&capital_only(7_777_777), &context(6)).unwrap();

        for inst in &installments {
            assert_eq!(inst.vat_amount, inst.interest_net.times_rate(Rate::VAT));
            assert_eq!(inst.interest_total, inst.interest_net + inst.vat_amount);
        }
    }

    #[test]
    fn test_ancillary_costs_distributed_once() {
        let ctx = context(3).with_ancillary_costs(AncillaryCosts {
            judicial: Money::from_major(50_000),
            attorney_fees: Money::from_major(30_000),
            collection: Money::ZERO,
            other: Money::from_major(20_000),
        });
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let installments = scheduler.schedule(&capital_only(900_000), &ctx).unwrap();

        let costs: Money = installments.iter().map(|x| x.cost_share).sum();
        assert_eq!(costs, Money::from_major(100_000));
        for inst in &installments {
            assert_eq!(
                inst.installment_total,
                inst.capital_share + inst.interest_total + inst.cost_share
            );
        }
    }

    #[test]
    fn test_overdue_interest_is_part_of_the_opening_balance() {
        let balance = ConsolidatedBalance {
            total_capital: Money::from_major(1_000_000),
            total_interest: Money::from_major(7_854),
            total_balance: Money::from_major(1_007_854),
        };
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let installments = scheduler.schedule(&balance, &context(2)).unwrap();

        // capital shares split the capital, the opening balance carries the
        // pre-existing interest on top
        assert_eq!(installments[0].opening_balance, Money::from_major(1_007_854));
        assert_eq!(installments[0].capital_share, Money::from_major(500_000));
        assert_eq!(installments[1].opening_balance, Money::from_major(507_854));
    }

    #[test]
    fn test_zero_installments_rejected() {
        let scheduler = InstallmentScheduler::new(BalancePolicy::SimpleDeclining);
        let err = scheduler
            .schedule(&capital_only(1_000_000), &context(0))
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidInstallmentCount { count: 0 }));
    }
}
