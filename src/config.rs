use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{PlanError, Result};
use crate::types::{AncillaryCosts, BalancePolicy, Periodicity};

/// Per-run calculation request.
///
/// Every plan computation takes one of these explicitly; there is no
/// ambient session state. The `calculation_date` doubles as the first
/// payment date (the first installment is due on the calculation date
/// itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationContext {
    pub calculation_date: NaiveDate,
    /// monthly interest rate as a fraction (0.0033 for 0.33%)
    pub monthly_rate: Rate,
    /// surcharge applied to every computed interest amount
    pub vat_rate: Rate,
    pub periodicity: Periodicity,
    pub installment_count: u32,
    pub ancillary_costs: AncillaryCosts,
    pub balance_policy: BalancePolicy,
}

impl CalculationContext {
    /// context with the fixed 19% VAT, no ancillary costs and the
    /// declining-balance policy
    pub fn new(
        calculation_date: NaiveDate,
        monthly_rate: Rate,
        periodicity: Periodicity,
        installment_count: u32,
    ) -> Self {
        Self {
            calculation_date,
            monthly_rate,
            vat_rate: Rate::VAT,
            periodicity,
            installment_count,
            ancillary_costs: AncillaryCosts::NONE,
            balance_policy: BalancePolicy::SimpleDeclining,
        }
    }

    pub fn with_ancillary_costs(mut self, costs: AncillaryCosts) -> Self {
        self.ancillary_costs = costs;
        self
    }

    pub fn with_balance_policy(mut self, policy: BalancePolicy) -> Self {
        self.balance_policy = policy;
        self
    }

    /// reject contexts the engine must never schedule from
    pub fn validate(&self) -> Result<()> {
        if self.installment_count == 0 {
            return Err(PlanError::InvalidInstallmentCount {
                count: self.installment_count,
            });
        }
        if self.monthly_rate.is_negative() {
            return Err(PlanError::InvalidRate {
                rate: self.monthly_rate,
            });
        }
        if self.vat_rate.is_negative() {
            return Err(PlanError::InvalidRate {
                rate: self.vat_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use rust_decimal_macros::dec;

    fn context(n: u32) -> CalculationContext {
        CalculationContext::new(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            Rate::from_percentage(dec!(0.33)),
            Periodicity::Monthly,
            n,
        )
    }

    #[test]
    fn test_defaults() {
        let ctx = context(3);
        assert_eq!(ctx.vat_rate, Rate::VAT);
        assert_eq!(ctx.balance_policy, BalancePolicy::SimpleDeclining);
        assert_eq!(ctx.ancillary_costs.total(), Money::ZERO);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_zero_installments_rejected() {
        let err = context(0).validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidInstallmentCount { count: 0 }));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut ctx = context(3);
        ctx.monthly_rate = Rate::from_decimal(dec!(-0.01));
        assert!(matches!(ctx.validate(), Err(PlanError::InvalidRate { .. })));
    }
}
