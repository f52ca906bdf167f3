use uuid::Uuid;

use crate::config::CalculationContext;
use crate::decimal::Money;
use crate::interest::ConsolidatedBalance;
use crate::plan::{Installment, Plan};

/// Merges installment records into a plan with its totals.
///
/// The canonical plan total is the installment sum. Ancillary costs were
/// already distributed into each installment, so they are never added
/// again here; an exporter that needs the cost total reads it from the
/// context, not from a second summation.
pub struct PlanAssembler;

impl PlanAssembler {
    pub fn assemble(
        balance: &ConsolidatedBalance,
        ctx: &CalculationContext,
        installments: Vec<Installment>,
    ) -> Plan {
        let total_installment_amount: Money =
            installments.iter().map(|x| x.installment_total).sum();

        Plan {
            id: Uuid::new_v4(),
            periodicity: ctx.periodicity,
            installment_count: ctx.installment_count,
            total_capital: balance.total_capital,
            overdue_interest: balance.total_interest,
            installments,
            total_installment_amount,
            total_plan_amount: total_installment_amount,
        }
    }
}
