use log::info;
use serde::{Deserialize, Serialize};

use crate::config::CalculationContext;
use crate::errors::Result;
use crate::interest::{ConsolidatedBalance, OverdueCalculator, OverdueInterestResult};
use crate::plan::{InstallmentScheduler, Plan, PlanAssembler};
use crate::types::Invoice;

/// everything one plan run produces: per-invoice accruals, the
/// consolidated balance, and the installment plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanComputation {
    pub invoice_results: Vec<OverdueInterestResult>,
    pub balance: ConsolidatedBalance,
    pub plan: Plan,
}

impl PlanComputation {
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Compute a full renegotiation plan for one customer's open invoices.
///
/// Validates the context, accrues overdue interest per invoice, rolls the
/// set up into one balance, schedules the installments and assembles the
/// plan. All-or-nothing: any failure leaves no partial output behind.
pub fn compute_plan(invoices: &[Invoice], ctx: &CalculationContext) -> Result<PlanComputation> {
    ctx.validate()?;

    let calculator = OverdueCalculator::new(ctx.monthly_rate, ctx.vat_rate);
    let consolidation = calculator.consolidate(invoices, ctx.calculation_date)?;

    let scheduler = InstallmentScheduler::new(ctx.balance_policy);
    let installments = scheduler.schedule(&consolidation.balance, ctx)?;
    let plan = PlanAssembler::assemble(&consolidation.balance, ctx, installments);

    info!(
        "plan {}: {} invoices, balance {}, {} installments, total {}",
        plan.id,
        invoices.len(),
        consolidation.balance.total_balance,
        plan.installment_count,
        plan.total_plan_amount
    );

    Ok(PlanComputation {
        invoice_results: consolidation.invoice_results,
        balance: consolidation.balance,
        plan,
    })
}
