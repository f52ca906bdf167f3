use chrono::NaiveDate;
use log::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};
use crate::interest::{ConsolidatedBalance, OverdueInterestResult};
use crate::types::Invoice;

/// per-invoice results plus the roll-up the scheduler consumes
#[derive(Debug, Clone)]
pub struct Consolidation {
    pub invoice_results: Vec<OverdueInterestResult>,
    pub balance: ConsolidatedBalance,
}

/// Simple daily-rate interest on overdue invoices.
///
/// The daily rate is the monthly rate over a fixed 30-day month, whatever
/// the actual month length. Pure over its inputs.
pub struct OverdueCalculator {
    monthly_rate: Rate,
    vat_rate: Rate,
}

impl OverdueCalculator {
    pub fn new(monthly_rate: Rate, vat_rate: Rate) -> Self {
        Self { monthly_rate, vat_rate }
    }

    /// interest accrued on one invoice between its due date and
    /// `calculation_date`
    pub fn accrue(&self, invoice: &Invoice, calculation_date: NaiveDate) -> OverdueInterestResult {
        let days_overdue = match invoice.due_date {
            Some(due) => (calculation_date - due).num_days().max(0),
            // no due date means nothing to accrue, never an error
            None => 0,
        };

        let interest_net = invoice
            .open_amount
            .accrue_daily(self.monthly_rate.daily(), days_overdue);
        let vat_amount = interest_net.times_rate(self.vat_rate);

        OverdueInterestResult {
            days_overdue,
            interest_net,
            vat_amount,
            total_interest: interest_net + vat_amount,
        }
    }

    /// accrue every invoice and roll the set up into one balance
    pub fn consolidate(
        &self,
        invoices: &[Invoice],
        calculation_date: NaiveDate,
    ) -> Result<Consolidation> {
        if invoices.is_empty() {
            return Err(PlanError::MissingBalanceData);
        }

        let invoice_results: Vec<OverdueInterestResult> = invoices
            .iter()
            .map(|inv| self.accrue(inv, calculation_date))
            .collect();

        let total_capital: Money = invoices.iter().map(|inv| inv.open_amount).sum();
        let total_interest: Money = invoice_results.iter().map(|r| r.total_interest).sum();

        debug!(
            "consolidated {} invoices: capital {}, overdue interest {}",
            invoices.len(),
            total_capital,
            total_interest
        );

        Ok(Consolidation {
            invoice_results,
            balance: ConsolidatedBalance {
                total_capital,
                total_interest,
                total_balance: total_capital + total_interest,
            },
        })
    }
}
