pub mod assembler;
pub mod scheduler;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{Periodicity, PlanId};

pub use assembler::PlanAssembler;
pub use scheduler::InstallmentScheduler;

/// one row of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position in the schedule
    pub sequence_number: u32,
    pub payment_date: NaiveDate,
    /// actual days this installment's interest covers
    pub days_in_period: i64,
    /// balance before this installment's capital is repaid
    pub opening_balance: Money,
    pub capital_share: Money,
    pub interest_net: Money,
    pub vat_amount: Money,
    pub interest_total: Money,
    pub cost_share: Money,
    pub installment_total: Money,
}

/// a complete payment plan, constructed fresh per calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub periodicity: Periodicity,
    pub installment_count: u32,
    pub total_capital: Money,
    pub overdue_interest: Money,
    pub installments: Vec<Installment>,
    /// sum of every installment total; ancillary costs are already inside
    pub total_installment_amount: Money,
    /// equals the installment sum, costs are never counted a second time
    pub total_plan_amount: Money,
}

impl Plan {
    /// serialize for an external exporter; no numeric value needs
    /// re-deriving on the other side
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
