pub mod overdue;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;

pub use overdue::{Consolidation, OverdueCalculator};

/// overdue interest accrued on a single invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueInterestResult {
    pub days_overdue: i64,
    pub interest_net: Money,
    pub vat_amount: Money,
    pub total_interest: Money,
}

/// a customer's invoices rolled up into one renegotiable balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedBalance {
    /// sum of open invoice amounts
    pub total_capital: Money,
    /// sum of accrued overdue interest, VAT included
    pub total_interest: Money,
    /// capital plus interest, the amount the plan repays
    pub total_balance: Money,
}
