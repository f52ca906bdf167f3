use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{PlanError, Result};

/// unique identifier for a computed plan
pub type PlanId = Uuid;

/// installment cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodicity {
    /// calendar month step, day-of-month preserved where possible
    Monthly,
    /// fixed 15 calendar day step
    Semimonthly,
}

impl Periodicity {
    /// next payment date after `date`
    pub fn step(&self, date: NaiveDate) -> Result<NaiveDate> {
        let next = match self {
            Periodicity::Monthly => date.checked_add_months(Months::new(1)),
            Periodicity::Semimonthly => date.checked_add_signed(Duration::days(15)),
        };
        next.ok_or_else(|| PlanError::InvalidDate {
            message: format!("payment date overflow stepping from {}", date),
        })
    }
}

/// how the interest base evolves between installments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalancePolicy {
    /// each period's interest base is the balance net of that period's capital
    SimpleDeclining,
    /// unpaid interest from the prior period compounds into the base
    RollingCompound,
}

/// an open invoice as supplied by the ingestion collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub open_amount: Money,
    pub due_date: Option<NaiveDate>,
}

impl Invoice {
    pub fn new(open_amount: Money, due_date: Option<NaiveDate>) -> Self {
        Self { open_amount, due_date }
    }
}

/// itemized ancillary costs added to the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AncillaryCosts {
    /// costas judiciales
    pub judicial: Money,
    /// honorarios abogados
    pub attorney_fees: Money,
    /// gastos de cobranza
    pub collection: Money,
    /// otros gastos
    pub other: Money,
}

impl AncillaryCosts {
    pub const NONE: AncillaryCosts = AncillaryCosts {
        judicial: Money::ZERO,
        attorney_fees: Money::ZERO,
        collection: Money::ZERO,
        other: Money::ZERO,
    };

    pub fn total(&self) -> Money {
        self.judicial + self.attorney_fees + self.collection + self.other
    }
}
