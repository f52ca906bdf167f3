use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::Periodicity;

/// Payment dates for a plan plus the trailing reference date.
///
/// The first payment date equals the anchor exactly: the first installment
/// is due on the calculation date itself, not one period later. The
/// trailing date is the (N+1)-th date of the same stepping sequence and
/// exists only so the final period's length can be measured without
/// instantiating an extra payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSequence {
    pub payment_dates: Vec<NaiveDate>,
    pub trailing_date: NaiveDate,
}

impl DateSequence {
    pub fn generate(anchor: NaiveDate, n: u32, periodicity: Periodicity) -> Result<Self> {
        let mut payment_dates = Vec::with_capacity(n as usize);
        let mut cur = anchor;
        for _ in 0..n {
            payment_dates.push(cur);
            cur = periodicity.step(cur)?;
        }
        Ok(Self {
            payment_dates,
            trailing_date: cur,
        })
    }

    /// actual day counts between consecutive reference dates
    /// (payment dates followed by the trailing date)
    pub fn period_days(&self) -> Vec<i64> {
        let mut days = Vec::with_capacity(self.payment_dates.len());
        for pair in self.payment_dates.windows(2) {
            days.push((pair[1] - pair[0]).num_days());
        }
        if let Some(last) = self.payment_dates.last() {
            days.push((self.trailing_date - *last).num_days());
        }
        days
    }
}
