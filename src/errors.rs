use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid installment count: {count}")]
    InvalidInstallmentCount {
        count: u32,
    },

    #[error("missing balance data: no open invoices to consolidate")]
    MissingBalanceData,

    #[error("invalid rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
