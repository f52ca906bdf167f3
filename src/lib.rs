pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod ingest;
pub mod interest;
pub mod plan;
pub mod rounding;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::CalculationContext;
pub use decimal::{Money, Rate};
pub use engine::{compute_plan, PlanComputation};
pub use errors::{PlanError, Result};
pub use interest::{Consolidation, ConsolidatedBalance, OverdueCalculator, OverdueInterestResult};
pub use plan::{Installment, InstallmentScheduler, Plan, PlanAssembler};
pub use rounding::distribute;
pub use schedule::DateSequence;
pub use types::{AncillaryCosts, BalancePolicy, Invoice, Periodicity, PlanId};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
