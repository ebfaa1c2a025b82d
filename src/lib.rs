pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, InputFormat};

pub use crate::adapters::input::{CsvRowSource, JsonRowSource};
pub use crate::core::validator::{validate, DRIFT_TOLERANCE_DAYS};
pub use crate::domain::model::{
    GroupWarning, Inconsistency, PaymentRow, PaymentRowDraft, ValidationOutcome,
};
pub use crate::domain::ports::RowSource;
pub use crate::utils::error::{Result, SchedError};
