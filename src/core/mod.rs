pub mod validator;

pub use crate::domain::model::{
    GroupWarning, Inconsistency, PaymentRow, PaymentRowDraft, ValidationOutcome,
};
pub use crate::domain::ports::RowSource;
pub use crate::utils::error::Result;
