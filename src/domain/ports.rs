use crate::domain::model::PaymentRowDraft;
use crate::utils::error::Result;

/// Anything that can produce the working row set for one policy.
///
/// File-level failures (missing file, unreadable structure) are errors;
/// row-level malformation degrades to `None` fields in the drafts.
pub trait RowSource {
    fn load(&self) -> Result<Vec<PaymentRowDraft>>;
}
