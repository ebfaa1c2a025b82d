use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A payment row as it arrives from a form, CSV file, or JSON payload.
///
/// Every field is optional: rows in an in-progress edit are routinely
/// half-filled, and a half-filled row cannot violate a date-pattern rule.
/// Drafts with missing fields are excluded from validation, never errored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRowDraft {
    pub year_number: Option<i32>,
    pub installment_number: Option<u32>,
    pub due_date: Option<NaiveDate>,
}

impl PaymentRowDraft {
    pub fn new(
        year_number: Option<i32>,
        installment_number: Option<u32>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            year_number,
            installment_number,
            due_date,
        }
    }

    /// Promotes the draft to an eligible row when every field is present.
    pub fn eligible(&self) -> Option<PaymentRow> {
        Some(PaymentRow {
            year_number: self.year_number?,
            installment_number: self.installment_number?,
            due_date: self.due_date?,
        })
    }
}

/// A fully-populated payment row, eligible for schedule validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub year_number: i32,
    pub installment_number: u32,
    pub due_date: NaiveDate,
}

/// Result of checking one policy's working row set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "warnings", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<GroupWarning>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn warnings(&self) -> &[GroupWarning] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(groups) => groups,
        }
    }
}

/// All deviations found within one installment-number group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupWarning {
    pub installment_number: u32,
    pub inconsistencies: Vec<Inconsistency>,
}

/// One row whose due date strays from the yearly recurrence implied by the
/// preceding row of the same installment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inconsistency {
    pub year_number: i32,
    pub actual_date: NaiveDate,
    pub expected_date: NaiveDate,
    pub compared_to_year: i32,
    pub compared_to_date: NaiveDate,
    pub days_off: i64,
}
