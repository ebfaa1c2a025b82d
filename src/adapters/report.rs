//! Rendering of validation outcomes for the operator.
//!
//! The validator returns plain data; turning it into warning text (or JSON
//! for scripting) happens here so the core stays presentation-free.

use crate::domain::model::{Inconsistency, ValidationOutcome};
use crate::utils::error::Result;
use std::fmt::Write;

fn describe(inconsistency: &Inconsistency) -> String {
    format!(
        "year {}: due {} but expected around {} ({} days off, compared to year {} due {})",
        inconsistency.year_number,
        inconsistency.actual_date,
        inconsistency.expected_date,
        inconsistency.days_off,
        inconsistency.compared_to_year,
        inconsistency.compared_to_date,
    )
}

/// Renders the outcome as operator-facing text, one line per inconsistency.
pub fn render_text(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => "✅ Payment schedule looks consistent".to_string(),
        ValidationOutcome::Invalid(groups) => {
            let mut out = String::from("⚠️ Payment schedule has irregular dates:\n");
            for group in groups {
                let _ = writeln!(out, "Installment {}:", group.installment_number);
                for inconsistency in &group.inconsistencies {
                    let _ = writeln!(out, "  - {}", describe(inconsistency));
                }
            }
            out.trim_end().to_string()
        }
    }
}

/// Renders the outcome as pretty-printed JSON for machine consumption.
pub fn render_json(outcome: &ValidationOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
