//! File-based row sources for the CLI.
//!
//! Both sources are lenient at the row level: an empty or unparseable cell
//! becomes a `None` field in the draft and the validator excludes the row.
//! Only file-level problems (missing file, broken CSV structure, invalid
//! JSON) surface as errors.

use crate::domain::model::PaymentRowDraft;
use crate::domain::ports::RowSource;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

/// Date formats accepted in input files, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn parse_year_number(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn parse_installment_number(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Reads payment rows from a CSV file with a
/// `year_number,installment_number,due_date` header.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    year_number: Option<String>,
    installment_number: Option<String>,
    due_date: Option<String>,
}

impl From<CsvRecord> for PaymentRowDraft {
    fn from(record: CsvRecord) -> Self {
        PaymentRowDraft {
            year_number: record.year_number.as_deref().and_then(parse_year_number),
            installment_number: record
                .installment_number
                .as_deref()
                .and_then(parse_installment_number),
            due_date: record.due_date.as_deref().and_then(parse_due_date),
        }
    }
}

impl RowSource for CsvRowSource {
    fn load(&self) -> Result<Vec<PaymentRowDraft>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut drafts = Vec::new();
        for record in reader.deserialize::<CsvRecord>() {
            drafts.push(PaymentRowDraft::from(record?));
        }
        tracing::debug!("Loaded {} rows from {}", drafts.len(), self.path.display());
        Ok(drafts)
    }
}

/// Reads payment rows from a JSON array of row objects.
#[derive(Debug, Clone)]
pub struct JsonRowSource {
    path: PathBuf,
}

impl JsonRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    year_number: Option<serde_json::Value>,
    #[serde(default)]
    installment_number: Option<serde_json::Value>,
    #[serde(default)]
    due_date: Option<serde_json::Value>,
}

// Numbers may arrive as JSON numbers or as strings off a form; both count.
fn value_as_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<JsonRecord> for PaymentRowDraft {
    fn from(record: JsonRecord) -> Self {
        PaymentRowDraft {
            year_number: record
                .year_number
                .as_ref()
                .and_then(value_as_i64)
                .and_then(|n| i32::try_from(n).ok()),
            installment_number: record
                .installment_number
                .as_ref()
                .and_then(value_as_i64)
                .and_then(|n| u32::try_from(n).ok()),
            due_date: record
                .due_date
                .as_ref()
                .and_then(|v| v.as_str())
                .and_then(parse_due_date),
        }
    }
}

impl RowSource for JsonRowSource {
    fn load(&self) -> Result<Vec<PaymentRowDraft>> {
        let file = File::open(&self.path)?;
        let records: Vec<JsonRecord> = serde_json::from_reader(file)?;
        let drafts: Vec<PaymentRowDraft> =
            records.into_iter().map(PaymentRowDraft::from).collect();
        tracing::debug!("Loaded {} rows from {}", drafts.len(), self.path.display());
        Ok(drafts)
    }
}
