use anyhow::Result;
use chrono::NaiveDate;
use paysched::adapters::report;
use paysched::{validate, CsvRowSource, JsonRowSource, RowSource};
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_csv_rows_load_and_validate() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("rows.csv");
    fs::write(
        &path,
        "year_number,installment_number,due_date\n\
         1,1,2024-01-15\n\
         2,1,2025-01-15\n\
         1,2,2024-07-01\n\
         2,2,2025-08-15\n",
    )?;

    let rows = CsvRowSource::new(&path).load()?;
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].due_date, Some(date(2024, 1, 15)));

    let outcome = validate(&rows);
    assert!(!outcome.is_valid());
    // Only installment 2 drifts (Jul 1 vs Aug 15).
    let warnings = outcome.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].installment_number, 2);
    assert_eq!(warnings[0].inconsistencies[0].days_off, 45);

    Ok(())
}

#[test]
fn test_csv_malformed_cells_become_none() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("rows.csv");
    fs::write(
        &path,
        "year_number,installment_number,due_date\n\
         1,1,15.01.2024\n\
         two,1,2025-01-15\n\
         2,1,not-a-date\n",
    )?;

    let rows = CsvRowSource::new(&path).load()?;
    assert_eq!(rows.len(), 3);
    // Dotted date format parses.
    assert_eq!(rows[0].due_date, Some(date(2024, 1, 15)));
    // Unparseable cells degrade to None instead of failing the load.
    assert_eq!(rows[1].year_number, None);
    assert_eq!(rows[2].due_date, None);

    // Both malformed rows are excluded, leaving a group of one.
    assert!(validate(&rows).is_valid());

    Ok(())
}

#[test]
fn test_csv_missing_file_is_an_error() {
    let result = CsvRowSource::new("/nonexistent/rows.csv").load();
    assert!(result.is_err());
}

#[test]
fn test_json_rows_load_and_validate() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("rows.json");
    fs::write(
        &path,
        serde_json::to_string(&serde_json::json!([
            { "year_number": 1, "installment_number": 1, "due_date": "2024-01-15" },
            { "year_number": "2", "installment_number": 1, "due_date": "2025-02-20" },
            { "year_number": 3, "installment_number": 1, "due_date": null },
            { "installment_number": 1 }
        ]))?,
    )?;

    let rows = JsonRowSource::new(&path).load()?;
    assert_eq!(rows.len(), 4);

    let outcome = validate(&rows);
    let warnings = outcome.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].inconsistencies.len(), 1);
    assert_eq!(warnings[0].inconsistencies[0].days_off, 36);

    Ok(())
}

#[test]
fn test_json_top_level_garbage_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("rows.json");
    fs::write(&path, "{\"not\": \"an array\"}")?;

    assert!(JsonRowSource::new(&path).load().is_err());
    Ok(())
}

#[test]
fn test_outcome_renders_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("rows.csv");
    fs::write(
        &path,
        "year_number,installment_number,due_date\n\
         1,1,2024-01-15\n\
         2,1,2025-02-20\n",
    )?;

    let rows = CsvRowSource::new(&path).load()?;
    let outcome = validate(&rows);

    let text = report::render_text(&outcome);
    assert!(text.contains("Installment 1:"));
    assert!(text.contains("36 days off"));

    let json: serde_json::Value = serde_json::from_str(&report::render_json(&outcome)?)?;
    assert_eq!(json["status"], "invalid");
    assert_eq!(json["warnings"][0]["inconsistencies"][0]["year_number"], 2);

    Ok(())
}
