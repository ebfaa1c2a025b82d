use crate::utils::error::{Result, SchedError};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "paysched")]
#[command(about = "Checks insurance payment schedules for irregular yearly dates")]
pub struct CliConfig {
    /// Path to a CSV or JSON file with the payment rows of one policy
    #[arg(long)]
    pub input: String,

    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Emit the outcome as JSON instead of warning text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Explicit format if given, otherwise inferred from the extension.
    pub fn resolved_format(&self) -> Result<InputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match Path::new(&self.input).extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(SchedError::MissingConfigError {
                field: "format".to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if self.format.is_none() {
            validate_file_extension("input", &self.input, &["csv", "json"])?;
        }
        Ok(())
    }
}
