use clap::Parser;
use paysched::adapters::report;
use paysched::utils::{logger, validation::Validate};
use paysched::{CliConfig, CsvRowSource, InputFormat, JsonRowSource, RowSource};

fn load_rows(config: &CliConfig) -> paysched::Result<Vec<paysched::PaymentRowDraft>> {
    match config.resolved_format()? {
        InputFormat::Csv => CsvRowSource::new(&config.input).load(),
        InputFormat::Json => JsonRowSource::new(&config.input).load(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting paysched");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let rows = match load_rows(&config) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load payment rows: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                paysched::utils::error::ErrorSeverity::Low => 0,
                paysched::utils::error::ErrorSeverity::Medium => 2,
                paysched::utils::error::ErrorSeverity::High => 1,
                paysched::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!("Loaded {} payment rows", rows.len());

    let outcome = paysched::validate(&rows);

    if config.json {
        println!("{}", report::render_json(&outcome)?);
    } else {
        println!("{}", report::render_text(&outcome));
    }

    // Advisory only: the nonzero code signals warnings to scripts, the
    // operator decides whether to save anyway.
    if !outcome.is_valid() {
        tracing::warn!(
            "⚠️ Found irregular dates in {} installment group(s)",
            outcome.warnings().len()
        );
        std::process::exit(1);
    }

    tracing::info!("✅ Schedule is consistent");
    Ok(())
}
