// src/main.rs
use clap::Parser;
use dialoguer::Input;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2markdown::constants::LOG_FILE_NAME;
use notion2markdown::{
    parse_selection, run_doctor, suggests_setup, AppError, BulkExportReport, Command,
    CommandLineInput, ExportCommand, ExporterConfig, NotionExporter, NotionHttpClient, NotionId,
    Page, SETUP_INSTRUCTIONS,
};
use std::fs;
use std::process::ExitCode;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // Diagnostics go to stderr so stdout stays readable for listings.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Prints an operation failure with its hint, if any.
fn report_failure(error: &AppError) {
    eprintln!("❌ Error: {}", error);
    if let Some(hint) = error.user_hint() {
        eprintln!("   Hint: {}", hint);
    }
    if suggests_setup(error) {
        eprintln!();
        eprintln!("{}", SETUP_INSTRUCTIONS);
    }
}

/// Prints the saved files and per-record failures of a bulk export.
fn report_bulk_export(report: &BulkExportReport) {
    for path in &report.saved {
        println!("✅ Saved: {}", path.display());
    }
    for failure in &report.failures {
        eprintln!(
            "❌ Failed: {} ({}): {}",
            failure.title, failure.id, failure.error
        );
    }
    println!(
        "📄 {} file(s) saved, {} failure(s)",
        report.saved.len(),
        report.failures.len()
    );
}

fn print_numbered_pages(pages: &[Page], with_ids: bool) {
    for (i, page) in pages.iter().enumerate() {
        if with_ids {
            println!("{}. {} (ID: {})", i + 1, page.title(), page.id);
        } else {
            println!("{}. {}", i + 1, page.title());
        }
    }
}

/// Runs one command that talks to Notion.
async fn execute(command: &ExportCommand, config: &ExporterConfig) -> Result<bool, AppError> {
    let client = NotionHttpClient::new(&config.api_key, &config.api_base_url)?;
    let exporter = NotionExporter::new(&client, config.output_dir.clone());

    match command {
        ExportCommand::Page { id } => {
            let id = NotionId::parse(id)?;
            let path = exporter.export_page(&id).await?;
            println!("✅ Saved: {}", path.display());
            Ok(true)
        }
        ExportCommand::Database { id } => {
            let id = NotionId::parse(id)?;
            println!("📄 Exporting database {}", id.to_hyphenated());
            let report = exporter.export_database(&id).await?;
            report_bulk_export(&report);
            Ok(report.is_success())
        }
        ExportCommand::Table { id } => {
            let id = NotionId::parse(id)?;
            let path = exporter.export_table(&id).await?;
            println!("✅ Saved: {}", path.display());
            Ok(true)
        }
        ExportCommand::List { query } => {
            let pages = exporter.search(query.as_deref().unwrap_or_default()).await?;
            println!("🔍 {} page(s) found", pages.len());
            print_numbered_pages(&pages, true);
            Ok(true)
        }
        ExportCommand::Search { query } => search_and_export(&exporter, query).await,
        ExportCommand::Info { id } => {
            let id = NotionId::parse(id)?;
            let info = exporter.database_info(&id).await?;
            println!("📄 {}", info.database.title());
            println!("   ID: {}", info.database.id);
            println!("   Pages: {}", info.record_count);
            println!("   Properties:");
            for property in info.database.properties.values() {
                println!("   - {} ({})", property.name, property.property_type);
            }
            Ok(true)
        }
    }
}

/// Searches, asks which results to keep, and exports them.
async fn search_and_export(exporter: &NotionExporter<'_>, query: &str) -> Result<bool, AppError> {
    let pages = exporter.search(query).await?;
    println!("🔍 {} page(s) found", pages.len());
    if pages.is_empty() {
        println!("No pages matched.");
        return Ok(true);
    }
    print_numbered_pages(&pages, false);

    let answer: String = Input::new()
        .with_prompt("Pages to export (e.g. 1,3,5 or 'all')")
        .interact_text()?;
    let indices = parse_selection(&answer, pages.len())?;

    let selected: Vec<Page> = indices.into_iter().map(|i| pages[i].clone()).collect();
    let report = exporter.export_records(selected).await;
    report_bulk_export(&report);
    Ok(report.is_success())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the config may hold the token directly.
    dotenvy::dotenv().ok();

    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("⚠️  Could not initialize logging: {}", e);
    }

    let command = match &cli.command {
        Command::Setup => {
            println!("{}", SETUP_INSTRUCTIONS);
            return ExitCode::SUCCESS;
        }
        Command::Doctor => {
            let report = run_doctor(&cli).await;
            for check in &report.checks {
                match &check.result {
                    Ok(detail) => println!("✅ {}: {}", check.name, detail),
                    Err(e) => println!("❌ {}: {:#}", check.name, e),
                }
            }
            println!("{}/{} checks passed", report.passed(), report.total());
            return if report.is_healthy() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
        Command::Export(command) => command,
    };

    let config = match ExporterConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("Configuration error: {:?}", e);
            report_failure(&e);
            return ExitCode::FAILURE;
        }
    };

    match execute(command, &config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
