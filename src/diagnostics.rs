// src/diagnostics.rs
//! `doctor` checks and integration setup instructions.
//!
//! Checks only report; nothing here decides control flow, so failures are
//! carried as `anyhow` errors with context.

use crate::api::{NotionHttpClient, NotionRepository};
use crate::config::{CommandLineInput, ExporterConfig};
use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::AppError;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::{Path, PathBuf};

/// Steps for creating an integration and sharing pages with it.
pub const SETUP_INSTRUCTIONS: &str = "\
=== Notion integration setup ===
1. Open https://www.notion.so/my-integrations
2. Click \"New integration\"
3. Name the integration (for example: Markdown Export)
4. Click Submit
5. Copy the Internal Integration Token
6. Create a .env file next to notion_config.json containing:
   NOTION_TOKEN=<your token>
7. On every page you want to export, add the integration:
   \"...\" menu (top right) -> \"Add connections\" -> pick the integration
";

const SCRATCH_FILE_NAME: &str = ".notion2markdown_write_check";

/// Result of one doctor check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: anyhow::Result<String>,
}

/// All doctor checks, in the order they ran.
#[derive(Debug, Default)]
pub struct DoctorReport {
    pub checks: Vec<CheckOutcome>,
}

impl DoctorReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.result.is_ok()).count()
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn is_healthy(&self) -> bool {
        self.passed() == self.total()
    }

    fn record(&mut self, name: &'static str, result: anyhow::Result<String>) {
        match &result {
            Ok(detail) => log::debug!("doctor: {} ok ({})", name, detail),
            Err(e) => log::debug!("doctor: {} failed: {:#}", name, e),
        }
        self.checks.push(CheckOutcome { name, result });
    }
}

/// Runs the configuration, output directory and API checks.
pub async fn run_doctor(cli: &CommandLineInput) -> DoctorReport {
    let mut report = DoctorReport::default();

    let config = ExporterConfig::resolve(cli);
    report.record(
        "configuration",
        match &config {
            Ok(cfg) => Ok(format!("token {} loaded", cfg.api_key)),
            Err(e) => Err(anyhow!("{}", e).context(format!(
                "could not load {}",
                cli.config.display()
            ))),
        },
    );

    let output_dir = match &config {
        Ok(cfg) => cfg.output_dir.clone(),
        Err(_) => cli
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };
    report.record("output directory", check_output_dir(&output_dir));

    let api = match config {
        Ok(cfg) => match NotionHttpClient::new(&cfg.api_key, &cfg.api_base_url) {
            Ok(client) => check_api(&client).await,
            Err(e) => Err(anyhow::Error::from(e).context("could not build the HTTP client")),
        },
        Err(_) => Err(anyhow!("skipped: no usable token")),
    };
    report.record("Notion API", api);

    report
}

/// Creates the directory if needed and proves it is writable.
pub fn check_output_dir(dir: &Path) -> anyhow::Result<String> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let scratch = dir.join(SCRATCH_FILE_NAME);
    fs::write(&scratch, b"ok").with_context(|| format!("cannot write to {}", dir.display()))?;
    fs::remove_file(&scratch).with_context(|| format!("cannot clean up {}", scratch.display()))?;

    Ok(format!("{} is writable", dir.display()))
}

/// Issues an empty search to confirm the token is accepted.
pub async fn check_api(repository: &dyn NotionRepository) -> anyhow::Result<String> {
    match repository.search_pages("").await {
        Ok(pages) => Ok(format!("{} page(s) visible to the integration", pages.len())),
        Err(e) => {
            let hint = e.user_hint();
            let err = anyhow::Error::from(e);
            Err(match hint {
                Some(hint) => err.context(hint),
                None => err.context("search request failed"),
            })
        }
    }
}

/// Whether an error deserves the setup instructions after it.
pub fn suggests_setup(error: &AppError) -> bool {
    matches!(error, AppError::MissingToken(_) | AppError::ConfigNotFound { .. })
        || error.http_status() == Some(401)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_check_leaves_no_scratch_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");

        let detail = check_output_dir(&target).unwrap();
        assert!(detail.contains("writable"));
        assert!(target.is_dir());
        assert!(!target.join(SCRATCH_FILE_NAME).exists());
    }

    #[test]
    fn test_output_dir_check_fails_on_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(check_output_dir(file.path()).is_err());
    }

    #[test]
    fn test_report_counts() {
        let mut report = DoctorReport::default();
        report.record("a", Ok("fine".to_string()));
        report.record("b", Err(anyhow!("broken")));
        assert_eq!(report.passed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.is_healthy());
    }

    #[test]
    fn test_setup_is_suggested_for_token_problems() {
        assert!(suggests_setup(&AppError::MissingToken("empty".into())));
        assert!(!suggests_setup(&AppError::InvalidSelection("x".into())));
    }

    #[test]
    fn test_instructions_mention_connections() {
        assert!(SETUP_INSTRUCTIONS.contains("Add connections"));
        assert!(SETUP_INSTRUCTIONS.contains("NOTION_TOKEN"));
    }
}
