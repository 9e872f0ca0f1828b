// src/config.rs
//! Command line surface and configuration loading.
//!
//! Configuration comes from a JSON file whose string values may contain
//! `${VAR}` placeholders resolved from the environment (after `.env` has been
//! loaded). Command line flags override the file.

use crate::constants::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_DIR, NOTION_API_BASE_URL};
use crate::error::AppError;
use crate::types::{ApiKey, ValidatedUrl, ValidationError};
use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Export Notion pages and databases to Markdown", long_about = None)]
pub struct CommandLineInput {
    /// Path to the JSON config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Notion integration token (overrides the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Directory exported files are written to (overrides the config file)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Base URL of the Notion API
    #[arg(long, global = true, hide = true, default_value = NOTION_API_BASE_URL)]
    pub api_base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(flatten)]
    Export(ExportCommand),
    /// Print integration setup instructions
    Setup,
    /// Check configuration, output directory and API access
    Doctor,
}

/// Commands that talk to the Notion API and need a resolved configuration.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExportCommand {
    /// Export one page to <title>.md
    Page {
        /// Page URL or ID
        id: String,
    },
    /// Export every record of a database to its own file
    Database {
        /// Database URL or ID
        id: String,
    },
    /// Export a database as one Markdown table (<title>_table.md)
    Table {
        /// Database URL or ID
        id: String,
    },
    /// List pages shared with the integration
    List {
        /// Optional search text
        query: Option<String>,
    },
    /// Search pages, pick some interactively and export them
    Search {
        /// Search text
        query: String,
    },
    /// Show a database's title, record count and schema
    Info {
        /// Database URL or ID
        id: String,
    },
}

/// Contents of the config file after placeholder resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub notion: NotionSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionSection {
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_output_dir")]
    pub default_output_dir: String,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

/// Resolved configuration, validated and ready to drive an export.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub api_key: ApiKey,
    pub output_dir: PathBuf,
    pub api_base_url: ValidatedUrl,
}

impl ExporterConfig {
    /// Resolves configuration from the CLI, the config file and the environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let file = match load_config_file(&cli.config, env_lookup) {
            Ok(file) => Some(file),
            // An explicit token makes the file optional.
            Err(AppError::ConfigNotFound { .. }) if cli.token.is_some() => None,
            Err(e) => return Err(e),
        };
        Self::from_sources(
            file,
            cli.token.as_deref(),
            cli.output_dir.as_deref(),
            &cli.api_base_url,
        )
    }

    /// Combines a (possibly absent) file config with command line overrides.
    pub fn from_sources(
        file: Option<FileConfig>,
        token_override: Option<&str>,
        output_dir_override: Option<&Path>,
        api_base_url: &str,
    ) -> Result<Self, AppError> {
        let token = token_override
            .map(str::to_string)
            .or_else(|| file.as_ref().map(|f| f.notion.token.clone()))
            .unwrap_or_default();
        let api_key = validate_token(&token)?;

        let output_dir = output_dir_override
            .map(Path::to_path_buf)
            .or_else(|| file.map(|f| PathBuf::from(f.notion.default_output_dir)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            api_key,
            output_dir,
            api_base_url: ValidatedUrl::parse(api_base_url)?,
        })
    }
}

/// Turns a configured token into an `ApiKey`, classifying rejects as missing.
pub fn validate_token(token: &str) -> Result<ApiKey, AppError> {
    ApiKey::new(token).map_err(|e| match e {
        ValidationError::InvalidApiKey { reason } => AppError::MissingToken(reason),
        other => AppError::Validation(other),
    })
}

/// Reads the config file and resolves `${VAR}` placeholders with `lookup`.
pub fn load_config_file<F>(path: &Path, lookup: F) -> Result<FileConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => AppError::Io(e),
    })?;

    let parse_error = |source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    };
    let raw: Value = serde_json::from_str(&text).map_err(parse_error)?;
    let resolved = map_string_leaves(raw, &|s: &str| resolve_placeholders(s, &lookup));
    let config: FileConfig = serde_json::from_value(resolved).map_err(parse_error)?;

    log::debug!(
        "Loaded config from {} (output dir: {})",
        path.display(),
        config.notion.default_output_dir
    );
    Ok(config)
}

/// Applies `f` to every string leaf of a JSON tree, keeping its shape.
pub fn map_string_leaves<F>(value: Value, f: &F) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::String(s) => Value::String(f(&s)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| map_string_leaves(item, f))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, map_string_leaves(v, f)))
                .collect(),
        ),
        other => other,
    }
}

/// Replaces each `${VAR}` with `lookup(VAR)`; unknown variables stay as written.
pub fn resolve_placeholders<F>(text: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lazy_static! {
        static ref PLACEHOLDER: Regex =
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex is valid");
    }

    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Process environment lookup used outside tests.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
