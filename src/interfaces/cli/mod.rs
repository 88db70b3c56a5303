use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::{Submission, SubmissionUseCase, UploadedFile};
use crate::domain::deal::DocumentType;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::{AppConfig, ConfigService};

#[derive(Debug, Parser)]
#[command(
    name = "dealsheet",
    version,
    about = "Extract lease and retail deal sheets into a single export record"
)]
pub struct Cli {
    /// TOML configuration file (defaults to ./dealsheet.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a deal sheet, merge form fields and write the record file
    Submit {
        /// Document type: lease or retail
        #[arg(long = "type", value_parser = parse_document_type)]
        document_type: DocumentType,

        /// Deal sheet workbook (.xlsx or .xlsm)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Form field as key=value, e.g. --field lease_city=Calgary
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Print the path of the generated record, or copy it to --dest
    Download {
        #[arg(long)]
        dest: Option<PathBuf>,
    },
}

fn parse_document_type(value: &str) -> std::result::Result<DocumentType, String> {
    value.parse().map_err(|e: AppError| e.to_string())
}

fn parse_field(value: &str) -> std::result::Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), val.to_string()))
        }
        _ => Err(format!("expected key=value, got {:?}", value)),
    }
}

pub fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::NotFound(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            ConfigService::load_from(path)
        }
        None => ConfigService::load(),
    }
}

pub fn execute(command: Command, config: AppConfig) -> Result<()> {
    let use_case = SubmissionUseCase::new(config);

    match command {
        Command::Submit {
            document_type,
            file,
            fields,
        } => {
            let submission = Submission {
                document_type,
                upload: file.as_deref().map(UploadedFile::from_path),
                form: fields.into_iter().collect::<HashMap<_, _>>(),
            };
            let outcome = use_case.submit(submission)?;
            let rendered = serde_json::to_string_pretty(&outcome.record)
                .map_err(|e| AppError::Internal(format!("Failed to render record: {}", e)))?;
            println!("{}", rendered);
            info!(path = %outcome.output_path.display(), "Record written");
        }
        Command::Download { dest } => {
            let path = use_case.download()?;
            match dest {
                Some(dest) => {
                    fs::copy(&path, &dest)?;
                    println!("{}", dest.display());
                }
                None => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}
