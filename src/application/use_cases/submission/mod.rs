use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::application::use_cases::extraction::DealSheetExtractor;
use crate::application::use_cases::form_fields::build_form_mapping;
use crate::application::use_cases::record_assembler::assemble;
use crate::domain::deal::{DocumentType, FieldMap, FinalRecord};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::export::{exporter_for, RecordExporter};
use crate::infrastructure::storage::{ensure_dir, is_allowed_file, resolve_download, stage_upload};


/// A file received with a submission, before staging
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name as supplied by the client
    pub original_name: String,
    /// Where the received bytes currently live
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn from_path(path: &Path) -> Self {
        let original_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Self {
            original_name,
            path: path.to_path_buf(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub document_type: DocumentType,
    pub upload: Option<UploadedFile>,
    /// Raw form fields keyed by form name (`lease_city`, `retail_roll_no`, ...)
    pub form: HashMap<String, String>,
}

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub record: FinalRecord,
    pub output_path: PathBuf,
    /// Whether a workbook was actually read for this submission
    pub extracted: bool,
}

/// Extract, merge and export one submission at a time.
///
/// Every submission overwrites the same output file; concurrent callers
/// sharing a config race and the last writer wins.
pub struct SubmissionUseCase {
    config: AppConfig,
    exporter: Box<dyn RecordExporter>,
}

impl SubmissionUseCase {
    pub fn new(config: AppConfig) -> Self {
        let exporter = exporter_for(config.output_format);
        Self { config, exporter }
    }

    pub fn with_exporter(config: AppConfig, exporter: Box<dyn RecordExporter>) -> Self {
        Self { config, exporter }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn submit(&self, submission: Submission) -> Result<SubmissionOutcome> {
        let document_type = submission.document_type;
        info!(document_type = %document_type, "Processing submission");

        let extracted = self.extract_upload(document_type, submission.upload.as_ref())?;
        let was_extracted = extracted.is_some();
        let extracted = extracted.unwrap_or_default();

        let form = build_form_mapping(document_type, &submission.form);
        let record = assemble(document_type, extracted, form);

        ensure_dir(&self.config.output_dir)?;
        let output_path = self.config.output_path();
        self.exporter.export(&record, &output_path)?;

        Ok(SubmissionOutcome {
            record,
            output_path,
            extracted: was_extracted,
        })
    }

    /// Path of the last generated record
    pub fn download(&self) -> Result<PathBuf> {
        resolve_download(&self.config.output_path())
    }

    /// `None` when there is nothing to extract: no upload, an extension
    /// outside the allowed set, or (with fallback enabled) an unreadable workbook.
    fn extract_upload(
        &self,
        document_type: DocumentType,
        upload: Option<&UploadedFile>,
    ) -> Result<Option<FieldMap>> {
        let Some(upload) = upload else {
            info!("No upload; using form fields only");
            return Ok(None);
        };

        if !is_allowed_file(&upload.original_name, &self.config.allowed_extensions) {
            warn!(
                file = %upload.original_name,
                allowed = ?self.config.allowed_extensions,
                "Unsupported file type; skipping extraction"
            );
            return Ok(None);
        }

        let staged = stage_upload(&self.config.upload_dir, &upload.original_name, &upload.path)?;

        match DealSheetExtractor::for_document(document_type).extract_file(&staged) {
            Ok(mapping) => {
                info!(
                    file = %staged.display(),
                    fields = mapping.len(),
                    "Extraction complete"
                );
                Ok(Some(mapping))
            }
            Err(AppError::FileFormatError(msg)) if self.config.fallback_on_unreadable_workbook => {
                warn!(
                    file = %staged.display(),
                    error = %msg,
                    "Unreadable workbook; continuing without extraction"
                );
                Ok(None)
            }
            Err(e) => {
                error!(file = %staged.display(), error = %e, "Extraction failed");
                Err(e)
            }
        }
    }
}
