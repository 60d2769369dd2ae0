use clinic_model::{ImportPreview, ImportResult};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a preview requires a fresh upload")]
    PreviewWithoutUpload,
    #[error("commit requires a confirmed preview")]
    CommitWithoutPreview,
}

/// Lifecycle of one import: `Upload -> Preview -> Result`, with an explicit
/// reset back to `Upload` from anywhere. The pipeline stages themselves are
/// stateless; this value is owned by the caller and gates one in-flight
/// import at a time. Abandoning a session drops the preview/result without
/// compensation; entities already created stay created.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImportSession {
    #[default]
    Upload,
    Preview(ImportPreview),
    Result(ImportResult),
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the preview step after a successful parse and validation pass.
    pub fn load_preview(&mut self, preview: ImportPreview) -> Result<(), SessionError> {
        if !matches!(self, ImportSession::Upload) {
            return Err(SessionError::PreviewWithoutUpload);
        }
        *self = ImportSession::Preview(preview);
        Ok(())
    }

    /// Record the committed result. Only legal from the preview step.
    pub fn complete(&mut self, result: ImportResult) -> Result<(), SessionError> {
        if !matches!(self, ImportSession::Preview(_)) {
            return Err(SessionError::CommitWithoutPreview);
        }
        *self = ImportSession::Result(result);
        Ok(())
    }

    /// Drop any preview or result and return to the upload step.
    pub fn reset(&mut self) {
        *self = ImportSession::Upload;
    }

    pub fn preview(&self) -> Option<&ImportPreview> {
        match self {
            ImportSession::Preview(preview) => Some(preview),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ImportResult> {
        match self {
            ImportSession::Result(result) => Some(result),
            _ => None,
        }
    }
}
