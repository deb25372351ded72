//! Export types: settings, errors, documents and reports.

use crate::model::SampleKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME type of TCX documents.
pub const TCX_FILE_TYPE: &str = "application/tcx";

/// File extension of TCX documents.
pub const TCX_FILE_EXTENSION: &str = "tcx";

/// What to do when one activity of an event cannot be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole export on the first failing activity
    #[default]
    Abort,
    /// Leave the failing activity out and keep going
    Skip,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Exporter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Spaces per nesting level; 0 writes the document on a single line
    pub indent_size: usize,
    /// Reject activities holding samples TCX cannot represent
    pub strict_sample_kinds: bool,
    /// Handling of activities that fail to export
    pub on_activity_error: FailurePolicy,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            indent_size: 2,
            strict_sample_kinds: false,
            on_activity_error: FailurePolicy::Abort,
        }
    }
}

impl ExportSettings {
    /// Settings producing a single-line document.
    pub fn compact() -> Self {
        Self {
            indent_size: 0,
            ..Default::default()
        }
    }
}

/// Errors during event export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Activity has no points, so it has no lap start time
    #[error("Activity {index} has no points to export")]
    EmptyActivity { index: usize },

    /// Strict mode found a sample TCX has no field for
    #[error("Activity {index} has a {kind} sample that TCX cannot represent")]
    UnrepresentableSampleKind { index: usize, kind: SampleKind },

    /// A value that would be written is NaN or infinite
    #[error("Activity {index} has a non-finite {field} value")]
    NonFiniteValue { index: usize, field: &'static str },

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExportError {
    /// Index of the activity the error belongs to, if any.
    pub fn activity_index(&self) -> Option<usize> {
        match self {
            ExportError::EmptyActivity { index }
            | ExportError::UnrepresentableSampleKind { index, .. }
            | ExportError::NonFiniteValue { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// A finished TCX document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub(crate) fn new(content: String) -> Self {
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn file_type(&self) -> &'static str {
        TCX_FILE_TYPE
    }

    pub fn file_extension(&self) -> &'static str {
        TCX_FILE_EXTENSION
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

/// Outcome of an export that skips failing activities.
#[derive(Debug)]
pub struct ExportReport {
    /// Document holding every activity that exported
    pub document: Document,
    /// Number of activities written to the document
    pub exported: usize,
    /// Per-activity failures, in activity order
    pub failures: Vec<ExportError>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
