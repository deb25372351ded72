//! Event exporters.
//!
//! Exporters turn a fully built [`Event`] into a document string. Writing the
//! document somewhere is left to the caller, or to [`write_document`] and
//! [`export_to_file`].

pub mod carry;
pub mod dispatch;
pub mod tcx;
pub mod types;

pub use tcx::TcxExporter;
pub use types::{
    Document, ExportError, ExportReport, ExportSettings, FailurePolicy, TCX_FILE_EXTENSION,
    TCX_FILE_TYPE,
};

use crate::model::Event;
use std::path::Path;

/// A document format an event can be exported to.
pub trait EventExporter {
    /// Serialize the event.
    fn export(&self, event: &Event) -> Result<Document, ExportError>;

    /// MIME type of produced documents.
    fn file_type(&self) -> &'static str {
        TCX_FILE_TYPE
    }

    /// File extension of produced documents, without the dot.
    fn file_extension(&self) -> &'static str {
        TCX_FILE_EXTENSION
    }
}

/// Export an event to TCX with default settings.
pub fn export_tcx(event: &Event) -> Result<Document, ExportError> {
    TcxExporter::default().export(event)
}

/// Export an event and write the document to a file.
pub fn export_to_file<E: EventExporter + ?Sized>(
    exporter: &E,
    event: &Event,
    path: &Path,
) -> Result<(), ExportError> {
    let document = exporter.export(event)?;
    write_document(&document, path)
}

/// Write a finished document to a file.
pub fn write_document(document: &Document, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, document.as_str())?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Wrote export");
    Ok(())
}

/// Generate a default filename for an event export.
pub fn generate_tcx_filename(event: &Event) -> String {
    let name: String = event
        .name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let name = if name.is_empty() { "Event".to_string() } else { name };

    match event.activities.first() {
        Some(activity) => format!(
            "{}_{}.{}",
            name,
            activity.start_date.format("%Y%m%d_%H%M%S"),
            TCX_FILE_EXTENSION
        ),
        None => format!("{}.{}", name, TCX_FILE_EXTENSION),
    }
}
