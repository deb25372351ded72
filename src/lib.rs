//! tcxport - TCX track exporter for recorded fitness activities
//!
//! Walks an in-memory activity recording (events, activities, points and
//! typed samples) and serializes it as a Training Center XML document.
//! Samples recorded while the receiver had no position fix are carried to the
//! next fix instead of being lost.

pub mod config;
pub mod export;
pub mod model;

// Re-export commonly used types
pub use export::{export_tcx, Document, EventExporter, ExportError, ExportSettings, TcxExporter};
pub use model::{Activity, Event, Point, Position, Sample, SampleKind, SportType};
