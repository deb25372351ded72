//! tcx-export - convert an event recording to a TCX file.
//!
//! Reads an event as JSON and writes the TCX document next to it, or to the
//! given output path.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tcxport::config;
use tcxport::export::{self, EventExporter, FailurePolicy, TcxExporter};
use tcxport::model::Event;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Export a recorded event to a Training Center XML file
struct Args {
    /// Event recording as JSON
    input: PathBuf,

    /// Output file; defaults to a name derived from the event
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// Fail on samples TCX cannot represent
    #[clap(long)]
    strict: bool,

    /// Leave out activities that cannot be exported
    #[clap(long)]
    skip_failed: bool,

    /// Write the document on a single line
    #[clap(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let app_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("loading configuration")?;

    let mut settings = app_config.export;
    if args.strict {
        settings.strict_sample_kinds = true;
    }
    if args.skip_failed {
        settings.on_activity_error = FailurePolicy::Skip;
    }
    if args.compact {
        settings.indent_size = 0;
    }

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let event: Event = serde_json::from_str(&content)
        .with_context(|| format!("parsing event from {}", args.input.display()))?;
    event.validate().context("validating event")?;

    tracing::info!(
        event = %event.name,
        activities = event.activities.len(),
        "Exporting event"
    );

    let exporter = TcxExporter::new(settings);
    let report = exporter.export_report(&event)?;
    if !report.is_complete() && exporter.settings().on_activity_error == FailurePolicy::Abort {
        let first = report
            .failures
            .into_iter()
            .next()
            .context("export reported failures without details")?;
        return Err(first).context("exporting event");
    }
    for failure in &report.failures {
        eprintln!("skipped: {}", failure);
    }

    let output = args.output.unwrap_or_else(|| {
        args.input
            .with_file_name(export::generate_tcx_filename(&event))
    });
    export::write_document(&report.document, &output)
        .with_context(|| format!("writing {}", output.display()))?;

    println!(
        "{} ({}, {} activities)",
        output.display(),
        exporter.file_type(),
        report.exported
    );

    Ok(())
}
