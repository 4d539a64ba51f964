//! # buildsum
//!
//! Build report generation library.
//!
//! buildsum consumes a structured record of a completed build (outcome,
//! timing, settings snapshot, step-by-step log) and renders it as
//! human-readable documents in multiple output formats. The pipeline is:
//! typed build facts -> [`ReportBuilder`] -> format-agnostic
//! [`ReportDocument`] -> each registered [`Renderer`] -> persisted file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use buildsum::{ArgumentList, BuildSettings, ReportBuilder, ReportPublisher};
//! use buildsum::{BuildFlags, BuildOutcome, BuildRecord, TargetPlatform};
//!
//! fn report(record: &BuildRecord) -> buildsum::Result<()> {
//!     let settings = BuildSettings::new(TargetPlatform::Android, BuildFlags::DEVELOPMENT);
//!     let arguments = ArgumentList::parse(std::env::args().skip(1), &["keystorePass"]);
//!
//!     let doc = ReportBuilder::new(record, &settings, &arguments).build();
//!
//!     let publisher = ReportPublisher::with_defaults("ReportSummary");
//!     for outcome in publisher.publish(&doc) {
//!         if let Err(err) = outcome.result {
//!             eprintln!("{}", err);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: Markdown and HTML, with a closed
//!   [`Renderer`] trait for adding more
//! - **Append-only document model**: reports are write-once audit artifacts
//! - **Typed build facts**: no ambient state; everything arrives as input
//! - **Isolated persistence**: one format failing to write never blocks
//!   the others

pub mod builder;
pub mod error;
pub mod facts;
pub mod model;
pub mod publish;
pub mod render;

// Re-export commonly used types
pub use builder::{path_size_megabytes, ReportBuilder};
pub use error::{Error, Result};
pub use facts::{
    Argument, ArgumentList, BuildFlags, BuildOutcome, BuildRecord, BuildSettings, BuildStep,
    Severity, StepMessage, TargetPlatform,
};
pub use model::{PartKind, ReportDocument, ReportPart, ReportSection};
pub use publish::{console_summary, PublishOutcome, ReportPublisher, DEFAULT_OUTPUT_DIR};
pub use render::{
    to_html, to_markdown, HtmlRenderer, MarkdownRenderer, RenderedReport, Renderer, ReportFormat,
};

/// Build the canonical report document for a build.
///
/// Convenience wrapper around [`ReportBuilder`].
pub fn generate_report(
    record: &BuildRecord,
    settings: &BuildSettings,
    arguments: &ArgumentList,
) -> ReportDocument {
    ReportBuilder::new(record, settings, arguments).build()
}
