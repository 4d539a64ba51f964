//! Report publisher: renders a document with every registered renderer and
//! persists each result beneath the report output directory.
//!
//! Orchestration only. A persistence failure for one format is captured in
//! that format's outcome and never prevents the remaining formats from
//! being rendered and written. No retries; retry policy belongs to the
//! build driver, not the reporting core.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::ReportDocument;
use crate::render::{to_markdown, HtmlRenderer, MarkdownRenderer, Renderer, ReportFormat};

/// Default directory reports are written beneath.
pub const DEFAULT_OUTPUT_DIR: &str = "ReportSummary";

const BANNER: &str = "\
###########################
#      Build results      #
###########################";

/// Result of publishing one format.
#[derive(Debug)]
pub struct PublishOutcome {
    /// The format that was published.
    pub format: ReportFormat,

    /// Path the report was written to (or would have been written to).
    pub path: PathBuf,

    /// `Ok` when the report was rendered and persisted.
    pub result: Result<()>,
}

impl PublishOutcome {
    /// Whether this format was published successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Publishes report documents through a fixed list of renderers.
pub struct ReportPublisher {
    output_dir: PathBuf,
    renderers: Vec<Box<dyn Renderer>>,
}

impl ReportPublisher {
    /// Create a publisher with no renderers registered.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            renderers: Vec::new(),
        }
    }

    /// Create a publisher with the default renderers (Markdown, HTML).
    pub fn with_defaults(output_dir: impl Into<PathBuf>) -> Self {
        let mut publisher = Self::new(output_dir);
        publisher.register(Box::new(MarkdownRenderer));
        publisher.register(Box::new(HtmlRenderer));
        publisher
    }

    /// Register an additional renderer.
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.push(renderer);
    }

    /// The directory reports are written beneath.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the document with every registered renderer and persist each
    /// result, returning one outcome per renderer in registration order.
    pub fn publish(&self, doc: &ReportDocument) -> Vec<PublishOutcome> {
        self.renderers
            .iter()
            .map(|renderer| self.publish_one(renderer.as_ref(), doc))
            .collect()
    }

    fn publish_one(&self, renderer: &dyn Renderer, doc: &ReportDocument) -> PublishOutcome {
        let format = renderer.format();
        let path = self.output_dir.join(format.file_name());

        let result = renderer.render(doc).and_then(|report| {
            fs::create_dir_all(&self.output_dir)
                .and_then(|_| fs::write(&path, &report.content))
                .map_err(|source| Error::Persist {
                    format: format.name(),
                    path: path.clone(),
                    source,
                })
        });

        match &result {
            Ok(()) => log::info!("wrote {} report to {}", format.name(), path.display()),
            Err(err) => log::warn!("failed to publish {} report: {}", format.name(), err),
        }

        PublishOutcome {
            format,
            path,
            result,
        }
    }
}

/// The Markdown rendering of the document preceded by the results banner,
/// suitable for echoing to a console or CI log.
pub fn console_summary(doc: &ReportDocument) -> Result<String> {
    let markdown = to_markdown(doc)?;
    Ok(format!("\n{}\n\n{}", BANNER, markdown))
}
