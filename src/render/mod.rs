//! Rendering module for serializing report documents to output formats.
//!
//! Renderers are pure functions of the document: no I/O, no shared state,
//! deterministic output. The set of formats is fixed and statically known;
//! the publisher iterates an explicit list of [`Renderer`] trait objects
//! rather than discovering formats at runtime.

mod html;
mod markdown;

pub use html::{to_html, HtmlRenderer};
pub use markdown::{to_markdown, MarkdownRenderer};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::ReportDocument;

/// Identifies a concrete output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Plain-markup Markdown.
    Markdown,
    /// Hypertext HTML.
    Html,
}

impl ReportFormat {
    /// File extension for this format, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => ".md",
            ReportFormat::Html => ".html",
        }
    }

    /// Canonical output file name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "buildSummary.md",
            ReportFormat::Html => "buildSummary.html",
        }
    }

    /// Lowercase format name, used in logs and error context.
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Html => "html",
        }
    }
}

/// A serialized report in one concrete output format.
///
/// Owned by the caller that requested it; it keeps no reference back to the
/// document it was derived from.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// Fully serialized document content.
    pub content: String,

    /// The format that produced this content.
    pub format: ReportFormat,
}

impl RenderedReport {
    /// Target file extension, including the dot.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    /// Canonical file name for this report.
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }
}

/// Serializes a [`ReportDocument`] into one concrete output format.
///
/// Implementations must be pure: rendering the same document twice yields
/// byte-identical output, and the document is never mutated.
pub trait Renderer: Send + Sync {
    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;

    /// Serialize the document.
    fn render(&self, doc: &ReportDocument) -> Result<RenderedReport>;
}
