//! Markdown rendering for report documents.

use crate::error::Result;
use crate::model::{PartKind, ReportDocument, ReportPart};

use super::{RenderedReport, Renderer, ReportFormat};

/// Convert a document to Markdown text.
pub fn to_markdown(doc: &ReportDocument) -> Result<String> {
    MarkdownRenderer.render(doc).map(|report| report.content)
}

/// Markdown renderer.
///
/// Emits one line per part: `#`/`##`/`###` headers, verbatim body lines,
/// and `- ` bullets indented four spaces per level. Sections follow one
/// another with no separator beyond each part's own newline.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn render(&self, doc: &ReportDocument) -> Result<RenderedReport> {
        let mut output = String::new();

        for part in doc.sections().iter().flat_map(|section| section.parts()) {
            render_part(&mut output, part);
        }

        Ok(RenderedReport {
            content: output,
            format: ReportFormat::Markdown,
        })
    }
}

fn render_part(output: &mut String, part: &ReportPart) {
    match part.kind {
        PartKind::Header1 => {
            output.push_str("# ");
            output.push_str(&part.text);
        }
        PartKind::Header2 => {
            output.push_str("## ");
            output.push_str(&part.text);
        }
        PartKind::Header3 => {
            output.push_str("### ");
            output.push_str(&part.text);
        }
        PartKind::Body => {
            output.push_str(&part.text);
        }
        PartKind::Bullet => {
            for _ in 0..part.indent {
                output.push_str("    ");
            }
            output.push_str("- ");
            output.push_str(&part.text);
        }
    }
    output.push('\n');
}
