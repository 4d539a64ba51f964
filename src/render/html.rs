//! HTML rendering for report documents.

use crate::error::Result;
use crate::model::{PartKind, ReportDocument, ReportPart};

use super::{RenderedReport, Renderer, ReportFormat};

const HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>Build Report</title>\n</head>\n<body>\n";
const FOOT: &str = "</body>\n</html>";

/// Convert a document to HTML text.
pub fn to_html(doc: &ReportDocument) -> Result<String> {
    HtmlRenderer.render(doc).map(|report| report.content)
}

/// HTML renderer.
///
/// Wraps the document in a minimal envelope and maps headers to
/// `<h1>`/`<h2>`/`<h3>`, body text to `<p>`, and bullets to `<li>` wrapped
/// in one `<ul>` pair per indent level. The repeated-`<ul>` wrapping is a
/// deliberate compatibility quirk, not true nested-list HTML; consumers of
/// the original output depend on it.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, doc: &ReportDocument) -> Result<RenderedReport> {
        let mut output = String::from(HEAD);

        for part in doc.sections().iter().flat_map(|section| section.parts()) {
            render_part(&mut output, part);
        }

        output.push_str(FOOT);

        Ok(RenderedReport {
            content: output,
            format: ReportFormat::Html,
        })
    }
}

fn render_part(output: &mut String, part: &ReportPart) {
    match part.kind {
        PartKind::Header1 => element(output, "h1", &part.text),
        PartKind::Header2 => element(output, "h2", &part.text),
        PartKind::Header3 => element(output, "h3", &part.text),
        PartKind::Body => element(output, "p", &part.text),
        PartKind::Bullet => bullet(output, part),
    }
}

fn element(output: &mut String, tag: &str, text: &str) {
    output.push('<');
    output.push_str(tag);
    output.push('>');
    output.push_str(text);
    output.push_str("</");
    output.push_str(tag);
    output.push_str(">\n");
}

fn bullet(output: &mut String, part: &ReportPart) {
    for _ in 0..part.indent {
        output.push_str("<ul>");
    }
    output.push('\n');
    output.push_str("<li>\n");
    output.push_str(&part.text);
    output.push('\n');
    output.push_str("</li>\n");
    for _ in 0..part.indent {
        output.push_str("</ul>");
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReportSection;

    #[test]
    fn test_envelope_for_empty_document() {
        let doc = ReportDocument::new();
        let output = to_html(&doc).unwrap();
        assert_eq!(
            output,
            "<!DOCTYPE html>\n<html>\n<head>\n<title>Build Report</title>\n</head>\n<body>\n</body>\n</html>"
        );
    }

    #[test]
    fn test_header_and_body_elements() {
        let mut doc = ReportDocument::new();
        doc.push_section(
            ReportSection::titled("Status")
                .part(PartKind::Header2, "Messages")
                .part(PartKind::Header3, "Detail")
                .part(PartKind::Body, "text"),
        );

        let output = to_html(&doc).unwrap();
        assert!(output.contains("<h1>Status</h1>\n"));
        assert!(output.contains("<h2>Messages</h2>\n"));
        assert!(output.contains("<h3>Detail</h3>\n"));
        assert!(output.contains("<p>text</p>\n"));
    }

    #[test]
    fn test_bullet_without_indent_is_bare_item() {
        let mut doc = ReportDocument::new();
        doc.new_section("Steps").push(ReportPart::bullet("top", 0));

        let output = to_html(&doc).unwrap();
        assert!(output.contains("\n<li>\ntop\n</li>\n"));
        assert!(!output.contains("<ul>"));
    }

    #[test]
    fn test_bullet_indent_repeats_list_wrapping() {
        let mut doc = ReportDocument::new();
        doc.new_section("Steps")
            .push(ReportPart::bullet("nested", 2));

        let output = to_html(&doc).unwrap();
        assert!(output.contains("<ul><ul>\n<li>\nnested\n</li>\n</ul></ul>\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut doc = ReportDocument::new();
        doc.new_section("Status");
        doc.new_section("Steps")
            .push(ReportPart::bullet("step", 1));

        assert_eq!(to_html(&doc).unwrap(), to_html(&doc).unwrap());
    }
}
