//! Integration tests for the Markdown and HTML renderers.

use buildsum::{
    to_html, to_markdown, HtmlRenderer, MarkdownRenderer, PartKind, Renderer, ReportDocument,
    ReportFormat, ReportPart, ReportSection,
};

fn sample_document() -> ReportDocument {
    let mut doc = ReportDocument::new();
    doc.push_section(ReportSection::new().part(PartKind::Header1, "Build Succeeded!"));
    doc.push_section(
        ReportSection::titled("Build Summary")
            .bullet("Result: Succeeded")
            .bullet("Platform: Android"),
    );
    let steps = doc.new_section("Build Steps & Messages");
    steps.push(ReportPart::new(PartKind::Header2, "Steps [Count: 2]"));
    steps.push(ReportPart::bullet("Compile - 120.5ms", 0));
    steps.push(ReportPart::bullet("[Warning] deprecated API", 1));
    doc
}

#[test]
fn markdown_line_grammar() {
    let output = to_markdown(&sample_document()).unwrap();

    let expected = "\
# Build Succeeded!
# Build Summary
- Result: Succeeded
- Platform: Android
# Build Steps & Messages
## Steps [Count: 2]
- Compile - 120.5ms
    - [Warning] deprecated API
";
    assert_eq!(output, expected);
}

#[test]
fn html_wraps_document_in_envelope() {
    let output = to_html(&sample_document()).unwrap();

    assert!(output.starts_with("<!DOCTYPE html>\n<html>\n<head>\n<title>Build Report</title>\n"));
    assert!(output.ends_with("</body>\n</html>"));
    assert!(output.contains("<h1>Build Succeeded!</h1>"));
    assert!(output.contains("<h2>Steps [Count: 2]</h2>"));
}

#[test]
fn html_bullet_indentation_repeats_list_tags() {
    let output = to_html(&sample_document()).unwrap();

    // Indent 1 wraps the item in exactly one ul pair.
    assert!(output.contains("<ul>\n<li>\n[Warning] deprecated API\n</li>\n</ul>\n"));
    // Indent 0 leaves the item bare.
    assert!(output.contains("\n<li>\nCompile - 120.5ms\n</li>\n"));
}

#[test]
fn renderers_are_deterministic() {
    let doc = sample_document();
    assert_eq!(to_markdown(&doc).unwrap(), to_markdown(&doc).unwrap());
    assert_eq!(to_html(&doc).unwrap(), to_html(&doc).unwrap());
}

#[test]
fn empty_document_produces_minimal_envelopes() {
    let doc = ReportDocument::new();

    assert_eq!(to_markdown(&doc).unwrap(), "");

    let html = to_html(&doc).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<body>\n</body>"));
}

#[test]
fn rendered_reports_carry_format_metadata() {
    let doc = sample_document();

    let markdown = MarkdownRenderer.render(&doc).unwrap();
    assert_eq!(markdown.format, ReportFormat::Markdown);
    assert_eq!(markdown.extension(), ".md");
    assert_eq!(markdown.file_name(), "buildSummary.md");

    let html = HtmlRenderer.render(&doc).unwrap();
    assert_eq!(html.format, ReportFormat::Html);
    assert_eq!(html.extension(), ".html");
    assert_eq!(html.file_name(), "buildSummary.html");
}

#[test]
fn rendering_leaves_document_usable() {
    let doc = sample_document();
    let before = doc.part_count();
    let _ = to_markdown(&doc).unwrap();
    let _ = to_html(&doc).unwrap();
    assert_eq!(doc.part_count(), before);
}
