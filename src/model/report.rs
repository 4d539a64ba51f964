//! Document-level types for generated reports.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a report part, determining how renderers format its text.
///
/// The enumeration is closed by design: renderers match on it exhaustively,
/// so adding a kind forces every renderer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartKind {
    /// Top-level heading.
    Header1,
    /// Second-level heading.
    Header2,
    /// Third-level heading.
    Header3,
    /// Plain body text.
    Body,
    /// Bullet point, optionally indented.
    Bullet,
}

/// The smallest renderable unit of report content.
///
/// Parts are created once when appended to a section and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPart {
    /// How this part should be formatted.
    pub kind: PartKind,

    /// Literal content. Renderers must not reinterpret it beyond what the
    /// target format requires.
    pub text: String,

    /// Indentation depth. Only meaningful for [`PartKind::Bullet`];
    /// treated as 0 for every other kind.
    #[serde(default)]
    pub indent: u8,
}

impl ReportPart {
    /// Create a new part with no indentation.
    pub fn new(kind: PartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            indent: 0,
        }
    }

    /// Create a bullet point at the given indentation depth.
    pub fn bullet(text: impl Into<String>, indent: u8) -> Self {
        Self {
            kind: PartKind::Bullet,
            text: text.into(),
            indent,
        }
    }
}

/// A titled, ordered group of report parts.
///
/// By convention the builder begins every section with a [`PartKind::Header1`]
/// part naming the section; the model does not enforce this, and a section
/// with zero parts is legal and renders as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    parts: Vec<ReportPart>,
}

impl ReportSection {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a section starting with a `Header1` part carrying `title`.
    pub fn titled(title: impl Into<String>) -> Self {
        let mut section = Self::new();
        section.push(ReportPart::new(PartKind::Header1, title));
        section
    }

    /// Append a part to this section.
    pub fn push(&mut self, part: ReportPart) -> &mut Self {
        self.parts.push(part);
        self
    }

    /// Append a part of the given kind, chainable for building sections.
    pub fn part(mut self, kind: PartKind, text: impl Into<String>) -> Self {
        self.parts.push(ReportPart::new(kind, text));
        self
    }

    /// Append a top-level bullet, chainable.
    pub fn bullet(self, text: impl Into<String>) -> Self {
        self.part(PartKind::Bullet, text)
    }

    /// The parts of this section, in append order.
    pub fn parts(&self) -> &[ReportPart] {
        &self.parts
    }

    /// Whether the section has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// A complete report document: an ordered sequence of sections plus the
/// timestamps at which the document was created.
///
/// Documents are write-once, append-only artifacts. Once handed to a
/// renderer a document is only ever read; renderers never mutate it, so a
/// shared reference may be rendered by any number of renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    sections: Vec<ReportSection>,

    /// Creation time in UTC.
    pub created_utc: DateTime<Utc>,

    /// Creation time in the local timezone.
    pub created_local: DateTime<Local>,
}

impl ReportDocument {
    /// Create a new empty document, capturing the creation timestamps.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            created_utc: Utc::now(),
            created_local: Local::now(),
        }
    }

    /// Append a new section titled `title` and return it for further appends.
    ///
    /// The returned borrow ties every subsequent append to this document,
    /// so appending to a section that belongs to another document is not
    /// expressible.
    pub fn new_section(&mut self, title: impl Into<String>) -> &mut ReportSection {
        self.sections.push(ReportSection::titled(title));
        // push above guarantees a last element
        self.sections.last_mut().unwrap()
    }

    /// Append an already-built section.
    pub fn push_section(&mut self, section: ReportSection) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// The sections of this document, in append order. Section order is the
    /// only thing that determines rendered order.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of parts across all sections.
    pub fn part_count(&self) -> usize {
        self.sections.iter().map(|s| s.parts.len()).sum()
    }
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::new()
    }
}
