//! Report document model.
//!
//! This module defines the intermediate representation (IR) that bridges
//! build facts and output rendering. The model is format-agnostic: a
//! document is an ordered list of sections, each an ordered list of typed
//! parts, and carries no knowledge of Markdown or HTML.

mod report;

pub use report::{PartKind, ReportDocument, ReportPart, ReportSection};
