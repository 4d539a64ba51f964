//! Build result record: outcome, timing, and the step-by-step log.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final outcome of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    /// The build completed successfully.
    Succeeded,
    /// The build failed.
    Failed,
    /// The build was cancelled before completion.
    Cancelled,
    /// The build driver reported no usable outcome.
    Unknown,
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildOutcome::Succeeded => "Succeeded",
            BuildOutcome::Failed => "Failed",
            BuildOutcome::Cancelled => "Cancelled",
            BuildOutcome::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Severity of a build step message.
///
/// `Log` is informational chatter; the Steps section neither counts nor
/// renders it. The other four severities are counted and rendered with a
/// bracketed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// An error message.
    Error,
    /// A failed assertion.
    Assert,
    /// A warning message.
    Warning,
    /// Informational output, filtered from reports.
    Log,
    /// An exception raised during the step.
    Exception,
}

impl Severity {
    /// The bracketed tag for counted severities, `None` for filtered ones.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Severity::Error => Some("[Error]"),
            Severity::Assert => Some("[Assert]"),
            Severity::Warning => Some("[Warning]"),
            Severity::Exception => Some("[Exception]"),
            Severity::Log => None,
        }
    }
}

/// A single message emitted during a build step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepMessage {
    /// Message severity.
    pub severity: Severity,
    /// Free-text content.
    pub text: String,
}

impl StepMessage {
    /// Create a new step message.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

/// One step of the build pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStep {
    /// Step name as reported by the build driver.
    pub name: String,

    /// Wall-clock duration of the step.
    pub duration: Duration,

    /// Nesting depth of the step within the pipeline (0 = top level).
    #[serde(default)]
    pub depth: u8,

    /// Messages emitted while the step ran. Absent in the serialized form
    /// means no messages.
    #[serde(default)]
    pub messages: Vec<StepMessage>,
}

impl BuildStep {
    /// Create a new top-level step with no messages.
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
            depth: 0,
            messages: Vec::new(),
        }
    }

    /// Set the nesting depth.
    pub fn at_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Append a message to this step.
    pub fn with_message(mut self, severity: Severity, text: impl Into<String>) -> Self {
        self.messages.push(StepMessage::new(severity, text));
        self
    }
}

/// The complete record of one build, as produced by the external build
/// driver. All fields are already validated; the reporting core only reads
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Final build outcome.
    pub outcome: BuildOutcome,

    /// Path of the produced artifact (file or directory).
    pub output_path: PathBuf,

    /// When the build started.
    pub started_at: DateTime<Utc>,

    /// When the build ended.
    pub ended_at: DateTime<Utc>,

    /// Total build duration.
    pub duration: Duration,

    /// Ordered step log. Absent in the serialized form means no steps.
    #[serde(default)]
    pub steps: Vec<BuildStep>,
}
