//! Typed build facts consumed by the report builder.
//!
//! Everything the builder needs arrives through these types as an explicit
//! input at call time; the library never reads ambient state such as
//! environment-global build settings.

mod args;
mod record;
mod settings;

pub use args::{Argument, ArgumentList};
pub use record::{BuildOutcome, BuildRecord, BuildStep, Severity, StepMessage};
pub use settings::{BuildFlags, BuildSettings, TargetPlatform};
