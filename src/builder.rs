//! Report builder: translates build facts into the canonical report
//! document.
//!
//! The builder appends exactly five sections in a fixed order: status,
//! summary, command line arguments, settings, and the step log. None of the
//! sections can fail on bad input; missing collections are treated as empty
//! and unreadable artifact paths as zero bytes.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::facts::{
    ArgumentList, BuildFlags, BuildOutcome, BuildRecord, BuildSettings, Severity, TargetPlatform,
};
use crate::model::{PartKind, ReportDocument, ReportPart, ReportSection};

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Builds a [`ReportDocument`] from typed build facts.
pub struct ReportBuilder<'a> {
    record: &'a BuildRecord,
    settings: &'a BuildSettings,
    arguments: &'a ArgumentList,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder over the given build facts.
    pub fn new(
        record: &'a BuildRecord,
        settings: &'a BuildSettings,
        arguments: &'a ArgumentList,
    ) -> Self {
        Self {
            record,
            settings,
            arguments,
        }
    }

    /// Assemble the five canonical sections into a new document.
    pub fn build(&self) -> ReportDocument {
        log::debug!(
            "building report for {} build with {} steps",
            self.record.outcome,
            self.record.steps.len()
        );

        let mut doc = ReportDocument::new();
        doc.push_section(self.status_section())
            .push_section(self.summary_section())
            .push_section(self.arguments_section())
            .push_section(self.settings_section())
            .push_section(self.steps_section());
        doc
    }

    fn status_section(&self) -> ReportSection {
        let label = match self.record.outcome {
            BuildOutcome::Succeeded => "Build Succeeded!",
            BuildOutcome::Failed => "Build Failed!",
            BuildOutcome::Cancelled => "Build Cancelled!",
            BuildOutcome::Unknown => "Build result is unknown!",
        };
        ReportSection::new().part(PartKind::Header1, label)
    }

    fn summary_section(&self) -> ReportSection {
        let record = self.record;
        let stage = if self.settings.flags.contains(BuildFlags::DEVELOPMENT) {
            "Development"
        } else {
            "Release"
        };

        ReportSection::titled("Build Summary")
            .bullet(format!("Result: {}", record.outcome))
            .bullet(format!("Output Path: {}", record.output_path.display()))
            .bullet(format!(
                "File Size: {:.2} MB",
                path_size_megabytes(&record.output_path)
            ))
            .bullet(format!("Start Time: {}", format_time(record.started_at)))
            .bullet(format!("End Time: {}", format_time(record.ended_at)))
            .bullet(format!("Duration: {}", format_duration(record.duration)))
            .bullet(format!("Platform: {}", self.settings.platform))
            .bullet(format!("Release Stage: {}", stage))
    }

    fn arguments_section(&self) -> ReportSection {
        let mut section = ReportSection::titled("Command Line Arguments");

        for argument in self.arguments.iter() {
            let display = argument.display_value();
            let text = if display.trim().is_empty() {
                format!("found flag {} with no value", argument.name)
            } else {
                format!("found flag {} with value {}", argument.name, display)
            };
            section = section.bullet(text);
        }

        section
    }

    fn settings_section(&self) -> ReportSection {
        let mut section = ReportSection::titled("Build Settings")
            .bullet(format!("Build Target: {}", self.settings.platform))
            .bullet(format!("Build Flags: {}", self.settings.flags));

        for bullet in platform_details(self.settings) {
            section = section.bullet(bullet);
        }

        section
    }

    fn steps_section(&self) -> ReportSection {
        let mut bullets = Vec::new();

        let mut steps = 0usize;
        let mut errors = 0usize;
        let mut asserts = 0usize;
        let mut warnings = 0usize;
        let mut exceptions = 0usize;

        for step in &self.record.steps {
            bullets.push((
                step.depth,
                format!("{} - {:.1}ms", step.name, millis(step.duration)),
            ));
            steps += 1;

            for message in &step.messages {
                // Log-severity chatter is filtered out entirely.
                let counter = match message.severity {
                    Severity::Error => &mut errors,
                    Severity::Assert => &mut asserts,
                    Severity::Warning => &mut warnings,
                    Severity::Exception => &mut exceptions,
                    Severity::Log => continue,
                };
                *counter += 1;

                // tag() is Some for every counted severity
                if let Some(tag) = message.severity.tag() {
                    bullets.push((step.depth + 1, format!("{} {}", tag, message.text)));
                }
            }
        }

        let total = errors + asserts + warnings + exceptions;
        let mut section = ReportSection::titled("Build Steps & Messages")
            .part(PartKind::Header2, format!("Messages [Count: {}]", total))
            .bullet(format!("Errors {}", errors))
            .bullet(format!("Asserts {}", asserts))
            .bullet(format!("Warnings {}", warnings))
            .bullet(format!("Exceptions {}", exceptions))
            .part(PartKind::Header2, format!("Steps [Count: {}]", steps));

        for (indent, text) in bullets {
            section.push(ReportPart::bullet(text, indent));
        }

        section
    }
}

type DetailFn = fn(&BuildSettings) -> Vec<String>;

/// Platform-specific Settings bullets, keyed by platform. Platforms without
/// an entry contribute nothing. Adding a platform means adding one row here.
const PLATFORM_DETAILS: &[(TargetPlatform, DetailFn)] = &[
    (TargetPlatform::MacOs, macos_details),
    (TargetPlatform::Ios, ios_details),
    (TargetPlatform::Android, android_details),
];

fn platform_details(settings: &BuildSettings) -> Vec<String> {
    PLATFORM_DETAILS
        .iter()
        .find(|(platform, _)| *platform == settings.platform)
        .map(|(_, details)| details(settings))
        .unwrap_or_default()
}

fn macos_details(settings: &BuildSettings) -> Vec<String> {
    vec![format!(
        "Build Number: {}",
        settings.build_number.as_deref().unwrap_or_default()
    )]
}

fn ios_details(settings: &BuildSettings) -> Vec<String> {
    vec![format!(
        "Bundle Version: {}",
        settings.version.as_deref().unwrap_or_default()
    )]
}

fn android_details(settings: &BuildSettings) -> Vec<String> {
    vec![
        format!(
            "Bundle Version: {}",
            settings.version.as_deref().unwrap_or_default()
        ),
        format!(
            "Bundle Version Code: {}",
            settings.version_code.unwrap_or_default()
        ),
        format!("Build App Bundle: {}", settings.app_bundle),
        format!("Use Custom Keystore: {}", settings.custom_keystore),
        format!(
            "Target SDK Version: {}",
            settings.sdk_version.as_deref().unwrap_or_default()
        ),
    ]
}

/// Size of a path in megabytes (1 MB = 1,048,576 bytes).
///
/// A missing path counts as zero bytes, a file as its own length, and a
/// directory as the recursive sum of the lengths of every file within it.
/// Unreadable entries are skipped rather than failing the report.
pub fn path_size_megabytes(path: &Path) -> f64 {
    path_size_bytes(path) as f64 / BYTES_PER_MEGABYTE
}

fn path_size_bytes(path: &Path) -> u64 {
    let Ok(metadata) = std::fs::metadata(path) else {
        log::debug!("artifact path {} missing, sizing as 0", path.display());
        return 0;
    };

    if metadata.is_file() {
        return metadata.len();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Human-readable duration: "1 day, 2 hours, 3 minutes, 4 seconds",
/// dropping zero components; "0 seconds" for sub-second durations.
fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    for (count, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (seconds, "second"),
    ] {
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", count, unit, plural));
        }
    }

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::BuildStep;
    use chrono::TimeZone;
    use std::io::Write;

    fn record(outcome: BuildOutcome) -> BuildRecord {
        BuildRecord {
            outcome,
            output_path: "no/such/path".into(),
            started_at: Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap(),
            ended_at: Utc.with_ymd_and_hms(2026, 1, 5, 10, 4, 30).unwrap(),
            duration: Duration::from_secs(270),
            steps: Vec::new(),
        }
    }

    fn build(record: &BuildRecord, settings: &BuildSettings) -> ReportDocument {
        let arguments = ArgumentList::new();
        ReportBuilder::new(record, settings, &arguments).build()
    }

    fn bullets(section: &ReportSection) -> Vec<&str> {
        section
            .parts()
            .iter()
            .filter(|p| p.kind == PartKind::Bullet)
            .map(|p| p.text.as_str())
            .collect()
    }

    #[test]
    fn test_five_sections_in_order() {
        let record = record(BuildOutcome::Succeeded);
        let settings = BuildSettings::new(TargetPlatform::Windows, BuildFlags::NONE);
        let doc = build(&record, &settings);

        assert_eq!(doc.sections().len(), 5);
        assert_eq!(doc.sections()[1].parts()[0].text, "Build Summary");
        assert_eq!(doc.sections()[2].parts()[0].text, "Command Line Arguments");
        assert_eq!(doc.sections()[3].parts()[0].text, "Build Settings");
        assert_eq!(doc.sections()[4].parts()[0].text, "Build Steps & Messages");
    }

    #[test]
    fn test_status_mapping_is_total() {
        let cases = [
            (BuildOutcome::Succeeded, "Build Succeeded!"),
            (BuildOutcome::Failed, "Build Failed!"),
            (BuildOutcome::Cancelled, "Build Cancelled!"),
            (BuildOutcome::Unknown, "Build result is unknown!"),
        ];
        let settings = BuildSettings::new(TargetPlatform::Linux, BuildFlags::NONE);

        for (outcome, label) in cases {
            let record = record(outcome);
            let doc = build(&record, &settings);
            let status = &doc.sections()[0];
            assert_eq!(status.parts().len(), 1);
            assert_eq!(status.parts()[0].kind, PartKind::Header1);
            assert_eq!(status.parts()[0].text, label);
        }
    }

    #[test]
    fn test_summary_release_stage() {
        let record = record(BuildOutcome::Succeeded);

        let dev = BuildSettings::new(TargetPlatform::Windows, BuildFlags::DEVELOPMENT);
        let doc = build(&record, &dev);
        assert!(bullets(&doc.sections()[1]).contains(&"Release Stage: Development"));

        let release = BuildSettings::new(TargetPlatform::Windows, BuildFlags::CLEAN_BUILD);
        let doc = build(&record, &release);
        assert!(bullets(&doc.sections()[1]).contains(&"Release Stage: Release"));
    }

    #[test]
    fn test_summary_missing_path_sizes_zero() {
        let record = record(BuildOutcome::Failed);
        let settings = BuildSettings::new(TargetPlatform::Windows, BuildFlags::NONE);
        let doc = build(&record, &settings);
        assert!(bullets(&doc.sections()[1]).contains(&"File Size: 0.00 MB"));
    }

    #[test]
    fn test_arguments_order_and_wording() {
        let record = record(BuildOutcome::Succeeded);
        let settings = BuildSettings::new(TargetPlatform::Android, BuildFlags::NONE);
        let mut arguments = ArgumentList::new();
        arguments.push("buildTarget", "Android");
        arguments.push("headless", "");

        let doc = ReportBuilder::new(&record, &settings, &arguments).build();
        let args = bullets(&doc.sections()[2]);
        assert_eq!(
            args,
            vec![
                "found flag buildTarget with value Android",
                "found flag headless with no value",
            ]
        );
    }

    #[test]
    fn test_secret_argument_masked() {
        let record = record(BuildOutcome::Succeeded);
        let settings = BuildSettings::new(TargetPlatform::Android, BuildFlags::NONE);
        let mut arguments = ArgumentList::new();
        arguments.push_secret("keystorePass", "hunter2");

        let doc = ReportBuilder::new(&record, &settings, &arguments).build();
        let args = bullets(&doc.sections()[2]);
        assert_eq!(args, vec!["found flag keystorePass with value *HIDDEN*"]);
    }

    #[test]
    fn test_settings_universal_only_for_plain_platform() {
        let record = record(BuildOutcome::Succeeded);
        let settings = BuildSettings::new(TargetPlatform::WebGl, BuildFlags::NONE);
        let doc = build(&record, &settings);

        let rows = bullets(&doc.sections()[3]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "Build Target: WebGL");
        assert_eq!(rows[1], "Build Flags: None");
    }

    #[test]
    fn test_settings_android_adds_five_bullets() {
        let record = record(BuildOutcome::Succeeded);
        let mut settings = BuildSettings::new(TargetPlatform::Android, BuildFlags::DEVELOPMENT);
        settings.version = Some("1.4.2".to_string());
        settings.version_code = Some(142);
        settings.app_bundle = true;
        settings.custom_keystore = true;
        settings.sdk_version = Some("34".to_string());

        let doc = build(&record, &settings);
        let rows = bullets(&doc.sections()[3]);
        assert_eq!(
            rows,
            vec![
                "Build Target: Android",
                "Build Flags: Development",
                "Bundle Version: 1.4.2",
                "Bundle Version Code: 142",
                "Build App Bundle: true",
                "Use Custom Keystore: true",
                "Target SDK Version: 34",
            ]
        );
    }

    #[test]
    fn test_settings_macos_adds_build_number() {
        let record = record(BuildOutcome::Succeeded);
        let mut settings = BuildSettings::new(TargetPlatform::MacOs, BuildFlags::NONE);
        settings.build_number = Some("77".to_string());

        let doc = build(&record, &settings);
        let rows = bullets(&doc.sections()[3]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], "Build Number: 77");
    }

    #[test]
    fn test_steps_counts_and_filter() {
        let mut rec = record(BuildOutcome::Failed);
        rec.steps = vec![
            BuildStep::new("Compile scripts", Duration::from_millis(1234))
                .with_message(Severity::Warning, "deprecated API")
                .with_message(Severity::Log, "progress chatter")
                .with_message(Severity::Error, "compile failed"),
            BuildStep::new("Package assets", Duration::from_millis(500))
                .at_depth(1)
                .with_message(Severity::Exception, "stack overflow")
                .with_message(Severity::Assert, "invariant broken"),
        ];
        let settings = BuildSettings::new(TargetPlatform::Linux, BuildFlags::NONE);
        let doc = build(&rec, &settings);

        let section = &doc.sections()[4];
        let texts: Vec<&str> = section.parts().iter().map(|p| p.text.as_str()).collect();
        assert!(texts.contains(&"Messages [Count: 4]"));
        assert!(texts.contains(&"Errors 1"));
        assert!(texts.contains(&"Asserts 1"));
        assert!(texts.contains(&"Warnings 1"));
        assert!(texts.contains(&"Exceptions 1"));
        assert!(texts.contains(&"Steps [Count: 2]"));
        // Log-severity message is neither counted nor rendered.
        assert!(!texts.iter().any(|t| t.contains("progress chatter")));
    }

    #[test]
    fn test_step_bullets_indent_and_format() {
        let mut rec = record(BuildOutcome::Succeeded);
        rec.steps = vec![BuildStep::new("Compile", Duration::from_millis(1234))
            .at_depth(1)
            .with_message(Severity::Error, "boom")];
        let settings = BuildSettings::new(TargetPlatform::Linux, BuildFlags::NONE);
        let doc = build(&rec, &settings);

        let section = &doc.sections()[4];
        let step = section
            .parts()
            .iter()
            .find(|p| p.text.starts_with("Compile"))
            .unwrap();
        assert_eq!(step.text, "Compile - 1234.0ms");
        assert_eq!(step.indent, 1);

        let message = section
            .parts()
            .iter()
            .find(|p| p.text.starts_with("[Error]"))
            .unwrap();
        assert_eq!(message.text, "[Error] boom");
        assert_eq!(message.indent, 2);
    }

    #[test]
    fn test_empty_steps_report_zero_counts() {
        let rec = record(BuildOutcome::Succeeded);
        let settings = BuildSettings::new(TargetPlatform::Windows, BuildFlags::NONE);
        let doc = build(&rec, &settings);

        let texts: Vec<&str> = doc.sections()[4]
            .parts()
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert!(texts.contains(&"Messages [Count: 0]"));
        assert!(texts.contains(&"Steps [Count: 0]"));
    }

    #[test]
    fn test_path_size_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();

        let file = dir.path().join("artifact.bin");
        let mut handle = std::fs::File::create(&file).unwrap();
        handle.write_all(&vec![0u8; 1_048_576]).unwrap();
        assert_eq!(path_size_megabytes(&file), 1.0);

        let nested = dir.path().join("inner");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("second.bin"), vec![0u8; 2_097_152]).unwrap();
        assert_eq!(path_size_megabytes(dir.path()), 3.0);
    }

    #[test]
    fn test_path_size_missing() {
        assert_eq!(path_size_megabytes(Path::new("definitely/not/here")), 0.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0 seconds");
        assert_eq!(format_duration(Duration::from_secs(1)), "1 second");
        assert_eq!(
            format_duration(Duration::from_secs(3_661)),
            "1 hour, 1 minute, 1 second"
        );
        assert_eq!(
            format_duration(Duration::from_secs(90_120)),
            "1 day, 1 hour, 2 minutes"
        );
    }
}
