//! Build settings snapshot: target platform, option flags, and the
//! per-platform fields surfaced in the Settings section.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target platform of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPlatform {
    /// Desktop Windows player.
    Windows,
    /// Desktop macOS player.
    MacOs,
    /// Desktop Linux player.
    Linux,
    /// iOS player.
    Ios,
    /// Android player.
    Android,
    /// WebGL player.
    WebGl,
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetPlatform::Windows => "Windows",
            TargetPlatform::MacOs => "MacOS",
            TargetPlatform::Linux => "Linux",
            TargetPlatform::Ios => "iOS",
            TargetPlatform::Android => "Android",
            TargetPlatform::WebGl => "WebGL",
        };
        f.write_str(name)
    }
}

/// Build option bit flags.
///
/// A plain `u32` newtype; the named bits below are the ones the reporting
/// pipeline cares about. Unknown bits pass through `Display` unnamed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFlags(pub u32);

impl BuildFlags {
    /// No options set.
    pub const NONE: BuildFlags = BuildFlags(0);
    /// Development build (script debugging, profiler connection).
    pub const DEVELOPMENT: BuildFlags = BuildFlags(1);
    /// Allow remote script debugger attachment.
    pub const ALLOW_DEBUGGING: BuildFlags = BuildFlags(1 << 1);
    /// Delete intermediate artifacts before building.
    pub const CLEAN_BUILD: BuildFlags = BuildFlags(1 << 2);
    /// Compress the player data with LZ4.
    pub const COMPRESS_WITH_LZ4: BuildFlags = BuildFlags(1 << 3);
    /// Fail the build on any non-fatal error.
    pub const STRICT_MODE: BuildFlags = BuildFlags(1 << 4);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: BuildFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    pub fn union(self, other: BuildFlags) -> BuildFlags {
        BuildFlags(self.0 | other.0)
    }

    /// Whether no bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BuildFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        const NAMES: &[(BuildFlags, &str)] = &[
            (BuildFlags::DEVELOPMENT, "Development"),
            (BuildFlags::ALLOW_DEBUGGING, "AllowDebugging"),
            (BuildFlags::CLEAN_BUILD, "CleanBuild"),
            (BuildFlags::COMPRESS_WITH_LZ4, "CompressWithLz4"),
            (BuildFlags::STRICT_MODE, "StrictMode"),
        ];

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(*flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Snapshot of the settings a build ran with.
///
/// Captured by the build driver at build time and handed to the reporting
/// core as plain data. Optional fields are only surfaced for the platforms
/// that use them (see the platform detail table in the builder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Target platform of the build.
    pub platform: TargetPlatform,

    /// Raw build option flags.
    pub flags: BuildFlags,

    /// macOS build number.
    #[serde(default)]
    pub build_number: Option<String>,

    /// Bundle version string (iOS / Android).
    #[serde(default)]
    pub version: Option<String>,

    /// Android bundle version code.
    #[serde(default)]
    pub version_code: Option<u32>,

    /// Whether the Android build produced an app bundle rather than an APK.
    #[serde(default)]
    pub app_bundle: bool,

    /// Whether a custom signing keystore was used.
    #[serde(default)]
    pub custom_keystore: bool,

    /// Target SDK version (Android).
    #[serde(default)]
    pub sdk_version: Option<String>,
}

impl BuildSettings {
    /// Create a settings snapshot with only the universal fields set.
    pub fn new(platform: TargetPlatform, flags: BuildFlags) -> Self {
        Self {
            platform,
            flags,
            build_number: None,
            version: None,
            version_code: None,
            app_bundle: false,
            custom_keystore: false,
            sdk_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_contains() {
        let flags = BuildFlags::DEVELOPMENT.union(BuildFlags::CLEAN_BUILD);
        assert!(flags.contains(BuildFlags::DEVELOPMENT));
        assert!(flags.contains(BuildFlags::CLEAN_BUILD));
        assert!(!flags.contains(BuildFlags::STRICT_MODE));
    }

    #[test]
    fn test_flags_display() {
        assert_eq!(BuildFlags::NONE.to_string(), "None");
        assert_eq!(BuildFlags::DEVELOPMENT.to_string(), "Development");
        assert_eq!(
            BuildFlags::DEVELOPMENT
                .union(BuildFlags::COMPRESS_WITH_LZ4)
                .to_string(),
            "Development | CompressWithLz4"
        );
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(TargetPlatform::Android.to_string(), "Android");
        assert_eq!(TargetPlatform::MacOs.to_string(), "MacOS");
    }
}
