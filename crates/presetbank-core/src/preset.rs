//! Preset entity.

use serde::{Deserialize, Serialize};

use crate::version;

/// A named, versioned snapshot of one module's settings.
///
/// The preset owns its settings by value; cloning a preset never shares
/// settings with the original.
///
/// # Wire Format
///
/// ```toml
/// name = "default"
/// version = 0
/// private = false
///
/// [settings]
/// module = "computerMidiKeyboard"
/// arpOn = false
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset<S> {
    /// Display name, never empty.
    pub name: String,

    /// Bumped on every settings change.
    pub version: u32,

    /// Hidden from other users when the bank is shared.
    pub private: bool,

    /// Module settings.
    pub settings: S,
}

impl<S> Preset<S> {
    /// Create a public preset at the initial version.
    pub fn new(name: impl Into<String>, settings: S) -> Self {
        Self {
            name: name.into(),
            version: version::INITIAL_VERSION,
            private: false,
            settings,
        }
    }

    /// Set the visibility flag.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Set the version, e.g. when rebuilding a preset read from storage.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Convert the settings, keeping name, version and visibility.
    pub fn map_settings<T>(self, f: impl FnOnce(S) -> T) -> Preset<T> {
        Preset {
            name: self.name,
            version: self.version,
            private: self.private,
            settings: f(self.settings),
        }
    }
}

impl<S: PartialEq> Preset<S> {
    /// Replace the settings, bumping the version if they actually changed.
    ///
    /// Returns `true` when the version was bumped.
    pub fn update_settings(&mut self, settings: S) -> bool {
        if self.settings == settings {
            return false;
        }
        self.settings = settings;
        self.version = version::next(self.version);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preset_defaults() {
        let preset = Preset::new("pad", 1u8);
        assert_eq!(preset.name, "pad");
        assert_eq!(preset.version, 0);
        assert!(!preset.private);
        assert_eq!(preset.settings, 1);
    }

    #[test]
    fn builder_sets_flags() {
        let preset = Preset::new("lead", ()).with_private(true).with_version(7);
        assert!(preset.private);
        assert_eq!(preset.version, 7);
    }

    #[test]
    fn update_settings_bumps_version_on_change() {
        let mut preset = Preset::new("bass", vec![0, 4]);
        assert!(preset.update_settings(vec![0, 3]));
        assert_eq!(preset.version, 1);
        assert!(preset.update_settings(vec![0, 3, 7]));
        assert_eq!(preset.version, 2);
    }

    #[test]
    fn update_settings_with_equal_value_keeps_version() {
        let mut preset = Preset::new("bass", vec![0, 4]).with_version(5);
        assert!(!preset.update_settings(vec![0, 4]));
        assert_eq!(preset.version, 5);
    }

    #[test]
    fn map_settings_keeps_metadata() {
        let preset = Preset::new("keys", 3u32).with_private(true).with_version(2);
        let mapped = preset.map_settings(|n| n.to_string());
        assert_eq!(mapped.name, "keys");
        assert_eq!(mapped.version, 2);
        assert!(mapped.private);
        assert_eq!(mapped.settings, "3");
    }
}
