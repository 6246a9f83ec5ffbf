//! Bank and settings validation.
//!
//! Banks built by the factory are well formed by construction. Anything read
//! from outside the process is checked here before a module may use it:
//!
//! - [`BankOutline`] pre-checks the raw data for missing versions and
//!   unknown module tags, which would otherwise surface as opaque parse errors
//! - [`validate_bank`] checks the structural rules (unique, non-empty labels,
//!   named presets, one variant per bank)
//! - [`validate_settings`] checks every parameter against its range
//! - [`BankValidator`] combines the above with an optional expected variant
//!
//! # Example
//!
//! ```rust
//! use presetbank_config::{default_bank, validate_bank, BankValidator};
//! use presetbank_core::Variant;
//!
//! let bank = default_bank(Variant::Jva);
//! validate_bank(&bank).expect("factory banks are valid");
//!
//! BankValidator::new()
//!     .expect_variant(Variant::Jva)
//!     .validate(&bank)
//!     .expect("jva bank");
//! ```

use std::collections::HashSet;

use presetbank_core::{
    ComputerMidiKeyboardSettings, Envelope, JvaSettings, PresetBank, Settings, SettingsSchema,
    Variant,
};
use serde::Deserialize;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A category without a label.
    #[error("category #{index} has an empty label")]
    EmptyCategoryLabel {
        /// Position of the category in the bank.
        index: usize,
    },

    /// Two categories share a label.
    #[error("duplicate category label: {0}")]
    DuplicateCategory(String),

    /// A preset without a name.
    #[error("preset #{index} in category '{category}' has an empty name")]
    EmptyPresetName {
        /// Label of the containing category.
        category: String,
        /// Position of the preset in the category.
        index: usize,
    },

    /// A preset without a version field.
    #[error("preset '{preset}' in category '{category}' has no version")]
    MissingVersion {
        /// Label of the containing category.
        category: String,
        /// Name of the preset.
        preset: String,
    },

    /// A preset with a version below zero.
    #[error(
        "preset '{preset}' in category '{category}' has negative version {version}"
    )]
    NegativeVersion {
        /// Label of the containing category.
        category: String,
        /// Name of the preset.
        preset: String,
        /// The offending version.
        version: i64,
    },

    /// Settings without a `module` tag.
    #[error(
        "preset '{preset}' in category '{category}' has settings without a module tag"
    )]
    MissingVariant {
        /// Label of the containing category.
        category: String,
        /// Name of the preset.
        preset: String,
    },

    /// Settings whose `module` tag names no known schema.
    #[error("unknown settings variant: {0}")]
    UnknownVariant(String),

    /// Settings of a different module than the rest of the bank.
    #[error(
        "preset '{preset}' in category '{category}' holds {found} settings, expected {expected}"
    )]
    VariantMismatch {
        /// Label of the containing category.
        category: String,
        /// Name of the preset.
        preset: String,
        /// Variant the bank is scoped to.
        expected: Variant,
        /// Variant found on the preset.
        found: Variant,
    },

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Path of the parameter, e.g. `filter.frequency`.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// A list parameter with too few or too many entries.
    #[error("parameter '{param}' has {len} entries, expected {min} to {max}")]
    InvalidLength {
        /// Path of the parameter.
        param: String,
        /// Actual number of entries.
        len: usize,
        /// Minimum number of entries.
        min: usize,
        /// Maximum number of entries.
        max: usize,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", join_messages(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Flatten into the list of individual errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            ValidationError::Multiple(errors) => errors,
            other => vec![other],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

// ---------------------------------------------------------------------------
// Parameter ranges
// ---------------------------------------------------------------------------

/// Inclusive range of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Minimum value.
    pub min: f32,
    /// Maximum value.
    pub max: f32,
}

impl ParamRange {
    const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range. NaN never does.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Level in dB (oscillators, noise, master).
pub const VOLUME_DB: ParamRange = ParamRange::new(-96.0, 6.0);
/// Oscillator coarse tuning in semitones.
pub const TRANSPOSE_SEMITONES: ParamRange = ParamRange::new(-48.0, 48.0);
/// Oscillator fine tuning in cents.
pub const DETUNE_CENTS: ParamRange = ParamRange::new(-100.0, 100.0);
/// Normalised amounts: spread, modulation depth, envelope amount, sustain.
pub const UNIT: ParamRange = ParamRange::new(0.0, 1.0);
/// Envelope stage times in ms.
pub const ENVELOPE_MS: ParamRange = ParamRange::new(0.0, 20_000.0);
/// LFO rates in Hz.
pub const MODULATION_RATE_HZ: ParamRange = ParamRange::new(0.0, 50.0);
/// Filter cutoff in Hz.
pub const CUTOFF_HZ: ParamRange = ParamRange::new(20.0, 20_000.0);
/// Filter resonance.
pub const RESONANCE_Q: ParamRange = ParamRange::new(0.0001, 100.0);
/// Arpeggiator note repeats.
pub const ARP_REPEAT: ParamRange = ParamRange::new(1.0, 16.0);
/// Chord trigger offsets in semitones.
pub const CHORD_OFFSET: ParamRange = ParamRange::new(-48.0, 48.0);
/// Lowest keyboard note.
pub const OCTAVE_OFFSET: ParamRange = ParamRange::new(0.0, 120.0);
/// Keyboard transposition in semitones.
pub const TRANSPOSE_OFFSET: ParamRange = ParamRange::new(-48.0, 48.0);
/// Allowed number of chord trigger entries.
pub const CHORD_TRIGGER_LEN: (usize, usize) = (1, 8);

struct RangeChecker<'a> {
    prefix: &'a str,
    errors: Vec<ValidationError>,
}

impl RangeChecker<'_> {
    fn check(&mut self, param: &str, value: f32, range: ParamRange) {
        if !range.contains(value) {
            self.errors.push(ValidationError::OutOfRange {
                param: format!("{}{}", self.prefix, param),
                value,
                min: range.min,
                max: range.max,
            });
        }
    }

    fn check_envelope(&mut self, stage: &str, env: &Envelope) {
        self.check(&format!("{stage}.envelope.attack"), env.attack, ENVELOPE_MS);
        self.check(&format!("{stage}.envelope.decay"), env.decay, ENVELOPE_MS);
        self.check(&format!("{stage}.envelope.sustain"), env.sustain, UNIT);
        self.check(
            &format!("{stage}.envelope.release"),
            env.release,
            ENVELOPE_MS,
        );
    }

    fn check_jva(&mut self, s: &JvaSettings) {
        for (i, osc) in s.oscillators().into_iter().enumerate() {
            let slot = format!("oscillator{}", i + 1);
            self.check(&format!("{slot}.volume"), osc.volume, VOLUME_DB);
            self.check(
                &format!("{slot}.transpose"),
                osc.transpose as f32,
                TRANSPOSE_SEMITONES,
            );
            self.check(&format!("{slot}.detune"), osc.detune, DETUNE_CENTS);
        }
        self.check("oscillatorSpread", s.oscillator_spread, UNIT);

        self.check_envelope("amp", &s.amp.envelope);
        self.check("amp.modulationAmount", s.amp.modulation_amount, UNIT);
        self.check(
            "amp.modulationRate",
            s.amp.modulation_rate,
            MODULATION_RATE_HZ,
        );

        self.check_envelope("filter", &s.filter.envelope);
        self.check("filter.envelopeAmount", s.filter.envelope_amount, UNIT);
        self.check("filter.frequency", s.filter.frequency, CUTOFF_HZ);
        self.check("filter.q", s.filter.q, RESONANCE_Q);
        self.check("filter.modulationAmount", s.filter.modulation_amount, UNIT);
        self.check(
            "filter.modulationRate",
            s.filter.modulation_rate,
            MODULATION_RATE_HZ,
        );

        self.check("pitch.modulationAmount", s.pitch.modulation_amount, UNIT);
        self.check(
            "pitch.modulationRate",
            s.pitch.modulation_rate,
            MODULATION_RATE_HZ,
        );

        self.check("noise.volume", s.noise.volume, VOLUME_DB);
        self.check("volume", s.volume, VOLUME_DB);
    }

    fn check_keyboard(&mut self, s: &ComputerMidiKeyboardSettings) {
        self.check("arpNodeRepeat", s.arp_node_repeat as f32, ARP_REPEAT);

        let (min, max) = CHORD_TRIGGER_LEN;
        let len = s.chord_trigger.len();
        if len < min || len > max {
            self.errors.push(ValidationError::InvalidLength {
                param: format!("{}chordTrigger", self.prefix),
                len,
                min,
                max,
            });
        }
        for (i, offset) in s.chord_trigger.iter().enumerate() {
            self.check(&format!("chordTrigger[{i}]"), *offset as f32, CHORD_OFFSET);
        }

        self.check("octaveOffset", s.octave_offset as f32, OCTAVE_OFFSET);
        self.check(
            "transposeOffset",
            s.transpose_offset as f32,
            TRANSPOSE_OFFSET,
        );
    }

    fn check_settings(&mut self, settings: &Settings) {
        match settings {
            Settings::Jva(s) => self.check_jva(s),
            Settings::ComputerMidiKeyboard(s) => self.check_keyboard(s),
        }
    }
}

fn settings_errors(prefix: &str, settings: &Settings) -> Vec<ValidationError> {
    let mut checker = RangeChecker {
        prefix,
        errors: Vec::new(),
    };
    checker.check_settings(settings);
    checker.errors
}

/// Check every parameter of `settings` against its range.
pub fn validate_settings(settings: &Settings) -> ValidationResult<()> {
    collect(settings_errors("", settings))
}

// ---------------------------------------------------------------------------
// Structural checks
// ---------------------------------------------------------------------------

fn structural_errors(
    bank: &PresetBank<Settings>,
    expected: Option<Variant>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let expected = expected.or_else(|| bank.detected_variant());

    for (index, category) in bank.categories.iter().enumerate() {
        let label = category.category.as_str();
        if label.trim().is_empty() {
            errors.push(ValidationError::EmptyCategoryLabel { index });
        } else if !seen.insert(label) {
            errors.push(ValidationError::DuplicateCategory(label.to_string()));
        }

        for (index, preset) in category.presets.iter().enumerate() {
            if preset.name.trim().is_empty() {
                errors.push(ValidationError::EmptyPresetName {
                    category: label.to_string(),
                    index,
                });
            }

            let found = preset.settings.variant();
            if let Some(expected) = expected
                && found != expected
            {
                errors.push(ValidationError::VariantMismatch {
                    category: label.to_string(),
                    preset: preset.name.clone(),
                    expected,
                    found,
                });
            }
        }
    }
    errors
}

/// Check the structural rules every bank must satisfy.
///
/// - category labels non-empty and pairwise distinct
/// - preset names non-empty
/// - every preset carries the same settings variant
///
/// All violations are reported, not just the first.
pub fn validate_bank(bank: &PresetBank<Settings>) -> ValidationResult<()> {
    collect(structural_errors(bank, None))
}

/// Check a typed bank: structure and parameter ranges.
///
/// Typed banks cannot mix variants, so only labels, names and ranges are
/// checked.
pub fn validate_typed_bank<S: SettingsSchema>(bank: &PresetBank<S>) -> ValidationResult<()> {
    BankValidator::new()
        .expect_variant(S::VARIANT)
        .validate(&bank.clone().into_settings_bank())
}

/// Configurable bank validator.
///
/// By default checks structure and parameter ranges and infers the bank's
/// variant from its first preset.
#[derive(Debug, Clone, Copy)]
pub struct BankValidator {
    check_ranges: bool,
    expected: Option<Variant>,
}

impl Default for BankValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BankValidator {
    /// Create a validator checking structure and ranges.
    pub fn new() -> Self {
        Self {
            check_ranges: true,
            expected: None,
        }
    }

    /// Enable or disable parameter range checks.
    pub fn with_ranges(mut self, check_ranges: bool) -> Self {
        self.check_ranges = check_ranges;
        self
    }

    /// Require every preset to carry `variant` settings.
    pub fn expect_variant(mut self, variant: Variant) -> Self {
        self.expected = Some(variant);
        self
    }

    /// Validate a tagged bank, collecting every violation.
    pub fn validate(&self, bank: &PresetBank<Settings>) -> ValidationResult<()> {
        let mut errors = structural_errors(bank, self.expected);
        if self.check_ranges {
            for (label, preset) in bank.presets() {
                let prefix = format!("{label}/{}: ", preset.name);
                errors.extend(settings_errors(&prefix, &preset.settings));
            }
        }
        collect(errors)
    }
}

// ---------------------------------------------------------------------------
// Wire outline
// ---------------------------------------------------------------------------

/// Minimal projection of a bank's wire data.
///
/// Decoded before the full bank so that a missing `version` or an unknown
/// `module` tag is reported as such instead of as a generic parse failure.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankOutline {
    #[serde(default)]
    categories: Vec<CategoryOutline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CategoryOutline {
    #[serde(default)]
    category: String,
    #[serde(default)]
    presets: Vec<PresetOutline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PresetOutline {
    #[serde(default)]
    name: String,
    version: Option<i64>,
    settings: Option<SettingsOutline>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsOutline {
    module: Option<String>,
}

impl BankOutline {
    /// Report missing or negative versions and missing or unknown module tags.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        for category in &self.categories {
            for preset in &category.presets {
                match preset.version {
                    None => errors.push(ValidationError::MissingVersion {
                        category: category.category.clone(),
                        preset: preset.name.clone(),
                    }),
                    Some(version) if version < 0 => errors.push(ValidationError::NegativeVersion {
                        category: category.category.clone(),
                        preset: preset.name.clone(),
                        version,
                    }),
                    Some(_) => {}
                }

                match preset.settings.as_ref().and_then(|s| s.module.as_deref()) {
                    None => errors.push(ValidationError::MissingVariant {
                        category: category.category.clone(),
                        preset: preset.name.clone(),
                    }),
                    Some(tag) if !Variant::ALL.iter().any(|v| v.tag() == tag) => {
                        errors.push(ValidationError::UnknownVariant(tag.to_string()));
                    }
                    Some(_) => {}
                }
            }
        }
        collect(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory_presets::{default_bank, default_settings};
    use presetbank_core::{Preset, PresetCategory};

    fn jva() -> Settings {
        default_settings(Variant::Jva)
    }

    fn keyboard() -> Settings {
        default_settings(Variant::ComputerMidiKeyboard)
    }

    fn out_of_range_param(err: &ValidationError) -> Option<&str> {
        match err {
            ValidationError::OutOfRange { param, .. } => Some(param.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_factory_banks_are_valid() {
        for variant in Variant::ALL {
            let bank = default_bank(variant);
            assert!(validate_bank(&bank).is_ok(), "{variant}");
            assert!(BankValidator::new().validate(&bank).is_ok(), "{variant}");
        }
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut bank = default_bank(Variant::Jva);
        let mut clash = PresetCategory::new("local");
        clash.push(Preset::new("other", jva()));
        bank.categories.push(clash);

        let err = validate_bank(&bank).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateCategory("local".to_string()));
    }

    #[test]
    fn test_mixed_variants_in_one_category_rejected() {
        let mut bank = default_bank(Variant::Jva);
        bank.categories[0].push(Preset::new("keys", keyboard()));

        let err = validate_bank(&bank).unwrap_err();
        assert_eq!(
            err,
            ValidationError::VariantMismatch {
                category: "local".to_string(),
                preset: "keys".to_string(),
                expected: Variant::Jva,
                found: Variant::ComputerMidiKeyboard,
            }
        );
    }

    #[test]
    fn test_empty_label_and_name_rejected() {
        let mut bank = default_bank(Variant::Jva);
        let mut unnamed = PresetCategory::new("");
        unnamed.push(Preset::new(" ", jva()));
        bank.categories.push(unnamed);

        let errors = validate_bank(&bank).unwrap_err().into_errors();
        assert_eq!(errors.len(), 2);
        let empty_label = ValidationError::EmptyCategoryLabel { index: 1 };
        let empty_name = ValidationError::EmptyPresetName {
            category: String::new(),
            index: 0,
        };
        assert!(errors.contains(&empty_label));
        assert!(errors.contains(&empty_name));
    }

    #[test]
    fn test_expected_variant_enforced() {
        let bank = default_bank(Variant::ComputerMidiKeyboard);
        let err = BankValidator::new()
            .expect_variant(Variant::Jva)
            .validate(&bank)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::VariantMismatch {
                expected: Variant::Jva,
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_jva_parameters() {
        let mut settings = default_settings(Variant::Jva);
        if let Settings::Jva(s) = &mut settings {
            s.filter.frequency = 50_000.0;
            s.amp.envelope.sustain = 1.5;
        }

        let errors = validate_settings(&settings).unwrap_err().into_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::OutOfRange {
            param: "filter.frequency".to_string(),
            value: 50_000.0,
            min: 20.0,
            max: 20_000.0,
        }));
        let params: Vec<_> = errors.iter().filter_map(out_of_range_param).collect();
        assert_eq!(params, vec!["amp.envelope.sustain", "filter.frequency"]);
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let mut settings = jva();
        if let Settings::Jva(s) = &mut settings {
            s.volume = f32::NAN;
        }
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_keyboard_chord_trigger_length() {
        let mut settings = keyboard();
        if let Settings::ComputerMidiKeyboard(s) = &mut settings {
            s.chord_trigger.clear();
        }
        assert_eq!(
            validate_settings(&settings).unwrap_err(),
            ValidationError::InvalidLength {
                param: "chordTrigger".to_string(),
                len: 0,
                min: 1,
                max: 8,
            }
        );
    }

    #[test]
    fn test_keyboard_repeat_and_offsets() {
        let mut settings = keyboard();
        if let Settings::ComputerMidiKeyboard(s) = &mut settings {
            s.arp_node_repeat = 0;
            s.chord_trigger = vec![0, 60];
        }
        let errors = validate_settings(&settings).unwrap_err().into_errors();
        let params: Vec<_> = errors.iter().filter_map(out_of_range_param).collect();
        assert_eq!(params, vec!["arpNodeRepeat", "chordTrigger[1]"]);
    }

    #[test]
    fn test_validator_prefixes_range_errors_with_location() {
        let mut bank = default_bank(Variant::Jva);
        if let Settings::Jva(s) = &mut bank.categories[0].presets[0].settings {
            s.oscillator2.detune = 500.0;
        }
        let err = BankValidator::new().validate(&bank).unwrap_err();
        assert_eq!(
            out_of_range_param(&err),
            Some("local/default: oscillator2.detune")
        );

        let structure_only = BankValidator::new().with_ranges(false);
        assert!(structure_only.validate(&bank).is_ok());
    }

    #[test]
    fn test_validate_typed_bank() {
        let bank = crate::factory_presets::default_computer_midi_keyboard_bank();
        assert!(validate_typed_bank(&bank).is_ok());
    }

    #[test]
    fn test_outline_reports_missing_version_and_unknown_module() {
        let json = r#"{
            "_id": "0",
            "categories": [{
                "category": "local",
                "presets": [
                    {"name": "a", "private": false, "settings": {"module": "jva"}},
                    {"name": "b", "version": -1, "private": false, "settings": {"module": "jva"}},
                    {"name": "c", "version": 0, "private": false, "settings": {"module": "theremin"}},
                    {"name": "d", "version": 0, "private": false, "settings": {}}
                ]
            }]
        }"#;
        let outline: BankOutline = serde_json::from_str(json).unwrap();
        let errors = outline.validate().unwrap_err().into_errors();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingVersion {
                    category: "local".into(),
                    preset: "a".into(),
                },
                ValidationError::NegativeVersion {
                    category: "local".into(),
                    preset: "b".into(),
                    version: -1,
                },
                ValidationError::UnknownVariant("theremin".into()),
                ValidationError::MissingVariant {
                    category: "local".into(),
                    preset: "d".into(),
                },
            ]
        );
    }

    #[test]
    fn test_join_messages() {
        assert_eq!(join_messages(&[]), "");
        assert_eq!(
            join_messages(&[ValidationError::DuplicateCategory("a".into())]),
            "duplicate category label: a"
        );
    }

    #[test]
    fn test_multiple_display_joins_messages() {
        let err = ValidationError::Multiple(vec![
            ValidationError::DuplicateCategory("a".into()),
            ValidationError::UnknownVariant("b".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "multiple validation errors: duplicate category label: a; unknown settings variant: b"
        );
    }
}
