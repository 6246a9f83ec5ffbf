//! Reading and writing bank files.
//!
//! Banks are stored as TOML by default, or JSON when the file ends in
//! `.json`. Every decode runs the same pipeline:
//!
//! 1. [`BankOutline`] pre-check (missing versions, unknown module tags)
//! 2. full serde decode into `PresetBank<Settings>`
//! 3. [`BankValidator`] structure and range checks
//! 4. for typed loads, narrowing to `PresetBank<S>`
//!
//! When the caller names the variant (`*_as`, typed loads, fallbacks),
//! presets whose settings carry no `module` tag are tagged with it before
//! step 1, so banks written without tags still load.
//!
//! [`load_or_default`] and [`load_or_default_typed`] never fail: a missing
//! or malformed file is logged and replaced with the factory bank.
//!
//! # Example
//!
//! ```rust,no_run
//! use presetbank_config::{load_or_default_typed, save_typed_bank, default_jva_bank};
//! use presetbank_core::JvaSettings;
//!
//! let path = "banks/jva.toml";
//! save_typed_bank(path, &default_jva_bank()).unwrap();
//!
//! let bank = load_or_default_typed::<JvaSettings>(path);
//! assert_eq!(bank.preset_count(), 1);
//! ```

use std::borrow::Cow;
use std::path::Path;

use presetbank_core::{PresetBank, Settings, SettingsSchema, Variant};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ConfigError;
use crate::factory_presets::{FactoryDefault, default_bank, default_bank_for};
use crate::validation::{BankOutline, BankValidator};

/// On-disk encoding of a bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BankFormat {
    /// TOML document.
    #[default]
    Toml,
    /// JSON document.
    Json,
}

impl BankFormat {
    /// Format for a file path: JSON for a `.json` extension, TOML otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BankFormat::Json,
            _ => BankFormat::Toml,
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            BankFormat::Toml => "toml",
            BankFormat::Json => "json",
        }
    }

    fn decode<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        Ok(match self {
            BankFormat::Toml => toml::from_str(text)?,
            BankFormat::Json => serde_json::from_str(text)?,
        })
    }

    fn encode<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        Ok(match self {
            BankFormat::Toml => toml::to_string_pretty(value)?,
            BankFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }

    /// Add `module = variant` to every preset's settings that lack a tag.
    ///
    /// Text that does not parse, or needs no change, is returned as is so
    /// the regular decode reports its errors.
    fn with_module_tags(self, text: &str, variant: Variant) -> Result<Cow<'_, str>, ConfigError> {
        match self {
            BankFormat::Toml => {
                let Ok(mut doc) = toml::from_str::<toml::Table>(text) else {
                    return Ok(Cow::Borrowed(text));
                };
                if fill_toml_tags(&mut doc, variant) {
                    Ok(Cow::Owned(toml::to_string(&doc)?))
                } else {
                    Ok(Cow::Borrowed(text))
                }
            }
            BankFormat::Json => {
                let Ok(mut doc) = serde_json::from_str::<serde_json::Value>(text) else {
                    return Ok(Cow::Borrowed(text));
                };
                if fill_json_tags(&mut doc, variant) {
                    Ok(Cow::Owned(serde_json::to_string(&doc)?))
                } else {
                    Ok(Cow::Borrowed(text))
                }
            }
        }
    }
}

fn fill_toml_tags(doc: &mut toml::Table, variant: Variant) -> bool {
    let Some(toml::Value::Array(categories)) = doc.get_mut("categories") else {
        return false;
    };
    let mut changed = false;
    for category in categories {
        let Some(toml::Value::Array(presets)) = category.get_mut("presets") else {
            continue;
        };
        for preset in presets {
            if let Some(toml::Value::Table(settings)) = preset.get_mut("settings")
                && !settings.contains_key("module")
            {
                settings.insert("module".to_string(), variant.tag().into());
                changed = true;
            }
        }
    }
    changed
}

fn fill_json_tags(doc: &mut serde_json::Value, variant: Variant) -> bool {
    let Some(serde_json::Value::Array(categories)) = doc.get_mut("categories") else {
        return false;
    };
    let mut changed = false;
    for category in categories {
        let Some(serde_json::Value::Array(presets)) = category.get_mut("presets") else {
            continue;
        };
        for preset in presets {
            if let Some(serde_json::Value::Object(settings)) = preset.get_mut("settings")
                && !settings.contains_key("module")
            {
                settings.insert("module".to_string(), variant.tag().into());
                changed = true;
            }
        }
    }
    changed
}

/// Parse a bank without the structure and range checks.
///
/// Only the outline check runs, so the result may still violate bank rules.
/// Callers that want to report every violation themselves run a
/// [`BankValidator`] on it afterwards.
pub fn parse_bank(text: &str, format: BankFormat) -> Result<PresetBank<Settings>, ConfigError> {
    validate_outline(text, format)?;
    format.decode(text)
}

/// [`parse_bank`] for a bank known to hold `variant` presets.
///
/// Untagged settings are tagged with `variant` first. Presets tagged with a
/// different module are kept for the caller's validator to report.
pub fn parse_bank_as(
    text: &str,
    format: BankFormat,
    variant: Variant,
) -> Result<PresetBank<Settings>, ConfigError> {
    let text = format.with_module_tags(text, variant)?;
    parse_bank(&text, format)
}

/// Check versions and module tags of raw bank text. See [`BankOutline`].
pub fn validate_outline(text: &str, format: BankFormat) -> Result<(), ConfigError> {
    let outline: BankOutline = format.decode(text)?;
    Ok(outline.validate()?)
}

fn log_decoded(bank: &PresetBank<Settings>) {
    tracing::debug!(
        id = %bank.id,
        categories = bank.categories.len(),
        presets = bank.preset_count(),
        "decoded bank"
    );
}

/// Decode and validate a bank of any variant. Every preset needs a `module` tag.
pub fn decode_bank(text: &str, format: BankFormat) -> Result<PresetBank<Settings>, ConfigError> {
    let bank = parse_bank(text, format)?;
    BankValidator::new().validate(&bank)?;
    log_decoded(&bank);
    Ok(bank)
}

/// Decode and validate a bank whose presets must all be `variant`.
///
/// Presets without a `module` tag are read as `variant`.
pub fn decode_bank_as(
    text: &str,
    format: BankFormat,
    variant: Variant,
) -> Result<PresetBank<Settings>, ConfigError> {
    let bank = parse_bank_as(text, format, variant)?;
    let validator = BankValidator::new().expect_variant(variant);
    validator.validate(&bank)?;
    log_decoded(&bank);
    Ok(bank)
}

/// Decode, validate and narrow a bank to schema `S`.
pub fn decode_typed_bank<S: SettingsSchema>(
    text: &str,
    format: BankFormat,
) -> Result<PresetBank<S>, ConfigError> {
    Ok(decode_bank_as(text, format, S::VARIANT)?.into_typed()?)
}

/// Encode a bank after checking it would decode again.
pub fn encode_bank(
    bank: &PresetBank<Settings>,
    format: BankFormat,
) -> Result<String, ConfigError> {
    BankValidator::new().validate(bank)?;
    let text = format.encode(bank)?;
    tracing::debug!(id = %bank.id, format = format.extension(), bytes = text.len(), "encoded bank");
    Ok(text)
}

/// Encode a typed bank. The `module` tag is written on every preset.
pub fn encode_typed_bank<S: SettingsSchema>(
    bank: &PresetBank<S>,
    format: BankFormat,
) -> Result<String, ConfigError> {
    encode_bank(&bank.clone().into_settings_bank(), format)
}

fn read_bank_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::BankNotFound(path.to_path_buf())
        } else {
            ConfigError::read_file(path, e)
        }
    })
}

/// Load and validate a bank file of any variant.
pub fn load_bank(path: impl AsRef<Path>) -> Result<PresetBank<Settings>, ConfigError> {
    let path = path.as_ref();
    let text = read_bank_file(path)?;
    decode_bank(&text, BankFormat::from_path(path))
}

/// Load, validate and narrow a bank file to schema `S`.
pub fn load_typed_bank<S: SettingsSchema>(
    path: impl AsRef<Path>,
) -> Result<PresetBank<S>, ConfigError> {
    let path = path.as_ref();
    let text = read_bank_file(path)?;
    decode_typed_bank(&text, BankFormat::from_path(path))
}

/// Validate and write a bank, creating parent directories as needed.
pub fn save_bank(path: impl AsRef<Path>, bank: &PresetBank<Settings>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let content = encode_bank(bank, BankFormat::from_path(path))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
    }

    std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
    tracing::info!(path = %path.display(), presets = bank.preset_count(), "saved bank");
    Ok(())
}

/// Write a typed bank. See [`save_bank`].
pub fn save_typed_bank<S: SettingsSchema>(
    path: impl AsRef<Path>,
    bank: &PresetBank<S>,
) -> Result<(), ConfigError> {
    save_bank(path, &bank.clone().into_settings_bank())
}

fn log_fallback(path: &Path, variant: Variant, err: &ConfigError) {
    match err {
        ConfigError::BankNotFound(_) => {
            tracing::warn!(
                path = %path.display(),
                %variant,
                "no saved bank, using factory default"
            );
        }
        err => {
            tracing::warn!(
                path = %path.display(),
                %variant,
                error = %err,
                "unusable bank, using factory default"
            );
        }
    }
}

/// Load a `variant` bank, falling back to the factory bank.
///
/// A missing file and any other failure (I/O, parse, validation, wrong
/// variant) are logged at `warn` before the fallback is returned.
pub fn load_or_default(path: impl AsRef<Path>, variant: Variant) -> PresetBank<Settings> {
    let path = path.as_ref();
    let format = BankFormat::from_path(path);
    let loaded = read_bank_file(path).and_then(|text| decode_bank_as(&text, format, variant));
    match loaded {
        Ok(bank) => bank,
        Err(err) => {
            log_fallback(path, variant, &err);
            default_bank(variant)
        }
    }
}

/// Typed form of [`load_or_default`].
pub fn load_or_default_typed<S: FactoryDefault>(path: impl AsRef<Path>) -> PresetBank<S> {
    let path = path.as_ref();
    match load_typed_bank(path) {
        Ok(bank) => bank,
        Err(err) => {
            log_fallback(path, S::VARIANT, &err);
            default_bank_for()
        }
    }
}
