//! Default banks, validation and persistence for presetbank.
//!
//! `presetbank-core` defines what a bank looks like. This crate is the
//! boundary around it: it builds the factory banks every module starts from,
//! checks bank data read from outside the process, and stores banks as TOML
//! or JSON files in a per-user directory.
//!
//! # Features
//!
//! - **Factory Defaults**: Bootstrap bank for every module, built fresh on each call
//! - **Validation**: Structural rules, module tags, versions and parameter ranges
//! - **Store**: TOML/JSON encode and decode, load and save, fallback to defaults
//! - **Paths**: Platform-specific bank directory with an environment override
//!
//! # Example
//!
//! ```rust,no_run
//! use presetbank_config::{load_or_default_typed, save_typed_bank, user_bank_path};
//! use presetbank_core::{JvaSettings, Variant};
//!
//! let path = user_bank_path(Variant::Jva);
//! let mut bank = load_or_default_typed::<JvaSettings>(&path);
//!
//! let preset = &mut bank.categories[0].presets[0];
//! let mut settings = preset.settings.clone();
//! settings.filter.frequency = 1200.0;
//! preset.update_settings(settings);
//!
//! save_typed_bank(&path, &bank).unwrap();
//! ```

mod error;
mod store;

/// Platform-specific bank locations.
pub mod paths;

/// Bank and settings validation.
pub mod validation;

/// Factory defaults bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    DEFAULT_PRESET_NAME, FactoryDefault, LOCAL_CATEGORY, default_bank, default_bank_for,
    default_computer_midi_keyboard_bank, default_computer_midi_keyboard_settings,
    default_jva_bank, default_jva_settings, default_settings, is_default_bank, local_bank,
};
pub use paths::{
    BANKS_DIR_ENV, bank_file_name, ensure_user_banks_dir, list_user_banks, user_bank_path,
    user_banks_dir, user_config_dir,
};
pub use store::{
    BankFormat, decode_bank, decode_bank_as, decode_typed_bank, encode_bank, encode_typed_bank,
    load_bank, load_or_default, load_or_default_typed, load_typed_bank, parse_bank, parse_bank_as,
    save_bank, save_typed_bank, validate_outline,
};
pub use validation::{
    BankOutline, BankValidator, ParamRange, ValidationError, ValidationResult, validate_bank,
    validate_settings, validate_typed_bank,
};
