//! Preset bank data model for multi-instrument audio applications.
//!
//! A preset bank is a typed, versioned container of named settings snapshots
//! for one controllable module. This crate defines the shapes only; building
//! the bootstrap banks, validating external data and persisting banks live in
//! `presetbank-config`.
//!
//! # Core Abstractions
//!
//! ## Settings Schemas
//!
//! - [`JvaSettings`] - Three-oscillator subtractive voice engine
//! - [`ComputerMidiKeyboardSettings`] - Computer-keyboard MIDI controller
//! - [`Settings`] - Tagged union over every schema, discriminated by [`Variant`]
//! - [`SettingsSchema`] - Trait tying a concrete schema to its variant tag
//!
//! ## Entities
//!
//! - [`Preset`] - Named, versioned snapshot of one settings value
//! - [`PresetCategory`] - Labelled, ordered group of presets
//! - [`PresetBank`] - Identified collection of categories, scoped to one variant
//! - [`BankId`] - Persisted identifier or the local "not yet saved" sentinel
//!
//! # Example
//!
//! ```rust
//! use presetbank_core::{
//!     ArpeggioMode, ComputerMidiKeyboardSettings, Preset, PresetBank, PresetCategory,
//! };
//!
//! let settings = ComputerMidiKeyboardSettings {
//!     arp_on: true,
//!     arp_mode: ArpeggioMode::UpDown,
//!     arp_node_repeat: 2,
//!     chord_trigger: vec![0, 4, 7],
//!     octave_offset: 48,
//!     transpose_offset: 0,
//! };
//!
//! let mut bank = PresetBank::local();
//! bank.add_category(PresetCategory::new("chords").with_preset(Preset::new("major", settings)))
//!     .unwrap();
//! assert_eq!(bank.preset_count(), 1);
//! ```

mod bank;
mod category;
mod error;
mod preset;
pub mod settings;
pub mod version;

pub use bank::{BankId, LOCAL_BANK_ID, PresetBank};
pub use category::PresetCategory;
pub use error::BankError;
pub use preset::Preset;
pub use settings::{
    AmpSettings, ArpeggioMode, ComputerMidiKeyboardSettings, Envelope, FilterSettings,
    FilterType, JvaSettings, NoiseSettings, NoiseType, OscillatorSettings, PitchSettings,
    Settings, SettingsSchema, Variant, Waveform,
};
