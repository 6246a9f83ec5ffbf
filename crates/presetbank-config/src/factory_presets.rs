//! Factory defaults bundled with the library.
//!
//! When a module starts and no saved bank exists, it seeds itself from here.
//! The baseline is compiled in so it works offline and before any storage
//! round-trip. Every call builds a fresh value; nothing is cached or shared.

use presetbank_core::{
    AmpSettings, ArpeggioMode, BankId, ComputerMidiKeyboardSettings, Envelope, FilterSettings,
    FilterType, JvaSettings, NoiseSettings, NoiseType, OscillatorSettings, PitchSettings, Preset,
    PresetBank, PresetCategory, Settings, SettingsSchema, Variant, Waveform,
};

/// Label of the single category in a bootstrap bank.
pub const LOCAL_CATEGORY: &str = "local";

/// Name of the single preset in a bootstrap bank.
pub const DEFAULT_PRESET_NAME: &str = "default";

/// A settings schema with a compiled-in baseline.
pub trait FactoryDefault: SettingsSchema {
    /// Fresh baseline value.
    fn factory_default() -> Self;
}

impl FactoryDefault for JvaSettings {
    fn factory_default() -> Self {
        default_jva_settings()
    }
}

impl FactoryDefault for ComputerMidiKeyboardSettings {
    fn factory_default() -> Self {
        default_computer_midi_keyboard_settings()
    }
}

/// Baseline voice-engine patch: detuned saws over a sub triangle into a
/// resonant low-pass.
pub fn default_jva_settings() -> JvaSettings {
    JvaSettings {
        oscillator1: OscillatorSettings {
            volume: -12.0,
            transpose: 0,
            detune: -5.0,
            waveform: Waveform::Sawtooth,
        },
        oscillator2: OscillatorSettings {
            volume: -12.0,
            transpose: -12,
            detune: 0.0,
            waveform: Waveform::Triangle,
        },
        oscillator3: OscillatorSettings {
            volume: -12.0,
            transpose: 0,
            detune: 7.0,
            waveform: Waveform::Sawtooth,
        },
        oscillator_spread: 0.4,
        amp: AmpSettings {
            envelope: Envelope {
                attack: 0.0,
                decay: 400.0,
                sustain: 0.8,
                release: 200.0,
            },
            modulation_amount: 0.0,
            modulation_rate: 4.0,
        },
        filter: FilterSettings {
            envelope: Envelope {
                attack: 300.0,
                decay: 300.0,
                sustain: 0.8,
                release: 200.0,
            },
            envelope_amount: 0.7,
            frequency: 5000.0,
            q: 3.0,
            filter_type: FilterType::Lowpass,
            modulation_amount: 0.0,
            modulation_rate: 4.0,
        },
        pitch: PitchSettings {
            modulation_amount: 0.0,
            modulation_rate: 8.0,
        },
        noise: NoiseSettings {
            noise_type: NoiseType::White,
            volume: -24.0,
        },
        volume: -12.0,
    }
}

/// Baseline keyboard patch: arpeggiator off, single notes from C3.
pub fn default_computer_midi_keyboard_settings() -> ComputerMidiKeyboardSettings {
    ComputerMidiKeyboardSettings {
        arp_on: false,
        arp_mode: ArpeggioMode::Up,
        arp_node_repeat: 1,
        chord_trigger: vec![0],
        octave_offset: 48,
        transpose_offset: 0,
    }
}

/// Baseline settings for any variant.
pub fn default_settings(variant: Variant) -> Settings {
    match variant {
        Variant::Jva => default_jva_settings().into_settings(),
        Variant::ComputerMidiKeyboard => default_computer_midi_keyboard_settings().into_settings(),
    }
}

/// Wrap settings as an unsaved bank with one `"local"` category holding one
/// `"default"` preset at version 0.
pub fn local_bank<S>(settings: S) -> PresetBank<S> {
    let preset = Preset::new(DEFAULT_PRESET_NAME, settings);
    PresetBank {
        id: BankId::Local,
        categories: vec![PresetCategory::new(LOCAL_CATEGORY).with_preset(preset)],
    }
}

/// Bootstrap bank for a schema type.
pub fn default_bank_for<S: FactoryDefault>() -> PresetBank<S> {
    local_bank(S::factory_default())
}

/// Bootstrap bank for any variant, in tagged form.
pub fn default_bank(variant: Variant) -> PresetBank<Settings> {
    local_bank(default_settings(variant))
}

/// Bootstrap bank for the voice engine.
pub fn default_jva_bank() -> PresetBank<JvaSettings> {
    default_bank_for()
}

/// Bootstrap bank for the keyboard controller.
pub fn default_computer_midi_keyboard_bank() -> PresetBank<ComputerMidiKeyboardSettings> {
    default_bank_for()
}

/// Whether `bank` is exactly the unsaved bootstrap bank of its variant.
pub fn is_default_bank(bank: &PresetBank<Settings>) -> bool {
    bank.detected_variant()
        .is_some_and(|variant| *bank == default_bank(variant))
}
