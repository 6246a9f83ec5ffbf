//! Voice-engine settings: three oscillators into a filter and amp stage.

use serde::{Deserialize, Serialize};

/// Oscillator waveform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Pure fundamental.
    #[default]
    Sine,
    /// All harmonics, bright.
    Sawtooth,
    /// Odd harmonics, soft.
    Triangle,
    /// Odd harmonics, hollow.
    Square,
}

/// Filter response type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Low-pass.
    #[default]
    Lowpass,
    /// High-pass.
    Highpass,
    /// Band-pass.
    Bandpass,
    /// Band-reject.
    Notch,
    /// All-pass.
    Allpass,
    /// Low shelf.
    Lowshelf,
    /// High shelf.
    Highshelf,
    /// Peaking bell.
    Peaking,
}

/// Noise colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseType {
    /// Flat spectrum.
    #[default]
    White,
    /// -3 dB/octave.
    Pink,
    /// -6 dB/octave.
    Brown,
}

/// One oscillator slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSettings {
    /// Output level in dB.
    pub volume: f32,
    /// Coarse tuning in semitones.
    pub transpose: i32,
    /// Fine tuning in cents.
    pub detune: f32,
    /// Waveform.
    #[serde(rename = "type")]
    pub waveform: Waveform,
}

/// ADSR envelope. Times in milliseconds, sustain as a 0-1 ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Attack time in ms.
    pub attack: f32,
    /// Decay time in ms.
    pub decay: f32,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f32,
    /// Release time in ms.
    pub release: f32,
}

/// Amplitude stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmpSettings {
    /// Amplitude envelope.
    pub envelope: Envelope,
    /// Tremolo depth (0.0 to 1.0).
    pub modulation_amount: f32,
    /// Tremolo rate in Hz.
    pub modulation_rate: f32,
}

/// Filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    /// Cutoff envelope.
    pub envelope: Envelope,
    /// How far the envelope sweeps the cutoff (0.0 to 1.0).
    pub envelope_amount: f32,
    /// Cutoff frequency in Hz.
    pub frequency: f32,
    /// Resonance.
    pub q: f32,
    /// Response type.
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    /// Cutoff LFO depth (0.0 to 1.0).
    pub modulation_amount: f32,
    /// Cutoff LFO rate in Hz.
    pub modulation_rate: f32,
}

/// Pitch modulation (vibrato).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchSettings {
    /// Vibrato depth (0.0 to 1.0).
    pub modulation_amount: f32,
    /// Vibrato rate in Hz.
    pub modulation_rate: f32,
}

/// Noise generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    /// Noise colour.
    #[serde(rename = "type")]
    pub noise_type: NoiseType,
    /// Output level in dB.
    pub volume: f32,
}

/// Complete voice-engine patch.
///
/// Serialized field names follow the camelCase wire format shared with the
/// rest of the application (`oscillatorSpread`, `modulationAmount`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JvaSettings {
    /// First oscillator.
    pub oscillator1: OscillatorSettings,
    /// Second oscillator.
    pub oscillator2: OscillatorSettings,
    /// Third oscillator.
    pub oscillator3: OscillatorSettings,
    /// Unison spread across the oscillators (0.0 to 1.0).
    pub oscillator_spread: f32,
    /// Amplitude stage.
    pub amp: AmpSettings,
    /// Filter stage.
    pub filter: FilterSettings,
    /// Pitch modulation.
    pub pitch: PitchSettings,
    /// Noise generator.
    pub noise: NoiseSettings,
    /// Master level in dB.
    pub volume: f32,
}

impl JvaSettings {
    /// The three oscillator slots in order.
    pub fn oscillators(&self) -> [&OscillatorSettings; 3] {
        [&self.oscillator1, &self.oscillator2, &self.oscillator3]
    }
}
