//! Settings schemas for every controllable module.
//!
//! Each module owns one closed record type. [`Settings`] wraps them in a
//! tagged union so a value read from outside the process always says which
//! module it belongs to; on the wire the tag is the `module` field.
//!
//! ```rust
//! use presetbank_core::{ArpeggioMode, ComputerMidiKeyboardSettings, SettingsSchema, Variant};
//!
//! let keyboard = ComputerMidiKeyboardSettings {
//!     arp_on: false,
//!     arp_mode: ArpeggioMode::Up,
//!     arp_node_repeat: 1,
//!     chord_trigger: vec![0],
//!     octave_offset: 48,
//!     transpose_offset: 0,
//! };
//!
//! let tagged = keyboard.clone().into_settings();
//! assert_eq!(tagged.variant(), Variant::ComputerMidiKeyboard);
//! assert_eq!(ComputerMidiKeyboardSettings::from_settings(tagged), Ok(keyboard));
//! ```

mod jva;
mod keyboard;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BankError;

pub use jva::{
    AmpSettings, Envelope, FilterSettings, FilterType, JvaSettings, NoiseSettings, NoiseType,
    OscillatorSettings, PitchSettings, Waveform,
};
pub use keyboard::{ArpeggioMode, ComputerMidiKeyboardSettings};

/// Module-type discriminant of a settings value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Subtractive synthesizer voice engine.
    Jva,
    /// Computer-keyboard MIDI controller.
    ComputerMidiKeyboard,
}

impl Variant {
    /// Every known variant, in declaration order.
    pub const ALL: [Variant; 2] = [Variant::Jva, Variant::ComputerMidiKeyboard];

    /// Wire tag written into the `module` field of serialized settings.
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Jva => "jva",
            Variant::ComputerMidiKeyboard => "computerMidiKeyboard",
        }
    }

    /// Human-readable module name.
    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Jva => "Jva voice engine",
            Variant::ComputerMidiKeyboard => "Computer MIDI keyboard",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = BankError;

    /// Parses a wire tag. Matching ignores case, `-` and `_` so that
    /// `computer-midi-keyboard` on a command line resolves as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Variant::ALL
            .into_iter()
            .find(|v| v.tag().to_lowercase() == normalized)
            .ok_or_else(|| BankError::UnknownVariant(s.to_string()))
    }
}

/// Settings of any known module, tagged by [`Variant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "module", rename_all = "camelCase")]
pub enum Settings {
    /// Voice-engine settings.
    Jva(JvaSettings),
    /// Keyboard-controller settings.
    ComputerMidiKeyboard(ComputerMidiKeyboardSettings),
}

impl Settings {
    /// The module this value belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            Settings::Jva(_) => Variant::Jva,
            Settings::ComputerMidiKeyboard(_) => Variant::ComputerMidiKeyboard,
        }
    }
}

/// A concrete settings record bound to exactly one [`Variant`].
///
/// Implemented by every schema so presets and banks can be generic over the
/// module while still converting to and from the tagged [`Settings`] form.
pub trait SettingsSchema: Clone + PartialEq + fmt::Debug + Sized {
    /// Variant tag of this schema.
    const VARIANT: Variant;

    /// Wraps the value in the tagged union.
    fn into_settings(self) -> Settings;

    /// Unwraps a tagged value, handing it back untouched on mismatch.
    fn from_settings(settings: Settings) -> Result<Self, Settings>;
}

impl SettingsSchema for JvaSettings {
    const VARIANT: Variant = Variant::Jva;

    fn into_settings(self) -> Settings {
        Settings::Jva(self)
    }

    fn from_settings(settings: Settings) -> Result<Self, Settings> {
        match settings {
            Settings::Jva(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl SettingsSchema for ComputerMidiKeyboardSettings {
    const VARIANT: Variant = Variant::ComputerMidiKeyboard;

    fn into_settings(self) -> Settings {
        Settings::ComputerMidiKeyboard(self)
    }

    fn from_settings(settings: Settings) -> Result<Self, Settings> {
        match settings {
            Settings::ComputerMidiKeyboard(s) => Ok(s),
            other => Err(other),
        }
    }
}
