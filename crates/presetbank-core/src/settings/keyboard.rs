//! Computer-keyboard MIDI controller settings.

use serde::{Deserialize, Serialize};

/// Order in which the arpeggiator walks held notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArpeggioMode {
    /// Lowest to highest.
    #[default]
    Up,
    /// Highest to lowest.
    Down,
    /// Up then down, ends not repeated.
    UpDown,
    /// Down then up, ends not repeated.
    DownUp,
    /// Random pick per step.
    Random,
    /// Order the keys were pressed.
    Played,
}

/// Keyboard controller patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerMidiKeyboardSettings {
    /// Arpeggiator enabled.
    pub arp_on: bool,
    /// Arpeggiator walk order.
    pub arp_mode: ArpeggioMode,
    /// How many times each arpeggiated note is struck.
    pub arp_node_repeat: u32,
    /// Semitone offsets played for every key, in order.
    pub chord_trigger: Vec<i32>,
    /// MIDI note of the lowest key.
    pub octave_offset: i32,
    /// Extra transposition in semitones.
    pub transpose_offset: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arp_mode_wire_names() {
        assert_eq!(serde_json::to_string(&ArpeggioMode::Up).unwrap(), "\"UP\"");
        assert_eq!(
            serde_json::to_string(&ArpeggioMode::UpDown).unwrap(),
            "\"UP_DOWN\""
        );
        assert_eq!(
            serde_json::from_str::<ArpeggioMode>("\"DOWN_UP\"").unwrap(),
            ArpeggioMode::DownUp
        );
    }

    #[test]
    fn decodes_camel_case_fields() {
        let json = r#"{
            "arpOn": true,
            "arpMode": "RANDOM",
            "arpNodeRepeat": 3,
            "chordTrigger": [0, 3, 7],
            "octaveOffset": 36,
            "transposeOffset": -2
        }"#;
        let s: ComputerMidiKeyboardSettings = serde_json::from_str(json).unwrap();
        assert!(s.arp_on);
        assert_eq!(s.arp_mode, ArpeggioMode::Random);
        assert_eq!(s.arp_node_repeat, 3);
        assert_eq!(s.chord_trigger, vec![0, 3, 7]);
        assert_eq!(s.octave_offset, 36);
        assert_eq!(s.transpose_offset, -2);
    }

    #[test]
    fn chord_trigger_order_is_preserved() {
        let json = r#"{"arpOn":false,"arpMode":"UP","arpNodeRepeat":1,
            "chordTrigger":[7,0,4],"octaveOffset":48,"transposeOffset":0}"#;
        let s: ComputerMidiKeyboardSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.chord_trigger, vec![7, 0, 4]);
    }
}
