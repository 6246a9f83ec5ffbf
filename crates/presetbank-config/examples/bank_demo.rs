//! Bank demo: factory defaults, editing, validation and persistence.
//!
//! Run with: cargo run -p presetbank-config --example bank_demo

use presetbank_config::{
    BankFormat, BankValidator, default_computer_midi_keyboard_bank, default_jva_bank,
    encode_typed_bank, load_or_default_typed, save_typed_bank,
};
use presetbank_core::{ArpeggioMode, ComputerMidiKeyboardSettings, Preset, Settings, Variant};

fn main() {
    // --- Factory defaults ---
    println!("=== Factory Defaults ===\n");

    for variant in Variant::ALL {
        let bank = presetbank_config::default_bank(variant);
        println!(
            "{:<24} id={} categories={:?} presets={}",
            variant.display_name(),
            bank.id,
            bank.labels(),
            bank.preset_count()
        );
    }

    let jva = default_jva_bank();
    let settings = &jva.categories[0].presets[0].settings;
    println!("\nJva oscillators:");
    for (i, osc) in settings.oscillators().into_iter().enumerate() {
        println!(
            "  osc{}: {:?} vol={}dB transpose={} detune={}ct",
            i + 1,
            osc.waveform,
            osc.volume,
            osc.transpose,
            osc.detune
        );
    }
    println!(
        "  filter: {:?} {}Hz q={}",
        settings.filter.filter_type, settings.filter.frequency, settings.filter.q
    );

    // --- Editing ---
    println!("\n=== Editing ===\n");

    let mut keys = default_computer_midi_keyboard_bank();
    let mut arp = keys.categories[0].presets[0].settings.clone();
    arp.arp_on = true;
    arp.arp_mode = ArpeggioMode::UpDown;
    arp.chord_trigger = vec![0, 4, 7];
    let arps = keys.category_or_insert("arps");
    arps.push(Preset::new("major arp", arp));

    let default = &mut keys.categories[0].presets[0];
    let mut lower: ComputerMidiKeyboardSettings = default.settings.clone();
    lower.octave_offset = 36;
    let bumped = default.update_settings(lower);
    println!(
        "edited default preset, version bumped: {bumped} (now {})",
        default.version
    );

    for (label, preset) in keys.presets() {
        println!("  {label}/{} v{}", preset.name, preset.version);
    }

    // --- Validation ---
    println!("\n=== Validation ===\n");

    let mut broken = keys.clone().into_settings_bank();
    let preset = &mut broken.categories[0].presets[0];
    if let Settings::ComputerMidiKeyboard(s) = &mut preset.settings {
        s.arp_node_repeat = 64;
        s.chord_trigger.clear();
    }
    match BankValidator::new().validate(&broken) {
        Ok(()) => println!("bank is valid"),
        Err(err) => {
            for e in err.into_errors() {
                println!("  - {e}");
            }
        }
    }

    // --- Persistence ---
    println!("\n=== Persistence ===\n");

    match encode_typed_bank(&keys, BankFormat::Toml) {
        Ok(text) => println!("{text}"),
        Err(e) => println!("encode failed: {e}"),
    }

    let path = std::env::temp_dir()
        .join("presetbank-demo")
        .join("computerMidiKeyboard.toml");
    match save_typed_bank(&path, &keys) {
        Ok(()) => println!("saved to {}", path.display()),
        Err(e) => println!("save failed: {e}"),
    }

    let reloaded = load_or_default_typed::<ComputerMidiKeyboardSettings>(&path);
    println!(
        "reloaded {} presets, equal: {}",
        reloaded.preset_count(),
        reloaded == keys
    );
}
