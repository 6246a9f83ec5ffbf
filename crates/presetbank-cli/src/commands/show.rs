//! Summarise a bank file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use presetbank_config::load_bank;

/// Load a bank file and summarise its contents.
#[derive(Args)]
pub struct ShowArgs {
    /// Path to a `.toml` or `.json` bank file
    pub file: PathBuf,
}

/// Run the show command.
pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let bank = load_bank(&args.file)
        .with_context(|| format!("cannot load {}", args.file.display()))?;

    let module = bank
        .detected_variant()
        .map_or("(empty)", |v| v.display_name());
    let id = if bank.is_persisted() {
        bank.id.to_string()
    } else {
        format!("{} (local)", bank.id)
    };

    println!("File:       {}", args.file.display());
    println!("Bank id:    {id}");
    println!("Module:     {module}");
    println!("Categories: {}", bank.categories.len());
    println!("Presets:    {}", bank.preset_count());

    for category in &bank.categories {
        println!();
        println!("{}", category.category);
        println!("{}", "=".repeat(category.category.chars().count().max(1)));
        if category.is_empty() {
            println!("  (none)");
        }
        for preset in category.iter() {
            let visibility = if preset.private { "private" } else { "public" };
            println!("  {:24} v{:<6} {}", preset.name, preset.version, visibility);
        }
    }

    Ok(())
}
