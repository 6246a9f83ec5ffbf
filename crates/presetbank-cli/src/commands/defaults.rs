//! Print a module's factory bank.

use clap::Args;
use presetbank_config::{default_bank, encode_bank};
use presetbank_core::Variant;

use super::FormatArg;

/// Print the factory bank of a module.
#[derive(Args)]
pub struct DefaultsArgs {
    /// Module variant (jva, computer-midi-keyboard)
    pub variant: Variant,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: FormatArg,
}

/// Run the defaults command.
pub fn run(args: DefaultsArgs) -> anyhow::Result<()> {
    let bank = default_bank(args.variant);
    let text = encode_bank(&bank, args.format.into())?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
