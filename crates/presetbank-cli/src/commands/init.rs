//! Write factory banks into the user bank directory.

use clap::Args;
use presetbank_config::{default_bank, ensure_user_banks_dir, save_bank, user_bank_path};
use presetbank_core::Variant;

/// Write factory banks into the user bank directory.
#[derive(Args)]
pub struct InitArgs {
    /// Only initialise this module
    #[arg(short = 'm', long)]
    pub variant: Option<Variant>,

    /// Overwrite existing bank files
    #[arg(long)]
    pub force: bool,
}

/// Run the init command.
pub fn run(args: InitArgs) -> anyhow::Result<()> {
    let dir = ensure_user_banks_dir()?;
    println!("Bank directory: {}", dir.display());

    let variants = match args.variant {
        Some(variant) => vec![variant],
        None => Variant::ALL.to_vec(),
    };

    for variant in variants {
        let path = user_bank_path(variant);
        if path.exists() && !args.force {
            println!("  {:24} kept    {}", variant.tag(), path.display());
            tracing::info!(path = %path.display(), "bank exists, skipping");
            continue;
        }
        save_bank(&path, &default_bank(variant))?;
        println!("  {:24} written {}", variant.tag(), path.display());
    }

    Ok(())
}
