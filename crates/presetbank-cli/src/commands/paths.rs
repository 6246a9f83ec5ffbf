//! Show where banks are stored.

use presetbank_config::{BANKS_DIR_ENV, list_user_banks, user_bank_path, user_banks_dir};
use presetbank_config::paths::variant_from_path;
use presetbank_core::Variant;

/// Run the paths command.
pub fn run() -> anyhow::Result<()> {
    let dir = user_banks_dir();
    let overridden = std::env::var_os(BANKS_DIR_ENV).is_some_and(|v| !v.is_empty());

    println!("Bank Directory:");
    println!("===============");
    print!("  {}", dir.display());
    if overridden {
        print!(" (from {BANKS_DIR_ENV})");
    }
    println!();
    println!("  Exists: {}", if dir.exists() { "yes" } else { "no" });
    println!();

    println!("Module Banks:");
    println!("=============");
    for variant in Variant::ALL {
        let path = user_bank_path(variant);
        let status = if path.is_file() { "saved" } else { "factory default" };
        println!("  {:24} {:16} {}", variant.tag(), status, path.display());
    }

    let others: Vec<_> = list_user_banks()
        .into_iter()
        .filter(|path| !Variant::ALL.iter().any(|v| *path == user_bank_path(*v)))
        .collect();
    if !others.is_empty() {
        println!();
        println!("Other Bank Files:");
        println!("=================");
        for path in others {
            let module = variant_from_path(&path).map_or("unknown module", |v| v.tag());
            println!("  {:24} {}", module, path.display());
        }
    }

    Ok(())
}
