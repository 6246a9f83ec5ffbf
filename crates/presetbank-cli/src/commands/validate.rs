//! Validate a bank file.

use std::path::PathBuf;

use clap::Args;
use presetbank_config::{
    BankFormat, BankValidator, ConfigError, ValidationError, parse_bank, parse_bank_as,
};
use presetbank_core::Variant;

/// Validate a bank file and report every problem.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a `.toml` or `.json` bank file
    pub file: PathBuf,

    /// Require every preset to belong to this module. Untagged presets are read as it
    #[arg(short = 'm', long)]
    pub variant: Option<Variant>,

    /// Skip parameter range checks
    #[arg(long)]
    pub no_ranges: bool,
}

/// Run the validate command.
///
/// Fails if the file cannot be read or parsed, or violates any rule.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| ConfigError::read_file(&args.file, e))?;

    let mut validator = BankValidator::new().with_ranges(!args.no_ranges);
    if let Some(variant) = args.variant {
        validator = validator.expect_variant(variant);
    }

    let format = BankFormat::from_path(&args.file);
    let parsed = match args.variant {
        Some(variant) => parse_bank_as(&text, format, variant),
        None => parse_bank(&text, format),
    };
    let result = parsed.and_then(|bank| {
        validator.validate(&bank)?;
        Ok(bank)
    });

    match result {
        Ok(bank) => {
            println!(
                "{}: ok ({} categories, {} presets)",
                args.file.display(),
                bank.categories.len(),
                bank.preset_count()
            );
            Ok(())
        }
        Err(ConfigError::Validation(err)) => {
            let errors = err.into_errors();
            report(&errors);
            anyhow::bail!("{}: {} problem(s) found", args.file.display(), errors.len())
        }
        Err(err) => Err(err.into()),
    }
}

fn report(errors: &[ValidationError]) {
    for error in errors {
        println!("  - {error}");
    }
}
