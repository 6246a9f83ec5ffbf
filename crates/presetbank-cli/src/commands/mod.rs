//! CLI command implementations.

pub mod defaults;
pub mod init;
pub mod paths;
pub mod show;
pub mod validate;

use clap::ValueEnum;
use presetbank_config::BankFormat;

/// Text format selectable on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// TOML document
    #[default]
    Toml,
    /// JSON document
    Json,
}

impl From<FormatArg> for BankFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => BankFormat::Toml,
            FormatArg::Json => BankFormat::Json,
        }
    }
}
