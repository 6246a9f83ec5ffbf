//! Error types for bank construction and conversion.

use thiserror::Error;

use crate::settings::Variant;

/// Errors raised while assembling or converting preset banks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// A category with the same label already exists in the bank.
    #[error("duplicate category label: {0}")]
    DuplicateCategory(String),

    /// A settings discriminant that does not name any known schema.
    #[error("unknown settings variant: {0}")]
    UnknownVariant(String),

    /// A preset whose settings belong to a different module than the bank.
    #[error(
        "preset '{preset}' in category '{category}' holds {found} settings, expected {expected}"
    )]
    VariantMismatch {
        /// Label of the category containing the preset.
        category: String,
        /// Name of the offending preset.
        preset: String,
        /// Variant the bank is scoped to.
        expected: Variant,
        /// Variant the preset actually carries.
        found: Variant,
    },

    /// The stored preset moved on since the editor loaded it.
    #[error(
        "version conflict: stored version {stored} is newer than base version {base}"
    )]
    VersionConflict {
        /// Version currently held by persistence.
        stored: u32,
        /// Version the edit started from.
        base: u32,
    },
}
