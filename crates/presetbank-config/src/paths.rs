//! Platform-specific locations of saved banks.
//!
//! # Directory Structure
//!
//! - **User banks**: `~/.config/presetbank/banks/` (Linux),
//!   `~/Library/Application Support/presetbank/banks/` (macOS),
//!   `%APPDATA%\presetbank\banks\` (Windows)
//! - One file per module: `jva.toml`, `computerMidiKeyboard.toml`
//!
//! Setting `PRESETBANK_BANKS_DIR` replaces the user banks directory, which is
//! how tests and sandboxed installs keep their banks apart.
//!
//! # Example
//!
//! ```rust,no_run
//! use presetbank_config::paths;
//! use presetbank_core::Variant;
//!
//! let path = paths::user_bank_path(Variant::Jva);
//! println!("Jva bank: {}", path.display());
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use presetbank_core::Variant;

use crate::ConfigError;
use crate::store::BankFormat;

/// Application name used for directory paths.
const APP_NAME: &str = "presetbank";

/// Subdirectory name for banks.
const BANKS_SUBDIR: &str = "banks";

/// Environment variable overriding [`user_banks_dir`].
pub const BANKS_DIR_ENV: &str = "PRESETBANK_BANKS_DIR";

fn banks_dir_from(override_dir: Option<OsString>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => user_config_dir().join(BANKS_SUBDIR),
    }
}

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform has none.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the directory holding the user's saved banks.
///
/// # Platform Paths
///
/// - Linux: `~/.config/presetbank/banks/`
/// - macOS: `~/Library/Application Support/presetbank/banks/`
/// - Windows: `%APPDATA%\presetbank\banks\`
///
/// A non-empty `PRESETBANK_BANKS_DIR` takes precedence.
pub fn user_banks_dir() -> PathBuf {
    banks_dir_from(std::env::var_os(BANKS_DIR_ENV))
}

/// File name of a module's bank, e.g. `computerMidiKeyboard.toml`.
pub fn bank_file_name(variant: Variant) -> String {
    format!("{}.{}", variant.tag(), BankFormat::Toml.extension())
}

/// Full path of a module's bank in the user banks directory.
pub fn user_bank_path(variant: Variant) -> PathBuf {
    user_banks_dir().join(bank_file_name(variant))
}

/// Ensure the user banks directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_banks_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_banks_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List bank files (`.toml` and `.json`) in the user banks directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_banks() -> Vec<PathBuf> {
    list_banks_in_dir(&user_banks_dir())
}

/// List bank files in `dir`, sorted by path.
pub fn list_banks_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut banks: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == "toml" || ext == "json")
        })
        .collect();
    banks.sort();
    banks
}

/// The module a bank file belongs to, judged by its file stem.
///
/// ```rust
/// use presetbank_config::paths::variant_from_path;
/// use presetbank_core::Variant;
/// use std::path::Path;
///
/// assert_eq!(variant_from_path(Path::new("/banks/jva.toml")), Some(Variant::Jva));
/// assert_eq!(variant_from_path(Path::new("notes.toml")), None);
/// ```
pub fn variant_from_path(path: &Path) -> Option<Variant> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_banks_dir() {
        let dir = banks_dir_from(None);
        assert!(dir.ends_with("presetbank/banks"), "got {}", dir.display());
    }

    #[test]
    fn test_override_banks_dir() {
        let dir = banks_dir_from(Some(OsString::from("/tmp/elsewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));

        let empty = banks_dir_from(Some(OsString::new()));
        assert!(empty.ends_with("presetbank/banks"));
    }

    #[test]
    fn test_bank_file_names() {
        assert_eq!(bank_file_name(Variant::Jva), "jva.toml");
        assert_eq!(
            bank_file_name(Variant::ComputerMidiKeyboard),
            "computerMidiKeyboard.toml"
        );
        assert!(user_bank_path(Variant::Jva).ends_with("jva.toml"));
    }

    #[test]
    fn test_list_banks_in_dir() {
        let temp_dir = TempDir::new().unwrap();

        fs::write(temp_dir.path().join("jva.toml"), "").unwrap();
        fs::write(temp_dir.path().join("computerMidiKeyboard.json"), "").unwrap();
        fs::write(temp_dir.path().join("readme.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("old.toml")).unwrap();

        let banks = list_banks_in_dir(temp_dir.path());
        let names: Vec<_> = banks
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["computerMidiKeyboard.json", "jva.toml"]);
    }

    #[test]
    fn test_list_banks_nonexistent_dir() {
        let missing = Path::new("/nonexistent/path/12345");
        assert!(list_banks_in_dir(missing).is_empty());
    }

    #[test]
    fn test_variant_from_path() {
        assert_eq!(
            variant_from_path(Path::new("a/computerMidiKeyboard.json")),
            Some(Variant::ComputerMidiKeyboard)
        );
        assert_eq!(variant_from_path(Path::new("a/b.toml")), None);
    }
}
