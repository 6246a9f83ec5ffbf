//! Error types for bank loading, saving and validation.

use std::path::PathBuf;
use thiserror::Error;

use presetbank_core::BankError;

/// Errors that can occur at the persistence boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Failed to parse or serialize JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The bank data is malformed
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// The bank could not be assembled or narrowed
    #[error(transparent)]
    Bank(#[from] BankError),

    /// No bank file at the expected location
    #[error("bank not found: {0}")]
    BankNotFound(PathBuf),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the data itself is malformed, as opposed to
    /// an I/O failure.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ConfigError::TomlParse(_)
                | ConfigError::Json(_)
                | ConfigError::Validation(_)
                | ConfigError::Bank(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    // --- factory methods ---

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = ConfigError::read_file("/some/path", mock_io_err());
        let ConfigError::ReadFile { path, .. } = err else {
            panic!("expected ReadFile");
        };
        assert_eq!(path, std::path::Path::new("/some/path"));
    }

    #[test]
    fn create_dir_factory_produces_correct_variant() {
        let err = ConfigError::create_dir("/dir/path", mock_io_err());
        let ConfigError::CreateDir { path, .. } = err else {
            panic!("expected CreateDir");
        };
        assert_eq!(path, std::path::Path::new("/dir/path"));
    }

    // --- Display formatting ---

    #[test]
    fn write_file_display() {
        let err = ConfigError::write_file("/a/jva.toml", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/jva.toml"), "got: {msg}");
    }

    #[test]
    fn validation_display() {
        let err = ConfigError::from(ValidationError::DuplicateCategory("local".to_string()));
        assert_eq!(
            err.to_string(),
            "validation failed: duplicate category label: local"
        );
    }

    #[test]
    fn bank_error_is_transparent() {
        let err = ConfigError::from(BankError::UnknownVariant("theremin".to_string()));
        assert_eq!(err.to_string(), "unknown settings variant: theremin");
    }

    // --- source chain ---

    #[test]
    fn read_file_source_is_some() {
        let err = ConfigError::read_file("/x", mock_io_err());
        assert!(err.source().is_some(), "ReadFile must expose I/O source");
    }

    #[test]
    fn bank_not_found_source_is_none() {
        let err = ConfigError::BankNotFound(PathBuf::from("/x/jva.toml"));
        assert!(err.source().is_none());
    }

    // --- classification ---

    #[test]
    fn malformed_classification() {
        let invalid = ConfigError::from(ValidationError::UnknownVariant("x".into()));
        assert!(invalid.is_malformed());
        assert!(!ConfigError::read_file("/x", mock_io_err()).is_malformed());
        let missing = ConfigError::BankNotFound(PathBuf::from("/x"));
        assert!(!missing.is_malformed());
    }
}
