//! Preset version arithmetic.
//!
//! Versions only grow. Persistence uses them for optimistic concurrency:
//! an edit started from version `base` may only be stored while the stored
//! copy is still at `base` (or older).

use crate::error::BankError;

/// Version carried by a freshly created preset.
pub const INITIAL_VERSION: u32 = 0;

/// The version following `version`. Saturates at `u32::MAX`.
pub fn next(version: u32) -> u32 {
    version.saturating_add(1)
}

/// Fails with [`BankError::VersionConflict`] when `stored` has advanced past `base`.
pub fn check_fresh(stored: u32, base: u32) -> Result<(), BankError> {
    if stored > base {
        return Err(BankError::VersionConflict { stored, base });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(next(INITIAL_VERSION), 1);
        assert_eq!(next(41), 42);
    }

    #[test]
    fn next_saturates() {
        assert_eq!(next(u32::MAX), u32::MAX);
    }

    #[test]
    fn check_fresh_accepts_same_or_older_stored() {
        assert!(check_fresh(3, 3).is_ok());
        assert!(check_fresh(2, 3).is_ok());
    }

    #[test]
    fn check_fresh_rejects_newer_stored() {
        assert_eq!(
            check_fresh(5, 3),
            Err(BankError::VersionConflict { stored: 5, base: 3 })
        );
    }
}
