//! Typed failures raised at the registry call surface.

use thiserror::Error;

/// Errors raised by registry operations.
///
/// Every variant carries the inputs that triggered it, so callers can match
/// on the kind and still report what was being asked for. All of these are
/// ordinary, recoverable control-flow signals; none is fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A lookup or update targeted a key with no entry.
    #[error("no entry '{key}' in group '{group}'")]
    NotFound {
        /// Name of the group that was searched.
        group: String,
        /// The key that was requested.
        key: String,
    },

    /// A non-forced insert targeted a key that already holds an entry.
    #[error("entry '{key}' already exists in group '{group}'")]
    AlreadyExists {
        /// Name of the group that rejected the write.
        group: String,
        /// The occupied key.
        key: String,
    },

    /// `clear` was called with something other than the exact confirmation
    /// literal.
    #[error("refusing to clear group '{group}': confirmation '{given}' is not \"CONFIRM\"")]
    InvalidConfirmation {
        /// Name of the group that was (not) cleared.
        group: String,
        /// The confirmation string the caller supplied.
        given: String,
    },

    /// The entry exists but does not hold a value of the requested type.
    #[error("entry '{key}' in group '{group}' does not hold a value of type {expected}")]
    TypeMismatch {
        /// Name of the group that was searched.
        group: String,
        /// The key that was requested.
        key: String,
        /// The type the caller asked for.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::NotFound {
            group: "cache".to_string(),
            key: "user:1".to_string(),
        };
        assert_eq!(err.to_string(), "no entry 'user:1' in group 'cache'");
    }

    #[test]
    fn test_already_exists_display() {
        let err = RegistryError::AlreadyExists {
            group: "cache".to_string(),
            key: "user:1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "entry 'user:1' already exists in group 'cache'"
        );
    }

    #[test]
    fn test_invalid_confirmation_display() {
        let err = RegistryError::InvalidConfirmation {
            group: "cache".to_string(),
            given: "yes please".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "refusing to clear group 'cache': confirmation 'yes please' is not \"CONFIRM\""
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = RegistryError::TypeMismatch {
            group: "cache".to_string(),
            key: "user:1".to_string(),
            expected: "i32",
        };
        assert_eq!(
            err.to_string(),
            "entry 'user:1' in group 'cache' does not hold a value of type i32"
        );
    }

    #[test]
    fn test_equality() {
        let a = RegistryError::NotFound {
            group: "g".to_string(),
            key: "k".to_string(),
        };
        let b = RegistryError::NotFound {
            group: "g".to_string(),
            key: "k".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            RegistryError::AlreadyExists {
                group: "g".to_string(),
                key: "k".to_string(),
            }
        );
    }

    #[test]
    fn test_debug_format() {
        let err = RegistryError::InvalidConfirmation {
            group: "g".to_string(),
            given: "nope".to_string(),
        };
        assert!(format!("{:?}", err).starts_with("InvalidConfirmation"));
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &RegistryError::NotFound {
            group: "g".to_string(),
            key: "k".to_string(),
        };
        assert_eq!(err.to_string(), "no entry 'k' in group 'g'");
    }
}
