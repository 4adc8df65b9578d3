//! Key generation for anonymous instance registration.

use uuid::Uuid;

/// Produces fresh unique string keys for
/// [`GroupHandle::register_instance`](crate::GroupHandle::register_instance).
///
/// Kept as a swappable collaborator so tests can supply deterministic keys
/// instead of random ones.
pub trait KeyGenerator: Send + Sync {
    /// Returns a fresh, statistically unique key.
    fn generate(&self) -> String;
}

/// Default generator backed by random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_unique() {
        let generator = UuidKeyGenerator;
        let a = generator.generate();
        let b = generator.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_key_is_uuid_formatted() {
        let key = UuidKeyGenerator.generate();
        assert!(Uuid::parse_str(&key).is_ok());
    }
}
