//! Core traits for testability and abstraction.

use crate::error::Result;
use serde_json::Value;

/// Trait for key-value persistence.
///
/// This is the only storage capability the stores depend on: get, set, and
/// remove by key, plus a bulk clear for the destructive "clear all data"
/// operation. The production implementation is `SQLite`-backed, while tests
/// use an in-memory map.
#[allow(clippy::missing_errors_doc)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every stored value.
    fn clear(&self) -> Result<()>;
}

/// Trait for probing biometric authentication capability.
///
/// The settings store consults this before honoring a biometric-lock request;
/// when the probe reports unavailable, the request is rejected and the stored
/// flag stays false.
pub trait BiometricProbe {
    /// Check whether biometric authentication can be used.
    fn biometrics_available(&self) -> bool;
}

/// A probe for environments with no biometric hardware at all.
///
/// Always reports unavailable. This is the probe the CLI uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBiometrics;

impl BiometricProbe for NoBiometrics {
    fn biometrics_available(&self) -> bool {
        false
    }
}
