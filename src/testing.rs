//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit tests.

#![allow(dead_code)]

use crate::error::Result;
use crate::traits::{BiometricProbe, KeyValueStore};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// An in-memory key-value store for testing.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RefCell<HashMap<String, Value>>,
}

impl MemoryKvStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// A mock biometric probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct MockBiometricProbe {
    available: bool,
}

impl MockBiometricProbe {
    /// A probe that reports biometrics available.
    #[must_use]
    pub const fn available() -> Self {
        Self { available: true }
    }

    /// A probe that reports biometrics unavailable.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { available: false }
    }
}

impl BiometricProbe for MockBiometricProbe {
    fn biometrics_available(&self) -> bool {
        self.available
    }
}
