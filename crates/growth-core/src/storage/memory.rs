//! In-process key-value substrate.
//!
//! Behaves like browser local storage: values live in a single map, an
//! optional byte quota bounds the total size of keys plus values, and the
//! whole area can be switched off.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::SubstrateError;
use crate::storage::traits::{Substrate, SubstrateResult, PROBE_KEY};

/// Memory-backed substrate.
#[derive(Debug, Default)]
pub struct MemorySubstrate {
    values: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemorySubstrate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the combined size of all keys and values to `limit` bytes.
    pub fn with_quota(mut self, limit: usize) -> Self {
        self.quota = Some(limit);
        self
    }

    /// A substrate that refuses every call, like storage blocked by policy.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        Self::size_of(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn size_of(values: &HashMap<String, String>) -> usize {
        values.iter().map(|(key, value)| key.len() + value.len()).sum()
    }

    fn ensure_enabled(&self) -> SubstrateResult<()> {
        if self.disabled {
            return Err(SubstrateError::Disabled(
                "memory storage has been turned off".to_string(),
            ));
        }
        Ok(())
    }
}

impl Substrate for MemorySubstrate {
    fn probe(&self) -> SubstrateResult<()> {
        self.set(PROBE_KEY, PROBE_KEY)?;
        self.remove(PROBE_KEY)
    }

    fn get(&self, key: &str) -> SubstrateResult<Option<String>> {
        self.ensure_enabled()?;
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SubstrateResult<()> {
        self.ensure_enabled()?;
        let mut values = self.lock();
        if let Some(limit) = self.quota {
            let current = values.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let requested = Self::size_of(&values) - current + key.len() + value.len();
            if requested > limit {
                return Err(SubstrateError::QuotaExceeded { requested, limit });
            }
        }
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SubstrateResult<()> {
        self.ensure_enabled()?;
        self.lock().remove(key);
        Ok(())
    }
}
