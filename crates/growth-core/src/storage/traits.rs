//! Storage substrate trait definition.
//!
//! The `Substrate` trait is the key-value surface the entry store writes
//! through. Keeping it behind a trait lets the store run over process
//! memory, plain files, or any other backend without changing its logic.

use crate::error::SubstrateError;

/// Result type for substrate calls.
pub type SubstrateResult<T> = std::result::Result<T, SubstrateError>;

/// A synchronous key-value storage area.
///
/// All implementations must ensure:
/// - A successful `set` replaces the whole value for that key atomically
/// - `get` of a key that was never set returns `Ok(None)`
/// - `remove` of a missing key succeeds
pub trait Substrate: Send + Sync {
    /// Check that the substrate can be written to at all.
    ///
    /// Implementations write and remove a throwaway value. A failure here
    /// means the storage area is disabled, full, or unreachable.
    fn probe(&self) -> SubstrateResult<()>;

    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> SubstrateResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SubstrateError::QuotaExceeded` if the value does not fit,
    /// or `SubstrateError::Io` if the backend write fails.
    fn set(&self, key: &str, value: &str) -> SubstrateResult<()>;

    /// Remove the value stored under `key`.
    fn remove(&self, key: &str) -> SubstrateResult<()>;
}

/// Key used by [`Substrate::probe`] implementations.
pub const PROBE_KEY: &str = "__storage_test__";

impl<S: Substrate + ?Sized> Substrate for &S {
    fn probe(&self) -> SubstrateResult<()> {
        (**self).probe()
    }

    fn get(&self, key: &str) -> SubstrateResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SubstrateResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SubstrateResult<()> {
        (**self).remove(key)
    }
}

impl<S: Substrate + ?Sized> Substrate for Box<S> {
    fn probe(&self) -> SubstrateResult<()> {
        (**self).probe()
    }

    fn get(&self, key: &str) -> SubstrateResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SubstrateResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SubstrateResult<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_substrate: Box<dyn Substrate>) {}
        fn _accepts_ref<S: Substrate>(_substrate: &S) {}
    }
}
