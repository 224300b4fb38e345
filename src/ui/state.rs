//! Keyed instance state for suspend/resume
//!
//! At suspend time the host asks each element to write its state into an
//! [`InstanceState`] bundle under a string key. The bundle can be turned into
//! bytes for whatever transient storage the host has, and decoded again at
//! resume time. Values are encoded with postcard.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Maximum length of a state key in bytes
pub const MAX_KEY_LEN: usize = 32;

/// Key type carried inside errors
pub type StateKey = heapless::String<MAX_KEY_LEN>;

/// Errors produced while saving state
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A value could not be encoded
    #[error("Failed to encode saved state: {0}")]
    Encode(postcard::Error),

    /// Key does not fit in a [`StateKey`]
    #[error("State key is longer than {max} bytes")]
    KeyTooLong {
        /// Maximum key length
        max: usize,
    },
}

/// Errors produced while restoring state
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The bundle bytes could not be decoded
    #[error("Saved state bundle is malformed: {0}")]
    Bundle(postcard::Error),

    /// An entry exists but does not decode into the expected type
    #[error("Saved state for `{key}` is malformed: {reason}")]
    Malformed {
        /// Key of the bad entry
        key: StateKey,
        /// Underlying decode failure
        reason: postcard::Error,
    },
}

/// String-keyed bundle of encoded values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl InstanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `value` and store it under `key`, replacing any previous entry
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), CaptureError> {
        if key.len() > MAX_KEY_LEN {
            return Err(CaptureError::KeyTooLong { max: MAX_KEY_LEN });
        }
        let bytes = postcard::to_allocvec(value).map_err(CaptureError::Encode)?;
        self.entries.insert(String::from(key), bytes);
        Ok(())
    }

    /// Store a string value under `key`
    pub fn put_str(&mut self, key: &str, value: &str) -> Result<(), CaptureError> {
        self.put(key, &value)
    }

    /// Decode the value stored under `key`.
    ///
    /// Returns `Ok(None)` when no entry exists.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RestoreError> {
        let Some(bytes) = self.entries.get(key) else {
            return Ok(None);
        };

        postcard::from_bytes(bytes)
            .map(Some)
            .map_err(|reason| RestoreError::Malformed {
                key: state_key(key),
                reason,
            })
    }

    /// Read a string value stored with [`InstanceState::put_str`]
    pub fn get_str(&self, key: &str) -> Result<Option<String>, RestoreError> {
        self.get::<String>(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode the whole bundle
    pub fn to_bytes(&self) -> Result<Vec<u8>, CaptureError> {
        postcard::to_allocvec(self).map_err(CaptureError::Encode)
    }

    /// Decode a bundle produced by [`InstanceState::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RestoreError> {
        postcard::from_bytes(bytes).map_err(RestoreError::Bundle)
    }
}

/// Copy `key` into a bounded string for error reporting.
///
/// Keys are checked on write, so truncation only affects lookups of
/// over-long keys that can never be present.
fn state_key(key: &str) -> StateKey {
    let mut out = StateKey::new();
    for ch in key.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
