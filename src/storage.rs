//! Persistence for the row selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selection survives page loads (pagination, sorting, filtering all
//! reload the listing). It is stored as a JSON string array under one
//! `localStorage` key. The tracker only sees [`SelectionStore`], so tests run
//! against [`MemoryStore`] and the browser build uses [`LocalStorageStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::selection::Selection;

/// Error returned by [`SelectionStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be reached (no window, storage disabled).
    #[error("selection storage is unavailable")]
    Unavailable,
    /// The stored value is not a JSON array of strings.
    #[error("stored selection is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The backing store refused the write (quota, private mode).
    #[error("failed to write selection: {0}")]
    Write(String),
}

/// Read/write access to the persisted selection.
pub trait SelectionStore {
    /// Current persisted selection; a missing entry is the empty selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage is unreachable or holds bad data.
    fn get(&self) -> Result<Selection, StoreError>;

    /// Replace the persisted selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value cannot be written.
    fn set(&mut self, selection: &Selection) -> Result<(), StoreError>;

    /// Drop the persisted entry entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage is unreachable.
    fn remove(&mut self) -> Result<(), StoreError>;
}

/// Decode a raw stored value into a normalized selection.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] when `raw` is not a JSON string array.
pub fn decode_selection(raw: Option<&str>, cap: usize) -> Result<Selection, StoreError> {
    let Some(raw) = raw else {
        return Ok(Selection::default());
    };
    let ids: Vec<String> = serde_json::from_str(raw)?;
    let stored = ids.len();
    let selection = Selection::normalized(ids, cap);
    if selection.len() != stored {
        log::warn!("normalized stored selection from {stored} to {} ids", selection.len());
    }
    Ok(selection)
}

/// Encode a selection as its stored JSON form.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if serialization fails.
pub fn encode_selection(selection: &Selection) -> Result<String, StoreError> {
    Ok(serde_json::to_string(selection)?)
}

/// In-memory store holding the raw encoded value, as the browser would.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    raw: Option<String>,
    cap: usize,
}

impl MemoryStore {
    pub fn new(cap: usize) -> Self {
        Self { raw: None, cap }
    }

    /// Seed the store with a raw value, valid or not.
    pub fn with_raw(cap: usize, raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()), cap }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self) -> Result<Selection, StoreError> {
        decode_selection(self.raw.as_deref(), self.cap)
    }

    fn set(&mut self, selection: &Selection) -> Result<(), StoreError> {
        self.raw = Some(encode_selection(selection)?);
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.raw = None;
        Ok(())
    }
}

/// `window.localStorage` backed store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
    cap: usize,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>, cap: usize) -> Self {
        Self { key: key.into(), cap }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl SelectionStore for LocalStorageStore {
    fn get(&self) -> Result<Selection, StoreError> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&self.key).map_err(|_| StoreError::Unavailable)?;
        decode_selection(raw.as_deref(), self.cap)
    }

    fn set(&mut self, selection: &Selection) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let raw = encode_selection(selection)?;
        storage
            .set_item(&self.key, &raw)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .remove_item(&self.key)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
