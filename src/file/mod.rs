// src/file/mod.rs
#[cfg(test)]
use std::collections::HashMap;

pub mod error;
pub mod export;
pub mod store;

pub use error::StoreError;
pub use store::AnalysisStore;

// Read side of the key-value medium; eframe only hands out this much at startup
pub trait KeyValueSource {
    fn get_string(&self, key: &str) -> Option<String>;
}

// Synchronous key-value medium the store persists into
pub trait KeyValueStore: KeyValueSource {
    fn set_string(&mut self, key: &str, value: String);
    fn flush(&mut self) {}
}

/// Read-only view over eframe's persistence backend, as given in `CreationContext`.
pub struct EframeReader<'a> {
    inner: &'a dyn eframe::Storage,
}

impl<'a> EframeReader<'a> {
    pub fn new(inner: &'a dyn eframe::Storage) -> Self {
        Self { inner }
    }
}

impl KeyValueSource for EframeReader<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get_string(key)
    }
}

/// Adapts eframe's persistence backend (a RON file in the app data dir).
pub struct EframeStorage<'a> {
    inner: &'a mut dyn eframe::Storage,
}

impl<'a> EframeStorage<'a> {
    pub fn new(inner: &'a mut dyn eframe::Storage) -> Self {
        Self { inner }
    }
}

impl KeyValueSource for EframeStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get_string(key)
    }
}

impl KeyValueStore for EframeStorage<'_> {
    fn set_string(&mut self, key: &str, value: String) {
        self.inner.set_string(key, value);
    }

    fn flush(&mut self) {
        self.inner.flush();
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueSource for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
