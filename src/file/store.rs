// src/file/store.rs
use tracing::{debug, info, warn};
use super::{KeyValueSource, KeyValueStore, StoreError};
use crate::state::Analysis;

/// Completed analyses, most recent first, persisted as one blob under a fixed key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisStore {
    key: String,
    analyses: Vec<Analysis>,
}

impl AnalysisStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            analyses: Vec::new(),
        }
    }

    pub fn load(storage: &dyn KeyValueSource, key: &str) -> Self {
        Self::from_blob(key, storage.get_string(key))
    }

    /// Builds the store from whatever was read under `key`. Absent or
    /// unreadable data yields an empty history.
    pub fn from_blob(key: &str, blob: Option<String>) -> Self {
        let mut store = Self::new(key);

        let Some(text) = blob.filter(|text| !text.trim().is_empty()) else {
            debug!(key, "No stored analyses found");
            return store;
        };

        match Self::decode(&text) {
            Ok(analyses) => {
                info!(key, count = analyses.len(), "Loaded stored analyses");
                store.analyses = analyses;
            }
            Err(e) => {
                warn!(key, error = %e, "Discarding unreadable analysis history");
            }
        }

        store
    }

    pub fn decode(text: &str) -> Result<Vec<Analysis>, StoreError> {
        Ok(ron::from_str(text)?)
    }

    pub fn encode(&self) -> Result<String, StoreError> {
        let content = ron::ser::to_string_pretty(
            &self.analyses,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
        )?;
        Ok(content)
    }

    /// Writes the full collection over the previous contents of the key.
    pub fn persist(&self, storage: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let content = self.encode()?;
        storage.set_string(&self.key, content);
        storage.flush();
        debug!(key = %self.key, count = self.analyses.len(), "Persisted analyses");
        Ok(())
    }

    pub fn prepend(&mut self, analysis: Analysis) {
        self.analyses.insert(0, analysis);
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}
