use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::UNCATEGORIZED;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("could not read category store")]
    Read(#[source] io::Error),
    #[error("category store is not valid JSON")]
    Decode(#[source] serde_json::Error),
    #[error("could not write category store")]
    Write(#[source] io::Error),
    #[error("could not encode category store")]
    Encode(#[source] serde_json::Error),
}

/// The durable mapping from category name to keyword list, persisted as a
/// single JSON object. Insertion order of categories is part of the contract:
/// categorization iterates in this order and the last match wins, so the map
/// must keep it across save/load.
pub(crate) struct CategoryStore {
    path: PathBuf,
    categories: IndexMap<String, Vec<String>>,
}

impl CategoryStore {
    /// Read the store from `path`. A missing file is the normal first-run
    /// case and yields the default single-category state; unreadable or
    /// malformed content is an error.
    pub(crate) fn load(path: &Path) -> Result<Self, StoreError> {
        let mut categories: IndexMap<String, Vec<String>> = if path.exists() {
            let raw = fs::read_to_string(path).map_err(StoreError::Read)?;
            serde_json::from_str(&raw).map_err(StoreError::Decode)?
        } else {
            IndexMap::new()
        };

        // The fallback category always exists, whatever the file says.
        categories.entry(UNCATEGORIZED.to_string()).or_default();

        Ok(Self {
            path: path.to_path_buf(),
            categories,
        })
    }

    /// Like `load`, but a broken store degrades to the default state with a
    /// warning instead of failing the session.
    pub(crate) fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Warning: {e}; starting with an empty category store");
                let mut categories = IndexMap::new();
                categories.insert(UNCATEGORIZED.to_string(), Vec::new());
                Self {
                    path: path.to_path_buf(),
                    categories,
                }
            }
        }
    }

    /// Serialize the whole mapping, replacing the previous file. Writes to a
    /// sibling temp file first and renames into place so an interrupted save
    /// never leaves a corrupt store behind.
    pub(crate) fn save(&self) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(&self.categories).map_err(StoreError::Encode)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)?;
        Ok(())
    }

    /// Add an empty category. Returns whether it was created; empty names
    /// and existing names are a no-op, not an error.
    pub(crate) fn create_category(&mut self, name: &str) -> Result<bool, StoreError> {
        if name.is_empty() || self.categories.contains_key(name) {
            return Ok(false);
        }
        self.categories.insert(name.to_string(), Vec::new());
        self.save()?;
        Ok(true)
    }

    /// Record a keyword under an existing category. The keyword is trimmed
    /// and lower-cased before storage; duplicates and empty keywords are
    /// skipped. Returns whether anything was added.
    pub(crate) fn learn_keyword(
        &mut self,
        category: &str,
        keyword: &str,
    ) -> Result<bool, StoreError> {
        let keywords = self
            .categories
            .get_mut(category)
            .ok_or_else(|| StoreError::UnknownCategory(category.to_string()))?;

        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() || keywords.contains(&normalized) {
            return Ok(false);
        }
        keywords.push(normalized);
        self.save()?;
        Ok(true)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub(crate) fn keywords(&self, name: &str) -> Option<&[String]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Categories in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub(crate) fn len(&self) -> usize {
        self.categories.len()
    }
}
