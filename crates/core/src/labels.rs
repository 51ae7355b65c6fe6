//! Label table module
//!
//! This module provides the built-in segment labels and the merge with
//! caller-supplied overrides, plus loading override tables from disk.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON label table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML label table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported label table format: {0}")]
    UnsupportedFormat(String),
}

/// Built-in labels, keyed by segment
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("clients", "Clients"),
    ("support-plans", "Support Plans"),
    ("service-logs", "Service Logs"),
    ("assessments", "Assessments"),
    ("settings", "Settings"),
    ("new", "New"),
    ("edit", "Edit"),
];

/// Mapping from segment key to display label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: HashMap<String, String>,
}

impl LabelTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default table
    pub fn defaults() -> Self {
        DEFAULT_LABELS.iter().copied().collect()
    }

    /// Fresh table holding `self` with `overrides` applied on top
    pub fn merged(&self, overrides: Option<&LabelTable>) -> LabelTable {
        let mut table = self.clone();
        if let Some(overrides) = overrides {
            table.extend(overrides);
        }
        table
    }

    /// Insert or replace a label (builder pattern)
    pub fn with_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(key.into(), label.into());
    }

    /// Copy every entry of `other` into this table, replacing conflicts
    pub fn extend(&mut self, other: &LabelTable) {
        self.entries.extend(
            other
                .entries
                .iter()
                .map(|(key, label)| (key.clone(), label.clone())),
        );
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Label for `key`, or `fallback` when unmapped
    pub fn label_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Load an override table from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let contents = fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json(&contents),
            "yaml" | "yml" => Self::from_yaml(&contents),
            _ => Err(ConfigError::UnsupportedFormat(if ext.is_empty() {
                path.display().to_string()
            } else {
                ext
            })),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        }
    }
}
