//! Seed data for the in-memory repositories.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use super::memory::InMemoryRepository;
use super::models::{Land, Project, Property};
use super::service::{ListingsService, SharedCache};

/// Initial contents of the three listing collections.
///
/// Any collection missing from the JSON document starts empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingsSeed {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub lands: Vec<Land>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ListingsSeed {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.properties.len() + self.lands.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a service over in-memory repositories holding this seed.
    pub fn into_service(self, cache: SharedCache) -> ListingsService {
        ListingsService::new(
            Arc::new(InMemoryRepository::new(self.properties)),
            Arc::new(InMemoryRepository::new(self.lands)),
            Arc::new(InMemoryRepository::new(self.projects)),
            cache,
        )
    }
}
