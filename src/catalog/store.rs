use std::collections::HashSet;

use tracing::{info, warn};

use super::query::{self, RELATED_LIMIT};
use super::types::{CategoryFilter, ProjectId, ProjectRecord};
use crate::error::CatalogError;

/// Project list compiled into the binary.
const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Projects shown in the landing page's featured section.
pub const FEATURED_COUNT: usize = 6;

/// Immutable, ordered project list loaded once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty list or a repeated id.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of project records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The catalog shipped with the site.
    pub fn bundled() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUNDLED_PROJECTS)?;
        info!("Loaded {} projects from bundled catalog", catalog.len());
        Ok(catalog)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn featured(&self, count: usize) -> &[ProjectRecord] {
        &self.records[..count.min(self.records.len())]
    }

    pub fn find_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        let found = self.records.iter().find(|r| r.id == id);
        if found.is_none() {
            warn!("No project with id {}", id);
        }
        found
    }

    /// Resolve a route segment. Anything that is not a valid id is a miss.
    pub fn find_by_key(&self, key: &str) -> Option<&ProjectRecord> {
        match key.parse::<ProjectId>() {
            Ok(id) => self.find_by_id(id),
            Err(_) => {
                warn!("Project key {:?} is not a valid id", key);
                None
            }
        }
    }

    pub fn query(&self, filter: CategoryFilter, text: &str) -> Vec<&ProjectRecord> {
        query::query(&self.records, filter, text)
    }

    /// Related picks for a case-study page.
    pub fn related_to(&self, record: &ProjectRecord) -> Vec<&ProjectRecord> {
        query::related(&self.records, record.id, record.kind, RELATED_LIMIT)
    }

    /// Distinct technology tags, in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|r| r.technologies.iter())
            .filter(|t| seen.insert(t.to_lowercase()))
            .map(String::as_str)
            .collect()
    }
}
