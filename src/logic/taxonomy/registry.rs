//! Taxonomy Registry
//!
//! Lookup engine cho category/status reference tables.
//! Tables load một lần lúc startup - read-only sau đó.
//!
//! Lookup contract: a miss falls back to the FIRST entry of the table
//! (never an error). The dashboard renders whatever comes back, so an
//! unrecognized id must still produce a displayable entry. Callers that
//! need to distinguish a miss use the `find_*` variants.

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::types::{CategoryInfo, StatusInfo};

// ============================================================================
// ERRORS (registry construction only - lookups never fail)
// ============================================================================

#[derive(Debug)]
pub enum RegistryError {
    /// A table was empty - would break the fallback-to-first contract
    EmptyTable(&'static str),
    /// Two entries share an id
    DuplicateId(String),
    /// JSON document did not parse
    ParseError(serde_json::Error),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::EmptyTable(table) => {
                write!(f, "Registry table '{}' is empty", table)
            }
            RegistryError::DuplicateId(id) => write!(f, "Duplicate registry id: {}", id),
            RegistryError::ParseError(e) => write!(f, "Registry parse error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::ParseError(err)
    }
}

// ============================================================================
// BUILTIN TABLES
// ============================================================================

static BUILTIN: Lazy<TaxonomyRegistry> = Lazy::new(TaxonomyRegistry::builtin);

fn builtin_categories() -> Vec<CategoryInfo> {
    let entries = [
        (
            "intent-action-mismatch",
            "Intent-Action Mismatch",
            "#ef4444",
            "Agent actions diverge from the stated user intent",
        ),
        (
            "tool-misuse",
            "Tool Misuse",
            "#f97316",
            "Tool invoked outside its documented contract",
        ),
        (
            "reasoning-loops",
            "Reasoning Loops",
            "#f59e0b",
            "Repeated reasoning cycles without forward progress",
        ),
        (
            "goal-drift",
            "Goal Drift",
            "#8b5cf6",
            "Session objective shifts away from the original task",
        ),
        (
            "data-exfiltration",
            "Data Exfiltration",
            "#ec4899",
            "Sensitive data moved toward an external sink",
        ),
        (
            "excessive-resource-use",
            "Excessive Resource Use",
            "#3b82f6",
            "Token or cost consumption far above session baseline",
        ),
    ];
    entries
        .iter()
        .map(|(id, name, color, description)| CategoryInfo {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn builtin_statuses() -> Vec<StatusInfo> {
    let entries = [
        ("new", "New", "#3b82f6"),
        ("investigating", "Investigating", "#f59e0b"),
        ("suppressed", "Suppressed", "#6b7280"),
        ("escalated", "Escalated", "#ef4444"),
    ];
    entries
        .iter()
        .map(|(id, name, color)| StatusInfo {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}

// ============================================================================
// REGISTRY
// ============================================================================

/// JSON document shape for `from_json`
#[derive(Deserialize)]
struct RegistryDoc {
    categories: Vec<CategoryInfo>,
    statuses: Vec<StatusInfo>,
}

/// Read-only category/status tables.
///
/// Inject a `&TaxonomyRegistry` into lookups instead of reaching for the
/// global - tests substitute their own tables that way. `global()` exists
/// for callers that genuinely want the builtin one.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    categories: Vec<CategoryInfo>,
    statuses: Vec<StatusInfo>,
}

impl TaxonomyRegistry {
    /// Build a registry from explicit tables.
    /// Rejects empty tables and duplicate ids.
    pub fn new(
        categories: Vec<CategoryInfo>,
        statuses: Vec<StatusInfo>,
    ) -> Result<Self, RegistryError> {
        if categories.is_empty() {
            return Err(RegistryError::EmptyTable("categories"));
        }
        if statuses.is_empty() {
            return Err(RegistryError::EmptyTable("statuses"));
        }
        check_unique(categories.iter().map(|c| c.id.as_str()))?;
        check_unique(statuses.iter().map(|s| s.id.as_str()))?;
        Ok(Self {
            categories,
            statuses,
        })
    }

    /// The builtin anomaly taxonomy + triage status table
    pub fn builtin() -> Self {
        // Known-good literal tables, constructed directly
        Self {
            categories: builtin_categories(),
            statuses: builtin_statuses(),
        }
    }

    /// Load a registry from a JSON document:
    /// `{ "categories": [...], "statuses": [...] }`
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let doc: RegistryDoc = serde_json::from_str(json)?;
        Self::new(doc.categories, doc.statuses)
    }

    /// Process-wide builtin registry
    pub fn global() -> &'static TaxonomyRegistry {
        &BUILTIN
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn statuses(&self) -> &[StatusInfo] {
        &self.statuses
    }

    /// Category for `id`, falling back to the first table entry on a miss
    pub fn lookup_category(&self, id: &str) -> &CategoryInfo {
        match self.find_category(id) {
            Some(category) => category,
            None => {
                log::warn!("Unknown category id '{}', falling back to '{}'", id, self.categories[0].id);
                &self.categories[0]
            }
        }
    }

    /// Category for `id`, or `None` on a miss
    pub fn find_category(&self, id: &str) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Status for `id`, falling back to the first table entry on a miss
    pub fn lookup_status(&self, id: &str) -> &StatusInfo {
        match self.find_status(id) {
            Some(status) => status,
            None => {
                log::warn!("Unknown status id '{}', falling back to '{}'", id, self.statuses[0].id);
                &self.statuses[0]
            }
        }
    }

    /// Status for `id`, or `None` on a miss
    pub fn find_status(&self, id: &str) -> Option<&StatusInfo> {
        self.statuses.iter().find(|s| s.id == id)
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), RegistryError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
