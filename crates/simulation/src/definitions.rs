//! Static building and resource definition tables.
//!
//! Definitions are data-driven: the default table is parsed from the embedded
//! `assets/definitions.json`. A table that fails to parse is reported with
//! `warn!` and replaced by an empty one so the game keeps running.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::BuildingKey;
use crate::config::DEFINITIONS_JSON;

/// Key into the resource definition table (e.g. `"Wood"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(pub String);

impl ResourceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Fallback display name used when no translation exists.
    pub name: String,
    /// Whether the resource has a market price.
    #[serde(default)]
    pub can_price: bool,
    /// Whether the resource can be held in building storage.
    #[serde(default)]
    pub can_store: bool,
}

impl ResourceDefinition {
    /// Only resources that are both priceable and storable are tracked in
    /// resource statistics.
    pub fn is_tradeable(&self) -> bool {
        self.can_price && self.can_store
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDefinition {
    /// Fallback display name used when no translation exists.
    pub name: String,
}

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading a definition table.
#[derive(Debug)]
pub enum DefinitionsError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A building definition has an empty display name.
    EmptyBuildingName(String),
    /// A resource definition has an empty display name.
    EmptyResourceName(String),
}

impl fmt::Display for DefinitionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionsError::Parse(e) => write!(f, "Invalid definitions JSON: {e}"),
            DefinitionsError::EmptyBuildingName(key) => {
                write!(f, "Building definition '{key}' has an empty name")
            }
            DefinitionsError::EmptyResourceName(key) => {
                write!(f, "Resource definition '{key}' has an empty name")
            }
        }
    }
}

impl std::error::Error for DefinitionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DefinitionsError {
    fn from(e: serde_json::Error) -> Self {
        DefinitionsError::Parse(e)
    }
}

// =============================================================================
// Resource
// =============================================================================

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub buildings: BTreeMap<BuildingKey, BuildingDefinition>,
    #[serde(default)]
    pub resources: BTreeMap<ResourceKey, ResourceDefinition>,
}

impl Definitions {
    /// Parse and validate a definition table.
    pub fn from_json(json: &str) -> Result<Self, DefinitionsError> {
        let defs: Definitions = serde_json::from_str(json)?;
        defs.validate()?;
        Ok(defs)
    }

    /// The table embedded in the binary. Falls back to an empty table if the
    /// embedded data is invalid.
    pub fn embedded() -> Self {
        match Self::from_json(DEFINITIONS_JSON) {
            Ok(defs) => defs,
            Err(e) => {
                warn!("Definitions: embedded table rejected, using empty table: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), DefinitionsError> {
        if let Some((key, _)) = self.buildings.iter().find(|(_, d)| d.name.trim().is_empty()) {
            return Err(DefinitionsError::EmptyBuildingName(key.to_string()));
        }
        if let Some((key, _)) = self.resources.iter().find(|(_, d)| d.name.trim().is_empty()) {
            return Err(DefinitionsError::EmptyResourceName(key.to_string()));
        }
        Ok(())
    }

    pub fn building(&self, key: &BuildingKey) -> Option<&BuildingDefinition> {
        self.buildings.get(key)
    }

    pub fn resource(&self, key: &ResourceKey) -> Option<&ResourceDefinition> {
        self.resources.get(key)
    }
}
