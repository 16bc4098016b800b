use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::definitions::ResourceKey;

/// Key into the building definition table (e.g. `"WheatFarm"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingKey(pub String);

impl BuildingKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a building. Only `Completed` buildings count as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildingStatus {
    #[default]
    Building,
    Upgrading,
    Completed,
}

impl BuildingStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, BuildingStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingData {
    pub building_type: BuildingKey,
    pub level: u32,
    pub status: BuildingStatus,
    /// Stored amount per resource.
    #[serde(default)]
    pub resources: BTreeMap<ResourceKey, f64>,
}

impl BuildingData {
    pub fn new(building_type: BuildingKey, level: u32, status: BuildingStatus) -> Self {
        Self {
            building_type,
            level,
            status,
            resources: BTreeMap::new(),
        }
    }

    pub fn completed(building_type: BuildingKey, level: u32) -> Self {
        Self::new(building_type, level, BuildingStatus::Completed)
    }

    pub fn with_stored(mut self, resource: ResourceKey, amount: f64) -> Self {
        self.resources.insert(resource, amount);
        self
    }

    /// Stored amount of `resource`, zero when absent.
    pub fn stored(&self, resource: &ResourceKey) -> f64 {
        self.resources.get(resource).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_under_construction() {
        assert!(!BuildingStatus::default().is_completed());
        assert!(!BuildingStatus::Upgrading.is_completed());
        assert!(BuildingStatus::Completed.is_completed());
    }

    #[test]
    fn test_stored_defaults_to_zero() {
        let wood = ResourceKey::new("Wood");
        let building = BuildingData::completed(BuildingKey::new("LoggingCamp"), 2)
            .with_stored(wood.clone(), 12.5);
        assert!((building.stored(&wood) - 12.5).abs() < f64::EPSILON);
        assert_eq!(building.stored(&ResourceKey::new("Stone")), 0.0);
    }

    #[test]
    fn test_status_deserializes_from_name() {
        let status: BuildingStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, BuildingStatus::Completed);
    }
}
