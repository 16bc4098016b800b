use std::collections::BTreeSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::definitions::ResourceKey;

/// Resources the player has unlocked so far.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedResources {
    pub resources: BTreeSet<ResourceKey>,
}

impl Default for UnlockedResources {
    fn default() -> Self {
        // Starter resources are always available.
        Self {
            resources: ["Wood", "Stone", "Water", "Wheat", "Worker"]
                .into_iter()
                .map(ResourceKey::new)
                .collect(),
        }
    }
}

impl UnlockedResources {
    pub fn is_unlocked(&self, resource: &ResourceKey) -> bool {
        self.resources.contains(resource)
    }

    pub fn unlock(&mut self, resource: ResourceKey) {
        self.resources.insert(resource);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceKey> {
        self.resources.iter()
    }
}
