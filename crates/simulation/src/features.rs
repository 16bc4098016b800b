use std::collections::BTreeSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Game mechanics that become available as the session progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameFeature {
    Electricity,
}

/// Features enabled for the current session.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameFeatures {
    pub enabled: BTreeSet<GameFeature>,
}

impl GameFeatures {
    pub fn has_feature(&self, feature: GameFeature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn enable(&mut self, feature: GameFeature) {
        self.enabled.insert(feature);
    }
}
