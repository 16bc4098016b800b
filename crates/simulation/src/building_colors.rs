use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::BuildingKey;

/// Colour used for building types without a custom colour.
pub const DEFAULT_BUILDING_COLOR: [u8; 3] = [255, 255, 255];

/// Player-chosen display colour per building type. Display only; the
/// simulation never reads it.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingColors {
    pub colors: BTreeMap<BuildingKey, [u8; 3]>,
}

impl BuildingColors {
    pub fn color(&self, building_type: &BuildingKey) -> [u8; 3] {
        self.colors
            .get(building_type)
            .copied()
            .unwrap_or(DEFAULT_BUILDING_COLOR)
    }

    pub fn is_custom(&self, building_type: &BuildingKey) -> bool {
        self.colors.contains_key(building_type)
    }

    pub fn set(&mut self, building_type: BuildingKey, rgb: [u8; 3]) {
        if rgb == DEFAULT_BUILDING_COLOR {
            self.colors.remove(&building_type);
        } else {
            self.colors.insert(building_type, rgb);
        }
    }

    pub fn reset(&mut self, building_type: &BuildingKey) {
        self.colors.remove(building_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_type_uses_default() {
        let colors = BuildingColors::default();
        let key = BuildingKey::new("Bakery");
        assert_eq!(colors.color(&key), DEFAULT_BUILDING_COLOR);
        assert!(!colors.is_custom(&key));
    }

    #[test]
    fn test_set_and_reset() {
        let mut colors = BuildingColors::default();
        let key = BuildingKey::new("Bakery");
        colors.set(key.clone(), [200, 100, 50]);
        assert_eq!(colors.color(&key), [200, 100, 50]);
        assert!(colors.is_custom(&key));
        colors.reset(&key);
        assert!(!colors.is_custom(&key));
    }

    #[test]
    fn test_setting_default_clears_entry() {
        let mut colors = BuildingColors::default();
        let key = BuildingKey::new("Bakery");
        colors.set(key.clone(), [1, 2, 3]);
        colors.set(key.clone(), DEFAULT_BUILDING_COLOR);
        assert!(colors.colors.is_empty());
    }
}
