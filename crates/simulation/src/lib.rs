//! Read-only simulation state consumed by the colony UI.
//!
//! The tick scheduler, production rules, and logistics engine live elsewhere;
//! this crate defines the resources they publish each tick and registers
//! them with the Bevy app.

use bevy::prelude::*;

pub mod building_colors;
pub mod buildings;
pub mod config;
pub mod definitions;
pub mod features;
pub mod grid;
pub mod localization;
pub mod sfx;
pub mod tick;
pub mod transportation;
pub mod unlocks;

#[cfg(any(test, feature = "test_harness"))]
pub mod test_harness;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let definitions = definitions::Definitions::embedded();
        info!(
            "SimulationPlugin: loaded {} building and {} resource definitions",
            definitions.buildings.len(),
            definitions.resources.len()
        );

        app.insert_resource(definitions)
            .init_resource::<grid::TileMap>()
            .init_resource::<transportation::Transportation>()
            .init_resource::<tick::TickSnapshot>()
            .init_resource::<features::GameFeatures>()
            .init_resource::<unlocks::UnlockedResources>()
            .init_resource::<building_colors::BuildingColors>()
            .init_resource::<localization::LocalizationState>()
            .init_resource::<localization::ActiveCollator>()
            .add_event::<sfx::PlaySfxEvent>();
    }
}
