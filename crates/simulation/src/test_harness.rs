//! # TestColony: headless test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `SimulationPlugin` and
//! offers a fluent builder for populating the simulation snapshot, so tests
//! in this crate and downstream crates can describe a colony in a few lines.

use bevy::app::App;
use bevy::prelude::*;

use crate::buildings::{BuildingData, BuildingKey, BuildingStatus};
use crate::definitions::ResourceKey;
use crate::features::{GameFeature, GameFeatures};
use crate::grid::{Tile, TileMap, TileXy};
use crate::localization::LocalizationState;
use crate::tick::{BuildingIo, ElectrificationStatus, NotProducingReason, TickSnapshot, WorkerCategory};
use crate::transportation::{Transportation, TransportationJob};
use crate::unlocks::UnlockedResources;
use crate::SimulationPlugin;

pub struct TestColony {
    app: App,
}

impl Default for TestColony {
    fn default() -> Self {
        Self::new()
    }
}

impl TestColony {
    /// An empty colony: no tiles, no jobs, default definitions.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Tiles and buildings
    // -----------------------------------------------------------------------

    /// Explored tile with a completed building.
    pub fn with_building(self, x: i32, y: i32, building_type: &str, level: u32) -> Self {
        self.with_building_status(x, y, building_type, level, BuildingStatus::Completed)
    }

    pub fn with_building_status(
        mut self,
        x: i32,
        y: i32,
        building_type: &str,
        level: u32,
        status: BuildingStatus,
    ) -> Self {
        let building = BuildingData::new(BuildingKey::new(building_type), level, status);
        self.tiles_mut().insert(
            TileXy::new(x, y),
            Tile {
                explored: true,
                building: Some(building),
            },
        );
        self
    }

    /// Unexplored tile that nevertheless carries a building.
    pub fn with_unexplored_building(mut self, x: i32, y: i32, building_type: &str) -> Self {
        let building = BuildingData::completed(BuildingKey::new(building_type), 1);
        self.tiles_mut().insert(
            TileXy::new(x, y),
            Tile {
                explored: false,
                building: Some(building),
            },
        );
        self
    }

    pub fn with_empty_tile(mut self, x: i32, y: i32) -> Self {
        self.tiles_mut().insert(
            TileXy::new(x, y),
            Tile {
                explored: true,
                building: None,
            },
        );
        self
    }

    /// Store `amount` of `resource` in the building at (x, y) and record the
    /// tile in the snapshot's reverse index.
    pub fn with_stored(mut self, x: i32, y: i32, resource: &str, amount: f64) -> Self {
        let xy = TileXy::new(x, y);
        let key = ResourceKey::new(resource);
        if let Some(building) = self
            .tiles_mut()
            .tiles
            .get_mut(&xy)
            .and_then(|tile| tile.building.as_mut())
        {
            building.resources.insert(key.clone(), amount);
        }
        {
            let mut snapshot = self.snapshot_mut();
            let holders = snapshot.resources_by_xy.entry(key).or_default();
            if !holders.contains(&xy) {
                holders.push(xy);
            }
        }
        self
    }

    // -----------------------------------------------------------------------
    // Tick snapshot
    // -----------------------------------------------------------------------

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.snapshot_mut().tick = tick;
        self
    }

    pub fn with_io(mut self, x: i32, y: i32, io: BuildingIo) -> Self {
        self.snapshot_mut().building_io.insert(TileXy::new(x, y), io);
        self
    }

    pub fn with_output(self, x: i32, y: i32, resource: &str, amount: f64) -> Self {
        self.with_flow(x, y, resource, amount, false)
    }

    pub fn with_input(self, x: i32, y: i32, resource: &str, amount: f64) -> Self {
        self.with_flow(x, y, resource, amount, true)
    }

    fn with_flow(mut self, x: i32, y: i32, resource: &str, amount: f64, input: bool) -> Self {
        {
            let mut snapshot = self.snapshot_mut();
            let io = snapshot.building_io.entry(TileXy::new(x, y)).or_default();
            let side = if input { &mut io.input } else { &mut io.output };
            side.insert(ResourceKey::new(resource), amount);
        }
        self
    }

    pub fn with_not_producing(mut self, x: i32, y: i32, reason: NotProducingReason) -> Self {
        self.snapshot_mut()
            .not_producing_reasons
            .insert(TileXy::new(x, y), reason);
        self
    }

    pub fn with_workers(mut self, x: i32, y: i32, workers: u32) -> Self {
        self.snapshot_mut()
            .workers_assignment
            .insert(TileXy::new(x, y), workers);
        self
    }

    pub fn with_workers_used(mut self, category: WorkerCategory, workers: u32) -> Self {
        self.snapshot_mut().workers_used.insert(category, workers);
        self
    }

    pub fn with_electrification(mut self, x: i32, y: i32, status: ElectrificationStatus) -> Self {
        self.snapshot_mut()
            .electrification
            .insert(TileXy::new(x, y), status);
        self
    }

    // -----------------------------------------------------------------------
    // Transportation, features, unlocks, locale
    // -----------------------------------------------------------------------

    pub fn with_job(mut self, job: TransportationJob) -> Self {
        self.app
            .world_mut()
            .resource_mut::<Transportation>()
            .push(job);
        self
    }

    pub fn with_feature(mut self, feature: GameFeature) -> Self {
        self.app
            .world_mut()
            .resource_mut::<GameFeatures>()
            .enable(feature);
        self
    }

    pub fn with_unlocked(mut self, resources: &[&str]) -> Self {
        {
            let mut unlocked = self.app.world_mut().resource_mut::<UnlockedResources>();
            for resource in resources {
                unlocked.unlock(ResourceKey::new(*resource));
            }
        }
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.app
            .world_mut()
            .resource_mut::<LocalizationState>()
            .set_locale(locale);
        self
    }

    // -----------------------------------------------------------------------
    // Running and queries
    // -----------------------------------------------------------------------

    /// Run `n` app updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn tiles(&self) -> &TileMap {
        self.resource::<TileMap>()
    }

    pub fn snapshot(&self) -> &TickSnapshot {
        self.resource::<TickSnapshot>()
    }

    fn tiles_mut(&mut self) -> Mut<'_, TileMap> {
        self.app.world_mut().resource_mut::<TileMap>()
    }

    fn snapshot_mut(&mut self) -> Mut<'_, TickSnapshot> {
        self.app.world_mut().resource_mut::<TickSnapshot>()
    }
}

/// A job delivering `amount` of `resource` to (x, y), burning `fuel` workers.
pub fn transport_job(
    id: u64,
    to: (i32, i32),
    resource: &str,
    amount: f64,
    fuel: f64,
) -> TransportationJob {
    TransportationJob {
        id,
        from: TileXy::new(0, 0),
        to: TileXy::new(to.0, to.1),
        resource: ResourceKey::new(resource),
        amount,
        fuel: ResourceKey::new("Worker"),
        fuel_amount: fuel,
        current_fuel_amount: fuel,
        has_enough_fuel: true,
        ticks_spent: 0,
        ticks_required: 10,
    }
}
