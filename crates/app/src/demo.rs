//! Static demo colony so the statistics panel has something to show.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::buildings::{BuildingData, BuildingKey, BuildingStatus};
use simulation::config::{MAP_HEIGHT, MAP_WIDTH};
use simulation::definitions::ResourceKey;
use simulation::features::{GameFeature, GameFeatures};
use simulation::grid::{Tile, TileMap, TileXy};
use simulation::tick::{
    BuildingIo, ElectrificationStatus, NotProducingReason, TickSnapshot, WorkerCategory,
};
use simulation::transportation::{Transportation, TransportationJob};
use simulation::unlocks::UnlockedResources;
use ui::statistics_panel::OpenStatisticsPanel;

pub const DEMO_SEED: u64 = 0xC01_0AE;

/// Where the statistics office sits; the panel opens here on startup.
pub const OFFICE_XY: TileXy = TileXy::new(MAP_WIDTH / 2, MAP_HEIGHT / 2);

/// Explored radius around the office, in tiles.
const EXPLORED_RADIUS: i32 = 6;

struct Producer {
    building: &'static str,
    input: &'static [(&'static str, f64)],
    output: &'static [(&'static str, f64)],
}

const PRODUCERS: &[Producer] = &[
    Producer {
        building: "LoggingCamp",
        input: &[],
        output: &[("Wood", 4.0)],
    },
    Producer {
        building: "StoneQuarry",
        input: &[],
        output: &[("Stone", 3.0)],
    },
    Producer {
        building: "Aqueduct",
        input: &[],
        output: &[("Water", 6.0)],
    },
    Producer {
        building: "WheatFarm",
        input: &[("Water", 2.0)],
        output: &[("Wheat", 5.0)],
    },
    Producer {
        building: "Bakery",
        input: &[("Wheat", 3.0), ("Water", 1.0)],
        output: &[("Bread", 2.0)],
    },
    Producer {
        building: "CoalMine",
        input: &[],
        output: &[("Coal", 2.5)],
    },
    Producer {
        building: "CoalPowerPlant",
        input: &[("Coal", 4.0)],
        output: &[("Power", 10.0)],
    },
    Producer {
        building: "Library",
        input: &[("Power", 1.0)],
        output: &[("Science", 1.0)],
    },
];

/// State the demo writes into the simulation resources.
pub struct DemoColony {
    pub tiles: TileMap,
    pub transportation: Transportation,
    pub snapshot: TickSnapshot,
}

/// Deterministic colony around [`OFFICE_XY`].
pub fn build_demo_colony(seed: u64) -> DemoColony {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tiles = TileMap::default();
    let mut transportation = Transportation::default();
    let mut snapshot = TickSnapshot {
        tick: 1,
        ..Default::default()
    };

    tiles.insert(
        OFFICE_XY,
        Tile {
            explored: true,
            building: Some(BuildingData::completed(
                BuildingKey::new("StatisticsOffice"),
                1,
            )),
        },
    );
    let warehouse_xy = TileXy::new(OFFICE_XY.x - 1, OFFICE_XY.y);
    tiles.insert(
        warehouse_xy,
        Tile {
            explored: true,
            building: Some(BuildingData::completed(BuildingKey::new("Warehouse"), 2)),
        },
    );

    let mut workers_total = 0;
    let mut job_id = 0;

    for dy in -EXPLORED_RADIUS - 2..=EXPLORED_RADIUS + 2 {
        for dx in -EXPLORED_RADIUS - 2..=EXPLORED_RADIUS + 2 {
            let xy = TileXy::new(OFFICE_XY.x + dx, OFFICE_XY.y + dy);
            if tiles.get(xy).is_some() || !rng.gen_bool(0.3) {
                continue;
            }

            let explored = dx.abs().max(dy.abs()) <= EXPLORED_RADIUS;
            let producer = &PRODUCERS[rng.gen_range(0..PRODUCERS.len())];
            let status = match rng.gen_range(0..10) {
                0 => BuildingStatus::Building,
                1 => BuildingStatus::Upgrading,
                _ => BuildingStatus::Completed,
            };
            let mut building = BuildingData::new(
                BuildingKey::new(producer.building),
                rng.gen_range(1..=3),
                status,
            );

            let mut io = BuildingIo::default();
            for (resource, amount) in producer.input {
                io = io.with_input(ResourceKey::new(*resource), amount * f64::from(building.level));
            }
            for (resource, amount) in producer.output {
                let key = ResourceKey::new(*resource);
                io = io.with_output(key.clone(), amount * f64::from(building.level));
                let stored = rng.gen_range(0.0..80.0_f64).round();
                building = building.with_stored(key.clone(), stored);
                snapshot.resources_by_xy.entry(key).or_default().push(xy);
            }
            snapshot.building_io.insert(xy, io);

            let workers = rng.gen_range(0..5);
            workers_total += workers;
            snapshot.workers_assignment.insert(xy, workers);

            match rng.gen_range(0..8) {
                0 => {
                    snapshot
                        .not_producing_reasons
                        .insert(xy, NotProducingReason::StorageFull);
                }
                1 => {
                    snapshot
                        .not_producing_reasons
                        .insert(xy, NotProducingReason::NotEnoughWorkers);
                }
                2 => {
                    snapshot
                        .not_producing_reasons
                        .insert(xy, NotProducingReason::NotEnoughResources);
                }
                _ => {}
            }

            let electrification = if rng.gen_bool(0.5) {
                ElectrificationStatus::Active
            } else {
                ElectrificationStatus::NoPower
            };
            snapshot.electrification.insert(xy, electrification);

            if explored && rng.gen_bool(0.4) {
                for _ in 0..rng.gen_range(1..=2) {
                    job_id += 1;
                    let fuel = rng.gen_range(0.5..2.0_f64).round();
                    let ticks_required = rng.gen_range(0..12);
                    transportation.push(TransportationJob {
                        id: job_id,
                        from: warehouse_xy,
                        to: xy,
                        resource: ResourceKey::new("Wood"),
                        amount: rng.gen_range(5.0..30.0_f64).round(),
                        fuel: ResourceKey::new("Worker"),
                        fuel_amount: fuel,
                        current_fuel_amount: fuel,
                        has_enough_fuel: rng.gen_bool(0.8),
                        ticks_spent: rng.gen_range(0..=ticks_required),
                        ticks_required,
                    });
                }
            }

            tiles.insert(
                xy,
                Tile {
                    explored,
                    building: Some(building),
                },
            );
        }
    }

    snapshot
        .workers_used
        .insert(WorkerCategory::Worker, workers_total);

    DemoColony {
        tiles,
        transportation,
        snapshot,
    }
}

/// Startup: publish the demo colony and open the panel on the office.
pub fn seed_demo_colony(
    mut tiles: ResMut<TileMap>,
    mut transportation: ResMut<Transportation>,
    mut snapshot: ResMut<TickSnapshot>,
    mut features: ResMut<GameFeatures>,
    mut unlocked: ResMut<UnlockedResources>,
    mut open: EventWriter<OpenStatisticsPanel>,
) {
    let demo = build_demo_colony(DEMO_SEED);
    info!(
        "Demo colony: {} tiles, {} transportation jobs",
        demo.tiles.len(),
        demo.transportation.job_count()
    );

    *tiles = demo.tiles;
    *transportation = demo.transportation;
    *snapshot = demo.snapshot;
    features.enable(GameFeature::Electricity);
    for resource in ["Bread", "Coal", "Science"] {
        unlocked.unlock(ResourceKey::new(resource));
    }

    open.send(OpenStatisticsPanel { xy: OFFICE_XY });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_is_deterministic() {
        let a = build_demo_colony(DEMO_SEED);
        let b = build_demo_colony(DEMO_SEED);
        assert_eq!(a.tiles.len(), b.tiles.len());
        assert_eq!(a.transportation.job_count(), b.transportation.job_count());
        assert_eq!(a.snapshot.building_io, b.snapshot.building_io);
    }

    #[test]
    fn test_demo_has_office_and_explored_buildings() {
        let demo = build_demo_colony(DEMO_SEED);
        let office = demo.tiles.building(OFFICE_XY).expect("office");
        assert_eq!(office.building_type.as_str(), "StatisticsOffice");
        assert!(demo.tiles.explored_buildings().count() >= 2);
    }

    #[test]
    fn test_demo_jobs_target_explored_tiles() {
        let demo = build_demo_colony(DEMO_SEED);
        for (xy, _) in demo.transportation.iter() {
            let tile = demo.tiles.get(xy).expect("job destination tile");
            assert!(tile.explored);
        }
    }

    #[test]
    fn test_demo_worker_total_matches_assignments() {
        let demo = build_demo_colony(DEMO_SEED);
        let assigned: u32 = demo.snapshot.workers_assignment.values().sum();
        assert_eq!(demo.snapshot.workers_used(WorkerCategory::Worker), assigned);
    }
}
