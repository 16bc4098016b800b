//! Criterion benchmarks for the statistics panel row models.
//!
//! Builds a fully explored 64x64 colony with random producers, stock and
//! transportation jobs, then measures each tab's per-frame work.
//!
//! Run with: cargo bench -p ui --bench statistics_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::buildings::{BuildingData, BuildingKey};
use simulation::config::{MAP_HEIGHT, MAP_WIDTH};
use simulation::definitions::{Definitions, ResourceKey};
use simulation::features::{GameFeature, GameFeatures};
use simulation::grid::{Tile, TileMap, TileXy};
use simulation::localization::{LocaleCollator, LocalizationState};
use simulation::tick::{BuildingIo, NotProducingReason, TickSnapshot, WorkerCategory};
use simulation::transportation::{Transportation, TransportationJob};
use simulation::unlocks::UnlockedResources;

use ui::statistics_panel::building_tab::build_building_rows;
use ui::statistics_panel::resources_tab::{aggregate_resource_flows, build_resource_rows};
use ui::statistics_panel::transportation_tab::build_transportation_view;
use ui::statistics_panel::StatisticsView;

const BUILDINGS: [&str; 8] = [
    "LoggingCamp",
    "StoneQuarry",
    "Aqueduct",
    "WheatFarm",
    "Bakery",
    "FishPond",
    "Dairy",
    "CoalMine",
];
const RESOURCES: [&str; 8] = [
    "Wood", "Stone", "Water", "Wheat", "Bread", "Fish", "Milk", "Coal",
];

struct BenchColony {
    tiles: TileMap,
    transportation: Transportation,
    snapshot: TickSnapshot,
    definitions: Definitions,
    features: GameFeatures,
    unlocked: UnlockedResources,
    localization: LocalizationState,
}

impl BenchColony {
    fn view<'a>(&'a self, collator: &'a LocaleCollator) -> StatisticsView<'a> {
        StatisticsView {
            tiles: &self.tiles,
            transportation: &self.transportation,
            snapshot: &self.snapshot,
            definitions: &self.definitions,
            features: &self.features,
            unlocked: &self.unlocked,
            localization: &self.localization,
            collator,
        }
    }
}

fn build_colony(seed: u64) -> BenchColony {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tiles = TileMap::default();
    let mut transportation = Transportation::default();
    let mut snapshot = TickSnapshot {
        tick: 1,
        ..Default::default()
    };
    let mut unlocked = UnlockedResources::default();
    for resource in RESOURCES {
        unlocked.unlock(ResourceKey::new(resource));
    }
    let mut features = GameFeatures::default();
    features.enable(GameFeature::Electricity);

    let mut job_id = 0;
    let mut workers_total = 0;
    for y in 0..MAP_HEIGHT {
        for x in 0..MAP_WIDTH {
            let xy = TileXy::new(x, y);
            let kind = BUILDINGS[rng.gen_range(0..BUILDINGS.len())];
            let stored = ResourceKey::new(RESOURCES[rng.gen_range(0..RESOURCES.len())]);
            let building = BuildingData::completed(BuildingKey::new(kind), rng.gen_range(1..4))
                .with_stored(stored.clone(), rng.gen_range(0.0..500.0));
            snapshot.resources_by_xy.entry(stored).or_default().push(xy);
            tiles.insert(
                xy,
                Tile {
                    explored: true,
                    building: Some(building),
                },
            );

            let io = BuildingIo::default()
                .with_input(
                    ResourceKey::new(RESOURCES[rng.gen_range(0..RESOURCES.len())]),
                    rng.gen_range(0.0..5.0),
                )
                .with_output(
                    ResourceKey::new(RESOURCES[rng.gen_range(0..RESOURCES.len())]),
                    rng.gen_range(0.0..10.0),
                );
            snapshot.building_io.insert(xy, io);

            if rng.gen_bool(0.2) {
                snapshot
                    .not_producing_reasons
                    .insert(xy, NotProducingReason::StorageFull);
            }
            let workers = rng.gen_range(0..6);
            workers_total += workers;
            snapshot.workers_assignment.insert(xy, workers);

            if rng.gen_bool(0.1) {
                job_id += 1;
                let fuel = rng.gen_range(0.5..3.0);
                transportation.push(TransportationJob {
                    id: job_id,
                    from: TileXy::new(0, 0),
                    to: xy,
                    resource: ResourceKey::new(RESOURCES[rng.gen_range(0..RESOURCES.len())]),
                    amount: rng.gen_range(1.0..20.0),
                    fuel: ResourceKey::new("Worker"),
                    fuel_amount: fuel,
                    current_fuel_amount: fuel,
                    has_enough_fuel: true,
                    ticks_spent: rng.gen_range(0..10),
                    ticks_required: 10,
                });
            }
        }
    }
    snapshot
        .workers_used
        .insert(WorkerCategory::Worker, workers_total);

    BenchColony {
        tiles,
        transportation,
        snapshot,
        definitions: Definitions::embedded(),
        features,
        unlocked,
        localization: LocalizationState::default(),
    }
}

fn bench_resources_tab(c: &mut Criterion) {
    let colony = build_colony(42);
    let collator = LocaleCollator;
    let view = colony.view(&collator);

    c.bench_function("aggregate_resource_flows_theoretical", |b| {
        b.iter(|| black_box(aggregate_resource_flows(black_box(&view), true)));
    });
    c.bench_function("aggregate_resource_flows_actual", |b| {
        b.iter(|| black_box(aggregate_resource_flows(black_box(&view), false)));
    });

    let flows = aggregate_resource_flows(&view, true);
    c.bench_function("build_resource_rows", |b| {
        b.iter(|| black_box(build_resource_rows(black_box(&view), &flows)));
    });
}

fn bench_building_tab(c: &mut Criterion) {
    let colony = build_colony(7);
    let collator = LocaleCollator;
    let view = colony.view(&collator);

    c.bench_function("build_building_rows_4096", |b| {
        b.iter(|| black_box(build_building_rows(black_box(&view))));
    });
}

fn bench_transportation_tab(c: &mut Criterion) {
    let colony = build_colony(99);
    let collator = LocaleCollator;
    let view = colony.view(&collator);

    c.bench_function("build_transportation_view", |b| {
        b.iter(|| black_box(build_transportation_view(black_box(&view))));
    });
}

criterion_group!(
    benches,
    bench_resources_tab,
    bench_building_tab,
    bench_transportation_tab
);
criterion_main!(benches);
