//! Panel state, events, and the row models each tab renders.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use simulation::definitions::{Definitions, ResourceKey};
use simulation::features::GameFeatures;
use simulation::grid::{TileMap, TileXy};
use simulation::localization::{ActiveCollator, Collator, LocalizationState};
use simulation::tick::{NotProducingReason, TickSnapshot};
use simulation::transportation::Transportation;
use simulation::unlocks::UnlockedResources;

// =============================================================================
// Tabs and panel state
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatisticsTab {
    #[default]
    Resources,
    Buildings,
    Transportation,
}

impl StatisticsTab {
    pub const ALL: [StatisticsTab; 3] = [
        StatisticsTab::Resources,
        StatisticsTab::Buildings,
        StatisticsTab::Transportation,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            StatisticsTab::Resources => "ui.statistics.resources",
            StatisticsTab::Buildings => "ui.statistics.buildings",
            StatisticsTab::Transportation => "ui.statistics.transportation",
        }
    }
}

/// Which building the panel is open for, plus display-only toggles.
/// Everything except `target` resets whenever the panel is (re)opened.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StatisticsPanelState {
    pub target: Option<TileXy>,
    pub tab: StatisticsTab,
    pub show_theoretical_value: bool,
}

impl Default for StatisticsPanelState {
    fn default() -> Self {
        Self {
            target: None,
            tab: StatisticsTab::default(),
            show_theoretical_value: true,
        }
    }
}

impl StatisticsPanelState {
    pub fn open(&mut self, xy: TileXy) {
        *self = Self {
            target: Some(xy),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn toggle_theoretical_value(&mut self) {
        self.show_theoretical_value = !self.show_theoretical_value;
    }
}

/// Request to open the statistics panel for the building at `xy`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenStatisticsPanel {
    pub xy: TileXy,
}

// =============================================================================
// Read-only view over the simulation
// =============================================================================

/// Borrowed view of everything the panel reads in one frame.
#[derive(Clone, Copy)]
pub struct StatisticsView<'a> {
    pub tiles: &'a TileMap,
    pub transportation: &'a Transportation,
    pub snapshot: &'a TickSnapshot,
    pub definitions: &'a Definitions,
    pub features: &'a GameFeatures,
    pub unlocked: &'a UnlockedResources,
    pub localization: &'a LocalizationState,
    pub collator: &'a dyn Collator,
}

impl<'a> StatisticsView<'a> {
    /// Build a view from the resources registered by `SimulationPlugin`.
    pub fn from_world(world: &'a World) -> Self {
        Self {
            tiles: world.resource::<TileMap>(),
            transportation: world.resource::<Transportation>(),
            snapshot: world.resource::<TickSnapshot>(),
            definitions: world.resource::<Definitions>(),
            features: world.resource::<GameFeatures>(),
            unlocked: world.resource::<UnlockedResources>(),
            localization: world.resource::<LocalizationState>(),
            collator: world.resource::<ActiveCollator>().0.as_ref(),
        }
    }

    pub fn with_collator(self, collator: &'a dyn Collator) -> Self {
        Self { collator, ..self }
    }
}

/// System parameter bundle backing a [`StatisticsView`].
#[derive(SystemParam)]
pub struct StatisticsSources<'w> {
    pub tiles: Res<'w, TileMap>,
    pub transportation: Res<'w, Transportation>,
    pub snapshot: Res<'w, TickSnapshot>,
    pub definitions: Res<'w, Definitions>,
    pub features: Res<'w, GameFeatures>,
    pub unlocked: Res<'w, UnlockedResources>,
    pub localization: Res<'w, LocalizationState>,
    pub collator: Res<'w, ActiveCollator>,
}

impl StatisticsSources<'_> {
    pub fn view(&self) -> StatisticsView<'_> {
        StatisticsView {
            tiles: &self.tiles,
            transportation: &self.transportation,
            snapshot: &self.snapshot,
            definitions: &self.definitions,
            features: &self.features,
            unlocked: &self.unlocked,
            localization: &self.localization,
            collator: self.collator.0.as_ref(),
        }
    }
}

// =============================================================================
// Row models
// =============================================================================

/// Status icon of a building row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildingStatusIcon {
    Operational,
    UnderConstruction,
    StorageFull,
    Blocked(NotProducingReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRow {
    pub xy: TileXy,
    pub name: String,
    pub status: BuildingStatusIcon,
    /// `None` when electricity is not enabled for the session.
    pub electrified: Option<bool>,
    pub level: u32,
    pub transport_fuel: f64,
    pub workers: u32,
    pub short_staffed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportationRow {
    pub id: u64,
    pub xy: TileXy,
    /// Set on the first row of each destination group only.
    pub building_name: Option<String>,
    pub has_enough_fuel: bool,
    pub resource_name: String,
    pub amount: f64,
    pub current_fuel: f64,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportationView {
    pub rows: Vec<TransportationRow>,
    pub total_fuel: f64,
    /// Fraction of `Worker` usage spent on transportation; `None` when no
    /// workers were used this tick.
    pub worker_share: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow {
    pub resource: ResourceKey,
    pub name: String,
    pub stored: f64,
    pub output: f64,
    pub input: f64,
    /// Consumption exceeds production.
    pub deficit: bool,
}
