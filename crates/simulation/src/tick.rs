//! The computed result of the latest simulation tick.
//!
//! The tick scheduler fills a [`TickSnapshot`] once per tick; every reader in
//! the same frame sees the same snapshot.

use std::collections::BTreeMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::definitions::ResourceKey;
use crate::grid::TileXy;

/// Why a building produced nothing this tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotProducingReason {
    NotEnoughWorkers,
    StorageFull,
    NotEnoughResources,
    TurnedOff,
    Other(String),
}

impl fmt::Display for NotProducingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotProducingReason::NotEnoughWorkers => f.write_str("Not enough workers"),
            NotProducingReason::StorageFull => f.write_str("Storage full"),
            NotProducingReason::NotEnoughResources => f.write_str("Not enough resources"),
            NotProducingReason::TurnedOff => f.write_str("Turned off"),
            NotProducingReason::Other(reason) => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerCategory {
    Worker,
    Power,
    Science,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ElectrificationStatus {
    #[default]
    NotActive,
    NoPower,
    Active,
}

/// Per-tile resource flow with multiplier and capacity adjustments applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingIo {
    pub input: BTreeMap<ResourceKey, f64>,
    pub output: BTreeMap<ResourceKey, f64>,
}

impl BuildingIo {
    pub fn with_input(mut self, resource: ResourceKey, amount: f64) -> Self {
        self.input.insert(resource, amount);
        self
    }

    pub fn with_output(mut self, resource: ResourceKey, amount: f64) -> Self {
        self.output.insert(resource, amount);
        self
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TickSnapshot {
    /// Monotonic tick number the snapshot was computed for.
    pub tick: u64,
    pub not_producing_reasons: BTreeMap<TileXy, NotProducingReason>,
    pub workers_assignment: BTreeMap<TileXy, u32>,
    /// Reverse index: tiles holding each resource.
    pub resources_by_xy: BTreeMap<ResourceKey, Vec<TileXy>>,
    pub workers_used: BTreeMap<WorkerCategory, u32>,
    pub building_io: BTreeMap<TileXy, BuildingIo>,
    pub electrification: BTreeMap<TileXy, ElectrificationStatus>,
}

impl TickSnapshot {
    pub fn not_producing_reason(&self, xy: TileXy) -> Option<&NotProducingReason> {
        self.not_producing_reasons.get(&xy)
    }

    pub fn is_producing(&self, xy: TileXy) -> bool {
        !self.not_producing_reasons.contains_key(&xy)
    }

    pub fn workers_assigned(&self, xy: TileXy) -> u32 {
        self.workers_assignment.get(&xy).copied().unwrap_or(0)
    }

    pub fn workers_used(&self, category: WorkerCategory) -> u32 {
        self.workers_used.get(&category).copied().unwrap_or(0)
    }

    pub fn tiles_holding(&self, resource: &ResourceKey) -> &[TileXy] {
        self.resources_by_xy
            .get(resource)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn building_io(&self, xy: TileXy) -> Option<&BuildingIo> {
        self.building_io.get(&xy)
    }

    pub fn electrification_status(&self, xy: TileXy) -> ElectrificationStatus {
        self.electrification.get(&xy).copied().unwrap_or_default()
    }
}
