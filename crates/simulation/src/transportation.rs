use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::definitions::ResourceKey;
use crate::grid::TileXy;

/// An in-flight delivery of `amount` of `resource` to the tile `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationJob {
    pub id: u64,
    pub from: TileXy,
    pub to: TileXy,
    pub resource: ResourceKey,
    pub amount: f64,
    /// Resource burned as fuel while the job is in flight.
    pub fuel: ResourceKey,
    /// Fuel required per tick.
    pub fuel_amount: f64,
    /// Fuel actually allocated this tick.
    pub current_fuel_amount: f64,
    pub has_enough_fuel: bool,
    pub ticks_spent: u32,
    pub ticks_required: u32,
}

/// Transportation jobs grouped by destination tile, each group in insertion
/// order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Transportation {
    pub jobs: BTreeMap<TileXy, Vec<TransportationJob>>,
}

impl Transportation {
    /// Append a job to its destination tile's group.
    pub fn push(&mut self, job: TransportationJob) {
        self.jobs.entry(job.to).or_default().push(job);
    }

    pub fn jobs_to(&self, xy: TileXy) -> &[TransportationJob] {
        self.jobs.get(&xy).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fuel currently allocated to jobs delivering to `xy`.
    pub fn fuel_to(&self, xy: TileXy) -> f64 {
        self.jobs_to(xy)
            .iter()
            .map(|job| job.current_fuel_amount)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileXy, &[TransportationJob])> {
        self.jobs.iter().map(|(xy, jobs)| (*xy, jobs.as_slice()))
    }

    pub fn job_count(&self) -> usize {
        self.jobs.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, to: TileXy, fuel: f64) -> TransportationJob {
        TransportationJob {
            id,
            from: TileXy::new(0, 0),
            to,
            resource: ResourceKey::new("Wood"),
            amount: 10.0,
            fuel: ResourceKey::new("Worker"),
            fuel_amount: fuel,
            current_fuel_amount: fuel,
            has_enough_fuel: true,
            ticks_spent: 0,
            ticks_required: 4,
        }
    }

    #[test]
    fn test_push_groups_by_destination_in_order() {
        let mut transportation = Transportation::default();
        let a = TileXy::new(1, 1);
        let b = TileXy::new(2, 2);
        transportation.push(job(1, a, 1.0));
        transportation.push(job(2, b, 2.0));
        transportation.push(job(3, a, 3.0));

        let ids: Vec<u64> = transportation.jobs_to(a).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(transportation.job_count(), 3);
    }

    #[test]
    fn test_fuel_to_sums_current_fuel() {
        let mut transportation = Transportation::default();
        let a = TileXy::new(1, 1);
        transportation.push(job(1, a, 1.5));
        transportation.push(job(2, a, 2.5));
        assert!((transportation.fuel_to(a) - 4.0).abs() < f64::EPSILON);
        assert_eq!(transportation.fuel_to(TileXy::new(9, 9)), 0.0);
    }
}
