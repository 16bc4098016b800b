use bevy::prelude::*;

use simulation::grid::TileXy;

/// Moves the world view. Requests are fire-and-forget.
pub trait CameraControl {
    fn look_at_tile(&mut self, xy: TileXy);
}

/// Request to centre the world camera on a tile.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtTile(pub TileXy);

impl CameraControl for EventWriter<'_, LookAtTile> {
    fn look_at_tile(&mut self, xy: TileXy) {
        debug!("Statistics: look at tile {xy}");
        self.send(LookAtTile(xy));
    }
}

/// Records requests instead of moving anything.
impl CameraControl for Vec<TileXy> {
    fn look_at_tile(&mut self, xy: TileXy) {
        self.push(xy);
    }
}
