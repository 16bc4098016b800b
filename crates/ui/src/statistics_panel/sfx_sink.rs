use bevy::prelude::*;

use simulation::sfx::PlaySfxEvent;

/// Destination for the panel's sound effect requests.
pub trait SfxSink {
    fn play(&mut self, event: PlaySfxEvent);
}

impl SfxSink for EventWriter<'_, PlaySfxEvent> {
    fn play(&mut self, event: PlaySfxEvent) {
        self.send(event);
    }
}

/// Records requests instead of playing them.
impl SfxSink for Vec<PlaySfxEvent> {
    fn play(&mut self, event: PlaySfxEvent) {
        self.push(event);
    }
}
