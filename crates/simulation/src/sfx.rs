//! Sound effect requests.
//!
//! Systems send [`PlaySfxEvent`]; playback happens downstream in the app
//! crate. This module owns only the event types.

use bevy::prelude::*;

/// Sound effects that can be requested from any system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxEvent {
    /// UI button or toggle click.
    ButtonClick,
}

/// Request to play a sound effect this frame.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySfxEvent {
    pub sfx: SfxEvent,
    /// Volume multiplier on top of the channel volume (0.0-1.0).
    pub volume_scale: f32,
}

impl PlaySfxEvent {
    pub fn new(sfx: SfxEvent) -> Self {
        Self {
            sfx,
            volume_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_full_volume() {
        let event = PlaySfxEvent::new(SfxEvent::ButtonClick);
        assert_eq!(event.sfx, SfxEvent::ButtonClick);
        assert_eq!(event.volume_scale, 1.0);
    }
}
