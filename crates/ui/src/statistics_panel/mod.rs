//! Statistics panel for a single building.
//!
//! Three read-only tabs over the current tick snapshot:
//! - Resources: colony-wide output and input per tradeable resource, with a
//!   theoretical/actual toggle
//! - Buildings: every explored building with status, level, transport fuel
//!   and workers
//! - Transportation: every job in flight and the share of workers spent on
//!   hauling
//!
//! The window also carries a colour picker for the inspected building type.
//! Row models are built by plain functions over [`StatisticsView`], so they
//! can be tested without a window.

pub mod building_tab;
pub mod camera;
pub mod color_control;
pub mod formatting;
mod palette;
pub mod resources_tab;
pub mod sfx_sink;
pub mod transportation_tab;
pub mod types;
mod ui_system;

use bevy::prelude::*;

pub use camera::{CameraControl, LookAtTile};
pub use sfx_sink::SfxSink;
pub use types::{OpenStatisticsPanel, StatisticsPanelState, StatisticsTab, StatisticsView};
pub use ui_system::{
    open_statistics_panel, show_statistics_panel, show_statistics_window, statistics_panel_ui,
    PanelOutcome,
};

/// Plugin that registers the statistics panel.
pub struct StatisticsPanelPlugin;

impl Plugin for StatisticsPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StatisticsPanelState>()
            .add_event::<OpenStatisticsPanel>()
            .add_event::<LookAtTile>()
            .add_systems(Update, (open_statistics_panel, statistics_panel_ui).chain());
    }
}
