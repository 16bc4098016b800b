use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod statistics_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_colony_theme)
            .add_plugins(statistics_panel::StatisticsPanelPlugin);
    }
}
