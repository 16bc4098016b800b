use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod demo;
mod screenshots;
mod world_view;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Colony".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((simulation::SimulationPlugin, ui::UiPlugin))
    .add_systems(
        Startup,
        (world_view::spawn_camera, demo::seed_demo_colony),
    )
    .add_systems(
        Update,
        (
            world_view::pick_building,
            world_view::apply_look_at,
            world_view::sync_building_sprites,
            world_view::recolor_building_sprites,
            world_view::log_sfx_requests,
        ),
    );

    if std::env::var("COLONY_SCREENSHOTS").is_ok() {
        app.init_resource::<screenshots::ScreenshotQueue>()
            .add_systems(Update, screenshots::drive_screenshots);
    }

    app.run();
}
