//! 2D view of the colony: camera, one sprite per explored building, and
//! click-to-inspect.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use simulation::building_colors::BuildingColors;
use simulation::config::TILE_SIZE;
use simulation::grid::{TileMap, TileXy};
use simulation::sfx::PlaySfxEvent;
use ui::statistics_panel::{LookAtTile, OpenStatisticsPanel};

use crate::demo::OFFICE_XY;

const FOG_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);

#[derive(Component)]
pub struct WorldCamera;

/// Sprite standing in for the building on a tile.
#[derive(Component)]
pub struct BuildingSprite(pub TileXy);

pub fn spawn_camera(mut commands: Commands) {
    let focus = OFFICE_XY.to_world();
    commands.spawn((
        Camera2d,
        WorldCamera,
        Transform::from_xyz(focus.x, focus.y, 999.0),
    ));
}

fn sprite_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

/// Respawns tile sprites whenever the tile map changes.
pub fn sync_building_sprites(
    mut commands: Commands,
    tiles: Res<TileMap>,
    colors: Res<BuildingColors>,
    existing: Query<Entity, With<BuildingSprite>>,
) {
    if !tiles.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let size = Vec2::splat(TILE_SIZE * 0.9);
    for (xy, tile) in tiles.iter() {
        let Some(building) = &tile.building else {
            continue;
        };
        let color = if tile.explored {
            sprite_color(colors.color(&building.building_type))
        } else {
            FOG_COLOR
        };
        let pos = xy.to_world();
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.0),
            BuildingSprite(xy),
        ));
    }
}

/// Applies colour edits from the statistics panel to existing sprites.
pub fn recolor_building_sprites(
    tiles: Res<TileMap>,
    colors: Res<BuildingColors>,
    mut sprites: Query<(&BuildingSprite, &mut Sprite)>,
) {
    if !colors.is_changed() {
        return;
    }
    for (BuildingSprite(xy), mut sprite) in &mut sprites {
        let Some(tile) = tiles.get(*xy) else {
            continue;
        };
        if let (true, Some(building)) = (tile.explored, &tile.building) {
            sprite.color = sprite_color(colors.color(&building.building_type));
        }
    }
}

/// Centres the camera on tiles requested by the panel.
pub fn apply_look_at(
    mut requests: EventReader<LookAtTile>,
    mut camera: Query<&mut Transform, With<WorldCamera>>,
) {
    let Some(LookAtTile(xy)) = requests.read().last().copied() else {
        return;
    };
    let target = xy.to_world();
    for mut transform in &mut camera {
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}

/// Left click on an explored building opens its statistics.
pub fn pick_building(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    tiles: Res<TileMap>,
    mut contexts: EguiContexts,
    mut open: EventWriter<OpenStatisticsPanel>,
) {
    if !mouse.just_pressed(MouseButton::Left) || contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let xy = TileXy::from_world(world);
    let explored_building = tiles
        .get(xy)
        .is_some_and(|tile| tile.explored && tile.building.is_some());
    if explored_building {
        open.send(OpenStatisticsPanel { xy });
    }
}

/// Audio assets are not bundled; requests are only traced.
pub fn log_sfx_requests(mut requests: EventReader<PlaySfxEvent>) {
    for request in requests.read() {
        debug!(
            "Sfx: {:?} at volume {:.2}",
            request.sfx, request.volume_scale
        );
    }
}
