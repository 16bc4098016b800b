//! Statistics window systems.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::building_colors::BuildingColors;
use simulation::buildings::BuildingKey;
use simulation::features::GameFeature;
use simulation::sfx::{PlaySfxEvent, SfxEvent};

use super::building_tab::{build_building_rows, render_building_tab};
use super::camera::{CameraControl, LookAtTile};
use super::color_control::render_color_control;
use super::resources_tab::{build_resource_rows, render_resources_tab, ResourceFlowCache};
use super::sfx_sink::SfxSink;
use super::transportation_tab::{build_transportation_view, render_transportation_tab};
use super::types::{
    OpenStatisticsPanel, StatisticsPanelState, StatisticsSources, StatisticsTab, StatisticsView,
};

/// What happened in the window this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelOutcome {
    pub toggled_theoretical: bool,
    /// The inspected building type's display colour was edited or reset.
    pub recolored: bool,
    pub closed: bool,
}

/// Opens (or re-targets) the panel. The latest request of the frame wins.
pub fn open_statistics_panel(
    mut events: EventReader<OpenStatisticsPanel>,
    mut state: ResMut<StatisticsPanelState>,
) {
    if let Some(event) = events.read().last() {
        debug!("Statistics: opening panel for {}", event.xy);
        state.open(event.xy);
    }
}

/// Draws the statistics window for `building_type` and applies tab and
/// toggle changes to `state`.
pub fn show_statistics_window(
    ctx: &egui::Context,
    state: &mut StatisticsPanelState,
    building_type: &BuildingKey,
    view: &StatisticsView,
    colors: &mut BuildingColors,
    camera: &mut dyn CameraControl,
    flow_cache: &mut ResourceFlowCache,
) -> PanelOutcome {
    let loc = view.localization;
    let building_name = loc.building_name(building_type, view.definitions);
    let title = format!("{} - {}", building_name, loc.t("ui.statistics.title"));

    let mut outcome = PanelOutcome::default();
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("statistics_panel"))
        .open(&mut open)
        .default_width(460.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in StatisticsTab::ALL {
                    if ui
                        .selectable_label(state.tab == tab, loc.t(tab.label_key()))
                        .clicked()
                    {
                        state.tab = tab;
                    }
                }
            });
            ui.separator();

            match state.tab {
                StatisticsTab::Resources => {
                    let flows = flow_cache.get_or_compute(view, state.show_theoretical_value);
                    let rows = build_resource_rows(view, flows);
                    if render_resources_tab(ui, &rows, state.show_theoretical_value, loc) {
                        state.toggle_theoretical_value();
                        outcome.toggled_theoretical = true;
                    }
                }
                StatisticsTab::Buildings => {
                    let rows = build_building_rows(view);
                    let show_electrification =
                        view.features.has_feature(GameFeature::Electricity);
                    render_building_tab(ui, &rows, show_electrification, loc, camera);
                }
                StatisticsTab::Transportation => {
                    let transport = build_transportation_view(view);
                    render_transportation_tab(ui, &transport, loc, camera);
                }
            }

            ui.add_space(4.0);
            ui.separator();
            outcome.recolored = render_color_control(ui, building_type, colors, loc);
        });

    outcome.closed = !open;
    outcome
}

/// One frame of the panel: closes it when the target tile lost its building,
/// otherwise draws the window and applies the outcome to `state`.
///
/// `stale` reports that the snapshot or tile map changed since the last
/// frame. It is recorded in `flow_cache` whichever tab is shown.
#[allow(clippy::too_many_arguments)]
pub fn show_statistics_panel(
    ctx: &egui::Context,
    state: &mut StatisticsPanelState,
    view: &StatisticsView,
    colors: &mut BuildingColors,
    camera: &mut dyn CameraControl,
    sfx: &mut dyn SfxSink,
    flow_cache: &mut ResourceFlowCache,
    stale: bool,
) -> PanelOutcome {
    let Some(target) = state.target else {
        return PanelOutcome::default();
    };
    if stale {
        flow_cache.mark_stale();
    }

    let Some(building) = view.tiles.building(target) else {
        debug!("Statistics: no building at {target}, closing panel");
        state.close();
        flow_cache.invalidate();
        return PanelOutcome {
            closed: true,
            ..default()
        };
    };

    let outcome = show_statistics_window(
        ctx,
        state,
        &building.building_type,
        view,
        colors,
        camera,
        flow_cache,
    );

    if outcome.toggled_theoretical {
        sfx.play(PlaySfxEvent::new(SfxEvent::ButtonClick));
    }
    if outcome.closed {
        debug!("Statistics: panel closed");
        state.close();
        flow_cache.invalidate();
    }
    outcome
}

/// Displays the statistics window while a target is set.
pub fn statistics_panel_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<StatisticsPanelState>,
    sources: StatisticsSources,
    mut colors: ResMut<BuildingColors>,
    mut look_at: EventWriter<LookAtTile>,
    mut sfx: EventWriter<PlaySfxEvent>,
    mut flow_cache: Local<ResourceFlowCache>,
) {
    if state.target.is_none() {
        return;
    }

    let view = sources.view();
    let stale = sources.snapshot.is_changed() || sources.tiles.is_changed();
    let outcome = show_statistics_panel(
        contexts.ctx_mut(),
        &mut state,
        &view,
        colors.bypass_change_detection(),
        &mut look_at,
        &mut sfx,
        &mut flow_cache,
        stale,
    );

    // Sprites recolor on change detection, so only flag real edits.
    if outcome.recolored {
        debug!("Statistics: building colour changed");
        colors.set_changed();
    }
}
