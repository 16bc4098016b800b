//! Buildings tab: one row per explored building with its production status.

use bevy_egui::egui;

use simulation::buildings::BuildingData;
use simulation::features::GameFeature;
use simulation::localization::LocalizationState;
use simulation::tick::{ElectrificationStatus, NotProducingReason};

use super::camera::CameraControl;
use super::formatting::fmt_number;
use super::palette::{COLOR_GREEN, COLOR_ORANGE, COLOR_RED};
use super::types::{BuildingRow, BuildingStatusIcon, StatisticsView};

/// Status shown for a building. A building that is not completed is always
/// under construction, whatever the tick recorded for it.
pub fn building_status(
    building: &BuildingData,
    reason: Option<&NotProducingReason>,
) -> BuildingStatusIcon {
    if !building.status.is_completed() {
        return BuildingStatusIcon::UnderConstruction;
    }
    match reason {
        Some(NotProducingReason::StorageFull) => BuildingStatusIcon::StorageFull,
        Some(other) => BuildingStatusIcon::Blocked(other.clone()),
        None => BuildingStatusIcon::Operational,
    }
}

/// Rows for every explored tile with a building, sorted by localized name.
pub fn build_building_rows(view: &StatisticsView) -> Vec<BuildingRow> {
    let show_electrification = view.features.has_feature(GameFeature::Electricity);

    let mut rows: Vec<BuildingRow> = view
        .tiles
        .explored_buildings()
        .map(|(xy, building)| {
            let reason = view.snapshot.not_producing_reason(xy);
            BuildingRow {
                xy,
                name: view
                    .localization
                    .building_name(&building.building_type, view.definitions)
                    .to_string(),
                status: building_status(building, reason),
                electrified: show_electrification.then(|| {
                    view.snapshot.electrification_status(xy) == ElectrificationStatus::Active
                }),
                level: building.level,
                transport_fuel: view.transportation.fuel_to(xy),
                workers: view.snapshot.workers_assigned(xy),
                short_staffed: matches!(reason, Some(NotProducingReason::NotEnoughWorkers)),
            }
        })
        .collect();

    rows.sort_by(|a, b| view.collator.compare(&a.name, &b.name));
    rows
}

fn status_glyph(
    status: &BuildingStatusIcon,
    loc: &LocalizationState,
) -> (&'static str, egui::Color32, String) {
    match status {
        BuildingStatusIcon::Operational => {
            ("✔", COLOR_GREEN, loc.t("ui.statistics.operational").to_string())
        }
        BuildingStatusIcon::UnderConstruction => (
            "⚒",
            COLOR_ORANGE,
            loc.t("ui.statistics.under_construction").to_string(),
        ),
        BuildingStatusIcon::StorageFull => {
            ("▣", COLOR_RED, loc.t("ui.statistics.storage_full").to_string())
        }
        BuildingStatusIcon::Blocked(reason) => (
            "⚠",
            COLOR_RED,
            format!("{}: {}", loc.t("ui.statistics.blocked"), reason),
        ),
    }
}

/// Renders the buildings table. Clicking a building name asks `camera` to
/// look at it.
pub fn render_building_tab(
    ui: &mut egui::Ui,
    rows: &[BuildingRow],
    show_electrification: bool,
    loc: &LocalizationState,
    camera: &mut dyn CameraControl,
) {
    let columns = if show_electrification { 6 } else { 5 };

    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        egui::Grid::new("statistics_buildings")
            .num_columns(columns)
            .striped(true)
            .show(ui, |ui| {
                ui.label("");
                if show_electrification {
                    ui.label("");
                }
                ui.strong(loc.t("ui.statistics.building"));
                ui.strong(loc.t("ui.statistics.level"));
                ui.strong(loc.t("ui.statistics.fuel"));
                ui.strong(loc.t("ui.statistics.workers"));
                ui.end_row();

                for row in rows {
                    let (glyph, color, tooltip) = status_glyph(&row.status, loc);
                    ui.colored_label(color, glyph).on_hover_text(tooltip);

                    if show_electrification {
                        if row.electrified == Some(true) {
                            ui.colored_label(COLOR_ORANGE, "⚡")
                                .on_hover_text(loc.t("ui.statistics.electrified"));
                        } else {
                            ui.label("");
                        }
                    }

                    if ui
                        .link(row.name.as_str())
                        .on_hover_text(loc.t("ui.statistics.look_at"))
                        .clicked()
                    {
                        camera.look_at_tile(row.xy);
                    }

                    ui.label(row.level.to_string());
                    ui.label(loc.localize_decimal(&fmt_number(row.transport_fuel)));

                    let workers = row.workers.to_string();
                    if row.short_staffed {
                        ui.colored_label(COLOR_RED, workers)
                            .on_hover_text(loc.t("ui.statistics.short_staffed"));
                    } else {
                        ui.label(workers);
                    }
                    ui.end_row();
                }
            });
    });
}
