//! Transportation tab: every job in flight, grouped by destination tile.

use bevy_egui::egui;

use simulation::localization::LocalizationState;
use simulation::tick::WorkerCategory;
use simulation::transportation::TransportationJob;

use super::camera::CameraControl;
use super::formatting::{fmt_number, fmt_percent, fmt_progress};
use super::palette::{COLOR_GREEN, COLOR_RED};
use super::types::{StatisticsView, TransportationRow, TransportationView};

/// Completion of a job in percent. Jobs that need no ticks are done.
pub fn job_progress_percent(job: &TransportationJob) -> f64 {
    if job.ticks_required == 0 {
        return 100.0;
    }
    100.0 * f64::from(job.ticks_spent) / f64::from(job.ticks_required)
}

/// Share of the colony's workers burnt as transportation fuel, or `None`
/// when no workers were used this tick.
pub fn transportation_share(total_fuel: f64, workers_used: u32) -> Option<f64> {
    (workers_used > 0).then(|| total_fuel / f64::from(workers_used))
}

pub fn build_transportation_view(view: &StatisticsView) -> TransportationView {
    let mut rows = Vec::with_capacity(view.transportation.job_count());
    let mut total_fuel = 0.0;

    for (xy, jobs) in view.transportation.iter() {
        let building_name = view
            .tiles
            .building(xy)
            .map(|b| {
                view.localization
                    .building_name(&b.building_type, view.definitions)
                    .to_string()
            })
            .unwrap_or_default();

        for (i, job) in jobs.iter().enumerate() {
            total_fuel += job.current_fuel_amount;
            rows.push(TransportationRow {
                id: job.id,
                xy,
                building_name: (i == 0).then(|| building_name.clone()),
                has_enough_fuel: job.has_enough_fuel,
                resource_name: view
                    .localization
                    .resource_name(&job.resource, view.definitions)
                    .to_string(),
                amount: job.amount,
                current_fuel: job.current_fuel_amount,
                progress_percent: job_progress_percent(job),
            });
        }
    }

    TransportationView {
        rows,
        total_fuel,
        worker_share: transportation_share(
            total_fuel,
            view.snapshot.workers_used(WorkerCategory::Worker),
        ),
    }
}

/// Header text for the workforce share, "N/A" when undefined.
pub fn worker_share_label(share: Option<f64>, loc: &LocalizationState) -> String {
    match share {
        Some(fraction) => loc.localize_decimal(&fmt_percent(fraction)),
        None => loc.t("ui.statistics.not_applicable").to_string(),
    }
}

pub fn render_transportation_tab(
    ui: &mut egui::Ui,
    view: &TransportationView,
    loc: &LocalizationState,
    camera: &mut dyn CameraControl,
) {
    ui.horizontal(|ui| {
        ui.label(loc.t("ui.statistics.transportation_percentage"));
        ui.strong(worker_share_label(view.worker_share, loc));
    });
    ui.separator();

    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        egui::Grid::new("statistics_transportation")
            .num_columns(6)
            .striped(true)
            .show(ui, |ui| {
                ui.label("");
                ui.strong(loc.t("ui.statistics.building"));
                ui.strong(loc.t("ui.statistics.resource"));
                ui.strong(loc.t("ui.statistics.amount"));
                ui.strong(loc.t("ui.statistics.fuel"));
                ui.strong(loc.t("ui.statistics.progress"));
                ui.end_row();

                for row in &view.rows {
                    if row.has_enough_fuel {
                        ui.colored_label(COLOR_GREEN, "●")
                            .on_hover_text(loc.t("ui.statistics.enough_fuel"));
                    } else {
                        ui.colored_label(COLOR_RED, "●")
                            .on_hover_text(loc.t("ui.statistics.not_enough_fuel"));
                    }

                    match &row.building_name {
                        Some(name) if !name.is_empty() => {
                            if ui
                                .link(name.as_str())
                                .on_hover_text(loc.t("ui.statistics.look_at"))
                                .clicked()
                            {
                                camera.look_at_tile(row.xy);
                            }
                        }
                        _ => {
                            ui.label("");
                        }
                    }

                    ui.label(row.resource_name.as_str());
                    ui.label(loc.localize_decimal(&fmt_number(row.amount)));
                    ui.label(loc.localize_decimal(&fmt_number(row.current_fuel)));
                    ui.label(fmt_progress(row.progress_percent));
                    ui.end_row();
                }
            });
    });
}
