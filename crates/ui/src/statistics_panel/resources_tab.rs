//! Resources tab: colony-wide production and consumption per resource.

use std::collections::BTreeMap;

use bevy_egui::egui;

use simulation::definitions::ResourceKey;
use simulation::localization::LocalizationState;

use super::formatting::fmt_number;
use super::palette::{COLOR_GREY, COLOR_RED};
use super::types::{ResourceRow, StatisticsView};

/// Per-resource totals summed over every building with recorded IO.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFlows {
    pub input: BTreeMap<ResourceKey, f64>,
    pub output: BTreeMap<ResourceKey, f64>,
}

impl ResourceFlows {
    pub fn input(&self, resource: &ResourceKey) -> f64 {
        self.input.get(resource).copied().unwrap_or(0.0)
    }

    pub fn output(&self, resource: &ResourceKey) -> f64 {
        self.output.get(resource).copied().unwrap_or(0.0)
    }
}

fn clamp_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Sum input and output over all tiles. With `theoretical` off, tiles that
/// did not produce this tick contribute nothing.
pub fn aggregate_resource_flows(view: &StatisticsView, theoretical: bool) -> ResourceFlows {
    let mut flows = ResourceFlows::default();

    for (xy, io) in &view.snapshot.building_io {
        if !theoretical && !view.snapshot.is_producing(*xy) {
            continue;
        }
        for (resource, amount) in &io.input {
            *flows.input.entry(resource.clone()).or_default() += clamp_amount(*amount);
        }
        for (resource, amount) in &io.output {
            *flows.output.entry(resource.clone()).or_default() += clamp_amount(*amount);
        }
    }

    flows
}

/// Amount of `resource` stored across the buildings the snapshot lists as
/// holding it.
pub fn stored_amount(view: &StatisticsView, resource: &ResourceKey) -> f64 {
    view.snapshot
        .tiles_holding(resource)
        .iter()
        .filter_map(|xy| view.tiles.building(*xy))
        .map(|building| building.stored(resource))
        .sum()
}

/// One row per unlocked resource that can be priced and stored, sorted by
/// localized name.
pub fn build_resource_rows(view: &StatisticsView, flows: &ResourceFlows) -> Vec<ResourceRow> {
    let mut rows: Vec<ResourceRow> = view
        .unlocked
        .iter()
        .filter(|key| {
            view.definitions
                .resource(key)
                .is_some_and(|def| def.is_tradeable())
        })
        .map(|key| {
            let output = flows.output(key);
            let input = flows.input(key);
            ResourceRow {
                resource: key.clone(),
                name: view
                    .localization
                    .resource_name(key, view.definitions)
                    .to_string(),
                stored: stored_amount(view, key),
                output,
                input,
                deficit: input > output,
            }
        })
        .collect();

    rows.sort_by(|a, b| view.collator.compare(&a.name, &b.name));
    rows
}

// =============================================================================
// Memoization
// =============================================================================

/// Last aggregation, reused while the tick and toggle are unchanged and no
/// source resource changed since it was computed.
#[derive(Debug, Default)]
pub struct ResourceFlowCache {
    key: Option<(u64, bool)>,
    dirty: bool,
    flows: ResourceFlows,
}

impl ResourceFlowCache {
    /// Cached flows for `(tick, theoretical)`, recomputed on a miss or after
    /// [`mark_stale`](Self::mark_stale).
    pub fn get_or_compute(&mut self, view: &StatisticsView, theoretical: bool) -> &ResourceFlows {
        let key = (view.snapshot.tick, theoretical);
        if self.dirty || self.key != Some(key) {
            self.flows = aggregate_resource_flows(view, theoretical);
            self.key = Some(key);
            self.dirty = false;
        }
        &self.flows
    }

    /// The sources changed. Sticks until the next [`get_or_compute`](Self::get_or_compute),
    /// however many frames pass without the resources tab being drawn.
    pub fn mark_stale(&mut self) {
        self.dirty = true;
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the resources table. Returns `true` when the theoretical toggle
/// was clicked this frame.
pub fn render_resources_tab(
    ui: &mut egui::Ui,
    rows: &[ResourceRow],
    show_theoretical_value: bool,
    loc: &LocalizationState,
) -> bool {
    let mut checked = show_theoretical_value;
    let toggled = ui
        .checkbox(&mut checked, loc.t("ui.statistics.show_theoretical"))
        .changed();
    ui.separator();

    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        egui::Grid::new("statistics_resources")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(loc.t("ui.statistics.resource"));
                ui.strong(loc.t("ui.statistics.amount"));
                ui.strong(loc.t("ui.statistics.output"));
                ui.strong(loc.t("ui.statistics.input"));
                ui.end_row();

                for row in rows {
                    ui.label(row.name.as_str());
                    ui.label(loc.localize_decimal(&fmt_number(row.stored)));
                    ui.label(loc.localize_decimal(&fmt_number(row.output)));

                    let input = loc.localize_decimal(&fmt_number(row.input));
                    if row.deficit {
                        ui.colored_label(COLOR_RED, input)
                            .on_hover_text(loc.t("ui.statistics.deficit"));
                    } else if row.input == 0.0 {
                        ui.colored_label(COLOR_GREY, input);
                    } else {
                        ui.label(input);
                    }
                    ui.end_row();
                }
            });
    });

    toggled
}
