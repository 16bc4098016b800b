//! Display colour picker for the inspected building type.

use bevy_egui::egui;

use simulation::building_colors::BuildingColors;
use simulation::buildings::BuildingKey;
use simulation::localization::LocalizationState;

/// Colour edit button plus a reset button. Returns `true` when the colour
/// table changed.
pub fn render_color_control(
    ui: &mut egui::Ui,
    building_type: &BuildingKey,
    colors: &mut BuildingColors,
    loc: &LocalizationState,
) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(loc.t("ui.statistics.building_color"));

        let mut rgb = colors.color(building_type);
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            colors.set(building_type.clone(), rgb);
            changed = true;
        }

        let reset = ui.add_enabled(
            colors.is_custom(building_type),
            egui::Button::new(loc.t("ui.statistics.reset_color")),
        );
        if reset.clicked() {
            colors.reset(building_type);
            changed = true;
        }
    });

    changed
}
