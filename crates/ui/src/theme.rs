use bevy_egui::{egui, EguiContexts};

pub fn apply_colony_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    apply_colony_style(ctx);
}

/// Earthy dark palette with rounded windows.
pub fn apply_colony_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(38, 34, 30);
    let inactive = egui::Color32::from_rgb(58, 52, 44);
    let hover = egui::Color32::from_rgb(84, 74, 58);
    let active = egui::Color32::from_rgb(196, 148, 72);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(46, 41, 36);
    style.visuals.hyperlink_color = active;

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    // egui 0.31 takes u8 radii
    let rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}
