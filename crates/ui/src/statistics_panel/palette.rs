use bevy_egui::egui;

pub const COLOR_GREEN: egui::Color32 = egui::Color32::from_rgb(80, 220, 80);
pub const COLOR_ORANGE: egui::Color32 = egui::Color32::from_rgb(240, 160, 40);
pub const COLOR_RED: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);
pub const COLOR_GREY: egui::Color32 = egui::Color32::from_rgb(140, 140, 140);
