// src/ui/elements/popups/settings_popup.rs
use bevy::log::warn;
use bevy_egui::egui;

use crate::settings::io::save_settings_to_file;
use crate::settings::{AppSettings, FpsSetting};
use crate::ui::state::AdminWindowState;

pub fn show_settings_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    settings: &mut AppSettings,
) {
    if !state.show_settings_popup {
        return;
    }

    let mut popup_open = state.show_settings_popup;
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Frame rate cap");
                for (value, label) in [
                    (FpsSetting::Thirty, "30"),
                    (FpsSetting::Sixty, "60"),
                    (FpsSetting::ScreenHz, "Auto"),
                ] {
                    if ui
                        .selectable_label(settings.fps_setting == value, label)
                        .clicked()
                    {
                        settings.fps_setting = value;
                        changed = true;
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Rows per page");
                let response = ui.add(egui::DragValue::new(&mut settings.page_size).range(5..=100));
                if response.changed() {
                    changed = true;
                }
            });
        });

    if changed {
        if let Err(e) = save_settings_to_file(settings) {
            warn!("Settings: failed to save: {}", e);
        }
    }

    state.show_settings_popup = popup_open;
}
