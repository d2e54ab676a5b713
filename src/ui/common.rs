// src/ui/common.rs
//! Small shared widgets used across the entity screens.

use bevy_egui::egui;

use crate::api::types::{IdName, Page};
use crate::ui::UiFeedbackState;

/// Spinner plus label shown while a request for the current screen is in
/// flight.
pub fn loading_row(ui: &mut egui::Ui, what: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(format!("Loading {what}..."));
    });
}

/// The transient status/error strip under the top panel.
pub fn feedback_strip(ui: &mut egui::Ui, feedback: &UiFeedbackState) {
    if feedback.last_message.is_empty() {
        return;
    }
    let color = if feedback.is_error {
        egui::Color32::RED
    } else {
        ui.style().visuals.text_color()
    };
    ui.colored_label(color, &feedback.last_message);
    ui.separator();
}

/// Inline list of validation messages above a form's buttons.
pub fn validation_messages(ui: &mut egui::Ui, errors: &[String]) {
    for error in errors {
        ui.colored_label(egui::Color32::RED, error);
    }
}

/// Prev/next pagination controls driven by the server's envelope flags.
/// Returns the page number to fetch when the operator clicked either button.
pub fn pagination_bar<T>(ui: &mut egui::Ui, page: &Page<T>) -> Option<u32> {
    let mut requested = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page.previous, egui::Button::new("< Prev"))
            .clicked()
        {
            requested = Some(page.page_index.saturating_sub(1).max(1));
        }
        ui.label(format!(
            "Page {} of {} ({} items)",
            page.page_index, page.total_pages_count, page.total_items_count
        ));
        if ui.add_enabled(page.next, egui::Button::new("Next >")).clicked() {
            requested = Some(page.page_index + 1);
        }
    });
    requested
}

/// Label/value pair on detail screens.
pub fn readonly_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.strong(format!("{label}:"));
        if value.is_empty() {
            ui.weak("—");
        } else {
            ui.label(value);
        }
    });
}

/// Single-line text input with a label.
pub fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(220.0));
    });
}

/// Dropdown over id/name choices, storing the selected id.
pub fn choice_field(ui: &mut egui::Ui, label: &str, choices: &[IdName], selected_id: &mut String) {
    let selected_name = choices
        .iter()
        .find(|c| c.id == *selected_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("Select {label}"));
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(label)
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for choice in choices {
                    ui.selectable_value(selected_id, choice.id.clone(), &choice.name);
                }
            });
    });
}

/// A URL field with upload/open actions next to it. Returns `true` when the
/// operator asked to pick a file for this field.
pub fn image_url_field(ui: &mut egui::Ui, label: &str, url: &mut String) -> bool {
    let mut upload_clicked = false;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(url).desired_width(260.0));
        if ui.button("Upload...").clicked() {
            upload_clicked = true;
        }
        if !url.is_empty() && ui.button("Open").clicked() {
            if let Err(e) = open::that(url.as_str()) {
                bevy::log::warn!("Failed to open '{}' in browser: {}", url, e);
            }
        }
    });
    upload_clicked
}
