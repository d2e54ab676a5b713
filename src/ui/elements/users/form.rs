// src/ui/elements/users/form.rs
use bevy_egui::egui;

use crate::marketplace::events::RequestCreateUser;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::UserWriters;

pub fn show_user_add(ui: &mut egui::Ui, state: &mut AdminWindowState, writers: &mut UserWriters) {
    ui.horizontal(|ui| {
        ui.heading("Add user");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Users;
        }
    });
    ui.separator();

    common::text_field(ui, "Name", &mut state.user_form.name);
    common::text_field(ui, "Email", &mut state.user_form.email);
    common::text_field(ui, "Phone", &mut state.user_form.phone_number);

    common::validation_messages(ui, &state.user_form.errors);
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if state.submitting {
            ui.spinner();
            ui.label("Saving...");
        } else if ui.button("Create user").clicked() && state.user_form.validate() {
            writers.create.write(RequestCreateUser {
                payload: state.user_form.to_payload(),
            });
        }
    });
}
