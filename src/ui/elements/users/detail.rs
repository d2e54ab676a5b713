// src/ui/elements/users/detail.rs
use bevy_egui::egui;

use crate::marketplace::resources::UserDirectory;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

pub fn show_user_detail(ui: &mut egui::Ui, state: &mut AdminWindowState, directory: &UserDirectory) {
    ui.horizontal(|ui| {
        ui.heading("User");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Users;
        }
    });
    ui.separator();

    if directory.detail_loading {
        common::loading_row(ui, "user");
        return;
    }

    let Some(user) = &directory.detail else {
        ui.label("No user loaded.");
        return;
    };

    common::readonly_row(ui, "Name", &user.name);
    common::readonly_row(ui, "Email", &user.email);
    common::readonly_row(ui, "Phone", &user.phone_number);
}
