// src/ui/elements/users/list.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::marketplace::events::{RequestLoadUserDetail, RequestLoadUsers};
use crate::marketplace::resources::UserDirectory;
use crate::settings::AppSettings;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::UserWriters;

pub fn show_user_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &UserDirectory,
    settings: &AppSettings,
    writers: &mut UserWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Users");
        if ui.button("Add user").clicked() {
            state.user_form = Default::default();
            state.screen = Screen::UserAdd;
        }
        if ui.button("Reload").clicked() {
            let page_number = directory.page.as_ref().map(|p| p.page_index).unwrap_or(1);
            writers.load.write(RequestLoadUsers {
                page_number,
                page_size: settings.page_size,
            });
        }
    });
    ui.separator();

    if directory.loading {
        common::loading_row(ui, "users");
        return;
    }

    let Some(page) = &directory.page else {
        ui.label("No users loaded yet.");
        return;
    };

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Email", "Phone", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for user in &page.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&user.name);
                    });
                    row.col(|ui| {
                        ui.label(&user.email);
                    });
                    row.col(|ui| {
                        ui.label(&user.phone_number);
                    });
                    row.col(|ui| {
                        if ui.button("Open").clicked() {
                            state.screen = Screen::UserDetail;
                            writers.load_detail.write(RequestLoadUserDetail {
                                id: user.id.clone(),
                            });
                        }
                    });
                });
            }
        });

    ui.separator();
    if let Some(page_number) = common::pagination_bar(ui, page) {
        writers.load.write(RequestLoadUsers {
            page_number,
            page_size: settings.page_size,
        });
    }
}
