// src/ui/elements/stores/list.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::marketplace::events::{RequestLoadStoreDetail, RequestLoadStores};
use crate::marketplace::resources::StoreDirectory;
use crate::settings::AppSettings;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::StoreWriters;

pub fn show_store_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &StoreDirectory,
    settings: &AppSettings,
    writers: &mut StoreWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Stores");
        if ui.button("Add store").clicked() {
            state.store_form = Default::default();
            state.screen = Screen::StoreAdd;
        }
        if ui.button("Reload").clicked() {
            let page_number = directory.page.as_ref().map(|p| p.page_index).unwrap_or(1);
            writers.load.write(RequestLoadStores {
                page_number,
                page_size: settings.page_size,
            });
        }
    });
    ui.separator();

    if directory.loading {
        common::loading_row(ui, "stores");
        return;
    }

    let Some(page) = &directory.page else {
        ui.label("No stores loaded yet.");
        return;
    };

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Hotline", "Business type", "Province", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for store in &page.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&store.name);
                    });
                    row.col(|ui| {
                        ui.label(&store.hotline);
                    });
                    row.col(|ui| {
                        ui.label(&store.business_type);
                    });
                    row.col(|ui| {
                        ui.label(&store.business_address_province);
                    });
                    row.col(|ui| {
                        if ui.button("Open").clicked() {
                            state.screen = Screen::StoreDetail;
                            state.store_edit = false;
                            writers.load_detail.write(RequestLoadStoreDetail {
                                id: store.id.clone(),
                            });
                        }
                    });
                });
            }
        });

    ui.separator();
    if let Some(page_number) = common::pagination_bar(ui, page) {
        writers.load.write(RequestLoadStores {
            page_number,
            page_size: settings.page_size,
        });
    }
}
