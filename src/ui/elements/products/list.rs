// src/ui/elements/products/list.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::marketplace::events::{
    RequestLoadProductDetail, RequestLoadProducts, RequestLoadStoreChoices,
};
use crate::marketplace::resources::ProductDirectory;
use crate::settings::AppSettings;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::{ProductWriters, SessionWriters};

pub fn show_product_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &ProductDirectory,
    settings: &AppSettings,
    writers: &mut ProductWriters,
    session_writers: &mut SessionWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Products");
        if ui.button("Add product").clicked() {
            state.product_form = Default::default();
            state.screen = Screen::ProductAdd;
            // Refresh the store dropdown for the form.
            session_writers.load_store_choices.write(RequestLoadStoreChoices);
        }
        if ui.button("Reload").clicked() {
            let page_number = directory.page.as_ref().map(|p| p.page_index).unwrap_or(1);
            writers.load.write(RequestLoadProducts {
                page_number,
                page_size: settings.page_size,
            });
        }
    });
    ui.separator();

    if directory.loading {
        common::loading_row(ui, "products");
        return;
    }

    let Some(page) = &directory.page else {
        ui.label("No products loaded yet.");
        return;
    };

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Code", "Brand", "Store", "Category", "Min price", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for product in &page.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&product.name);
                    });
                    row.col(|ui| {
                        ui.label(&product.product_code);
                    });
                    row.col(|ui| {
                        ui.label(&product.brand_name);
                    });
                    row.col(|ui| {
                        ui.label(&product.store_name);
                    });
                    row.col(|ui| {
                        ui.label(&product.category_name);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", product.min_prices));
                    });
                    row.col(|ui| {
                        if ui.button("Open").clicked() {
                            state.screen = Screen::ProductDetail;
                            state.product_edit = false;
                            writers.load_detail.write(RequestLoadProductDetail {
                                id: product.id.clone(),
                            });
                        }
                    });
                });
            }
        });

    ui.separator();
    if let Some(page_number) = common::pagination_bar(ui, page) {
        writers.load.write(RequestLoadProducts {
            page_number,
            page_size: settings.page_size,
        });
    }
}
