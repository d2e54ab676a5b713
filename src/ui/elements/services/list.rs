// src/ui/elements/services/list.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::marketplace::events::{RequestLoadServiceDetail, RequestLoadServices};
use crate::marketplace::resources::{ReferenceData, ServiceDirectory};
use crate::settings::AppSettings;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::ServiceWriters;

pub fn show_service_list(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &ServiceDirectory,
    reference: &ReferenceData,
    settings: &AppSettings,
    writers: &mut ServiceWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Services");
        if ui.button("Add service").clicked() {
            // Fresh mount: the wizard decides restore-vs-reset on open.
            state.wizard.started = false;
            state.screen = Screen::ServiceAdd;
        }
        if ui.button("Reload").clicked() {
            let page_number = directory.page.as_ref().map(|p| p.page_index).unwrap_or(1);
            writers.load.write(RequestLoadServices {
                page_number,
                page_size: settings.page_size,
            });
        }
    });
    ui.separator();

    if directory.loading {
        common::loading_row(ui, "services");
        return;
    }

    let Some(page) = &directory.page else {
        ui.label("No services loaded yet.");
        return;
    };

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(150.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Category", "Estimated time", "Active", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for service in &page.items {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&service.name);
                    });
                    row.col(|ui| {
                        let category = reference
                            .service_categories
                            .iter()
                            .find(|c| c.id == service.service_category_id)
                            .map(|c| c.name.as_str())
                            .unwrap_or(service.service_category_id.as_str());
                        ui.label(category);
                    });
                    row.col(|ui| {
                        ui.label(&service.estimated_time);
                    });
                    row.col(|ui| {
                        ui.label(if service.status { "yes" } else { "no" });
                    });
                    row.col(|ui| {
                        if ui.button("Open").clicked() {
                            state.screen = Screen::ServiceDetail;
                            state.service_edit = false;
                            writers.load_detail.write(RequestLoadServiceDetail {
                                id: service.id.clone(),
                            });
                        }
                    });
                });
            }
        });

    ui.separator();
    if let Some(page_number) = common::pagination_bar(ui, page) {
        writers.load.write(RequestLoadServices {
            page_number,
            page_size: settings.page_size,
        });
    }
}
