// src/ui/elements/services/detail.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::api::types::ServicePayload;
use crate::marketplace::events::{RequestSaveService, SaveMode};
use crate::marketplace::resources::{ReferenceData, ServiceDirectory};
use crate::ui::common;
use crate::ui::state::{AdminWindowState, DeleteKind, Screen};
use crate::ui::validation;

use super::super::shell::ServiceWriters;

pub fn show_service_detail(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &ServiceDirectory,
    reference: &ReferenceData,
    writers: &mut ServiceWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Service");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Services;
            state.service_edit = false;
        }
    });
    ui.separator();

    if directory.detail_loading {
        common::loading_row(ui, "service");
        return;
    }

    let Some(service) = &directory.detail else {
        ui.label("No service loaded.");
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        if state.service_edit {
            edit_overview(ui, state, service, reference, writers);
        } else {
            show_overview(ui, state, service, reference);
        }

        ui.separator();
        detail_rows_table(ui, state, service);
        ui.separator();
        step_rows_table(ui, state, service);
    });
}

fn show_overview(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    service: &ServicePayload,
    reference: &ReferenceData,
) {
    common::readonly_row(ui, "Name", &service.name);
    common::readonly_row(ui, "Description", &service.description);
    let category = reference
        .service_categories
        .iter()
        .find(|c| c.id == service.service_category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| service.service_category_id.clone());
    common::readonly_row(ui, "Category", &category);
    let store_name = ReferenceData::name_for_id(&reference.store_choices, &service.store_id)
        .unwrap_or(service.store_id.as_str());
    common::readonly_row(ui, "Store", store_name);
    common::readonly_row(ui, "Estimated time", &service.estimated_time);
    common::readonly_row(ui, "Active", if service.status { "yes" } else { "no" });

    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            state.service_form = service.clone();
            state.service_form_errors.clear();
            state.service_edit = true;
        }
        if ui.button("Delete").clicked() {
            if let Some(id) = &service.id {
                state.confirm_delete(
                    format!("service '{}'", service.name),
                    DeleteKind::Service { id: id.clone() },
                );
            }
        }
    });
}

fn edit_overview(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    service: &ServicePayload,
    reference: &ReferenceData,
    writers: &mut ServiceWriters,
) {
    common::text_field(ui, "Name", &mut state.service_form.name);
    ui.horizontal(|ui| {
        ui.label("Description");
        ui.add(egui::TextEdit::multiline(&mut state.service_form.description).desired_rows(2));
    });
    common::choice_field(
        ui,
        "Store",
        &reference.store_choices,
        &mut state.service_form.store_id,
    );
    common::text_field(ui, "Estimated time", &mut state.service_form.estimated_time);
    ui.checkbox(&mut state.service_form.status, "Active");

    common::validation_messages(ui, &state.service_form_errors);
    ui.horizontal(|ui| {
        if state.submitting {
            ui.spinner();
            ui.label("Saving...");
        } else {
            if ui.button("Save").clicked() {
                let mut errors = Vec::new();
                validation::require("Service name", &state.service_form.name, &mut errors);
                state.service_form_errors = errors;
                if state.service_form_errors.is_empty() {
                    writers.save.write(RequestSaveService {
                        payload: state.service_form.clone(),
                        mode: SaveMode::Update,
                    });
                }
            }
            if ui.button("Cancel").clicked() {
                // Discard unsaved edits in favor of the last-fetched values.
                state.service_form = service.clone();
                state.service_edit = false;
            }
        }
    });
}

fn detail_rows_table(ui: &mut egui::Ui, state: &mut AdminWindowState, service: &ServicePayload) {
    ui.strong("Weight-band pricing");
    if service.pet_service_details.is_empty() {
        ui.weak("No detail rows.");
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .id_salt("service_detail_rows")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Name", "Pet", "Weight range", "Amount", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row_data in &service.pet_service_details {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&row_data.name);
                    });
                    row.col(|ui| {
                        ui.label(if row_data.pet_type { "Dog" } else { "Cat" });
                    });
                    row.col(|ui| {
                        ui.label(format!(
                            "{:.1}–{:.1} kg",
                            row_data.pet_weight_min, row_data.pet_weight_max
                        ));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", row_data.amount));
                    });
                    row.col(|ui| {
                        if let (Some(service_id), Some(detail_id)) = (&service.id, &row_data.id) {
                            if ui.button("Delete").clicked() {
                                state.confirm_delete(
                                    format!("detail row '{}'", row_data.name),
                                    DeleteKind::ServiceDetailRow {
                                        service_id: service_id.clone(),
                                        detail_id: detail_id.clone(),
                                    },
                                );
                            }
                        }
                    });
                });
            }
        });
}

fn step_rows_table(ui: &mut egui::Ui, state: &mut AdminWindowState, service: &ServicePayload) {
    ui.strong("Steps");
    if service.pet_service_steps.is_empty() {
        ui.weak("No steps.");
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    TableBuilder::new(ui)
        .id_salt("service_step_rows")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(60.0))
        .header(row_height, |mut header| {
            for title in ["Priority", "Name", "Description", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            let mut steps: Vec<_> = service.pet_service_steps.iter().collect();
            steps.sort_by_key(|s| s.priority);
            for step in steps {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(step.priority.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&step.name);
                    });
                    row.col(|ui| {
                        ui.label(&step.description);
                    });
                    row.col(|ui| {
                        if let (Some(service_id), Some(step_id)) = (&service.id, &step.id) {
                            if ui.button("Delete").clicked() {
                                state.confirm_delete(
                                    format!("step '{}'", step.name),
                                    DeleteKind::ServiceStepRow {
                                        service_id: service_id.clone(),
                                        step_id: step_id.clone(),
                                    },
                                );
                            }
                        }
                    });
                });
            }
        });
}
