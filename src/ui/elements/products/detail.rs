// src/ui/elements/products/detail.rs
use bevy_egui::egui;

use crate::marketplace::events::{RequestSaveProduct, SaveMode};
use crate::marketplace::resources::{ProductDirectory, ReferenceData};
use crate::ui::common;
use crate::ui::state::{AdminWindowState, DeleteKind, ProductFormBuffer, Screen};

use super::super::shell::ProductWriters;
use super::form::product_form_body;

pub fn show_product_detail(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &ProductDirectory,
    reference: &ReferenceData,
    writers: &mut ProductWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Product");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Products;
            state.product_edit = false;
        }
    });
    ui.separator();

    if directory.detail_loading {
        common::loading_row(ui, "product");
        return;
    }

    let Some(detail) = &directory.detail else {
        ui.label("No product loaded.");
        return;
    };

    if state.product_edit {
        egui::ScrollArea::vertical().show(ui, |ui| {
            product_form_body(ui, &mut state.product_form, reference);
            common::validation_messages(ui, &state.product_form.errors);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if state.submitting {
                    ui.spinner();
                    ui.label("Saving...");
                } else {
                    if ui.button("Save").clicked() && state.product_form.validate() {
                        writers.save.write(RequestSaveProduct {
                            payload: state.product_form.to_payload(),
                            mode: SaveMode::Update,
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        // Discard unsaved edits: re-seed from the last-fetched
                        // server values.
                        state.product_form = ProductFormBuffer::from_detail(detail, reference);
                        state.product_edit = false;
                    }
                }
            });
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        common::readonly_row(ui, "Name", &detail.name);
        common::readonly_row(ui, "Category", &detail.category_name);
        common::readonly_row(ui, "Brand", &detail.brand_name);
        common::readonly_row(ui, "Store", &detail.store_name);
        common::readonly_row(ui, "Description", &detail.product_description);
        common::readonly_row(ui, "Views", &detail.views.to_string());
        common::readonly_row(ui, "Active", if detail.is_active { "yes" } else { "no" });

        if !detail.product_types.is_empty() {
            ui.separator();
            ui.strong("Attribute dimensions");
            for dimension in &detail.product_types {
                let options = dimension
                    .options
                    .iter()
                    .map(|o| o.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                common::readonly_row(ui, &dimension.name, &options);
            }
        }

        if !detail.product_prices.is_empty() {
            ui.separator();
            ui.strong("Prices & inventory");
            for cell in &detail.product_prices {
                let label = if cell.dim2_label.is_empty() {
                    cell.dim1_label.clone()
                } else {
                    format!("{} / {}", cell.dim1_label, cell.dim2_label)
                };
                common::readonly_row(
                    ui,
                    &label,
                    &format!("{:.2} ({} in stock)", cell.price, cell.inventory),
                );
            }
        }

        if !detail.product_images.is_empty() {
            ui.separator();
            ui.strong("Images");
            for image in &detail.product_images {
                ui.horizontal(|ui| {
                    ui.label(&image.url);
                    if ui.button("Open").clicked() {
                        if let Err(e) = open::that(&image.url) {
                            bevy::log::warn!("Failed to open '{}' in browser: {}", image.url, e);
                        }
                    }
                });
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                state.product_form = ProductFormBuffer::from_detail(detail, reference);
                state.product_edit = true;
            }
            if ui.button("Delete").clicked() {
                state.confirm_delete(
                    format!("product '{}'", detail.name),
                    DeleteKind::Product {
                        id: detail.id.clone(),
                    },
                );
            }
        });
    });
}
