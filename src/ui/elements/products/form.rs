// src/ui/elements/products/form.rs
//! Product form: basic fields, the dimension editor, and the derived
//! price/inventory grid.

use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::marketplace::events::{RequestSaveProduct, SaveMode};
use crate::marketplace::resources::ReferenceData;
use crate::pricing::{self, AttributeDimension, OptionValue, MAX_DIMENSIONS};
use crate::ui::common;
use crate::ui::state::{AdminWindowState, ProductFormBuffer, Screen};

use super::super::shell::ProductWriters;

pub fn show_product_add(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    reference: &ReferenceData,
    writers: &mut ProductWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Add product");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Products;
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        product_form_body(ui, &mut state.product_form, reference);

        common::validation_messages(ui, &state.product_form.errors);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if state.submitting {
                ui.spinner();
                ui.label("Saving...");
            } else if ui.button("Create product").clicked() && state.product_form.validate() {
                writers.save.write(RequestSaveProduct {
                    payload: state.product_form.to_payload(),
                    mode: SaveMode::Create,
                });
            }
        });
    });
}

/// Shared between the add screen and the detail screen's edit mode.
pub fn product_form_body(
    ui: &mut egui::Ui,
    form: &mut ProductFormBuffer,
    reference: &ReferenceData,
) {
    common::text_field(ui, "Product name", &mut form.name);
    if form.id.is_none() {
        common::text_field(ui, "Product code", &mut form.product_code);
    }
    common::choice_field(ui, "Category", &reference.product_categories, &mut form.category_id);
    common::choice_field(ui, "Brand", &reference.brands, &mut form.brand_id);
    common::choice_field(ui, "Store", &reference.store_choices, &mut form.store_id);
    ui.horizontal(|ui| {
        ui.label("Description");
        ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(2));
    });
    ui.checkbox(&mut form.is_active, "Active");

    ui.separator();
    dimension_editor(ui, form);

    // Keep the grid's row set consistent with whatever the editor just did;
    // values for surviving keys are carried over.
    pricing::sync_price_grid(&form.dimensions, &mut form.price_grid);

    if !form.price_grid.is_empty() {
        ui.separator();
        price_grid(ui, form);
    }
}

fn dimension_editor(ui: &mut egui::Ui, form: &mut ProductFormBuffer) {
    ui.strong("Attribute dimensions");
    let mut remove_dimension = None;

    for (dim_index, dimension) in form.dimensions.iter_mut().enumerate() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Dimension {}", dim_index + 1));
                ui.add(
                    egui::TextEdit::singleline(&mut dimension.name)
                        .hint_text("e.g. Size")
                        .desired_width(140.0),
                );
                if ui.button("Remove dimension").clicked() {
                    remove_dimension = Some(dim_index);
                }
            });

            let mut remove_option = None;
            for (opt_index, option) in dimension.options.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.add_space(16.0);
                    ui.add(
                        egui::TextEdit::singleline(&mut option.name)
                            .hint_text("option")
                            .desired_width(120.0),
                    );
                    if ui.small_button("✖").clicked() {
                        remove_option = Some(opt_index);
                    }
                });
            }
            if let Some(opt_index) = remove_option {
                dimension.options.remove(opt_index);
            }
            if ui.button("Add option").clicked() {
                dimension.options.push(OptionValue::default());
            }
        });
    }

    if let Some(dim_index) = remove_dimension {
        form.dimensions.remove(dim_index);
    }

    let at_cap = form.dimensions.len() >= MAX_DIMENSIONS;
    if ui
        .add_enabled(!at_cap, egui::Button::new("Add dimension"))
        .clicked()
    {
        form.dimensions.push(AttributeDimension::default());
    }
    if at_cap {
        ui.small("Products support at most two attribute dimensions.");
    }
}

fn price_grid(ui: &mut egui::Ui, form: &mut ProductFormBuffer) {
    ui.strong("Prices & inventory");

    let dim1_title = form
        .dimensions
        .first()
        .filter(|d| !d.name.trim().is_empty())
        .map(|d| d.name.clone())
        .unwrap_or_else(|| "Option".to_string());
    let dim2_title = form
        .dimensions
        .get(1)
        .filter(|d| !d.options.is_empty())
        .map(|d| {
            if d.name.trim().is_empty() {
                "Option 2".to_string()
            } else {
                d.name.clone()
            }
        });
    let has_dim2 = dim2_title.is_some();

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
    let mut table = TableBuilder::new(ui)
        .id_salt("price_grid")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(100.0));
    if has_dim2 {
        table = table.column(Column::auto().at_least(100.0));
    }
    table = table
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0));

    table
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong(&dim1_title);
            });
            if let Some(title) = &dim2_title {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
            header.col(|ui| {
                ui.strong("Price");
            });
            header.col(|ui| {
                ui.strong("Inventory");
            });
        })
        .body(|mut body| {
            for cell in &mut form.price_grid {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&cell.dim1_label);
                    });
                    if has_dim2 {
                        row.col(|ui| {
                            ui.label(&cell.dim2_label);
                        });
                    }
                    row.col(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut cell.price)
                                .range(0.0..=f64::MAX)
                                .speed(1.0),
                        );
                    });
                    row.col(|ui| {
                        ui.add(egui::DragValue::new(&mut cell.inventory).speed(1.0));
                    });
                });
            }
        });
}
