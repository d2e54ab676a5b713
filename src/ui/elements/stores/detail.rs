// src/ui/elements/stores/detail.rs
use bevy_egui::egui;

use crate::marketplace::events::{RequestSaveStore, SaveMode};
use crate::marketplace::resources::StoreDirectory;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, DeleteKind, Screen, StoreFormBuffer};

use super::super::shell::{SessionWriters, StoreWriters};
use super::form::store_form_body;

pub fn show_store_detail(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    directory: &StoreDirectory,
    writers: &mut StoreWriters,
    session_writers: &mut SessionWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Store");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Stores;
            state.store_edit = false;
        }
    });
    ui.separator();

    if directory.detail_loading {
        common::loading_row(ui, "store");
        return;
    }

    let Some(store) = &directory.detail else {
        ui.label("No store loaded.");
        return;
    };

    if state.store_edit {
        egui::ScrollArea::vertical().show(ui, |ui| {
            store_form_body(ui, &mut state.store_form, session_writers);
            common::validation_messages(ui, &state.store_form.errors);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if state.submitting {
                    ui.spinner();
                    ui.label("Saving...");
                } else {
                    if ui.button("Save").clicked() && state.store_form.validate() {
                        writers.save.write(RequestSaveStore {
                            payload: state.store_form.store.clone(),
                            mode: SaveMode::Update,
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        state.store_form = StoreFormBuffer::from_store(store);
                        state.store_edit = false;
                    }
                }
            });
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        common::readonly_row(ui, "Name", &store.name);
        common::readonly_row(ui, "Hotline", &store.hotline);
        common::readonly_row(ui, "Business type", &store.business_type);
        common::readonly_row(
            ui,
            "Address",
            &format!(
                "{}, {}, {}, {}",
                store.business_address_street,
                store.business_address_ward,
                store.business_address_district,
                store.business_address_province
            ),
        );
        common::readonly_row(ui, "Fax email", &store.fax_email);
        common::readonly_row(ui, "Fax code", &store.fax_code);

        ui.separator();
        ui.strong("Images");
        for (label, url) in [
            ("Logo", &store.logo_url),
            ("Banner", &store.banner_url),
            ("Identity card (front)", &store.front_identity_card_url),
            ("Identity card (back)", &store.back_identity_card_url),
        ] {
            ui.horizontal(|ui| {
                ui.strong(format!("{label}:"));
                if url.is_empty() {
                    ui.weak("—");
                } else {
                    ui.label(url);
                    if ui.button("Open").clicked() {
                        if let Err(e) = open::that(url) {
                            bevy::log::warn!("Failed to open '{}' in browser: {}", url, e);
                        }
                    }
                }
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                state.store_form = StoreFormBuffer::from_store(store);
                state.store_edit = true;
            }
            if ui.button("Delete").clicked() {
                state.confirm_delete(
                    format!("store '{}'", store.name),
                    DeleteKind::Store {
                        id: store.id.clone(),
                    },
                );
            }
        });
    });
}
