// src/ui/elements/stores/form.rs
//! Store form. Image fields hold hosted URLs; the Upload buttons open a
//! native file picker and post the file to the image endpoint.

use bevy_egui::egui;

use crate::marketplace::events::{ImageTarget, RequestSaveStore, RequestUploadImage, SaveMode};
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen, StoreFormBuffer};

use super::super::shell::{SessionWriters, StoreWriters};

pub fn show_store_add(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    writers: &mut StoreWriters,
    session_writers: &mut SessionWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Add store");
        if ui.button("Back to list").clicked() {
            state.screen = Screen::Stores;
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        store_form_body(ui, &mut state.store_form, session_writers);
        common::validation_messages(ui, &state.store_form.errors);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if state.submitting {
                ui.spinner();
                ui.label("Saving...");
            } else if ui.button("Create store").clicked() && state.store_form.validate() {
                writers.save.write(RequestSaveStore {
                    payload: state.store_form.store.clone(),
                    mode: SaveMode::Create,
                });
            }
        });
    });
}

/// Shared between the add screen and the detail screen's edit mode.
pub fn store_form_body(
    ui: &mut egui::Ui,
    form: &mut StoreFormBuffer,
    session_writers: &mut SessionWriters,
) {
    let store = &mut form.store;
    common::text_field(ui, "Store name", &mut store.name);
    common::text_field(ui, "Hotline", &mut store.hotline);
    common::text_field(ui, "Business type", &mut store.business_type);

    ui.separator();
    ui.strong("Business address");
    common::text_field(ui, "Province", &mut store.business_address_province);
    common::text_field(ui, "District", &mut store.business_address_district);
    common::text_field(ui, "Ward", &mut store.business_address_ward);
    common::text_field(ui, "Street", &mut store.business_address_street);

    ui.separator();
    ui.strong("Tax & registration");
    common::text_field(ui, "Fax email", &mut store.fax_email);
    common::text_field(ui, "Fax code", &mut store.fax_code);

    ui.separator();
    ui.strong("Images");
    upload_field(ui, "Logo", &mut store.logo_url, ImageTarget::StoreLogo, session_writers);
    upload_field(ui, "Banner", &mut store.banner_url, ImageTarget::StoreBanner, session_writers);
    upload_field(
        ui,
        "Identity card (front)",
        &mut store.front_identity_card_url,
        ImageTarget::StoreFrontIdentityCard,
        session_writers,
    );
    upload_field(
        ui,
        "Identity card (back)",
        &mut store.back_identity_card_url,
        ImageTarget::StoreBackIdentityCard,
        session_writers,
    );
}

fn upload_field(
    ui: &mut egui::Ui,
    label: &str,
    url: &mut String,
    target: ImageTarget,
    session_writers: &mut SessionWriters,
) {
    if common::image_url_field(ui, label, url) {
        // Modal native dialog; fine on the UI thread, the upload itself runs
        // in the background.
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        {
            session_writers
                .upload
                .write(RequestUploadImage { target, path });
        }
    }
}
