// src/ui/elements/shell.rs
//! Root UI system: top bar, section navigation, and screen dispatch.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::marketplace::events::{
    RequestDeleteProduct, RequestDeleteService, RequestDeleteServiceDetailRow,
    RequestDeleteServiceStepRow, RequestDeleteStore, RequestLoadProductDetail,
    RequestLoadProducts, RequestLoadServiceCategories, RequestLoadServiceDetail,
    RequestLoadServices, RequestLoadStoreChoices, RequestLoadStoreDetail, RequestLoadStores,
    RequestLoadUserDetail, RequestLoadUsers, RequestCreateUser, RequestSaveProduct,
    RequestSaveService, RequestSaveStore, RequestUploadImage,
};
use crate::marketplace::resources::{
    DraftRepository, ProductDirectory, ReferenceData, ServiceDirectory, StoreDirectory,
    UserDirectory,
};
use crate::session::{
    AuthSession, RequestChangePassword, RequestLogin, RequestLogout, RequestRegister,
    RequestUpdateProfile,
};
use crate::settings::AppSettings;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::UiFeedbackState;

use super::auth;
use super::popups;
use super::products;
use super::services;
use super::stores;
use super::users;

/// Read-only views of every directory, bundled to keep the root system's
/// parameter list within bounds.
#[derive(SystemParam)]
pub struct Directories<'w> {
    pub products: Res<'w, ProductDirectory>,
    pub stores: Res<'w, StoreDirectory>,
    pub services: Res<'w, ServiceDirectory>,
    pub users: Res<'w, UserDirectory>,
    pub reference: Res<'w, ReferenceData>,
}

#[derive(SystemParam)]
pub struct ProductWriters<'w> {
    pub load: EventWriter<'w, RequestLoadProducts>,
    pub load_detail: EventWriter<'w, RequestLoadProductDetail>,
    pub save: EventWriter<'w, RequestSaveProduct>,
}

#[derive(SystemParam)]
pub struct StoreWriters<'w> {
    pub load: EventWriter<'w, RequestLoadStores>,
    pub load_detail: EventWriter<'w, RequestLoadStoreDetail>,
    pub save: EventWriter<'w, RequestSaveStore>,
}

#[derive(SystemParam)]
pub struct ServiceWriters<'w> {
    pub load: EventWriter<'w, RequestLoadServices>,
    pub load_detail: EventWriter<'w, RequestLoadServiceDetail>,
    pub save: EventWriter<'w, RequestSaveService>,
}

#[derive(SystemParam)]
pub struct UserWriters<'w> {
    pub load: EventWriter<'w, RequestLoadUsers>,
    pub load_detail: EventWriter<'w, RequestLoadUserDetail>,
    pub create: EventWriter<'w, RequestCreateUser>,
}

/// Auth, reference-data, and upload requests.
#[derive(SystemParam)]
pub struct SessionWriters<'w> {
    pub login: EventWriter<'w, RequestLogin>,
    pub register: EventWriter<'w, RequestRegister>,
    pub logout: EventWriter<'w, RequestLogout>,
    pub update_profile: EventWriter<'w, RequestUpdateProfile>,
    pub change_password: EventWriter<'w, RequestChangePassword>,
    pub load_categories: EventWriter<'w, RequestLoadServiceCategories>,
    pub load_store_choices: EventWriter<'w, RequestLoadStoreChoices>,
    pub upload: EventWriter<'w, RequestUploadImage>,
}

/// Destructive calls dispatched by the confirmation popup.
#[derive(SystemParam)]
pub struct DeleteWriters<'w> {
    pub product: EventWriter<'w, RequestDeleteProduct>,
    pub store: EventWriter<'w, RequestDeleteStore>,
    pub service: EventWriter<'w, RequestDeleteService>,
    pub service_detail_row: EventWriter<'w, RequestDeleteServiceDetailRow>,
    pub service_step_row: EventWriter<'w, RequestDeleteServiceStepRow>,
}

#[allow(clippy::too_many_arguments)]
pub fn admin_console_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<AdminWindowState>,
    mut settings: ResMut<AppSettings>,
    session: Res<AuthSession>,
    feedback: Res<UiFeedbackState>,
    directories: Directories,
    drafts: Res<DraftRepository>,
    mut product_writers: ProductWriters,
    mut store_writers: StoreWriters,
    mut service_writers: ServiceWriters,
    mut user_writers: UserWriters,
    mut session_writers: SessionWriters,
    mut delete_writers: DeleteWriters,
) {
    let ctx = contexts.ctx_mut();
    let state = &mut *state;

    if !session.signed_in() {
        auth::show_auth_screens(ctx, state, &mut session_writers);
        return;
    }

    popups::delete_confirm_popup::show_delete_confirm_popup(ctx, state, &mut delete_writers);
    popups::settings_popup::show_settings_popup(ctx, state, &mut settings);
    auth::show_profile_popup(ctx, state, &session, &mut session_writers);

    egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Pawboard");
            ui.separator();
            ui.label("Pet marketplace admin");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Sign out").clicked() {
                    session_writers.logout.write(RequestLogout);
                }
                if ui.button("Settings").clicked() {
                    state.show_settings_popup = true;
                }
                if ui.button("Profile").clicked() {
                    if let Some(user) = &session.user {
                        state.profile_form.name = user.name.clone();
                        state.profile_form.email = user.email.clone();
                        state.profile_form.phone_number = user.phone_number.clone();
                        state.profile_form.errors.clear();
                    }
                    state.show_profile_popup = true;
                }
                if let Some(user) = &session.user {
                    ui.label(&user.name);
                }
            });
        });
    });

    egui::SidePanel::left("nav_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            nav_button(ui, state, Screen::Products, "Products", || {
                product_writers.load.write(RequestLoadProducts {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            });
            nav_button(ui, state, Screen::Stores, "Stores", || {
                store_writers.load.write(RequestLoadStores {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            });
            nav_button(ui, state, Screen::Services, "Services", || {
                service_writers.load.write(RequestLoadServices {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            });
            nav_button(ui, state, Screen::Users, "Users", || {
                user_writers.load.write(RequestLoadUsers {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        common::feedback_strip(ui, &feedback);

        match state.screen {
            Screen::Login | Screen::Register => {
                // Unreachable while signed in; the auth screens took over above.
            }
            Screen::Products => {
                products::list::show_product_list(
                    ui,
                    state,
                    &directories.products,
                    &settings,
                    &mut product_writers,
                    &mut session_writers,
                );
            }
            Screen::ProductAdd => {
                products::form::show_product_add(
                    ui,
                    state,
                    &directories.reference,
                    &mut product_writers,
                );
            }
            Screen::ProductDetail => {
                products::detail::show_product_detail(
                    ui,
                    state,
                    &directories.products,
                    &directories.reference,
                    &mut product_writers,
                );
            }
            Screen::Stores => {
                stores::list::show_store_list(
                    ui,
                    state,
                    &directories.stores,
                    &settings,
                    &mut store_writers,
                );
            }
            Screen::StoreAdd => {
                stores::form::show_store_add(ui, state, &mut store_writers, &mut session_writers);
            }
            Screen::StoreDetail => {
                stores::detail::show_store_detail(
                    ui,
                    state,
                    &directories.stores,
                    &mut store_writers,
                    &mut session_writers,
                );
            }
            Screen::Services => {
                services::list::show_service_list(
                    ui,
                    state,
                    &directories.services,
                    &directories.reference,
                    &settings,
                    &mut service_writers,
                );
            }
            Screen::ServiceAdd => {
                services::wizard::show_service_wizard(
                    ui,
                    state,
                    &directories.reference,
                    &drafts,
                    &mut service_writers,
                    &mut session_writers,
                );
            }
            Screen::ServiceDetail => {
                services::detail::show_service_detail(
                    ui,
                    state,
                    &directories.services,
                    &directories.reference,
                    &mut service_writers,
                );
            }
            Screen::Users => {
                users::list::show_user_list(
                    ui,
                    state,
                    &directories.users,
                    &settings,
                    &mut user_writers,
                );
            }
            Screen::UserAdd => {
                users::form::show_user_add(ui, state, &mut user_writers);
            }
            Screen::UserDetail => {
                users::detail::show_user_detail(ui, state, &directories.users);
            }
        }
    });
}

/// Section button; switching sections also triggers that section's load.
fn nav_button(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    target: Screen,
    label: &str,
    on_switch: impl FnOnce(),
) {
    let selected = state.screen.section() == target;
    if ui.selectable_label(selected, label).clicked() && state.screen != target {
        state.screen = target;
        on_switch();
    }
}
