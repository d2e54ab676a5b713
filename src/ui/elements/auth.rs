// src/ui/elements/auth.rs
//! Login/register screens (shown while signed out) and the profile popup.

use bevy_egui::egui;

use crate::session::{
    AuthSession, RequestChangePassword, RequestLogin, RequestRegister, RequestUpdateProfile,
};
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::validation;

use super::shell::SessionWriters;

pub fn show_auth_screens(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    writers: &mut SessionWriters,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Pawboard");
            ui.label("Pet marketplace admin console");
            ui.add_space(20.0);
        });
        match state.screen {
            Screen::Register => show_register(ui, state, writers),
            _ => show_login(ui, state, writers),
        }
    });
}

fn show_login(ui: &mut egui::Ui, state: &mut AdminWindowState, writers: &mut SessionWriters) {
    let mut submit = false;
    ui.vertical_centered(|ui| {
        ui.group(|ui| {
            ui.set_width(320.0);
            ui.heading("Sign in");
            ui.add_space(8.0);
            common::text_field(ui, "Email or phone", &mut state.login_form.email_or_phone);
            ui.horizontal(|ui| {
                ui.label("Password");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.login_form.password)
                        .password(true)
                        .desired_width(220.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
            });
            if let Some(error) = &state.login_form.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if state.auth_busy {
                    ui.spinner();
                    ui.label("Signing in...");
                } else {
                    if ui.button("Sign in").clicked() {
                        submit = true;
                    }
                    if ui.button("Create an account").clicked() {
                        state.screen = Screen::Register;
                        state.register_form = Default::default();
                    }
                }
            });
        });
    });

    if submit && !state.auth_busy {
        let mut errors = Vec::new();
        validation::require(
            "Email or phone",
            &state.login_form.email_or_phone,
            &mut errors,
        );
        validation::require("Password", &state.login_form.password, &mut errors);
        if let Some(error) = errors.into_iter().next() {
            state.login_form.error = Some(error);
        } else {
            state.login_form.error = None;
            writers.login.write(RequestLogin {
                email_or_phone: state.login_form.email_or_phone.clone(),
                password: state.login_form.password.clone(),
            });
        }
    }
}

fn show_register(ui: &mut egui::Ui, state: &mut AdminWindowState, writers: &mut SessionWriters) {
    let mut submit = false;
    ui.vertical_centered(|ui| {
        ui.group(|ui| {
            ui.set_width(320.0);
            ui.heading("Create account");
            ui.add_space(8.0);
            common::text_field(ui, "Name", &mut state.register_form.name);
            common::text_field(ui, "Email", &mut state.register_form.email);
            common::text_field(ui, "Phone", &mut state.register_form.phone);
            ui.horizontal(|ui| {
                ui.label("Password");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register_form.password)
                        .password(true)
                        .desired_width(220.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Confirm");
                ui.add(
                    egui::TextEdit::singleline(&mut state.register_form.confirm_password)
                        .password(true)
                        .desired_width(220.0),
                );
            });
            if let Some(error) = &state.register_form.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if state.auth_busy {
                    ui.spinner();
                    ui.label("Creating account...");
                } else {
                    if ui.button("Register").clicked() {
                        submit = true;
                    }
                    if ui.button("Back to sign in").clicked() {
                        state.screen = Screen::Login;
                    }
                }
            });
        });
    });

    if submit && !state.auth_busy && state.register_form.validate() {
        writers.register.write(RequestRegister {
            email: state.register_form.email.clone(),
            password: state.register_form.password.clone(),
            name: state.register_form.name.clone(),
            phone: state.register_form.phone.clone(),
        });
    }
}

/// Profile window: update name/email/phone, or change the password.
pub fn show_profile_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    session: &AuthSession,
    writers: &mut SessionWriters,
) {
    if !state.show_profile_popup {
        return;
    }

    let mut popup_open = state.show_profile_popup;
    let mut save_profile = false;
    let mut change_password = false;

    egui::Window::new("Profile")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            if let Some(user) = &session.user {
                ui.label(format!("Signed in as {}", user.name));
                ui.separator();
            }
            common::text_field(ui, "Name", &mut state.profile_form.name);
            common::text_field(ui, "Email", &mut state.profile_form.email);
            common::text_field(ui, "Phone", &mut state.profile_form.phone_number);
            ui.add_enabled_ui(!state.auth_busy, |ui| {
                if ui.button("Save profile").clicked() {
                    save_profile = true;
                }
            });
            ui.separator();
            ui.label("Change password");
            ui.horizontal(|ui| {
                ui.label("Current");
                ui.add(
                    egui::TextEdit::singleline(&mut state.profile_form.old_password)
                        .password(true)
                        .desired_width(180.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("New");
                ui.add(
                    egui::TextEdit::singleline(&mut state.profile_form.new_password)
                        .password(true)
                        .desired_width(180.0),
                );
            });
            common::validation_messages(ui, &state.profile_form.errors);
            ui.add_enabled_ui(!state.auth_busy, |ui| {
                if ui.button("Change password").clicked() {
                    change_password = true;
                }
            });
            if state.auth_busy {
                ui.spinner();
            }
        });

    if save_profile {
        let mut errors = Vec::new();
        validation::require("Name", &state.profile_form.name, &mut errors);
        validation::require_email("Email", &state.profile_form.email, &mut errors);
        state.profile_form.errors = errors;
        if state.profile_form.errors.is_empty() {
            writers.update_profile.write(RequestUpdateProfile {
                email: state.profile_form.email.clone(),
                name: state.profile_form.name.clone(),
                phone_number: state.profile_form.phone_number.clone(),
            });
        }
    }

    if change_password {
        let mut errors = Vec::new();
        validation::require("Current password", &state.profile_form.old_password, &mut errors);
        validation::require("New password", &state.profile_form.new_password, &mut errors);
        state.profile_form.errors = errors;
        if state.profile_form.errors.is_empty() {
            writers.change_password.write(RequestChangePassword {
                old_password: state.profile_form.old_password.clone(),
                new_password: state.profile_form.new_password.clone(),
            });
        }
    }

    state.show_profile_popup = popup_open;
}
