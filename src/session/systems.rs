// src/session/systems.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::types::{Credentials, PasswordChange, ProfileUpdate, RegisterPayload};
use crate::marketplace::events::{
    OperationFeedback, RequestLoadProducts, RequestLoadServiceCategories, RequestLoadStoreChoices,
};
use crate::marketplace::resources::ApiHandle;
use crate::settings::AppSettings;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::systems::SendEvent;

use super::io;
use super::{
    AuthSession, LoginCompleted, PasswordChangeCompleted, ProfileUpdateCompleted,
    RegisterCompleted, RequestChangePassword, RequestLogin, RequestLogout, RequestRegister,
    RequestUpdateProfile,
};

/// Restores a persisted session at startup; a restored token lands the
/// operator directly on the product list.
pub fn restore_session(
    mut session: ResMut<AuthSession>,
    api: Res<ApiHandle>,
    settings: Res<AppSettings>,
    mut state: ResMut<AdminWindowState>,
    mut load_products: EventWriter<RequestLoadProducts>,
    mut load_categories: EventWriter<RequestLoadServiceCategories>,
    mut load_store_choices: EventWriter<RequestLoadStoreChoices>,
) {
    let persisted = io::load_session_from_file();
    session.user = persisted.state.user;
    session.token = persisted.state.token;

    if session.signed_in() {
        api.0.set_token(session.token.clone());
        state.screen = Screen::Products;
        load_products.write(RequestLoadProducts {
            page_number: 1,
            page_size: settings.page_size,
        });
        load_categories.write(RequestLoadServiceCategories);
        load_store_choices.write(RequestLoadStoreChoices);
        info!(
            "Session: resumed as '{}'.",
            session.user.as_ref().map(|u| u.name.as_str()).unwrap_or("?")
        );
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_auth_requests(
    mut login_events: EventReader<RequestLogin>,
    mut register_events: EventReader<RequestRegister>,
    mut logout_events: EventReader<RequestLogout>,
    mut profile_events: EventReader<RequestUpdateProfile>,
    mut password_events: EventReader<RequestChangePassword>,
    mut session: ResMut<AuthSession>,
    mut state: ResMut<AdminWindowState>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback: EventWriter<OperationFeedback>,
    mut commands: Commands,
) {
    for ev in login_events.read() {
        state.auth_busy = true;
        let api = api.0.clone();
        let credentials = Credentials {
            email_or_phone: ev.email_or_phone.clone(),
            password: ev.password.clone(),
        };
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.login(&credentials).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<LoginCompleted> {
                        event: LoginCompleted { result },
                    });
            })
            .await;
        });
    }

    for ev in register_events.read() {
        state.auth_busy = true;
        let api = api.0.clone();
        let payload = RegisterPayload {
            email: ev.email.clone(),
            password: ev.password.clone(),
            name: ev.name.clone(),
            phone: ev.phone.clone(),
        };
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.register(&payload).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<RegisterCompleted> {
                        event: RegisterCompleted { result },
                    });
            })
            .await;
        });
    }

    for _ in logout_events.read() {
        info!("Session: signing out.");
        session.user = None;
        session.token = None;
        api.0.set_token(None);
        io::delete_session_file();
        io::forget_token();
        // Back to the login screen with every buffer cleared.
        *state = AdminWindowState::default();
    }

    for ev in profile_events.read() {
        let Some(user) = session.user.clone() else {
            feedback.write(OperationFeedback::error("No signed-in user to update."));
            continue;
        };
        state.auth_busy = true;
        let api = api.0.clone();
        let payload = ProfileUpdate {
            id: user.id,
            email: ev.email.clone(),
            name: ev.name.clone(),
            phone_number: ev.phone_number.clone(),
        };
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.update_profile(&payload).await.map(|()| payload.clone());
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ProfileUpdateCompleted> {
                        event: ProfileUpdateCompleted { result },
                    });
            })
            .await;
        });
    }

    for ev in password_events.read() {
        let Some(user) = session.user.clone() else {
            feedback.write(OperationFeedback::error("No signed-in user to update."));
            continue;
        };
        state.auth_busy = true;
        let api = api.0.clone();
        let payload = PasswordChange {
            id: user.id,
            old_password: ev.old_password.clone(),
            new_password: ev.new_password.clone(),
        };
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.change_password(&payload).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<PasswordChangeCompleted> {
                        event: PasswordChangeCompleted { result },
                    });
            })
            .await;
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_auth_results(
    mut login_done: EventReader<LoginCompleted>,
    mut register_done: EventReader<RegisterCompleted>,
    mut profile_done: EventReader<ProfileUpdateCompleted>,
    mut password_done: EventReader<PasswordChangeCompleted>,
    mut session: ResMut<AuthSession>,
    mut state: ResMut<AdminWindowState>,
    api: Res<ApiHandle>,
    settings: Res<AppSettings>,
    mut feedback: EventWriter<OperationFeedback>,
    mut load_products: EventWriter<RequestLoadProducts>,
    mut load_categories: EventWriter<RequestLoadServiceCategories>,
    mut load_store_choices: EventWriter<RequestLoadStoreChoices>,
) {
    for ev in login_done.read() {
        state.auth_busy = false;
        match &ev.result {
            Ok(success) => {
                session.user = Some(success.user.clone());
                session.token = Some(success.access_token.clone());
                api.0.set_token(session.token.clone());
                if let Err(e) = io::save_session_to_file(&session) {
                    warn!("Session: failed to persist session: {}", e);
                }
                io::remember_token(&success.access_token);

                state.login_form = Default::default();
                state.screen = Screen::Products;
                load_products.write(RequestLoadProducts {
                    page_number: 1,
                    page_size: settings.page_size,
                });
                load_categories.write(RequestLoadServiceCategories);
                load_store_choices.write(RequestLoadStoreChoices);
                feedback.write(OperationFeedback::info(format!(
                    "Signed in as {}.",
                    success.user.name
                )));
            }
            Err(e) => {
                // Shown inline in the login form rather than the strip.
                state.login_form.error = Some(e.to_string());
            }
        }
    }

    for ev in register_done.read() {
        state.auth_busy = false;
        match &ev.result {
            Ok(()) => {
                state.register_form = Default::default();
                state.screen = Screen::Login;
                feedback.write(OperationFeedback::info(
                    "Account created. Sign in to continue.",
                ));
            }
            Err(e) => {
                state.register_form.error = Some(e.to_string());
            }
        }
    }

    for ev in profile_done.read() {
        state.auth_busy = false;
        match &ev.result {
            Ok(update) => {
                if let Some(user) = session.user.as_mut() {
                    user.name = update.name.clone();
                    user.email = update.email.clone();
                    user.phone_number = update.phone_number.clone();
                }
                if let Err(e) = io::save_session_to_file(&session) {
                    warn!("Session: failed to persist session: {}", e);
                }
                feedback.write(OperationFeedback::info("Profile updated."));
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Profile update failed: {e}"
                )));
            }
        }
    }

    for ev in password_done.read() {
        state.auth_busy = false;
        match &ev.result {
            Ok(()) => {
                state.profile_form.old_password.clear();
                state.profile_form.new_password.clear();
                feedback.write(OperationFeedback::info("Password changed."));
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Password change failed: {e}"
                )));
            }
        }
    }
}
