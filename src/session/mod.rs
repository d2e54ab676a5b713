// src/session/mod.rs
//! Authenticated session state and the auth/profile request flows.

pub mod io;
pub mod systems;

use bevy::prelude::*;

use crate::api::types::{LoginSuccess, ProfileUpdate, User};
use crate::api::ApiError;

/// Current operator session. The token is attached to every API request
/// while present; the whole struct is persisted so a restart stays signed in.
#[derive(Resource, Default, Debug, Clone)]
pub struct AuthSession {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthSession {
    pub fn signed_in(&self) -> bool {
        self.token.is_some()
    }
}

// --- Requests sent by the auth/profile screens ---

#[derive(Event, Debug, Clone)]
pub struct RequestLogin {
    pub email_or_phone: String,
    pub password: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestRegister {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLogout;

#[derive(Event, Debug, Clone)]
pub struct RequestUpdateProfile {
    pub email: String,
    pub name: String,
    pub phone_number: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestChangePassword {
    pub old_password: String,
    pub new_password: String,
}

// --- Results delivered back from background tasks ---

#[derive(Event, Debug, Clone)]
pub struct LoginCompleted {
    pub result: Result<LoginSuccess, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct RegisterCompleted {
    pub result: Result<(), ApiError>,
}

/// Carries the submitted payload so the session user can be updated without
/// a refetch.
#[derive(Event, Debug, Clone)]
pub struct ProfileUpdateCompleted {
    pub result: Result<ProfileUpdate, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct PasswordChangeCompleted {
    pub result: Result<(), ApiError>,
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AuthSession>()
            .add_event::<RequestLogin>()
            .add_event::<RequestRegister>()
            .add_event::<RequestLogout>()
            .add_event::<RequestUpdateProfile>()
            .add_event::<RequestChangePassword>()
            .add_event::<LoginCompleted>()
            .add_event::<RegisterCompleted>()
            .add_event::<ProfileUpdateCompleted>()
            .add_event::<PasswordChangeCompleted>()
            .add_systems(Startup, systems::restore_session)
            .add_systems(
                Update,
                (
                    systems::handle_auth_requests,
                    crate::ui::systems::forward_events::<LoginCompleted>,
                    crate::ui::systems::forward_events::<RegisterCompleted>,
                    crate::ui::systems::forward_events::<ProfileUpdateCompleted>,
                    crate::ui::systems::forward_events::<PasswordChangeCompleted>,
                    systems::apply_auth_results,
                )
                    .chain(),
            );

        info!("SessionPlugin initialized.");
    }
}
