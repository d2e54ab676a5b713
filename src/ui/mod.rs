// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod common;
pub mod elements;
pub mod state;
pub mod systems;
pub mod validation;

use elements::shell::admin_console_ui;
use state::AdminWindowState;
use systems::{clear_feedback_on_screen_change, handle_ui_feedback};

/// Last transient status/error message, shown in the feedback strip.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the admin console UI.
pub struct AdminUiPlugin;

impl Plugin for AdminUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<AdminWindowState>()
            // Clear-then-handle: a message written during a navigation frame
            // must survive the section change that produced it.
            .add_systems(
                Update,
                (clear_feedback_on_screen_change, handle_ui_feedback).chain(),
            )
            .add_systems(EguiContextPass, admin_console_ui);

        info!("AdminUiPlugin initialized.");
    }
}
