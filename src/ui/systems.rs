// src/ui/systems.rs
use bevy::prelude::*;
use std::any;

use crate::marketplace::events::OperationFeedback;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::UiFeedbackState;

/// Bridge for results produced on the tokio runtime: a background task
/// attaches the finished event to a marker entity on the main thread, and
/// [`forward_events`] turns it into a regular event next frame.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("UnknownEvent")
            .to_string();
    }

    for (entity, send_event) in query.iter() {
        debug!("Forwarding '{}': {:?}", *event_type_name, send_event.event);
        writer.write(send_event.event.clone());
        commands.entity(entity).remove::<SendEvent<E>>();
        commands.entity(entity).despawn();
    }
}

/// Collects feedback events into the single status strip, preferring the
/// first success message or the last error of the frame.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<OperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        if !event.is_error {
            break;
        }
    }
    if let Some((message, is_error)) = last_message {
        if is_error {
            warn!("UI Feedback (Error): {}", message);
        } else {
            info!("UI Feedback: {}", message);
        }
        ui_feedback_state.last_message = message;
        ui_feedback_state.is_error = is_error;
    }
}

/// Clears the feedback strip when the operator moves to another section, so
/// a stale message never describes the previous screen.
pub fn clear_feedback_on_screen_change(
    state: Res<AdminWindowState>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
    mut previous_section: Local<Option<Screen>>,
) {
    let section = state.screen.section();
    if *previous_section != Some(section) {
        if previous_section.is_some() {
            ui_feedback_state.last_message.clear();
            ui_feedback_state.is_error = false;
        }
        *previous_section = Some(section);
    }
}
