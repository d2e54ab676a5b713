// src/marketplace/systems/users.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::marketplace::events::{
    OperationFeedback, RequestCreateUser, RequestLoadUserDetail, RequestLoadUsers, UserCreated,
    UserDetailLoaded, UsersLoaded,
};
use crate::marketplace::resources::{ApiHandle, UserDirectory};
use crate::settings::AppSettings;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::systems::SendEvent;

pub fn handle_user_requests(
    mut load_events: EventReader<RequestLoadUsers>,
    mut detail_events: EventReader<RequestLoadUserDetail>,
    mut create_events: EventReader<RequestCreateUser>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut directory: ResMut<UserDirectory>,
    mut state: ResMut<AdminWindowState>,
    mut commands: Commands,
) {
    for ev in load_events.read() {
        directory.loading = true;
        let api = api.0.clone();
        let (page_number, page_size) = (ev.page_number, ev.page_size);
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_users(page_number, page_size).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<UsersLoaded> {
                        event: UsersLoaded { result },
                    });
            })
            .await;
        });
    }

    for ev in detail_events.read() {
        directory.detail_loading = true;
        directory.detail = None;
        let api = api.0.clone();
        let id = ev.id.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.get_user(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<UserDetailLoaded> {
                        event: UserDetailLoaded { result },
                    });
            })
            .await;
        });
    }

    for ev in create_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let payload = ev.payload.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.create_user(&payload).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<UserCreated> {
                        event: UserCreated { result },
                    });
            })
            .await;
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_user_results(
    mut loaded: EventReader<UsersLoaded>,
    mut detail_loaded: EventReader<UserDetailLoaded>,
    mut created: EventReader<UserCreated>,
    mut directory: ResMut<UserDirectory>,
    mut state: ResMut<AdminWindowState>,
    settings: Res<AppSettings>,
    mut feedback: EventWriter<OperationFeedback>,
    mut reload: EventWriter<RequestLoadUsers>,
) {
    for ev in loaded.read() {
        directory.loading = false;
        match &ev.result {
            Ok(page) => directory.page = Some(page.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load users: {e}"
                )));
            }
        }
    }

    for ev in detail_loaded.read() {
        directory.detail_loading = false;
        match &ev.result {
            Ok(user) => directory.detail = Some(user.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!("Failed to load user: {e}")));
            }
        }
    }

    for ev in created.read() {
        state.submitting = false;
        match &ev.result {
            Ok(()) => {
                feedback.write(OperationFeedback::info("User created."));
                state.user_form = Default::default();
                state.screen = Screen::Users;
                reload.write(RequestLoadUsers {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to create user: {e}"
                )));
            }
        }
    }
}
