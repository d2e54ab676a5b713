// src/marketplace/systems/stores.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::ApiError;
use crate::marketplace::events::{
    OperationFeedback, RequestDeleteStore, RequestLoadStoreDetail, RequestLoadStores,
    RequestSaveStore, SaveMode, StoreDeleted, StoreDetailLoaded, StoreSaved, StoresLoaded,
};
use crate::marketplace::resources::{ApiHandle, StoreDirectory};
use crate::settings::AppSettings;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::systems::SendEvent;

#[allow(clippy::too_many_arguments)]
pub fn handle_store_requests(
    mut load_events: EventReader<RequestLoadStores>,
    mut detail_events: EventReader<RequestLoadStoreDetail>,
    mut save_events: EventReader<RequestSaveStore>,
    mut delete_events: EventReader<RequestDeleteStore>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut directory: ResMut<StoreDirectory>,
    mut state: ResMut<AdminWindowState>,
    mut commands: Commands,
) {
    for ev in load_events.read() {
        directory.loading = true;
        let api = api.0.clone();
        let (page_number, page_size) = (ev.page_number, ev.page_size);
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_stores(page_number, page_size).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<StoresLoaded> {
                        event: StoresLoaded { result },
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
            let result = api.get_store(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<StoreDetailLoaded> {
                        event: StoreDetailLoaded { result },
                    });
            })
            .await;
        });
    }

    for ev in save_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let payload = ev.payload.clone();
        let mode = ev.mode;
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = match mode {
                SaveMode::Create => api.create_store(&payload).await,
                SaveMode::Update if payload.id.is_empty() => Err(ApiError::Transport(
                    "update requested without a store id".to_string(),
                )),
                SaveMode::Update => api.update_store(&payload).await,
            };
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<StoreSaved> {
                        event: StoreSaved { mode, result },
                    });
            })
            .await;
        });
    }

    for ev in delete_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let id = ev.id.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.delete_store(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<StoreDeleted> {
                        event: StoreDeleted { result },
                    });
            })
            .await;
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_store_results(
    mut loaded: EventReader<StoresLoaded>,
    mut detail_loaded: EventReader<StoreDetailLoaded>,
    mut saved: EventReader<StoreSaved>,
    mut deleted: EventReader<StoreDeleted>,
    mut directory: ResMut<StoreDirectory>,
    mut state: ResMut<AdminWindowState>,
    settings: Res<AppSettings>,
    mut feedback: EventWriter<OperationFeedback>,
    mut reload: EventWriter<RequestLoadStores>,
    mut reload_detail: EventWriter<RequestLoadStoreDetail>,
) {
    for ev in loaded.read() {
        directory.loading = false;
        match &ev.result {
            Ok(page) => directory.page = Some(page.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load stores: {e}"
                )));
            }
        }
    }

    for ev in detail_loaded.read() {
        directory.detail_loading = false;
        match &ev.result {
            Ok(store) => directory.detail = Some(store.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!("Failed to load store: {e}")));
            }
        }
    }

    for ev in saved.read() {
        state.submitting = false;
        match (&ev.result, ev.mode) {
            (Ok(()), SaveMode::Create) => {
                feedback.write(OperationFeedback::info("Store created."));
                state.store_form = Default::default();
                state.screen = Screen::Stores;
                reload.write(RequestLoadStores {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            }
            (Ok(()), SaveMode::Update) => {
                feedback.write(OperationFeedback::info("Store updated."));
                state.store_edit = false;
                if let Some(store) = &directory.detail {
                    reload_detail.write(RequestLoadStoreDetail {
                        id: store.id.clone(),
                    });
                }
            }
            (Err(e), _) => {
                feedback.write(OperationFeedback::error(format!("Failed to save store: {e}")));
            }
        }
    }

    for ev in deleted.read() {
        state.submitting = false;
        match &ev.result {
            Ok(()) => {
                feedback.write(OperationFeedback::info("Store deleted."));
                directory.detail = None;
                if state.screen == Screen::StoreDetail {
                    state.screen = Screen::Stores;
                }
                let page_number = directory
                    .page
                    .as_ref()
                    .map(|p| p.page_index)
                    .unwrap_or(1);
                reload.write(RequestLoadStores {
                    page_number,
                    page_size: settings.page_size,
                });
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to delete store: {e}"
                )));
            }
        }
    }
}
