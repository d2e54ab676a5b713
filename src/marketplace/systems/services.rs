// src/marketplace/systems/services.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::ApiError;
use crate::marketplace::events::{
    OperationFeedback, RequestDeleteService, RequestDeleteServiceDetailRow,
    RequestDeleteServiceStepRow, RequestLoadServiceDetail, RequestLoadServices,
    RequestSaveService, SaveMode, ServiceDeleted, ServiceDetailLoaded, ServiceRowDeleted,
    ServiceSaved, ServicesLoaded,
};
use crate::marketplace::resources::{ApiHandle, DraftRepository, ServiceDirectory};
use crate::marketplace::wizard;
use crate::settings::AppSettings;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::systems::SendEvent;

/// Cache key for one fetched service, so an interrupted session can show the
/// detail screen again before the refetch lands.
fn detail_cache_key(service_id: &str) -> String {
    format!("serviceDetail_{service_id}")
}

#[allow(clippy::too_many_arguments)]
pub fn handle_service_requests(
    mut load_events: EventReader<RequestLoadServices>,
    mut detail_events: EventReader<RequestLoadServiceDetail>,
    mut save_events: EventReader<RequestSaveService>,
    mut delete_events: EventReader<RequestDeleteService>,
    mut detail_row_events: EventReader<RequestDeleteServiceDetailRow>,
    mut step_row_events: EventReader<RequestDeleteServiceStepRow>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    drafts: Res<DraftRepository>,
    mut directory: ResMut<ServiceDirectory>,
    mut state: ResMut<AdminWindowState>,
    mut commands: Commands,
) {
    for ev in load_events.read() {
        directory.loading = true;
        let api = api.0.clone();
        let (page_number, page_size) = (ev.page_number, ev.page_size);
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_services(page_number, page_size).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServicesLoaded> {
                        event: ServicesLoaded { result },
                    });
            })
            .await;
        });
    }

    for ev in detail_events.read() {
        directory.detail_loading = true;
        // Show the locally cached copy (if any) while the refetch is in
        // flight; the server response replaces it.
        directory.detail = drafts
            .0
            .load(&detail_cache_key(&ev.id))
            .and_then(|value| serde_json::from_value(value).ok());
        let api = api.0.clone();
        let id = ev.id.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.get_service(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceDetailLoaded> {
                        event: ServiceDetailLoaded { result },
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
            let result = match (mode, payload.id.clone()) {
                (SaveMode::Create, _) => api.create_service(&payload).await,
                (SaveMode::Update, Some(id)) => api.update_service(&id, &payload).await,
                (SaveMode::Update, None) => Err(ApiError::Transport(
                    "update requested without a service id".to_string(),
                )),
            };
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceSaved> {
                        event: ServiceSaved { mode, result },
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
            let result = api.delete_service(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceDeleted> {
                        event: ServiceDeleted { result },
                    });
            })
            .await;
        });
    }

    for ev in detail_row_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let service_id = ev.service_id.clone();
        let detail_id = ev.detail_id.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.delete_service_detail(&service_id, &detail_id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceRowDeleted> {
                        event: ServiceRowDeleted { service_id, result },
                    });
            })
            .await;
        });
    }

    for ev in step_row_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let service_id = ev.service_id.clone();
        let step_id = ev.step_id.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.delete_service_step(&service_id, &step_id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceRowDeleted> {
                        event: ServiceRowDeleted { service_id, result },
                    });
            })
            .await;
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_service_results(
    mut loaded: EventReader<ServicesLoaded>,
    mut detail_loaded: EventReader<ServiceDetailLoaded>,
    mut saved: EventReader<ServiceSaved>,
    mut deleted: EventReader<ServiceDeleted>,
    mut row_deleted: EventReader<ServiceRowDeleted>,
    mut directory: ResMut<ServiceDirectory>,
    mut state: ResMut<AdminWindowState>,
    settings: Res<AppSettings>,
    drafts: Res<DraftRepository>,
    mut feedback: EventWriter<OperationFeedback>,
    mut reload: EventWriter<RequestLoadServices>,
    mut reload_detail: EventWriter<RequestLoadServiceDetail>,
) {
    for ev in loaded.read() {
        directory.loading = false;
        match &ev.result {
            Ok(page) => directory.page = Some(page.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load services: {e}"
                )));
            }
        }
    }

    for ev in detail_loaded.read() {
        directory.detail_loading = false;
        match &ev.result {
            Ok(service) => {
                if let Some(id) = &service.id {
                    match serde_json::to_value(service) {
                        Ok(value) => {
                            if let Err(e) = drafts.0.save(&detail_cache_key(id), &value) {
                                warn!("Failed to cache service detail: {}", e);
                            }
                        }
                        Err(e) => warn!("Failed to serialize service detail: {}", e),
                    }
                }
                directory.detail = Some(service.clone());
            }
            Err(e) => {
                // The cached copy, when present, keeps the screen usable.
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load service: {e}"
                )));
            }
        }
    }

    for ev in saved.read() {
        state.submitting = false;
        match (&ev.result, ev.mode) {
            (Ok(()), SaveMode::Create) => {
                feedback.write(OperationFeedback::info("Service created."));
                // The wizard's job is done: drop every draft key and reset.
                wizard::clear_drafts(drafts.0.as_ref());
                state.wizard = Default::default();
                state.screen = Screen::Services;
                reload.write(RequestLoadServices {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            }
            (Ok(()), SaveMode::Update) => {
                feedback.write(OperationFeedback::info("Service updated."));
                state.service_edit = false;
                if let Some(service) = &directory.detail {
                    if let Some(id) = &service.id {
                        // The cached copy is stale now; drop it and refetch.
                        drafts.0.clear(&detail_cache_key(id));
                        reload_detail.write(RequestLoadServiceDetail { id: id.clone() });
                    }
                }
            }
            (Err(e), _) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to save service: {e}"
                )));
            }
        }
    }

    for ev in deleted.read() {
        state.submitting = false;
        match &ev.result {
            Ok(()) => {
                feedback.write(OperationFeedback::info("Service deleted."));
                if let Some(id) = directory.detail.as_ref().and_then(|s| s.id.clone()) {
                    drafts.0.clear(&detail_cache_key(&id));
                }
                directory.detail = None;
                if state.screen == Screen::ServiceDetail {
                    state.screen = Screen::Services;
                }
                let page_number = directory
                    .page
                    .as_ref()
                    .map(|p| p.page_index)
                    .unwrap_or(1);
                reload.write(RequestLoadServices {
                    page_number,
                    page_size: settings.page_size,
                });
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to delete service: {e}"
                )));
            }
        }
    }

    for ev in row_deleted.read() {
        state.submitting = false;
        match &ev.result {
            Ok(()) => {
                feedback.write(OperationFeedback::info("Row deleted."));
                // Refetch so the open detail reflects the server's row set.
                reload_detail.write(RequestLoadServiceDetail {
                    id: ev.service_id.clone(),
                });
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to delete row: {e}"
                )));
            }
        }
    }
}
