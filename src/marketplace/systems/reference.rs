// src/marketplace/systems/reference.rs
//! Dropdown reference data. The two fetches are independent in-flight
//! requests with no ordering between them; each is awaited on its own task.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::marketplace::events::{
    OperationFeedback, RequestLoadServiceCategories, RequestLoadStoreChoices,
    ServiceCategoriesLoaded, StoreChoicesLoaded,
};
use crate::marketplace::resources::{ApiHandle, ReferenceData};
use crate::ui::systems::SendEvent;

pub fn handle_reference_requests(
    mut category_events: EventReader<RequestLoadServiceCategories>,
    mut store_events: EventReader<RequestLoadStoreChoices>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut reference: ResMut<ReferenceData>,
    mut commands: Commands,
) {
    if category_events.read().next().is_some() {
        reference.loading_service_categories = true;
        let api = api.0.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_service_categories().await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ServiceCategoriesLoaded> {
                        event: ServiceCategoriesLoaded { result },
                    });
            })
            .await;
        });
    }

    if store_events.read().next().is_some() {
        reference.loading_store_choices = true;
        let api = api.0.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_store_choices().await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<StoreChoicesLoaded> {
                        event: StoreChoicesLoaded { result },
                    });
            })
            .await;
        });
    }
}

pub fn apply_reference_results(
    mut categories_loaded: EventReader<ServiceCategoriesLoaded>,
    mut stores_loaded: EventReader<StoreChoicesLoaded>,
    mut reference: ResMut<ReferenceData>,
    mut feedback: EventWriter<OperationFeedback>,
) {
    for ev in categories_loaded.read() {
        reference.loading_service_categories = false;
        match &ev.result {
            Ok(categories) => reference.service_categories = categories.clone(),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load service categories: {e}"
                )));
            }
        }
    }

    for ev in stores_loaded.read() {
        reference.loading_store_choices = false;
        match &ev.result {
            Ok(choices) => reference.store_choices = choices.clone(),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load store list: {e}"
                )));
            }
        }
    }
}
