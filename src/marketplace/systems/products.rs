// src/marketplace/systems/products.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::ApiError;
use crate::marketplace::events::{
    OperationFeedback, ProductDeleted, ProductDetailLoaded, ProductSaved, ProductsLoaded,
    RequestDeleteProduct, RequestLoadProductDetail, RequestLoadProducts, RequestSaveProduct,
    SaveMode,
};
use crate::marketplace::resources::{ApiHandle, ProductDirectory};
use crate::settings::AppSettings;
use crate::ui::state::{AdminWindowState, Screen};
use crate::ui::systems::SendEvent;

#[allow(clippy::too_many_arguments)]
pub fn handle_product_requests(
    mut load_events: EventReader<RequestLoadProducts>,
    mut detail_events: EventReader<RequestLoadProductDetail>,
    mut save_events: EventReader<RequestSaveProduct>,
    mut delete_events: EventReader<RequestDeleteProduct>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut directory: ResMut<ProductDirectory>,
    mut state: ResMut<AdminWindowState>,
    mut commands: Commands,
) {
    for ev in load_events.read() {
        directory.loading = true;
        let api = api.0.clone();
        let (page_number, page_size) = (ev.page_number, ev.page_size);
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.list_products(page_number, page_size).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ProductsLoaded> {
                        event: ProductsLoaded { result },
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
            let result = api.get_product(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ProductDetailLoaded> {
                        event: ProductDetailLoaded { result },
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
                (SaveMode::Create, _) => api.create_product(&payload).await,
                (SaveMode::Update, Some(id)) => api.update_product(&id, &payload).await,
                (SaveMode::Update, None) => Err(ApiError::Transport(
                    "update requested without a product id".to_string(),
                )),
            };
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ProductSaved> {
                        event: ProductSaved { mode, result },
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
            let result = api.delete_product(&id).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ProductDeleted> {
                        event: ProductDeleted { result },
                    });
            })
            .await;
        });
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_product_results(
    mut loaded: EventReader<ProductsLoaded>,
    mut detail_loaded: EventReader<ProductDetailLoaded>,
    mut saved: EventReader<ProductSaved>,
    mut deleted: EventReader<ProductDeleted>,
    mut directory: ResMut<ProductDirectory>,
    mut state: ResMut<AdminWindowState>,
    settings: Res<AppSettings>,
    mut feedback: EventWriter<OperationFeedback>,
    mut reload: EventWriter<RequestLoadProducts>,
    mut reload_detail: EventWriter<RequestLoadProductDetail>,
) {
    for ev in loaded.read() {
        directory.loading = false;
        match &ev.result {
            Ok(page) => directory.page = Some(page.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load products: {e}"
                )));
            }
        }
    }

    for ev in detail_loaded.read() {
        directory.detail_loading = false;
        match &ev.result {
            Ok(detail) => directory.detail = Some(detail.clone()),
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to load product: {e}"
                )));
            }
        }
    }

    for ev in saved.read() {
        state.submitting = false;
        match (&ev.result, ev.mode) {
            (Ok(()), SaveMode::Create) => {
                feedback.write(OperationFeedback::info("Product created."));
                state.product_form = Default::default();
                state.screen = Screen::Products;
                reload.write(RequestLoadProducts {
                    page_number: 1,
                    page_size: settings.page_size,
                });
            }
            (Ok(()), SaveMode::Update) => {
                feedback.write(OperationFeedback::info("Product updated."));
                state.product_edit = false;
                if let Some(detail) = &directory.detail {
                    reload_detail.write(RequestLoadProductDetail {
                        id: detail.id.clone(),
                    });
                }
            }
            (Err(e), _) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to save product: {e}"
                )));
            }
        }
    }

    for ev in deleted.read() {
        state.submitting = false;
        match &ev.result {
            Ok(()) => {
                feedback.write(OperationFeedback::info("Product deleted."));
                directory.detail = None;
                if state.screen == Screen::ProductDetail {
                    state.screen = Screen::Products;
                }
                let page_number = directory
                    .page
                    .as_ref()
                    .map(|p| p.page_index)
                    .unwrap_or(1);
                reload.write(RequestLoadProducts {
                    page_number,
                    page_size: settings.page_size,
                });
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!(
                    "Failed to delete product: {e}"
                )));
            }
        }
    }
}
