// src/marketplace/systems/upload.rs
//! Image upload: read the picked file off the main thread, post it as
//! multipart, and write the returned URL into the form field that asked.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::ApiError;
use crate::marketplace::events::{ImageTarget, ImageUploaded, OperationFeedback, RequestUploadImage};
use crate::marketplace::resources::ApiHandle;
use crate::ui::state::AdminWindowState;
use crate::ui::systems::SendEvent;

pub fn handle_upload_requests(
    mut upload_events: EventReader<RequestUploadImage>,
    api: Res<ApiHandle>,
    runtime: Res<TokioTasksRuntime>,
    mut state: ResMut<AdminWindowState>,
    mut commands: Commands,
) {
    for ev in upload_events.read() {
        state.submitting = true;
        let api = api.0.clone();
        let target = ev.target;
        let path = ev.path.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.bin".to_string());
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => api
                    .upload_image(file_name, bytes)
                    .await
                    .map(|uploaded| uploaded.url),
                Err(e) => Err(ApiError::Transport(format!(
                    "could not read {}: {e}",
                    path.display()
                ))),
            };
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ImageUploaded> {
                        event: ImageUploaded { target, result },
                    });
            })
            .await;
        });
    }
}

pub fn apply_upload_results(
    mut uploaded: EventReader<ImageUploaded>,
    mut state: ResMut<AdminWindowState>,
    mut feedback: EventWriter<OperationFeedback>,
) {
    for ev in uploaded.read() {
        state.submitting = false;
        match &ev.result {
            Ok(url) => {
                let store = &mut state.store_form.store;
                let slot = match ev.target {
                    ImageTarget::StoreLogo => &mut store.logo_url,
                    ImageTarget::StoreBanner => &mut store.banner_url,
                    ImageTarget::StoreFrontIdentityCard => &mut store.front_identity_card_url,
                    ImageTarget::StoreBackIdentityCard => &mut store.back_identity_card_url,
                };
                *slot = url.clone();
                feedback.write(OperationFeedback::info("Image uploaded."));
            }
            Err(e) => {
                feedback.write(OperationFeedback::error(format!("Image upload failed: {e}")));
            }
        }
    }
}
