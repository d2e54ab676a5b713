// src/ui/elements/popups/delete_confirm_popup.rs
//! Blocking yes/no prompt that precedes every destructive call.

use bevy_egui::egui;

use crate::marketplace::events::{
    RequestDeleteProduct, RequestDeleteService, RequestDeleteServiceDetailRow,
    RequestDeleteServiceStepRow, RequestDeleteStore,
};
use crate::ui::state::{AdminWindowState, DeleteKind};

use super::super::shell::DeleteWriters;

pub fn show_delete_confirm_popup(
    ctx: &egui::Context,
    state: &mut AdminWindowState,
    writers: &mut DeleteWriters,
) {
    if !state.show_delete_confirm_popup {
        return;
    }

    let mut popup_open = state.show_delete_confirm_popup;
    let mut delete_clicked = false;
    let mut cancel_clicked = false;

    let label = state
        .delete_target
        .as_ref()
        .map(|t| t.label.clone())
        .unwrap_or_default();

    egui::Window::new("Confirm Delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label(format!("Permanently delete {label}?"));
            ui.colored_label(egui::Color32::YELLOW, "This action cannot be undone.");
            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("DELETE").fill(egui::Color32::DARK_RED))
                    .clicked()
                {
                    delete_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    let mut close_popup = false;

    if delete_clicked {
        if let Some(target) = state.delete_target.take() {
            match target.kind {
                DeleteKind::Product { id } => {
                    writers.product.write(RequestDeleteProduct { id });
                }
                DeleteKind::Store { id } => {
                    writers.store.write(RequestDeleteStore { id });
                }
                DeleteKind::Service { id } => {
                    writers.service.write(RequestDeleteService { id });
                }
                DeleteKind::ServiceDetailRow {
                    service_id,
                    detail_id,
                } => {
                    writers
                        .service_detail_row
                        .write(RequestDeleteServiceDetailRow {
                            service_id,
                            detail_id,
                        });
                }
                DeleteKind::ServiceStepRow {
                    service_id,
                    step_id,
                } => {
                    writers.service_step_row.write(RequestDeleteServiceStepRow {
                        service_id,
                        step_id,
                    });
                }
            }
        }
        close_popup = true;
    }

    if cancel_clicked {
        close_popup = true;
    }

    // Closing via the window's 'x' counts as cancel.
    if !close_popup && !popup_open {
        close_popup = true;
    }

    if close_popup {
        state.show_delete_confirm_popup = false;
        state.delete_target = None;
    } else {
        state.show_delete_confirm_popup = popup_open;
    }
}
