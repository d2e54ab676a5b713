// src/ui/elements/services/wizard.rs
//! Three-step "add service" wizard: overview → weight-band details →
//! ordered steps. In-progress state is saved through the draft repository on
//! every step transition and row change, so an interrupted session can be
//! resumed within the stamp window.

use bevy_egui::egui;
use chrono::Utc;

use crate::api::types::{IdName, ServiceDetailRow, ServiceStepRow};
use crate::marketplace::events::{
    RequestLoadServiceCategories, RequestLoadStoreChoices, RequestSaveService, SaveMode,
};
use crate::marketplace::resources::{DraftRepository, ReferenceData};
use crate::marketplace::wizard;
use crate::ui::common;
use crate::ui::state::{AdminWindowState, Screen};

use super::super::shell::{ServiceWriters, SessionWriters};

pub fn show_service_wizard(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    reference: &ReferenceData,
    drafts: &DraftRepository,
    writers: &mut ServiceWriters,
    session_writers: &mut SessionWriters,
) {
    let store = drafts.0.as_ref();

    // Open/restore decision, once per visit: a fresh stamp means the operator
    // was just here (e.g. the app restarted mid-wizard) and the draft is
    // resumed; anything else starts clean.
    if !state.wizard.started {
        let now = Utc::now();
        let stamp = store.load(wizard::STAMP_KEY);
        if wizard::should_resume(stamp.as_ref(), now) {
            if let Some(draft) = wizard::load_draft(store) {
                state.wizard.draft = draft;
            }
        } else {
            wizard::clear_drafts(store);
            state.wizard.draft = Default::default();
        }
        wizard::write_stamp(store, now);
        state.wizard.step = 0;
        state.wizard.errors.clear();
        state.wizard.started = true;

        // Refresh both dropdown sources. Two independent in-flight requests,
        // each awaited on its own task, unordered.
        session_writers.load_categories.write(RequestLoadServiceCategories);
        session_writers.load_store_choices.write(RequestLoadStoreChoices);
    }

    let mut cancel = false;
    ui.horizontal(|ui| {
        ui.heading("Add service");
        if ui.button("Cancel").clicked() {
            cancel = true;
        }
    });
    if cancel {
        // Drafts stay on disk; only a submit or a new session clears them.
        state.wizard = Default::default();
        state.screen = Screen::Services;
        return;
    }

    // Step indicator.
    ui.horizontal(|ui| {
        for (index, title) in wizard::STEP_TITLES.iter().enumerate() {
            if index > 0 {
                ui.label("→");
            }
            if index == state.wizard.step {
                ui.strong(format!("{}. {}", index + 1, title));
            } else {
                ui.weak(format!("{}. {}", index + 1, title));
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        match state.wizard.step {
            0 => overview_step(ui, state, reference),
            1 => details_step(ui, state, store),
            _ => steps_step(ui, state, store),
        }

        common::validation_messages(ui, &state.wizard.errors);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if state.wizard.step > 0 && ui.button("Previous").clicked() {
                // Going back re-reads the drafts, the freshest copy of the
                // sub-form lists.
                if let Some(draft) = wizard::load_draft(store) {
                    state.wizard.draft = draft;
                }
                state.wizard.step -= 1;
                state.wizard.errors.clear();
            }

            match state.wizard.step {
                0 => {
                    if ui.button("Next").clicked() && state.wizard.validate_overview() {
                        wizard::save_draft(store, &state.wizard.draft);
                        state.wizard.step = 1;
                    }
                }
                1 => {
                    if ui.button("Next").clicked() && state.wizard.validate_details() {
                        wizard::save_draft(store, &state.wizard.draft);
                        state.wizard.step = 2;
                    }
                }
                _ => {
                    if state.submitting {
                        ui.spinner();
                        ui.label("Creating service...");
                    } else if ui.button("Create service").clicked()
                        && state.wizard.validate_steps()
                    {
                        // Merge of the three accumulated parts is the draft
                        // itself; the id stays empty for a create.
                        let mut payload = state.wizard.draft.clone();
                        payload.id = None;
                        writers.save.write(RequestSaveService {
                            payload,
                            mode: SaveMode::Create,
                        });
                    }
                }
            }
        });
    });
}

fn overview_step(ui: &mut egui::Ui, state: &mut AdminWindowState, reference: &ReferenceData) {
    let draft = &mut state.wizard.draft;
    common::text_field(ui, "Service name", &mut draft.name);
    ui.horizontal(|ui| {
        ui.label("Description");
        ui.add(egui::TextEdit::multiline(&mut draft.description).desired_rows(2));
    });
    common::choice_field(ui, "Store", &reference.store_choices, &mut draft.store_id);
    let category_choices: Vec<IdName> = reference
        .service_categories
        .iter()
        .map(|c| IdName {
            id: c.id.clone(),
            name: c.name.clone(),
        })
        .collect();
    common::choice_field(
        ui,
        "Service category",
        &category_choices,
        &mut draft.service_category_id,
    );
    common::text_field(ui, "Estimated time", &mut draft.estimated_time);
    ui.checkbox(&mut draft.status, "Active");
}

fn details_step(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    store: &dyn crate::drafts::DraftStore,
) {
    ui.strong("Weight-band pricing");
    ui.small("One row per pet type and weight range.");

    let draft = &mut state.wizard.draft;
    let mut remove_row = None;
    let mut rows_changed = false;

    for (index, row) in draft.pet_service_details.iter_mut().enumerate() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Row {}", index + 1));
                if ui.button("Remove").clicked() {
                    remove_row = Some(index);
                }
            });
            common::text_field(ui, "Name", &mut row.name);
            ui.horizontal(|ui| {
                ui.label("Pet type");
                ui.selectable_value(&mut row.pet_type, true, "Dog");
                ui.selectable_value(&mut row.pet_type, false, "Cat");
            });
            ui.horizontal(|ui| {
                ui.label("Weight (kg)");
                ui.add(egui::DragValue::new(&mut row.pet_weight_min).range(0.0..=500.0));
                ui.label("to");
                ui.add(egui::DragValue::new(&mut row.pet_weight_max).range(0.0..=500.0));
            });
            ui.horizontal(|ui| {
                ui.label("Amount");
                ui.add(egui::DragValue::new(&mut row.amount).range(0.0..=f64::MAX).speed(1.0));
            });
            common::text_field(ui, "Description", &mut row.description);
        });
    }

    if let Some(index) = remove_row {
        draft.pet_service_details.remove(index);
        rows_changed = true;
    }
    if ui.button("Add row").clicked() {
        draft.pet_service_details.push(ServiceDetailRow::default());
        rows_changed = true;
    }

    if rows_changed {
        wizard::save_draft(store, draft);
    }
}

fn steps_step(
    ui: &mut egui::Ui,
    state: &mut AdminWindowState,
    store: &dyn crate::drafts::DraftStore,
) {
    ui.strong("Service steps");
    ui.small("Ordered by priority; performed top to bottom.");

    let draft = &mut state.wizard.draft;
    let mut remove_row = None;
    let mut rows_changed = false;

    for (index, row) in draft.pet_service_steps.iter_mut().enumerate() {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Step {}", index + 1));
                if ui.button("Remove").clicked() {
                    remove_row = Some(index);
                }
            });
            common::text_field(ui, "Name", &mut row.name);
            common::text_field(ui, "Description", &mut row.description);
            ui.horizontal(|ui| {
                ui.label("Priority");
                ui.add(egui::DragValue::new(&mut row.priority).range(1..=100));
            });
        });
    }

    if let Some(index) = remove_row {
        draft.pet_service_steps.remove(index);
        rows_changed = true;
    }
    if ui.button("Add step").clicked() {
        let next_priority = draft.pet_service_steps.len() as u32 + 1;
        draft.pet_service_steps.push(ServiceStepRow {
            priority: next_priority,
            ..Default::default()
        });
        rows_changed = true;
    }

    if rows_changed {
        wizard::save_draft(store, draft);
    }
}
