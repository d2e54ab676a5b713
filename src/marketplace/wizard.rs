// src/marketplace/wizard.rs
//! Draft plumbing for the three-step "add service" wizard.
//!
//! The wizard keeps its in-progress state under fixed draft keys so an
//! interrupted session can be resumed: the merged payload under
//! [`OVERVIEW_KEY`], and the two sub-form row lists redundantly under their
//! own keys (the shape the original flow established). A timestamp draft
//! decides on open whether to restore or start clean: a missing or stale
//! stamp means "new session".

use bevy::log::warn;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::api::types::{ServiceDetailRow, ServicePayload, ServiceStepRow};
use crate::drafts::DraftStore;

pub const OVERVIEW_KEY: &str = "addService";
pub const DETAILS_KEY: &str = "serviceDetails";
pub const STEPS_KEY: &str = "serviceSteps";
pub const STAMP_KEY: &str = "addServiceStamp";

/// How recent the session stamp must be for the wizard to resume a draft.
pub const RESUME_WINDOW_SECS: i64 = 5;

/// Wizard step order. The three steps are strictly linear.
pub const STEP_TITLES: [&str; 3] = ["Service Overall", "Service Details", "Service Steps"];

/// Decides whether a draft belongs to the current editing session.
pub fn should_resume(stamp: Option<&Value>, now: DateTime<Utc>) -> bool {
    let Some(raw) = stamp.and_then(|v| v.as_str()) else {
        return false;
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(then) => {
            let age = now.signed_duration_since(then.with_timezone(&Utc));
            age <= Duration::seconds(RESUME_WINDOW_SECS) && age >= Duration::zero()
        }
        Err(e) => {
            warn!("Wizard: unreadable session stamp, treating as new session: {}", e);
            false
        }
    }
}

pub fn write_stamp(store: &dyn DraftStore, now: DateTime<Utc>) {
    let value = Value::String(now.to_rfc3339());
    if let Err(e) = store.save(STAMP_KEY, &value) {
        warn!("Wizard: failed to save session stamp: {}", e);
    }
}

/// Restores a draft payload, merging the redundant detail/step lists over the
/// merged draft (the sub-form keys are written more eagerly and win).
pub fn load_draft(store: &dyn DraftStore) -> Option<ServicePayload> {
    let overview = store.load(OVERVIEW_KEY)?;
    let mut payload: ServicePayload = match serde_json::from_value(overview) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Wizard: discarding unreadable draft payload: {}", e);
            return None;
        }
    };
    if let Some(value) = store.load(DETAILS_KEY) {
        match serde_json::from_value::<Vec<ServiceDetailRow>>(value) {
            Ok(rows) => payload.pet_service_details = rows,
            Err(e) => warn!("Wizard: ignoring unreadable detail rows: {}", e),
        }
    }
    if let Some(value) = store.load(STEPS_KEY) {
        match serde_json::from_value::<Vec<ServiceStepRow>>(value) {
            Ok(rows) => payload.pet_service_steps = rows,
            Err(e) => warn!("Wizard: ignoring unreadable step rows: {}", e),
        }
    }
    Some(payload)
}

/// Saves the merged draft and its two sub-form mirrors.
pub fn save_draft(store: &dyn DraftStore, draft: &ServicePayload) {
    match serde_json::to_value(draft) {
        Ok(value) => {
            if let Err(e) = store.save(OVERVIEW_KEY, &value) {
                warn!("Wizard: failed to save draft: {}", e);
            }
        }
        Err(e) => warn!("Wizard: failed to serialize draft: {}", e),
    }
    save_rows(store, DETAILS_KEY, &draft.pet_service_details);
    save_rows(store, STEPS_KEY, &draft.pet_service_steps);
}

fn save_rows<T: serde::Serialize>(store: &dyn DraftStore, key: &str, rows: &[T]) {
    match serde_json::to_value(rows) {
        Ok(value) => {
            if let Err(e) = store.save(key, &value) {
                warn!("Wizard: failed to save '{}': {}", key, e);
            }
        }
        Err(e) => warn!("Wizard: failed to serialize '{}': {}", key, e),
    }
}

/// Removes every wizard key; called after a successful submit and when a new
/// session starts.
pub fn clear_drafts(store: &dyn DraftStore) {
    for key in [OVERVIEW_KEY, DETAILS_KEY, STEPS_KEY, STAMP_KEY] {
        store.clear(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::MemoryDraftStore;
    use serde_json::json;

    fn sample_draft() -> ServicePayload {
        ServicePayload {
            id: None,
            name: "Grooming".into(),
            description: "Full groom".into(),
            store_id: "s1".into(),
            estimated_time: "45m".into(),
            service_category_id: "sc1".into(),
            status: true,
            pet_service_details: vec![ServiceDetailRow {
                id: None,
                pet_weight_min: 0.0,
                pet_weight_max: 10.0,
                amount: 150.0,
                pet_type: true,
                description: String::new(),
                name: "Small dogs".into(),
            }],
            pet_service_steps: vec![ServiceStepRow {
                id: None,
                name: "Wash".into(),
                description: String::new(),
                priority: 1,
            }],
        }
    }

    #[test]
    fn test_should_resume_requires_fresh_stamp() {
        let now = Utc::now();
        let fresh = Value::String((now - Duration::seconds(2)).to_rfc3339());
        let stale = Value::String((now - Duration::seconds(6)).to_rfc3339());
        assert!(should_resume(Some(&fresh), now));
        assert!(!should_resume(Some(&stale), now));
        assert!(!should_resume(None, now));
    }

    #[test]
    fn test_should_resume_rejects_garbage_stamp() {
        let now = Utc::now();
        assert!(!should_resume(Some(&json!("not a timestamp")), now));
        assert!(!should_resume(Some(&json!(42)), now));
    }

    #[test]
    fn test_draft_round_trip_merges_three_keys() {
        let store = MemoryDraftStore::default();
        let draft = sample_draft();
        save_draft(&store, &draft);
        let restored = load_draft(&store).unwrap();
        assert_eq!(restored, draft);
    }

    #[test]
    fn test_sub_form_keys_override_merged_draft() {
        // The sub-form mirrors are written more eagerly than the merged
        // draft; a restore must prefer them.
        let store = MemoryDraftStore::default();
        let draft = sample_draft();
        save_draft(&store, &draft);

        let newer_steps = vec![
            ServiceStepRow {
                id: None,
                name: "Wash".into(),
                description: String::new(),
                priority: 1,
            },
            ServiceStepRow {
                id: None,
                name: "Dry".into(),
                description: String::new(),
                priority: 2,
            },
        ];
        store
            .save(STEPS_KEY, &serde_json::to_value(&newer_steps).unwrap())
            .unwrap();

        let restored = load_draft(&store).unwrap();
        assert_eq!(restored.pet_service_steps, newer_steps);
        assert_eq!(restored.pet_service_details, draft.pet_service_details);
    }

    #[test]
    fn test_unreadable_rows_fall_back_to_merged_draft() {
        let store = MemoryDraftStore::default();
        let draft = sample_draft();
        save_draft(&store, &draft);
        store.save(DETAILS_KEY, &json!({"not": "rows"})).unwrap();

        let restored = load_draft(&store).unwrap();
        assert_eq!(restored.pet_service_details, draft.pet_service_details);
    }

    #[test]
    fn test_clear_drafts_removes_all_keys() {
        let store = MemoryDraftStore::default();
        save_draft(&store, &sample_draft());
        write_stamp(&store, Utc::now());
        clear_drafts(&store);
        for key in [OVERVIEW_KEY, DETAILS_KEY, STEPS_KEY, STAMP_KEY] {
            assert_eq!(store.load(key), None, "key '{key}' should be cleared");
        }
    }

    #[test]
    fn test_missing_overview_means_no_draft() {
        let store = MemoryDraftStore::default();
        store.save(DETAILS_KEY, &json!([])).unwrap();
        assert!(load_draft(&store).is_none());
    }
}
