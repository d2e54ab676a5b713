// src/marketplace/resources.rs
use bevy::prelude::*;
use std::sync::Arc;

use crate::api::types::{
    IdName, Page, ProductDetail, ProductSummary, ServiceCategory, ServicePayload, ServiceSummary,
    Store, User,
};
use crate::api::ApiClient;
use crate::drafts::DraftStore;

/// Shared handle to the API client; cloned into background tasks.
#[derive(Resource, Clone)]
pub struct ApiHandle(pub Arc<ApiClient>);

/// Shared handle to the draft store; the wizard is the only consumer, but the
/// indirection keeps file access out of the screens and lets tests inject an
/// in-memory store.
#[derive(Resource, Clone)]
pub struct DraftRepository(pub Arc<dyn DraftStore>);

/// Cached list/detail state for one entity's screens.
///
/// `page` holds the last envelope the server returned; `detail` the last
/// fetched single record. Loading flags drive the spinners.
#[derive(Resource, Debug, Default)]
pub struct ProductDirectory {
    pub page: Option<Page<ProductSummary>>,
    pub loading: bool,
    pub detail: Option<ProductDetail>,
    pub detail_loading: bool,
}

#[derive(Resource, Debug, Default)]
pub struct StoreDirectory {
    pub page: Option<Page<Store>>,
    pub loading: bool,
    pub detail: Option<Store>,
    pub detail_loading: bool,
}

#[derive(Resource, Debug, Default)]
pub struct ServiceDirectory {
    pub page: Option<Page<ServiceSummary>>,
    pub loading: bool,
    pub detail: Option<ServicePayload>,
    pub detail_loading: bool,
}

#[derive(Resource, Debug, Default)]
pub struct UserDirectory {
    pub page: Option<Page<User>>,
    pub loading: bool,
    pub detail: Option<User>,
    pub detail_loading: bool,
}

/// Dropdown choices for the forms.
///
/// Product categories and brands are fixed client-side lists (the backend has
/// no endpoints for them); service categories and store choices are fetched
/// once per session, independently and unordered relative to each other.
#[derive(Resource, Debug)]
pub struct ReferenceData {
    pub product_categories: Vec<IdName>,
    pub brands: Vec<IdName>,
    pub service_categories: Vec<ServiceCategory>,
    pub store_choices: Vec<IdName>,
    pub loading_service_categories: bool,
    pub loading_store_choices: bool,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            product_categories: fixed_product_categories(),
            brands: fixed_brands(),
            service_categories: Vec::new(),
            store_choices: Vec::new(),
            loading_service_categories: false,
            loading_store_choices: false,
        }
    }
}

impl ReferenceData {
    /// Resolves a display name back to its id, used when seeding an edit form
    /// from a detail response that only carries names.
    pub fn id_for_name<'a>(choices: &'a [IdName], name: &str) -> Option<&'a str> {
        choices
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.as_str())
    }

    pub fn name_for_id<'a>(choices: &'a [IdName], id: &str) -> Option<&'a str> {
        choices.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }
}

fn fixed_product_categories() -> Vec<IdName> {
    vec![
        IdName {
            id: "8858B173-9D33-4D4A-B7E5-02A1E1AF53B3".to_string(),
            name: "Phụ Kiện thú cưng".to_string(),
        },
        IdName {
            id: "43715788-0B06-4ACE-92CB-2D1AF7A46B6F".to_string(),
            name: "Thức ăn cho chó".to_string(),
        },
    ]
}

fn fixed_brands() -> Vec<IdName> {
    vec![
        IdName {
            id: "E9534604-C257-4CC5-9831-03C4E6B1C2FE".to_string(),
            name: "Royal Canin".to_string(),
        },
        IdName {
            id: "9C9C5050-C1F5-4E39-A522-68825D380355".to_string(),
            name: "Purina".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_id_lookup_round_trip() {
        let reference = ReferenceData::default();
        let brand = &reference.brands[0];
        assert_eq!(
            ReferenceData::id_for_name(&reference.brands, &brand.name),
            Some(brand.id.as_str())
        );
        assert_eq!(
            ReferenceData::name_for_id(&reference.brands, &brand.id),
            Some(brand.name.as_str())
        );
        assert_eq!(ReferenceData::id_for_name(&reference.brands, "absent"), None);
    }
}
