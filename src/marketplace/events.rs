// src/marketplace/events.rs
//! Request events written by the UI and result events delivered back from
//! background API tasks.
//!
//! Every result event carries a `Result<_, ApiError>` so the apply systems
//! decide between updating a directory and surfacing feedback; events must
//! stay `Clone` to travel through the forwarding path.

use bevy::prelude::Event;
use std::path::PathBuf;

use crate::api::types::{
    IdName, Page, ProductDetail, ProductPayload, ProductSummary, ServiceCategory, ServicePayload,
    ServiceSummary, Store, User, UserPayload,
};
use crate::api::ApiError;

/// Transient status line for the feedback strip.
#[derive(Event, Debug, Clone)]
pub struct OperationFeedback {
    pub message: String,
    pub is_error: bool,
}

impl OperationFeedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Whether a submit came from an add form or a detail edit; decides the
/// post-save navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

// --- Products ---

#[derive(Event, Debug, Clone)]
pub struct RequestLoadProducts {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLoadProductDetail {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestSaveProduct {
    pub payload: ProductPayload,
    pub mode: SaveMode,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteProduct {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct ProductsLoaded {
    pub result: Result<Page<ProductSummary>, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ProductDetailLoaded {
    pub result: Result<ProductDetail, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ProductSaved {
    pub mode: SaveMode,
    pub result: Result<(), ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ProductDeleted {
    pub result: Result<(), ApiError>,
}

// --- Stores ---

#[derive(Event, Debug, Clone)]
pub struct RequestLoadStores {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLoadStoreDetail {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestSaveStore {
    pub payload: Store,
    pub mode: SaveMode,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteStore {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct StoresLoaded {
    pub result: Result<Page<Store>, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct StoreDetailLoaded {
    pub result: Result<Store, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct StoreSaved {
    pub mode: SaveMode,
    pub result: Result<(), ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct StoreDeleted {
    pub result: Result<(), ApiError>,
}

// --- Services ---

#[derive(Event, Debug, Clone)]
pub struct RequestLoadServices {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLoadServiceDetail {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestSaveService {
    pub payload: ServicePayload,
    pub mode: SaveMode,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteService {
    pub id: String,
}

/// Deletes one persisted weight-band row of a service.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteServiceDetailRow {
    pub service_id: String,
    pub detail_id: String,
}

/// Deletes one persisted step row of a service.
#[derive(Event, Debug, Clone)]
pub struct RequestDeleteServiceStepRow {
    pub service_id: String,
    pub step_id: String,
}

#[derive(Event, Debug, Clone)]
pub struct ServicesLoaded {
    pub result: Result<Page<ServiceSummary>, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ServiceDetailLoaded {
    pub result: Result<ServicePayload, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ServiceSaved {
    pub mode: SaveMode,
    pub result: Result<(), ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct ServiceDeleted {
    pub result: Result<(), ApiError>,
}

/// Result of a row-level delete; `service_id` lets the apply system refetch
/// the open detail.
#[derive(Event, Debug, Clone)]
pub struct ServiceRowDeleted {
    pub service_id: String,
    pub result: Result<(), ApiError>,
}

// --- Users ---

#[derive(Event, Debug, Clone)]
pub struct RequestLoadUsers {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Event, Debug, Clone)]
pub struct RequestLoadUserDetail {
    pub id: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestCreateUser {
    pub payload: UserPayload,
}

#[derive(Event, Debug, Clone)]
pub struct UsersLoaded {
    pub result: Result<Page<User>, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct UserDetailLoaded {
    pub result: Result<User, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct UserCreated {
    pub result: Result<(), ApiError>,
}

// --- Reference data ---

#[derive(Event, Debug, Clone)]
pub struct RequestLoadServiceCategories;

#[derive(Event, Debug, Clone)]
pub struct RequestLoadStoreChoices;

#[derive(Event, Debug, Clone)]
pub struct ServiceCategoriesLoaded {
    pub result: Result<Vec<ServiceCategory>, ApiError>,
}

#[derive(Event, Debug, Clone)]
pub struct StoreChoicesLoaded {
    pub result: Result<Vec<IdName>, ApiError>,
}

// --- Image upload ---

/// Which form field receives an uploaded image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    StoreLogo,
    StoreBanner,
    StoreFrontIdentityCard,
    StoreBackIdentityCard,
}

#[derive(Event, Debug, Clone)]
pub struct RequestUploadImage {
    pub target: ImageTarget,
    pub path: PathBuf,
}

#[derive(Event, Debug, Clone)]
pub struct ImageUploaded {
    pub target: ImageTarget,
    pub result: Result<String, ApiError>,
}
