// src/ui/state.rs
//! The one resource holding all transient UI state: which screen is open,
//! the editable form buffers, and popup flags.
//!
//! Buffers own their field values for the duration of one create/edit
//! session; nothing here survives a submit except what the backend persists.

use bevy::prelude::Resource;

use crate::api::types::{ProductDetail, ProductPayload, ServicePayload, Store, UserPayload};
use crate::marketplace::resources::ReferenceData;
use crate::pricing::{AttributeDimension, PriceCell};

use super::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Products,
    ProductAdd,
    ProductDetail,
    Stores,
    StoreAdd,
    StoreDetail,
    Services,
    ServiceAdd,
    ServiceDetail,
    Users,
    UserAdd,
    UserDetail,
}

impl Screen {
    /// The list screen an add/detail screen belongs to.
    pub fn section(self) -> Screen {
        match self {
            Screen::ProductAdd | Screen::ProductDetail => Screen::Products,
            Screen::StoreAdd | Screen::StoreDetail => Screen::Stores,
            Screen::ServiceAdd | Screen::ServiceDetail => Screen::Services,
            Screen::UserAdd | Screen::UserDetail => Screen::Users,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginFormBuffer {
    pub email_or_phone: String,
    pub password: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterFormBuffer {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone: String,
    pub error: Option<String>,
}

impl RegisterFormBuffer {
    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();
        validation::require_email("Email", &self.email, &mut errors);
        validation::require("Name", &self.name, &mut errors);
        validation::require("Phone", &self.phone, &mut errors);
        validation::require("Password", &self.password, &mut errors);
        if self.password != self.confirm_password {
            errors.push("Passwords do not match.".to_string());
        }
        self.error = errors.into_iter().next();
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileFormBuffer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub old_password: String,
    pub new_password: String,
    pub errors: Vec<String>,
}

/// Editable product fields plus the dimension/price-grid pair the matrix
/// synchronizer keeps consistent.
#[derive(Debug, Clone)]
pub struct ProductFormBuffer {
    pub id: Option<String>,
    pub name: String,
    pub product_code: String,
    pub category_id: String,
    pub brand_id: String,
    pub store_id: String,
    pub is_active: bool,
    pub description: String,
    pub views: u32,
    pub dimensions: Vec<AttributeDimension>,
    pub price_grid: Vec<PriceCell>,
    pub errors: Vec<String>,
}

impl Default for ProductFormBuffer {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            product_code: String::new(),
            category_id: String::new(),
            brand_id: String::new(),
            store_id: String::new(),
            is_active: true,
            description: String::new(),
            views: 0,
            dimensions: Vec::new(),
            price_grid: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl ProductFormBuffer {
    /// Seeds an edit buffer from the last-fetched detail. The detail response
    /// carries display names for category/brand/store, so ids are resolved
    /// against the reference lists; an unresolvable name leaves the id empty
    /// and validation asks for a re-selection.
    pub fn from_detail(detail: &ProductDetail, reference: &ReferenceData) -> Self {
        Self {
            id: Some(detail.id.clone()),
            name: detail.name.clone(),
            product_code: String::new(),
            category_id: ReferenceData::id_for_name(
                &reference.product_categories,
                &detail.category_name,
            )
            .unwrap_or_default()
            .to_string(),
            brand_id: ReferenceData::id_for_name(&reference.brands, &detail.brand_name)
                .unwrap_or_default()
                .to_string(),
            store_id: ReferenceData::id_for_name(&reference.store_choices, &detail.store_name)
                .unwrap_or_default()
                .to_string(),
            is_active: detail.is_active,
            description: detail.product_description.clone(),
            views: detail.views,
            dimensions: detail.product_types.clone(),
            price_grid: detail.product_prices.clone(),
            errors: Vec::new(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();
        validation::require("Product name", &self.name, &mut errors);
        if self.id.is_none() {
            validation::require("Product code", &self.product_code, &mut errors);
        }
        validation::require_choice("category", &self.category_id, &mut errors);
        validation::require_choice("brand", &self.brand_id, &mut errors);
        validation::require_choice("store", &self.store_id, &mut errors);
        for dimension in &self.dimensions {
            validation::require("Dimension name", &dimension.name, &mut errors);
            for option in &dimension.options {
                validation::require("Option name", &option.name, &mut errors);
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            id: self.id.clone(),
            product_category_id: self.category_id.clone(),
            name: self.name.clone(),
            is_active: self.is_active,
            product_code: self.product_code.clone(),
            product_description: self.description.clone(),
            views: self.views,
            brand_id: self.brand_id.clone(),
            store_id: self.store_id.clone(),
            product_types: self.dimensions.clone(),
            product_prices: self.price_grid.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreFormBuffer {
    pub store: Store,
    pub errors: Vec<String>,
}

impl StoreFormBuffer {
    pub fn from_store(store: &Store) -> Self {
        Self {
            store: store.clone(),
            errors: Vec::new(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();
        validation::require("Store name", &self.store.name, &mut errors);
        validation::require("Hotline", &self.store.hotline, &mut errors);
        validation::require("Business type", &self.store.business_type, &mut errors);
        self.errors = errors;
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFormBuffer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub errors: Vec<String>,
}

impl UserFormBuffer {
    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();
        validation::require("Name", &self.name, &mut errors);
        validation::require_email("Email", &self.email, &mut errors);
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// Accumulated wizard state. `draft` grows step by step and is submitted
/// whole from the last step.
#[derive(Debug, Clone, Default)]
pub struct WizardBuffer {
    pub step: usize,
    pub draft: ServicePayload,
    /// Set once the open/restore decision has run for this visit.
    pub started: bool,
    pub errors: Vec<String>,
}

impl WizardBuffer {
    pub fn validate_overview(&mut self) -> bool {
        let mut errors = Vec::new();
        validation::require("Service name", &self.draft.name, &mut errors);
        validation::require_choice("store", &self.draft.store_id, &mut errors);
        validation::require_choice("service category", &self.draft.service_category_id, &mut errors);
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn validate_details(&mut self) -> bool {
        let mut errors = Vec::new();
        for row in &self.draft.pet_service_details {
            validation::require("Detail name", &row.name, &mut errors);
            validation::require_ordered_band(
                "Pet weight",
                row.pet_weight_min,
                row.pet_weight_max,
                &mut errors,
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn validate_steps(&mut self) -> bool {
        let mut errors = Vec::new();
        for row in &self.draft.pet_service_steps {
            validation::require("Step name", &row.name, &mut errors);
        }
        self.errors = errors;
        self.errors.is_empty()
    }
}

/// What the confirmation popup is about to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteKind {
    Product { id: String },
    Store { id: String },
    Service { id: String },
    ServiceDetailRow { service_id: String, detail_id: String },
    ServiceStepRow { service_id: String, step_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    /// Human-readable label shown in the prompt.
    pub label: String,
    pub kind: DeleteKind,
}

#[derive(Resource, Debug, Default)]
pub struct AdminWindowState {
    pub screen: Screen,

    pub login_form: LoginFormBuffer,
    pub register_form: RegisterFormBuffer,
    pub profile_form: ProfileFormBuffer,
    pub show_profile_popup: bool,
    pub show_settings_popup: bool,
    /// An auth/profile request is in flight.
    pub auth_busy: bool,

    pub product_form: ProductFormBuffer,
    pub product_edit: bool,
    pub store_form: StoreFormBuffer,
    pub store_edit: bool,
    pub user_form: UserFormBuffer,
    pub wizard: WizardBuffer,
    pub service_form: ServicePayload,
    pub service_form_errors: Vec<String>,
    pub service_edit: bool,

    /// A create/update/delete request is in flight.
    pub submitting: bool,

    pub show_delete_confirm_popup: bool,
    pub delete_target: Option<DeleteTarget>,
}

impl AdminWindowState {
    /// Opens the confirmation popup for a destructive action.
    pub fn confirm_delete(&mut self, label: impl Into<String>, kind: DeleteKind) {
        self.delete_target = Some(DeleteTarget {
            label: label.into(),
            kind,
        });
        self.show_delete_confirm_popup = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::IdName;
    use crate::pricing::OptionValue;

    fn reference_with_store() -> ReferenceData {
        let mut reference = ReferenceData::default();
        reference.store_choices = vec![IdName {
            id: "store-1".into(),
            name: "Store 1".into(),
        }];
        reference
    }

    fn sample_detail() -> ProductDetail {
        ProductDetail {
            id: "p1".into(),
            category_name: "Phụ Kiện thú cưng".into(),
            name: "Collar".into(),
            is_active: true,
            product_description: "Leather collar".into(),
            views: 7,
            brand_name: "Royal Canin".into(),
            store_name: "Store 1".into(),
            product_types: vec![AttributeDimension {
                name: "Size".into(),
                options: vec![OptionValue::new("S"), OptionValue::new("M")],
            }],
            product_prices: vec![PriceCell {
                price: 100.0,
                inventory: 5,
                dim1_label: "S".into(),
                dim2_label: String::new(),
            }],
            product_images: Vec::new(),
        }
    }

    #[test]
    fn test_from_detail_resolves_ids_from_names() {
        let reference = reference_with_store();
        let buffer = ProductFormBuffer::from_detail(&sample_detail(), &reference);
        assert_eq!(buffer.id.as_deref(), Some("p1"));
        assert_eq!(buffer.category_id, "8858B173-9D33-4D4A-B7E5-02A1E1AF53B3");
        assert_eq!(buffer.brand_id, "E9534604-C257-4CC5-9831-03C4E6B1C2FE");
        assert_eq!(buffer.store_id, "store-1");
        assert_eq!(buffer.price_grid.len(), 1);
    }

    #[test]
    fn test_from_detail_unknown_name_leaves_id_empty() {
        let reference = ReferenceData::default();
        let mut detail = sample_detail();
        detail.store_name = "Unknown Store".into();
        let mut buffer = ProductFormBuffer::from_detail(&detail, &reference);
        assert!(buffer.store_id.is_empty());
        assert!(!buffer.validate());
    }

    #[test]
    fn test_edit_cancel_restores_last_fetched_values() {
        let reference = reference_with_store();
        let detail = sample_detail();
        let mut buffer = ProductFormBuffer::from_detail(&detail, &reference);
        buffer.name = "Edited away".into();
        buffer.price_grid[0].price = 1.0;

        // Cancel re-seeds the buffer from the unchanged server detail.
        buffer = ProductFormBuffer::from_detail(&detail, &reference);
        assert_eq!(buffer.name, "Collar");
        assert_eq!(buffer.price_grid[0].price, 100.0);
    }

    #[test]
    fn test_product_form_validation_and_payload() {
        let mut buffer = ProductFormBuffer::default();
        assert!(!buffer.validate());
        assert!(!buffer.errors.is_empty());

        buffer.name = "Collar".into();
        buffer.product_code = "C-01".into();
        buffer.category_id = "cat".into();
        buffer.brand_id = "b".into();
        buffer.store_id = "s".into();
        buffer.dimensions = vec![AttributeDimension {
            name: "Size".into(),
            options: vec![OptionValue::new("S")],
        }];
        crate::pricing::sync_price_grid(&buffer.dimensions, &mut buffer.price_grid);
        assert!(buffer.validate());

        let payload = buffer.to_payload();
        assert!(payload.id.is_none());
        assert_eq!(payload.product_prices.len(), 1);
        assert_eq!(payload.product_types.len(), 1);
    }

    #[test]
    fn test_product_form_rejects_unnamed_option() {
        let mut buffer = ProductFormBuffer {
            name: "Collar".into(),
            product_code: "C-01".into(),
            category_id: "cat".into(),
            brand_id: "b".into(),
            store_id: "s".into(),
            dimensions: vec![AttributeDimension {
                name: "Size".into(),
                options: vec![OptionValue::new("")],
            }],
            ..Default::default()
        };
        assert!(!buffer.validate());
    }

    #[test]
    fn test_register_form_password_mismatch() {
        let mut form = RegisterFormBuffer {
            email: "a@b.vn".into(),
            password: "one".into(),
            confirm_password: "two".into(),
            name: "Ana".into(),
            phone: "090".into(),
            error: None,
        };
        assert!(!form.validate());
        assert!(form.error.as_deref().unwrap().contains("match"));
        form.confirm_password = "one".into();
        assert!(form.validate());
    }

    #[test]
    fn test_wizard_detail_band_validation() {
        let mut wizard = WizardBuffer::default();
        wizard.draft.pet_service_details.push(crate::api::types::ServiceDetailRow {
            id: None,
            pet_weight_min: 10.0,
            pet_weight_max: 5.0,
            amount: 100.0,
            pet_type: true,
            description: String::new(),
            name: "Band".into(),
        });
        assert!(!wizard.validate_details());
        wizard.draft.pet_service_details[0].pet_weight_max = 20.0;
        assert!(wizard.validate_details());
    }
}
