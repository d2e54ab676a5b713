// src/api/types.rs
//! Request/response contracts for the marketplace backend.
//!
//! Wire names are camelCase throughout; fields the backend may omit carry
//! serde defaults so a sparse response still decodes.

use serde::{Deserialize, Serialize};

use crate::pricing::{AttributeDimension, PriceCell};

/// Paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_items_count: u64,
    pub page_size: u32,
    pub total_pages_count: u32,
    pub page_index: u32,
    pub next: bool,
    pub previous: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Minimal id/name pair used by dropdown choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdName {
    pub id: String,
    pub name: String,
}

// --- Products ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub product_code: String,
    pub brand_name: String,
    pub store_name: String,
    pub category_name: String,
    pub min_prices: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub category_name: String,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub product_description: String,
    pub views: u32,
    pub brand_name: String,
    pub store_name: String,
    #[serde(rename = "productTypes", default)]
    pub product_types: Vec<AttributeDimension>,
    #[serde(rename = "productPrices", default)]
    pub product_prices: Vec<PriceCell>,
    #[serde(default)]
    pub product_images: Vec<ProductImage>,
}

/// Create/update payload. `id` is present only on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_category_id: String,
    pub name: String,
    pub is_active: bool,
    pub product_code: String,
    #[serde(default)]
    pub product_description: String,
    pub views: u32,
    pub brand_id: String,
    pub store_id: String,
    #[serde(rename = "productTypes")]
    pub product_types: Vec<AttributeDimension>,
    #[serde(rename = "productPrices")]
    pub product_prices: Vec<PriceCell>,
}

// --- Stores ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hotline: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub banner_url: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub business_address_province: String,
    #[serde(default)]
    pub business_address_district: String,
    #[serde(default)]
    pub business_address_ward: String,
    #[serde(default)]
    pub business_address_street: String,
    #[serde(default)]
    pub fax_email: String,
    #[serde(default)]
    pub fax_code: String,
    #[serde(default)]
    pub front_identity_card_url: String,
    #[serde(default)]
    pub back_identity_card_url: String,
}

// --- Services ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub store_id: String,
    #[serde(default)]
    pub estimated_time: String,
    pub service_category_id: String,
    pub status: bool,
}

/// One weight-band row of a service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailRow {
    #[serde(default)]
    pub id: Option<String>,
    pub pet_weight_min: f64,
    pub pet_weight_max: f64,
    pub amount: f64,
    /// `true` for dogs, `false` for cats, per the backend's convention.
    pub pet_type: bool,
    #[serde(default)]
    pub description: String,
    pub name: String,
}

/// One ordered step of a service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStepRow {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub priority: u32,
}

/// Full service shape: fetched on detail screens and submitted by the
/// creation wizard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub store_id: String,
    #[serde(default)]
    pub estimated_time: String,
    pub service_category_id: String,
    pub status: bool,
    #[serde(default)]
    pub pet_service_details: Vec<ServiceDetailRow>,
    #[serde(default)]
    pub pet_service_steps: Vec<ServiceStepRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
}

// --- Users ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

// --- Auth & profile ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email_or_phone: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSuccess {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub id: String,
    pub old_password: String,
    pub new_password: String,
}

// --- Uploads ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_decodes() {
        let json = r#"{
            "totalItemsCount": 42,
            "pageSize": 10,
            "totalPagesCount": 5,
            "pageIndex": 2,
            "next": true,
            "previous": true,
            "items": [{"id": "u1", "name": "Ana", "email": "a@x.vn", "phoneNumber": "090"}]
        }"#;
        let page: Page<User> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_items_count, 42);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Ana");
    }

    #[test]
    fn test_page_envelope_missing_items_decodes_empty() {
        let json = r#"{
            "totalItemsCount": 0,
            "pageSize": 10,
            "totalPagesCount": 0,
            "pageIndex": 1,
            "next": false,
            "previous": false
        }"#;
        let page: Page<User> = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_product_payload_wire_shape() {
        let payload = ProductPayload {
            id: None,
            product_category_id: "cat".into(),
            name: "Collar".into(),
            is_active: true,
            product_code: "C-01".into(),
            product_description: String::new(),
            views: 0,
            brand_id: "b".into(),
            store_id: "s".into(),
            product_types: vec![],
            product_prices: vec![],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["productCategoryId"], "cat");
        assert!(json["productTypes"].as_array().unwrap().is_empty());
        assert!(json["productPrices"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_service_payload_round_trip_keeps_rows() {
        let payload = ServicePayload {
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
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ServicePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
        assert!(json.contains("petServiceDetails"));
        assert!(json.contains("petServiceSteps"));
    }
}
