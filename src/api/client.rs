// src/api/client.rs
use std::sync::RwLock;

use reqwest::{multipart, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::{status_error, ApiError};
use super::types::*;

/// Page size used when a list is fetched to fill a dropdown rather than a
/// table.
const CHOICE_PAGE_SIZE: u32 = 100;

/// Async client for the marketplace backend.
///
/// Holds the base URL and the current bearer token; the token is swapped by
/// the session systems on login/logout and attached to every request while
/// present. All methods are `&self` and safe to call from background tasks.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn expect_ok(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }

    // --- Products ---

    pub async fn list_products(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/product")))
            .query(&[("pageNumber", page_number), ("pageSize", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductDetail, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(&format!("/product/{id}"))))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/product")))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/product/{id}"))))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/product/{id}"))))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- Stores ---

    pub async fn list_stores(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Store>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/store")))
            .query(&[("pageNumber", page_number), ("pageSize", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_store(&self, id: &str) -> Result<Store, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(&format!("/store/{id}"))))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_store(&self, payload: &Store) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/store")))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn update_store(&self, payload: &Store) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/store/{}", payload.id))))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_store(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/store/{id}"))))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    /// Store id/name pairs for dropdowns; fetches one oversized page.
    pub async fn list_store_choices(&self) -> Result<Vec<IdName>, ApiError> {
        let page = self.list_stores(1, CHOICE_PAGE_SIZE).await?;
        Ok(page
            .items
            .into_iter()
            .map(|s| IdName {
                id: s.id,
                name: s.name,
            })
            .collect())
    }

    // --- Services ---

    pub async fn list_services(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<ServiceSummary>, ApiError> {
        // This endpoint spells its paging parameters in PascalCase.
        let response = self
            .authorize(self.http.get(self.url("/services")))
            .query(&[("PageNumber", page_number), ("PageSize", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_service(&self, id: &str) -> Result<ServicePayload, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(&format!("/services/{id}"))))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_service(&self, payload: &ServicePayload) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/services")))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn update_service(&self, id: &str, payload: &ServicePayload) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/services/{id}"))))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/services/{id}"))))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_service_detail(
        &self,
        service_id: &str,
        detail_id: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(
                self.url(&format!("/services/{service_id}/service-details/{detail_id}")),
            ))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_service_step(
        &self,
        service_id: &str,
        step_id: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .authorize(
                self.http
                    .delete(self.url(&format!("/services/{service_id}/service-steps/{step_id}"))),
            )
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn list_service_categories(&self) -> Result<Vec<ServiceCategory>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/service-categories")))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- Users ---

    pub async fn list_users(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<User>, ApiError> {
        let response = self
            .authorize(self.http.get(self.url("/users")))
            .query(&[("pageNumber", page_number), ("pageSize", page_size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(&format!("/users/{id}"))))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url("/users")))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- Auth & profile ---

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
        let response = self
            .http
            .post(self.url("/Auth/login"))
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/Auth/register"))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn update_profile(&self, payload: &ProfileUpdate) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/Profile/{}", payload.id))))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn change_password(&self, payload: &PasswordChange) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.put(self.url("/Profile/update-password")))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- Uploads ---

    /// Posts a file as multipart form data and returns the hosted URL.
    pub async fn upload_image(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        let response = self
            .authorize(self.http.post(self.url("/Image")))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_tolerates_slashes() {
        let client = ApiClient::new("http://localhost:5225/api/v1/");
        assert_eq!(
            client.url("/product"),
            "http://localhost:5225/api/v1/product"
        );
        assert_eq!(client.url("services"), "http://localhost:5225/api/v1/services");
    }

    #[test]
    fn test_token_swap() {
        let client = ApiClient::new("http://localhost");
        assert!(client.token().is_none());
        client.set_token(Some("abc".into()));
        assert_eq!(client.token().as_deref(), Some("abc"));
        client.set_token(None);
        assert!(client.token().is_none());
    }
}
