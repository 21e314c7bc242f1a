//! HTTP client for the ParkAll backend.
//!
//! One method per endpoint. Non-2xx responses become [`ApiError::Status`]
//! carrying the backend `message` when the body has one; nothing is retried.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    is_object_id, AuthEnvelope, ImageUpload, Listing, ListingDraft, ListingEnvelope,
    ListingsEnvelope, LoginRequest, MessageEnvelope, RegisterRequest, ReserveRequest, User,
};

#[derive(Debug, Clone)]
pub struct ParkAllClient {
    http: Client,
    config: ApiConfig,
}

impl ParkAllClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn image_url(&self, path: &str) -> String {
        self.config.image_url(path)
    }

    /// `GET /api/parking/list`
    pub async fn list_listings(&self) -> Result<Vec<Listing>, ApiError> {
        let url = self.config.endpoint("/api/parking/list");
        debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        let envelope: ListingsEnvelope = decode(resp).await?;
        Ok(envelope.parkings.unwrap_or_default())
    }

    /// `GET /api/parking/user/{id}/parkings`. The id must be a Mongo object id.
    pub async fn listings_by_owner(&self, user_id: &str) -> Result<Vec<Listing>, ApiError> {
        if !is_object_id(user_id) {
            return Err(ApiError::InvalidUserId(user_id.to_string()));
        }
        let url = self
            .config
            .endpoint(&format!("/api/parking/user/{user_id}/parkings"));
        debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        let envelope: ListingsEnvelope = decode(resp).await?;
        Ok(envelope.parkings.unwrap_or_default())
    }

    /// `POST /api/parking/create` (multipart). Returns the backend message.
    pub async fn create_listing(
        &self,
        draft: &ListingDraft,
        publisher_id: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = self.config.endpoint("/api/parking/create");
        let form = listing_form(draft, Some(publisher_id))?;
        let resp = self.http.post(&url).multipart(form).send().await?;
        let envelope: MessageEnvelope = decode(resp).await?;
        info!("Listing created for publisher {publisher_id}");
        Ok(envelope.message)
    }

    /// `PUT /api/parking/edit/{id}` (multipart). Returns the updated listing.
    pub async fn edit_listing(
        &self,
        listing_id: &str,
        draft: &ListingDraft,
    ) -> Result<Listing, ApiError> {
        let url = self
            .config
            .endpoint(&format!("/api/parking/edit/{listing_id}"));
        let form = listing_form(draft, None)?;
        let resp = self.http.put(&url).multipart(form).send().await?;
        let envelope: ListingEnvelope = decode(resp).await?;
        info!("Listing {listing_id} updated");
        Ok(envelope.parking)
    }

    /// `DELETE /api/parking/delete/{id}` authorized with the session token.
    pub async fn delete_listing(
        &self,
        listing_id: &str,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self
            .config
            .endpoint(&format!("/api/parking/delete/{listing_id}"));
        let mut request = self.http.delete(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let resp = request.send().await?;
        let _: MessageEnvelope = decode(resp).await?;
        info!("Listing {listing_id} deleted");
        Ok(())
    }

    /// `POST /api/parking/reserve/{id}` with `{ "userId": ... }`.
    pub async fn reserve_listing(
        &self,
        listing_id: &str,
        user_id: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = self
            .config
            .endpoint(&format!("/api/parking/reserve/{listing_id}"));
        let resp = self
            .http
            .post(&url)
            .json(&ReserveRequest { user_id })
            .send()
            .await?;
        let envelope: MessageEnvelope = decode(resp).await?;
        info!("Listing {listing_id} reserved by {user_id}");
        Ok(envelope.message)
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let url = self.config.endpoint("/api/auth/login");
        let resp = self.http.post(&url).json(request).send().await?;
        let envelope: AuthEnvelope = decode(resp).await?;
        Ok(envelope.user)
    }

    /// `POST /api/auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let url = self.config.endpoint("/api/auth/register");
        let resp = self.http.post(&url).json(request).send().await?;
        let envelope: AuthEnvelope = decode(resp).await?;
        Ok(envelope.user)
    }
}

/// Text fields first, file last: multer-style backends only see fields that
/// arrive before the file part.
fn listing_form(draft: &ListingDraft, publisher_id: Option<&str>) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("descripcion", draft.description.clone())
        .text("ubicacion", draft.location.clone())
        .text("precio", draft.price.clone());
    if let Some(publisher_id) = publisher_id {
        form = form.text("publicadorId", publisher_id.to_string());
    }
    if let Some(image) = draft.image.as_ref() {
        form = form.part("imagen", image_part(image)?);
    }
    Ok(form)
}

fn image_part(image: &ImageUpload) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)?;
    Ok(part)
}

/// Split success from failure and decode the JSON body of either.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let mut body = resp.text().await?;
    if body.trim().is_empty() {
        body = "{}".to_string();
    }

    if !status.is_success() {
        let message = serde_json::from_str::<MessageEnvelope>(&body)
            .unwrap_or_default()
            .message;
        warn!(
            "Backend rejected request with {status}: {}",
            message.as_deref().unwrap_or("<no message>")
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(ApiError::from)
}
