//! Wire models mirrored from the backend. Field names on the wire are the
//! backend's (Spanish, Mongo-style `_id`); Rust names are ours.

use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated account as returned by `/api/auth/*` and kept in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "uid", alias = "id", default)]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    pub fn has_object_id(&self) -> bool {
        is_object_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    /// `None` when the backend sent no usable price.
    #[serde(
        rename = "precio",
        default,
        deserialize_with = "price_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(rename = "disponible", default)]
    pub available: bool,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "publicador", default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

impl Listing {
    pub fn publisher_name(&self) -> Option<&str> {
        self.publisher.as_ref().and_then(Publisher::name)
    }
}

/// The listing owner: populated (`{ _id, nombre }`) or a bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Publisher {
    Embedded {
        #[serde(rename = "_id", default)]
        id: String,
        #[serde(rename = "nombre", default)]
        name: Option<String>,
    },
    Id(String),
}

impl Publisher {
    pub fn name(&self) -> Option<&str> {
        match self {
            Publisher::Embedded { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
            Publisher::Id(_) => None,
        }
    }
}

/// Image picked in the listing form, sent as the `imagen` multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated listing form content. `price` is forwarded as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub description: String,
    pub location: String,
    pub price: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReserveRequest<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingsEnvelope {
    #[serde(default)]
    pub parkings: Option<Vec<Listing>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingEnvelope {
    pub parking: Listing,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthEnvelope {
    pub user: User,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Mongo object id: exactly 24 hex digits.
pub fn is_object_id(raw: &str) -> bool {
    raw.len() == 24 && raw.chars().all(|c| c.is_ascii_hexdigit())
}

/// Numbers and numeric strings are prices; `null`, blanks and anything else
/// decode as `None` so one bad record doesn't sink a whole collection.
fn price_from_wire<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let price = match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Number(n)) => Some(n),
        Some(Wire::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Wire::Other(_)) | None => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_accepts_populated_publisher_and_numeric_price() {
        let listing: Listing = serde_json::from_value(json!({
            "_id": "65a1b2c3d4e5f6a7b8c9d0e1",
            "descripcion": "Covered spot",
            "ubicacion": "Av. Central 120",
            "precio": 15,
            "disponible": true,
            "imagen": "/uploads/spot.jpg",
            "publicador": { "_id": "65a1b2c3d4e5f6a7b8c9d0ff", "nombre": "Ana" }
        }))
        .unwrap();

        assert_eq!(listing.price, Some(15.0));
        assert!(listing.available);
        assert_eq!(listing.publisher_name(), Some("Ana"));
    }

    #[test]
    fn listing_accepts_bare_publisher_id_and_text_price() {
        let listing: Listing = serde_json::from_value(json!({
            "_id": "abc",
            "descripcion": "Open lot",
            "ubicacion": "Calle 9",
            "precio": "7.5",
            "publicador": "65a1b2c3d4e5f6a7b8c9d0ff"
        }))
        .unwrap();

        assert_eq!(listing.price, Some(7.5));
        assert!(!listing.available);
        assert_eq!(listing.image, None);
        assert_eq!(listing.publisher_name(), None);
        assert_eq!(
            listing.publisher,
            Some(Publisher::Id("65a1b2c3d4e5f6a7b8c9d0ff".into()))
        );
    }

    #[test]
    fn unusable_prices_decode_as_missing() {
        for precio in [json!(null), json!(""), json!("cheap"), json!({ "amount": 3 })] {
            let listing: Listing =
                serde_json::from_value(json!({ "_id": "abc", "precio": precio })).unwrap();
            assert_eq!(listing.price, None, "precio = {precio}");
        }

        let listing: Listing = serde_json::from_value(json!({ "_id": "abc" })).unwrap();
        assert_eq!(listing.price, None);
    }

    #[test]
    fn collection_survives_a_record_without_price() {
        let envelope: ListingsEnvelope = serde_json::from_value(json!({ "parkings": [
            { "_id": "a", "precio": 10 },
            { "_id": "b", "precio": null },
            { "_id": "c" }
        ]}))
        .unwrap();
        let prices: Vec<_> = envelope
            .parkings
            .unwrap_or_default()
            .iter()
            .map(|l| l.price)
            .collect();
        assert_eq!(prices, [Some(10.0), None, None]);
    }

    #[test]
    fn user_accepts_uid_alias_and_missing_token() {
        let user: User = serde_json::from_value(json!({
            "uid": "65a1b2c3d4e5f6a7b8c9d0e1",
            "nombre": "Luis",
            "email": "luis@example.com"
        }))
        .unwrap();
        assert_eq!(user.id, "65a1b2c3d4e5f6a7b8c9d0e1");
        assert!(user.token.is_none());
        assert!(user.has_object_id());
    }

    #[test]
    fn object_id_check() {
        assert!(is_object_id("65a1b2c3d4e5f6a7b8c9d0e1"));
        assert!(!is_object_id("65a1b2c3d4e5f6a7b8c9d0e"));
        assert!(!is_object_id("65a1b2c3d4e5f6a7b8c9d0zz"));
        assert!(!is_object_id(""));
    }

    #[test]
    fn register_request_uses_backend_field_names() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body["nombre"], "Ana");
        assert!(body.get("name").is_none());
    }
}
