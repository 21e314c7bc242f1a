//! Client behaviour against an in-process fake backend.

use api::{ApiConfig, ApiError, ImageUpload, ListingDraft, LoginRequest, ParkAllClient};
use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

const OWNER_ID: &str = "65a1b2c3d4e5f6a7b8c9d0e1";

async fn spawn_backend(router: Router) -> ParkAllClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ParkAllClient::new(ApiConfig::new(format!("http://{addr}/")))
}

fn draft(image: Option<ImageUpload>) -> ListingDraft {
    ListingDraft {
        description: "Covered spot".into(),
        location: "Av. Central 120".into(),
        price: "12.5".into(),
        image,
    }
}

async fn multipart_fields(mut multipart: Multipart) -> Vec<(String, Option<String>)> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        field.bytes().await.unwrap();
        fields.push((name, file_name));
    }
    fields
}

#[tokio::test]
async fn empty_collection_is_not_an_error() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/list",
        get(|| async { Json(json!({ "parkings": [] })) }),
    ))
    .await;

    let listings = client.list_listings().await.unwrap();
    assert!(listings.is_empty());
}

#[tokio::test]
async fn missing_collection_field_reads_as_empty() {
    let client = spawn_backend(Router::new().route(
        &format!("/api/parking/user/{OWNER_ID}/parkings"),
        get(|| async { Json(json!({ "message": "sin resultados" })) }),
    ))
    .await;

    let listings = client.listings_by_owner(OWNER_ID).await.unwrap();
    assert!(listings.is_empty());
}

#[tokio::test]
async fn listings_are_decoded() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/list",
        get(|| async {
            Json(json!({ "parkings": [
                { "_id": "a1", "descripcion": "Lot A", "ubicacion": "Norte", "precio": 10, "disponible": true },
                { "_id": "b2", "descripcion": "Lot B", "ubicacion": "Sur", "precio": "8", "disponible": false,
                  "publicador": { "_id": OWNER_ID, "nombre": "Ana" } }
            ]}))
        }),
    ))
    .await;

    let listings = client.list_listings().await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[1].publisher_name(), Some("Ana"));
    assert_eq!(listings[1].price, Some(8.0));
}

#[tokio::test]
async fn record_without_usable_price_keeps_the_rest() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/list",
        get(|| async {
            Json(json!({ "parkings": [
                { "_id": "a1", "descripcion": "Lot A", "ubicacion": "Norte", "precio": 10, "disponible": true },
                { "_id": "b2", "descripcion": "Lot B", "ubicacion": "Sur", "precio": null },
                { "_id": "c3", "descripcion": "Lot C", "ubicacion": "Este" },
                { "_id": "d4", "descripcion": "Lot D", "ubicacion": "Oeste", "precio": "" }
            ]}))
        }),
    ))
    .await;

    let listings = client.list_listings().await.unwrap();
    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["a1", "b2", "c3", "d4"]);
    assert_eq!(listings[0].price, Some(10.0));
    assert!(listings[1..].iter().all(|l| l.price.is_none()));
}

#[tokio::test]
async fn server_error_keeps_backend_message() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/list",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "db down" })),
            )
        }),
    ))
    .await;

    let err = client.list_listings().await.unwrap_err();
    match err {
        ApiError::Status { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("db down"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ParkAllClient::new(ApiConfig::new(format!("http://{addr}")));
    let err = client.list_listings().await.unwrap_err();
    assert!(err.is_network(), "expected network error, got {err:?}");
}

#[tokio::test]
async fn invalid_owner_id_is_rejected_before_any_request() {
    let client = ParkAllClient::new(ApiConfig::new("http://127.0.0.1:9"));
    let err = client.listings_by_owner("not-an-id").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUserId(_)));
}

#[tokio::test]
async fn create_sends_multipart_with_publisher_and_image() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/create",
        post(|multipart: Multipart| async move {
            let fields = multipart_fields(multipart).await;
            let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(
                names,
                ["descripcion", "ubicacion", "precio", "publicadorId", "imagen"]
            );
            let image = fields.iter().find(|(n, _)| n == "imagen").unwrap();
            assert_eq!(image.1.as_deref(), Some("spot.png"));
            (
                StatusCode::CREATED,
                Json(json!({ "message": "Estacionamiento creado exitosamente" })),
            )
        }),
    ))
    .await;

    let image = ImageUpload {
        file_name: "spot.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };
    let message = client
        .create_listing(&draft(Some(image)), OWNER_ID)
        .await
        .unwrap();
    assert_eq!(
        message.as_deref(),
        Some("Estacionamiento creado exitosamente")
    );
}

#[tokio::test]
async fn edit_returns_the_updated_listing() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/edit/{id}",
        put(|Path(id): Path<String>, multipart: Multipart| async move {
            let fields = multipart_fields(multipart).await;
            assert!(fields.iter().all(|(n, _)| n != "publicadorId"));
            Json(json!({ "parking": {
                "_id": id, "descripcion": "Covered spot", "ubicacion": "Av. Central 120",
                "precio": 12.5, "disponible": true
            }}))
        }),
    ))
    .await;

    let updated = client.edit_listing("a1", &draft(None)).await.unwrap();
    assert_eq!(updated.id, "a1");
    assert_eq!(updated.price, Some(12.5));
}

#[tokio::test]
async fn delete_sends_bearer_token() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/delete/{id}",
        delete(|headers: HeaderMap| async move {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer tok-123") => (StatusCode::OK, Json(json!({ "message": "ok" }))),
                _ => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "token requerido" })),
                ),
            }
        }),
    ))
    .await;

    client.delete_listing("a1", Some("tok-123")).await.unwrap();

    let err = client.delete_listing("a1", None).await.unwrap_err();
    assert_eq!(err.backend_message(), Some("token requerido"));
}

#[tokio::test]
async fn reserve_posts_user_id_and_surfaces_rejection() {
    let client = spawn_backend(Router::new().route(
        "/api/parking/reserve/{id}",
        post(|Path(id): Path<String>, Json(body): Json<Value>| async move {
            if id == "taken" {
                return (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "Ya está reservado" })),
                );
            }
            assert_eq!(body["userId"], OWNER_ID);
            (StatusCode::OK, Json(json!({ "message": "Reserva creada" })))
        }),
    ))
    .await;

    let ok = client.reserve_listing("free", OWNER_ID).await.unwrap();
    assert_eq!(ok.as_deref(), Some("Reserva creada"));

    let err = client.reserve_listing("taken", OWNER_ID).await.unwrap_err();
    assert_eq!(err.backend_message(), Some("Ya está reservado"));
}

#[tokio::test]
async fn login_returns_the_user_record() {
    let client = spawn_backend(Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            if body["password"] != "secret" {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Credenciales incorrectas" })),
                );
            }
            (
                StatusCode::OK,
                Json(json!({ "user": {
                    "_id": OWNER_ID, "nombre": "Ana", "email": body["email"], "token": "tok-123"
                }})),
            )
        }),
    ))
    .await;

    let user = client
        .login(&LoginRequest {
            email: "ana@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.token.as_deref(), Some("tok-123"));

    let err = client
        .login(&LoginRequest {
            email: "ana@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
}
