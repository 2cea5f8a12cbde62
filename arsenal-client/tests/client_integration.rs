// arsenal-client/tests/client_integration.rs
// Exercises the client against an in-process axum backend

use arsenal_client::{BookingSource, ClientConfig, ClientError, Session, StationSource};
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;

const TOKEN: &str = "good-token";

fn station(id: i64, status: &str, category: i64) -> Value {
    json!({
        "id": id,
        "label": format!("PC-{id}"),
        "slug": format!("pc-{id}"),
        "specs": "i5, GTX 1660, 16GB",
        "status": status,
        "categoryPCResponse": {"id": category, "label": "Gama baja", "slug": "gama-baja"}
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn app() -> Router {
    Router::new()
        .route(
            "/api/categories-pc/all",
            get(|| async {
                Json(json!([
                    {"id": 1, "slug": "gama-baja", "label": "Gama baja", "price": 2.5},
                    {"id": 2, "slug": "vip", "label": "VIP", "price": 6}
                ]))
            }),
        )
        .route(
            "/api/pcs/all",
            get(|| async { Json(json!([station(10, "AVAILABLE", 1), station(11, "OCCUPIED", 1)])) }),
        )
        .route(
            "/api/pcs",
            get(|Query(q): Query<HashMap<String, u32>>| async move {
                Json(json!({
                    "data": [station(10, "AVAILABLE", 1)],
                    "page": q.get("page").copied().unwrap_or(0),
                    "size": q.get("size").copied().unwrap_or(0),
                    "totalElements": 2
                }))
            }),
        )
        .route(
            "/api/pcs/{slug}",
            get(|Path(slug): Path<String>| async move {
                if slug == "pc-10" {
                    Ok(Json(station(10, "AVAILABLE", 1)))
                } else if slug == "gone" {
                    Err((StatusCode::NOT_FOUND, "no such pc".to_string()))
                } else {
                    Err((
                        StatusCode::NOT_FOUND,
                        json!({"status": 404, "error": "Not Found", "message": "PC not found"}).to_string(),
                    ))
                }
            }),
        )
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    Ok(Json(json!({
                        "token": TOKEN,
                        "expiresAt": "2030-01-01T00:00:00",
                        "user": {"id": 7, "name": "Ana", "username": "ana", "email": "ana@example.com", "role": "CLIENT"}
                    })))
                } else {
                    Err(StatusCode::UNAUTHORIZED)
                }
            }),
        )
        .route(
            "/api/auth/verify",
            get(|headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                Ok(Json(json!({"id": 7, "name": "Ana", "username": "ana", "role": "CLIENT"})))
            }),
        )
        .route(
            "/api/bookings/my-active",
            get(|headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                Ok(Json(json!([{
                    "id": 1,
                    "hours": 2,
                    "pc": station(11, "OCCUPIED", 1),
                    "createdAt": "2024-05-01T18:00:00"
                }])))
            }),
        )
}

async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_categories_and_stations() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let categories = client.fetch_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].slug, "gama-baja");

    let stations = client.fetch_stations().await.unwrap();
    let ids: Vec<i64> = stations.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(stations[1].category_id(), Some(1));
}

#[tokio::test]
async fn test_login_then_fetch_bookings() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    // Anonymous: empty, no error
    assert!(client.fetch_my_active_bookings().await.unwrap().is_empty());

    let auth = client.login("ana", "secret").await.unwrap();
    assert_eq!(auth.user.id, 7);
    assert!(client.session().is_logged_in());

    let bookings = client.fetch_my_active_bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].station_id(), 11);
}

#[tokio::test]
async fn test_verify_restores_profile_for_stored_token() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base)
        .with_token(TOKEN)
        .build_http_client()
        .unwrap();
    assert!(client.session().user().is_none());

    let user = client.verify().await.unwrap();
    assert_eq!(user.username, "ana");
    assert_eq!(client.session().user().map(|u| u.id), Some(7));
}

#[tokio::test]
async fn test_bad_login_is_unauthorized() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let err = client.login("ana", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert!(!client.session().is_logged_in());
}

#[tokio::test]
async fn test_unauthorized_clears_shared_session() {
    let base = spawn_backend().await;
    let session = Session::with_token("stale-token");
    let client = ClientConfig::new(base)
        .build_http_client()
        .unwrap()
        .with_session(session.clone());

    let err = client.fetch_my_active_bookings().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_not_found_variants() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let pc = client.find_station("pc-10").await.unwrap();
    assert_eq!(pc.id, 10);

    match client.find_station("missing").await.unwrap_err() {
        ClientError::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "PC not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client.find_station("gone").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_stations_page_sends_query() {
    let base = spawn_backend().await;
    let client = ClientConfig::new(base).build_http_client().unwrap();

    let page = client.stations_page(1, 1).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 1);
    assert_eq!(page.total_pages(), 2);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_unreachable_server() {
    // Grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{addr}"))
        .with_timeout(2)
        .build_http_client()
        .unwrap();
    let err = client.fetch_stations().await.unwrap_err();
    assert!(err.is_unreachable());
    assert_eq!(err.status(), None);
}
