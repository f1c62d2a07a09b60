use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use fleet_management::config::{DatabaseConfig, EnvironmentConfig, UploadLimits};
use fleet_management::database::DatabaseConnection;
use fleet_management::{create_app, AppState};

struct TestApp {
    router: Router,
    pool: SqlitePool,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    bytes: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        if self.bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&self.bytes).unwrap()
        }
    }
}

async fn create_test_app_with(config: EnvironmentConfig) -> TestApp {
    let connection = DatabaseConnection::new(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    let pool = connection.pool().clone();
    TestApp {
        router: create_app(AppState::new(pool.clone(), config)),
        pool,
    }
}

async fn create_test_app() -> TestApp {
    create_test_app_with(EnvironmentConfig::default()).await
}

impl TestApp {
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse {
            status,
            headers,
            bytes,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.request(request).await
    }

    async fn create_driver(&self, payload: Value) -> Value {
        let response = self.send(Method::POST, "/drivers", Some(payload)).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()
    }

    async fn list(&self) -> Vec<Value> {
        let response = self.send(Method::GET, "/drivers", None).await;
        assert_eq!(response.status, StatusCode::OK);
        response.json().as_array().unwrap().clone()
    }
}

fn driver_payload(name: &str) -> Value {
    json!({
        "name": name,
        "cpf": "12345678901",
        "cnhNumber": "10987654321",
        "cnhCategory": "A,B",
        "phone": "11987654321",
        "status": "Active"
    })
}

fn without_id(mut value: Value) -> Value {
    value.as_object_mut().unwrap().remove("id");
    value
}

const BOUNDARY: &str = "fleet-test-boundary";

fn multipart_request(uri: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app().await;
    let response = app.send(Method::GET, "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    let app = create_test_app().await;
    let payload = driver_payload("Jo Silva");

    let response = app.send(Method::POST, "/drivers", Some(payload.clone())).await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        &format!("/drivers/{}", id)
    );

    let fetched = app.send(Method::GET, &format!("/drivers/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);
    assert_eq!(without_id(fetched.json()), payload);
}

#[tokio::test]
async fn test_create_ignores_body_id_and_defaults_status() {
    let app = create_test_app().await;
    let mut payload = without_id(driver_payload("Jo Silva"));
    payload["id"] = json!(999);
    payload.as_object_mut().unwrap().remove("status");

    let created = app.create_driver(payload).await;
    assert_ne!(created["id"], 999);
    assert_eq!(created["status"], "Active");
}

#[tokio::test]
async fn test_create_rejects_invalid_payload() {
    let app = create_test_app().await;
    let mut payload = driver_payload("Jo");
    payload["phone"] = json!("123");
    payload["cnhCategory"] = json!("");

    let response = app.send(Method::POST, "/drivers", Some(payload)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
    assert!(body["details"]["phone"].is_array());
    assert!(body["details"]["cnh_category"].is_array());
    assert!(app.list().await.is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_body_as_bad_request() {
    let app = create_test_app().await;

    let mut unknown_status = driver_payload("Jo Silva");
    unknown_status["status"] = json!("Pending");
    let response = app.send(Method::POST, "/drivers", Some(unknown_status)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("Pending"));

    let mut wrong_type = driver_payload("Jo Silva");
    wrong_type["name"] = json!(123);
    let response = app.send(Method::POST, "/drivers", Some(wrong_type)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "BAD_REQUEST");

    assert!(app.list().await.is_empty());
}

#[tokio::test]
async fn test_update_rejects_malformed_body_as_bad_request() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let mut update = created.clone();
    update["status"] = json!("Pending");
    let response = app
        .send(Method::PUT, &format!("/drivers/{}", id), Some(update))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "BAD_REQUEST");

    let stored = app.send(Method::GET, &format!("/drivers/{}", id), None).await;
    assert_eq!(stored.json(), created);
}

#[tokio::test]
async fn test_create_accepts_punctuated_values() {
    let app = create_test_app().await;
    let mut payload = driver_payload("José Araújo");
    payload["cpf"] = json!("123.456.789-01");
    payload["phone"] = json!("(11) 3456-7890");

    let created = app.create_driver(payload).await;
    assert_eq!(created["cpf"], "123.456.789-01");
}

#[tokio::test]
async fn test_get_unknown_driver() {
    let app = create_test_app().await;
    let response = app.send(Method::GET, "/drivers/12345", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_rejected() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let mut update = driver_payload("Changed Name");
    update["id"] = json!(id + 1);
    let response = app
        .send(Method::PUT, &format!("/drivers/{}", id), Some(update))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "BAD_REQUEST");

    let missing_id = driver_payload("Changed Name");
    let response = app
        .send(Method::PUT, &format!("/drivers/{}", id), Some(missing_id))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let stored = app.send(Method::GET, &format!("/drivers/{}", id), None).await;
    assert_eq!(stored.json(), created);
}

#[tokio::test]
async fn test_update_replaces_row() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let mut update = driver_payload("Jo Souza");
    update["id"] = json!(id);
    update["cnhCategory"] = json!("C");
    update["status"] = json!("Inactive");

    let response = app
        .send(Method::PUT, &format!("/drivers/{}", id), Some(update.clone()))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.bytes.is_empty());

    let stored = app.send(Method::GET, &format!("/drivers/{}", id), None).await;
    assert_eq!(stored.json(), update);
}

#[tokio::test]
async fn test_unchanged_update_is_idempotent() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response = app
            .send(Method::PUT, &format!("/drivers/{}", id), Some(created.clone()))
            .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    let stored = app.send(Method::GET, &format!("/drivers/{}", id), None).await;
    assert_eq!(stored.json(), created);
}

#[tokio::test]
async fn test_update_unknown_driver() {
    let app = create_test_app().await;
    let mut update = driver_payload("Jo Silva");
    update["id"] = json!(77);

    let response = app.send(Method::PUT, "/drivers/77", Some(update)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(app.list().await.is_empty());
}

#[tokio::test]
async fn test_update_rejects_invalid_payload() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let mut update = created.clone();
    update["cpf"] = json!("123.456.789-0");
    let response = app
        .send(Method::PUT, &format!("/drivers/{}", id), Some(update))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_unknown_driver_is_noop() {
    let app = create_test_app().await;
    app.create_driver(driver_payload("Jo Silva")).await;

    let response = app.send(Method::DELETE, "/drivers/999", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.list().await.len(), 1);
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let app = create_test_app().await;
    let mut ids = Vec::new();
    for name in ["Ana Lima", "Bruno Costa", "Carla Dias", "Davi Rocha", "Eva Melo"] {
        let created = app.create_driver(driver_payload(name)).await;
        ids.push(created["id"].as_i64().unwrap());
    }

    for id in &ids[..2] {
        let response = app.send(Method::DELETE, &format!("/drivers/{}", id), None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    let drivers = app.list().await;
    assert_eq!(drivers.len(), 3);
    let listed: Vec<i64> = drivers.iter().map(|d| d["id"].as_i64().unwrap()).collect();
    assert_eq!(listed, ids[2..].to_vec());
}

#[tokio::test]
async fn test_photo_upload_and_download() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();
    let data = b"\x89PNG fake image bytes";

    let response = app
        .request(multipart_request(
            &format!("/drivers/{}/attachments/photo", id),
            "me.png",
            "image/png",
            data,
        ))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let metadata = response.json();
    assert_eq!(metadata["kind"], "photo");
    assert_eq!(metadata["fileName"], "me.png");
    assert_eq!(metadata["sizeBytes"], data.len());

    let listed = app
        .send(Method::GET, &format!("/drivers/{}/attachments", id), None)
        .await;
    assert_eq!(listed.json().as_array().unwrap().len(), 1);

    let download = app
        .send(Method::GET, &format!("/drivers/{}/attachments/photo", id), None)
        .await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.headers.get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(download.bytes, data.to_vec());
}

#[tokio::test]
async fn test_upload_replaces_previous_attachment() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let uri = format!("/drivers/{}/attachments/cnh-pdf", created["id"]);

    for name in ["old.pdf", "new.pdf"] {
        let response = app
            .request(multipart_request(&uri, name, "application/pdf", b"%PDF-1.4"))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let listed = app
        .send(Method::GET, &format!("/drivers/{}/attachments", created["id"]), None)
        .await;
    let attachments = listed.json();
    assert_eq!(attachments.as_array().unwrap().len(), 1);
    assert_eq!(attachments[0]["fileName"], "new.pdf");
}

#[tokio::test]
async fn test_upload_rejections() {
    let config = EnvironmentConfig {
        upload_limits: UploadLimits {
            max_photo_bytes: 8,
            max_document_bytes: 1024,
        },
        ..EnvironmentConfig::default()
    };
    let app = create_test_app_with(config).await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let wrong_type = app
        .request(multipart_request(
            &format!("/drivers/{}/attachments/photo", id),
            "cnh.pdf",
            "application/pdf",
            b"%PDF",
        ))
        .await;
    assert_eq!(wrong_type.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let too_large = app
        .request(multipart_request(
            &format!("/drivers/{}/attachments/photo", id),
            "me.png",
            "image/png",
            &[0u8; 32],
        ))
        .await;
    assert_eq!(too_large.status, StatusCode::PAYLOAD_TOO_LARGE);

    let bad_kind = app
        .request(multipart_request(
            &format!("/drivers/{}/attachments/avatar", id),
            "me.png",
            "image/png",
            b"png",
        ))
        .await;
    assert_eq!(bad_kind.status, StatusCode::BAD_REQUEST);

    let unknown_driver = app
        .request(multipart_request(
            "/drivers/999/attachments/photo",
            "me.png",
            "image/png",
            b"png",
        ))
        .await;
    assert_eq!(unknown_driver.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_driver_removes_attachments() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request(multipart_request(
            &format!("/drivers/{}/attachments/photo", id),
            "me.png",
            "image/png",
            b"png",
        ))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.send(Method::DELETE, &format!("/drivers/{}", id), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM driver_attachments")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_delete_attachment() {
    let app = create_test_app().await;
    let created = app.create_driver(driver_payload("Jo Silva")).await;
    let uri = format!("/drivers/{}/attachments/photo", created["id"]);

    let missing = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    app.request(multipart_request(&uri, "me.png", "image/png", b"png"))
        .await;
    let deleted = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let download = app.send(Method::GET, &uri, None).await;
    assert_eq!(download.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_only_frontend_origin() {
    let app = create_test_app().await;

    let preflight = |origin: &str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/drivers")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app.request(preflight("http://localhost:5173")).await;
    assert_eq!(
        allowed
            .headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );

    let denied = app.request(preflight("http://evil.example")).await;
    assert!(denied
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
