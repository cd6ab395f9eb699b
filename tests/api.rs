use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use status_api::{
    api::{
        APIState,
        server::{configure, cors},
    },
    libs::config::CorsOrigins,
    models::status_check::{StatusCheck, StatusCheckCreate},
    store::{MemoryStatusStore, SqliteStatusStore, StatusStore},
};
use std::sync::Arc;

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(APIState::new($store))))
                .configure(configure),
        )
        .await
    };
}

struct FailingStore;

#[async_trait]
impl StatusStore for FailingStore {
    async fn create(&self, _input: StatusCheckCreate) -> anyhow::Result<StatusCheck> {
        Err(anyhow::anyhow!("disk on fire"))
    }

    async fn list(&self) -> anyhow::Result<Vec<StatusCheck>> {
        Err(anyhow::anyhow!("disk on fire"))
    }

    async fn get_by_id(&self, _id: &str) -> anyhow::Result<Option<StatusCheck>> {
        Err(anyhow::anyhow!("disk on fire"))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

async fn status_scenario(store: Arc<dyn StatusStore>) {
    let app = init_app!(store);

    let req = test::TestRequest::post().uri("/api/status").set_json(json!({ "client_name": "acme" })).to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["client_name"], "acme");
    assert_eq!(created["status"], "active");
    assert!(created["timestamp"].as_str().unwrap().ends_with('Z'));

    let req = test::TestRequest::get().uri("/api/status").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([created.clone()]));

    let req = test::TestRequest::get().uri(&format!("/api/status/{}", id)).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::get().uri("/api/status/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Status check not found" }));
}

#[actix_web::test]
async fn status_scenario_in_memory() {
    status_scenario(Arc::new(MemoryStatusStore::new())).await;
}

#[actix_web::test]
async fn status_scenario_in_database() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("status.db").display());
    let store = SqliteStatusStore::connect(&url, "test").await.unwrap();

    status_scenario(Arc::new(store)).await;
}

#[actix_web::test]
async fn sequential_creates_are_listed_in_order() {
    let app = init_app!(Arc::new(MemoryStatusStore::new()));

    for (name, status) in [("acme", None), ("globex", Some("degraded"))] {
        let mut body = json!({ "client_name": name });
        if let Some(status) = status {
            body["status"] = json!(status);
        }
        let req = test::TestRequest::post().uri("/api/status").set_json(body).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/status").to_request();
    let listed: Vec<StatusCheck> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].client_name, "acme");
    assert_eq!(listed[0].status, "active");
    assert_eq!(listed[1].client_name, "globex");
    assert_eq!(listed[1].status, "degraded");
    assert_ne!(listed[0].id, listed[1].id);
    assert!(listed[0].timestamp <= listed[1].timestamp);
}

#[actix_web::test]
async fn malformed_body_is_rejected() {
    let app = init_app!(Arc::new(MemoryStatusStore::new()));

    let req = test::TestRequest::post().uri("/api/status").set_json(json!({ "status": "active" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/status")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::get().uri("/api/status").to_request();
    let listed: Vec<StatusCheck> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn store_failures_are_internal_errors() {
    let app = init_app!(Arc::new(FailingStore));

    let req = test::TestRequest::post().uri("/api/status").set_json(json!({ "client_name": "acme" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Internal server error" }));

    let req = test::TestRequest::get().uri("/api/status").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let req = test::TestRequest::get().uri("/api/status/abc").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn service_endpoints() {
    let app = init_app!(Arc::new(MemoryStatusStore::new()));

    let req = test::TestRequest::get().uri("/api/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Hello World");
    assert_eq!(body["status"], "running");
    assert!(body["timestamp"].is_string());

    let req = test::TestRequest::get().uri("/api").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Hello World");

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "status-api");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let req = test::TestRequest::get().uri("/api/test").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["test"], "ok");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let app = init_app!(Arc::new(MemoryStatusStore::new()));

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[actix_web::test]
async fn cors_allow_list_echoes_allowed_origin() {
    let origins = CorsOrigins::List(vec!["https://app.example".to_string()]);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(APIState::new(Arc::new(MemoryStatusStore::new())))))
            .wrap(cors(&origins))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("origin", "https://app.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "https://app.example"
    );
    assert_eq!(resp.headers().get("access-control-allow-credentials").unwrap(), "true");
}

#[actix_web::test]
async fn cors_wildcard_allows_any_origin() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(APIState::new(Arc::new(MemoryStatusStore::new())))))
            .wrap(cors(&CorsOrigins::Any))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("origin", "https://anywhere.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "https://anywhere.example"
    );
    assert_eq!(resp.headers().get("access-control-allow-credentials").unwrap(), "true");
}
