mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use std::collections::HashSet;
use tinylink::domain::repositories::ShortLinkStore;
use tinylink::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, _store) = common::create_test_state(Some(common::TEST_BASE_URL));
    let server = TestServer::new(app_router(state)).unwrap();

    let created = server
        .post("/")
        .json(&json!({ "url": "https://example.com/round/trip" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let short_id = json["short_id"].as_str().unwrap();

    let response = server.get(&format!("/{short_id}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/round/trip"
    );
}

#[tokio::test]
async fn test_every_accepted_target_redirects() {
    let (state, _store) = common::create_test_state(None);
    let server = TestServer::new(app_router(state)).unwrap();

    for (target, location) in [
        ("https://example.com/a\nb", None),
        ("https://example.com/a%0Ab", Some("https://example.com/a%0Ab")),
        ("https://example.com/café", Some("https://example.com/caf%C3%A9")),
    ] {
        let created = server.post("/").json(&json!({ "url": target })).await;

        let Some(location) = location else {
            created.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            continue;
        };

        created.assert_status(StatusCode::CREATED);
        let short_id = created.json::<serde_json::Value>()["short_id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = server.get(&format!("/{short_id}")).await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location").to_str().unwrap(), location);
    }
}

#[tokio::test]
async fn test_health_route_is_not_a_short_id() {
    let (state, _store) = common::create_test_state(None);
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (state, _store) = common::create_test_state(None);
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::get("/health")
                .header(header::ORIGIN, "https://client.example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_requests() {
    let (state, store) = common::create_test_state(None);
    let app = app_router(state);
    let mut handles = Vec::new();

    for i in 0..100 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let target = format!("https://example.com/concurrent/{i}");
            let body = json!({ "url": target }).to_string();

            let response = app
                .oneshot(
                    Request::post("/")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::CREATED);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

            (json["short_id"].as_str().unwrap().to_string(), target)
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let (short_id, target) = handle.await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/{short_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], target.as_str());

        ids.insert(short_id);
    }

    assert_eq!(ids.len(), 100);
    assert_eq!(store.count().await, 100);
}
