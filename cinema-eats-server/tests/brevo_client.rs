use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_test::TestServer;
use cinema_eats_server::{
    SUBSCRIBE_PATH, create_app,
    infra::{app_state::AppState, config::BrevoConfig},
    mailing_list::{BrevoClient, Enrollment, MailingList, MailingListError},
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: Option<&'static str>,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn create_contact(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let api_key = headers
        .get("api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    upstream.seen.lock().push((api_key, body));

    match upstream.body {
        Some(body) => (
            upstream.status,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
        None => upstream.status.into_response(),
    }
}

/// Run a stand-in for the Brevo API and return its base URL.
async fn spawn_upstream(upstream: Upstream) -> Url {
    spawn_upstream_under("", upstream).await
}

/// Like [`spawn_upstream`], with the API mounted under `prefix`.
async fn spawn_upstream_under(prefix: &str, upstream: Upstream) -> Url {
    let app = Router::new()
        .route(&format!("{prefix}/v3/contacts"), post(create_contact))
        .with_state(upstream);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}{prefix}")).unwrap()
}

fn upstream(status: StatusCode, body: Option<&'static str>) -> Upstream {
    Upstream {
        status,
        body,
        seen: Arc::new(Mutex::new(Vec::new())),
    }
}

fn client_for(api_url: Url) -> BrevoClient {
    BrevoClient::new(&BrevoConfig {
        api_key: "xkeysib-test".into(),
        list_id: 20,
        api_url,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn created_contact_is_subscribed() {
    let upstream = upstream(StatusCode::CREATED, Some(r#"{"id": 42}"#));
    let seen = upstream.seen.clone();
    let client = client_for(spawn_upstream(upstream).await);

    let enrollment = client.subscribe("a@b.com").await.unwrap();
    assert_eq!(enrollment, Enrollment::Subscribed);

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("xkeysib-test"));
    assert_eq!(
        seen[0].1,
        json!({ "email": "a@b.com", "listIds": [20], "updateEnabled": true })
    );
}

#[tokio::test]
async fn no_content_is_subscribed() {
    let upstream = upstream(StatusCode::NO_CONTENT, None);
    let client = client_for(spawn_upstream(upstream).await);
    assert_eq!(
        client.subscribe("a@b.com").await.unwrap(),
        Enrollment::Subscribed
    );
}

#[tokio::test]
async fn api_url_path_prefix_is_kept() {
    let upstream = upstream(StatusCode::CREATED, Some(r#"{"id": 7}"#));
    let seen = upstream.seen.clone();
    let client =
        client_for(spawn_upstream_under("/proxy/brevo", upstream).await);

    assert_eq!(
        client.subscribe("a@b.com").await.unwrap(),
        Enrollment::Subscribed
    );
    assert_eq!(seen.lock().len(), 1);
}

#[tokio::test]
async fn duplicate_parameter_is_already_subscribed() {
    let body =
        r#"{"code":"duplicate_parameter","message":"Contact already exist"}"#;
    let upstream = upstream(StatusCode::BAD_REQUEST, Some(body));
    let client = client_for(spawn_upstream(upstream).await);

    assert_eq!(
        client.subscribe("a@b.com").await.unwrap(),
        Enrollment::AlreadySubscribed
    );
}

#[tokio::test]
async fn other_errors_are_rejections() {
    let body = r#"{"code":"unauthorized","message":"Key not found"}"#;
    let upstream = upstream(StatusCode::UNAUTHORIZED, Some(body));
    let client = client_for(spawn_upstream(upstream).await);

    let err = client.subscribe("a@b.com").await.unwrap_err();
    assert!(matches!(
        err,
        MailingListError::Rejected {
            status: 401,
            message: Some(ref message),
        } if message == "Key not found"
    ));
}

#[tokio::test]
async fn non_json_error_body_is_a_transport_failure() {
    let upstream =
        upstream(StatusCode::BAD_GATEWAY, Some("<html>bad gateway</html>"));
    let client = client_for(spawn_upstream(upstream).await);

    let err = client.subscribe("a@b.com").await.unwrap_err();
    assert!(matches!(err, MailingListError::Transport(_)));
}

#[tokio::test]
async fn endpoint_maps_upstream_outcomes() {
    let body =
        r#"{"code":"invalid_parameter","message":"email is not valid"}"#;
    let upstream = upstream(StatusCode::BAD_REQUEST, Some(body));
    let client = client_for(spawn_upstream(upstream).await);
    let server =
        TestServer::new(create_app(AppState::new(Arc::new(client)))).unwrap();

    let response = server
        .post(SUBSCRIBE_PATH)
        .json(&json!({ "email": "a@b" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "email is not valid" }));
}

#[tokio::test]
async fn unreachable_upstream_is_an_internal_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(Url::parse(&format!("http://{addr}")).unwrap());
    let server =
        TestServer::new(create_app(AppState::new(Arc::new(client)))).unwrap();

    let response = server
        .post(SUBSCRIBE_PATH)
        .json(&json!({ "email": "a@b.com" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Internal server error" }));
}
