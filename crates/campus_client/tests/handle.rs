use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use campus_client::{AuthToken, ClientHandle, ClientSettings, HttpPortalApi, Session};
use campus_core::{Effect, Msg};

fn handle() -> ClientHandle {
    let api = HttpPortalApi::new(ClientSettings::default()).expect("client builds");
    ClientHandle::new(Arc::new(api))
}

fn session(server: &MockServer) -> Session {
    let mut session = Session::anonymous(server.uri());
    session.authorize(AuthToken::new("token-123"));
    session
}

async fn recv_msg(handle: &ClientHandle) -> Msg {
    for _ in 0..200 {
        if let Some(msg) = handle.try_recv() {
            return msg;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("no message arrived from the client handle");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn catalog_fetch_round_trips_into_a_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "cloud201",
                "title": "Serverless Patterns",
                "description": "Deploying without servers",
                "tags": ["Cloud"],
                "creatorId": "ines@example.com",
                "status": "Active",
                "resources": []
            }
        ])))
        .mount(&server)
        .await;

    let handle = handle();
    handle.dispatch(&session(&server), vec![Effect::FetchCatalog]);

    match recv_msg(&handle).await {
        Msg::CatalogLoaded(courses) => {
            assert_eq!(courses.len(), 1);
            assert_eq!(courses[0].id, "cloud201");
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_subscribe_reports_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/courses/subscribe"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "message": "already subscribed"
        })))
        .mount(&server)
        .await;

    let handle = handle();
    handle.dispatch(
        &session(&server),
        vec![Effect::Subscribe {
            course_id: "cloud201".to_string(),
        }],
    );

    match recv_msg(&handle).await {
        Msg::SubscribeFinished { course_id, outcome } => {
            assert_eq!(course_id, "cloud201");
            assert_eq!(outcome, Err("already subscribed".to_string()));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_server_becomes_a_connectivity_message() {
    // Nothing is listening on this port.
    let mut session = Session::anonymous("http://127.0.0.1:9");
    session.authorize(AuthToken::new("token-123"));

    let handle = handle();
    handle.dispatch(&session, vec![Effect::FetchCatalog]);

    match recv_msg(&handle).await {
        Msg::CatalogLoadFailed(message) => {
            assert!(message.starts_with("Connection error"));
        }
        other => panic!("unexpected message: {other:?}"),
    }
}
