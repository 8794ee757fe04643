//! End-to-end fallback scenarios through the configured directory.
//!
//! The remote service is a stub HTTP server; latency is recorded rather than
//! slept so the scenarios run without real elapsed time.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use client::config::ClientSettings;
use client::domain::ports::UserDirectory;
use client::domain::{NewUser, Provenance, User};
use client::state_builders::{
    DirectoryRuntime, HttpUserDirectory, build_user_directory_with_runtime,
};
use client::test_support::{MutableClock, RecordingSleeper};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Scenario {
    server: MockServer,
    directory: HttpUserDirectory,
    sleeper: Arc<RecordingSleeper>,
}

async fn scenario() -> Scenario {
    let defaults = ClientSettings::default();
    scenario_with_delays(defaults.list_delay_ms, defaults.create_delay_ms).await
}

async fn scenario_with_delays(list_delay_ms: u64, create_delay_ms: u64) -> Scenario {
    let server = MockServer::start().await;
    let settings = ClientSettings {
        base_url: server.uri(),
        list_delay_ms,
        create_delay_ms,
        request_timeout_ms: None,
    };
    let sleeper = Arc::new(RecordingSleeper::default());
    let now = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
        .single()
        .expect("valid time");
    let runtime = DirectoryRuntime {
        sleeper: sleeper.clone(),
        clock: Arc::new(MutableClock::new(now)),
    };
    let directory =
        build_user_directory_with_runtime(&settings, runtime).expect("directory builds");
    Scenario {
        server,
        directory,
        sleeper,
    }
}

async fn respond(server: &MockServer, verb: &str, response: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path("/users"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[rstest]
#[tokio::test]
async fn server_error_serves_fixture_users_after_list_delay() {
    let scenario = scenario().await;
    respond(&scenario.server, "GET", ResponseTemplate::new(500)).await;

    let result = scenario.directory.get_users().await;

    assert_eq!(result.provenance(), Provenance::Mock);
    assert_eq!(
        result.payload(),
        &vec![
            User::new(1, "pepe", "pepe@pepe.com"),
            User::new(2, "maria", "maria@maria.com"),
        ]
    );
    let message = result.message().expect("fallback message");
    assert!(message.starts_with("server error — "), "got {message:?}");
    assert!(scenario.sleeper.total() >= Duration::from_millis(500));
}

#[rstest]
#[tokio::test]
async fn healthy_service_is_served_remotely() {
    let scenario = scenario().await;
    respond(
        &scenario.server,
        "GET",
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "name": "lu", "email": "lu@x.com" }
        ])),
    )
    .await;

    let result = scenario.directory.get_users().await;

    assert_eq!(result.provenance(), Provenance::Remote);
    assert!(result.message().is_none());
    assert_eq!(result.payload(), &vec![User::new(9, "lu", "lu@x.com")]);
    assert!(scenario.sleeper.recorded().is_empty());
}

#[rstest]
#[case::not_found(ResponseTemplate::new(404), "resource not found — showing fallback data")]
#[case::malformed(
    ResponseTemplate::new(200).set_body_string("{ not json"),
    "an error occurred — showing fallback data"
)]
#[case::wrong_shape(
    ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })),
    "an error occurred — showing fallback data"
)]
#[case::bad_request(ResponseTemplate::new(400), "an error occurred — showing fallback data")]
#[tokio::test]
async fn every_list_failure_becomes_annotated_fallback(
    #[case] response: ResponseTemplate,
    #[case] expected: &str,
) {
    let scenario = scenario().await;
    respond(&scenario.server, "GET", response).await;

    let result = scenario.directory.get_users().await;

    assert_eq!(result.provenance(), Provenance::Mock);
    assert_eq!(result.message(), Some(expected));
}

#[rstest]
#[tokio::test]
async fn create_under_remote_failure_keeps_candidate_fields() {
    let scenario = scenario().await;
    respond(&scenario.server, "POST", ResponseTemplate::new(503)).await;

    let candidate = NewUser::new("ana", "ana@x.com").expect("valid candidate");
    let result = scenario.directory.create_user(candidate).await;

    assert_eq!(result.provenance(), Provenance::Mock);
    assert_eq!(result.message(), Some("server error — using fallback data"));
    assert_eq!(result.payload().name(), "ana");
    assert_eq!(result.payload().email(), "ana@x.com");
    assert_eq!(
        scenario.sleeper.recorded(),
        vec![Duration::from_millis(300)]
    );
}

#[rstest]
#[tokio::test]
async fn create_against_healthy_service_returns_stored_user() {
    let scenario = scenario().await;
    respond(
        &scenario.server,
        "POST",
        ResponseTemplate::new(201)
            .set_body_json(json!({ "id": 77, "name": "ana", "email": "ana@x.com" })),
    )
    .await;

    let candidate = NewUser::new("ana", "ana@x.com").expect("valid candidate");
    let result = scenario.directory.create_user(candidate).await;

    assert_eq!(result.provenance(), Provenance::Remote);
    assert!(result.message().is_none());
    assert_eq!(result.into_payload(), User::new(77, "ana", "ana@x.com"));
}

#[rstest]
#[tokio::test]
async fn configured_delays_replace_default_latency() {
    let scenario = scenario_with_delays(25, 10).await;
    respond(&scenario.server, "GET", ResponseTemplate::new(500)).await;
    respond(&scenario.server, "POST", ResponseTemplate::new(500)).await;

    scenario.directory.get_users().await;
    let candidate = NewUser::new("ana", "ana@x.com").expect("valid candidate");
    scenario.directory.create_user(candidate).await;

    assert_eq!(
        scenario.sleeper.recorded(),
        vec![Duration::from_millis(25), Duration::from_millis(10)]
    );
}
