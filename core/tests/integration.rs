//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts its own mock server on a random port with fresh state,
//! then drives `CongressClient` over real HTTP through the default ureq
//! transport. The server's hit counter is the source of truth for how many
//! network calls a client method made.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use congress_core::{ApiError, ClientConfig, CongressClient, ListOptions, RetryPolicy};
use mock_server::{
    Fault, MockState, SharedState, StatusCode, MALFORMED_REPORT, REJECTED_KEY,
};

/// Start the mock server on a random port and return its `/v3` base URL.
fn start_server() -> (String, SharedState) {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let state = MockState::new();
    let server_state = state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, server_state).await
        })
        .unwrap();
    });

    (format!("http://{addr}/v3"), state)
}

fn fast_retries() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(40),
        jitter: true,
    }
}

fn client_for(base_url: &str) -> CongressClient {
    let config = ClientConfig::new("integration-key")
        .with_base_url(base_url)
        .with_timeout_secs(5)
        .with_retry_policy(&fast_retries());
    CongressClient::new(config).unwrap()
}

fn numbers(laws: &[congress_core::types::LawItem]) -> Vec<String> {
    laws.iter().filter_map(|l| l.number.clone()).collect()
}

#[test]
fn consecutive_law_pages_are_disjoint() {
    let (base_url, state) = start_server();
    let client = client_for(&base_url);

    let first = client
        .list_laws_by_congress(118, &ListOptions::new().page(0, 3))
        .unwrap();
    let second = client
        .list_laws_by_congress(118, &ListOptions::new().page(3, 3))
        .unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    let first: HashSet<_> = numbers(&first).into_iter().collect();
    let second: HashSet<_> = numbers(&second).into_iter().collect();
    assert!(first.is_disjoint(&second), "{first:?} vs {second:?}");
    assert_eq!(state.hits(), 2);
}

#[test]
fn law_page_exposes_pagination() {
    let (base_url, _state) = start_server();
    let client = client_for(&base_url);

    let request = congress_core::RequestBuilder::new("/law/{congress}")
        .path(118u32)
        .list(&ListOptions::new().page(0, 4))
        .build()
        .unwrap();
    let page = client
        .fetch_page::<congress_core::types::LawItem>(&request, "bills")
        .unwrap();
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.pagination.as_ref().and_then(|p| p.count), Some(10));
    assert!(page.has_next());
}

#[test]
fn bill_detail_decodes() {
    let (base_url, _state) = start_server();
    let bill = client_for(&base_url).get_bill(118, "hr", 1).unwrap();

    assert_eq!(bill.title.as_deref(), Some("Lower Energy Costs Act"));
    assert_eq!(bill.policy_area.unwrap().name.as_deref(), Some("Energy"));
    assert_eq!(bill.laws, None);
    assert_eq!(
        bill.sponsors.unwrap()[0].bioguide_id.as_deref(),
        Some("S000344")
    );
}

#[test]
fn not_found_makes_exactly_one_call() {
    let (base_url, state) = start_server();
    let err = client_for(&base_url)
        .get_bill(118, "hr", 99999)
        .unwrap_err();

    assert!(matches!(err, ApiError::NotFound { ref path } if path == "/bill/118/hr/99999"));
    assert_eq!(state.hits(), 1);
}

#[test]
fn recovers_after_three_service_unavailable() {
    let (base_url, state) = start_server();
    state.push_faults(3, StatusCode::SERVICE_UNAVAILABLE);

    let congress = client_for(&base_url).get_current_congress().unwrap();
    assert_eq!(congress.name.as_deref(), Some("118th Congress"));
    assert_eq!(state.hits(), 4);
}

#[test]
fn gives_up_after_retry_budget() {
    let (base_url, state) = start_server();
    state.push_faults(5, StatusCode::SERVICE_UNAVAILABLE);

    let err = client_for(&base_url).get_current_congress().unwrap_err();
    assert!(matches!(err, ApiError::TransientFailure { attempts: 4, .. }));
    assert_eq!(state.hits(), 4);
}

#[test]
fn honours_retry_after_on_429() {
    let (base_url, state) = start_server();
    state.push_fault(Fault::status(StatusCode::TOO_MANY_REQUESTS).with_retry_after(1));

    let policy = RetryPolicy {
        max_backoff: Duration::from_secs(5),
        ..fast_retries()
    };
    let config = ClientConfig::new("integration-key")
        .with_base_url(&base_url)
        .with_retry_policy(&policy);
    let client = CongressClient::new(config).unwrap();

    let started = Instant::now();
    client.get_member("L000174").unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(state.hits(), 2);
}

#[test]
fn forbidden_is_rejected_without_retry() {
    let (base_url, state) = start_server();
    let config = ClientConfig::new(REJECTED_KEY)
        .with_base_url(&base_url)
        .with_retry_policy(&fast_retries());
    let err = CongressClient::new(config)
        .unwrap()
        .get_current_congress()
        .unwrap_err();

    match err {
        ApiError::RequestRejected { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API_KEY_INVALID"), "{body}");
        }
        other => panic!("expected RequestRejected, got {other:?}"),
    }
    assert_eq!(state.hits(), 1);
}

#[test]
fn non_json_success_body_is_malformed() {
    let (base_url, _state) = start_server();
    let err = client_for(&base_url)
        .get_crs_report(MALFORMED_REPORT)
        .unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse { .. }));
}

#[test]
fn missing_sequence_key_is_empty() {
    let (base_url, _state) = start_server();
    let amendments = client_for(&base_url)
        .get_bill_amendments(118, "hr", 1, &ListOptions::new())
        .unwrap();
    assert!(amendments.is_empty());
}

#[test]
fn null_and_empty_fields_stay_distinct() {
    let (base_url, _state) = start_server();
    let member = client_for(&base_url).get_member("S000033").unwrap();
    assert_eq!(member.bioguide_id.as_deref(), Some("S000033"));
    assert_eq!(member.party, None);
    assert_eq!(member.url.as_deref(), Some(""));
}

#[test]
fn deadline_bounds_total_time() {
    let (base_url, state) = start_server();
    state.push_faults(20, StatusCode::SERVICE_UNAVAILABLE);

    let config = ClientConfig::new("integration-key")
        .with_base_url(&base_url)
        .with_call_timeout_secs(Some(1))
        .with_retry_policy(&RetryPolicy {
            max_retries: 10,
            initial_backoff: Duration::from_millis(400),
            max_backoff: Duration::from_millis(400),
            jitter: false,
        });
    let client = CongressClient::new(config).unwrap();

    let started = Instant::now();
    let err = client.get_current_congress().unwrap_err();
    assert!(matches!(err, ApiError::DeadlineExceeded { .. }), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(state.hits() < 11);
}

#[test]
fn client_is_shared_across_threads() {
    let (base_url, state) = start_server();
    let client = client_for(&base_url);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            std::thread::spawn(move || client.get_bill(118, "hr", 1))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert_eq!(state.hits(), 4);
}

#[test]
fn unreachable_server_is_transient() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/v3"))
        .get_current_congress()
        .unwrap_err();
    assert!(matches!(err, ApiError::TransientFailure { attempts: 4, .. }), "{err:?}");
}
