use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{
    app, app_with_state, Fault, MockState, LAW_COUNT, MALFORMED_REPORT, REJECTED_KEY,
};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- api key ---

#[tokio::test]
async fn missing_api_key_returns_403() {
    let resp = app().oneshot(get("/v3/congress/current")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["message"], "API_KEY_MISSING");
}

#[tokio::test]
async fn empty_api_key_returns_403() {
    let resp = app()
        .oneshot(get("/v3/congress/current?api_key="))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn revoked_api_key_returns_403() {
    let resp = app()
        .oneshot(get(&format!("/v3/congress/current?api_key={REJECTED_KEY}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["message"], "API_KEY_INVALID");
}

// --- laws paging ---

#[tokio::test]
async fn laws_are_paged_by_offset_and_limit() {
    let resp = app()
        .oneshot(get("/v3/law/118?api_key=k&offset=3&limit=3&format=json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let numbers: Vec<&str> = body["bills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, ["4", "5", "6"]);
    assert_eq!(body["pagination"]["count"], LAW_COUNT);
    assert!(body["pagination"]["next"]
        .as_str()
        .unwrap()
        .contains("offset=6"));
}

#[tokio::test]
async fn last_law_page_has_no_next() {
    let resp = app()
        .oneshot(get("/v3/law/118?api_key=k&offset=8&limit=5"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["bills"].as_array().unwrap().len(), 2);
    assert!(body["pagination"].get("next").is_none());
}

// --- bills ---

#[tokio::test]
async fn known_bill_is_served() {
    let resp = app()
        .oneshot(get("/v3/bill/118/hr/1?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["bill"]["title"], "Lower Energy Costs Act");
    assert!(body["bill"]["laws"].is_null());
}

#[tokio::test]
async fn unknown_bill_returns_404() {
    let resp = app()
        .oneshot(get("/v3/bill/118/hr/99999?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn amendments_response_has_no_wrapper_key() {
    let resp = app()
        .oneshot(get("/v3/bill/118/hr/1/amendments?api_key=k"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert!(body.get("amendments").is_none());
    assert_eq!(body["request"]["billType"], "hr");
}

// --- malformed ---

#[tokio::test]
async fn malformed_report_is_not_json() {
    let resp = app()
        .oneshot(get(&format!("/v3/crsreport/{MALFORMED_REPORT}?api_key=k")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(serde_json::from_slice::<Value>(&bytes).is_err());
}

// --- faults ---

#[tokio::test]
async fn queued_faults_precede_normal_responses() {
    let state = MockState::new();
    state.push_fault(Fault::status(StatusCode::TOO_MANY_REQUESTS).with_retry_after(2));
    state.push_faults(1, StatusCode::SERVICE_UNAVAILABLE);

    let app = app_with_state(state.clone());

    let resp = app
        .clone()
        .oneshot(get("/v3/congress/current?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.headers()["retry-after"], "2");

    let resp = app
        .clone()
        .oneshot(get("/v3/congress/current?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let resp = app
        .oneshot(get("/v3/congress/current?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["congress"]["name"], "118th Congress");

    assert_eq!(state.hits(), 3);
}

#[tokio::test]
async fn rejected_requests_are_counted_and_keep_faults() {
    let state = MockState::new();
    state.push_faults(1, StatusCode::SERVICE_UNAVAILABLE);
    let app = app_with_state(state.clone());

    let resp = app.clone().oneshot(get("/v3/member/L000174")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .oneshot(get("/v3/member/L000174?api_key=k"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(state.hits(), 2);
}
