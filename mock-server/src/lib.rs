//! In-process stand-in for the congress.gov v3 API.
//!
//! Serves a handful of fixed documents under `/v3`, enforces the `api_key`
//! query parameter, counts requests and can be told to fail the next N
//! requests with a given status so retry behaviour can be exercised over a
//! real socket.

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// Re-exported so callers can script faults without depending on axum.
pub use axum::http::StatusCode;

/// Number of laws served for every congress by `/law/{congress}`.
pub const LAW_COUNT: usize = 10;

/// Report number for which `/crsreport/{reportNumber}` answers 200 with a
/// body that is not JSON.
pub const MALFORMED_REPORT: &str = "MALFORMED";

/// An API key the server always refuses with 403.
pub const REJECTED_KEY: &str = "revoked-key";

const DEFAULT_LIMIT: usize = 20;

/// A scripted failure for one upcoming request.
#[derive(Debug, Clone)]
pub struct Fault {
    pub status: StatusCode,
    pub retry_after: Option<u64>,
}

impl Fault {
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            retry_after: None,
        }
    }

    pub fn with_retry_after(mut self, secs: u64) -> Self {
        self.retry_after = Some(secs);
        self
    }
}

/// Shared server state: request counter and pending faults.
#[derive(Debug, Default)]
pub struct MockState {
    hits: AtomicU32,
    faults: Mutex<VecDeque<Fault>>,
}

impl MockState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests received so far, including rejected and faulted ones.
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Fail the next request with `fault`. Faults queue up in order.
    pub fn push_fault(&self, fault: Fault) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.push_back(fault);
        }
    }

    pub fn push_faults(&self, count: usize, status: StatusCode) {
        for _ in 0..count {
            self.push_fault(Fault::status(status));
        }
    }

    fn next_fault(&self) -> Option<Fault> {
        self.faults.lock().ok().and_then(|mut f| f.pop_front())
    }
}

pub type SharedState = Arc<MockState>;

pub fn app() -> Router {
    app_with_state(MockState::new())
}

pub fn app_with_state(state: SharedState) -> Router {
    let api = Router::new()
        .route("/law/{congress}", get(list_laws))
        .route("/bill/{congress}/{bill_type}/{bill_number}", get(get_bill))
        .route(
            "/bill/{congress}/{bill_type}/{bill_number}/amendments",
            get(get_bill_amendments),
        )
        .route("/member/{bioguide_id}", get(get_member))
        .route("/congress/current", get(current_congress))
        .route("/crsreport/{report_number}", get(get_crs_report));

    Router::new()
        .nest("/v3", api)
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, MockState::new()).await
}

pub async fn serve(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

/// Counts the request, rejects it without an API key, then applies any
/// queued fault before routing.
async fn gate(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst) + 1;
    debug!(hit, uri = %request.uri(), "request");

    match params.get("api_key").map(String::as_str) {
        None | Some("") => return error(StatusCode::FORBIDDEN, "API_KEY_MISSING"),
        Some(REJECTED_KEY) => return error(StatusCode::FORBIDDEN, "API_KEY_INVALID"),
        Some(_) => {}
    }

    if let Some(fault) = state.next_fault() {
        debug!(status = %fault.status, "injecting fault");
        let mut response = error(fault.status, "injected fault");
        if let Some(secs) = fault.retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        return response;
    }

    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "code": status.as_u16(), "message": message } })))
        .into_response()
}

#[derive(Debug, Deserialize)]
struct Paging {
    offset: Option<usize>,
    limit: Option<usize>,
}

/// Fixed law records for `congress`, numbered 1..=LAW_COUNT.
pub fn laws_for(congress: u32) -> Vec<Value> {
    (1..=LAW_COUNT)
        .map(|n| {
            json!({
                "congress": congress,
                "number": n.to_string(),
                "type": "HR",
                "originChamber": "House",
                "originChamberCode": "H",
                "title": format!("Law fixture {n}"),
                "laws": [{ "number": format!("{congress}-{n}"), "type": "Public Law" }],
                "latestAction": { "actionDate": "2024-01-05", "text": format!("Became Public Law No: {congress}-{n}.") },
                "url": format!("https://api.congress.gov/v3/bill/{congress}/hr/{n}?format=json"),
            })
        })
        .collect()
}

async fn list_laws(Path(congress): Path<u32>, Query(paging): Query<Paging>) -> Json<Value> {
    let offset = paging.offset.unwrap_or(0);
    let limit = paging.limit.unwrap_or(DEFAULT_LIMIT);
    let page: Vec<Value> = laws_for(congress)
        .into_iter()
        .skip(offset)
        .take(limit)
        .collect();

    let mut pagination = json!({ "count": LAW_COUNT });
    if offset.saturating_add(limit) < LAW_COUNT {
        pagination["next"] = json!(format!(
            "https://api.congress.gov/v3/law/{congress}?offset={}&limit={limit}&format=json",
            offset + limit
        ));
    }

    Json(json!({
        "bills": page,
        "pagination": pagination,
        "request": { "congress": congress.to_string(), "contentType": "application/json", "format": "json" },
    }))
}

async fn get_bill(Path((congress, bill_type, bill_number)): Path<(u32, String, u32)>) -> Response {
    if (congress, bill_type.as_str(), bill_number) != (118, "hr", 1) {
        return error(StatusCode::NOT_FOUND, "No bill matches the given query.");
    }
    Json(json!({
        "bill": {
            "congress": 118,
            "number": "1",
            "type": "HR",
            "title": "Lower Energy Costs Act",
            "introducedDate": "2023-03-14",
            "originChamber": "House",
            "policyArea": { "name": "Energy" },
            "sponsors": [{
                "bioguideId": "S000344",
                "fullName": "Rep. Scalise, Steve [R-LA-1]",
                "firstName": "Steve",
                "lastName": "Scalise",
                "party": "R",
                "state": "LA",
            }],
            "latestAction": { "actionDate": "2023-03-30", "text": "Received in the Senate." },
            "laws": null,
        }
    }))
    .into_response()
}

/// A sub-resource response with no wrapper key at all.
async fn get_bill_amendments(
    Path((congress, bill_type, bill_number)): Path<(u32, String, u32)>,
) -> Json<Value> {
    Json(json!({
        "pagination": { "count": 0 },
        "request": {
            "billNumber": bill_number.to_string(),
            "billType": bill_type,
            "congress": congress.to_string(),
        },
    }))
}

async fn get_member(Path(bioguide_id): Path<String>) -> Json<Value> {
    Json(json!({
        "member": {
            "bioguideId": bioguide_id,
            "firstName": "Bernard",
            "lastName": "Sanders",
            "fullName": "Bernard Sanders",
            "state": "Vermont",
            "party": null,
            "url": "",
        }
    }))
}

async fn current_congress() -> Json<Value> {
    Json(json!({
        "congress": {
            "name": "118th Congress",
            "startYear": "2023",
            "endYear": "2024",
            "sessions": [
                { "chamber": "House of Representatives", "number": 1, "startDate": "2023-01-03", "endDate": "2024-01-03", "type": "R" },
                { "chamber": "House of Representatives", "number": 2, "startDate": "2024-01-03" },
            ],
        }
    }))
}

async fn get_crs_report(Path(report_number): Path<String>) -> Response {
    if report_number == MALFORMED_REPORT {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            "<html><body>Service maintenance</body></html>",
        )
            .into_response();
    }
    Json(json!({
        "CRSReport": {
            "id": report_number,
            "title": "Fixture report",
            "version": 2,
            "authors": [{ "author": "Jane Doe" }],
            "topics": [],
            "relatedMaterials": null,
        }
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn law_fixtures_are_numbered_sequentially() {
        let laws = laws_for(118);
        assert_eq!(laws.len(), LAW_COUNT);
        assert_eq!(laws[0]["number"], "1");
        assert_eq!(laws[9]["laws"][0]["number"], "118-10");
    }

    #[test]
    fn faults_are_served_in_order() {
        let state = MockState::new();
        state.push_fault(Fault::status(StatusCode::TOO_MANY_REQUESTS).with_retry_after(1));
        state.push_faults(1, StatusCode::SERVICE_UNAVAILABLE);

        let first = state.next_fault().unwrap();
        assert_eq!(first.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(first.retry_after, Some(1));
        assert_eq!(
            state.next_fault().unwrap().status,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert!(state.next_fault().is_none());
    }
}
