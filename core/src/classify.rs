//! Response Classifier: maps an executor outcome to parsed JSON or a typed
//! error.

use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::Outcome;

/// Classify the final outcome of a call against `path`.
///
/// Pure: the same outcome always yields the same result.
pub fn classify(outcome: Outcome, path: &str) -> ApiResult<Value> {
    match outcome {
        Outcome::Response(response) if response.is_success() => {
            serde_json::from_str(&response.body)
                .map_err(|e| ApiError::malformed(path, format!("body is not JSON: {e}")))
        }
        Outcome::Response(response) if response.status == 404 => Err(ApiError::NotFound {
            path: path.to_string(),
        }),
        Outcome::Response(response) => Err(ApiError::RequestRejected {
            status: response.status,
            body: response.body,
        }),
        Outcome::Exhausted { attempts, cause } => {
            Err(ApiError::TransientFailure { attempts, cause })
        }
        Outcome::DeadlineExceeded { attempts, cause } => {
            Err(ApiError::DeadlineExceeded { attempts, cause })
        }
        Outcome::Unsendable(err) => Err(ApiError::invalid("url", err.to_string())),
        Outcome::Unreadable(reason) => Err(ApiError::malformed(path, reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransientCause, TransportError};
    use crate::http::HttpResponse;
    use serde_json::json;

    fn response(status: u16, body: &str) -> Outcome {
        Outcome::Response(HttpResponse::new(status, body))
    }

    #[test]
    fn success_with_json_body() {
        let value = classify(response(200, r#"{"bill":{"number":"1"}}"#), "/bill").unwrap();
        assert_eq!(value, json!({"bill": {"number": "1"}}));
    }

    #[test]
    fn success_with_unparseable_body_is_malformed() {
        let err = classify(response(200, "<html>oops</html>"), "/crsreport").unwrap_err();
        match err {
            ApiError::MalformedResponse { path, .. } => assert_eq!(path, "/crsreport"),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn empty_success_body_is_malformed() {
        assert!(matches!(
            classify(response(204, ""), "/law"),
            Err(ApiError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn not_found_carries_path() {
        let err = classify(response(404, "missing"), "/bill/118/hr/99999").unwrap_err();
        assert!(
            matches!(err, ApiError::NotFound { ref path } if path == "/bill/118/hr/99999")
        );
    }

    #[test]
    fn other_statuses_are_rejected() {
        for status in [301, 400, 401, 403, 422] {
            let err = classify(response(status, "nope"), "/member").unwrap_err();
            match err {
                ApiError::RequestRejected { status: s, body } => {
                    assert_eq!(s, status);
                    assert_eq!(body, "nope");
                }
                other => panic!("status {status}: expected RequestRejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn executor_failures_map_to_their_categories() {
        let cause = TransientCause::Status {
            status: 503,
            body: "busy".to_string(),
        };
        let err = classify(
            Outcome::Exhausted {
                attempts: 4,
                cause: cause.clone(),
            },
            "/law",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::TransientFailure { attempts: 4, cause: ref c } if *c == cause
        ));

        let err = classify(
            Outcome::DeadlineExceeded {
                attempts: 2,
                cause: None,
            },
            "/law",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::DeadlineExceeded {
                attempts: 2,
                cause: None
            }
        ));

        let err = classify(
            Outcome::Unsendable(TransportError::InvalidUrl("no host".into())),
            "/law",
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter { ref name, .. } if name == "url"));
    }

    #[test]
    fn unreadable_body_is_malformed() {
        let outcome = Outcome::Unreadable("body exceeds 10485760 bytes".into());
        match classify(outcome, "/bill").unwrap_err() {
            ApiError::MalformedResponse { path, reason } => {
                assert_eq!(path, "/bill");
                assert!(reason.contains("exceeds"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
