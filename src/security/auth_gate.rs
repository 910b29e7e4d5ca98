use crate::core::error::ServiceError;
use crate::core::state::AppState;
use crate::utils::auth::{bearer, verify_bearer};
use crate::utils::time::{minute_token, Clock};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

/// Checks the Authorization header against the current minute token
///
/// The expected value is `Bearer <YYYY-MM-DDThh:mm>` on the gate's clock.
/// A request signed in one minute and checked in the next is rejected.
pub struct AuthGate {
    clock: Arc<dyn Clock>,
}

impl AuthGate {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The Authorization value accepted right now
    pub fn expected(&self) -> String {
        bearer(&minute_token(&self.clock.now()))
    }

    pub fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match authorization {
            Some(value) => verify_bearer(value, &self.expected()),
            None => false,
        }
    }
}

/// Middleware: reject requests without the current bearer token
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    // Non-UTF-8 values are treated like a missing header
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !state.auth_gate.is_authorized(authorization) {
        warn!(
            path = %req.uri().path(),
            has_header = authorization.is_some(),
            "Unauthorized request"
        );
        return Err(ServiceError::Unauthorized);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::user_store::UserStore;
    use crate::utils::time::FixedClock;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use chrono::{DateTime, Local, NaiveDate, TimeZone};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn gate_at(now: DateTime<Local>) -> AuthGate {
        AuthGate::new(Arc::new(FixedClock(now)))
    }

    #[test]
    fn test_expected_value() {
        assert_eq!(gate_at(at(13, 45, 30)).expected(), "Bearer 2019-01-01T13:45");
    }

    #[test]
    fn test_accepts_current_minute() {
        let gate = gate_at(at(13, 45, 30));
        assert!(gate.is_authorized(Some("Bearer 2019-01-01T13:45")));
    }

    #[test]
    fn test_rejects_missing_or_malformed() {
        let gate = gate_at(at(13, 45, 30));

        assert!(!gate.is_authorized(None));
        assert!(!gate.is_authorized(Some("")));
        assert!(!gate.is_authorized(Some("Bearer ")));
        assert!(!gate.is_authorized(Some("2019-01-01T13:45")));
        assert!(!gate.is_authorized(Some("Bearer 2019-01-01T13:45 ")));
    }

    #[test]
    fn test_rejects_previous_minute_at_rollover() {
        // Signed at 13:45:59, checked at 13:46:00
        let signed = format!("Bearer {}", minute_token(&at(13, 45, 59)));
        let gate = gate_at(at(13, 46, 0));

        assert!(!gate.is_authorized(Some(&signed)));
    }

    fn protected_app(now: DateTime<Local>) -> Router {
        let state = Arc::new(AppState::with_clock(
            UserStore::new(),
            Arc::new(FixedClock(now)),
        ));
        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(state.clone(), authenticate))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_middleware_passes_valid_token() {
        let app = protected_app(at(8, 0, 0));
        let req = Request::builder()
            .uri("/secret")
            .header(header::AUTHORIZATION, "Bearer 2019-01-01T08:00")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_middleware_rejects_with_empty_json_401() {
        let app = protected_app(at(8, 0, 0));
        let req = Request::builder()
            .uri("/secret")
            .header(header::AUTHORIZATION, "Bearer 2019-01-01T07:59")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
