// Request interceptor chain for the protected routes

use crate::core::state::AppState;
use crate::security::{auth_gate::authenticate, correlation::tag_correlation};
use axum::{middleware, Router};
use std::sync::Arc;

/// A cross-cutting step applied around the user handlers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interceptor {
    /// Set a fresh `X-Api-Correlation-Id` on the response
    TagCorrelation,
    /// Reject requests without the current bearer token
    Authenticate,
}

/// Ordered interceptors, listed outermost first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPipeline {
    interceptors: Vec<Interceptor>,
}

impl RequestPipeline {
    pub fn new(interceptors: Vec<Interceptor>) -> Self {
        Self { interceptors }
    }

    /// Correlation tagging around authentication, so 401s are tagged too
    pub fn standard() -> Self {
        Self::new(vec![Interceptor::TagCorrelation, Interceptor::Authenticate])
    }

    pub fn interceptors(&self) -> &[Interceptor] {
        &self.interceptors
    }

    /// Apply the chain to `router`
    ///
    /// Each `layer` call wraps everything added before it, so layers are
    /// registered innermost first.
    pub fn wrap(&self, router: Router<Arc<AppState>>, state: &Arc<AppState>) -> Router<Arc<AppState>> {
        self.interceptors
            .iter()
            .rev()
            .fold(router, |router, interceptor| match interceptor {
                Interceptor::TagCorrelation => router.layer(middleware::from_fn(tag_correlation)),
                Interceptor::Authenticate => router.layer(middleware::from_fn_with_state(
                    Arc::clone(state),
                    authenticate,
                )),
            })
    }
}

impl Default for RequestPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
