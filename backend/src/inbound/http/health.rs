//! Health endpoints: liveness and readiness probes for orchestration and
//! load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Shared health state for readiness and liveness checks.
///
/// Readiness flips to true once the server has bound its listener; liveness
/// stays true until shutdown begins.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during
    /// shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to
    /// trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. Returns 200 once the listener is bound and 503 before.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process is marked alive and 503
/// once draining.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    //! Unit tests for probe state transitions.

    use actix_web::http::StatusCode;

    use super::HealthState;

    #[test]
    fn starts_not_ready_but_alive() {
        let state = HealthState::new();
        assert!(!state.is_ready());
        assert!(state.is_alive());
    }

    #[test]
    fn marking_ready_is_visible() {
        let state = HealthState::new();
        state.mark_ready();
        assert!(state.is_ready());
    }

    #[test]
    fn marking_unhealthy_fails_liveness() {
        let state = HealthState::new();
        state.mark_unhealthy();
        assert!(!state.is_alive());
    }

    #[test]
    fn probes_set_no_store_and_status() {
        let ok = HealthState::probe_response(true);
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(
            ok.headers()
                .get("cache-control")
                .and_then(|value| value.to_str().ok()),
            Some("no-store"),
        );

        let degraded = HealthState::probe_response(false);
        assert_eq!(degraded.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
