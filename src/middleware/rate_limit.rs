use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};

use crate::dto::response::ApiResponse;

#[derive(Debug)]
struct Window {
    opened: Instant,
    admitted: u32,
}

/// Fixed-window limiter shared by every request through a route group.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    limit: u32,
    period: Duration,
    window: Arc<Mutex<Window>>,
}

impl RateLimiter {
    /// `rps` requests per second; zero is treated as one.
    pub fn new(rps: u32) -> Self {
        Self::with_period(rps, Duration::from_secs(1))
    }

    pub fn with_period(limit: u32, period: Duration) -> Self {
        Self {
            limit: limit.max(1),
            period,
            window: Arc::new(Mutex::new(Window {
                opened: Instant::now(),
                admitted: 0,
            })),
        }
    }

    /// Admits the request, or returns how long until the window reopens.
    fn try_admit(&self, at: Instant) -> Result<(), Duration> {
        let mut window = self
            .window
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let elapsed = at.saturating_duration_since(window.opened);
        if elapsed >= self.period {
            window.opened = at;
            window.admitted = 0;
        }
        if window.admitted >= self.limit {
            return Err(self.period.saturating_sub(elapsed));
        }
        window.admitted += 1;
        Ok(())
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Err(wait) = limiter.try_admit(Instant::now()) {
        tracing::warn!(path = %req.uri().path(), "Rate limit exceeded");
        let retry_after = wait.as_secs().max(1);
        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::message("rate limit exceeded")),
        )
            .into_response();
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
        return response;
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_admits_at_most_limit_requests() {
        let limiter = RateLimiter::new(2);
        let at = Instant::now();
        assert!(limiter.try_admit(at).is_ok());
        assert!(limiter.try_admit(at).is_ok());
        assert!(limiter.try_admit(at).is_err());
    }

    #[test]
    fn zero_rps_still_admits_one() {
        let limiter = RateLimiter::new(0);
        let at = Instant::now();
        assert!(limiter.try_admit(at).is_ok());
        assert!(limiter.try_admit(at).is_err());
    }

    #[test]
    fn window_reopens_after_the_period() {
        let limiter = RateLimiter::with_period(1, Duration::from_millis(50));
        let at = Instant::now();
        assert!(limiter.try_admit(at).is_ok());
        assert!(limiter.try_admit(at).is_err());
        assert!(limiter.try_admit(at + Duration::from_millis(60)).is_ok());
    }
}
