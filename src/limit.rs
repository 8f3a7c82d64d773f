//! Fixed-window rate limiting, keyed by client address and route path.
//!
//! This is the only mutable state in the process. A window opens on a
//! client's first request to a route and closes after one minute; requests
//! past the budget inside a window are rejected with 429.

use std::{
    collections::HashMap,
    net::{IpAddr, SocketAddr},
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::AppError, state::AppState};

const WINDOW: Duration = Duration::from_secs(60);

struct Window {
    opened: Instant,
    count: u32,
}

pub struct RateLimiter {
    budget: u32,
    windows: Mutex<HashMap<(IpAddr, String), Window>>,
}

impl RateLimiter {
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records one request and reports whether it fits the current window.
    pub fn allow(&self, client: IpAddr, route: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap();

        let window = windows
            .entry((client, route.to_string()))
            .or_insert(Window { opened: now, count: 0 });

        if now.duration_since(window.opened) >= WINDOW {
            window.opened = now;
            window.count = 0;
        }

        window.count += 1;
        window.count <= self.budget
    }
}

pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let route = request.uri().path();

    if !state.limiter.allow(addr.ip(), route) {
        debug!("Rate limited {} on {route}", addr.ip());
        return Err(AppError::RateLimited);
    }

    Ok(next.run(request).await)
}
