//! In-memory transport double for exercising page-level flows

use crate::api::Transport;
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Route-table transport: GET paths map to canned envelopes, POSTs are
/// recorded. Tracks the high-water mark of concurrent in-flight calls so
/// concurrency caps can be asserted.
#[derive(Default)]
pub struct MockTransport {
    get_routes: HashMap<String, Value>,
    post_routes: HashMap<String, Value>,
    broken: HashSet<String>,
    delay: Option<Duration>,
    posted: Mutex<Vec<(String, Value)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a successful envelope for a GET path
    pub fn route(mut self, path: &str, data: Value) -> Self {
        self.get_routes
            .insert(path.to_string(), json!({"success": true, "data": data}));
        self
    }

    /// Serve a failure envelope for a GET path
    pub fn route_failure(mut self, path: &str, message: &str) -> Self {
        self.get_routes
            .insert(path.to_string(), json!({"success": false, "message": message}));
        self
    }

    /// Serve a successful envelope for a POST path
    pub fn route_post(mut self, path: &str, data: Value) -> Self {
        self.post_routes
            .insert(path.to_string(), json!({"success": true, "data": data}));
        self
    }

    /// Make a path fail at the transport level (network error)
    pub fn break_route(mut self, path: &str) -> Self {
        self.broken.insert(path.to_string());
        self
    }

    /// Delay every call, to make concurrency observable
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Bodies recorded from POST calls, in order
    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().unwrap().clone()
    }

    /// Highest number of calls ever in flight at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, path: &str) -> ClientResult<Value> {
        self.enter().await;
        let result = if self.broken.contains(path) {
            Err(ClientError::Internal(format!("broken route: {}", path)))
        } else {
            self.get_routes
                .get(path)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(path.to_string()))
        };
        self.exit();
        result
    }

    async fn post_json(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.enter().await;
        let result = if self.broken.contains(path) {
            Err(ClientError::Internal(format!("broken route: {}", path)))
        } else {
            self.posted.lock().unwrap().push((path.to_string(), body));
            self.post_routes
                .get(path)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(path.to_string()))
        };
        self.exit();
        result
    }
}
