use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::error::SyncError;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request as seen by [`ScriptedTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// In-memory transport for tests and demos.
///
/// Replies are served in the order they were queued, regardless of path.
/// Every request is recorded so callers can assert on what was sent.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<Value, SyncError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body.
    pub fn reply(&self, body: Value) -> &Self {
        self.push(Ok(body));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, reason: &str) -> &Self {
        self.push(Err(SyncError::Transport(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, reply: Result<Value, SyncError>) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }

    fn serve(&self, method: Method, path: &str, params: &[(&'static str, String)]) -> Result<Value, SyncError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                params: params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect(),
            });
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(SyncError::Transport(format!("no scripted reply for {path}"))))
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value, SyncError> {
        self.serve(Method::Get, path, query)
    }

    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Value, SyncError> {
        self.serve(Method::Post, path, fields)
    }
}
