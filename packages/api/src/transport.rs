use std::future::Future;

use serde_json::Value;

use crate::error::SyncError;

/// How requests reach the backend.
///
/// Both methods resolve to the decoded JSON body. The browser carries the
/// session cookie, so implementations add no authentication of their own.
pub trait Transport {
    fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, SyncError>>;
    fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Value, SyncError>>;
}

/// `reqwest`-backed transport. Works natively and in the browser.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` is the backend origin without a trailing slash,
    /// e.g. `"http://localhost:5000"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value, SyncError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Ok(response.json::<Value>().await?)
    }

    async fn post_form(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<Value, SyncError> {
        let response = self.client.post(self.url(path)).form(fields).send().await?;
        Ok(response.json::<Value>().await?)
    }
}
