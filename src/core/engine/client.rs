//! HTTP client for the search engine.
//!
//! One [`EngineClient`] owns the connection pool and is shared by every
//! component. [`IndexHandle`]s are cheap borrowed views onto a named
//! collection and are taken fresh for each operation.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::core::config::EngineConfig;
use crate::core::document::Document;
use crate::core::engine::types::{
    EngineErrorBody, IndexSettings, IndexStats, RawSearchResponse, SearchQuery, Task, TaskInfo,
};
use crate::core::error::{MemexError, Result};

/// Connection to the search engine
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: Client,
    base_url: String,
    index_name: String,
    api_key: Option<String>,
    task_timeout: Duration,
    poll_interval: Duration,
}

impl EngineClient {
    /// Create a client from engine configuration
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(format!("memex/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MemexError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            index_name: config.index_name.clone(),
            api_key: config.api_key.clone(),
            task_timeout: config.task_timeout(),
            poll_interval: config.poll_interval(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Handle on the application's collection
    pub fn index(&self) -> IndexHandle<'_> {
        IndexHandle {
            client: self,
            uid: self.index_name.clone(),
        }
    }

    /// Request creation of a collection keyed by `id`
    ///
    /// A synchronous "already exists" reply is returned as
    /// [`MemexError::AlreadyExists`]; newer engines report it through
    /// the task instead, see [`Task::into_result`].
    pub async fn create_index(&self, name: &str) -> Result<TaskInfo> {
        let body = serde_json::json!({ "uid": name, "primaryKey": "id" });
        self.send(self.request(Method::POST, "/indexes").json(&body))
            .await
    }

    /// Fetch the current state of a task
    pub async fn get_task(&self, task_uid: u64) -> Result<Task> {
        self.send(self.request(Method::GET, &format!("/tasks/{task_uid}")))
            .await
    }

    /// Poll a task until it is terminal or the wait bound elapses
    ///
    /// Returns the last observed task either way. A non-terminal
    /// result means "unknown", not failure.
    pub async fn wait_for_task(&self, task_uid: u64) -> Result<Task> {
        let start = Instant::now();

        loop {
            let task = self.get_task(task_uid).await?;
            if task.status.is_terminal() {
                tracing::debug!("Task {} finished: {}", task_uid, task.status);
                return Ok(task);
            }

            if start.elapsed() + self.poll_interval > self.task_timeout {
                tracing::debug!(
                    "Stopped waiting for task {} after {:?} (status: {})",
                    task_uid,
                    start.elapsed(),
                    task.status
                );
                return Ok(task);
            }

            sleep(self.poll_interval).await;
        }
    }

    /// Whether the engine answers for our collection
    pub async fn health_check(&self) -> bool {
        match self.index().stats().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Health check failed: {}", e);
                false
            }
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<EngineErrorBody>(&text).unwrap_or_else(|_| EngineErrorBody {
            message: text.clone(),
            ..Default::default()
        });

        Err(MemexError::from_engine_code(
            status.as_u16(),
            body.code,
            body.message,
        ))
    }
}

/// Borrowed view on one collection
#[derive(Debug, Clone)]
pub struct IndexHandle<'a> {
    client: &'a EngineClient,
    uid: String,
}

impl IndexHandle<'_> {
    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn path(&self, suffix: &str) -> String {
        format!("/indexes/{}{}", self.uid, suffix)
    }

    /// Add or replace documents by `id`
    pub async fn add_documents(&self, documents: &[Document]) -> Result<TaskInfo> {
        self.write(Method::POST, "/documents?primaryKey=id", documents)
            .await
    }

    /// Remove every document from the collection
    pub async fn delete_all_documents(&self) -> Result<TaskInfo> {
        let request = self
            .client
            .request(Method::DELETE, &self.path("/documents"));
        self.client.send(request).await
    }

    /// Replace searchable/filterable/sortable/displayed attributes
    pub async fn update_settings(&self, settings: &IndexSettings) -> Result<TaskInfo> {
        self.write(Method::PATCH, "/settings", settings).await
    }

    /// Fetch collection statistics
    pub async fn stats(&self) -> Result<IndexStats> {
        let request = self.client.request(Method::GET, &self.path("/stats"));
        self.client.send(request).await
    }

    /// Run a search, returning undecoded hits
    pub async fn search(&self, query: &SearchQuery) -> Result<RawSearchResponse> {
        self.write(Method::POST, "/search", query).await
    }

    async fn write<B, T>(&self, method: Method, suffix: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.request(method, &self.path(suffix)).json(body);
        self.client.send(request).await
    }
}
