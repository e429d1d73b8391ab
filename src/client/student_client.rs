//! Student API client
//!
//! One method per endpoint. Non-2xx responses become `ClientError::Api`
//! carrying the server's `error` message.

use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{ClientError, ClientResult};
use crate::http_server::{ErrorResponse, HealthResponse, RecordResponse};
use crate::store::Record;

/// Typed client for the student JSON API
#[derive(Debug, Clone)]
pub struct StudentClient {
    base: Url,
    http: Client,
}

impl StudentClient {
    /// Create a client for a server such as `http://127.0.0.1:9393`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(Method::GET, &["health"], None::<&()>).await
    }

    pub async fn list_records(&self) -> ClientResult<Vec<Record>> {
        self.send(Method::GET, &["students"], None::<&()>).await
    }

    pub async fn get_record(&self, id: u64) -> ClientResult<Record> {
        let id = id.to_string();
        self.send(Method::GET, &["students", &id], None::<&()>).await
    }

    /// `fields` is any JSON-serializable body, typically a `RecordInput`
    pub async fn create_record<B: Serialize>(&self, fields: &B) -> ClientResult<RecordResponse> {
        self.send(Method::POST, &["students"], Some(fields)).await
    }

    pub async fn update_record<B: Serialize>(
        &self,
        id: u64,
        fields: &B,
    ) -> ClientResult<RecordResponse> {
        let id = id.to_string();
        self.send(Method::PUT, &["students", &id], Some(fields)).await
    }

    pub async fn delete_record(&self, id: u64) -> ClientResult<RecordResponse> {
        let id = id.to_string();
        self.send(Method::DELETE, &["students", &id], None::<&()>).await
    }

    /// An empty query lists every record
    pub async fn search_records(&self, query: &str) -> ClientResult<Vec<Record>> {
        if query.is_empty() {
            return self.send(Method::GET, &["students", "search"], None::<&()>).await;
        }
        self.send(Method::GET, &["students", "search", query], None::<&()>)
            .await
    }

    /// Build `<base>/api/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method, self.endpoint(segments)?);
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(request.send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
