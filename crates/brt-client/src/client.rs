//! BRT API client
//!
//! Thin reqwest wrapper used by the contract suites. Generic verbs return
//! the raw status and JSON body; typed helpers cover each endpoint.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{CallRecordPayload, CdrRecordPayload};

static NULL: Value = Value::Null;

/// Status and decoded body of one API call
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub status: StatusCode,
    /// JSON body, `Null` when the response was empty
    pub body: Value,
}

impl ClientResponse {
    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }

    /// Top-level body field, `Null` if absent
    pub fn field(&self, name: &str) -> &Value {
        self.body.get(name).unwrap_or(&NULL)
    }

    /// Top-level numeric field as an exact decimal
    ///
    /// Accepts JSON numbers of any precision as well as numeric strings.
    pub fn decimal(&self, name: &str) -> ClientResult<Decimal> {
        serde_json::from_value(self.field(name).clone()).map_err(|e| {
            ClientError::Decode(format!("{} is not a decimal ({}): {}", name, e, self.field(name)))
        })
    }

    /// Error message from the standard error envelope
    pub fn message(&self) -> Option<&str> {
        self.field("message").as_str()
    }

    /// Fail unless the status is 2xx
    pub fn ensure_success(self) -> ClientResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ClientError::UnexpectedStatus {
                status: self.status.as_u16(),
                body: self.body.to_string(),
            })
        }
    }
}

#[derive(Serialize)]
struct BalanceUpdate {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
}

/// HTTP client for the BRT billing API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client from `BRT_API_BASE_URL` and `BRT_API_TIMEOUT_SECS`
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    #[instrument(skip(self, query, body), fields(base_url = %self.config.base_url))]
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> ClientResult<ClientResponse> {
        let url = self.config.endpoint(segments)?;
        let mut request = self.client.request(method.clone(), url);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();
        let text = response.text().await?;

        debug!(method = %method, url = %url, status = %status, "API response");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(ClientResponse { status, body })
    }

    /// GET an endpoint given as path segments below `/api`
    pub async fn get(&self, segments: &[&str]) -> ClientResult<ClientResponse> {
        self.send(Method::GET, segments, &[], None).await
    }

    /// GET with query parameters
    pub async fn get_with_query(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ClientResult<ClientResponse> {
        self.send(Method::GET, segments, query, None).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> ClientResult<ClientResponse> {
        self.send(Method::POST, segments, &[], Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> ClientResult<ClientResponse> {
        self.send(Method::PUT, segments, &[], Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch_json<T: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> ClientResult<ClientResponse> {
        self.send(Method::PATCH, segments, &[], Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete(&self, segments: &[&str]) -> ClientResult<ClientResponse> {
        self.send(Method::DELETE, segments, &[], None).await
    }

    // Call records

    pub async fn create_call(&self, record: &CallRecordPayload) -> ClientResult<ClientResponse> {
        self.post_json(&["calls"], record).await
    }

    pub async fn get_call(&self, id: &str) -> ClientResult<ClientResponse> {
        self.get(&["calls", id]).await
    }

    pub async fn list_calls(&self, msisdn: Option<&str>) -> ClientResult<ClientResponse> {
        match msisdn {
            Some(msisdn) => self.get_with_query(&["calls"], &[("msisdn", msisdn)]).await,
            None => self.get(&["calls"]).await,
        }
    }

    // Subscribers

    pub async fn get_subscriber(&self, msisdn: &str) -> ClientResult<ClientResponse> {
        self.get(&["subscribers", msisdn]).await
    }

    /// Add `amount` to the subscriber balance
    pub async fn update_balance(
        &self,
        msisdn: &str,
        amount: Decimal,
    ) -> ClientResult<ClientResponse> {
        self.patch_json(&["subscribers", msisdn, "balance"], &BalanceUpdate { amount })
            .await
    }

    /// Current balance of an existing subscriber
    pub async fn current_balance(&self, msisdn: &str) -> ClientResult<Decimal> {
        self.get_subscriber(msisdn)
            .await?
            .ensure_success()?
            .decimal("balance")
    }

    // CDRs

    pub async fn create_cdr(&self, record: &CdrRecordPayload) -> ClientResult<ClientResponse> {
        self.post_json(&["cdr"], record).await
    }

    pub async fn get_cdr(&self, id: &str) -> ClientResult<ClientResponse> {
        self.get(&["cdr", id]).await
    }

    pub async fn update_cdr(
        &self,
        id: &str,
        record: &CdrRecordPayload,
    ) -> ClientResult<ClientResponse> {
        self.put_json(&["cdr", id], record).await
    }

    pub async fn delete_cdr(&self, id: &str) -> ClientResult<ClientResponse> {
        self.delete(&["cdr", id]).await
    }

    pub async fn list_cdrs(&self, caller: Option<&str>) -> ClientResult<ClientResponse> {
        match caller {
            Some(caller) => self.get_with_query(&["cdr"], &[("caller", caller)]).await,
            None => self.get(&["cdr"]).await,
        }
    }

    pub async fn health(&self) -> ClientResult<ClientResponse> {
        self.get(&["health"]).await
    }
}
