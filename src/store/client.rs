use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    store::{Query, Representation, Table},
};
use anyhow::Context;
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Outcome of the connectivity probe.
#[derive(Debug, Serialize)]
pub struct Probe {
    pub ok: bool,
    pub status_code: u16,
    /// Decoded JSON on success, the raw text otherwise
    pub body: Value,
}

/// Stateless handle on the remote store. Cloning shares the connection pool.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    health_timeout: Duration,
}

impl StoreClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.store_key).context("store key is not a valid header")?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.store_key))
                .context("store key is not a valid header")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.store_url.clone(),
            health_timeout: config.health_timeout,
        })
    }

    fn request(&self, method: Method, table: Table, query: &Query) -> RequestBuilder {
        debug!(%method, %table, %query, "Forwarding to store");
        self.client
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .query(query.pairs())
    }

    /// Fails with `Upstream` on any non-2xx answer, carrying the body text.
    async fn check(resp: Response) -> ApiResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await?;
        Err(ApiError::Upstream {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn select<T: DeserializeOwned>(&self, table: Table, query: &Query) -> ApiResult<Vec<T>> {
        let resp = self.request(Method::GET, table, query).send().await?;
        let resp = Self::check(resp).await?;
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Internal(format!("unexpected {table} payload: {e}")))
    }

    /// The returned rows are kept whole, store-generated columns included.
    pub async fn insert<B, T>(&self, table: Table, row: &B) -> ApiResult<Representation<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, table, &Query::new())
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        resp.json::<Representation<T>>()
            .await
            .map_err(|e| ApiError::Internal(format!("unexpected {table} payload: {e}")))
    }

    /// Deletes every row matching `query`. A 204 with no body counts as success.
    pub async fn delete(&self, table: Table, query: &Query) -> ApiResult<()> {
        let resp = self.request(Method::DELETE, table, query).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Reads at most one employee to validate connectivity and credentials.
    ///
    /// Any failure, including an unreachable store, is reported as `Internal`.
    pub async fn probe(&self) -> ApiResult<Probe> {
        let query = Query::new().select(&["employee_id"]).limit(1);
        let resp = self
            .request(Method::GET, Table::Employees, &query)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let status = resp.status();
        let body = match status.is_success() {
            true => resp.json::<Value>().await,
            false => resp.text().await.map(Value::String),
        };
        let body = body.map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(Probe {
            ok: status.is_success(),
            status_code: status.as_u16(),
            body,
        })
    }
}
