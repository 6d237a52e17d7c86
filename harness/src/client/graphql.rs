use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use slog::{trace, Logger};
use url::Url;

use crate::client::QueryError;
use crate::components::query::QueryExecutor;
use crate::env::ENV_VARS;

#[derive(Serialize)]
struct Request<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct Response {
    data: Option<Value>,
    errors: Option<Vec<ResponseError>>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

/// A client that posts GraphQL documents to a query node over HTTP.
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    url: Url,
    http_client: reqwest::Client,
    logger: Logger,
    request_timeout: Option<Duration>,
}

impl GraphQlClient {
    pub fn new(url: impl AsRef<str>, logger: &Logger) -> Result<Self, QueryError> {
        let input = url.as_ref();
        let url = Url::parse(input).map_err(|e| QueryError::InvalidUrl {
            input: input.to_owned(),
            source: e.into(),
        })?;

        Ok(Self {
            url,
            http_client: reqwest::Client::new(),
            logger: logger.to_owned(),
            request_timeout: None,
        })
    }

    /// Creates a client for the query node configured with
    /// `QN_QUERY_NODE_URL`.
    pub fn from_env(logger: &Logger) -> Result<Self, QueryError> {
        Self::new(ENV_VARS.query_node_url(), logger)
    }

    /// Bounds every single request. Without it a request only ends when the
    /// enclosing poll times out.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QueryExecutor for GraphQlClient {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, QueryError> {
        trace!(self.logger, "Sending query"; "url" => self.url.as_str(), "variables" => %variables);

        let mut req = self.http_client.post(self.url.clone()).json(&Request {
            query: document,
            variables: &variables,
        });

        if let Some(timeout) = self.request_timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        let Response { data, errors } = serde_json::from_slice(&bytes)?;

        if let Some(errors) = errors.filter(|errors| !errors.is_empty()) {
            return Err(QueryError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        match data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(QueryError::MissingData),
        }
    }
}
