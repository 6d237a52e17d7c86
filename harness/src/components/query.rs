use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::QueryError;

/// Runs GraphQL documents against a query node.
///
/// Implemented by the HTTP client and by anything standing in for a query
/// node in tests. Implementations return the `data` object of the response;
/// an entity the index does not know yet shows up as `null` inside it, not
/// as an error.
#[async_trait]
pub trait QueryExecutor: Send + Sync + 'static {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, QueryError>;
}

/// Runs `document` and decodes the `data` object into `T`.
pub async fn query_as<T: DeserializeOwned>(
    executor: &dyn QueryExecutor,
    document: &str,
    variables: Value,
) -> Result<T, QueryError> {
    let data = executor.execute(document, variables).await?;
    Ok(serde_json::from_value(data)?)
}
