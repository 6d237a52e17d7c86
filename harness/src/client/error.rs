use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("'{input}' is not a valid query node URL: {source:#}")]
    InvalidUrl {
        input: String,
        source: anyhow::Error,
    },

    #[error("request to query node failed: {0:#}")]
    Transport(#[source] reqwest::Error),

    #[error("query node responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("query node returned errors: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("query node returned no data")]
    MissingData,

    #[error("failed to decode query node response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl QueryError {
    /// Returns true if the query never reached a working query node.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
