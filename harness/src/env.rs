use envconfig::Envconfig;
use lazy_static::lazy_static;
use std::{str::FromStr, time::Duration};

lazy_static! {
    pub static ref ENV_VARS: EnvVars = EnvVars::from_env().unwrap();
}

/// Harness settings read from the environment. Every value has a default
/// so that the harness can run against a local query node without any
/// configuration.
#[derive(Clone, Debug)]
pub struct EnvVars {
    inner: Inner,
}

impl EnvVars {
    pub fn from_env() -> Result<Self, envconfig::Error> {
        let inner = Inner::init_from_env()?;
        Ok(Self { inner })
    }

    /// The GraphQL endpoint of the query node.
    ///
    /// Set by the environment variable `QN_QUERY_NODE_URL`. The default
    /// value is `http://localhost:8081/graphql`.
    pub fn query_node_url(&self) -> &str {
        &self.inner.query_node_url
    }

    /// How long the convergence poller keeps retrying a query before giving
    /// up.
    ///
    /// Set by the environment variable `QN_QUERY_NODE_TIMEOUT_MS`. The
    /// default value is 210s.
    pub fn query_node_timeout(&self) -> Duration {
        Duration::from_millis(self.inner.query_node_timeout_in_ms)
    }

    /// The fixed delay between two attempts of the convergence poller.
    ///
    /// Set by the environment variable `QN_QUERY_NODE_RETRY_INTERVAL_MS`.
    /// The default value is 30s.
    pub fn query_node_retry_interval(&self) -> Duration {
        Duration::from_millis(self.inner.query_node_retry_interval_in_ms)
    }

    /// Set by the flag `QN_SKIP_QUERY_NODE_CHECKS`. Off by default.
    pub fn skip_query_node_checks(&self) -> bool {
        self.inner.skip_query_node_checks.0
    }

    /// Set by the flag `QN_DEBUG`. Off by default.
    pub fn debug(&self) -> bool {
        self.inner.debug.0
    }

    /// Per-module log levels in `slog-envlogger` syntax, set by `QN_LOG`.
    pub fn log_levels(&self) -> &str {
        &self.inner.log_levels
    }

    /// Only run the test case with this name. Set by `QN_TEST_CASE`.
    pub fn test_case(&self) -> Option<&str> {
        self.inner.test_case.as_deref()
    }

    /// How many test cases a scenario runs at the same time.
    ///
    /// Set by the environment variable `QN_PARALLEL_FLOWS`. The default
    /// value is 1, i.e. test cases run one after the other.
    pub fn parallel_flows(&self) -> usize {
        self.inner.parallel_flows.max(1)
    }

    /// Ingestion delay of the simulated index.
    ///
    /// Set by the environment variable `QN_MOCK_INDEX_LAG_MS`. The default
    /// value is 0.
    pub fn mock_index_lag(&self) -> Duration {
        Duration::from_millis(self.inner.mock_index_lag_in_ms)
    }
}

impl Default for EnvVars {
    fn default() -> Self {
        ENV_VARS.clone()
    }
}

#[derive(Clone, Debug, Envconfig)]
struct Inner {
    #[envconfig(from = "QN_QUERY_NODE_URL", default = "http://localhost:8081/graphql")]
    query_node_url: String,
    #[envconfig(from = "QN_QUERY_NODE_TIMEOUT_MS", default = "210000")]
    query_node_timeout_in_ms: u64,
    #[envconfig(from = "QN_QUERY_NODE_RETRY_INTERVAL_MS", default = "30000")]
    query_node_retry_interval_in_ms: u64,
    #[envconfig(from = "QN_SKIP_QUERY_NODE_CHECKS", default = "false")]
    skip_query_node_checks: EnvVarBoolean,
    #[envconfig(from = "QN_DEBUG", default = "false")]
    debug: EnvVarBoolean,
    #[envconfig(from = "QN_LOG", default = "")]
    log_levels: String,
    #[envconfig(from = "QN_TEST_CASE")]
    test_case: Option<String>,
    #[envconfig(from = "QN_PARALLEL_FLOWS", default = "1")]
    parallel_flows: usize,
    #[envconfig(from = "QN_MOCK_INDEX_LAG_MS", default = "0")]
    mock_index_lag_in_ms: u64,
}

#[derive(Copy, Clone, Debug)]
struct EnvVarBoolean(pub bool);

impl FromStr for EnvVarBoolean {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            _ => Err("Invalid env. var. flag, expected true / false / 1 / 0".to_string()),
        }
    }
}
