pub extern crate anyhow;
pub extern crate async_trait;
pub extern crate chrono;
pub extern crate serde_json;
pub extern crate slog;
pub extern crate tokio;

/// HTTP access to a query node.
pub mod client;

/// Traits at the boundaries of the harness.
pub mod components;

/// Data types shared by chain and query node checks.
pub mod data;

/// Settings read from the environment.
pub mod env;

/// Logging.
pub mod log;

/// Utilities.
pub mod util;

/// Everything a fixture or flow usually needs.
///
/// ```
/// use qn_harness::prelude::*;
/// ```
pub mod prelude {
    pub use anyhow::{anyhow, bail, ensure, Context as _};
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde_derive::{Deserialize, Serialize};
    pub use serde_json::{self, json, Value};
    pub use slog::{self, crit, debug, error, info, o, trace, warn, Logger};
    pub use std::fmt::Debug;
    pub use std::sync::Arc;
    pub use std::time::Duration;

    pub use crate::client::{GraphQlClient, QueryError};
    pub use crate::components::fixture::{ExecutedFixture, Fixture, FixtureRunner};
    pub use crate::components::query::{query_as, QueryExecutor};
    pub use crate::data::event::{EventDetails, IndexedEvent};
    pub use crate::data::id::{entity_id, event_id};
    pub use crate::data::snapshot::{ComparisonOp, SnapshotAt};
    pub use crate::env::ENV_VARS;
    pub use crate::log::component_logger;
    pub use crate::util::futures::{try_query_with_timeout, ConvergenceError, PollSettings};
}
