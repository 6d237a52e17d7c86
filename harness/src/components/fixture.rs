use anyhow::Context;
use async_trait::async_trait;
use slog::{info, Logger};

use crate::env::ENV_VARS;
use crate::log::discard;

/// One chain action together with the checks that the query node projects
/// it correctly.
///
/// `execute` submits the action and returns everything the checks need;
/// the checks never run before that value exists. Errors from the chain
/// are returned as they are.
#[async_trait]
pub trait Fixture: Send + Sync {
    type Output: Send + Sync;

    fn name(&self) -> &str;

    async fn execute(&self) -> anyhow::Result<Self::Output>;

    /// Checks shared by all fixtures. Runs before
    /// [`Fixture::run_query_node_checks`].
    async fn base_query_node_checks(&self, _output: &Self::Output) -> anyhow::Result<()> {
        Ok(())
    }

    async fn run_query_node_checks(&self, output: &Self::Output) -> anyhow::Result<()>;
}

pub struct FixtureRunner<F> {
    fixture: F,
    logger: Logger,
    query_node_checks: bool,
}

impl<F: Fixture> FixtureRunner<F> {
    pub fn new(fixture: F) -> Self {
        Self {
            fixture,
            logger: discard(),
            query_node_checks: !ENV_VARS.skip_query_node_checks(),
        }
    }

    pub fn with_logger(mut self, logger: &Logger) -> Self {
        self.logger = logger.clone();
        self
    }

    /// Overrides `QN_SKIP_QUERY_NODE_CHECKS` for
    /// [`FixtureRunner::run_with_query_node_checks`].
    pub fn with_query_node_checks(mut self, enabled: bool) -> Self {
        self.query_node_checks = enabled;
        self
    }

    /// Executes the fixture's chain action.
    pub async fn run(self) -> anyhow::Result<ExecutedFixture<F>> {
        let Self {
            fixture, logger, ..
        } = self;

        info!(logger, "Executing"; "fixture" => fixture.name());
        let output = fixture.execute().await?;

        Ok(ExecutedFixture {
            fixture,
            output,
            logger,
        })
    }

    /// Executes the fixture and, unless disabled, runs its query node
    /// checks right after.
    pub async fn run_with_query_node_checks(self) -> anyhow::Result<F::Output> {
        let checks = self.query_node_checks;
        let executed = self.run().await?;

        if checks {
            executed.run_query_node_checks().await?;
        } else {
            info!(executed.logger, "Skipping query node checks"; "fixture" => executed.fixture.name());
        }

        Ok(executed.into_output())
    }
}

/// A fixture whose chain action went through.
pub struct ExecutedFixture<F: Fixture> {
    fixture: F,
    output: F::Output,
    logger: Logger,
}

impl<F: Fixture> ExecutedFixture<F> {
    pub fn fixture(&self) -> &F {
        &self.fixture
    }

    pub fn output(&self) -> &F::Output {
        &self.output
    }

    pub fn into_output(self) -> F::Output {
        self.output
    }

    pub async fn run_query_node_checks(&self) -> anyhow::Result<()> {
        let name = self.fixture.name();

        async {
            self.fixture.base_query_node_checks(&self.output).await?;
            self.fixture.run_query_node_checks(&self.output).await
        }
        .await
        .with_context(|| format!("query node checks of {} failed", name))?;

        info!(self.logger, "Query node checks passed"; "fixture" => name);
        Ok(())
    }
}
