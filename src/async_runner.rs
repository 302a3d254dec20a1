#![cfg(feature = "async")]

use crate::error::{MissingMate, RunError};
use crate::invocation::Invocation;
use crate::options::TrimOptions;
use crate::runner::{
    BatchOutcome, BatchReport, HaltReason, Observer, RunResult, Step, ToolExit, halted,
    plan_step, settle, skipped, total_hint,
};
use crate::unit::WorkUnit;

use std::future::Future;
use tokio::process::Command;

/// Async counterpart of [`crate::runner::ProcessRunner`].
pub trait AsyncProcessRunner {
    fn run(
        &mut self,
        invocation: &Invocation,
    ) -> impl Future<Output = Result<ToolExit, RunError>> + Send;
}

/// Spawns the tool through tokio and awaits its exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

impl AsyncProcessRunner for TokioRunner {
    async fn run(&mut self, invocation: &Invocation) -> Result<ToolExit, RunError> {
        let status = Command::from(invocation.to_command())
            .status()
            .await
            .map_err(|e| RunError::spawn_err(e, invocation.program().to_path_buf()))?;
        Ok(status.code())
    }
}

/// Same policy as [`crate::runner::RunController`]; one child at a time.
pub struct AsyncRunController<R, O> {
    opts: TrimOptions,
    runner: R,
    observer: O,
}

impl<R: AsyncProcessRunner, O: Observer> AsyncRunController<R, O> {
    pub fn new(opts: TrimOptions, runner: R, observer: O) -> Self {
        Self {
            opts,
            runner,
            observer,
        }
    }

    pub fn into_parts(self) -> (R, O) {
        (self.runner, self.observer)
    }

    pub async fn run<I>(&mut self, units: I) -> BatchReport
    where
        I: IntoIterator<Item = Result<WorkUnit, MissingMate>>,
    {
        let units = units.into_iter();
        let total = total_hint(units.size_hint());
        let mut results: Vec<RunResult> = Vec::new();

        for (i, item) in units.enumerate() {
            let unit = match item {
                Ok(unit) => unit,
                Err(missing) => {
                    return halted(&mut self.observer, results, HaltReason::MissingMate(missing));
                }
            };

            let (result, halt) = match plan_step(&unit, &self.opts) {
                Step::Skip => (skipped(unit), None),
                Step::Invoke(invocation) => {
                    log::debug!("> {invocation}");
                    let outcome = self.runner.run(&invocation).await;
                    settle(unit, outcome)
                }
            };

            self.observer.on_result(i + 1, total, &result);
            results.push(result);

            if let Some(reason) = halt {
                return halted(&mut self.observer, results, reason);
            }
        }

        BatchReport {
            results,
            outcome: BatchOutcome::Completed,
        }
    }
}
