use crate::error::{MissingMate, RunError};
use crate::invocation::Invocation;
use crate::options::{Mode, TrimOptions};
use crate::paths::all_exist;
use crate::unit::WorkUnit;

/// Exit code of a finished tool run; `None` when killed by a signal.
pub type ToolExit = Option<i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// All expected outputs were already present.
    Skipped,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub unit: WorkUnit,
    pub status: RunStatus,
    /// `None` when skipped, not launched, or signalled.
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HaltReason {
    MissingMate(MissingMate),
    /// A paired-end unit failed; the rest of the queue was abandoned.
    ToolFailure { unit: WorkUnit, exit_code: Option<i32> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every unit was processed.
    Completed,
    Halted(HaltReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<RunResult>,
    pub outcome: BatchOutcome,
}

impl BatchReport {
    fn count(&self, status: RunStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn skipped(&self) -> usize {
        self.count(RunStatus::Skipped)
    }

    pub fn succeeded(&self) -> usize {
        self.count(RunStatus::Succeeded)
    }

    pub fn failed(&self) -> usize {
        self.count(RunStatus::Failed)
    }

    /// Units for which the tool was actually launched (or attempted).
    pub fn invocations(&self) -> usize {
        self.results.len() - self.skipped()
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Halted(_))
    }
}

/// Spawns the trimming tool and waits for it.
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolExit, RunError>;
}

/// Runs the tool as a direct child process, inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolExit, RunError> {
        let status = invocation
            .to_command()
            .status()
            .map_err(|e| RunError::spawn_err(e, invocation.program().to_path_buf()))?;
        Ok(status.code())
    }
}

/// Progress notifications; purely informational.
pub trait Observer {
    /// Called after each unit; `index` is 1-based, `total` the candidate count.
    fn on_result(&mut self, _index: usize, _total: usize, _result: &RunResult) {}

    fn on_halt(&mut self, _reason: &HaltReason) {}
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_result(&mut self, index: usize, total: usize, result: &RunResult) {
        let out = result.unit.primary_output().display();
        match result.status {
            RunStatus::Skipped => log::info!("[{index}/{total}] {out} already exists, skipping it"),
            RunStatus::Succeeded => log::info!("[{index}/{total}] {out} done"),
            RunStatus::Failed => match result.exit_code {
                Some(code) => log::warn!("[{index}/{total}] {out} failed with exit code {code}"),
                None => log::warn!("[{index}/{total}] {out} failed without an exit code"),
            },
        }
    }

    fn on_halt(&mut self, reason: &HaltReason) {
        match reason {
            HaltReason::MissingMate(err) => log::error!("{err}, finishing"),
            HaltReason::ToolFailure { unit, .. } => log::error!(
                "trimming {} failed, finishing",
                unit.primary_output().display()
            ),
        }
    }
}

/// What to do with one unit before anything is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Skip,
    Invoke(Invocation),
}

/// Idempotency check: skip when every expected output exists.
pub fn plan_step(unit: &WorkUnit, opts: &TrimOptions) -> Step {
    if all_exist(&unit.outputs()) {
        Step::Skip
    } else {
        Step::Invoke(Invocation::build(unit, opts))
    }
}

/// Turn a tool outcome into a result, plus a halt reason when the batch must stop.
pub fn settle(
    unit: WorkUnit,
    outcome: Result<ToolExit, RunError>,
) -> (RunResult, Option<HaltReason>) {
    let (status, exit_code) = match outcome {
        Ok(Some(0)) => (RunStatus::Succeeded, Some(0)),
        Ok(code) => (RunStatus::Failed, code),
        Err(err) => {
            log::warn!("{err}");
            (RunStatus::Failed, None)
        }
    };

    let halt = (status == RunStatus::Failed && unit.mode() == Mode::PairedEnd).then(|| {
        HaltReason::ToolFailure {
            unit: unit.clone(),
            exit_code,
        }
    });

    (
        RunResult {
            unit,
            status,
            exit_code,
        },
        halt,
    )
}

pub(crate) fn skipped(unit: WorkUnit) -> RunResult {
    RunResult {
        unit,
        status: RunStatus::Skipped,
        exit_code: None,
    }
}

/// Notify the observer and close the report as halted.
pub(crate) fn halted<O: Observer>(
    observer: &mut O,
    results: Vec<RunResult>,
    reason: HaltReason,
) -> BatchReport {
    observer.on_halt(&reason);
    BatchReport {
        results,
        outcome: BatchOutcome::Halted(reason),
    }
}

pub(crate) fn total_hint(hint: (usize, Option<usize>)) -> usize {
    hint.1.unwrap_or(hint.0)
}

/// Processes work units one at a time, in order.
pub struct RunController<R, O> {
    opts: TrimOptions,
    runner: R,
    observer: O,
}

impl RunController<SystemRunner, LogObserver> {
    pub fn with_defaults(opts: TrimOptions) -> Self {
        Self::new(opts, SystemRunner, LogObserver)
    }
}

impl<R: ProcessRunner, O: Observer> RunController<R, O> {
    pub fn new(opts: TrimOptions, runner: R, observer: O) -> Self {
        Self {
            opts,
            runner,
            observer,
        }
    }

    #[inline]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_parts(self) -> (R, O) {
        (self.runner, self.observer)
    }

    /// Drain `units`, stopping at the first missing mate or paired-end failure.
    pub fn run<I>(&mut self, units: I) -> BatchReport
    where
        I: IntoIterator<Item = Result<WorkUnit, MissingMate>>,
    {
        let units = units.into_iter();
        let total = total_hint(units.size_hint());
        let mut results = Vec::new();

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
                    let outcome = self.runner.run(&invocation);
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
