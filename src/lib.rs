//! Batch driver for the `sickle` read trimmer.
//!
//! - Discovers single-end (`*.fq`, `*.fastq`) and paired-end (`*.1.fq`/`*.2.fq`
//!   or `*_1.fq`/`*_2.fq`) inputs in a flat directory.
//! - Derives every output name from its input name (`*.trim.fastq`, plus a
//!   `*s.trim.fastq` singles file for pairs).
//! - Builds sickle argument vectors and runs them one at a time, skipping units
//!   whose outputs already exist.
//! - Stops early on a missing mate or a failed paired-end run.
//! - Optional async controller behind the `async` feature.

pub mod enumerate;
pub mod error;
pub mod invocation;
pub mod options;
pub mod paths;
pub mod runner;
pub mod unit;

#[cfg(feature = "async")]
pub mod async_runner;

pub use crate::enumerate::InputEnumerator;
pub use crate::error::{MissingMate, ModeError, PlanError, RunError};
pub use crate::invocation::Invocation;
pub use crate::options::{Mode, NamingConvention, QualityType, TrimOptions};
pub use crate::runner::{
    BatchOutcome, BatchReport, HaltReason, LogObserver, Observer, ProcessRunner, RunController,
    RunResult, RunStatus, SystemRunner,
};
pub use crate::unit::{PairedEndUnit, SingleEndUnit, WorkUnit};

#[cfg(feature = "async")]
pub use crate::async_runner::{AsyncProcessRunner, AsyncRunController, TokioRunner};
