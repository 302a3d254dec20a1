use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering work units in the input directory.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("cannot list input directory {path:?}: {source}")]
    ListDir {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

/// A paired-end input is absent on disk. Halts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input {missing:?} doesn't exist (pair {mate1:?} / {mate2:?})")]
pub struct MissingMate {
    pub mate1: PathBuf,
    pub mate2: PathBuf,
    pub missing: PathBuf,
}

/// Errors raised while launching the trimming tool.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch {program:?}: {source}")]
    Spawn {
        #[source]
        source: io::Error,
        program: PathBuf,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("There is no '{0}' mode available")]
    Unknown(String),
    #[error("'{0}' is not a valid quality type (expected solexa, illumina or sanger)")]
    UnknownQuality(String),
}

impl PlanError {
    pub(crate) fn list_err(source: io::Error, path: PathBuf) -> Self {
        Self::ListDir { source, path }
    }
}

impl RunError {
    pub(crate) fn spawn_err(source: io::Error, program: PathBuf) -> Self {
        Self::Spawn { source, program }
    }
}
