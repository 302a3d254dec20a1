use crate::options::Mode;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleEndUnit {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedEndUnit {
    pub input1: PathBuf,
    pub input2: PathBuf,
    pub output1: PathBuf,
    pub output2: PathBuf,
    pub singles: PathBuf,
}

/// One trimming job. Outputs are derived from the inputs by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkUnit {
    SingleEnd(SingleEndUnit),
    PairedEnd(PairedEndUnit),
}

impl WorkUnit {
    #[inline]
    pub fn mode(&self) -> Mode {
        match self {
            WorkUnit::SingleEnd(_) => Mode::SingleEnd,
            WorkUnit::PairedEnd(_) => Mode::PairedEnd,
        }
    }

    pub fn inputs(&self) -> Vec<&Path> {
        match self {
            WorkUnit::SingleEnd(u) => vec![u.input.as_path()],
            WorkUnit::PairedEnd(u) => vec![u.input1.as_path(), u.input2.as_path()],
        }
    }

    /// Files whose joint presence marks the unit as done.
    pub fn outputs(&self) -> Vec<&Path> {
        match self {
            WorkUnit::SingleEnd(u) => vec![u.output.as_path()],
            WorkUnit::PairedEnd(u) => vec![
                u.output1.as_path(),
                u.output2.as_path(),
                u.singles.as_path(),
            ],
        }
    }

    /// Primary output, used in progress messages.
    #[inline]
    pub fn primary_output(&self) -> &Path {
        match self {
            WorkUnit::SingleEnd(u) => &u.output,
            WorkUnit::PairedEnd(u) => &u.output1,
        }
    }
}
