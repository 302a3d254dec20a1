use crate::error::ModeError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Trimming mode; also the sickle subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One read file per sample.
    SingleEnd,
    /// Forward and reverse mates in separate files.
    PairedEnd,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::SingleEnd => "se",
            Mode::PairedEnd => "pe",
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "se" => Ok(Mode::SingleEnd),
            "pe" => Ok(Mode::PairedEnd),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality-score encoding of the input, forwarded verbatim to sickle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityType {
    /// CASAVA < 1.3
    Solexa,
    /// CASAVA 1.3 to 1.7
    Illumina,
    /// CASAVA >= 1.8
    Sanger,
}

impl QualityType {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityType::Solexa => "solexa",
            QualityType::Illumina => "illumina",
            QualityType::Sanger => "sanger",
        }
    }
}

impl FromStr for QualityType {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solexa" => Ok(QualityType::Solexa),
            "illumina" => Ok(QualityType::Illumina),
            "sanger" => Ok(QualityType::Sanger),
            other => Err(ModeError::UnknownQuality(other.to_string())),
        }
    }
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How mate files are told apart: `sample.1.fq` vs `sample_1.fq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    Dot,
    Underscore,
}

impl NamingConvention {
    pub fn separator(self) -> char {
        match self {
            NamingConvention::Dot => '.',
            NamingConvention::Underscore => '_',
        }
    }
}

/// Everything a batch needs besides the unit list.
#[derive(Debug, Clone)]
pub struct TrimOptions {
    pub quality: QualityType,
    /// Trimming tool executable.
    pub program: PathBuf,
    /// `-a`, worker threads inside sickle.
    pub threads: u32,
    /// `-b`, records per batch inside sickle.
    pub max_batch: u32,
    /// `-q`; sickle's own default (20) when unset.
    pub qual_threshold: Option<u32>,
    /// `-l`; sickle's own default (20) when unset.
    pub length_threshold: Option<u32>,
    /// `-x`
    pub no_fiveprime: bool,
    /// `-n`
    pub truncate_n: bool,
    /// `--quiet`
    pub quiet: bool,
}

pub const DEFAULT_THREADS: u32 = 32;
pub const DEFAULT_MAX_BATCH: u32 = 512;

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            quality: QualityType::Sanger,
            program: PathBuf::from("sickle"),
            threads: DEFAULT_THREADS,
            max_batch: DEFAULT_MAX_BATCH,
            qual_threshold: None,
            length_threshold: None,
            no_fiveprime: false,
            truncate_n: false,
            quiet: false,
        }
    }
}
