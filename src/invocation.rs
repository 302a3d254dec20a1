use crate::options::TrimOptions;
use crate::unit::WorkUnit;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A fully planned trimming-tool call: executable plus discrete argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    /// Build the sickle argument vector for `unit`. Pure; nothing is checked on disk.
    pub fn build(unit: &WorkUnit, opts: &TrimOptions) -> Self {
        let mut args = ArgList::default();
        args.flag(unit.mode().as_str());
        args.opt("-t", opts.quality.as_str());

        match unit {
            WorkUnit::SingleEnd(u) => {
                args.path("-f", &u.input);
                args.path("-o", &u.output);
            }
            WorkUnit::PairedEnd(u) => {
                args.path("-f", &u.input1);
                args.path("-r", &u.input2);
                args.path("-o", &u.output1);
                args.path("-p", &u.output2);
                args.path("-s", &u.singles);
            }
        }

        args.opt("-a", opts.threads.to_string());
        args.opt("-b", opts.max_batch.to_string());

        if let Some(q) = opts.qual_threshold {
            args.opt("-q", q.to_string());
        }
        if let Some(l) = opts.length_threshold {
            args.opt("-l", l.to_string());
        }
        if opts.no_fiveprime {
            args.flag("-x");
        }
        if opts.truncate_n {
            args.flag("-n");
        }
        if opts.quiet {
            args.flag("--quiet");
        }

        Self {
            program: opts.program.clone(),
            args: args.0,
        }
    }

    #[inline]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[inline]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Value following `flag`, if present.
    pub fn arg_value(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Space-joined rendering for logs; not meant to be fed to a shell.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct ArgList(Vec<OsString>);

impl ArgList {
    fn flag(&mut self, flag: &str) {
        self.0.push(flag.into());
    }

    fn opt(&mut self, flag: &str, value: impl Into<OsString>) {
        self.0.push(flag.into());
        self.0.push(value.into());
    }

    fn path(&mut self, flag: &str, value: &Path) {
        self.opt(flag, value.as_os_str());
    }
}
