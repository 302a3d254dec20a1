#![allow(dead_code)]

use sickle_batch::runner::ToolExit;
use sickle_batch::{HaltReason, Invocation, Observer, ProcessRunner, RunError, RunResult};
use std::fs;
use std::path::Path;

/// Stands in for sickle: records every call and, on success, creates the
/// files named by `-o`, `-p` and `-s`.
#[derive(Debug, Default)]
pub struct FakeSickle {
    pub calls: Vec<Invocation>,
    pub exit_code: i32,
}

impl FakeSickle {
    pub fn failing(exit_code: i32) -> Self {
        Self {
            calls: Vec::new(),
            exit_code,
        }
    }
}

impl ProcessRunner for FakeSickle {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolExit, RunError> {
        self.calls.push(invocation.clone());
        if self.exit_code == 0 {
            write_outputs(invocation);
        }
        Ok(Some(self.exit_code))
    }
}

pub fn write_outputs(invocation: &Invocation) {
    for flag in ["-o", "-p", "-s"] {
        if let Some(path) = invocation.arg_value(flag) {
            fs::write(path, b"@r\nACGT\n+\n!!!!\n").unwrap();
        }
    }
}

#[derive(Debug, Default)]
pub struct CountingObserver {
    pub seen: Vec<(usize, usize)>,
    pub halts: usize,
}

impl Observer for CountingObserver {
    fn on_result(&mut self, index: usize, total: usize, _result: &RunResult) {
        self.seen.push((index, total));
    }

    fn on_halt(&mut self, _reason: &HaltReason) {
        self.halts += 1;
    }
}

pub fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"@r\nACGT\n+\n!!!!\n").unwrap();
}
