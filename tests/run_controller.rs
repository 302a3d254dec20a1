mod common;

use common::{CountingObserver, FakeSickle, touch};
use sickle_batch::{
    BatchOutcome, HaltReason, InputEnumerator, LogObserver, Mode, QualityType, RunController,
    RunStatus, SystemRunner, TrimOptions, WorkUnit,
};
use std::fs;
use tempfile::tempdir;

fn options() -> TrimOptions {
    TrimOptions {
        quality: QualityType::Illumina,
        ..TrimOptions::default()
    }
}

#[test]
fn second_run_skips_everything() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    for name in ["a.fq", "b.fastq", "c.fq"] {
        touch(input.path(), name);
    }

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let first = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::SingleEnd).unwrap());
    assert_eq!(first.outcome, BatchOutcome::Completed);
    assert_eq!(first.succeeded(), 3);
    assert_eq!(first.invocations(), 3);

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let second = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::SingleEnd).unwrap());
    assert_eq!(second.outcome, BatchOutcome::Completed);
    assert_eq!(second.skipped(), 3);
    assert_eq!(second.invocations(), 0);
    assert!(ctl.runner().calls.is_empty());
    assert!(second.results.iter().all(|r| r.exit_code.is_none()));
}

#[test]
fn paired_skip_needs_all_three_outputs() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    touch(input.path(), "s.1.fq");
    touch(input.path(), "s.2.fq");
    touch(out.path(), "s.1.trim.fastq");
    touch(out.path(), "s.2.trim.fastq");

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());
    assert_eq!(report.invocations(), 1);
    assert_eq!(report.results[0].status, RunStatus::Succeeded);
    assert!(out.path().join("s.s.trim.fastq").exists());

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());
    assert_eq!(report.skipped(), 1);
    assert!(ctl.runner().calls.is_empty());
}

#[test]
fn paired_failure_halts_the_queue() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    for name in ["a.1.fq", "a.2.fq", "b.1.fq", "b.2.fq"] {
        touch(input.path(), name);
    }

    let mut ctl = RunController::new(
        options(),
        FakeSickle::failing(2),
        CountingObserver::default(),
    );
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].status, RunStatus::Failed);
    assert_eq!(report.results[0].exit_code, Some(2));
    match &report.outcome {
        BatchOutcome::Halted(HaltReason::ToolFailure { unit, exit_code }) => {
            assert_eq!(unit, &report.results[0].unit);
            assert_eq!(*exit_code, Some(2));
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    let (runner, observer) = ctl.into_parts();
    assert_eq!(runner.calls.len(), 1);
    assert_eq!(observer.seen, vec![(1, 2)]);
    assert_eq!(observer.halts, 1);
}

#[test]
fn single_end_failures_do_not_halt() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    for name in ["a.fq", "b.fq"] {
        touch(input.path(), name);
    }

    let mut ctl = RunController::new(options(), FakeSickle::failing(1), LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::SingleEnd).unwrap());
    assert_eq!(report.outcome, BatchOutcome::Completed);
    assert_eq!(report.failed(), 2);
    assert_eq!(ctl.runner().calls.len(), 2);
}

#[test]
fn missing_mate_halts_before_invoking() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    touch(input.path(), "a.1.fq");

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());

    assert!(report.results.is_empty());
    match &report.outcome {
        BatchOutcome::Halted(HaltReason::MissingMate(err)) => {
            assert_eq!(err.missing, input.path().join("a.2.fq"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(ctl.runner().calls.is_empty());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn missing_mate_mid_batch_keeps_earlier_results() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    for name in ["a.1.fq", "a.2.fq", "b.1.fq"] {
        touch(input.path(), name);
    }

    let mut ctl = RunController::new(options(), FakeSickle::default(), LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());

    assert!(report.is_halted());
    assert!(report.results.len() <= 1);
    assert_eq!(ctl.runner().calls.len(), report.results.len());
    match &report.outcome {
        BatchOutcome::Halted(HaltReason::MissingMate(err)) => {
            assert_eq!(err.missing, input.path().join("b.2.fq"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    if let Some(done) = report.results.first() {
        assert_eq!(done.status, RunStatus::Succeeded);
        match &done.unit {
            WorkUnit::PairedEnd(u) => assert_eq!(u.input1, input.path().join("a.1.fq")),
            other => panic!("unexpected unit {other:?}"),
        }
        assert!(out.path().join("a.s.trim.fastq").exists());
    }
}

#[test]
fn unlaunchable_tool_counts_as_failure() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    touch(input.path(), "a.fq");

    let opts = TrimOptions {
        program: input.path().join("no-such-sickle"),
        ..options()
    };
    let mut ctl = RunController::new(opts, SystemRunner, LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::SingleEnd).unwrap());
    assert_eq!(report.outcome, BatchOutcome::Completed);
    assert_eq!(report.results[0].status, RunStatus::Failed);
    assert_eq!(report.results[0].exit_code, None);
}

#[test]
fn unlaunchable_tool_halts_paired_batch() {
    let input = tempdir().unwrap();
    let out = tempdir().unwrap();
    touch(input.path(), "a.1.fq");
    touch(input.path(), "a.2.fq");

    let opts = TrimOptions {
        program: input.path().join("no-such-sickle"),
        ..options()
    };
    let mut ctl = RunController::new(opts, SystemRunner, LogObserver);
    let report = ctl.run(InputEnumerator::new(input.path(), out.path(), Mode::PairedEnd).unwrap());
    assert!(matches!(
        report.outcome,
        BatchOutcome::Halted(HaltReason::ToolFailure { exit_code: None, .. })
    ));
}
