use anyhow::{Context, Result, ensure};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use sickle_batch::options::{DEFAULT_MAX_BATCH, DEFAULT_THREADS};
use sickle_batch::{BatchOutcome, InputEnumerator, Mode, QualityType, RunController, TrimOptions};

#[derive(Parser, Debug)]
#[command(name = "sickle-batch")]
#[command(about = "Run sickle over every FASTQ file (or pair) in a directory, skipping finished work", long_about = None)]
#[command(version)]
struct Cli {
    /// Trimming mode: se (single-end) or pe (paired-end)
    #[arg(value_name = "MODE")]
    mode: String,

    /// Quality encoding: solexa, illumina or sanger
    #[arg(value_name = "QUALITY")]
    quality: String,

    /// Directory holding the input FASTQ files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Existing directory receiving the trimmed files
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Threads passed to sickle (-a)
    #[arg(value_name = "THREADS", default_value_t = DEFAULT_THREADS)]
    threads: u32,

    /// Records per batch passed to sickle (-b)
    #[arg(value_name = "MAX_BATCH", default_value_t = DEFAULT_MAX_BATCH)]
    max_batch: u32,

    /// sickle executable (default: next to this binary, then PATH)
    #[arg(long, value_name = "PATH", env = "SICKLE_BIN")]
    sickle: Option<PathBuf>,

    /// Window average quality threshold (sickle -q)
    #[arg(short = 'q', long, value_name = "INT")]
    qual_threshold: Option<u32>,

    /// Minimum read length kept after trimming (sickle -l)
    #[arg(short = 'l', long, value_name = "INT")]
    length_threshold: Option<u32>,

    /// Don't do five prime trimming (sickle -x)
    #[arg(short = 'x', long)]
    no_fiveprime: bool,

    /// Truncate sequences at the first N (sickle -n)
    #[arg(short = 'n', long)]
    truncate_n: bool,

    /// Ask sickle not to print trimming info
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn options(&self, quality: QualityType) -> TrimOptions {
        TrimOptions {
            quality,
            program: self.sickle.clone().unwrap_or_else(default_sickle),
            threads: self.threads,
            max_batch: self.max_batch,
            qual_threshold: self.qual_threshold,
            length_threshold: self.length_threshold,
            no_fiveprime: self.no_fiveprime,
            truncate_n: self.truncate_n,
            quiet: self.quiet,
        }
    }
}

/// `sickle` shipped beside this executable, else whatever `PATH` resolves.
fn default_sickle() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("sickle")))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from("sickle"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // mode is checked before anything else; an unknown one is not an error
    let mode: Mode = match cli.mode.parse() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            return Ok(());
        }
    };
    let quality: QualityType = cli.quality.parse()?;

    ensure!(
        cli.output_dir.is_dir(),
        "output directory {:?} does not exist",
        cli.output_dir
    );

    let opts = cli.options(quality);
    log::info!("using sickle at {}", opts.program.display());

    let units = InputEnumerator::new(&cli.input_dir, &cli.output_dir, mode)
        .with_context(|| format!("planning {mode} batch"))?;

    let mut controller = RunController::with_defaults(opts);
    let report = controller.run(units);

    log::info!(
        "{} trimmed, {} skipped, {} failed",
        report.succeeded(),
        report.skipped(),
        report.failed()
    );
    if let BatchOutcome::Halted(_) = report.outcome {
        log::warn!("batch halted early; re-run to resume, finished units are skipped");
    }
    Ok(())
}
