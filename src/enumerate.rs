use crate::error::{MissingMate, PlanError};
use crate::options::{Mode, NamingConvention};
use crate::paths::{
    READ_EXTENSIONS, mate2_name, paired_output_name, single_end_output_name,
    singles_name,
};
use crate::unit::{PairedEndUnit, SingleEndUnit, WorkUnit};

use std::fs;
use std::path::{Path, PathBuf};

/// A matched input name together with the extension it matched on.
#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    ext: &'static str,
    /// Derived mate-2 name, paired-end only.
    mate: Option<String>,
}

/// Lazily turns one directory-listing snapshot into work units.
///
/// Yields `Err(MissingMate)` at most once; the enumerator is
/// exhausted afterwards.
pub struct InputEnumerator {
    input_dir: PathBuf,
    output_dir: PathBuf,
    convention: Option<NamingConvention>,
    candidates: Vec<Candidate>,
    pos: usize,
    halted: bool,
}

impl InputEnumerator {
    /// List `input_dir` once and select the files `mode` applies to.
    pub fn new<P, Q>(input_dir: P, output_dir: Q, mode: Mode) -> Result<Self, PlanError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input_dir = input_dir.as_ref().to_path_buf();
        let names = list_names(&input_dir)?;

        let (convention, candidates) = match mode {
            Mode::SingleEnd => (None, single_end_candidates(&names)),
            Mode::PairedEnd => {
                let (conv, found) = paired_candidates(&names);
                (Some(conv), found)
            }
        };

        log::info!(
            "running sickle {mode} for the following files: {:?}",
            candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
        );

        Ok(Self {
            input_dir,
            output_dir: output_dir.as_ref().to_path_buf(),
            convention,
            candidates,
            pos: 0,
            halted: false,
        })
    }

    /// Separator convention chosen for mate pairing; `None` in single-end mode.
    #[inline]
    pub fn convention(&self) -> Option<NamingConvention> {
        self.convention
    }

    /// Number of matched inputs (mate-1 files in paired-end mode).
    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.name.as_str())
    }

    fn single_end_unit(&self, cand: &Candidate) -> WorkUnit {
        WorkUnit::SingleEnd(SingleEndUnit {
            input: self.input_dir.join(&cand.name),
            output: self.output_dir.join(single_end_output_name(&cand.name)),
        })
    }

    fn paired_end_unit(&self, cand: &Candidate, mate2: &str) -> Result<WorkUnit, MissingMate> {
        let out2_name = paired_output_name(mate2, cand.ext);
        let unit = WorkUnit::PairedEnd(PairedEndUnit {
            input1: self.input_dir.join(&cand.name),
            input2: self.input_dir.join(mate2),
            output1: self.output_dir.join(paired_output_name(&cand.name, cand.ext)),
            singles: self.output_dir.join(singles_name(&out2_name)),
            output2: self.output_dir.join(out2_name),
        });

        let inputs = unit.inputs();
        if let Some(missing) = inputs.iter().find(|p| !p.exists()) {
            return Err(MissingMate {
                mate1: inputs[0].to_path_buf(),
                mate2: inputs[1].to_path_buf(),
                missing: missing.to_path_buf(),
            });
        }
        Ok(unit)
    }
}

impl Iterator for InputEnumerator {
    type Item = Result<WorkUnit, MissingMate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let cand = self.candidates.get(self.pos)?.clone();
        self.pos += 1;

        match cand.mate.as_deref() {
            None => Some(Ok(self.single_end_unit(&cand))),
            Some(mate2) => match self.paired_end_unit(&cand, mate2) {
                Ok(unit) => Some(Ok(unit)),
                Err(err) => {
                    self.halted = true;
                    Some(Err(err))
                }
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            return (0, Some(0));
        }
        let left = self.candidates.len() - self.pos;
        match self.convention {
            None => (left, Some(left)),
            Some(_) => (left.min(1), Some(left)),
        }
    }
}

fn list_names(dir: &Path) -> Result<Vec<String>, PlanError> {
    let entries = fs::read_dir(dir).map_err(|e| PlanError::list_err(e, dir.to_path_buf()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PlanError::list_err(e, dir.to_path_buf()))?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::warn!("ignoring non UTF-8 file name {raw:?}"),
        }
    }
    Ok(names)
}

fn single_end_candidates(names: &[String]) -> Vec<Candidate> {
    READ_EXTENSIONS
        .into_iter()
        .flat_map(move |ext| {
            names
                .iter()
                .filter(move |n| n.ends_with(ext))
                .map(move |n| Candidate {
                    name: n.clone(),
                    ext,
                    mate: None,
                })
        })
        .collect()
}

fn mate1_candidates(names: &[String], sep: char) -> Vec<Candidate> {
    READ_EXTENSIONS
        .into_iter()
        .flat_map(move |ext| {
            names
                .iter()
                .filter_map(move |n| {
                    let mate = mate2_name(n, sep, ext)?;
                    Some(Candidate {
                        name: n.clone(),
                        ext,
                        mate: Some(mate),
                    })
                })
        })
        .collect()
}

/// Dot convention first; when it finds fewer than two mate-1 files the
/// underscore convention is used instead, unless it finds none.
fn paired_candidates(names: &[String]) -> (NamingConvention, Vec<Candidate>) {
    let dot = mate1_candidates(names, NamingConvention::Dot.separator());
    if dot.len() >= 2 {
        return (NamingConvention::Dot, dot);
    }
    let underscore = mate1_candidates(names, NamingConvention::Underscore.separator());
    if !underscore.is_empty() {
        (NamingConvention::Underscore, underscore)
    } else {
        (NamingConvention::Dot, dot)
    }
}
