//! Parallel multi-file processing using Rayon.
//!
//! Every input file is one independent [`Job`]: read, clean, write next to the
//! input (or into the output directory). Jobs share nothing, so they run on a
//! dedicated thread pool with one task per file. A failing file is reported in
//! its [`JobResult`] and never aborts the others.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::clearup::{self, ClearUpConfig, ClearUpReport, Retention};
use crate::files::{self, FileError, Suffix};
use crate::logfile::{self, CleanMode};
use crate::ltop::{self, LtopConfig, LtopWarning};

/// What to do with one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    ClearUp,
    Ltop,
    Logfile(CleanMode),
    FullClean,
}

impl JobKind {
    pub fn suffix(&self) -> Suffix {
        match self {
            JobKind::ClearUp => Suffix::Edit,
            JobKind::Ltop => Suffix::Ltop,
            JobKind::Logfile(_) => Suffix::Clean,
            JobKind::FullClean => Suffix::Full,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub kind: JobKind,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, kind: JobKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }
}

/// Settings shared by every job of a run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub identifiers: ClearUpConfig,
    pub retention: Retention,
    pub ltop: LtopConfig,
    /// Write results here instead of next to each input
    pub output_dir: Option<PathBuf>,
}

/// What a successful job produced.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub output: PathBuf,
    pub input_lines: usize,
    pub output_lines: usize,
    /// Per-label counts, clear-up only
    pub report: Option<ClearUpReport>,
    /// Reference-cap warnings, LTOP only
    pub warnings: Vec<LtopWarning>,
}

#[derive(Debug)]
pub struct JobResult {
    pub job: Job,
    pub result: Result<JobSummary, FileError>,
}

impl JobResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Read, clean and write a single file.
pub fn run_job(job: &Job, settings: &Settings) -> Result<JobSummary, FileError> {
    let file = files::read_lines(&job.input)?;
    let input_lines = file.lines.len();
    let mut report = None;
    let mut warnings = Vec::new();

    let lines = match job.kind {
        JobKind::ClearUp => {
            let outcome = clearup::clear_up(&file.lines, &settings.identifiers, settings.retention);
            report = Some(outcome.report);
            outcome.lines
        }
        JobKind::Ltop => {
            let outcome = ltop::ltop_clean(&file.lines, &settings.identifiers, &settings.ltop);
            warnings = outcome.warnings;
            outcome.lines
        }
        JobKind::Logfile(mode) => logfile::clean_logfile(&file.lines, mode),
        JobKind::FullClean => logfile::full_clean(&file.lines),
    };

    let output = files::output_path(
        &job.input,
        job.kind.suffix(),
        settings.output_dir.as_deref(),
    );
    files::write_lines(&output, &lines, file.line_ending)?;
    debug!(
        input = %job.input.display(),
        output = %output.display(),
        input_lines,
        output_lines = lines.len(),
        "job finished"
    );

    Ok(JobSummary {
        output,
        input_lines,
        output_lines: lines.len(),
        report,
        warnings,
    })
}

fn run_one(job: Job, settings: &Settings) -> JobResult {
    let result = run_job(&job, settings);
    JobResult { job, result }
}

/// Run all jobs, returning one result per job in input order.
///
/// A single job runs on the calling thread. `workers` of `None` lets Rayon
/// pick one thread per CPU.
pub fn run_jobs(jobs: Vec<Job>, settings: &Settings, workers: Option<usize>) -> Vec<JobResult> {
    if jobs.len() <= 1 {
        return jobs.into_iter().map(|job| run_one(job, settings)).collect();
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("geoclean-{}", i));
    if let Some(workers) = workers {
        builder = builder.num_threads(workers);
    }
    let pool = match builder.build() {
        Ok(pool) => pool,
        Err(e) => {
            warn!("Failed to create thread pool: {}. Processing sequentially.", e);
            return jobs.into_iter().map(|job| run_one(job, settings)).collect();
        }
    };

    pool.install(|| {
        jobs.into_par_iter()
            .map(|job| run_one(job, settings))
            .collect()
    })
}

/// Jobs of one kind for a list of inputs.
pub fn jobs_for<P: AsRef<Path>>(inputs: &[P], kind: JobKind) -> Vec<Job> {
    inputs
        .iter()
        .map(|input| Job::new(input.as_ref(), kind))
        .collect()
}
