//! geoclean library
//!
//! Classification and clean-up engines for Leica GSI measurement files,
//! LTOP polar files and instrument logfiles.
//!
//! The engines ([`clearup`], [`ltop`], [`logfile`]) work on in-memory lines
//! and never fail; [`files`] and [`batch`] add file handling around them.

pub mod batch;
pub mod clearup;
pub mod cli;
pub mod config;
pub mod files;
pub mod gsi;
pub mod logfile;
pub mod ltop;
pub mod theme;

pub use batch::{run_jobs, Job, JobKind, JobResult, Settings};
pub use clearup::{clear_up, ClearUpConfig, ClearUpOutcome, Dialect, LineLabel, Retention};
pub use config::Config;
pub use logfile::{clean_logfile, full_clean, CleanMode};
pub use ltop::{ltop_clean, LtopConfig, LtopOutcome, LtopWarning};
