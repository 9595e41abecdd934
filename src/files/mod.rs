//! File handling around the cleaning engines.
//!
//! - [`io`] - line-oriented read/write with line-ending preservation
//! - [`naming`] - `_EDIT` / `_LTOP` / `_CLEAN` output paths

mod error;
pub mod io;
pub mod naming;

pub use error::FileError;
pub use io::{read_lines, write_lines, LineEnding, TextFile};
pub use naming::{output_path, Suffix};
