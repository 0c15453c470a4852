//! Output files for a finished request.
//!
//! # Submodules
//!
//! - [`markdown`]: Writes the summary, byte for byte, to `news_summary.md`
//! - [`json`]: Writes the whole [`crate::models::SummaryResult`] to `news_summary.json`
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── news_summary.md
//!
//! json_output_dir/
//! └── news_summary.json
//! ```

pub mod json;
pub mod markdown;
