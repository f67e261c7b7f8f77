//! Concatenate an ordered list of text files into one framed output file.
//!
//! A run has two independent passes:
//!
//! - **Collect** ([`io::collect`]): read every input path, recording a
//!   per-path [`core::outcome::FileOutcome`]. A failing file never aborts
//!   the batch.
//! - **Write** ([`io::write`]): frame every outcome with marker lines
//!   ([`core::frame`]) into a single output file.
//!
//! [`combine`] ties the passes together for the CLI; [`report`] turns the
//! collected results into the per-file status report.

pub mod combine;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
