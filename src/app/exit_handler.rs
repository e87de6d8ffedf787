//! Exit code logic for the arxiv-fetch process.
//!
//! Single responsibility: map a batch report to the process exit outcome.

use arxiv_fetch_core::BatchReport;

use crate::ProcessExit;

/// Determines the process exit outcome from a finished batch.
///
/// Articles the sink failed on count as failures even though they were
/// fetched.
pub(crate) fn determine_exit_outcome(report: &BatchReport) -> ProcessExit {
    let failed = report.skipped.len() + report.failed.len() + report.sink_failures.len();
    let succeeded = report
        .completed
        .len()
        .saturating_sub(report.sink_failures.len());
    if failed == 0 {
        ProcessExit::Success
    } else if succeeded > 0 {
        ProcessExit::Partial
    } else {
        ProcessExit::Failure
    }
}
