//! Run composition: input, client, output wiring, batch, cleanup.

mod exit_handler;

use anyhow::{Context, Result, anyhow};
use arxiv_fetch_core::{
    ArxivClient, BatchCoordinator, FailurePolicy, FetchConfig, OutputPlan, Printer,
    collect_input_lines,
};
use tracing::{info, warn};

use crate::ProcessExit;
use crate::cli::Args;

pub(crate) async fn run(args: Args) -> Result<ProcessExit> {
    let lines = collect_input_lines(&args.input).context("invalid --input")?;
    info!(input = %lines.join(","), count = lines.len(), "given input");

    let config = FetchConfig::with_base_urls(&args.abs_base_url, &args.pdf_base_url)?
        .timeouts(args.connect_timeout, args.read_timeout)?;
    let client = ArxivClient::new(config).context("failed to set up HTTP session")?;

    let printer = Printer::setup(args.print, args.print_options.clone()).await;
    let OutputPlan { sink, scratch } = OutputPlan::prepare(args.save.as_deref(), printer)
        .context("failed to prepare output directory")?;

    let policy = if args.keep_going {
        FailurePolicy::CollectAll
    } else {
        FailurePolicy::AbortOnFirst
    };
    let coordinator = BatchCoordinator::new(client, policy);

    // Every exit path below this point goes through the scratch cleanup.
    let outcome = tokio::select! {
        result = coordinator.run(&lines, &sink) => result.map_err(anyhow::Error::from),
        Ok(()) = tokio::signal::ctrl_c() => Err(anyhow!("interrupted")),
    };

    if let Some(scratch) = scratch
        && let Err(error) = scratch.close()
    {
        warn!(%error, "failed to delete temporary directory");
    }

    let report = outcome?;
    info!(
        completed = report.completed.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        sink_failures = report.sink_failures.len(),
        total = report.total(),
        "Download complete"
    );
    for failed in &report.failed {
        warn!(line = %failed.line, kind = %failed.kind(), error = %failed.error, "article failed");
    }

    Ok(exit_handler::determine_exit_outcome(&report))
}
