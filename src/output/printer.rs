//! Printing through the local CUPS command-line tools.
//!
//! Availability is decided once, at setup: if `lp`/`lpstat` are missing or no
//! default destination is configured, the run proceeds with printing
//! disabled instead of failing.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::{info, instrument, warn};

/// Errors from print setup or job submission.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A required print tool is not on `PATH`.
    #[error("print tool '{tool}' not found in PATH")]
    ToolNotFound {
        /// Name of the missing binary.
        tool: &'static str,
    },

    /// The print tool could not be started.
    #[error("failed to execute {tool}: {source}")]
    Spawn {
        /// Name of the binary.
        tool: &'static str,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The print tool ran but reported failure.
    #[error("{tool} rejected the request: {stderr}")]
    Rejected {
        /// Name of the binary.
        tool: &'static str,
        /// Trimmed stderr output.
        stderr: String,
    },

    /// No default destination is configured.
    #[error("no default printer configured")]
    NoDefaultDestination,
}

/// One submitted print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    /// Job id reported by `lp`, when it reported one.
    pub job_id: Option<String>,
    /// Job title the job was submitted with.
    pub title: String,
}

/// Print capability, chosen once during setup and never re-checked.
#[derive(Debug, Clone)]
pub enum Printer {
    /// Jobs go to the default CUPS destination.
    Available(LpPrinter),
    /// Printing is disabled for this run.
    Unavailable,
}

impl Printer {
    /// Sets up printing when `requested`, falling back to
    /// [`Printer::Unavailable`] with a logged notice on any failure.
    pub async fn setup(requested: bool, options: Vec<String>) -> Self {
        if !requested {
            info!("not printing");
            return Self::Unavailable;
        }
        match LpPrinter::detect(options).await {
            Ok(printer) => {
                info!(destination = %printer.destination(), "using default printer");
                Self::Available(printer)
            }
            Err(error) => {
                warn!(%error, "printing disabled");
                Self::Unavailable
            }
        }
    }

    /// Returns true if jobs can be submitted.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Submits jobs with `lp` to a fixed destination.
#[derive(Debug, Clone)]
pub struct LpPrinter {
    lp_path: PathBuf,
    destination: String,
    options: Vec<String>,
}

impl LpPrinter {
    /// Creates a printer from explicit parts.
    ///
    /// `options` are `key=value` strings passed to `lp` as `-o key=value`.
    #[must_use]
    pub fn new(lp_path: PathBuf, destination: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            lp_path,
            destination: destination.into(),
            options,
        }
    }

    /// Locates `lp` and `lpstat` and asks `lpstat -d` for the default
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns a [`PrintError`] if either tool is missing, `lpstat` fails, or
    /// no default destination is set.
    pub async fn detect(options: Vec<String>) -> Result<Self, PrintError> {
        let lp_path = which::which("lp").map_err(|_| PrintError::ToolNotFound { tool: "lp" })?;
        let lpstat_path =
            which::which("lpstat").map_err(|_| PrintError::ToolNotFound { tool: "lpstat" })?;

        let output = Command::new(&lpstat_path)
            .arg("-d")
            .output()
            .await
            .map_err(|source| PrintError::Spawn {
                tool: "lpstat",
                source,
            })?;
        if !output.status.success() {
            return Err(PrintError::Rejected {
                tool: "lpstat",
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let destination = parse_default_destination(&String::from_utf8_lossy(&output.stdout))
            .ok_or(PrintError::NoDefaultDestination)?;
        Ok(Self::new(lp_path, destination, options))
    }

    /// Destination jobs are sent to.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Submits `path` as a job titled `job_title`.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError::Spawn`] or [`PrintError::Rejected`] if `lp` cannot
    /// be run or refuses the job.
    #[instrument(skip(self), fields(destination = %self.destination, path = %path.display()))]
    pub async fn submit(&self, path: &Path, job_title: &str) -> Result<PrintJob, PrintError> {
        let mut command = Command::new(&self.lp_path);
        command
            .arg("-d")
            .arg(&self.destination)
            .arg("-t")
            .arg(job_title);
        for option in &self.options {
            command.arg("-o").arg(option);
        }
        command.arg("--").arg(path);

        let output = command.output().await.map_err(|source| PrintError::Spawn {
            tool: "lp",
            source,
        })?;
        if !output.status.success() {
            return Err(PrintError::Rejected {
                tool: "lp",
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let job_id = parse_job_id(&String::from_utf8_lossy(&output.stdout));
        info!(job_id = job_id.as_deref().unwrap_or("unknown"), title = job_title, "submitted print job");
        Ok(PrintJob {
            job_id,
            title: job_title.to_string(),
        })
    }
}

/// Parses `system default destination: <name>` from `lpstat -d` output.
fn parse_default_destination(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let (_, name) = line.split_once("default destination:")?;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// Parses `request id is <id> (1 file(s))` from `lp` output.
fn parse_job_id(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("request id is ")?;
        rest.split_whitespace().next().map(str::to_string)
    })
}
