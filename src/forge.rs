//! Invocation of the `forge` test runner.
//!
//! Forge is treated as an opaque external tool. It is run once per report, restricted to the gas comparison tests
//! with `--match-path`, and its stdout is handed back for parsing.

use std::{
    fmt::{self, Display, Formatter},
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};

use tokio::process::Command;

use crate::report::Order;

/// Test path glob forge is restricted to by default.
pub const DEFAULT_MATCH_PATH: &str = "./test/gas-comparison/*";

/// Errors raised while running forge.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// The forge executable could not be found.
    #[error("forge not found, tried {}", .0.display())]
    NotFound(PathBuf),
    /// The forge process could not be started.
    #[error("could not run {}: {source}", .program.display())]
    Spawn {
        /// Executable that failed to start.
        program: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Forge ran but exited unsuccessfully.
    #[error("forge {mode} failed ({status})")]
    Failed {
        /// Mode forge was run in.
        mode: Mode,
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },
}

/// How forge is asked to report gas usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// `forge snapshot`, which writes a `.gas-snapshot` file into the project root.
    Snapshot,
    /// `forge test --json`, which prints a JSON report on stdout.
    Json,
}

impl Mode {
    /// Arguments passed to forge for this mode.
    #[must_use]
    pub fn args(self, match_path: &str) -> Vec<String> {
        let mut args = match self {
            Self::Snapshot => vec!["snapshot".to_string()],
            Self::Json => vec!["test".to_string()],
        };
        args.extend(["--match-path".to_string(), match_path.to_string()]);
        if self == Self::Json {
            args.push("--json".to_string());
        }
        args
    }

    /// Row order of the report produced in this mode.
    #[must_use]
    pub fn order(self) -> Order {
        match self {
            Self::Snapshot => Order::FirstSeen,
            Self::Json => Order::Display,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Json => write!(f, "test"),
        }
    }
}

/// Checks that `executable` can be run, by asking it for its version.
///
/// # Errors
///
/// Returns [`ForgeError::NotFound`] if the executable does not exist, or [`ForgeError::Spawn`] if it could not be
/// started for any other reason.
pub async fn validate_executable(executable: &Path) -> Result<PathBuf, ForgeError> {
    log::trace!("validating executable {}", executable.display());
    match Command::new(executable).arg("--version").output().await {
        Ok(out) => {
            log::debug!(
                "found forge ({}): {}",
                executable.display(),
                String::from_utf8_lossy(&out.stdout).trim_end_matches('\n')
            );
            Ok(executable.to_path_buf())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(ForgeError::NotFound(executable.to_path_buf()))
        }
        Err(source) => Err(ForgeError::Spawn {
            program: executable.to_path_buf(),
            source,
        }),
    }
}

/// Runs forge in `root` and waits for it to finish, returning its stdout.
///
/// There is no timeout, a hanging forge hangs the caller.
///
/// # Errors
///
/// Returns [`ForgeError::Spawn`] if forge could not be started and [`ForgeError::Failed`] if it exited
/// unsuccessfully.
pub async fn run(
    executable: &Path,
    root: &Path,
    mode: Mode,
    match_path: &str,
) -> Result<String, ForgeError> {
    let args = mode.args(match_path);
    log::info!("running forge {mode} in {}...", root.display());
    log::trace!("arguments: {args:#?}");

    let output = Command::new(executable)
        .args(&args)
        .current_dir(root)
        .output()
        .await
        .map_err(|source| ForgeError::Spawn {
            program: executable.to_path_buf(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    log::trace!("forge output\nstdout:\n{stdout}\nstderr:\n{stderr}");

    if !output.status.success() {
        log::debug!("forge stderr:\n{stderr}");
        return Err(ForgeError::Failed {
            mode,
            status: output.status,
            stderr,
        });
    }

    log::info!("forge {mode} finished");
    Ok(stdout)
}
