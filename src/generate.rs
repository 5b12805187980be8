//! The full report pipeline: run forge, parse its output, lay out and render the table.

use std::{fs, path::PathBuf};

use anyhow::Context;

use crate::{
    forge::{self, Mode, DEFAULT_MATCH_PATH},
    parsers::{json, snapshot, ParseError},
    report,
};

/// Options shared by both report binaries. Every default reproduces the standard gas comparison run.
#[derive(Clone, Debug, clap::Args)]
pub struct Options {
    /// Path to the forge project root, forge runs here and the snapshot file is read from here
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the forge executable
    #[arg(long, default_value = "forge")]
    pub forge: PathBuf,

    /// Test path glob forge is restricted to
    #[arg(long, default_value = DEFAULT_MATCH_PATH)]
    pub match_path: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            forge: PathBuf::from("forge"),
            match_path: DEFAULT_MATCH_PATH.to_string(),
        }
    }
}

/// Runs forge in the given `mode` and renders the gas comparison as a markdown table.
///
/// # Errors
///
/// Fails if forge cannot be found or exits unsuccessfully, if the snapshot file cannot be read, or if any part of
/// forge's output cannot be parsed. No partial table is produced in any of these cases.
///
/// # Examples
///
/// ```no_run
/// use gas_report::{generate, Mode, Options};
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let table = generate(Mode::Json, &Options::default()).await?;
/// println!("{table}");
/// #     Ok(())
/// # }
/// ```
pub async fn generate(mode: Mode, options: &Options) -> anyhow::Result<String> {
    let executable = forge::validate_executable(&options.forge).await?;
    let stdout = forge::run(&executable, &options.root, mode, &options.match_path).await?;

    let results = match mode {
        Mode::Snapshot => {
            let path = options.root.join(snapshot::FILE_NAME);
            log::info!("reading snapshot from {}...", path.display());
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("could not read snapshot file {}", path.display()))?;
            snapshot::parse(&contents).context("could not parse snapshot file")?
        }
        Mode::Json => {
            let payload = json::extract_payload(&stdout).ok_or(ParseError::MissingPayload)?;
            json::parse(payload).context("could not parse forge JSON report")?
        }
    };

    let rows = report::rows(&results, mode.order());
    log::debug!("assembled {} table rows", rows.len());
    Ok(report::render_markdown(&rows))
}
