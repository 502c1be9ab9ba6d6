//! Interactive console surface. Everything here is presentation; the
//! download-verify contract lives in [`crate::workflow`].

use std::collections::HashMap;
use std::io::Write as _;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::banner;
use crate::catalog::{Catalog, DeviceModel, Side};
use crate::config::Config;
use crate::fetch::{Fetcher, TransferProgress};
use crate::manifest::ChecksumManifest;
use crate::verify::MatchState;
use crate::workflow::error::WorkflowError;
use crate::workflow::{RunReport, Selection, Workflow};

/// Lazily creates one progress bar per side as the first chunk for that
/// side arrives. Downloads are sequential, so at most one bar is live.
pub struct ProgressRenderer {
    bars: HashMap<Side, ProgressBar>,
}

impl ProgressRenderer {
    pub fn new() -> Self {
        Self {
            bars: HashMap::new(),
        }
    }

    pub fn update(&mut self, side: Side, progress: TransferProgress) {
        let bar = self.bars.entry(side).or_insert_with(|| {
            let bar = ProgressBar::new(progress.total_bytes);
            bar.set_style(
                ProgressStyle::with_template(
                    "{prefix:>5} [{bar:30.cyan}] {bytes}/{total_bytes}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
            );
            bar.set_prefix(side.to_string());
            bar
        });
        bar.set_position(progress.bytes_downloaded);
        if progress.bytes_downloaded >= progress.total_bytes {
            bar.finish();
        }
    }
}

pub fn print_catalog(catalog: &Catalog) {
    for (index, model) in catalog.models().iter().enumerate() {
        println!(
            "{}",
            format!("[{}] {} ({})", index + 1, model.display_name, model.id)
                .cyan()
                .bold()
        );
        for version in &model.versions {
            println!("    {}", version.label.green());
        }
    }
}

fn print_versions(model: &DeviceModel) {
    println!("{}", "\nAvailable Versions:".yellow().bold());
    for version in &model.versions {
        println!("{}", version.label.green().bold());
    }
}

fn print_outcome(report: &RunReport) {
    if report.downloaded {
        println!("\n{}", "Files downloaded successfully!".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} version {} is already downloaded.",
                report.model_name, report.version
            )
            .green()
            .bold()
        );
    }
    print_report(report);
}

fn print_report(report: &RunReport) {
    let comparison = &report.comparison;
    println!("\n{}", "Checksum Comparison Results:".green().bold());
    println!("{}", "=".repeat(50).green().bold());
    println!(
        "{}",
        format!("Left file checksum:  {}", comparison.left_checksum).green()
    );
    println!(
        "{}",
        format!("Right file checksum: {}", comparison.right_checksum).green()
    );
    println!(
        "Left file match:     {}",
        colored_state(comparison.left_match)
    );
    println!(
        "Right file match:    {}",
        colored_state(comparison.right_match)
    );
    println!("{}", "=".repeat(50).green().bold());
}

fn colored_state(state: MatchState) -> String {
    let label = state.describe();
    match state {
        MatchState::Match => label.green().bold().to_string(),
        MatchState::Mismatch => label.red().bold().to_string(),
        MatchState::Unknown => label.yellow().bold().to_string(),
    }
}

/// One non-interactive workflow run, as used by the `fetch` subcommand.
pub async fn run_once(
    catalog: &Catalog,
    config: &Config,
    selection: &Selection,
) -> Result<(), WorkflowError> {
    let manifest = ChecksumManifest::load(config.manifest_path()).await?;
    let workflow = Workflow::new(catalog, &manifest, Fetcher::new()?, config);

    let mut renderer = ProgressRenderer::new();
    let report = workflow
        .run(selection, |side, progress| renderer.update(side, progress))
        .await?;

    print_outcome(&report);
    Ok(())
}

/// Verify-only run for the `verify` subcommand; never touches the network.
pub async fn verify_once(
    catalog: &Catalog,
    config: &Config,
    selection: &Selection,
) -> Result<(), WorkflowError> {
    let manifest = ChecksumManifest::load(config.manifest_path()).await?;
    let workflow = Workflow::new(catalog, &manifest, Fetcher::new()?, config);

    let report = workflow.verify_existing(selection).await?;
    print_report(&report);
    Ok(())
}

/// The prompt loop the tool started life as: banner, pick a model by
/// number (re-prompts until valid), pick a version (empty input lists the
/// versions once; an invalid version ends the run).
pub async fn interactive(catalog: &Catalog, config: &Config) -> Result<(), WorkflowError> {
    banner::print_banner();

    let manifest = ChecksumManifest::load(config.manifest_path()).await?;
    let mut input = BufReader::new(tokio::io::stdin());

    let model = match prompt_model(catalog, &mut input).await? {
        Some(model) => model,
        None => return Ok(()),
    };

    let version = match prompt_version(model, &mut input).await? {
        Some(version) => version,
        None => return Ok(()),
    };

    let selection = Selection {
        model_id: model.id.clone(),
        version_id: version,
    };

    let workflow = Workflow::new(catalog, &manifest, Fetcher::new()?, config);
    let mut renderer = ProgressRenderer::new();
    let report = workflow
        .run(&selection, |side, progress| renderer.update(side, progress))
        .await?;

    print_outcome(&report);
    Ok(())
}

/// Returns `Ok(None)` on end of input. Invalid model numbers re-prompt.
async fn prompt_model<'a>(
    catalog: &'a Catalog,
    input: &mut BufReader<tokio::io::Stdin>,
) -> Result<Option<&'a DeviceModel>, WorkflowError> {
    loop {
        let line = match read_prompted_line(
            input,
            &format!(
                "Select a model number (1-{}), or press Enter to list models: ",
                catalog.models().len()
            ),
        )
        .await?
        {
            Some(line) => line,
            None => return Ok(None),
        };

        if line.is_empty() {
            println!();
            print_catalog(catalog);
            continue;
        }

        match line.parse::<usize>().ok().and_then(|n| catalog.by_index(n)) {
            Some(model) => return Ok(Some(model)),
            None => println!("{}", "Invalid model number.".red().bold()),
        }
    }
}

/// Returns `Ok(None)` on end of input. Empty input lists the available
/// versions and asks once more; an invalid version is an error, ending the
/// run. The asymmetry with the model prompt is deliberate, matching the
/// tool's established behavior.
async fn prompt_version(
    model: &DeviceModel,
    input: &mut BufReader<tokio::io::Stdin>,
) -> Result<Option<String>, WorkflowError> {
    let first = model.versions.first().map(|v| v.id.as_str()).unwrap_or("153");
    let prompt = format!(
        "Enter the firmware version (last digits, e.g., {}), or press Enter to display available versions: ",
        first
    );

    let mut line = match read_prompted_line(input, &prompt).await? {
        Some(line) => line,
        None => return Ok(None),
    };

    if line.is_empty() {
        print_versions(model);
        line = match read_prompted_line(
            input,
            &format!(
                "\nPlease enter the firmware version you want to download (e.g., {}): ",
                first
            ),
        )
        .await?
        {
            Some(line) => line,
            None => return Ok(None),
        };
    }

    let version = model.version(&line)?;
    Ok(Some(version.id.clone()))
}

/// Prints a yellow prompt and reads one trimmed line. `None` means EOF.
async fn read_prompted_line(
    input: &mut BufReader<tokio::io::Stdin>,
    prompt: &str,
) -> Result<Option<String>, WorkflowError> {
    print!("{}", prompt.yellow().bold());
    std::io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
