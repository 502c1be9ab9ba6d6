use std::path::PathBuf;

use clap::{builder::Styles, Parser};
use clap_complete::Shell;

use crate::consts::{APP_NAME, APP_VERSION};

#[derive(Parser, Debug)]
#[command(
	name = APP_NAME,
    version = APP_VERSION,
    about,
    styles = get_styles(),
)]
pub struct Args {
    /// Directory firmware is stored under (defaults to the working directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Path to the checksum manifest (defaults to checksums.json in the
    /// output directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// With no subcommand, the interactive prompt is started
    #[command(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Parser, Debug)]
pub enum Commands {
    #[command(alias = "dl")]
    /// Download a firmware pair and verify it against the manifest
    Fetch(Fetch),

    #[command(alias = "v")]
    /// Verify an already-downloaded firmware pair without downloading
    Verify(Verify),

    #[command(alias = "ls")]
    /// List supported models and their available firmware versions
    List,

    /// Generate shell completion scripts
    Completion(Completion),
}

#[derive(Parser, Debug)]
pub struct Fetch {
    /// The model to fetch firmware for (see `list`)
    pub model: String,

    /// Firmware version, last digits only (e.g. 153)
    pub version: String,
}

#[derive(Parser, Debug)]
pub struct Verify {
    /// The model to verify downloaded firmware for
    pub model: String,

    /// Firmware version, last digits only (e.g. 153)
    pub version: String,
}

#[derive(Parser, Debug)]
pub struct Completion {
    /// The shell to generate completions for
    pub shell: Shell,
}

pub fn get_styles() -> Styles {
    // Colors are from One Dark
    let cyan = anstyle::Color::Rgb(anstyle::RgbColor(86, 182, 194));
    let blue = anstyle::Color::Rgb(anstyle::RgbColor(97, 175, 239));
    let red = anstyle::Color::Rgb(anstyle::RgbColor(224, 108, 117));
    let grey = anstyle::Color::Rgb(anstyle::RgbColor(140, 146, 160));
    let amber = anstyle::Color::Rgb(anstyle::RgbColor(229, 192, 123));

    Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(cyan)),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(cyan)),
        )
        .literal(anstyle::Style::new().fg_color(Some(blue)))
        .invalid(anstyle::Style::new().bold().fg_color(Some(red)))
        .error(anstyle::Style::new().bold().fg_color(Some(red)))
        .placeholder(anstyle::Style::new().fg_color(Some(grey)))
        .valid(anstyle::Style::new().bold().fg_color(Some(amber)))
}
