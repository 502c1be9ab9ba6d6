mod banner;
mod catalog;
mod checksum;
mod cli;
mod config;
mod consts;
mod fetch;
mod logger;
mod manifest;
mod paths;
mod shell;
mod verify;
mod workflow;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use colored::Colorize;

use crate::catalog::Catalog;
use crate::cli::Args;
use crate::config::Config;
use crate::workflow::error::WorkflowError;
use crate::workflow::Selection;

const EXIT_INVALID_SELECTION: i32 = 2;
const EXIT_DOWNLOAD_FAILED: i32 = 3;
const EXIT_MANIFEST: i32 = 4;
const EXIT_IO: i32 = 5;
const EXIT_INTERRUPTED: i32 = 130;

pub fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
}

#[tokio::main]
async fn main() {
    logger::init_logger();

    let code = tokio::select! {
        code = run() => code,
        _ = tokio::signal::ctrl_c() => {
            println!("\n{}", "Process interrupted by user.".red().bold());
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(code);
}

async fn run() -> i32 {
    let args = Args::parse();

    let config = match Config::new(args.output.clone(), args.manifest.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return EXIT_IO;
        }
    };
    let catalog = Catalog::builtin();

    let result = match args.commands {
        Some(cli::Commands::Fetch(fetch)) => {
            shell::run_once(
                &catalog,
                &config,
                &Selection {
                    model_id: fetch.model,
                    version_id: fetch.version,
                },
            )
            .await
        }
        Some(cli::Commands::Verify(verify)) => {
            shell::verify_once(
                &catalog,
                &config,
                &Selection {
                    model_id: verify.model,
                    version_id: verify.version,
                },
            )
            .await
        }
        Some(cli::Commands::List) => {
            shell::print_catalog(&catalog);
            Ok(())
        }
        Some(cli::Commands::Completion(completion)) => {
            let mut cmd = Args::command();
            print_completions(completion.shell, &mut cmd);
            Ok(())
        }
        None => shell::interactive(&catalog, &config).await,
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &WorkflowError) -> i32 {
    match error {
        WorkflowError::Catalog(_) => EXIT_INVALID_SELECTION,
        WorkflowError::Fetch { .. } | WorkflowError::Client(_) => EXIT_DOWNLOAD_FAILED,
        WorkflowError::Manifest(_) => EXIT_MANIFEST,
        WorkflowError::NotDownloaded { .. } | WorkflowError::Url(_) | WorkflowError::Io(_) => {
            EXIT_IO
        }
    }
}
