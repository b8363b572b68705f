use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use android_git_scanner::cli::{run_scan_workflow, ScanWorkflowArgs};
use android_git_scanner::config;
use android_git_scanner::task::ScanTask;
use android_git_scanner::ui;

#[derive(clap::Parser)]
#[command(
    name = "android-git-scanner",
    about = "Map Android release tags to ART oat and vdex format versions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract oat versions from runtime/oat.h (or runtime/oat.cc)
    Oat(ScanArgs),
    /// Extract vdex versions from runtime/vdex_file.h
    Vdex(ScanArgs),
}

#[derive(Args)]
struct ScanArgs {
    #[arg(help = "Path to a git checkout of the ART sources")]
    git_folder: PathBuf,

    #[arg(
        long,
        help = "Output file [default: oat_versions.json or vdex_versions.json]"
    )]
    output: Option<PathBuf>,

    #[arg(long, help = "Invert the output")]
    invert: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (task, args) = match cli.command {
        Command::Oat(args) => (ScanTask::Oat, args),
        Command::Vdex(args) => (ScanTask::Vdex, args),
    };

    if let Err(e) = run(task, args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(task: ScanTask, args: ScanArgs) -> Result<()> {
    if !args.git_folder.exists() {
        bail!("Path '{}' does not exist", args.git_folder.display());
    }

    let config = config::load_config(None).context("Error loading config")?;

    let result = run_scan_workflow(
        ScanWorkflowArgs {
            task,
            repository: args.git_folder,
            output: args.output,
            invert: args.invert,
        },
        &config,
    )?;

    ui::display_success(&ui::format_result(&result));
    Ok(())
}
