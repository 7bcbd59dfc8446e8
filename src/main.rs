use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use dot_tracker::cli::{Cli, Commands};
use dot_tracker::output::{Reporter, Verbosity};
use dot_tracker::{TrackerContext, TrackerError, commands, logging};
use std::io;
use std::process;

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<TrackerError>() {
            Some(err) if err.is_critical() => {
                tracing::error!(error = %err, "manifest and store may be out of sync");
            }
            Some(err) if err.is_user_error() => tracing::debug!(error = %err, "rejected request"),
            _ => {}
        }
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    let reporter = Reporter::new(Verbosity::from_flags(cli.quiet, cli.verbose));

    // Completions do not need settings
    if let Commands::Completion { shell } = cli.command {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    // A missing settings file is fatal before any manifest exists
    let ctx = TrackerContext::new(cli.config)?;

    match cli.command {
        Commands::Init => commands::init::execute(&ctx, &reporter)?,
        Commands::Add {
            paths,
            group,
            overwrite,
        } => commands::add::execute(&ctx, &reporter, &paths, group.as_deref(), overwrite)?,
        Commands::List => commands::list::execute(&ctx, &reporter)?,
        Commands::Rename { old, new } => commands::rename::execute(&ctx, &reporter, &old, &new)?,
        Commands::Remove { group, file } => {
            commands::remove::execute(&ctx, &reporter, &group, file.as_deref())?;
        }
        // Handled before the settings are loaded
        Commands::Completion { .. } => {}
    }

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
