//! xtask for dot-tracker - build automation and tooling
//!
//! This binary provides development tasks like man page generation.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for dot-tracker")]
enum Task {
    /// Generate man pages from clap definitions
    GenerateManPages {
        /// Output directory for man pages (default: ./man)
        #[arg(short, long, default_value = "man")]
        output: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::GenerateManPages { output } => generate_man_pages(&output)?,
    }

    Ok(())
}

fn render(cmd: clap::Command, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create man page: {}", path.display()))?;
    clap_mangen::Man::new(cmd).render(&mut std::io::BufWriter::new(file))?;
    println!("✓ Generated: {}", path.display());
    Ok(())
}

fn generate_man_pages(output_dir: &Path) -> Result<()> {
    println!("Generating man pages...");

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let mut cmd = dot_tracker::cli::Cli::command();
    render(cmd.clone(), &output_dir.join("dtrack.1"))?;

    for subcmd_name in ["add", "list", "rename", "remove", "init"] {
        if let Some(subcmd) = cmd.find_subcommand_mut(subcmd_name) {
            let name = format!("dtrack-{subcmd_name}");
            let subcmd = subcmd.clone().name(name.clone());
            render(subcmd, &output_dir.join(format!("{name}.1")))?;
        }
    }

    println!(
        "\nMan pages successfully generated in: {}",
        output_dir.display()
    );
    println!("\nTo view the man pages:");
    println!("  man {}/dtrack.1", output_dir.display());

    Ok(())
}
