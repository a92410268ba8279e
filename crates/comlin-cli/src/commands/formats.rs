//! Formats command - inspect the format registry.

use clap::{Args, Subcommand};
use console::style;

use comlin_core::formats::FormatRegistry;

/// Arguments for the formats command.
#[derive(Args)]
pub struct FormatsArgs {
    #[command(subcommand)]
    command: FormatsCommand,
}

#[derive(Subcommand)]
enum FormatsCommand {
    /// List registered formats in try order
    List,
    /// Check every format against its own sample and the other samples
    Verify,
}

pub async fn run(args: FormatsArgs) -> anyhow::Result<()> {
    match args.command {
        FormatsCommand::List => list_formats(),
        FormatsCommand::Verify => verify_formats(),
    }
}

fn list_formats() -> anyhow::Result<()> {
    let registry = FormatRegistry::discover()?;

    println!("{}", style("Registered Formats").bold());
    println!();
    println!("{:>5}  {}", style("order").dim(), style("name").dim());

    for format in registry.formats() {
        println!("{:>5}  {}", format.order(), style(format.name()).cyan());
    }

    println!();
    println!(
        "{} {} formats, tried in ascending order on every page",
        style("ℹ").blue(),
        registry.len()
    );

    Ok(())
}

fn verify_formats() -> anyhow::Result<()> {
    let registry = FormatRegistry::discover()?;
    let defects = registry.verify();

    if defects.is_empty() {
        println!(
            "{} {} formats verified, no defects",
            style("✓").green(),
            registry.len()
        );
        return Ok(());
    }

    eprintln!("{}", style("Format defects:").red());
    for defect in &defects {
        eprintln!("  - {}", defect);
    }

    anyhow::bail!("{} format defect(s) found", defects.len());
}
