#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use csbind_cli::args::CliArgs;
use csbind_cli::driver;
use csbind_cli::reporter::Reporter;

/// Exit status of `--check` when any generated file is out of date.
const EXIT_STALE: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if CSBIND_LOG or RUST_LOG is set (zero cost otherwise).
    csbind_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let plan = driver::plan(&args, &cwd)?;

    if args.show_config {
        let json = plan
            .config
            .to_json_pretty()
            .context("failed to serialize configuration")?;
        println!("{json}");
        return Ok(());
    }

    let color = match args.pretty {
        Some(pretty) => {
            colored::control::set_override(pretty);
            pretty
        }
        None => std::io::stderr().is_terminal(),
    };
    let reporter = Reporter::new(color);

    let result = driver::run(&args, &plan)?;

    if args.stdout {
        for outcome in &result.outcomes {
            print!("{}", outcome.module.text);
        }
    } else {
        println!("Generating C# bindings:");
        for outcome in &result.outcomes {
            println!("{}", reporter.progress_line(outcome));
        }
    }

    for outcome in &result.outcomes {
        // render_placeholders() already ends every line
        eprint!("{}", reporter.render_placeholders(outcome));
    }
    eprintln!(
        "{}",
        reporter.render_summary(
            result.outcomes.len(),
            result.placeholder_count(),
            result.stale_count()
        )
    );

    if result.stale_count() > 0 {
        std::process::exit(EXIT_STALE);
    }
    Ok(())
}
