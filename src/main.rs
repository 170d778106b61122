mod cleaning;
mod cli;
mod error;
mod output;
mod pipeline;
mod readers;
mod report;
mod types;
mod values;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands};
use pipeline::CleanOptions;
use types::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Clean {
            input,
            out,
            rules,
            report,
            hash_file,
        }) => run_clean(&input, &out, rules.as_deref(), report.as_deref(), hash_file),
        // Bare invocation: clean the fixed NHIS extract paths
        None => run_clean(
            Path::new(cli::DEFAULT_INPUT),
            Path::new(cli::DEFAULT_OUTPUT),
            None,
            None,
            true,
        ),
    }
}

fn run_clean(
    input: &Path,
    out: &Path,
    rules_path: Option<&Path>,
    report_path: Option<&Path>,
    hash_file: bool,
) -> Result<()> {
    let rules = match rules_path {
        Some(path) => cleaning::load_rules(path)?,
        None => cleaning::DEFAULT_RULES.clone(),
    };

    let options = CleanOptions {
        rules,
        hash_input: hash_file,
    };

    let outcome = pipeline::clean_file(input, &options)?;

    output::write_csv_file(&outcome.table, out)?;
    eprintln!("{}", outcome.report.summary());
    eprintln!("Cleaned table written to: {}", out.display());

    if let Some(path) = report_path {
        output::write_json_file(&outcome.report, path)?;
        eprintln!("Cleaning report written to: {}", path.display());
    }

    Ok(())
}
