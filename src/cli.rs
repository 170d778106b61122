use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default input path for the NHIS 2022 extract
pub const DEFAULT_INPUT: &str = "data/nhis_2022.csv";

/// Default output path for the cleaned table
pub const DEFAULT_OUTPUT: &str = "data/nhis_2022_cleaned.csv";

/// Sentinel-code recoding for NHIS survey extracts
#[derive(Parser, Debug)]
#[command(name = "nhis-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a survey extract and write the recoded table
    Clean {
        /// Input file path (CSV, TSV or Excel)
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,

        /// Custom recode rules (JSON array); defaults to the built-in NHIS table
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Write a cleaning report (JSON) to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Record the input file hash (SHA-256) in the report
        #[arg(long, default_value_t = true)]
        hash_file: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["nhis-clean"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_clean_defaults() {
        let cli = Cli::try_parse_from(["nhis-clean", "clean"]).unwrap();
        match cli.command {
            Some(Commands::Clean {
                input,
                out,
                rules,
                report,
                hash_file,
            }) => {
                assert_eq!(input, PathBuf::from(DEFAULT_INPUT));
                assert_eq!(out, PathBuf::from(DEFAULT_OUTPUT));
                assert!(rules.is_none());
                assert!(report.is_none());
                assert!(hash_file);
            }
            _ => panic!("expected clean subcommand"),
        }
    }

    #[test]
    fn test_clean_explicit_paths() {
        let cli =
            Cli::try_parse_from(["nhis-clean", "clean", "-i", "in.csv", "-o", "out.csv"]).unwrap();
        match cli.command {
            Some(Commands::Clean { input, out, .. }) => {
                assert_eq!(input, PathBuf::from("in.csv"));
                assert_eq!(out, PathBuf::from("out.csv"));
            }
            _ => panic!("expected clean subcommand"),
        }
    }
}
