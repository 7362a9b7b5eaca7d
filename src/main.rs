use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use minilang::lexer::Scanner;
use minilang::parser::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(name = "minilang")]
#[command(version, about = "Parse and check a minilang source file", long_about = None)]
struct Cli {
    /// Input file path
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit()
        }
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match parse_file(&cli.file) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse `path` and print the transcript. Returns whether the file was clean.
fn parse_file(path: &Path) -> Result<bool> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to open file '{}'", path.display()))?;

    let report = Parser::new(Scanner::new(input.chars())).parse_program();
    print!("{report}");

    Ok(report.succeeded())
}
