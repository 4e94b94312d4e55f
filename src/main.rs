use std::path::PathBuf;
use std::process::ExitCode;

use alg2c::config::Options;
use alg2c::{read_source, translate, write_artifact};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;

#[derive(Parser)]
#[command(version, about = "Translates ALG programs to C", long_about = None)]
struct Cli {
    /// Path of the ALG source file
    source: PathBuf,

    /// Path of the C file to write (defaults to the source name with `.c`)
    destination: Option<PathBuf>,
}

fn usage() {
    println!("\n{}\n", "alg2c: ALG to C translator".bold());
    println!("{}", Cli::command().render_usage());
    println!("  source       ALG source file, required");
    println!("  destination  C output file, optional\n");
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            usage();
            return ExitCode::from(1);
        }
    };

    let options = Options::new(cli.source, cli.destination);
    if options.destination == options.source {
        println!(
            "{}",
            format!("destination {} is the source file", options.destination.display()).red()
        );
        return ExitCode::from(2);
    }

    let text = match read_source(&options.source) {
        Ok(text) => text,
        Err(err) => {
            println!("{}", format!("{err:#}").red());
            return ExitCode::from(2);
        }
    };

    let translation = translate(&text);
    for diagnostic in &translation.diagnostics {
        println!("{}", diagnostic.to_string().red());
    }

    let status = translation.status.to_string();
    if translation.succeeded() {
        println!("\n{}", status.green());
    } else {
        println!("\n{}", status.red());
    }

    if let Err(err) = write_artifact(&options.destination, translation.output.as_deref()) {
        println!("{}", format!("{err:#}").red());
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
