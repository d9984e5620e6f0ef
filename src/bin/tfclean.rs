//! Command-line interface for tfclean
//! Rewrites legacy Terraform syntax in place across files and directory
//! trees, touching only files whose contents actually change.
//!
//! Usage:
//!   tfclean `<path>`...                - Clean files/directories in place
//!   tfclean --check `<path>`...        - Report changes without writing
//!   tfclean --report json `<path>`...  - Emit a JSON summary on stdout

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tfclean::run::{process_path, FileOutcome, Options};

fn main() {
    let matches = Command::new("tfclean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conservative syntax cleanup for Terraform configuration files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Files or directories to clean")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Report files that need cleaning without writing; exit 1 if any do"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Summary format printed to stdout"),
        )
        .get_matches();

    let options = Options {
        check: matches.get_flag("check"),
    };

    let mut outcomes = Vec::new();
    for path in matches.get_many::<String>("paths").unwrap() {
        process_path(&PathBuf::from(path), &options, &mut outcomes);
    }

    match matches.get_one::<String>("report").unwrap().as_str() {
        "json" => print_json_report(&outcomes),
        _ => print_text_report(&outcomes),
    }

    if options.check && outcomes.iter().any(|o| o.changed()) {
        std::process::exit(1);
    }
}

fn print_text_report(outcomes: &[FileOutcome]) {
    let changed = outcomes.iter().filter(|o| o.changed()).count();
    let total = outcomes.len();
    println!("{} of {} files changed", changed, total);
}

fn print_json_report(outcomes: &[FileOutcome]) {
    match serde_json::to_string_pretty(outcomes) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
