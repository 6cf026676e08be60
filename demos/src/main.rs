// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use minijson::{parse_slice, Value};

/// Parse a JSON literal or number and report its type and value.
#[derive(Parser, Debug)]
#[command(name = "minijson-check", version)]
struct Args {
    /// File to read; standard input when omitted
    file: Option<PathBuf>,

    /// Print nothing, only set the exit code
    #[arg(short, long)]
    quiet: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Unable to read input: {e}");
            return ExitCode::from(2);
        }
    };
    log::debug!("read {} bytes", input.len());

    match parse_slice(&input) {
        Ok(value) => {
            if !args.quiet {
                match value {
                    Value::Number(n) => println!("{}: {n}", value.value_type()),
                    other => println!("{}", other.value_type()),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !args.quiet {
                eprintln!("Error: JSON parsing failed: {e} ({e:?})");
            }
            ExitCode::FAILURE
        }
    }
}
