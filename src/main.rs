use std::{fs, io};

use clap::Parser;
use vervet::{repl, run_source};

/// vervet is a small, expression-oriented scripting language with
/// first-class functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells vervet to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the value of
    /// the last statement of a vervet script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text, or a script path with `--file`. Starts the REPL
    /// when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(stdin.lock(), io::stdout()) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = run_source(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
