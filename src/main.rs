use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use xscript::{Environment, Options, Value, interpreter::evaluator::core::DEFAULT_MAX_CALL_DEPTH,
              run_with};

/// xscript is a small dynamically typed scripting language.
///
/// Runs the given source, or standard input when no source is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells xscript to read the script from the file named by CONTENTS.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the last statement executed.
    #[arg(short, long)]
    print: bool,

    /// How many function calls may be active at once.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Raises log verbosity (-v debug, -vv trace). `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The script itself, or a file path with --file.
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn read_script(args: &Args) -> Result<String, String> {
    match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path).map_err(|e| {
                                  format!("Failed to read the input file '{path}': {e}")
                              }),
        (Some(source), false) => Ok(source.clone()),
        (None, true) => Err("--file requires a path".to_string()),
        (None, false) => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)
                       .map_err(|e| format!("Failed to read standard input: {e}"))?;
            Ok(source)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = match read_script(&args) {
        Ok(script) => script,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        },
    };

    let mut env = Environment::with_natives();
    let options = Options { max_call_depth: args.max_call_depth,
                            ..Options::default() };

    match run_with(&script, &mut env, options) {
        Ok(value) => {
            if args.print && value != Value::Null {
                println!("{}", value.repr());
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
