use std::{
    io::{self, BufRead},
    panic,
    process::ExitCode,
};

use clap::Parser;
use tally::{Session, SessionOptions, logging::init_tracing};

/// tally is an interactive calculator. End each statement with '=' to print
/// its value, declare variables with 'let name = value', and type 'q' to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate these statements instead of reading standard input.
    #[arg(short, long, value_name = "STATEMENTS")]
    eval: Option<String>,

    /// Do not print the '> ' prompt.
    #[arg(short, long)]
    quiet: bool,

    /// Start without the predefined constants 'pi' and 'e'.
    #[arg(long)]
    no_constants: bool,

    /// Log diagnostics to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> tally::EvalResult<()> {
    let options = SessionOptions { prompt:    !args.quiet && args.eval.is_none(),
                                   constants: !args.no_constants, };

    match &args.eval {
        Some(statements) => session(statements.as_bytes(), options),
        None => session(io::stdin().lock(), options),
    }
}

fn session(input: impl BufRead, options: SessionOptions) -> tally::EvalResult<()> {
    Session::new(input, io::stdout().lock(), io::stderr().lock(), options).run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        },
        Err(_) => {
            eprintln!("Oops: unknown failure");
            ExitCode::from(2)
        },
    }
}
