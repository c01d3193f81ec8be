#![warn(clippy::nursery)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::uninlined_format_args)]

use clap::Parser;
use polish::{COMMANDS, Grammar};
use rustyline::{Editor, history::DefaultHistory};
use std::process::ExitCode;
use tracing::debug;
use util::{CommandsCompleter, Reporter, Result};

/// Interactive evaluator for prefix-notation integer arithmetic.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Evaluate a single line, print the result and exit.
    #[arg(short, long, value_name = "PROGRAM")]
    eval: Option<String>,

    /// Prompt shown before each line.
    #[arg(long, default_value = "polish> ")]
    prompt: String,

    /// Log parsing and evaluation to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Print diagnostics without colors.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    util::logging::init(cli.verbose);

    let grammar = Grammar::new();
    let reporter = Reporter::new("<stdin>", !cli.no_color);

    if let Some(line) = &cli.eval {
        return if respond(&grammar, &reporter, line)? {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        };
    }

    let mut rl = Editor::<CommandsCompleter, DefaultHistory>::new()?;
    let completer = CommandsCompleter::new(COMMANDS.iter().copied());
    rl.set_helper(Some(completer));

    println!("polish {}", env!("CARGO_PKG_VERSION"));
    println!("Use (Ctrl + C) to Exit\n");

    loop {
        let input = rl.readline(&cli.prompt);
        match input {
            Ok(line) => {
                rl.add_history_entry(&line).ok();
                respond(&grammar, &reporter, &line)?;
            }
            Err(err) => {
                debug!("stopped reading input: {err}");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Parses and runs one line. Returns `false` when the line did not parse.
fn respond(grammar: &Grammar, reporter: &Reporter, line: &str) -> Result<bool> {
    match grammar.parse(line) {
        Ok(cmd) => {
            debug!(?cmd, "parsed");
            println!("{}", cmd.run());
            Ok(true)
        }
        Err(errs) => {
            debug!(count = errs.len(), "parse failed");
            reporter.eprint(line, &errs)?;
            Ok(false)
        }
    }
}
