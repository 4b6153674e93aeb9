//! deferlint CLI — deferrable default-value auditing for operators and sensors.
//!
//! Invoked with no arguments it scans the `sensors/` and `operators/`
//! subtrees under the current directory and exits with the total violation
//! count (zero means clean).

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::Cli;

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn deferlint_output::OutputFormatter> = if cli.json {
        Box::new(deferlint_output::json::JsonFormatter)
    } else {
        Box::new(deferlint_output::human::HumanFormatter)
    };

    let exit_code = commands::audit::run(&*formatter, cli.verbose, &cli.root, cli.fix);
    std::process::exit(exit_code);
}
