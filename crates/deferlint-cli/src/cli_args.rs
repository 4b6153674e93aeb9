use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "deferlint",
    version,
    about = "Deferrable default-value auditing for operator and sensor constructors"
)]
pub(crate) struct Cli {
    /// Repository root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Rewrite fixable violations in place
    #[arg(long)]
    pub fix: bool,

    /// Output as structured JSON
    #[arg(long)]
    pub json: bool,

    /// Include a summary line in output
    #[arg(long)]
    pub verbose: bool,
}
