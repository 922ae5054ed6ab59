use clap::Parser;
use std::path::PathBuf;

const FULLSCREEN_FLAG: &str = "-f";

/// Move the block with WASD, Space to start, Escape to quit.
#[derive(Debug, Parser)]
#[command(name = "block-demo", version, args_override_self = true)]
pub struct Cli {
    /// Fill the desktop instead of opening a window
    #[arg(short = 'f', long)]
    pub fullscreen: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Anything else on the command line is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// True when any argument is `-f`, including one that follows an
    /// ignored argument.
    pub fn fullscreen_requested(&self) -> bool {
        self.fullscreen || self.rest.iter().any(|arg| arg == FULLSCREEN_FLAG)
    }
}
