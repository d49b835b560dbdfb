//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for prime-checker
#[derive(Parser, Debug)]
#[command(name = "prime-checker")]
#[command(author, version, about = "Ask a language model whether a number is prime")]
#[command(long_about = r#"
Asks a chat-completion model whether NUMBER is prime and prints "yes" or "no".

The API key is read from OPENAI_API_KEY; the request deadline from
MAX_TIMEOUT_SECONDS (default 30). Both may be set in a local .env file.

Settings files are loaded from (in priority order):
1. --config <path>                       Explicit settings file
2. ./prime-checker.toml                  Project-level settings
3. ~/.config/prime-checker/config.toml   Global settings

Example:
  prime-checker 17
  prime-checker -v 91
"#)]
pub struct Cli {
    /// The integer to check (exactly one)
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a .env file (default: search for .env from the current directory)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Path to settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of settings files
    #[arg(long)]
    pub no_config: bool,

    /// Chat model to ask (overrides settings)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Show settings file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
