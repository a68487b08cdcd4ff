use clap::{Parser, ValueEnum};

/// Luhn Tester CLI - check card numbers against the Luhn checksum
#[derive(Parser, Debug)]
#[command(name = "luhn")]
#[command(about = "Determine if a given credit card number passes the Luhn test")]
#[command(version = "0.1.0")]
pub struct CliArgs {
    /// Candidate card numbers; spaces and dashes are acceptable but not required
    #[arg(value_name = "NUMBER")]
    pub candidates: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Echo the normalized form of every input, including rejected ones
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Banner plus one colored result line per input
    Text,
    /// Pretty-printed JSON report array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
