use clap::Parser;

use crate::card::{luhn_test, validate};
use crate::cli::{CliArgs, OutputFormat, OutputFormatter};
use crate::utils::types::{CardReport, Verdict};

/// Main CLI runner that classifies candidate card numbers
pub struct CliRunner {
    verbose: bool,
}

impl CliRunner {
    /// Create a new CLI runner
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Classify a single candidate: structural validation first, the
    /// Luhn checksum only if the input is eligible
    pub fn test_candidate(&self, candidate: &str) -> CardReport {
        let validation = validate(Some(candidate));

        if self.verbose {
            eprintln!(
                "{}",
                OutputFormatter::format_info(&format!(
                    "Normalized {:?} to {:?}",
                    candidate, validation.normalized
                ))
            );
        }

        let verdict = if !validation.eligible {
            Verdict::Invalid
        } else if luhn_test(&validation.normalized) {
            Verdict::Passed
        } else {
            Verdict::Failed
        };

        CardReport {
            input: candidate.to_string(),
            normalized: validation.normalized,
            verdict,
        }
    }

    /// Classify every candidate in argument order
    pub fn test_all(&self, candidates: &[String]) -> Vec<CardReport> {
        candidates
            .iter()
            .map(|candidate| self.test_candidate(candidate))
            .collect()
    }
}

/// Main entry point for CLI execution
pub fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Invocation without candidates prints a hint and succeeds;
    // it is not an error condition
    if args.candidates.is_empty() {
        println!("{}", OutputFormatter::usage_hint());
        return Ok(());
    }

    let runner = CliRunner::new(args.verbose);

    match args.format {
        OutputFormat::Text => {
            println!("{}", OutputFormatter::format_heading(args.candidates.len()));
            for candidate in &args.candidates {
                let report = runner.test_candidate(candidate);
                println!("{}", OutputFormatter::format_report(&report));
            }
        }

        OutputFormat::Json => {
            let reports = runner.test_all(&args.candidates);
            match OutputFormatter::format_json(&reports) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("{}", OutputFormatter::format_error(&e));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
