use colored::*;

use crate::card::input_validator::CARD_NUMBER_LEN;
use crate::utils::error::AppResult;
use crate::utils::types::{CardReport, Verdict};

/// Separator inserted between 4-digit groups for display
pub const GROUP_SEPARATOR: char = '-';

/// Formats classification results for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format the program banner printed before any results
    pub fn format_heading(candidate_count: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Luhn Tester".blue().bold()));
        output.push_str("Determine if a given credit card number passes the Luhn test.\n\n");
        output.push_str(&format!(
            "Testing {} argument(s) passed from console...\n",
            candidate_count
        ));
        output
    }

    /// Hint printed when the program is invoked without any candidates
    pub fn usage_hint() -> String {
        "Please pass at least one 16-digit credit card number as an argument \
         at the command line. Spaces and dashes are acceptable but not required."
            .to_string()
    }

    /// Format a single classified input as a colored result line.
    ///
    /// Eligible inputs are shown grouped into 4-digit blocks; rejected
    /// inputs are echoed raw since their normalized form may not group
    /// cleanly.
    pub fn format_report(report: &CardReport) -> String {
        match report.verdict {
            Verdict::Passed => format!(
                "{}: {}",
                Self::group_digits(&report.normalized).cyan(),
                report.verdict.to_string().green()
            ),
            Verdict::Failed => format!(
                "{}: {}",
                Self::group_digits(&report.normalized).cyan(),
                report.verdict.to_string().yellow()
            ),
            Verdict::Invalid => {
                format!("{}: {}", report.input, report.verdict).red().to_string()
            }
        }
    }

    /// Format the full run as a pretty-printed JSON array
    pub fn format_json(reports: &[CardReport]) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }

    /// Insert a separator after every 4th character of a normalized
    /// card number. Display only; a 16-digit input yields 19 characters.
    pub fn group_digits(digits: &str) -> String {
        let mut grouped = String::with_capacity(CARD_NUMBER_LEN + CARD_NUMBER_LEN / 4);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(c);
        }

        grouped
    }

    /// Format info message for verbose CLI output
    pub fn format_info(message: &str) -> String {
        format!("{} {}", "Info:".blue().bold(), message)
    }

    /// Format error message for CLI display
    pub fn format_error(error: &crate::utils::error::AppError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }
}
