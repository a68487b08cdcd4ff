use serde::Serialize;

/// Outcome of structural validation for a candidate card number.
///
/// `eligible` is true iff `normalized` is exactly 16 decimal digits.
/// `normalized` is populated on every path, including rejections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub eligible: bool,
    pub normalized: String,
}

/// Final classification for a single candidate input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Structurally valid and the checksum holds
    Passed,
    /// Structurally valid but the checksum does not hold
    Failed,
    /// Rejected before the checksum was attempted
    Invalid,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed => write!(f, "PASSED"),
            Verdict::Failed => write!(f, "FAILED"),
            Verdict::Invalid => write!(f, "INVALID INPUT"),
        }
    }
}

/// Per-input record consumed by the output formatters
#[derive(Debug, Clone, Serialize)]
pub struct CardReport {
    /// Raw input exactly as supplied on the command line
    pub input: String,
    /// Input with spaces and dashes removed
    pub normalized: String,
    pub verdict: Verdict,
}
