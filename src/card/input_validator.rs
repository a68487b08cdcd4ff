use crate::utils::types::Validation;

/// Required length of a normalized card number
pub const CARD_NUMBER_LEN: usize = 16;

/// Determine whether a candidate string minimally qualifies as a credit
/// card number: non-empty after normalization, exactly 16 characters,
/// and all characters numeric.
///
/// Absent input is absorbed as the empty string rather than surfaced as
/// an error. The normalized string is returned on every path, including
/// rejections, so callers can display it regardless of outcome.
pub fn validate(candidate: Option<&str>) -> Validation {
    let normalized = strip_separators(candidate.unwrap_or(""));

    let eligible = !is_empty_or_whitespace(&normalized)
        && is_card_number_len(&normalized)
        && all_chars_numeric(&normalized);

    Validation { eligible, normalized }
}

/// Remove every space and dash, preserving the order of the remaining characters
fn strip_separators(candidate: &str) -> String {
    candidate.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

fn is_empty_or_whitespace(ccn: &str) -> bool {
    ccn.trim().is_empty()
}

fn is_card_number_len(ccn: &str) -> bool {
    ccn.chars().count() == CARD_NUMBER_LEN
}

/// ASCII digits only; decimal digits from other Unicode scripts are
/// rejected to keep the card-number domain portable
fn all_chars_numeric(ccn: &str) -> bool {
    ccn.chars().all(|c| c.is_ascii_digit())
}
