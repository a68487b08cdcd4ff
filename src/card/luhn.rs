/// Apply the Luhn mod-10 checksum to a normalized card number.
///
/// Precondition: `digits` is exactly 16 ASCII decimal digits, as
/// guaranteed by [`validate`](crate::card::validate). Behavior on
/// inputs violating the precondition is unspecified; non-digit
/// characters contribute zero to the sum rather than panicking.
///
/// Standard right-to-left Luhn: every second digit counting from the
/// second-to-last is doubled, doubles above 9 are reduced by 9, and
/// the number passes iff the total sum is divisible by 10.
pub fn luhn_test(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .enumerate()
        .map(|(position, c)| {
            let digit = c.to_digit(10).unwrap_or(0);
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}
