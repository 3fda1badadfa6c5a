//! Card number display formatting.
//!
//! Card entry fields display the number in groups of four digits. These
//! helpers produce that form from raw input.

/// Formats a card number into groups of 4 digits separated by spaces.
///
/// Non-digit characters in the input are stripped first, so already
/// formatted input is re-formatted cleanly.
///
/// # Example
///
/// ```
/// use paysource::format::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("4242-4242-4242-4242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("42424"), "4242 4");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(*c);
    }

    result
}

/// Splits a card number into its display groups of 4 digits.
///
/// # Example
///
/// ```
/// use paysource::format::split_into_groups;
///
/// assert_eq!(
///     split_into_groups("4242424242424242"),
///     vec!["4242", "4242", "4242", "4242"]
/// );
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Strips all formatting from a card number, leaving only digits.
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
