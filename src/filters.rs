//! Observer-free string transforms.
//!
//! These are the filters behind [`Sanitizer`](crate::Sanitizer) without any
//! logging around them.

use crate::CharSet;

/// Replaces spaces with `_` and keeps only `[A-Za-z0-9_]` plus `extras`.
///
/// `extras` is matched case-insensitively, so an extra `é` also keeps `É`.
///
/// # Examples
///
/// ```
/// use destroy_invalids::{filters, CharSet};
///
/// let extras = CharSet::parse(".-").unwrap();
/// assert_eq!(filters::alphanumeric("my file-v1.txt!", &extras), "my_file-v1.txt");
/// assert_eq!(filters::alphanumeric("@#!", &CharSet::empty()), "");
/// ```
pub fn alphanumeric(input: &str, extras: &CharSet) -> String {
    input
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|&c| is_word_char(c) || extras.contains_ignore_case(c))
        .collect()
}

/// Keeps only ASCII digits and `.`.
///
/// # Examples
///
/// ```
/// use destroy_invalids::filters;
///
/// assert_eq!(filters::numeric_chars("12a.3b"), "12.3");
/// assert_eq!(filters::numeric_chars("1,600 m"), "1600");
/// ```
pub fn numeric_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Keeps only characters in `allowed`, matched case-sensitively.
///
/// # Examples
///
/// ```
/// use destroy_invalids::{filters, CharSet};
///
/// let letters = CharSet::parse("a-zA-Z").unwrap();
/// assert_eq!(filters::retain_allowed("Hello, World!", &letters), "HelloWorld");
/// ```
pub fn retain_allowed(input: &str, allowed: &CharSet) -> String {
    input.chars().filter(|&c| allowed.contains(c)).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
