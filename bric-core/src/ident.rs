//! Identifier repair.

/// Strips every character that is not an ASCII word character or `$`,
/// then guarantees the result starts with a letter, underscore, or `$`
/// by prefixing `_` when it does not. Empty input sanitizes to `_`.
///
/// # Example
///
/// ```
/// use bric_core::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("validName"), "validName");
/// assert_eq!(sanitize_identifier("123invalid"), "_123invalid");
/// assert_eq!(sanitize_identifier("12@asd*"), "_12asd");
/// ```
pub fn sanitize_identifier(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    match cleaned.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => cleaned,
        _ => format!("_{cleaned}"),
    }
}
