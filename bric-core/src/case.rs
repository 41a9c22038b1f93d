//! Word-boundary detection and case conversion.
//!
//! All converters share one segmentation toolkit: input is split on runs
//! of whitespace, `-`, and `_`, and each converter opts into additional
//! boundaries at letter-case and digit transitions. Empty and
//! whitespace-only input converts to the empty string.

/// Which transitions, beyond separator characters, break a token into
/// words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundaries {
    /// Split only on whitespace, `-`, and `_`.
    Separators,
    /// Also split inside tokens at letter-case transitions
    /// (`fooBar` -> `foo|Bar`, `HTTPServer` -> `HTTP|Server`).
    CaseTransitions,
    /// Case transitions plus digit-run-to-letter transitions
    /// (`no42where` -> `no42|where`).
    CaseAndDigits,
}

fn split_words(input: &str, boundaries: Boundaries) -> Vec<String> {
    let mut words = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == '-' || c == '_') {
        if token.is_empty() {
            continue;
        }
        match boundaries {
            Boundaries::Separators => words.push(token.to_string()),
            Boundaries::CaseTransitions => split_token(token, false, &mut words),
            Boundaries::CaseAndDigits => split_token(token, true, &mut words),
        }
    }
    words
}

fn split_token(token: &str, digit_to_letter: bool, words: &mut Vec<String>) {
    let chars: Vec<char> = token.chars().collect();
    let mut start = 0;
    for i in 1..chars.len() {
        let prev = chars[i - 1];
        let cur = chars[i];
        let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());

        let case_boundary = cur.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower));
        let digit_boundary = digit_to_letter && prev.is_ascii_digit() && cur.is_alphabetic();

        if case_boundary || digit_boundary {
            words.push(chars[start..i].iter().collect());
            start = i;
        }
    }
    words.push(chars[start..].iter().collect());
}

/// True when the word contains a lowercase character immediately
/// followed by an uppercase one.
fn has_camel_interior(word: &str) -> bool {
    let mut prev_is_lower = false;
    for c in word.chars() {
        if c.is_uppercase() && prev_is_lower {
            return true;
        }
        prev_is_lower = c.is_lowercase();
    }
    false
}

/// Uppercase the first character of `word`; lowercase the tail unless
/// `keep_tail` asks for it verbatim.
fn capitalize_word(word: &str, keep_tail: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            if keep_tail {
                out.push_str(chars.as_str());
            } else {
                out.extend(chars.flat_map(char::to_lowercase));
            }
            out
        }
    }
}

/// Uppercases the first character of a string and lowercases the rest.
///
/// The whole string is treated as one unit; interior whitespace is
/// preserved as-is.
///
/// # Example
///
/// ```
/// use bric_core::capitalize;
///
/// assert_eq!(capitalize("hello World"), "Hello world");
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
    }
}

/// Converts a string to camelCase.
///
/// Words are split on whitespace, `-`, and `_` only. The first word is
/// lowercased entirely; each later word gets an uppercased first
/// character. A later word that already contains an interior
/// lowercase-to-uppercase transition keeps its tail as written, so
/// `"already-camelCase"` becomes `"alreadyCamelCase"`.
///
/// # Example
///
/// ```
/// use bric_core::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("CAPITALIZED_WORDS"), "capitalizedWords");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let words = split_words(input, Boundaries::Separators);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut out = first.to_lowercase();
    for word in rest {
        out.push_str(&capitalize_word(word, has_camel_interior(word)));
    }
    out
}

/// Converts a string to kebab-case.
///
/// # Example
///
/// ```
/// use bric_core::to_kebab_case;
///
/// assert_eq!(to_kebab_case("someTextHere"), "some-text-here");
/// assert_eq!(to_kebab_case("CAPITALIZED_WORDS"), "capitalized-words");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    join_lowercase(input, '-')
}

/// Converts a string to snake_case.
///
/// # Example
///
/// ```
/// use bric_core::to_snake_case;
///
/// assert_eq!(to_snake_case("someTextHere"), "some_text_here");
/// assert_eq!(to_snake_case("Mixed-Case-And_Dashes"), "mixed_case_and_dashes");
/// ```
pub fn to_snake_case(input: &str) -> String {
    join_lowercase(input, '_')
}

fn join_lowercase(input: &str, separator: char) -> String {
    let words = split_words(input, Boundaries::CaseTransitions);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

/// Converts a string to PascalCase.
///
/// Splits at separators, letter-case transitions, and digit-run-to-letter
/// transitions, then capitalizes every word.
///
/// # Example
///
/// ```
/// use bric_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("some_text_here"), "SomeTextHere");
/// assert_eq!(to_pascal_case("numbers123inside"), "Numbers123Inside");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    split_words(input, Boundaries::CaseAndDigits)
        .iter()
        .map(|word| capitalize_word(word, false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("hello World"), "Hello world");
        assert_eq!(capitalize("123"), "123");
        assert_eq!(capitalize("中国"), "中国");
        assert_eq!(capitalize("āÁĂÀ"), "Āáăà");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "");
        assert_eq!(capitalize("already Capitalized"), "Already capitalized");
        assert_eq!(capitalize("multiple   spaces"), "Multiple   spaces");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("Hello World"), "helloWorld");
        assert_eq!(to_camel_case("123"), "123");
        assert_eq!(to_camel_case("中国"), "中国");
        assert_eq!(to_camel_case("āÁĂÀ"), "āáăà");
        assert_eq!(to_camel_case("a"), "a");
        assert_eq!(to_camel_case("CAPITALIZED_WORDS"), "capitalizedWords");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("multiple   spaces"), "multipleSpaces");
        assert_eq!(to_camel_case("mixed-Case_string"), "mixedCaseString");
        assert_eq!(to_camel_case("already-camelCase"), "alreadyCamelCase");
        assert_eq!(to_camel_case("  trimmed  string  "), "trimmedString");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("someTextHere"), "some-text-here");
        assert_eq!(to_kebab_case("anotherExample"), "another-example");
        assert_eq!(to_kebab_case("kebabCase"), "kebab-case");
        assert_eq!(to_kebab_case("CAPITALIZED_WORDS"), "capitalized-words");
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("already-kebab-case"), "already-kebab-case");
        assert_eq!(to_kebab_case("Mixed_Case_And-Dashes"), "mixed-case-and-dashes");
        assert_eq!(to_kebab_case("  trimmed  string  "), "trimmed-string");
        assert_eq!(to_kebab_case("multipleCAPSInside"), "multiple-caps-inside");
        assert_eq!(to_kebab_case("numbers123inside"), "numbers123inside");
        assert_eq!(to_kebab_case("WITH_UNDERSCORE"), "with-underscore");
        assert_eq!(to_kebab_case("HTTPServer"), "http-server");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("some_text_here"), "SomeTextHere");
        assert_eq!(to_pascal_case("another-Example"), "AnotherExample");
        assert_eq!(to_pascal_case("kebab_case"), "KebabCase");
        assert_eq!(to_pascal_case("CAPITALIZED_WORDS"), "CapitalizedWords");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("AlreadyPascalCase"), "AlreadyPascalCase");
        assert_eq!(to_pascal_case("mixed_Case_and-dashes"), "MixedCaseAndDashes");
        assert_eq!(to_pascal_case("  trimmed  string  "), "TrimmedString");
        assert_eq!(to_pascal_case("multipleCAPSInside"), "MultipleCapsInside");
        assert_eq!(to_pascal_case("numbers123inside"), "Numbers123Inside");
        assert_eq!(to_pascal_case("special_CAPS_Case"), "SpecialCapsCase");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("someTextHere"), "some_text_here");
        assert_eq!(to_snake_case("anotherExample"), "another_example");
        assert_eq!(to_snake_case("kebabCase"), "kebab_case");
        assert_eq!(to_snake_case("CAPITALIZED_WORDS"), "capitalized_words");
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_snake_case("already_snake_case"), "already_snake_case");
        assert_eq!(to_snake_case("Mixed-Case-And_Dashes"), "mixed_case_and_dashes");
        assert_eq!(to_snake_case("  trimmed  string  "), "trimmed_string");
        assert_eq!(to_snake_case("multipleCAPSInside"), "multiple_caps_inside");
        assert_eq!(to_snake_case("numbers123inside"), "numbers123inside");
        assert_eq!(to_snake_case("with-dashes"), "with_dashes");
    }

    #[test]
    fn test_word_splitting_is_stable_across_converters() {
        // The kebab rendering of a camelized string recovers the same
        // word sequence as separator-splitting the input directly.
        for input in ["hello world", "foo-bar_baz", "CAPITALIZED_WORDS", "one two three"] {
            let via_camel = to_kebab_case(&to_camel_case(input));
            let direct: Vec<String> = input
                .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
                .filter(|t| !t.is_empty())
                .map(|t| t.to_lowercase())
                .collect();
            assert_eq!(via_camel, direct.join("-"), "input: {input:?}");
        }
    }
}
