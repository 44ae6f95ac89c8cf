//! Version string tokenizer
//!
//! Splits a version string into alternating runs of ASCII digits and
//! non-digits. Separators such as `.` are ordinary text tokens, so
//! "8.0.122A" becomes `[8, ".", 0, ".", 122, "A"]`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[^0-9]+").expect("token pattern is valid"));

/// A comparable atom of a version string
///
/// `Number` keeps the digits exactly as written so that joining the tokens
/// reproduces the input. Numbers compare by value: leading zeros are ignored
/// and arbitrarily long runs never overflow.
#[derive(Debug, Clone, Eq)]
pub enum Token {
    Number(String),
    Text(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Number(digits) => digits,
            Token::Text(text) => text,
        }
    }
}

/// Compare two digit runs by numeric value
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => compare_digits(a, b),
            (Token::Text(a), Token::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            // Numbers sort before text at the same position
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a version string into digit and non-digit runs.
///
/// Never fails: an empty string yields no tokens.
pub fn tokenize(version: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(version)
        .map(|m| {
            let run = m.as_str().to_string();
            if m.as_str().as_bytes()[0].is_ascii_digit() {
                Token::Number(run)
            } else {
                Token::Text(run)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn num(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn tokenize_splits_letters_from_digits_inside_a_segment() {
        assert_eq!(
            tokenize("8.0.122A"),
            vec![num("8"), text("."), num("0"), text("."), num("122"), text("A")]
        );
    }

    #[rstest]
    #[case("", vec![])]
    #[case("12345", vec![num("12345")])]
    #[case("abc", vec![text("abc")])]
    #[case("v1", vec![text("v"), num("1")])]
    #[case("1-rc2", vec![num("1"), text("-rc"), num("2")])]
    fn tokenize_returns_expected(#[case] version: &str, #[case] expected: Vec<Token>) {
        assert_eq!(tokenize(version), expected);
    }

    #[rstest]
    #[case("8.0.122A")]
    #[case("007.01.0")]
    #[case("release-2024.10.1b")]
    #[case("ünïcode.1")]
    #[case("99999999999999999999999.1")]
    fn tokenize_round_trips_to_the_input(#[case] version: &str) {
        let joined: String = tokenize(version).iter().map(Token::as_str).collect();
        assert_eq!(joined, version);
    }

    #[rstest]
    #[case(num("9"), num("10"), Ordering::Less)]
    #[case(num("007"), num("7"), Ordering::Equal)]
    #[case(num("0"), num("000"), Ordering::Equal)]
    #[case(num("99999999999999999999999"), num("1"), Ordering::Greater)]
    #[case(text("A"), text("a"), Ordering::Less)]
    #[case(text("B"), text("A"), Ordering::Greater)]
    #[case(num("999"), text("A"), Ordering::Less)]
    #[case(text("."), num("0"), Ordering::Greater)]
    fn token_cmp_returns_expected(
        #[case] a: Token,
        #[case] b: Token,
        #[case] expected: Ordering,
    ) {
        assert_eq!(a.cmp(&b), expected);
    }
}
