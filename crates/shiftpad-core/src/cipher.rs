//! The Caesar-cipher transform.
//!
//! A single-character substitution over the 26-letter Latin alphabet,
//! applied independently to the uppercase and lowercase ranges. Everything
//! outside `A-Z`/`a-z` passes through untouched. The transform is a pure,
//! total function: any integer shift is accepted and normalized, and no
//! input can make it fail.

use serde::{Deserialize, Serialize};

/// Letters per case-class.
const ALPHABET_LEN: i64 = 26;

/// Which way the shift is applied.
///
/// Decrypt is encrypt with the additive inverse shift, so
/// `transform(transform(t, k, Encrypt), k, Decrypt) == t` for any `t`
/// and any integer `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            other => Err(format!("Invalid direction: {}", other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw shift key into the offset actually applied, in [0, 25].
///
/// `rem_euclid` keeps negative and oversized shifts well-defined; a
/// truncating `%` would produce negative intermediates for negative input.
pub fn effective_shift(shift: i64, direction: Direction) -> u8 {
    let s = shift.rem_euclid(ALPHABET_LEN);
    let s = match direction {
        Direction::Encrypt => s,
        Direction::Decrypt => (ALPHABET_LEN - s).rem_euclid(ALPHABET_LEN),
    };
    s as u8
}

/// Apply the Caesar transform to `text` with the given shift key.
///
/// Uppercase letters rotate within `A..=Z`, lowercase within `a..=z`, and
/// every other character (digits, punctuation, whitespace, non-ASCII) is
/// emitted unchanged at its original position. The output has the same
/// character count as the input.
pub fn transform(text: &str, shift: i64, direction: Direction) -> String {
    let s = effective_shift(shift, direction);
    text.chars().map(|c| shift_char(c, s)).collect()
}

fn shift_char(c: char, s: u8) -> char {
    match c {
        'A'..='Z' => rotate(c, b'A', s),
        'a'..='z' => rotate(c, b'a', s),
        _ => c,
    }
}

fn rotate(c: char, base: u8, s: u8) -> char {
    let offset = (c as u8 - base + s) % ALPHABET_LEN as u8;
    (base + offset) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt(text: &str, shift: i64) -> String {
        transform(text, shift, Direction::Encrypt)
    }

    fn decrypt(text: &str, shift: i64) -> String {
        transform(text, shift, Direction::Decrypt)
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
        assert_eq!(encrypt("Attack at Dawn!", 5), "Fyyfhp fy Ifbs!");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encrypt("", 10), "");
        assert_eq!(decrypt("", 10), "");
    }

    #[test]
    fn test_identity_at_zero_mod_26() {
        let text = "Mixed CASE text, 123!";
        assert_eq!(encrypt(text, 0), text);
        assert_eq!(encrypt(text, 26), text);
        assert_eq!(encrypt(text, -26), text);
        assert_eq!(decrypt(text, 0), text);
        assert_eq!(decrypt(text, 52), text);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(encrypt("Z", 1), "A");
        assert_eq!(encrypt("z", 1), "a");
        assert_eq!(decrypt("A", 1), "Z");
    }

    #[test]
    fn test_negative_and_large_shifts() {
        assert_eq!(encrypt("A", -1), "Z");
        assert_eq!(encrypt("A", 27), "B");
        assert_eq!(encrypt("A", -27), "Z");
        assert_eq!(encrypt("A", 26 * 1000 + 3), "D");
        assert_eq!(decrypt("B", 27), "A");
    }

    #[test]
    fn test_case_preserved() {
        let out = encrypt("AbCdXyZ", 7);
        for (src, dst) in "AbCdXyZ".chars().zip(out.chars()) {
            assert_eq!(src.is_ascii_uppercase(), dst.is_ascii_uppercase());
            assert_eq!(src.is_ascii_lowercase(), dst.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_non_letters_unchanged() {
        assert_eq!(encrypt("1234 !?,.", 13), "1234 !?,.");
        // Non-ASCII letters are outside the alphabet and must pass through.
        assert_eq!(encrypt("café über 日本 🦀", 5), "hfké ügjw 日本 🦀");
    }

    #[test]
    fn test_round_trip() {
        let samples = ["", "a", "Hello, World!", "ZzAa", "naïve — déjà vu 42"];
        for text in samples {
            for shift in [-100, -27, -1, 0, 1, 3, 13, 25, 26, 27, 1000] {
                let there = encrypt(text, shift);
                assert_eq!(decrypt(&there, shift), text, "shift {}", shift);
            }
        }
    }

    #[test]
    fn test_bijection_on_alphabet() {
        let upper: String = ('A'..='Z').collect();
        let shifted = encrypt(&upper, 11);
        let mut seen: Vec<char> = shifted.chars().collect();
        seen.sort_unstable();
        let sorted: String = seen.into_iter().collect();
        assert_eq!(sorted, upper);
    }

    #[test]
    fn test_effective_shift_range() {
        for shift in -1000..1000 {
            for direction in [Direction::Encrypt, Direction::Decrypt] {
                assert!(effective_shift(shift, direction) < 26);
            }
        }
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("encrypt".parse::<Direction>(), Ok(Direction::Encrypt));
        assert_eq!("decrypt".parse::<Direction>(), Ok(Direction::Decrypt));
        assert!("rot13".parse::<Direction>().is_err());
    }
}
