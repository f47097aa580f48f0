//! Character pools for string and char generation.

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "#@$%^&*?!";
pub const BRACKETS: &str = "(){}[]<>";
pub const HEX_DIGITS: &str = "0123456789abcdef";

/// A named character pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    Lowercase,
    Uppercase,
    Digits,
    Special,
    Brackets,
    Hex,
    LowercaseDigits,
    UppercaseDigits,
    LowercaseDigitsSpecial,
    UppercaseDigitsSpecial,
    Letters,
    #[default]
    Alphanumeric,
    AlphanumericSpecial,
}

impl Alphabet {
    /// The characters of this pool.
    pub fn chars(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Special => SPECIAL,
            Self::Brackets => BRACKETS,
            Self::Hex => HEX_DIGITS,
            Self::LowercaseDigits => concat!("abcdefghijklmnopqrstuvwxyz", "0123456789"),
            Self::UppercaseDigits => concat!("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "0123456789"),
            Self::LowercaseDigitsSpecial => {
                concat!("abcdefghijklmnopqrstuvwxyz", "0123456789", "#@$%^&*?!")
            }
            Self::UppercaseDigitsSpecial => {
                concat!("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "0123456789", "#@$%^&*?!")
            }
            Self::Letters => concat!("abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Self::Alphanumeric => concat!(
                "abcdefghijklmnopqrstuvwxyz",
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
                "0123456789"
            ),
            Self::AlphanumericSpecial => concat!(
                "abcdefghijklmnopqrstuvwxyz",
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
                "0123456789",
                "#@$%^&*?!"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_pools() {
        assert_eq!(
            Alphabet::LowercaseDigitsSpecial.chars(),
            "abcdefghijklmnopqrstuvwxyz0123456789#@$%^&*?!"
        );
        assert_eq!(
            Alphabet::default().chars(),
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
        );
        assert_eq!(Alphabet::UppercaseDigits.chars(), format!("{UPPERCASE}{DIGITS}"));
    }
}
