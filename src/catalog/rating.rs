use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Star rating shown on a detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

/// The rating class carried a word outside One..Five
#[derive(Debug, Error)]
#[error("Unrecognized rating word '{0}'")]
pub struct UnknownRating(pub String);

impl Rating {
    /// Returns the number of stars, 1 to 5
    pub fn stars(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl FromStr for Rating {
    type Err = UnknownRating;

    /// Maps the word used in the `star-rating` class; matching is case-sensitive
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "One" => Ok(Self::One),
            "Two" => Ok(Self::Two),
            "Three" => Ok(Self::Three),
            "Four" => Ok(Self::Four),
            "Five" => Ok(Self::Five),
            other => Err(UnknownRating(other.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stars())
    }
}
