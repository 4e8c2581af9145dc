/// A day of the month. Values are guaranteed to be between 1 and 28; the cap
/// below 29 sidesteps variable month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(28);

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Day {
    type Error = ParseDayError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < Self::MIN.0 as i64 || value > Self::MAX.0 as i64 {
            return Err(ParseDayError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

impl std::fmt::Display for Day {
    /// Zero-padded to two digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::str::FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()?.try_into()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseDayError {
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),
    #[error("day must be between 1 and 28, got {0}")]
    OutOfRange(i64),
}
