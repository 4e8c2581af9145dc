/// A monetary quantity. Currency-agnostic, never negative.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
pub struct Amount(pub f64);

impl Amount {
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.parse::<f64>()?;
        if !x.is_finite() {
            return Err(ParseAmountError::NotFinite);
        }
        if x < 0.0 {
            return Err(ParseAmountError::Negative);
        }
        Ok(Self(x))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseAmountError {
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
    #[error("amount must be a finite number")]
    NotFinite,
    #[error("amount must not be negative")]
    Negative,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Amount(0.0), "0.00")]
    #[case(Amount(0.1), "0.10")]
    #[case(Amount(12.345), "12.35")]
    #[case(Amount(1200.0), "1200.00")]
    fn test_to_string(#[case] amount: Amount, #[case] want: &str) {
        assert_eq!(amount.to_string(), want)
    }

    #[rstest]
    #[case("0", Amount(0.0))]
    #[case("12.5", Amount(12.5))]
    #[case("1200", Amount(1200.0))]
    #[case("+3.25", Amount(3.25))]
    fn test_from_str(#[case] s: &str, #[case] want: Amount) {
        assert_eq!(s.parse::<Amount>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("-0.01")]
    #[case("inf")]
    #[case("NaN")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Amount>().is_err())
    }
}
