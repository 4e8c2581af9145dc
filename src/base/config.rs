/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,

    /// Total width of the category segment line printed by `ls`.
    pub line_width: usize,

    /// Width a 100% bar would occupy in the `chart` view.
    pub bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_colored_output: true,
            use_unicode_symbols: true,
            line_width: 80,
            bar_width: 40,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("{}", Config::default())]
    #[case(
        r#"{"useColoredOutput": false}"#,
        Config {
            use_colored_output: false,
            ..Config::default()
        },
    )]
    #[case(
        r#"{"useColoredOutput": false, "useUnicodeSymbols": false, "lineWidth": 40, "barWidth": 20}"#,
        Config {
            use_colored_output: false,
            use_unicode_symbols: false,
            line_width: 40,
            bar_width: 20,
        },
    )]
    fn test_from_str(#[case] s: &str, #[case] want: Config) {
        assert_eq!(s.parse::<Config>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case(r#"{"unknownField": 1}"#)]
    #[case(r#"{"lineWidth": "80"}"#)]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Config>().is_err())
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            use_colored_output: false,
            use_unicode_symbols: true,
            line_width: 64,
            bar_width: 32,
        };
        assert_eq!(config.to_string().parse::<Config>().unwrap(), config)
    }
}
