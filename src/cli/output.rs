use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(&'static str),
    String(String),
    Table(base::table::Config),
    Chart(base::chart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::String(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(config) => {
                if config.expenses.is_empty() {
                    writeln!(f, "No expenses found.")
                } else {
                    write!(f, "{}", config.to_table())
                }
            }
            Output::Chart(config) => {
                if config.is_empty() {
                    writeln!(f, "No categorized expenses found to chart.")
                } else {
                    write!(f, "{}", config.to_chart())
                }
            }
        }
    }
}
