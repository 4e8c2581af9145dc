use crate::base::Amount;
use crate::base::Day;

/// A single recorded expense. Identifiers are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: i64,
    title: String,
    amount: Amount,
    day: Day,
    category: Option<String>,
}

impl Expense {
    pub fn new(id: i64, title: String, amount: Amount, day: Day, category: Option<String>) -> Self {
        Self {
            id,
            title,
            amount,
            day,
            category,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
