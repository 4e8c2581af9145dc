use std::collections::HashMap;

use crate::base::Amount;
use crate::base::Expense;
use crate::base::Style;

/// Sentinel label for expenses recorded without a category. Folding happens
/// at render time only; the store keeps whatever was given.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Maps an absent or empty category to the sentinel label.
pub fn display_category(category: Option<&str>) -> &str {
    match category {
        Some(c) if !c.is_empty() => c,
        _ => UNCATEGORIZED,
    }
}

/// Per-category totals alongside the grand total. First-seen order is
/// remembered so descending sorts break ties deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    order: Vec<String>,
    totals: HashMap<String, Amount>,
    sum: Amount,
}

impl Breakdown {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut breakdown = Self::default();
        for e in expenses {
            breakdown.add(display_category(e.category()), e.amount());
        }
        breakdown
    }

    pub fn add(&mut self, category: &str, amount: Amount) {
        if !self.totals.contains_key(category) {
            self.order.push(category.to_string());
        }
        *self.totals.entry(category.to_string()).or_default() += amount;
        self.sum += amount;
    }

    pub fn sum(&self) -> Amount {
        self.sum
    }

    pub fn get(&self, category: &str) -> Amount {
        self.totals.get(category).copied().unwrap_or_default()
    }

    /// Share of the grand total, in percent. Zero whenever the grand total
    /// is zero.
    pub fn percentage(&self, category: &str) -> f64 {
        if !self.sum.is_positive() {
            return 0.0;
        }
        self.get(category).0 / self.sum.0 * 100.0
    }

    /// Category names alphabetically, case-insensitive, with
    /// [`UNCATEGORIZED`] always last.
    pub fn display_order(&self) -> Vec<&str> {
        let mut cats = self.names();
        cats.sort_by_key(|c| (*c == UNCATEGORIZED, c.to_lowercase()));
        cats
    }

    /// Category names by descending total. The sort is stable, so ties keep
    /// first-seen order.
    pub fn chart_order(&self) -> Vec<&str> {
        let mut cats = self.names();
        cats.sort_by(|a, b| {
            self.get(b)
                .partial_cmp(&self.get(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        cats
    }

    /// Palette color for a category. Indices are assigned in plain
    /// alphabetical order, independent of any view's ordering, so a
    /// category's color is consistent across rows, summaries, and charts.
    pub fn style_of(&self, category: &str) -> Style {
        let mut cats = self.names();
        cats.sort_unstable();
        match cats.iter().position(|c| *c == category) {
            Some(i) => Style::Category(i),
            None => Style::Plain,
        }
    }

    fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::fixture;
    use rstest::rstest;

    use super::*;
    use crate::base::Day;

    fn expense(title: &str, amount: f64, category: Option<&str>) -> Expense {
        Expense::new(
            0,
            title.to_string(),
            Amount(amount),
            Day::try_from(1).unwrap(),
            category.map(str::to_string),
        )
    }

    /// The worked example: [(A,10,Food),(B,30,Food),(C,60,"")].
    #[fixture]
    fn worked_example() -> Breakdown {
        Breakdown::from_expenses(&[
            expense("A", 10.0, Some("Food")),
            expense("B", 30.0, Some("Food")),
            expense("C", 60.0, Some("")),
        ])
    }

    #[rstest]
    fn test_example_totals(worked_example: Breakdown) {
        assert_eq!(worked_example.sum(), Amount(100.0));
        assert_eq!(worked_example.get("Food"), Amount(40.0));
        assert_eq!(worked_example.get(UNCATEGORIZED), Amount(60.0));
        assert_eq!(worked_example.display_order().len(), 2);
    }

    #[rstest]
    fn test_example_chart_order(worked_example: Breakdown) {
        assert_eq!(worked_example.chart_order(), vec![UNCATEGORIZED, "Food"]);
        assert_eq!(worked_example.percentage(UNCATEGORIZED), 60.0);
        assert_eq!(worked_example.percentage("Food"), 40.0);
    }

    #[rstest]
    #[case(None, UNCATEGORIZED)]
    #[case(Some(""), UNCATEGORIZED)]
    #[case(Some("Food"), "Food")]
    fn test_display_category(#[case] category: Option<&str>, #[case] want: &str) {
        assert_eq!(display_category(category), want)
    }

    #[test]
    fn test_category_totals_sum_to_grand_total() {
        let expenses = [
            expense("a", 12.34, Some("Food")),
            expense("b", 0.0, Some("food")),
            expense("c", 99.99, None),
            expense("d", 7.5, Some("Transport")),
            expense("e", 0.01, Some("")),
        ];
        let breakdown = Breakdown::from_expenses(&expenses);
        let total: Amount = expenses.iter().map(|e| e.amount()).sum();
        let by_category: f64 = breakdown
            .display_order()
            .iter()
            .map(|c| breakdown.get(c).0)
            .sum();
        assert!((by_category - total.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_order_is_case_insensitive_with_uncategorized_last() {
        let mut breakdown = Breakdown::default();
        breakdown.add("banana", Amount(1.0));
        breakdown.add(UNCATEGORIZED, Amount(1000.0));
        breakdown.add("Apple", Amount(1.0));
        breakdown.add("cherry", Amount(1.0));
        assert_eq!(
            breakdown.display_order(),
            vec!["Apple", "banana", "cherry", UNCATEGORIZED]
        );
    }

    #[test]
    fn test_chart_order_is_non_increasing_with_stable_ties() {
        let mut breakdown = Breakdown::default();
        breakdown.add("small", Amount(1.0));
        breakdown.add("tied1", Amount(5.0));
        breakdown.add("tied2", Amount(5.0));
        breakdown.add("big", Amount(9.0));
        assert_eq!(
            breakdown.chart_order(),
            vec!["big", "tied1", "tied2", "small"]
        );
    }

    #[test]
    fn test_percentage_is_zero_when_grand_total_is_zero() {
        let mut breakdown = Breakdown::default();
        breakdown.add("a", Amount(0.0));
        assert_eq!(breakdown.percentage("a"), 0.0);
        assert_eq!(Breakdown::default().percentage("missing"), 0.0);
    }

    #[test]
    fn test_style_assignment_is_alphabetical_and_view_independent() {
        let mut breakdown = Breakdown::default();
        breakdown.add("zzz", Amount(100.0));
        breakdown.add("aaa", Amount(1.0));
        assert_eq!(breakdown.style_of("aaa"), Style::Category(0));
        assert_eq!(breakdown.style_of("zzz"), Style::Category(1));
        assert_eq!(breakdown.style_of("missing"), Style::Plain);
    }
}
