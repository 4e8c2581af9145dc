use crate::base::Breakdown;
use crate::base::Charset;
use crate::base::Expense;
use crate::base::Status;
use crate::base::breakdown;
use crate::base::date;
use crate::base::segments;

const SEPARATOR: &str = "  ";

/// The `ls` view: one row per expense, a proportional category segment line,
/// and the per-category totals block.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: Charset,
    pub today: time::Date,
    pub line_width: usize,
    pub expenses: Vec<Expense>,
    pub breakdown: Breakdown,
}

pub struct Table<'c> {
    config: &'c Config,
    title_width: usize,
    amount_width: usize,
    date_width: usize,
    category_width: usize,
}

impl Config {
    pub fn to_table(&self) -> Table<'_> {
        let title_width = self
            .expenses
            .iter()
            .map(|e| e.title().chars().count())
            .chain(["Title".len()])
            .max()
            .unwrap_or_default();
        let amount_width = self
            .expenses
            .iter()
            .map(|e| e.amount().to_string().len())
            .chain(["Amount".len()])
            .max()
            .unwrap_or_default();
        let date_width = self
            .expenses
            .iter()
            .map(|e| self.date_cell(e).len())
            .chain(["Date".len()])
            .max()
            .unwrap_or_default();
        let category_width = self
            .expenses
            .iter()
            .map(|e| breakdown::display_category(e.category()).chars().count())
            .chain(["Category".len()])
            .max()
            .unwrap_or_default();

        Table {
            config: self,
            title_width,
            amount_width,
            date_width,
            category_width,
        }
    }

    fn date_cell(&self, expense: &Expense) -> String {
        format!("{} {}", expense.day(), date::month_name(self.today))
    }
}

impl Table<'_> {
    fn rule(&self, w: &mut impl std::fmt::Write, width: usize) -> std::fmt::Result {
        for _ in 0..width {
            w.write_char(self.config.charset.dash)?;
        }
        Ok(())
    }

    /// Writes `text` left-padded to `width` with any styling applied to the
    /// text only, keeping column math independent of escape sequences.
    fn cell(
        &self,
        w: &mut impl std::fmt::Write,
        text: &str,
        style: crate::base::Style,
        width: usize,
    ) -> std::fmt::Result {
        w.write_str(&self.config.charset.paint(style, text))?;
        for _ in text.chars().count()..width {
            w.write_char(' ')?;
        }
        Ok(())
    }

    fn draw_header(&self, w: &mut impl std::fmt::Write) -> std::fmt::Result {
        writeln!(
            w,
            "{:<tw$}{sep}{:>aw$}{sep}{:<dw$}{sep}{:<cw$}{sep}Status",
            "Title",
            "Amount",
            "Date",
            "Category",
            tw = self.title_width,
            aw = self.amount_width,
            dw = self.date_width,
            cw = self.category_width,
            sep = SEPARATOR,
        )?;
        for (i, width) in [
            self.title_width,
            self.amount_width,
            self.date_width,
            self.category_width,
            "Status".len(),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                w.write_str(SEPARATOR)?;
            }
            self.rule(w, width)?;
        }
        writeln!(w)
    }

    fn draw_row(&self, w: &mut impl std::fmt::Write, expense: &Expense) -> std::fmt::Result {
        let charset = &self.config.charset;
        let category = breakdown::display_category(expense.category());
        let status = Status::classify(expense.day(), self.config.today.day());

        write!(
            w,
            "{:<tw$}{sep}{:>aw$}{sep}{:<dw$}{sep}",
            expense.title(),
            expense.amount().to_string(),
            self.config.date_cell(expense),
            tw = self.title_width,
            aw = self.amount_width,
            dw = self.date_width,
            sep = SEPARATOR,
        )?;
        self.cell(
            w,
            category,
            self.config.breakdown.style_of(category),
            self.category_width,
        )?;
        w.write_str(SEPARATOR)?;
        writeln!(w, "{}", charset.paint(status.style(), charset.bullet))
    }

    /// One full-width line of bar glyphs, split proportionally across
    /// categories in chart order. Always exactly `line_width` columns.
    fn draw_segment_line(&self, w: &mut impl std::fmt::Write) -> std::fmt::Result {
        let breakdown = &self.config.breakdown;
        let categories = breakdown.chart_order();
        let weights = categories
            .iter()
            .map(|c| breakdown.get(c).0)
            .collect::<Vec<_>>();
        let lengths = segments::allocate(&weights, breakdown.sum().0, self.config.line_width);
        for (category, length) in categories.iter().zip(lengths) {
            let segment = self.config.charset.bar.repeat(length);
            w.write_str(&self.config.charset.paint(breakdown.style_of(category), &segment))?;
        }
        writeln!(w)
    }

    fn draw_totals(&self, w: &mut impl std::fmt::Write) -> std::fmt::Result {
        let breakdown = &self.config.breakdown;
        writeln!(w)?;
        writeln!(w, "Total Amount: {}", breakdown.sum())?;
        writeln!(w, "Category Totals:")?;
        for category in breakdown.display_order() {
            writeln!(
                w,
                "  - {}: {} ({:.1}%)",
                self.config
                    .charset
                    .paint(breakdown.style_of(category), category),
                breakdown.get(category),
                breakdown.percentage(category),
            )?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.draw_header(f)?;
        for expense in &self.config.expenses {
            self.draw_row(f, expense)?;
        }
        self.draw_segment_line(f)?;
        self.draw_totals(f)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::base::Amount;
    use crate::base::Day;

    fn expense(title: &str, amount: f64, day: i64, category: Option<&str>) -> Expense {
        Expense::new(
            0,
            title.to_string(),
            Amount(amount),
            Day::try_from(day).unwrap(),
            category.map(str::to_string),
        )
    }

    fn config(expenses: Vec<Expense>, line_width: usize) -> Config {
        let breakdown = Breakdown::from_expenses(&expenses);
        Config {
            charset: Charset::default(),
            today: date::today(),
            line_width,
            expenses,
            breakdown,
        }
    }

    #[test]
    fn test_render() {
        let config = config(
            vec![
                expense("Rent", 1200.0, 1, Some("Housing")),
                expense("Groceries", 150.5, 15, Some("Food")),
                expense("Internet", 49.99, 17, None),
                expense("Gym", 25.0, 20, Some("Health")),
                expense("Savings", 100.0, 28, Some("Housing")),
            ],
            20,
        );
        let want = indoc!(
            "
            Title       Amount  Date      Category       Status
            ---------  -------  --------  -------------  ------
            Rent       1200.00  01 March  Housing        *
            Groceries   150.50  15 March  Food           *
            Internet     49.99  17 March  Uncategorized  *
            Gym          25.00  20 March  Health         *
            Savings     100.00  28 March  Housing        *
            ####################

            Total Amount: 1525.49
            Category Totals:
              - Food: 150.50 (9.9%)
              - Health: 25.00 (1.6%)
              - Housing: 1300.00 (85.2%)
              - Uncategorized: 49.99 (3.3%)
            "
        );
        assert_eq!(config.to_table().to_string(), want)
    }

    #[test]
    fn test_segment_line_width_is_exact() {
        for line_width in 1..=100 {
            let config = config(
                vec![
                    expense("a", 33.0, 1, Some("x")),
                    expense("b", 33.0, 2, Some("y")),
                    expense("c", 34.0, 3, None),
                ],
                line_width,
            );
            let rendered = config.to_table().to_string();
            let line = rendered
                .lines()
                .find(|l| l.starts_with('#'))
                .expect("segment line should be rendered");
            assert_eq!(line.chars().count(), line_width);
        }
    }

    #[test]
    fn test_unicode_charset_swaps_glyphs() {
        let mut config = config(vec![expense("a", 10.0, 1, None)], 4);
        config.charset = Charset::default().with_unicode();
        let rendered = config.to_table().to_string();
        assert!(rendered.contains("\u{25a0}\u{25a0}\u{25a0}\u{25a0}"));
        assert!(rendered.contains("\u{25cf}"));
        assert!(!rendered.contains('#'));
    }
}
