use crate::base::Breakdown;
use crate::base::Charset;

const SEPARATOR: &str = "  ";

/// The `chart` view: categories ranked by descending total, each with its
/// share of the grand total and a proportional bar.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: Charset,
    pub bar_width: usize,
    pub breakdown: Breakdown,
}

pub struct Chart<'c> {
    config: &'c Config,
    rows: Vec<&'c str>,
    category_width: usize,
    amount_width: usize,
}

impl Config {
    pub fn to_chart(&self) -> Chart<'_> {
        let rows = self
            .breakdown
            .chart_order()
            .into_iter()
            .filter(|c| self.breakdown.get(c).is_positive())
            .collect::<Vec<_>>();
        let category_width = rows
            .iter()
            .map(|c| c.chars().count())
            .chain(["Category".len()])
            .max()
            .unwrap_or_default();
        let amount_width = rows
            .iter()
            .map(|c| self.breakdown.get(c).to_string().len())
            .chain(["Amount".len()])
            .max()
            .unwrap_or_default();

        Chart {
            config: self,
            rows,
            category_width,
            amount_width,
        }
    }

    /// True when no category has a positive total to chart.
    pub fn is_empty(&self) -> bool {
        let breakdown = &self.breakdown;
        !breakdown
            .chart_order()
            .iter()
            .any(|c| breakdown.get(c).is_positive())
    }
}

impl Chart<'_> {
    const PERCENT_WIDTH: usize = "Percent".len();

    fn draw_header(&self, w: &mut impl std::fmt::Write) -> std::fmt::Result {
        writeln!(w, "Category Expense Chart:")?;
        writeln!(w, "Total: {}", self.config.breakdown.sum())?;
        writeln!(w)?;
        writeln!(
            w,
            "{:<cw$}{sep}{:>aw$}{sep}{:>pw$}{sep}Chart",
            "Category",
            "Amount",
            "Percent",
            cw = self.category_width,
            aw = self.amount_width,
            pw = Self::PERCENT_WIDTH,
            sep = SEPARATOR,
        )?;
        for (i, width) in [
            self.category_width,
            self.amount_width,
            Self::PERCENT_WIDTH,
            "Chart".len(),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                w.write_str(SEPARATOR)?;
            }
            for _ in 0..width {
                w.write_char(self.config.charset.dash)?;
            }
        }
        writeln!(w)
    }

    fn draw_row(&self, w: &mut impl std::fmt::Write, category: &str) -> std::fmt::Result {
        let breakdown = &self.config.breakdown;
        let charset = &self.config.charset;
        let style = breakdown.style_of(category);
        let percentage = breakdown.percentage(category);

        w.write_str(&charset.paint(style, category))?;
        for _ in category.chars().count()..self.category_width {
            w.write_char(' ')?;
        }
        write!(
            w,
            "{sep}{:>aw$}{sep}{:>pw$}{sep}",
            breakdown.get(category).to_string(),
            format!("{:.1}%", percentage),
            aw = self.amount_width,
            pw = Self::PERCENT_WIDTH,
            sep = SEPARATOR,
        )?;

        let bar_length = (percentage / 100.0 * self.config.bar_width as f64).round() as usize;
        let bar = charset.bar.repeat(bar_length);
        writeln!(w, "{}", charset.paint(style, &bar))
    }
}

impl std::fmt::Display for Chart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.draw_header(f)?;
        for category in &self.rows {
            self.draw_row(f, category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::base::Amount;
    use crate::base::breakdown::UNCATEGORIZED;

    fn config(entries: &[(&str, f64)], bar_width: usize) -> Config {
        let mut breakdown = Breakdown::default();
        for (category, amount) in entries {
            breakdown.add(category, Amount(*amount));
        }
        Config {
            charset: Charset::default(),
            bar_width,
            breakdown,
        }
    }

    #[test]
    fn test_render() {
        let config = config(&[("Food", 40.0), (UNCATEGORIZED, 60.0)], 10);
        let want = indoc!(
            "
            Category Expense Chart:
            Total: 100.00

            Category       Amount  Percent  Chart
            -------------  ------  -------  -----
            Uncategorized   60.00    60.0%  ######
            Food            40.00    40.0%  ####
            "
        );
        assert_eq!(config.to_chart().to_string(), want)
    }

    #[test]
    fn test_zero_total_categories_are_excluded() {
        let config = config(&[("Food", 25.0), ("Empty", 0.0)], 8);
        let rendered = config.to_chart().to_string();
        assert!(rendered.contains("Food"));
        assert!(!rendered.contains("Empty"));
    }

    #[test]
    fn test_is_empty() {
        assert!(config(&[], 8).is_empty());
        assert!(config(&[("Empty", 0.0)], 8).is_empty());
        assert!(!config(&[("Food", 1.0)], 8).is_empty());
    }
}
