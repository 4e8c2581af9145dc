/// Abstract styling for a piece of rendered text. Produced by classification
/// and layout code, resolved to terminal escapes only by [`Charset::paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Past,
    Today,
    FutureNear,
    FutureMid,
    Plain,
    /// Category color, cycled through [`PALETTE`] by index.
    Category(usize),
}

/// Fixed palette cycled across categories.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0, 0, 255),     // deep blue
    (0, 255, 255),   // cyan
    (175, 135, 255), // medium purple
    (0, 215, 175),   // sea green
    (215, 175, 0),   // gold
    (175, 95, 0),    // orange brown
    (135, 175, 135), // pale green
    (135, 95, 175),  // violet
    (118, 118, 118), // gray
    (95, 135, 95),   // spring green
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub bullet: &'static str,
    pub bar: &'static str,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            bullet: "*",
            bar: "#",
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            bullet: "\u{25cf}",
            bar: "\u{25a0}",
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Resolves a style token over `text`. Without color enabled, the text
    /// passes through untouched.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = match style {
            Style::Past => (0, 215, 0),
            Style::Today => (255, 255, 0),
            Style::FutureNear => (255, 0, 135),
            Style::FutureMid => (255, 135, 0),
            Style::Plain => return text.to_string(),
            Style::Category(i) => PALETTE[i % PALETTE.len()],
        };
        colored::Colorize::truecolor(text, r, g, b).to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Style::Past)]
    #[case(Style::Today)]
    #[case(Style::Plain)]
    #[case(Style::Category(0))]
    #[case(Style::Category(37))]
    fn test_paint_without_color_passes_through(#[case] style: Style) {
        let charset = Charset::default();
        assert_eq!(charset.paint(style, "asdf"), "asdf")
    }

    #[test]
    fn test_palette_cycles() {
        let n = PALETTE.len();
        assert_eq!(PALETTE[(n + 3) % n], PALETTE[3]);
    }
}
