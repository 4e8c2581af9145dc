use crate::base::Day;
use crate::base::Style;

/// How an expense's day relates to the current day of the month. Pure
/// classification; glyphs and colors are a [`crate::base::Charset`] concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Past,
    Today,
    /// 1 to 3 days ahead.
    NearFuture,
    /// 4 to 5 days ahead.
    MidFuture,
    Far,
}

impl Status {
    pub fn classify(day: Day, today: u8) -> Self {
        let day = day.get();
        if day < today {
            return Self::Past;
        }
        if day == today {
            return Self::Today;
        }
        match day - today {
            1..=3 => Self::NearFuture,
            4..=5 => Self::MidFuture,
            _ => Self::Far,
        }
    }

    pub fn style(self) -> Style {
        match self {
            Self::Past => Style::Past,
            Self::Today => Style::Today,
            Self::NearFuture => Style::FutureNear,
            Self::MidFuture => Style::FutureMid,
            Self::Far => Style::Plain,
        }
    }
}
