use chrono::{Datelike, Months, NaiveDate};

/// A calendar month, e.g. `2024-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub(crate) fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Accepts `YYYY-MM` (or `YYYY-M`).
    pub(crate) fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .ok()
            .map(Self::of)
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub(crate) fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub(crate) fn succ(&self) -> Self {
        self.first_day()
            .and_then(|d| d.checked_add_months(Months::new(1)))
            .map_or(*self, Self::of)
    }

    pub(crate) fn pred(&self) -> Self {
        self.first_day()
            .and_then(|d| d.checked_sub_months(Months::new(1)))
            .map_or(*self, Self::of)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
