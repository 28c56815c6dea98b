use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("year-month pattern should compile"));

static YEAR_MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("year-month-day pattern should compile")
});

/// Textual layouts a period column may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM`, read as the first day of that month.
    YearMonth,
    /// `YYYY-MM-DD`
    YearMonthDay,
}

impl DateFormat {
    pub fn parse(self, s: &str) -> Option<NaiveDate> {
        match self {
            DateFormat::YearMonth => parse_year_month(s),
            DateFormat::YearMonthDay => parse_year_month_day(s),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::YearMonth => f.write_str("YYYY-MM"),
            DateFormat::YearMonthDay => f.write_str("YYYY-MM-DD"),
        }
    }
}

/// Strict `"YYYY-MM"` → first of the month
pub fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let caps = YEAR_MONTH.captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Strict `"YYYY-MM-DD"`
pub fn parse_year_month_day(s: &str) -> Option<NaiveDate> {
    let caps = YEAR_MONTH_DAY.captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
