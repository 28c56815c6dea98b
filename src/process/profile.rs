use crate::process::date_parser::DateFormat;

/// Column the normalizer coerces to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateColumn {
    /// Name after renaming.
    pub name: &'static str,
    pub format: DateFormat,
}

/// How one upstream API lays out its records and which fields get renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    /// Keys leading from the response root to the record list.
    pub record_path: &'static [&'static str],
    /// `(source field, output column)` pairs.
    pub renames: &'static [(&'static str, &'static str)],
    pub date_column: Option<DateColumn>,
}

/// EIA v2 time series: `{ "response": { "data": [ { "period": "2023-01", "value": ... } ] } }`
pub const EIA_TIMESERIES: Profile = Profile {
    name: "eia-timeseries",
    record_path: &["response", "data"],
    renames: &[("period", "date"), ("value", "production_bbl_per_day")],
    date_column: Some(DateColumn {
        name: "date",
        format: DateFormat::YearMonth,
    }),
};

/// TMDB movie search: `{ "results": [ { "title": ..., "release_date": "1979-05-25" } ] }`
pub const MOVIE_SEARCH: Profile = Profile {
    name: "movie-search",
    record_path: &["results"],
    renames: &[],
    date_column: Some(DateColumn {
        name: "release_date",
        format: DateFormat::YearMonthDay,
    }),
};

impl Profile {
    /// Output name for a source field.
    pub fn rename<'a>(&self, field: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| *from == field)
            .map(|(_, to)| *to)
            .unwrap_or(field)
    }

    /// Dotted form of `record_path`, for messages.
    pub fn record_path_display(&self) -> String {
        self.record_path.join(".")
    }
}
