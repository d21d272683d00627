use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub const NOT_AVAILABLE: &str = "N/A";
pub const CALC_ERROR: &str = "Error de cálculo";

const DATE_FORMAT: &str = "%d %b, %Y";

/// Outcome of the derived range/interval pair. `NotFound` means at least one
/// endpoint date never showed up; `CalcError` means both labels matched but
/// the date text itself did not parse. The two must never collapse into each
/// other.
#[derive(Debug, Clone, PartialEq)]
pub enum DateOutcome {
    NotFound,
    Computed { range: String, months: i32 },
    CalcError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateInfo {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub apply_before: Option<String>,
    pub outcome: DateOutcome,
}

impl DateInfo {
    pub fn not_found() -> Self {
        DateInfo {
            start_date: None,
            end_date: None,
            apply_before: None,
            outcome: DateOutcome::NotFound,
        }
    }

    pub fn start_date_display(&self) -> String {
        self.start_date
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn end_date_display(&self) -> String {
        self.end_date
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn apply_before_display(&self) -> String {
        self.apply_before
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn range_display(&self) -> String {
        match &self.outcome {
            DateOutcome::NotFound => NOT_AVAILABLE.to_string(),
            DateOutcome::Computed { range, .. } => range.clone(),
            DateOutcome::CalcError => CALC_ERROR.to_string(),
        }
    }

    pub fn months_display(&self) -> String {
        match &self.outcome {
            DateOutcome::NotFound => NOT_AVAILABLE.to_string(),
            DateOutcome::Computed { months, .. } => format!("{} meses", months),
            DateOutcome::CalcError => CALC_ERROR.to_string(),
        }
    }
}

/// Parses the raw labeled text produced by the date extractor into a
/// structured `DateInfo`. Each label is matched independently; diagnostics
/// that carry no labels simply yield `DateInfo::not_found()`.
pub fn parse_date_info(raw: &str) -> DateInfo {
    let start_date = labeled_date(raw, "Start Date");
    let end_date = labeled_date(raw, "End Date");
    let apply_before = labeled_date(raw, "Apply Before Date");

    let outcome = match (&start_date, &end_date) {
        (Some(start), Some(end)) => {
            let parsed_start = NaiveDate::parse_from_str(start, DATE_FORMAT);
            let parsed_end = NaiveDate::parse_from_str(end, DATE_FORMAT);
            match (parsed_start, parsed_end) {
                (Ok(start_day), Ok(end_day)) => DateOutcome::Computed {
                    range: format!("{} - {}", start, end),
                    months: whole_months_between(start_day, end_day),
                },
                _ => DateOutcome::CalcError,
            }
        }
        _ => DateOutcome::NotFound,
    };

    DateInfo {
        start_date,
        end_date,
        apply_before,
        outcome,
    }
}

fn labeled_date(raw: &str, label: &str) -> Option<String> {
    let pattern = Regex::new(&format!(
        r"{}:\s*(\d{{1,2}}\s*[A-Za-z]{{3}},\s*\d{{4}})",
        label
    ))
    .unwrap();
    pattern
        .captures(raw)
        .map(|captures| captures[1].trim().to_string())
}

// Calendar-month difference, not day-count division: a partial trailing
// month does not count.
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months
}
