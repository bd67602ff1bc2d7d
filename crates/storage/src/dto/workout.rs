use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common::Pagination;
use crate::models::{Workout, WorkoutSummary};

static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("month-year pattern is valid")
});

/// Raw query string of `GET /api/workouts`.
///
/// Every field is kept as text so that malformed values reach
/// [`WorkoutListParams::into_query`] and degrade to defaults instead of
/// being rejected by the extractor.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WorkoutListParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 20, at most 100)
    pub limit: Option<String>,
    /// Month of `startDate` as `YYYY-MM`, evaluated in UTC
    pub start_date_month_year: Option<String>,
    /// Comma-separated category codes, e.g. `c1,c3`
    pub categories: Option<String>,
}

impl WorkoutListParams {
    /// Builds params from raw `key=value` pairs, tolerating repeated keys:
    /// the first `page`, `limit` and `startDateMonthYear` win, while every
    /// `categories` value is joined with `,`. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    params.page.get_or_insert(value);
                }
                "limit" => {
                    params.limit.get_or_insert(value);
                }
                "startDateMonthYear" => {
                    params.start_date_month_year.get_or_insert(value);
                }
                "categories" => match params.categories {
                    Some(ref mut joined) => {
                        joined.push(',');
                        joined.push_str(&value);
                    }
                    None => params.categories = Some(value),
                },
                _ => {}
            }
        }

        params
    }

    pub fn into_query(self) -> WorkoutListQuery {
        let pagination = Pagination::from_raw(self.page.as_deref(), self.limit.as_deref());

        let filter = WorkoutFilter {
            month: self
                .start_date_month_year
                .as_deref()
                .and_then(MonthRange::parse),
            categories: self.categories.as_deref().and_then(parse_categories),
        };

        WorkoutListQuery { pagination, filter }
    }
}

/// Validated list request: what to match and which page of it to return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutListQuery {
    pub pagination: Pagination,
    pub filter: WorkoutFilter,
}

/// Conjunction of optional predicates. An absent clause imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    pub month: Option<MonthRange>,
    /// Category codes as given by the client. Unknown codes match nothing.
    pub categories: Option<Vec<String>>,
}

impl WorkoutFilter {
    pub fn matches(&self, workout: &Workout) -> bool {
        let in_month = self
            .month
            .as_ref()
            .is_none_or(|range| range.contains(workout.start_date));

        let in_categories = self.categories.as_ref().is_none_or(|codes| {
            codes
                .iter()
                .any(|code| code.as_str() == workout.category.as_str())
        });

        in_month && in_categories
    }
}

/// Half-open UTC interval `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthRange {
    /// Parses `YYYY-MM`. Returns `None` for anything else, including
    /// well-shaped strings naming a month outside 01..=12.
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = MONTH_YEAR.captures(raw)?;
        let year: i32 = captures[1].parse().ok()?;
        let month: u32 = captures[2].parse().ok()?;

        Self::new(year, month)
    }

    pub fn new(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;

        Some(Self {
            start: start.and_hms_opt(0, 0, 0)?.and_utc(),
            end: end.and_hms_opt(0, 0, 0)?.and_utc(),
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

fn parse_categories(raw: &str) -> Option<Vec<String>> {
    let mut codes: Vec<String> = Vec::new();

    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !codes.iter().any(|existing| existing == code) {
            codes.push(code.to_string());
        }
    }

    (!codes.is_empty()).then_some(codes)
}

/// Paginated envelope returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutSummary>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_workouts: u64,
    pub page_size: u32,
}

impl WorkoutListResponse {
    pub fn new(workouts: Vec<WorkoutSummary>, pagination: &Pagination, total_workouts: u64) -> Self {
        Self {
            workouts,
            current_page: pagination.page(),
            total_pages: pagination.total_pages(total_workouts),
            total_workouts,
            page_size: pagination.limit(),
        }
    }
}
