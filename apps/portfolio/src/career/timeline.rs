//! Timeline period parsing and the selected-year filter.
//!
//! Period values are display strings such as `"Jul 2023 • Dec 2023"`,
//! `"January 2024 • Present"`, `"Aug 4th • Aug 18th 2013"` or `"2003 • 2007"`.
//! Only the years are interpreted.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Experience;

const RANGE_SEPARATOR: char = '•';
const OPEN_ENDED: &str = "present";

/// Inclusive range of calendar years covered by a period string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpan {
    pub start: i32,
    pub end: i32,
}

impl YearSpan {
    pub fn covers(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Parses a period display string. `Present` resolves to `current_year`.
/// Returns `None` when no year can be found on either side.
pub fn parse_year_span(value: &str, current_year: i32) -> Option<YearSpan> {
    let (left, right) = match value.split_once(RANGE_SEPARATOR) {
        Some((l, r)) => (l, Some(r)),
        None => (value, None),
    };

    let end = right.and_then(|r| side_year(r, current_year));
    let start = side_year(left, current_year).or(end)?;
    let end = end.unwrap_or(start);

    Some(YearSpan {
        start: start.min(end),
        end: start.max(end),
    })
}

fn side_year(side: &str, current_year: i32) -> Option<i32> {
    side.split_whitespace().find_map(|token| {
        if token.eq_ignore_ascii_case(OPEN_ENDED) {
            return Some(current_year);
        }
        if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse().ok();
        }
        None
    })
}

/// An experience selected by the timeline filter, with its position in the full list.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineMatch {
    pub index: usize,
    pub span: YearSpan,
    pub experience: Experience,
}

/// Experiences with any period covering `year`, in their stored order.
pub fn experiences_in_year(experiences: &[Experience], year: i32) -> Vec<TimelineMatch> {
    experiences_in_year_at(experiences, year, Utc::now().year())
}

fn experiences_in_year_at(
    experiences: &[Experience],
    year: i32,
    current_year: i32,
) -> Vec<TimelineMatch> {
    experiences
        .iter()
        .enumerate()
        .filter_map(|(index, exp)| {
            exp.periods
                .iter()
                .filter_map(|p| parse_year_span(&p.value, current_year))
                .find(|span| span.covers(year))
                .map(|span| TimelineMatch {
                    index,
                    span,
                    experience: exp.clone(),
                })
        })
        .collect()
}
