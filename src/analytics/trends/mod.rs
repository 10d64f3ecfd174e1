//! Time-bucketed trend series with adaptive granularity and gap-filling.
//!
//! The bucketer is a pure function of the date range and the events handed to
//! it: the same range always yields the same dense, chronological bucket
//! sequence, with zeroed entries where no events fell.

mod labels;

pub use labels::full_date;

use super::domain::Response;
use super::scoring::{self, CsatSummary, NpsSummary};
use super::sessions;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bucket width for a trend series, picked from the span of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Spans over 90 whole days bucket by month, over 31 by week, anything
    /// up to and including 31 days by day.
    pub fn select(range_start: NaiveDate, range_end: NaiveDate) -> Self {
        let span_days = (range_end - range_start).num_days();
        if span_days > 90 {
            Self::Month
        } else if span_days > 31 {
            Self::Week
        } else {
            Self::Day
        }
    }

    /// Truncate a date to the start of its bucket. Weeks start on Monday.
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => date - Duration::days(date.weekday().num_days_from_monday() as i64),
            Self::Month => date - Duration::days(date.day0() as i64),
        }
    }

    /// The start of the bucket after `bucket`. `bucket` must itself be a
    /// bucket start.
    fn next_bucket(self, bucket: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => bucket + Duration::days(1),
            Self::Week => bucket + Duration::days(7),
            Self::Month => {
                // 32 days from the 1st always lands inside the next month.
                let inside_next = bucket + Duration::days(32);
                inside_next - Duration::days(inside_next.day0() as i64)
            }
        }
    }

    pub fn label(self, bucket: NaiveDate) -> String {
        match self {
            Self::Day => labels::day_label(bucket),
            Self::Week => labels::week_label(bucket),
            Self::Month => labels::month_label(bucket),
        }
    }
}

/// A date range resolved to a dense bucket sequence.
#[derive(Debug, Clone)]
pub struct Bucketer {
    granularity: Granularity,
    buckets: Vec<NaiveDate>,
}

impl Bucketer {
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self::with_granularity(range_start, range_end, Granularity::select(range_start, range_end))
    }

    /// Callers may override the adaptive pick (the `period` parameter of the
    /// reporting surfaces).
    pub fn with_granularity(
        range_start: NaiveDate,
        range_end: NaiveDate,
        granularity: Granularity,
    ) -> Self {
        let mut buckets = Vec::new();
        let mut bucket = granularity.bucket_start(range_start);
        let last = granularity.bucket_start(range_end);
        while bucket <= last {
            buckets.push(bucket);
            bucket = granularity.next_bucket(bucket);
        }
        Self {
            granularity,
            buckets,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn bucket_of(&self, timestamp: NaiveDateTime) -> NaiveDate {
        self.granularity.bucket_start(timestamp.date())
    }

    /// Distinct respondent sessions per bucket, gap-filled to the full range.
    pub fn session_volume<'a, I>(&self, responses: I) -> Vec<VolumePoint>
    where
        I: IntoIterator<Item = &'a Response>,
    {
        let mut grouped: BTreeMap<NaiveDate, Vec<&Response>> = BTreeMap::new();
        for response in responses {
            grouped
                .entry(self.bucket_of(response.created_at))
                .or_default()
                .push(response);
        }

        self.buckets
            .iter()
            .map(|bucket| VolumePoint {
                period: self.granularity.label(*bucket),
                sessions: grouped
                    .get(bucket)
                    .map(|rows| sessions::count_distinct_sessions(rows.iter().copied()))
                    .unwrap_or(0),
            })
            .collect()
    }

    /// NPS per bucket, each bucket classified and scored over its own events
    /// only. With `accumulated`, a second pass derives the running score from
    /// cumulative counts.
    pub fn nps_trend(&self, ratings: &[(NaiveDateTime, i64)], accumulated: bool) -> Vec<NpsTrendPoint> {
        let grouped = self.group_ratings(ratings);
        let mut running_promoters = 0;
        let mut running_detractors = 0;
        let mut running_total = 0;

        self.buckets
            .iter()
            .map(|bucket| {
                let empty = Vec::new();
                let bucket_ratings = grouped.get(bucket).unwrap_or(&empty);
                let summary: NpsSummary = scoring::nps_summary(bucket_ratings);

                let accumulated_score = accumulated.then(|| {
                    running_promoters += summary.promoters;
                    running_detractors += summary.detractors;
                    running_total += summary.total;
                    scoring::nps_score(running_promoters, running_detractors, running_total)
                });

                NpsTrendPoint {
                    period: self.granularity.label(*bucket),
                    promoters: summary.promoters,
                    neutrals: summary.neutrals,
                    detractors: summary.detractors,
                    total: summary.total,
                    score: summary.score,
                    accumulated_score,
                }
            })
            .collect()
    }

    /// CSAT per bucket, same shape as `nps_trend`.
    pub fn csat_trend(
        &self,
        ratings: &[(NaiveDateTime, i64)],
        accumulated: bool,
    ) -> Vec<CsatTrendPoint> {
        let grouped = self.group_ratings(ratings);
        let mut running_satisfied = 0;
        let mut running_total = 0;

        self.buckets
            .iter()
            .map(|bucket| {
                let empty = Vec::new();
                let bucket_ratings = grouped.get(bucket).unwrap_or(&empty);
                let summary: CsatSummary = scoring::csat_summary(bucket_ratings);

                let accumulated_score = accumulated.then(|| {
                    running_satisfied += summary.satisfied;
                    running_total += summary.total;
                    scoring::satisfaction_rate(running_satisfied, running_total)
                });

                CsatTrendPoint {
                    period: self.granularity.label(*bucket),
                    satisfied: summary.satisfied,
                    neutral: summary.neutral,
                    unsatisfied: summary.unsatisfied,
                    total: summary.total,
                    satisfaction_rate: summary.satisfaction_rate,
                    average_score: summary.average_score,
                    accumulated_score,
                }
            })
            .collect()
    }

    fn group_ratings(&self, ratings: &[(NaiveDateTime, i64)]) -> BTreeMap<NaiveDate, Vec<i64>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<i64>> = BTreeMap::new();
        for &(timestamp, rating) in ratings {
            grouped.entry(self.bucket_of(timestamp)).or_default().push(rating);
        }
        grouped
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub period: String,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpsTrendPoint {
    pub period: String,
    pub promoters: usize,
    pub neutrals: usize,
    pub detractors: usize,
    pub total: usize,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulated_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsatTrendPoint {
    pub period: String,
    pub satisfied: usize,
    pub neutral: usize,
    pub unsatisfied: usize,
    pub total: usize,
    pub satisfaction_rate: f64,
    pub average_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulated_score: Option<f64>,
}
