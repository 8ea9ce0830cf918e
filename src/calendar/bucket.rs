//! Two-month bucketing of visit records by resolved day.

use crate::calendar::resolve::{IsoDay, resolve_day};
use crate::models::{RoleFilter, VisitRecord};
use crate::utils::date::next_month;
use std::collections::{BTreeMap, HashMap};

/// Per-day record counts for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    counts: BTreeMap<u32, usize>,
}

impl MonthBucket {
    fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            counts: BTreeMap::new(),
        }
    }

    pub fn count(&self, day: u32) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn contains(&self, day: &IsoDay) -> bool {
        day.is_in_month(self.year, self.month)
    }
}

/// Records of the two displayed months, grouped by day.
#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    pub first: MonthBucket,
    pub second: MonthBucket,
    by_day: HashMap<IsoDay, Vec<&'a VisitRecord>>,
}

impl<'a> Buckets<'a> {
    /// Bucket `records` into (year, month) and the month after it.
    /// Input order is preserved inside every day.
    pub fn build<I>(records: I, year: i32, month: u32) -> Self
    where
        I: IntoIterator<Item = &'a VisitRecord>,
    {
        let (next_year, next_month) = next_month(year, month);
        let mut buckets = Buckets {
            first: MonthBucket::new(year, month),
            second: MonthBucket::new(next_year, next_month),
            by_day: HashMap::new(),
        };

        for record in records {
            let Some(day) = resolve_day(record) else {
                continue;
            };
            buckets.push(day, record);
        }

        buckets
    }

    fn push(&mut self, day: IsoDay, record: &'a VisitRecord) {
        let month = if self.first.contains(&day) {
            &mut self.first
        } else if self.second.contains(&day) {
            &mut self.second
        } else {
            return;
        };

        *month.counts.entry(day.day).or_insert(0) += 1;
        self.by_day.entry(day).or_default().push(record);
    }

    /// Records bucketed on `day`, in input order.
    pub fn entries(&self, day: &IsoDay) -> &[&'a VisitRecord] {
        self.by_day.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Restrict already built buckets to `role`.
    pub fn filtered(&self, role: RoleFilter) -> Buckets<'a> {
        let mut out = Buckets {
            first: MonthBucket::new(self.first.year, self.first.month),
            second: MonthBucket::new(self.second.year, self.second.month),
            by_day: HashMap::new(),
        };

        for (day, records) in &self.by_day {
            for record in records {
                if role.matches(&record.role_tag()) {
                    out.push(*day, *record);
                }
            }
        }
        out
    }
}

/// Apply the role filter, preserving input order.
pub fn filter_records(records: &[VisitRecord], role: RoleFilter) -> Vec<&VisitRecord> {
    records
        .iter()
        .filter(|r| role.matches(&r.role_tag()))
        .collect()
}

/// Filter then bucket: the aggregation behind the calendar view.
pub fn aggregate(records: &[VisitRecord], role: RoleFilter, year: i32, month: u32) -> Buckets<'_> {
    Buckets::build(filter_records(records, role), year, month)
}
