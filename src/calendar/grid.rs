//! Month grids (Sunday-first) and their plain-text rendering.

use crate::calendar::bucket::{Buckets, MonthBucket};
use crate::calendar::resolve::IsoDay;
use crate::utils::date::{WEEKDAY_NAMES, days_in_month, first_weekday, month_name};

const CELL_WIDTH: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub iso: IsoDay,
    pub count: usize,
    pub selected: bool,
}

impl DayCell {
    /// ` 7 ` or `[ 7]` when selected, followed by `(n)` when records exist.
    pub fn label(&self) -> String {
        let day = if self.selected {
            format!("[{:>2}]", self.day)
        } else {
            format!(" {:>2} ", self.day)
        };
        if self.count > 0 {
            format!("{day}({})", self.count)
        } else {
            day
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (weekday index of the 1st, Sunday = 0).
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(bucket: &MonthBucket, selected: Option<&IsoDay>) -> Self {
        let (year, month) = (bucket.year, bucket.month);
        let cells = (1..=days_in_month(year, month))
            .map(|day| {
                let iso = IsoDay::new(year, month, day);
                DayCell {
                    day,
                    iso,
                    count: bucket.count(day),
                    selected: selected == Some(&iso),
                }
            })
            .collect();

        Self {
            year,
            month,
            leading_blanks: first_weekday(year, month),
            cells,
        }
    }

    /// `JUNE 2025`
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month).to_uppercase(), self.year)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title());
        out.push('\n');

        let header: String = WEEKDAY_NAMES
            .iter()
            .map(|name| format!("{name:<CELL_WIDTH$}"))
            .collect();
        out.push_str(header.trim_end());
        out.push('\n');

        let blanks = (0..self.leading_blanks).map(|_| String::new());
        let labels: Vec<String> = blanks.chain(self.cells.iter().map(DayCell::label)).collect();

        for week in labels.chunks(7) {
            let line: String = week
                .iter()
                .map(|cell| format!("{cell:<CELL_WIDTH$}"))
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

/// Grids for both displayed months.
pub fn month_grids(buckets: &Buckets<'_>, selected: Option<&IsoDay>) -> [MonthGrid; 2] {
    [
        MonthGrid::build(&buckets.first, selected),
        MonthGrid::build(&buckets.second, selected),
    ]
}
