//! Calendar view state and its reducer.

use crate::calendar::bucket::{Buckets, aggregate};
use crate::calendar::resolve::IsoDay;
use crate::errors::{AppError, AppResult};
use crate::models::{RoleFilter, VisitRecord};
use crate::utils::date::{days_in_month, iso, next_month};
use chrono::{Datelike, NaiveDate};

/// Transient UI state of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Displayed month, 0 = January … 11 = December.
    pub month_index: u32,
    pub year: i32,
    pub role: RoleFilter,
    pub selected: Option<IsoDay>,
}

impl ViewState {
    /// Defaults: the month of `today`, no selection.
    pub fn new(today: NaiveDate, role: RoleFilter) -> Self {
        Self {
            month_index: today.month0(),
            year: today.year(),
            role,
            selected: None,
        }
    }

    /// 1-based number of the first displayed month.
    pub fn month(&self) -> u32 {
        self.month_index + 1
    }

    /// (year, month) of the second displayed month.
    pub fn next(&self) -> (i32, u32) {
        next_month(self.year, self.month())
    }
}

/// A discrete user action on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Month index, 0-11.
    SetMonth(u32),
    SetYear(i32),
    SetRole(RoleFilter),
    /// Toggle `day` of the first (`next_month == false`) or second displayed month.
    SelectDay { day: u32, next_month: bool },
}

/// Apply `action` to `state`. Month, year and role changes always drop the selection.
pub fn reduce(state: &ViewState, action: Action, years: &[i32]) -> AppResult<ViewState> {
    let mut next = state.clone();

    match action {
        Action::SetMonth(index) => {
            if index > 11 {
                return Err(AppError::InvalidMonth(index.saturating_add(1)));
            }
            next.month_index = index;
            next.selected = None;
        }
        Action::SetYear(year) => {
            if !years.contains(&year) {
                let allowed = years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(AppError::InvalidYear(year, allowed));
            }
            next.year = year;
            next.selected = None;
        }
        Action::SetRole(role) => {
            next.role = role;
            next.selected = None;
        }
        Action::SelectDay { day, next_month } => {
            let (y, m) = if next_month {
                state.next()
            } else {
                (state.year, state.month())
            };

            if day == 0 || day > days_in_month(y, m) {
                return Err(AppError::InvalidDay(iso(y, m, day)));
            }

            let target = IsoDay::new(y, m, day);
            next.selected = if state.selected == Some(target) {
                None
            } else {
                Some(target)
            };
        }
    }

    Ok(next)
}

/// The history view: caller-supplied records plus the calendar state.
#[derive(Debug, Clone)]
pub struct HistoryView {
    records: Vec<VisitRecord>,
    years: Vec<i32>,
    defaults: ViewState,
    state: ViewState,
}

impl HistoryView {
    pub fn new(records: Vec<VisitRecord>, years: Vec<i32>, defaults: ViewState) -> Self {
        Self {
            records,
            years,
            state: defaults.clone(),
            defaults,
        }
    }

    /// Swap the record list; the UI state goes back to its defaults.
    pub fn replace_records(&mut self, records: Vec<VisitRecord>) {
        self.records = records;
        self.state = self.defaults.clone();
    }

    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> AppResult<()> {
        self.state = reduce(&self.state, action, &self.years)?;
        Ok(())
    }

    /// Toggle the selection of a full date, which must fall in one of the
    /// two displayed months.
    pub fn select_date(&mut self, date: NaiveDate) -> AppResult<()> {
        let (ny, nm) = self.state.next();
        let next_month = if date.year() == self.state.year && date.month() == self.state.month() {
            false
        } else if date.year() == ny && date.month() == nm {
            true
        } else {
            return Err(AppError::InvalidDay(date.format("%Y-%m-%d").to_string()));
        };

        self.dispatch(Action::SelectDay {
            day: date.day(),
            next_month,
        })
    }

    pub fn buckets(&self) -> Buckets<'_> {
        aggregate(
            &self.records,
            self.state.role,
            self.state.year,
            self.state.month(),
        )
    }

    /// Records of the selected day; empty when nothing is selected.
    pub fn selected_entries(&self) -> Vec<&VisitRecord> {
        match &self.state.selected {
            Some(day) => self.buckets().entries(day).to_vec(),
            None => Vec::new(),
        }
    }
}
