//! Administrative calendar: day resolution, role filtering, two-month
//! bucketing, view state and rendering of the history view.

pub mod bucket;
pub mod entries;
pub mod grid;
pub mod resolve;
pub mod state;

pub use bucket::{Buckets, MonthBucket, aggregate, filter_records};
pub use grid::{DayCell, MonthGrid, month_grids};
pub use resolve::{IsoDay, resolve_day};
pub use state::{Action, HistoryView, ViewState, reduce};
