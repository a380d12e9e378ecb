//! Domain - ドメインモデル（status, run, week, schedule, directory, session）

pub mod directory;
pub mod errors;
pub mod ids;
pub mod run;
pub mod schedule;
pub mod session;
pub mod status;
pub mod week;

pub use directory::{CategoryIndex, Employee, JobCategory, JobPosition, Role, UNCATEGORIZED};
pub use errors::{BoardError, StoreError};
pub use ids::{CategoryId, EmployeeId, PositionId};
pub use run::{Alignment, CellStyle, Corners, RunShape, render_cell, render_row};
pub use schedule::{ScheduleEntry, ScheduleUpdate, date_key, parse_date_key, plan_range_fill};
pub use session::Session;
pub use status::{ColorToken, DayStatus};
pub use week::WeekWindow;
