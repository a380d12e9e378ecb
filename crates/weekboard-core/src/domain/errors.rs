//! Errors - エラー型と分類
//!
//! - StoreError: ports（ストア）側の失敗
//! - BoardError: Board 操作の失敗（StoreError を包む）
//!
//! Run renderer は失敗しないので、ここには現れません。

use chrono::NaiveDate;
use thiserror::Error;

use super::ids::EmployeeId;

/// StoreError はスケジュール/ディレクトリストアの失敗
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// BoardError は Board 操作のエラー
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("employee {0} is not on this board")]
    UnknownEmployee(EmployeeId),

    #[error("schedule of {employee} is not editable by the current user")]
    NotEditable { employee: EmployeeId },

    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("no displayable week around {0}")]
    OutOfCalendar(NaiveDate),
}
