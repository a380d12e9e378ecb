//! BoardBuilder - Board の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 1 つのストアで複数の port を満たす場合のショートカット（`store()`）

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Session, WeekWindow};
use crate::ports::{Clock, EmployeeDirectory, ScheduleSource, ScheduleWriter, SystemClock};

use super::board::Board;

/// BoardBuilder は Board を構築
///
/// # 使用例
/// ```ignore
/// let board = BoardBuilder::new(session)
///     .store(Arc::new(InMemoryStore::new(snapshot)))
///     .clock(FixedClock::new(today))
///     .build()?
///     .load()
///     .await?;
/// ```
///
/// # Fail-fast 設計
/// - directory / source / writer のどれかが未設定なら build() が BuildError を返す
/// - clock は省略可能（SystemClock）
/// - 今日を含む週が作れない場合（暦の端）も BuildError
pub struct BoardBuilder {
    session: Session,
    directory: Option<Arc<dyn EmployeeDirectory>>,
    source: Option<Arc<dyn ScheduleSource>>,
    writer: Option<Arc<dyn ScheduleWriter>>,
    clock: Arc<dyn Clock>,
}

/// BuildError は Board 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing ports: {0:?}. These ports must be set before build().")]
    MissingPorts(Vec<&'static str>),

    #[error("today ({0}) has no displayable week")]
    OutOfCalendar(NaiveDate),
}

impl BoardBuilder {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            directory: None,
            source: None,
            writer: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// 全ての port を同じストアで満たす
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: EmployeeDirectory + ScheduleSource + ScheduleWriter + 'static,
    {
        self.directory(store.clone())
            .source(store.clone())
            .writer(store)
    }

    pub fn directory(mut self, directory: Arc<dyn EmployeeDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn source(mut self, source: Arc<dyn ScheduleSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn writer(mut self, writer: Arc<dyn ScheduleWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// 検証して Board を生成（まだデータは読み込まない）
    pub fn build(self) -> Result<Board, BuildError> {
        let mut missing = Vec::new();
        if self.directory.is_none() {
            missing.push("directory");
        }
        if self.source.is_none() {
            missing.push("source");
        }
        if self.writer.is_none() {
            missing.push("writer");
        }
        let (Some(directory), Some(source), Some(writer)) =
            (self.directory, self.source, self.writer)
        else {
            return Err(BuildError::MissingPorts(missing));
        };
        let today = self.clock.today();
        let window = WeekWindow::containing(today).ok_or(BuildError::OutOfCalendar(today))?;
        Ok(Board::new(
            self.session,
            directory,
            source,
            writer,
            self.clock,
            window,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeId, Role};
    use crate::impls::InMemoryStore;
    use crate::ports::FixedClock;

    fn session() -> Session {
        Session::new(EmployeeId::new("me"), Role::Employee, "Acme")
    }

    #[test]
    fn test_build_success() {
        let board = BoardBuilder::new(session())
            .store(Arc::new(InMemoryStore::default()))
            .build();
        assert!(board.is_ok());
    }

    #[test]
    fn test_build_missing_ports() {
        let board = BoardBuilder::new(session())
            .source(Arc::new(InMemoryStore::default()))
            .build();
        assert!(matches!(
            board,
            Err(BuildError::MissingPorts(missing)) if missing == vec!["directory", "writer"]
        ));
    }

    #[test]
    fn test_build_rejects_a_clock_at_the_calendar_end() {
        let board = BoardBuilder::new(session())
            .store(Arc::new(InMemoryStore::default()))
            .clock(FixedClock::new(NaiveDate::MAX))
            .build();
        assert!(matches!(board, Err(BuildError::OutOfCalendar(d)) if d == NaiveDate::MAX));
    }
}
