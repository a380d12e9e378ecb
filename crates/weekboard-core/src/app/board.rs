//! Board - 週間ボードのコントローラー
//!
//! ports から読み込んだスナップショットを保持し、
//! - 表示（grid::build_view）
//! - 週の移動（前週 / 次週 / 今日）
//! - クリックによるステータスの循環
//! - 期間指定の一括入力
//!
//! を提供します。書き込みが失敗した場合、スナップショットは変更しません。

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    BoardError, CategoryIndex, DayStatus, Employee, EmployeeId, ScheduleEntry, ScheduleUpdate,
    Session, StoreError, WeekWindow, plan_range_fill,
};
use crate::ports::{Clock, EmployeeDirectory, ScheduleSource, ScheduleWriter};

use super::grid::{BoardView, build_view};

/// ログイン中のユーザーのレコードから Session を組み立てる
///
/// 会社と権限はユーザー自身のレコードから取る。
pub async fn sign_in(
    directory: &dyn EmployeeDirectory,
    user_id: &EmployeeId,
) -> Result<Session, StoreError> {
    let me = directory.get_employee(user_id).await?;
    info!(user = %me.id, role = me.role.tag(), company = %me.company_name, "signed in");
    Ok(Session::new(me.id, me.role, me.company_name))
}

pub struct Board {
    session: Session,
    directory: Arc<dyn EmployeeDirectory>,
    source: Arc<dyn ScheduleSource>,
    writer: Arc<dyn ScheduleWriter>,
    clock: Arc<dyn Clock>,
    window: WeekWindow,
    employees: Vec<Employee>,
    index: CategoryIndex,
}

impl Board {
    pub(crate) fn new(
        session: Session,
        directory: Arc<dyn EmployeeDirectory>,
        source: Arc<dyn ScheduleSource>,
        writer: Arc<dyn ScheduleWriter>,
        clock: Arc<dyn Clock>,
        window: WeekWindow,
    ) -> Self {
        Self {
            session,
            directory,
            source,
            writer,
            clock,
            window,
            employees: Vec::new(),
            index: CategoryIndex::default(),
        }
    }

    /// 初回読み込み（builder から続けて呼ぶ）
    pub async fn load(mut self) -> Result<Self, BoardError> {
        self.reload().await?;
        Ok(self)
    }

    /// 会社の従業員・職位・カテゴリと、各従業員のスケジュールを読み直す
    ///
    /// 途中で失敗した場合は、以前のスナップショットを保持する。
    pub async fn reload(&mut self) -> Result<(), BoardError> {
        let mut employees = self.directory.list_employees(&self.session.company).await?;
        let positions = self.directory.list_positions().await?;
        let categories = self.directory.list_categories().await?;

        for employee in &mut employees {
            employee.schedule = self.source.fetch_schedule(&employee.id).await?;
        }

        info!(
            company = %self.session.company,
            role = self.session.role.tag(),
            employees = employees.len(),
            "board loaded"
        );
        self.employees = employees;
        self.index = CategoryIndex::new(positions, categories);
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn window(&self) -> WeekWindow {
        self.window
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn schedule_of(&self, employee: &EmployeeId) -> Option<&ScheduleEntry> {
        self.employees
            .iter()
            .find(|e| &e.id == employee)
            .map(|e| &e.schedule)
    }

    pub fn view(&self, category_filter: Option<&str>) -> BoardView {
        let view = build_view(
            self.window,
            self.clock.today(),
            &self.session,
            &self.employees,
            &self.index,
            category_filter,
        );
        debug!(week = %view.label, groups = view.groups.len(), "rendered board");
        view
    }

    /// 表示する週の移動
    ///
    /// 暦の端で週が作れない場合は `OutOfCalendar` を返し、表示中の週は変えない。
    pub fn show_week_of(&mut self, date: NaiveDate) -> Result<WeekWindow, BoardError> {
        self.window = WeekWindow::containing(date).ok_or(BoardError::OutOfCalendar(date))?;
        Ok(self.window)
    }

    pub fn next_week(&mut self) -> Result<WeekWindow, BoardError> {
        self.window = self
            .window
            .next()
            .ok_or(BoardError::OutOfCalendar(self.window.day_after()))?;
        Ok(self.window)
    }

    pub fn previous_week(&mut self) -> Result<WeekWindow, BoardError> {
        self.window = self
            .window
            .previous()
            .ok_or(BoardError::OutOfCalendar(self.window.day_before()))?;
        Ok(self.window)
    }

    pub fn jump_to_today(&mut self) -> Result<WeekWindow, BoardError> {
        self.show_week_of(self.clock.today())
    }

    /// クリック 1 回分の処理
    ///
    /// - 自分の行でなければ何もしない（`Ok(None)`）
    /// - 次のステータスを 1 キーだけ書き戻し、成功したらスナップショットに反映
    pub async fn click(
        &mut self,
        employee: &EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<DayStatus>, BoardError> {
        if !self.session.owns(employee) {
            debug!(employee = %employee, %date, "click on a row not owned by the user ignored");
            return Ok(None);
        }
        let entry = self.entry_mut(employee)?;
        let next = entry.status_on(date).cycled();

        if let Err(e) = self.writer.write_day(employee, date, next).await {
            warn!(employee = %employee, %date, error = %e, "status write failed");
            return Err(e.into());
        }

        self.entry_mut(employee)?.set(date, next);
        info!(employee = %employee, %date, status = %next, "status updated");
        Ok(Some(next))
    }

    /// 期間 `[start, end]` の全日にステータスを書き込む（自分のスケジュールのみ）
    pub async fn fill_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        status: DayStatus,
    ) -> Result<Vec<ScheduleUpdate>, BoardError> {
        let updates =
            plan_range_fill(start, end, status).ok_or(BoardError::InvalidRange { start, end })?;
        let me = self.session.user_id.clone();
        if self.schedule_of(&me).is_none() {
            return Err(BoardError::NotEditable { employee: me });
        }

        if let Err(e) = self.writer.write_days(&me, &updates).await {
            warn!(employee = %me, %start, %end, error = %e, "range write failed");
            return Err(e.into());
        }

        self.entry_mut(&me)?.apply(&updates);
        info!(employee = %me, %start, %end, %status, days = updates.len(), "range filled");
        Ok(updates)
    }

    fn entry_mut(&mut self, employee: &EmployeeId) -> Result<&mut ScheduleEntry, BoardError> {
        self.employees
            .iter_mut()
            .find(|e| &e.id == employee)
            .map(|e| &mut e.schedule)
            .ok_or_else(|| BoardError::UnknownEmployee(employee.clone()))
    }
}
