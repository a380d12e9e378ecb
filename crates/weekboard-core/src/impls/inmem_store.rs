//! InMemoryStore - 開発用・テスト用のストア
//!
//! # 学習ポイント
//! - `tokio::sync::Mutex` による排他制御（await をまたいでも安全）
//! - 1 つの構造体で複数の port を実装する
//! - 失敗の注入（ネットワーク障害の再現）

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{
    DayStatus, Employee, EmployeeId, JobCategory, JobPosition, ScheduleEntry, ScheduleUpdate,
    StoreError,
};
use crate::ports::{EmployeeDirectory, ScheduleSource, ScheduleWriter};

/// ストアの中身全体（JSON ファイルの形式でもある）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub positions: Vec<JobPosition>,
    #[serde(default)]
    pub categories: Vec<JobCategory>,
}

impl StoreSnapshot {
    /// employee に updates を適用したコピーを返す（self は変更しない）
    pub(crate) fn with_updates(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<StoreSnapshot, StoreError> {
        let mut next = self.clone();
        next.employee_mut(employee)?.schedule.apply(updates);
        Ok(next)
    }

    fn employee_mut(&mut self, id: &EmployeeId) -> Result<&mut Employee, StoreError> {
        self.employees
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

/// 書き込み履歴の 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub employee: EmployeeId,
    pub update: ScheduleUpdate,
}

/// InMemoryStore は全ての port を実装するメモリ上のストア
///
/// # 使用例
/// ```ignore
/// let store = InMemoryStore::new(snapshot);
/// let entry = store.fetch_schedule(&employee_id).await?;
/// store.write_day(&employee_id, date, DayStatus::Absent).await?;
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreSnapshot>>,
    /// 受け付けた書き込み（テストでの検証用）
    writes: Arc<Mutex<Vec<WriteRecord>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(snapshot)),
            writes: Arc::new(Mutex::new(Vec::new())),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// true の間、全ての書き込みを `StoreError::Unavailable` で失敗させる
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.lock().await.clone()
    }

    pub async fn writes(&self) -> Vec<WriteRecord> {
        self.writes.lock().await.clone()
    }

    /// 書き込み用に状態のロックを取る
    ///
    /// 失敗注入中は `StoreError::Unavailable` を返す。ガードを持っている間、
    /// 他の書き込みは待たされる。
    pub(crate) async fn begin_write(&self) -> Result<MutexGuard<'_, StoreSnapshot>, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes are disabled".to_string()));
        }
        Ok(self.state.lock().await)
    }

    /// 確定した書き込みを履歴に残す
    pub(crate) async fn record_writes(&self, employee: &EmployeeId, updates: &[ScheduleUpdate]) {
        let mut writes = self.writes.lock().await;
        writes.extend(updates.iter().map(|u| WriteRecord {
            employee: employee.clone(),
            update: *u,
        }));
    }

    async fn apply_updates(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<(), StoreError> {
        let mut state = self.begin_write().await?;
        state.employee_mut(employee)?.schedule.apply(updates);
        drop(state);
        self.record_writes(employee, updates).await;
        Ok(())
    }
}

#[async_trait]
impl ScheduleSource for InMemoryStore {
    async fn fetch_schedule(&self, employee: &EmployeeId) -> Result<ScheduleEntry, StoreError> {
        let state = self.state.lock().await;
        state
            .employees
            .iter()
            .find(|e| &e.id == employee)
            .map(|e| e.schedule.clone())
            .ok_or_else(|| StoreError::NotFound(employee.clone()))
    }
}

#[async_trait]
impl ScheduleWriter for InMemoryStore {
    async fn write_day(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<(), StoreError> {
        self.apply_updates(employee, &[ScheduleUpdate::new(date, status)])
            .await
    }

    async fn write_days(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<(), StoreError> {
        self.apply_updates(employee, updates).await
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryStore {
    async fn list_employees(&self, company: &str) -> Result<Vec<Employee>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .employees
            .iter()
            .filter(|e| e.company_name == company)
            .cloned()
            .collect())
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, StoreError> {
        let state = self.state.lock().await;
        state
            .employees
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn list_positions(&self) -> Result<Vec<JobPosition>, StoreError> {
        Ok(self.state.lock().await.positions.clone())
    }

    async fn list_categories(&self) -> Result<Vec<JobCategory>, StoreError> {
        Ok(self.state.lock().await.categories.clone())
    }
}
