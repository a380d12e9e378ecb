//! JsonFileStore - JSON ファイルに永続化するストア（CLI 用）
//!
//! 読み込み時にファイル全体を InMemoryStore に載せ、書き込みのたびに
//! ファイル全体を書き出します。一時ファイルに書いてから rename するので、
//! 書きかけのファイルが読まれることはありません。

use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use super::inmem_store::{InMemoryStore, StoreSnapshot};
use crate::domain::{
    DayStatus, Employee, EmployeeId, JobCategory, JobPosition, ScheduleEntry, ScheduleUpdate,
    StoreError,
};
use crate::ports::{EmployeeDirectory, ScheduleSource, ScheduleWriter};

pub struct JsonFileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl JsonFileStore {
    /// ファイルを読み込む。存在しない場合は空のストアとして開く。
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<StoreSnapshot>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "data file not found, starting empty");
                StoreSnapshot::default()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(
            path = %path.display(),
            employees = snapshot.employees.len(),
            "loaded data file"
        );
        Ok(Self {
            path,
            inner: InMemoryStore::new(snapshot),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// 適用後のスナップショットをファイルに書けた場合だけメモリ側へ反映する
    ///
    /// ロックは rename まで保持するので、書き込み同士が追い越すことはない。
    async fn write_and_persist(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<(), StoreError> {
        let mut state = self.inner.begin_write().await?;
        let next = state.with_updates(employee, updates)?;
        if let Err(e) = self.persist(&next).await {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save data file");
            return Err(e);
        }
        *state = next;
        drop(state);
        self.inner.record_writes(employee, updates).await;
        Ok(())
    }
}

#[async_trait]
impl ScheduleSource for JsonFileStore {
    async fn fetch_schedule(&self, employee: &EmployeeId) -> Result<ScheduleEntry, StoreError> {
        self.inner.fetch_schedule(employee).await
    }
}

#[async_trait]
impl ScheduleWriter for JsonFileStore {
    async fn write_day(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<(), StoreError> {
        self.write_and_persist(employee, &[ScheduleUpdate::new(date, status)])
            .await
    }

    async fn write_days(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<(), StoreError> {
        self.write_and_persist(employee, updates).await
    }
}

#[async_trait]
impl EmployeeDirectory for JsonFileStore {
    async fn list_employees(&self, company: &str) -> Result<Vec<Employee>, StoreError> {
        self.inner.list_employees(company).await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, StoreError> {
        self.inner.get_employee(id).await
    }

    async fn list_positions(&self) -> Result<Vec<JobPosition>, StoreError> {
        self.inner.list_positions().await
    }

    async fn list_categories(&self) -> Result<Vec<JobCategory>, StoreError> {
        self.inner.list_categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"{
        "employees": [
            { "id": "u1", "firstName": "Ana", "lastName": "Lopez", "companyName": "Acme",
              "schedule": { "2024-03-04": "TT" } }
        ],
        "positions": [],
        "categories": []
    }"#;

    #[tokio::test]
    async fn writes_are_persisted_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, DATA).unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        let id = EmployeeId::new("u1");
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        store.write_day(&id, day, DayStatus::Absent).await.unwrap();

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let entry = reopened.fetch_schedule(&id).await.unwrap();
        assert_eq!(entry.status_on(day), DayStatus::Absent);
        assert_eq!(
            entry.status_on(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()),
            DayStatus::Teleworking
        );
    }

    #[tokio::test]
    async fn failed_save_keeps_neither_memory_nor_disk_changed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, DATA).unwrap();
        let store = JsonFileStore::open(&path).await.unwrap();
        let id = EmployeeId::new("u1");
        let d4 = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let d5 = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        // 一時ファイルの位置にディレクトリがあると書き出せない
        let blocker = path.with_extension("json.tmp");
        std::fs::create_dir(&blocker).unwrap();
        let err = store.write_day(&id, d4, DayStatus::Absent).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(
            store.fetch_schedule(&id).await.unwrap().status_on(d4),
            DayStatus::Teleworking
        );

        // 次の書き込みで失敗分が紛れ込まない
        std::fs::remove_dir(&blocker).unwrap();
        store.write_day(&id, d5, DayStatus::Absent).await.unwrap();
        let reopened = JsonFileStore::open(&path).await.unwrap();
        let entry = reopened.fetch_schedule(&id).await.unwrap();
        assert_eq!(entry.status_on(d4), DayStatus::Teleworking);
        assert_eq!(entry.status_on(d5), DayStatus::Absent);
    }

    #[tokio::test]
    async fn concurrent_writes_all_reach_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, DATA).unwrap();
        let store = std::sync::Arc::new(JsonFileStore::open(&path).await.unwrap());
        let id = EmployeeId::new("u1");

        let handles: Vec<_> = (10..20u32)
            .map(|d| {
                let store = store.clone();
                let id = id.clone();
                tokio::spawn(async move {
                    let day = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
                    store.write_day(&id, day, DayStatus::Absent).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let entry = reopened.fetch_schedule(&id).await.unwrap();
        for d in 10..20u32 {
            let day = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
            assert_eq!(entry.status_on(day), DayStatus::Absent);
        }
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("none.json")).await.unwrap();
        assert!(store.list_employees("Acme").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::open(&path).await.err().unwrap();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
