//! Schedule ports - スケジュールの読み取りと書き戻し
//!
//! ホスト型ドキュメントストアの向こう側はここで隠蔽します。
//! Board はこの trait だけを見ます。

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DayStatus, EmployeeId, ScheduleEntry, ScheduleUpdate, StoreError};

/// ScheduleSource は従業員のスケジュールを返す
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// 未登録のキーは `DayStatus::None` として扱われる
    async fn fetch_schedule(&self, employee: &EmployeeId) -> Result<ScheduleEntry, StoreError>;
}

/// ScheduleWriter はスケジュールへの書き込みを永続化する
///
/// # 設計原則
/// - 1 クリック = 1 キーの更新（`write_day`）
/// - 範囲指定は 1 回のバッチ（`write_days`）で、途中まで書かれた状態は残さない
/// - リトライはしない（失敗は呼び出し側へ返す）
#[async_trait]
pub trait ScheduleWriter: Send + Sync {
    /// `DayStatus::None` はキーの削除
    async fn write_day(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
        status: DayStatus,
    ) -> Result<(), StoreError>;

    async fn write_days(
        &self,
        employee: &EmployeeId,
        updates: &[ScheduleUpdate],
    ) -> Result<(), StoreError>;
}
