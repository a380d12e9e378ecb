//! EmployeeDirectory port - 従業員・職位・カテゴリの読み取り
//!
//! 作成・編集・削除はこのクレートの範囲外です（読み取り専用）。

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, JobCategory, JobPosition, StoreError};

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// 会社に所属する従業員（スケジュール込み）を返す
    async fn list_employees(&self, company: &str) -> Result<Vec<Employee>, StoreError>;

    /// ログイン中のユーザー自身のレコード（見つからなければ `StoreError::NotFound`）
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, StoreError>;

    async fn list_positions(&self) -> Result<Vec<JobPosition>, StoreError>;

    async fn list_categories(&self) -> Result<Vec<JobCategory>, StoreError>;
}
