//! Session - 認証済みユーザーのコンテキスト
//!
//! グローバル状態ではなく、明示的に Board へ渡します。

use serde::{Deserialize, Serialize};

use super::directory::Role;
use super::ids::EmployeeId;

/// Session は「誰が」「どの会社を」見ているかを表す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: EmployeeId,
    pub role: Role,
    pub company: String,
}

impl Session {
    pub fn new(user_id: EmployeeId, role: Role, company: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            company: company.into(),
        }
    }

    /// 自分の行だけが編集可能
    pub fn owns(&self, employee: &EmployeeId) -> bool {
        &self.user_id == employee
    }
}
