//! Directory - 従業員・職位・カテゴリのレコード
//!
//! ボードは行の表示名とグループ分けのためにこれらを読むだけで、
//! 作成や編集はしません。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

use super::ids::{CategoryId, EmployeeId, PositionId};
use super::schedule::ScheduleEntry;

/// 職位やカテゴリが解決できないときのグループ名
pub const UNCATEGORIZED: &str = "Uncategorized";

/// ユーザーの権限（"1" / "2" / "3" で保存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Role {
    #[default]
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "2" => Role::Manager,
            "3" => Role::Admin,
            _ => Role::Employee,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Role::Employee => "1",
            Role::Manager => "2",
            Role::Admin => "3",
        }
    }

    /// マネージャーと管理者は管理タブを見られる
    pub fn can_manage(self) -> bool {
        self > Role::Employee
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // 文字列で保存されるが、古いレコードには数値のものがある
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }
        let role = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Text(s)) => Role::from_tag(&s),
            Some(Raw::Number(n)) => Role::from_tag(&n.to_string()),
            None => Role::Employee,
        };
        Ok(role)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<PositionId>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub schedule: ScheduleEntry,
}

impl Employee {
    /// `First L.` 形式（姓がなければイニシャルは付けない）
    pub fn display_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}.", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosition {
    pub id: PositionId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

/// 従業員のカテゴリ名を引くための表
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    positions: HashMap<PositionId, JobPosition>,
    categories: HashMap<CategoryId, JobCategory>,
}

impl CategoryIndex {
    pub fn new(positions: Vec<JobPosition>, categories: Vec<JobCategory>) -> Self {
        Self {
            positions: positions.into_iter().map(|p| (p.id.clone(), p)).collect(),
            categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// 職位 -> カテゴリ -> 名前。どこかで引けなければ [`UNCATEGORIZED`]
    pub fn category_name(&self, position: Option<&PositionId>) -> &str {
        position
            .and_then(|p| self.positions.get(p))
            .and_then(|p| p.category_id.as_ref())
            .and_then(|c| self.categories.get(c))
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNCATEGORIZED)
    }
}
