//! ScheduleEntry - 従業員ごとのスケジュール（日付 → ステータスの疎なマップ）
//!
//! 保存形式は `{"YYYY-MM-DD": "TT" | "ABSENT" | null}`。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use super::status::DayStatus;
use super::week::WeekWindow;

/// 日付キーの保存形式
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// ScheduleEntry は 1 人分の記録済みステータス
///
/// キーのない日は `DayStatus::None`。マップに `None` は保存しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleEntry {
    days: BTreeMap<NaiveDate, DayStatus>,
}

impl ScheduleEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_on(&self, date: NaiveDate) -> DayStatus {
        self.days.get(&date).copied().unwrap_or_default()
    }

    /// 1 日分を設定（`None` はキーを削除）
    pub fn set(&mut self, date: NaiveDate, status: DayStatus) {
        if status.is_none() {
            self.days.remove(&date);
        } else {
            self.days.insert(date, status);
        }
    }

    pub fn apply(&mut self, updates: &[ScheduleUpdate]) {
        for u in updates {
            self.set(u.date, u.status);
        }
    }

    /// 窓の 7 日分と、その前後 1 日ずつのステータス
    pub fn week_slice(&self, window: &WeekWindow) -> (DayStatus, [DayStatus; 7], DayStatus) {
        let days = window.days().map(|d| self.status_on(d));
        (
            self.status_on(window.day_before()),
            days,
            self.status_on(window.day_after()),
        )
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, DayStatus)> + '_ {
        self.days.iter().map(|(d, s)| (*d, *s))
    }
}

impl FromIterator<(NaiveDate, DayStatus)> for ScheduleEntry {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DayStatus)>>(iter: I) -> Self {
        let mut entry = ScheduleEntry::new();
        for (date, status) in iter {
            entry.set(date, status);
        }
        entry
    }
}

impl Serialize for ScheduleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw: BTreeMap<String, DayStatus> =
            self.days.iter().map(|(d, s)| (date_key(*d), *s)).collect();
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScheduleEntry {
    /// 寛容なデコード: 不正なキーは捨て、`null` や未知の値は `None` として扱う
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, DayStatus> = BTreeMap::deserialize(deserializer)?;
        let mut entry = ScheduleEntry::new();
        for (key, status) in raw {
            match parse_date_key(&key) {
                Some(date) => entry.set(date, status),
                None => tracing::warn!(key = %key, "dropping malformed schedule date key"),
            }
        }
        Ok(entry)
    }
}

/// スケジュールへの 1 キー分の書き込み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl ScheduleUpdate {
    pub fn new(date: NaiveDate, status: DayStatus) -> Self {
        Self { date, status }
    }
}

/// 閉区間 `[start, end]` の各日に 1 件ずつ更新を作る
///
/// `end` が `start` より前なら `None`。暦の末尾で止まる。
pub fn plan_range_fill(
    start: NaiveDate,
    end: NaiveDate,
    status: DayStatus,
) -> Option<Vec<ScheduleUpdate>> {
    if end < start {
        return None;
    }
    Some(
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| ScheduleUpdate::new(day, status))
            .collect(),
    )
}
