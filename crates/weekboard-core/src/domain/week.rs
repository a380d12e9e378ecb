//! WeekWindow - ボードに表示する 7 日間（月曜〜日曜）
//!
//! 窓の外側の 2 日（前の日曜・次の月曜）も構築時に確定させます。
//! 暦の端（`NaiveDate::MIN` / `MAX` 付近）で 9 日分が取れない週は作れません。

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// 月曜始まりの 7 日間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeekWindow {
    day_before: NaiveDate,
    days: [NaiveDate; 7],
    day_after: NaiveDate,
}

impl WeekWindow {
    /// `anchor` を含む週（ISO 週）
    ///
    /// 窓と前後 1 日が暦に収まらなければ `None`。
    pub fn containing(anchor: NaiveDate) -> Option<Self> {
        let offset = u64::from(anchor.weekday().num_days_from_monday());
        Self::starting(anchor.checked_sub_days(Days::new(offset))?)
    }

    fn starting(monday: NaiveDate) -> Option<Self> {
        let day_before = monday.checked_sub_days(Days::new(1))?;
        let day_after = monday.checked_add_days(Days::new(7))?;
        let mut days = [monday; 7];
        for (i, day) in days.iter_mut().enumerate().skip(1) {
            *day = monday.checked_add_days(Days::new(i as u64))?;
        }
        Some(Self {
            day_before,
            days,
            day_after,
        })
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn sunday(&self) -> NaiveDate {
        self.days[6]
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        self.days
    }

    /// 窓の直前の日曜（先頭セルの左隣）
    pub fn day_before(&self) -> NaiveDate {
        self.day_before
    }

    /// 窓の直後の月曜（末尾セルの右隣）
    pub fn day_after(&self) -> NaiveDate {
        self.day_after
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday() && date <= self.sunday()
    }

    /// 次の週。暦の端を越える場合は `None`
    pub fn next(&self) -> Option<Self> {
        Self::starting(self.day_after)
    }

    /// 前の週。暦の端を越える場合は `None`
    pub fn previous(&self) -> Option<Self> {
        Self::starting(self.monday().checked_sub_days(Days::new(7))?)
    }

    /// 見出し（例: `4 Mar - 10 Mar 2024`）
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.monday().format("%-d %b"),
            self.sunday().format("%-d %b %Y")
        )
    }
}
