//! Clock port - 時刻の抽象化
//!
//! Board は「今日」を知る必要があります（今日の列の強調、今週へのジャンプ）。
//! trait にしておくことで、テストでは FixedClock に差し替えられます。

use chrono::{Local, NaiveDate};

/// Clock は今日の日付を提供
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// SystemClock はローカルタイムゾーンの今日を返す（本番用）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// FixedClock は常に同じ日付を返す（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
