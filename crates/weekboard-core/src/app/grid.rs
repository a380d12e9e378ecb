//! Grid - 週間ボードのレイアウト
//!
//! 取得済みのスナップショットから表示用の BoardView を組み立てる純粋関数です。
//! 各セルは窓の外の 2 日を含む実際の隣接日とともに [`render_cell`] を通ります。
//!
//! [`render_cell`]: crate::domain::render_cell

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{
    CategoryIndex, CellStyle, DayStatus, Employee, EmployeeId, Session, UNCATEGORIZED,
    WeekWindow, render_row,
};

/// 1 日分の列見出し
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    pub employee_id: EmployeeId,
    pub display_name: String,
    /// クリックに反応するのはログイン中のユーザー自身の行だけ
    pub editable: bool,
    pub cells: [RenderedCell; 7],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub rows: Vec<EmployeeRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub label: String,
    pub window: WeekWindow,
    pub columns: [DayColumn; 7],
    pub groups: Vec<CategoryGroup>,
}

impl BoardView {
    pub fn rows(&self) -> impl Iterator<Item = &EmployeeRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    pub fn row(&self, employee: &EmployeeId) -> Option<&EmployeeRow> {
        self.rows().find(|r| &r.employee_id == employee)
    }

    /// 今日の列の位置（今日が窓の外なら `None`）
    pub fn today_column(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.is_today)
    }
}

pub fn render_employee_row(
    employee: &Employee,
    window: &WeekWindow,
    session: &Session,
) -> EmployeeRow {
    let (before, days, after) = employee.schedule.week_slice(window);
    let styles = render_row(before, &days, after);
    let dates = window.days();
    EmployeeRow {
        employee_id: employee.id.clone(),
        display_name: employee.display_name(),
        editable: session.owns(&employee.id),
        cells: std::array::from_fn(|i| RenderedCell {
            date: dates[i],
            status: days[i],
            style: styles[i],
        }),
    }
}

/// ボード全体を組み立てる
///
/// グループは [`UNCATEGORIZED`] を先頭に、残りは大文字小文字を区別しない名前順。
/// 行は `employees` の順を保つ。`category_filter` を指定すると 1 グループだけ残す。
pub fn build_view(
    window: WeekWindow,
    today: NaiveDate,
    session: &Session,
    employees: &[Employee],
    index: &CategoryIndex,
    category_filter: Option<&str>,
) -> BoardView {
    // (小文字化した名前, 元の名前) をキーにする
    let mut named: BTreeMap<(String, &str), Vec<EmployeeRow>> = BTreeMap::new();
    let mut uncategorized = Vec::new();

    for employee in employees {
        let category = index.category_name(employee.position_id.as_ref());
        if category_filter.is_some_and(|f| f != category) {
            continue;
        }
        let row = render_employee_row(employee, &window, session);
        if category == UNCATEGORIZED {
            uncategorized.push(row);
        } else {
            named
                .entry((category.to_lowercase(), category))
                .or_default()
                .push(row);
        }
    }

    let mut groups = Vec::with_capacity(named.len() + 1);
    if !uncategorized.is_empty() {
        groups.push(CategoryGroup {
            name: UNCATEGORIZED.to_string(),
            rows: uncategorized,
        });
    }
    groups.extend(named.into_iter().map(|((_, name), rows)| CategoryGroup {
        name: name.to_string(),
        rows,
    }));

    let columns = window.days().map(|date| DayColumn {
        date,
        is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        is_today: date == today,
    });

    BoardView {
        label: window.label(),
        window,
        columns,
        groups,
    }
}
