//! ターミナル向けのテキスト表示
//!
//! CellStyle の幅・寄せ・角をそのまま文字に落とします。

use std::fmt::{self, Write};

use weekboard_core::app::{BoardView, EmployeeRow};
use weekboard_core::domain::{Alignment, CellStyle, DayStatus};

const NAME_WIDTH: usize = 18;
const CELL_WIDTH: usize = 8;

fn fill_char(status: DayStatus) -> char {
    match status {
        DayStatus::Teleworking => '=',
        DayStatus::Absent => '#',
        DayStatus::None => ' ',
    }
}

/// 1 セル分の文字列（丸い角は `(` と `)`）
pub fn cell_text(status: DayStatus, style: &CellStyle) -> String {
    let len = CELL_WIDTH * usize::from(style.width_percent) / 100;
    if len == 0 {
        return " ".repeat(CELL_WIDTH);
    }
    let mut bar: Vec<char> = vec![fill_char(status); len];
    if style.corners.top_leading {
        bar[0] = '(';
    }
    if style.corners.top_trailing {
        bar[len - 1] = ')';
    }
    let bar: String = bar.into_iter().collect();

    let pad = CELL_WIDTH - len;
    match style.alignment {
        Alignment::Start => format!("{bar}{}", " ".repeat(pad)),
        Alignment::End => format!("{}{bar}", " ".repeat(pad)),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{bar}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}

fn row_line(row: &EmployeeRow) -> String {
    let marker = if row.editable { '*' } else { ' ' };
    let mut line = format!("{marker}{:<width$}|", row.display_name, width = NAME_WIDTH - 1);
    for cell in &row.cells {
        line.push_str(&cell_text(cell.status, &cell.style));
        line.push('|');
    }
    line
}

/// ボード全体をテキストにする（見出し・曜日ヘッダ・カテゴリごとの行・凡例）
pub fn board_text(view: &BoardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", view.label)?;

    write!(out, "{:<width$}|", "", width = NAME_WIDTH)?;
    for column in &view.columns {
        let today = if column.is_today { "*" } else { "" };
        let day = format!("{}{}", column.date.format("%a %d"), today);
        write!(out, "{day:^width$}|", width = CELL_WIDTH)?;
    }
    writeln!(out)?;

    for group in &view.groups {
        writeln!(out, "-- {} --", group.name)?;
        for row in &group.rows {
            writeln!(out, "{}", row_line(row))?;
        }
    }
    writeln!(
        out,
        "legend: '=' {} ({})  '#' {} ({})  (* = you / today)",
        DayStatus::Teleworking,
        DayStatus::Teleworking.color().hex().unwrap_or_default(),
        DayStatus::Absent,
        DayStatus::Absent.color().hex().unwrap_or_default(),
    )?;
    Ok(out)
}
