//! Run renderer - 1 日のステータスと両隣から、セルに描くバーの形を決める
//!
//! 同じステータスが続く日は 1 本の角丸バーにつながります。
//!
//! ```text
//!   Mon      Tue      Wed      Thu
//! [  (####][########][####)  ][ (##) ]
//!    Start   Interior    End    Isolated
//! ```
//!
//! 暦やストアは知りません。3 つの `DayStatus` に対する全域関数なので、
//! 描画のたびに表示中の全セルで呼んで構いません。

use serde::{Deserialize, Serialize};

use super::status::{ColorToken, DayStatus};

/// 同じステータスの連なり（run）の中での位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunShape {
    /// 記録なし
    Empty,
    /// 両隣と異なる
    Isolated,
    /// run の先頭
    Start,
    /// run の末尾
    End,
    /// 両隣も同じステータス
    Interior,
}

impl RunShape {
    /// 1 日を分類する（見るのは当日と両隣だけ）
    pub fn classify(status: DayStatus, prev: DayStatus, next: DayStatus) -> Self {
        if status.is_none() {
            return RunShape::Empty;
        }
        match (status == prev, status == next) {
            (false, false) => RunShape::Isolated,
            (false, true) => RunShape::Start,
            (true, false) => RunShape::End,
            (true, true) => RunShape::Interior,
        }
    }

    pub fn width_percent(self) -> u8 {
        match self {
            RunShape::Empty => 0,
            RunShape::Isolated => 50,
            RunShape::Start | RunShape::End => 75,
            RunShape::Interior => 100,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            // 先頭は翌日側へ、末尾は前日側へ寄せる
            RunShape::Start => Alignment::End,
            RunShape::End => Alignment::Start,
            RunShape::Empty | RunShape::Isolated | RunShape::Interior => Alignment::Center,
        }
    }

    pub fn corners(self) -> Corners {
        match self {
            RunShape::Empty | RunShape::Interior => Corners::NONE,
            RunShape::Isolated => Corners::ALL,
            RunShape::Start => Corners::LEADING,
            RunShape::End => Corners::TRAILING,
        }
    }
}

/// セル内でのバーの横位置（読む方向基準）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// 先頭側に寄せる
    Start,
    Center,
    /// 末尾側に寄せる
    End,
}

/// バーのどの角を丸めるか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corners {
    pub top_leading: bool,
    pub top_trailing: bool,
    pub bottom_trailing: bool,
    pub bottom_leading: bool,
}

impl Corners {
    pub const NONE: Corners = Corners::new(false, false, false, false);
    pub const ALL: Corners = Corners::new(true, true, true, true);
    pub const LEADING: Corners = Corners::new(true, false, false, true);
    pub const TRAILING: Corners = Corners::new(false, true, true, false);

    /// 左上から時計回り（CSS の `border-radius` と同じ順）
    pub const fn new(
        top_leading: bool,
        top_trailing: bool,
        bottom_trailing: bool,
        bottom_leading: bool,
    ) -> Self {
        Self {
            top_leading,
            top_trailing,
            bottom_trailing,
            bottom_leading,
        }
    }

    pub fn is_square(self) -> bool {
        self == Corners::NONE
    }
}

/// 1 セル分の描画情報
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellStyle {
    pub shape: RunShape,
    pub color: ColorToken,
    pub width_percent: u8,
    pub alignment: Alignment,
    pub corners: Corners,
}

impl CellStyle {
    pub fn is_visible(&self) -> bool {
        self.width_percent > 0
    }
}

/// 当日と前後の日のステータスから 1 セルを描画する
pub fn render_cell(status: DayStatus, prev: DayStatus, next: DayStatus) -> CellStyle {
    let shape = RunShape::classify(status, prev, next);
    CellStyle {
        shape,
        color: status.color(),
        width_percent: shape.width_percent(),
        alignment: shape.alignment(),
        corners: shape.corners(),
    }
}

/// 1 週間分（7 セル）を描画する
///
/// `before` / `after` は窓のすぐ外の日のステータス。窓の端をまたぐ run は
/// 続きとして描かれる。
pub fn render_row(before: DayStatus, days: &[DayStatus; 7], after: DayStatus) -> [CellStyle; 7] {
    std::array::from_fn(|i| {
        let prev = if i == 0 { before } else { days[i - 1] };
        let next = if i == 6 { after } else { days[i + 1] };
        render_cell(days[i], prev, next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use crate::domain::DayStatus::{Absent as A, None as N, Teleworking as T};

    #[rstest]
    // None は両隣に関係なく何も描かない
    #[case(N, N, N, RunShape::Empty)]
    #[case(N, N, T, RunShape::Empty)]
    #[case(N, N, A, RunShape::Empty)]
    #[case(N, T, N, RunShape::Empty)]
    #[case(N, T, T, RunShape::Empty)]
    #[case(N, T, A, RunShape::Empty)]
    #[case(N, A, N, RunShape::Empty)]
    #[case(N, A, T, RunShape::Empty)]
    #[case(N, A, A, RunShape::Empty)]
    // テレワーク
    #[case(T, N, N, RunShape::Isolated)]
    #[case(T, N, T, RunShape::Start)]
    #[case(T, N, A, RunShape::Isolated)]
    #[case(T, T, N, RunShape::End)]
    #[case(T, T, T, RunShape::Interior)]
    #[case(T, T, A, RunShape::End)]
    #[case(T, A, N, RunShape::Isolated)]
    #[case(T, A, T, RunShape::Start)]
    #[case(T, A, A, RunShape::Isolated)]
    // 不在
    #[case(A, N, N, RunShape::Isolated)]
    #[case(A, N, T, RunShape::Isolated)]
    #[case(A, N, A, RunShape::Start)]
    #[case(A, T, N, RunShape::Isolated)]
    #[case(A, T, T, RunShape::Isolated)]
    #[case(A, T, A, RunShape::Start)]
    #[case(A, A, N, RunShape::End)]
    #[case(A, A, T, RunShape::End)]
    #[case(A, A, A, RunShape::Interior)]
    fn every_combination_matches_the_table(
        #[case] status: DayStatus,
        #[case] prev: DayStatus,
        #[case] next: DayStatus,
        #[case] expected: RunShape,
    ) {
        let cell = render_cell(status, prev, next);
        assert_eq!(cell.shape, expected);
        assert_eq!(cell.color, status.color());

        let (width, alignment, corners) = match expected {
            RunShape::Empty => (0, Alignment::Center, Corners::NONE),
            RunShape::Isolated => (50, Alignment::Center, Corners::ALL),
            RunShape::Start => (75, Alignment::End, Corners::new(true, false, false, true)),
            RunShape::End => (75, Alignment::Start, Corners::new(false, true, true, false)),
            RunShape::Interior => (100, Alignment::Center, Corners::NONE),
        };
        assert_eq!(cell.width_percent, width);
        assert_eq!(cell.alignment, alignment);
        assert_eq!(cell.corners, corners);

        // 同じ入力なら同じ出力
        assert_eq!(render_cell(status, prev, next), cell);
    }

    #[test]
    fn long_run_is_start_interiors_end() {
        for k in 3..=7usize {
            let mut days = [N; 7];
            for d in days.iter_mut().take(k) {
                *d = A;
            }
            let row = render_row(N, &days, N);
            assert_eq!(row[0].shape, RunShape::Start);
            for cell in &row[1..k - 1] {
                assert_eq!(cell.shape, RunShape::Interior);
                assert_eq!(cell.width_percent, 100);
                assert!(cell.corners.is_square());
            }
            assert_eq!(row[k - 1].shape, RunShape::End);
        }
    }

    #[test]
    fn boundary_week_scenario() {
        // 月 TT, 火 TT, 水 -, 木 ABSENT, 残りは空
        let days = [T, T, N, A, N, N, N];
        let row = render_row(N, &days, N);

        assert_eq!(row[0].shape, RunShape::Start);
        assert_eq!(row[0].width_percent, 75);
        assert_eq!(row[0].corners, Corners::LEADING);
        assert_eq!(row[1].shape, RunShape::End);
        assert_eq!(row[1].width_percent, 75);
        assert_eq!(row[1].corners, Corners::TRAILING);
        assert!(!row[2].is_visible());
        assert_eq!(row[3].shape, RunShape::Isolated);
        assert_eq!(row[3].alignment, Alignment::Center);
        assert_eq!(row[3].corners, Corners::ALL);
        for cell in &row[4..] {
            assert!(!cell.is_visible());
        }
    }

    #[test]
    fn single_absent_day_is_a_pink_capsule() {
        let cell = render_cell(A, N, N);
        assert_eq!(cell.shape, RunShape::Isolated);
        assert_eq!(cell.width_percent, 50);
        assert_eq!(cell.alignment, Alignment::Center);
        assert_eq!(cell.corners, Corners::ALL);
        assert_eq!(cell.color, ColorToken::Pink);
    }

    #[test]
    fn runs_crossing_the_window_edges_continue() {
        let days = [T, N, N, N, N, N, A];
        let row = render_row(T, &days, A);
        assert_eq!(row[0].shape, RunShape::End);
        assert_eq!(row[6].shape, RunShape::Start);
    }
}
