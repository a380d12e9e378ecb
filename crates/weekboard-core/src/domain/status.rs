//! DayStatus - 1 人の 1 日分の出勤ステータス

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// テレワークの保存タグ
pub const TELEWORKING_TAG: &str = "TT";

/// 不在の保存タグ
pub const ABSENT_TAG: &str = "ABSENT";

/// DayStatus は 1 日に付く分類
///
/// 保存時にタグを持つのは空でない 2 つだけ。キーなし・`null`・未知のタグは
/// どれも `None` になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayStatus {
    Teleworking,
    Absent,
    #[default]
    None,
}

impl DayStatus {
    /// 保存タグを読む（知らない値は `None` に正規化）
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(TELEWORKING_TAG) => DayStatus::Teleworking,
            Some(ABSENT_TAG) => DayStatus::Absent,
            _ => DayStatus::None,
        }
    }

    /// 保存タグ（空の状態は `None` で、キーを削除する）
    pub fn tag(self) -> Option<&'static str> {
        match self {
            DayStatus::Teleworking => Some(TELEWORKING_TAG),
            DayStatus::Absent => Some(ABSENT_TAG),
            DayStatus::None => None,
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, DayStatus::None)
    }

    /// 編集可能なセルを 1 回クリックした後のステータス
    ///
    /// None -> Teleworking -> Absent -> None
    pub fn cycled(self) -> Self {
        match self {
            DayStatus::None => DayStatus::Teleworking,
            DayStatus::Teleworking => DayStatus::Absent,
            DayStatus::Absent => DayStatus::None,
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            DayStatus::Teleworking => ColorToken::Blue,
            DayStatus::Absent => ColorToken::Pink,
            DayStatus::None => ColorToken::Transparent,
        }
    }

    /// 凡例用の表示名
    pub fn label(self) -> &'static str {
        match self {
            DayStatus::Teleworking => "Teleworking",
            DayStatus::Absent => "Absent",
            DayStatus::None => "None",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.tag() {
            Some(tag) => serializer.serialize_some(tag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DayStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag: Option<String> = Option::deserialize(deserializer)?;
        Ok(DayStatus::from_tag(tag.as_deref()))
    }
}

/// グリッドの固定色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Pink,
    Transparent,
}

impl ColorToken {
    pub fn hex(self) -> Option<&'static str> {
        match self {
            ColorToken::Blue => Some("#1976d2"),
            ColorToken::Pink => Some("#FFAFCC"),
            ColorToken::Transparent => None,
        }
    }
}
