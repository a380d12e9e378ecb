//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部システム（ドキュメントストア、時計）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - Run renderer と WeekWindow は ports に依存しない（純粋関数）
//! - I/O は全て async trait 経由
//! - Board はスナップショットに対してだけ描画する

pub mod clock;
pub mod directory;
pub mod schedule_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::directory::EmployeeDirectory;
pub use self::schedule_store::{ScheduleSource, ScheduleWriter};
