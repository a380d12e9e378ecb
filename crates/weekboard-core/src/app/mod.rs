//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **BoardBuilder**: Board の構築とワイヤリング
//! - **Board**: スナップショット・週の移動・クリック・期間入力
//! - **grid**: スナップショットから表示用のビューを作る（純粋関数）

pub mod board;
pub mod builder;
pub mod grid;

// 主要な型を再エクスポート
pub use self::board::{Board, sign_in};
pub use self::builder::{BoardBuilder, BuildError};
pub use self::grid::{BoardView, CategoryGroup, DayColumn, EmployeeRow, RenderedCell};
