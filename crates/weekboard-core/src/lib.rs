//! weekboard-core
//!
//! 週間出勤ボードのコア部品
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（status, run, week, schedule, directory, session, errors）
//! - **ports**: 抽象化レイヤー（ScheduleSource, ScheduleWriter, EmployeeDirectory, Clock）
//! - **app**: アプリケーションロジック（builder, board, grid）
//! - **impls**: 実装（InMemoryStore, JsonFileStore）
//! - **config**: 設定ファイルと環境変数の読み込み

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
