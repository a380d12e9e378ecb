//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStore**: 開発用・テスト用のストア（全 port を実装）
//! - **JsonFileStore**: JSON ファイルに永続化するストア（CLI 用）
//!
//! ホスト型ドキュメントストアへの接続は別クレートに置く想定です。

pub mod inmem_store;
pub mod json_file;

// 主要な型を再エクスポート
pub use self::inmem_store::{InMemoryStore, StoreSnapshot, WriteRecord};
pub use self::json_file::JsonFileStore;
