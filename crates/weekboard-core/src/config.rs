//! Config - 設定（weekboard.toml と WEEKBOARD_* 環境変数）

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "weekboard.toml";
pub const DEFAULT_DATA_FILE: &str = "weekboard.json";
pub const DEFAULT_LOG_FILTER: &str = "weekboard=info,weekboard_core=info";

#[derive(Debug, thiserror::Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// ファイルストアが使う JSON スナップショット
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// ログインするユーザー（CLI の指定が優先）
    #[serde(default)]
    pub user_id: Option<String>,
    /// RUST_LOG が未設定のときのログフィルタ
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            user_id: None,
            log_filter: default_log_filter(),
        }
    }
}

impl BoardConfig {
    /// 既定値 → TOML ファイル（あれば）→ `WEEKBOARD_*` 環境変数の順に重ねる
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError(e.to_string()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(BoardConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("WEEKBOARD_"))
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
