use crate::adapters::clock::{FixedClock, SystemClock};
use crate::ports::Clock;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// ログフィルタの既定値（`RUST_LOG`が未設定の場合に使用）
pub const DEFAULT_LOG_FILTER: &str = "library_lending=debug";

/// 設定のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `LIBRARY_TODAY`が`YYYY-MM-DD`として解釈できない
    #[error("LIBRARY_TODAY must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidToday {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// 起動時の設定
///
/// 環境変数から読み込む：
/// - `LIBRARY_LOG_FILTER`: `RUST_LOG`未設定時のログフィルタ
/// - `LIBRARY_TODAY`: 今日の日付の上書き（`YYYY-MM-DD`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_log_filter: String,
    pub today_override: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_log_filter =
            lookup("LIBRARY_LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let today_override = lookup("LIBRARY_TODAY")
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|source| ConfigError::InvalidToday { value, source })
            })
            .transpose()?;

        Ok(Self {
            default_log_filter,
            today_override,
        })
    }

    /// 設定に応じた時計
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today_override {
            Some(today) => Arc::new(FixedClock(today)),
            None => Arc::new(SystemClock),
        }
    }
}
