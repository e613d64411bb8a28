//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 特征值含分隔符时保存接口是否硬拒绝（默认净化后继续）
    pub strict_characteristics: bool,
    /// 单次保存接受的最大设备记录数（防御畸形提交）
    pub max_records_per_save: usize,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("PVSR_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let strict_characteristics = read_bool_with_default("PVSR_STRICT_CHARACTERISTICS", false);
        let max_records_per_save = read_usize_with_default("PVSR_MAX_RECORDS_PER_SAVE", 500)?;

        Ok(Self {
            http_addr,
            strict_characteristics,
            max_records_per_save,
        })
    }
}

fn read_usize_with_default(key: &str, default: usize) -> Result<usize, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
