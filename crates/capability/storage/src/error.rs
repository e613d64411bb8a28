//! 存储层错误类型
//!
//! 定义统一的存储错误类型，用于封装底层错误：
//! - 作用域/租户校验失败
//! - 数据一致性错误
//! - 后端实现自身的失败

#[derive(Debug)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}
