//! 特征串编解码
//!
//! 单个存储列承载任意形状的属性集：编码器把类型化属性包压成
//! `"Label: value | ..."` 令牌串，解码器按模式键提取还原。
//!
//! 设计约束：
//! - 编码按模式声明顺序写出；解码按键提取，不依赖顺序
//! - 解码对任何输入都不报错（缺失/截断/乱序 => 尽力提取）
//! - 未声明的键与令牌静默跳过并计数（见 pvsr-telemetry）

mod decode;
mod encode;
mod text;

pub use decode::decode;
pub use encode::{encode, ensure_no_delimiter};

/// 子句分隔符。值内不得出现该序列，编码器会净化冲突。
pub const DELIMITER: &str = " | ";

/// 编码校验错误。
///
/// 仅在调用方主动选择严格模式时出现；默认路径净化后继续。
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("value for `{0}` contains the clause delimiter")]
    DelimiterCollision(String),
}
