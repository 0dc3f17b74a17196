//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RsuaError {
    // 特征库相关错误
    #[error("无效的正则模式 `{pattern}`：{reason}")]
    InvalidPatternError { pattern: String, reason: String },
    #[error("特征库格式错误 [{section}]{}：{reason}", key_suffix(.key))]
    DatabaseFormatError {
        section: String,
        key: Option<u64>,
        reason: String,
    },
    #[error("特征库加载失败：{0}")]
    DatabaseLoadError(String),
    #[error("特征库缓存失败：{0}")]
    DatabaseCacheError(String),

    // 检测相关错误
    #[error("解析器未初始化")]
    DetectorNotInitialized,

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl RsuaError {
    /// 构造特征库格式错误
    pub(crate) fn format(section: &str, key: Option<u64>, reason: impl Into<String>) -> Self {
        RsuaError::DatabaseFormatError {
            section: section.to_string(),
            key,
            reason: reason.into(),
        }
    }
}

fn key_suffix(key: &Option<u64>) -> String {
    match key {
        Some(k) => format!(" 键 {}", k),
        None => String::new(),
    }
}

// 全局Result类型
pub type RsuResult<T> = Result<T, RsuaError>;
