//! 全局解析器单例管理
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::OnceCell;
use crate::macros::debug;

use super::detector::UaDetector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{RsuResult, RsuaError};
use crate::rule::{SignatureDatabase, UaInfo};

/// 全局解析器实例
static GLOBAL_DETECTOR: Lazy<OnceCell<UaDetector>> = Lazy::new(OnceCell::new);

/// 初始化全局解析器（默认配置）
pub async fn init_uaparser() -> RsuResult<()> {
    init_uaparser_with_config(ConfigManager::get_default()).await
}

/// 带自定义配置初始化全局解析器
pub async fn init_uaparser_with_config(config: GlobalConfig) -> RsuResult<()> {
    GLOBAL_DETECTOR
        .get_or_try_init(|| UaDetector::new(config))
        .await?;
    Ok(())
}

/// 使用已加载的特征库初始化全局解析器（已初始化时保持不变）
pub fn init_uaparser_with_database(database: Arc<SignatureDatabase>, config: GlobalConfig) -> RsuResult<()> {
    if GLOBAL_DETECTOR.set(UaDetector::from_database(database, config)).is_err() {
        debug!("全局解析器已初始化，忽略重复初始化");
    }
    Ok(())
}

/// 获取全局解析器
pub fn get_global_detector() -> RsuResult<&'static UaDetector> {
    GLOBAL_DETECTOR.get()
        .ok_or(RsuaError::DetectorNotInitialized)
}

/// 使用全局解析器解析 User-Agent
pub fn parse_user_agent(ua: &str) -> RsuResult<UaInfo> {
    Ok(get_global_detector()?.parse(ua))
}
