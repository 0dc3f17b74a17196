//! 特征库缓存管理
//! 仅处理特征库原文与版本号的本地序列化（MessagePack）和反序列化
//! 编译后的正则不落盘，读取缓存后重新加载

use rmp_serde::{Serializer, from_slice};
use serde::{Deserialize, Serialize};
use crate::macros::debug;

use crate::error::{RsuResult, RsuaError};
use crate::config::GlobalConfig;

/// 缓存内容：特征库版本 + ini 原文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedDatabase {
    pub version: Option<String>,
    pub text: String,
}

/// 特征库缓存管理器
pub struct DatabaseCacheManager;

impl DatabaseCacheManager {
    /// 从本地缓存读取
    pub async fn load_from_cache(config: &GlobalConfig) -> RsuResult<CachedDatabase> {
        let cache_data = tokio::fs::read(&config.cache_path).await?;

        // MessagePack反序列化
        let cached: CachedDatabase = from_slice(&cache_data)
            .map_err(|e| RsuaError::DatabaseCacheError(format!("反序列化失败：{}", e)))?;

        debug!(
            "缓存文件反序列化成功，版本：{:?}，原文大小：{} 字节",
            cached.version,
            cached.text.len()
        );

        Ok(cached)
    }

    /// 将特征库原文缓存到本地
    pub async fn save_to_cache(config: &GlobalConfig, cached: &CachedDatabase) -> RsuResult<()> {
        let mut cache_data = Vec::new();

        // MessagePack序列化
        cached
            .serialize(&mut Serializer::new(&mut cache_data))
            .map_err(|e| RsuaError::DatabaseCacheError(format!("序列化失败：{}", e)))?;

        debug!("特征库序列化成功，序列化后数据大小：{} 字节", cache_data.len());

        tokio::fs::write(&config.cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(config: &GlobalConfig) -> RsuResult<()> {
        if tokio::fs::try_exists(&config.cache_path).await? {
            tokio::fs::remove_file(&config.cache_path).await?;
        }
        Ok(())
    }
}
