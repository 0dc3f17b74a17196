//! 解析器核心：持有只读特征库，对外提供 User-Agent 解析接口
use std::path::Path;
use std::sync::Arc;

use super::classifier::Classifier;
use crate::config::GlobalConfig;
use crate::error::RsuResult;
use crate::rule::{DatabaseLoader, DatabaseUpdater, SignatureDatabase, UaInfo};

/// User-Agent 解析器
///
/// 特征库以 `Arc` 共享，克隆解析器不会复制特征库；
/// 多线程并发解析无需加锁。
#[derive(Debug, Clone)]
pub struct UaDetector {
    database: Arc<SignatureDatabase>,
    config: GlobalConfig,
}

impl UaDetector {
    /// 创建解析器（优先本地缓存，缓存失效则拉取远程）
    pub async fn new(config: GlobalConfig) -> RsuResult<Self> {
        let database = DatabaseUpdater::load_or_update(&config).await?;
        Ok(Self::from_database(Arc::new(database), config))
    }

    /// 创建解析器（先检查远程版本，必要时更新缓存）
    pub async fn with_update(config: GlobalConfig) -> RsuResult<Self> {
        let database = DatabaseUpdater::update(&config).await?;
        Ok(Self::from_database(Arc::new(database), config))
    }

    /// 从 ini 文本创建
    pub fn from_text(text: &str, config: GlobalConfig) -> RsuResult<Self> {
        let database = DatabaseLoader::from_config(&config).load(text)?;
        Ok(Self::from_database(Arc::new(database), config))
    }

    /// 从本地 ini 文件创建
    pub async fn from_file(path: impl AsRef<Path>, config: GlobalConfig) -> RsuResult<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_text(&text, config)
    }

    /// 从已加载的特征库创建
    pub fn from_database(database: Arc<SignatureDatabase>, config: GlobalConfig) -> Self {
        Self { database, config }
    }

    /// 解析单个 User-Agent
    pub fn parse(&self, ua: &str) -> UaInfo {
        Classifier::new(&self.database, &self.config.classifier, ua).classify()
    }

    /// 解析并输出 JSON（仅包含解析出的字段）
    pub fn parse_json(&self, ua: &str) -> RsuResult<String> {
        self.parse(ua).to_json()
    }

    /// 批量解析
    pub fn parse_many<'a, I>(&self, uas: I) -> Vec<UaInfo>
    where
        I: IntoIterator<Item = &'a str>,
    {
        uas.into_iter().map(|ua| self.parse(ua)).collect()
    }

    pub fn database(&self) -> &Arc<SignatureDatabase> {
        &self.database
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }
}
