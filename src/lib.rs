//! rsuaparser - 基于 user-agent-string.info 特征库的 User-Agent 解析工具
//!
//! ```no_run
//! use rsuaparser::{ConfigManager, UaDetector, UaField};
//!
//! # async fn demo() -> rsuaparser::RsuResult<()> {
//! let detector = UaDetector::new(ConfigManager::get_default()).await?;
//! let info = detector.parse("Mozilla/5.0 (Windows NT 10.0) Chrome/91.0.4472.124");
//! println!("{:?}", info.get(UaField::UaName));
//! # Ok(())
//! # }
//! ```

// 导出全局错误类型
pub use self::error::{RsuaError, RsuResult};

// 导出配置模块
pub use self::config::{
    ClassifierConfig, ConfigManager, CustomConfigBuilder, DeviceFallback, GlobalConfig,
};

// 导出规则模块核心接口
pub use self::rule::{
    CachedDatabase, DatabaseCacheManager, DatabaseLoader, DatabaseStats, DatabaseUpdater,
    PatternEntry, PatternSection, RecordSection, RemoteFetcher, Section, SignatureDatabase,
    UaField, UaInfo, UpdatePlan,
};

// 导出编译模块核心接口
pub use self::compiler::{CompiledPattern, PatternCompiler, PatternSpec};

// 导出检测模块核心接口
pub use self::detector::{
    BrowserMatch, Classifier, UaDetector,
    get_global_detector,
    init_uaparser,
    init_uaparser_with_config,
    init_uaparser_with_database,
    parse_user_agent,
};

// 声明所有子模块
mod macros;
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;

#[cfg(test)]
pub(crate) mod testdata;
