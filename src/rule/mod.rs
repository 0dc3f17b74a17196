//! 规则模块：负责特征库的数据模型、加载、缓存与更新
pub mod model;
pub mod result;
pub mod loader;
pub mod cache;
pub mod remote;
pub mod updater;

// 导出核心接口
pub use self::model::{
    DatabaseStats, PatternEntry, PatternSection, RecordSection, Section, SignatureDatabase,
};
pub use self::result::{UaField, UaInfo};
pub use self::loader::DatabaseLoader;
pub use self::cache::{CachedDatabase, DatabaseCacheManager};
pub use self::remote::RemoteFetcher;
pub use self::updater::{DatabaseUpdater, UpdatePlan};
