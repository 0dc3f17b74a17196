//! 检测模块：User-Agent 分类核心逻辑
pub mod classifier;
pub mod detector;
pub mod global;

// 导出核心接口
pub use self::classifier::{BrowserMatch, Classifier, ROBOT_TYPE, fallback_device_id};
pub use self::detector::UaDetector;
pub use self::global::{
    get_global_detector, init_uaparser, init_uaparser_with_config, init_uaparser_with_database,
    parse_user_agent,
};
