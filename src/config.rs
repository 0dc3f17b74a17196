//! 全局配置管理,存储所有可配置项
//! 以显式结构体传入加载器/更新器/解析器，不依赖任何全局状态

use std::path::PathBuf;
use url::Url;

use crate::error::RsuResult;

/// UAS 官方特征库下载地址（ini 格式）
pub const DEFAULT_DATA_URL: &str = "http://user-agent-string.info/rpc/get_data.php?key=free&format=ini";
/// UAS 官方特征库版本查询地址
pub const DEFAULT_VERSION_URL: &str = "http://user-agent-string.info/rpc/get_data.php?key=free&format=ini&ver=y";

/// 设备兜底ID（无设备正则命中时按浏览器类型推断）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFallback {
    /// 通用 "Other"：Other / Library / Validator / Useragent Anonymizer
    pub other: u64,
    /// 桌面 "Browser"：其余所有类型
    pub browser: u64,
    /// "Mobile"：Mobile Browser / Wap Browser
    pub mobile: u64,
}

impl Default for DeviceFallback {
    fn default() -> Self {
        Self {
            other: 1,
            browser: 2,
            mobile: 3,
        }
    }
}

/// 分类器配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub fallback: DeviceFallback,
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 特征库缓存路径
    pub cache_path: PathBuf,
    // 特征库下载地址
    pub data_url: String,
    // 版本查询地址
    pub version_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 严格模式：分区外的数据行直接报错
    pub strict_sections: bool,
    // 分类器配置
    pub classifier: ClassifierConfig,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from("uas_database.mp"),
            data_url: DEFAULT_DATA_URL.to_string(),
            version_url: DEFAULT_VERSION_URL.to_string(),
            http_timeout: 30,
            strict_sections: false,
            classifier: ClassifierConfig::default(),
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 未设置 `RUST_LOG` 时使用的日志过滤指令
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "rsuaparser=debug"
        } else {
            "rsuaparser=warn"
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn cache_path(mut self, path: PathBuf) -> Self {
        self.config.cache_path = path;
        self
    }

    pub fn data_url(mut self, url: String) -> Self {
        self.config.data_url = url;
        self
    }

    pub fn version_url(mut self, url: String) -> Self {
        self.config.version_url = url;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn strict_sections(mut self, strict: bool) -> Self {
        self.config.strict_sections = strict;
        self
    }

    pub fn device_fallback(mut self, fallback: DeviceFallback) -> Self {
        self.config.classifier.fallback = fallback;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// 构建配置（校验两个远程地址）
    pub fn build(self) -> RsuResult<GlobalConfig> {
        Url::parse(&self.config.data_url)?;
        Url::parse(&self.config.version_url)?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsuaError;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.http_timeout, 30);
        assert!(!config.strict_sections);
        assert_eq!(config.classifier.fallback, DeviceFallback { other: 1, browser: 2, mobile: 3 });
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigManager::custom()
            .cache_path(PathBuf::from("/tmp/uas.mp"))
            .http_timeout(5)
            .strict_sections(true)
            .device_fallback(DeviceFallback { other: 10, browser: 20, mobile: 30 })
            .build()
            .unwrap();

        assert_eq!(config.cache_path, PathBuf::from("/tmp/uas.mp"));
        assert_eq!(config.http_timeout, 5);
        assert!(config.strict_sections);
        assert_eq!(config.classifier.fallback.mobile, 30);
    }

    #[test]
    fn test_verbose_controls_log_directive() {
        assert_eq!(ConfigManager::get_default().log_directive(), "rsuaparser=warn");

        let config = ConfigManager::custom().verbose(true).build().unwrap();
        assert!(config.verbose);
        assert_eq!(config.log_directive(), "rsuaparser=debug");
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = ConfigManager::custom().data_url("not a url".to_string()).build();
        assert!(matches!(result, Err(RsuaError::UrlError(_))));
    }
}
