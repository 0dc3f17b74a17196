//! 特征库更新管理器
//! 负责版本检查：远程版本与缓存一致时复用缓存，否则重新下载并写入缓存

use crate::macros::{debug, info, warn};

use super::cache::{CachedDatabase, DatabaseCacheManager};
use super::loader::DatabaseLoader;
use super::model::SignatureDatabase;
use super::remote::RemoteFetcher;
use crate::config::GlobalConfig;
use crate::error::RsuResult;

/// 更新决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePlan {
    /// 缓存版本与远程一致（或远程不可达），直接使用缓存
    UseCache,
    /// 需要重新下载
    Download,
}

impl UpdatePlan {
    /// `remote_version` 为 None 表示版本查询失败
    pub fn decide(cached: Option<&CachedDatabase>, remote_version: Option<&str>) -> Self {
        match (cached, remote_version) {
            (Some(cached), Some(remote)) if cached.version.as_deref() == Some(remote) => UpdatePlan::UseCache,
            (Some(_), None) => UpdatePlan::UseCache,
            _ => UpdatePlan::Download,
        }
    }
}

/// 特征库更新管理器
pub struct DatabaseUpdater;

impl DatabaseUpdater {
    /// 缓存优先加载，缓存缺失或损坏时执行更新
    pub async fn load_or_update(config: &GlobalConfig) -> RsuResult<SignatureDatabase> {
        let loader = DatabaseLoader::from_config(config);
        match DatabaseCacheManager::load_from_cache(config).await {
            Ok(cached) => match Self::load_cached(&loader, cached) {
                Ok(db) => {
                    debug!("从本地缓存加载特征库成功");
                    return Ok(db);
                }
                Err(e) => warn!("本地缓存特征库无法解析：{}，将重新下载", e),
            },
            Err(e) => warn!("本地缓存不存在或损坏：{}，将拉取远程特征库", e),
        }

        Self::update(config).await
    }

    /// 检查远程版本并在需要时更新
    ///
    /// 版本查询失败时有缓存则使用缓存，无缓存时直接尝试下载
    pub async fn update(config: &GlobalConfig) -> RsuResult<SignatureDatabase> {
        let loader = DatabaseLoader::from_config(config);
        let fetcher = RemoteFetcher::new(config)?;
        let cached = DatabaseCacheManager::load_from_cache(config).await.ok();

        let remote_version = match fetcher.fetch_version().await {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("远程版本查询失败：{}", e);
                None
            }
        };

        if let Some(cached) = cached {
            if UpdatePlan::decide(Some(&cached), remote_version.as_deref()) == UpdatePlan::UseCache {
                match Self::load_cached(&loader, cached) {
                    Ok(db) => {
                        debug!("使用本地缓存特征库，远程版本：{:?}", remote_version);
                        return Ok(db);
                    }
                    Err(e) => warn!("本地缓存特征库无法解析：{}，将重新下载", e),
                }
            }
        }

        let text = fetcher.fetch_database().await?;
        // 先解析成功再写缓存，避免缓存损坏数据
        let db = loader.load(&text)?.with_version(remote_version.clone());

        let cached = CachedDatabase {
            version: remote_version,
            text,
        };
        if let Err(e) = DatabaseCacheManager::save_to_cache(config, &cached).await {
            warn!("特征库缓存到本地失败：{}", e);
        }

        info!("特征库已更新至版本：{:?}", cached.version);
        Ok(db)
    }

    fn load_cached(loader: &DatabaseLoader, cached: CachedDatabase) -> RsuResult<SignatureDatabase> {
        Ok(loader.load(&cached.text)?.with_version(cached.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use crate::config::ConfigManager;
    use crate::error::RsuaError;
    use crate::rule::model::{BROWSER, BROWSER_REG};
    use crate::testdata::SAMPLE_DATABASE;

    const UNREACHABLE: &str = "http://127.0.0.1:1/";

    /// 本地 HTTP 桩：按路径返回固定内容，未知路径返回 404
    async fn serve(routes: Vec<(&'static str, String)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => break,
                            Ok(n) => request.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = match routes.iter().find(|(route, _)| *route == path) {
                        Some((_, body)) => ("200 OK", body.as_str()),
                        None => ("404 Not Found", ""),
                    };
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}", addr)
    }

    fn temp_cache(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rsuaparser-updater-{}-{}.mp", name, std::process::id()))
    }

    fn remote_config(name: &str, base: &str) -> GlobalConfig {
        ConfigManager::custom()
            .cache_path(temp_cache(name))
            .version_url(format!("{}/version", base.trim_end_matches('/')))
            .data_url(format!("{}/data", base.trim_end_matches('/')))
            .http_timeout(5)
            .build()
            .unwrap()
    }

    async fn seed_cache(config: &GlobalConfig, version: &str) {
        let cached = CachedDatabase {
            version: Some(version.to_string()),
            text: SAMPLE_DATABASE.to_string(),
        };
        DatabaseCacheManager::save_to_cache(config, &cached).await.unwrap();
    }

    fn cached(version: Option<&str>) -> CachedDatabase {
        CachedDatabase {
            version: version.map(str::to_string),
            text: String::new(),
        }
    }

    #[test]
    fn test_plan_reuses_cache_for_same_version() {
        let c = cached(Some("20240101-01"));
        assert_eq!(UpdatePlan::decide(Some(&c), Some("20240101-01")), UpdatePlan::UseCache);
    }

    #[test]
    fn test_plan_downloads_for_new_version() {
        let c = cached(Some("20240101-01"));
        assert_eq!(UpdatePlan::decide(Some(&c), Some("20240202-01")), UpdatePlan::Download);
        assert_eq!(UpdatePlan::decide(Some(&cached(None)), Some("20240202-01")), UpdatePlan::Download);
        assert_eq!(UpdatePlan::decide(None, Some("20240202-01")), UpdatePlan::Download);
    }

    #[test]
    fn test_plan_falls_back_to_cache_when_remote_unreachable() {
        let c = cached(Some("20240101-01"));
        assert_eq!(UpdatePlan::decide(Some(&c), None), UpdatePlan::UseCache);
        assert_eq!(UpdatePlan::decide(None, None), UpdatePlan::Download);
    }

    #[tokio::test]
    async fn test_load_or_update_prefers_cache() {
        let config = ConfigManager::custom().cache_path(temp_cache("prefers")).build().unwrap();
        seed_cache(&config, "20240101-01").await;

        let db = DatabaseUpdater::load_or_update(&config).await.unwrap();
        assert_eq!(db.version(), Some("20240101-01"));
        assert_eq!(db.patterns(BROWSER_REG).unwrap().len(), 7);

        DatabaseCacheManager::clear_cache(&config).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_uses_cache_when_remote_unreachable() {
        let config = remote_config("unreachable", UNREACHABLE);
        seed_cache(&config, "20240101-01").await;

        let db = DatabaseUpdater::update(&config).await.unwrap();
        assert_eq!(db.version(), Some("20240101-01"));
        assert_eq!(db.record(BROWSER, 1).unwrap()[1], "Chrome");

        DatabaseCacheManager::clear_cache(&config).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_without_cache_reports_http_error() {
        let config = remote_config("no-cache", UNREACHABLE);
        let _ = DatabaseCacheManager::clear_cache(&config).await;

        let err = DatabaseUpdater::update(&config).await.unwrap_err();
        assert!(matches!(err, RsuaError::HttpError(_)), "意外错误：{:?}", err);
    }

    #[tokio::test]
    async fn test_update_reuses_cache_for_same_version() {
        // 数据地址不可用：若发生下载则更新失败
        let base = serve(vec![("/version", "20240101-01\n".to_string())]).await;
        let config = remote_config("same-version", &base);
        seed_cache(&config, "20240101-01").await;

        let db = DatabaseUpdater::update(&config).await.unwrap();
        assert_eq!(db.version(), Some("20240101-01"));

        DatabaseCacheManager::clear_cache(&config).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_downloads_new_version_and_saves_cache() {
        let text = "[device]\n1[] = \"Other\"\n".to_string();
        let base = serve(vec![
            ("/version", "20240202-01".to_string()),
            ("/data", text.clone()),
        ])
        .await;
        let config = remote_config("new-version", &base);
        seed_cache(&config, "20240101-01").await;

        let db = DatabaseUpdater::update(&config).await.unwrap();
        assert_eq!(db.version(), Some("20240202-01"));
        assert_eq!(db.record("device", 1).unwrap()[0], "Other");

        let cached = DatabaseCacheManager::load_from_cache(&config).await.unwrap();
        assert_eq!(cached.version.as_deref(), Some("20240202-01"));
        assert_eq!(cached.text, text);

        DatabaseCacheManager::clear_cache(&config).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_keeps_cache_when_download_is_malformed() {
        let base = serve(vec![
            ("/version", "20240202-01".to_string()),
            ("/data", "[browser_reg]\n1[] = \"/(unclosed/si\"\n".to_string()),
        ])
        .await;
        let config = remote_config("malformed", &base);
        seed_cache(&config, "20240101-01").await;

        let err = DatabaseUpdater::update(&config).await.unwrap_err();
        assert!(matches!(err, RsuaError::DatabaseFormatError { .. }), "意外错误：{:?}", err);

        let cached = DatabaseCacheManager::load_from_cache(&config).await.unwrap();
        assert_eq!(cached.version.as_deref(), Some("20240101-01"));
        assert_eq!(cached.text, SAMPLE_DATABASE);

        DatabaseCacheManager::clear_cache(&config).await.unwrap();
    }
}
