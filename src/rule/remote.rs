//! 远程特征库拉取
//! 负责从 UAS 服务获取特征库版本号与 ini 原文

use std::time::Duration;
use reqwest::Client;
use crate::macros::debug;

use crate::config::GlobalConfig;
use crate::error::{RsuResult, RsuaError};

const USER_AGENT: &str = concat!("rsuaparser/", env!("CARGO_PKG_VERSION"));

/// 远程特征库拉取器
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    client: Client,
    data_url: String,
    version_url: String,
}

impl RemoteFetcher {
    pub fn new(config: &GlobalConfig) -> RsuResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self {
            client,
            data_url: config.data_url.clone(),
            version_url: config.version_url.clone(),
        })
    }

    /// 查询远程特征库版本号
    pub async fn fetch_version(&self) -> RsuResult<String> {
        let body = self.fetch_text(&self.version_url).await?;
        let version = body.trim().to_string();
        if version.is_empty() {
            return Err(RsuaError::DatabaseLoadError(format!(
                "URL {} 返回空版本号",
                self.version_url
            )));
        }
        debug!("远程特征库版本：{}", version);
        Ok(version)
    }

    /// 下载特征库 ini 原文
    pub async fn fetch_database(&self) -> RsuResult<String> {
        let text = self.fetch_text(&self.data_url).await?;
        debug!("特征库下载完成，大小：{} 字节", text.len());
        Ok(text)
    }

    async fn fetch_text(&self, url: &str) -> RsuResult<String> {
        let response = self.client.get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept-Encoding", "gzip, deflate")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RsuaError::DatabaseLoadError(format!(
                "URL {} 返回状态码 {}",
                url, response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
