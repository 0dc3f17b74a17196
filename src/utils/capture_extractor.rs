//! 捕获分组提取工具模块
//! 负责从首次正则匹配中提取浏览器明细串（通常为版本号）

use fancy_regex::Regex;

/// 捕获分组提取工具类
pub struct CaptureExtractor;

impl CaptureExtractor {
    /// 从首次匹配中提取明细串
    ///
    /// # 返回值
    /// - `None`: 输入不匹配（含匹配过程中的运行期错误）
    /// - `Some(String)`: 正则含分组时为分组1的内容（分组未参与匹配则为空串），
    ///   不含分组时为整体匹配
    pub fn first_detail(regex: &Regex, input: &str) -> Option<String> {
        let captures = regex.captures(input).ok().flatten()?;

        // 0 是整体匹配，存在自定义分组时只取分组1
        let detail = if captures.len() > 1 {
            captures.get(1).map(|m| m.as_str()).unwrap_or_default()
        } else {
            captures.get(0).map(|m| m.as_str()).unwrap_or_default()
        };

        Some(detail.to_string())
    }
}
