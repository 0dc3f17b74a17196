//! 编译后模式模型
//! 正则编译后的结构

use std::fmt;
use fancy_regex::Regex;

use crate::macros::debug;
use crate::utils::CaptureExtractor;

/// 归一化后的正则描述：(正文, 忽略大小写, 点号匹配换行)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    pub body: String,
    pub case_insensitive: bool,
    pub dot_all: bool,
}

/// 编译后的正则模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    // 原始分隔符写法（回写特征库时使用）
    raw: String,
    spec: PatternSpec,
    regex: Regex,
}

impl CompiledPattern {
    pub(crate) fn new(raw: String, spec: PatternSpec, regex: Regex) -> Self {
        Self { raw, spec, regex }
    }

    /// 简单匹配判断（回溯超限等运行期错误按未命中处理）
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input).unwrap_or_else(|e| {
            debug!("正则匹配失败，按未命中处理：{}，原因：{}", self.raw, e);
            false
        })
    }

    /// 提取首次匹配的明细串（分组1，无分组时为整体匹配）
    pub fn detail(&self, input: &str) -> Option<String> {
        CaptureExtractor::first_detail(&self.regex, input)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CompiledPattern {}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
