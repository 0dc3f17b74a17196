//! 正则编译器核心
//! 仅负责将 `/正文/标志` 形式的通用正则转换为可执行正则
//! 特征库正则为 Perl 风格写法（环视、反向引用、字面量花括号），统一交给 fancy-regex 编译

use fancy_regex::RegexBuilder;
use crate::macros::debug;

use super::pattern::{CompiledPattern, PatternSpec};
use crate::error::{RsuResult, RsuaError};

/// 正则编译器
pub struct PatternCompiler;

impl PatternCompiler {
    /// 编译单个分隔符正则
    pub fn compile(raw: &str) -> RsuResult<CompiledPattern> {
        let spec = Self::parse(raw)?;

        let mut body = Self::translate(&spec.body);
        if spec.dot_all {
            body.insert_str(0, "(?s)");
        }
        let regex = RegexBuilder::new(&body)
            .case_insensitive(spec.case_insensitive)
            .build()
            .map_err(|e| Self::invalid(raw, e.to_string()))?;

        Ok(CompiledPattern::new(raw.to_string(), spec, regex))
    }

    /// 将 Perl 风格正文改写为 fancy-regex 可接受的等价写法
    ///
    /// - 不构成合法量词的 `{`、`}` 以及类外的 `]` 按字面量转义，`{,n}` 补全为 `{0,n}`
    /// - 字符类内的 `[`、`&`、`~` 按字面量转义（避免被解析为嵌套类或集合运算）
    /// - `\Z` 改写为 `\z`
    pub fn translate(body: &str) -> String {
        let chars: Vec<char> = body.chars().collect();
        let mut out = String::with_capacity(body.len() + 8);
        let mut in_class = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '\\' => {
                    match chars.get(i + 1) {
                        Some('Z') => out.push_str(r"\z"),
                        Some(&next) => {
                            out.push('\\');
                            out.push(next);
                        }
                        // 末尾孤立的反斜杠留给正则引擎报错
                        None => out.push('\\'),
                    }
                    i += 2;
                    continue;
                }
                '[' if !in_class => {
                    in_class = true;
                    out.push('[');
                    i += 1;
                    if chars.get(i) == Some(&'^') {
                        out.push('^');
                        i += 1;
                    }
                    // 紧跟开括号的 `]` 是字面量
                    if chars.get(i) == Some(&']') {
                        out.push_str(r"\]");
                        i += 1;
                    }
                    continue;
                }
                '[' | '&' | '~' if in_class => {
                    out.push('\\');
                    out.push(c);
                }
                ']' if in_class => {
                    in_class = false;
                    out.push(']');
                }
                '{' if !in_class => {
                    if let Some((len, quantifier)) = Self::quantifier(&chars[i..]) {
                        out.push_str(&quantifier);
                        i += len;
                        continue;
                    }
                    out.push_str(r"\{");
                }
                '}' | ']' if !in_class => {
                    out.push('\\');
                    out.push(c);
                }
                _ => out.push(c),
            }
            i += 1;
        }

        out
    }

    /// 识别 `{m}`、`{m,}`、`{,n}`、`{m,n}` 形式的量词，返回 (消耗字符数, 改写后的量词)
    fn quantifier(chars: &[char]) -> Option<(usize, String)> {
        let close = chars.iter().position(|&c| c == '}')?;
        let inner: String = chars[1..close].iter().collect();
        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

        let quantifier = match inner.split_once(',') {
            Some((min, max)) if is_digits(min) && is_digits(max) => {
                let min = if min.is_empty() { "0" } else { min };
                format!("{{{},{}}}", min, max)
            }
            None if !inner.is_empty() && is_digits(&inner) => format!("{{{}}}", inner),
            _ => return None,
        };

        Some((close + 1, quantifier))
    }

    /// 拆分分隔符、正文与标志
    ///
    /// 分隔符取首字符；正文位于首个与最后一个分隔符之间，标志位于最后一个分隔符之后。
    /// 支持的标志：`s`（点号匹配换行）、`i`（忽略大小写），其余字符忽略。
    pub fn parse(raw: &str) -> RsuResult<PatternSpec> {
        let Some(delimiter) = raw.chars().next() else {
            return Err(Self::invalid(raw, "空模式"));
        };
        if delimiter.is_alphanumeric() || delimiter.is_whitespace() || delimiter == '\\' {
            return Err(Self::invalid(raw, format!("非法分隔符 `{}`", delimiter)));
        }

        let open = delimiter.len_utf8();
        let close = match raw.rfind(delimiter) {
            Some(idx) if idx >= open => idx,
            _ => return Err(Self::invalid(raw, "缺少结束分隔符")),
        };

        let body = &raw[open..close];
        let flags = &raw[close + open..];

        let mut spec = PatternSpec {
            body: body.to_string(),
            case_insensitive: false,
            dot_all: false,
        };
        for flag in flags.chars() {
            match flag {
                's' => spec.dot_all = true,
                'i' => spec.case_insensitive = true,
                other => debug!("忽略未知正则标志 `{}`：{}", other, raw),
            }
        }

        Ok(spec)
    }

    fn invalid(raw: &str, reason: impl Into<String>) -> RsuaError {
        RsuaError::InvalidPatternError {
            pattern: raw.to_string(),
            reason: reason.into(),
        }
    }
}
