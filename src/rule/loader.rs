//! 特征库加载器
//! 负责将 UAS ini 文本解析为特征库，以及将特征库回写为同格式文本

use std::fmt::Write as _;
use std::time::Instant;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::macros::{debug, warn};

use super::model::{PatternEntry, Section, SignatureDatabase};
use crate::compiler::PatternCompiler;
use crate::config::GlobalConfig;
use crate::error::{RsuResult, RsuaError};

/// 分区外数据行的归属（仅用于日志与报错）
const UNKNOWN_SECTION: &str = "unknown";

static SECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\S+)\]$").unwrap()
});
static OPTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([0-9]+)\[\]\s=\s"(.*)"$"#).unwrap()
});

/// 特征库加载器
#[derive(Debug, Clone, Default)]
pub struct DatabaseLoader {
    // 严格模式：分区外的数据行报错而非忽略
    strict_sections: bool,
}

impl DatabaseLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            strict_sections: config.strict_sections,
        }
    }

    pub fn strict_sections(mut self, strict: bool) -> Self {
        self.strict_sections = strict;
        self
    }

    /// 解析 ini 文本（原子操作：任何正则错误都会使整个加载失败）
    pub fn load(&self, text: &str) -> RsuResult<SignatureDatabase> {
        let start = Instant::now();
        let mut db = SignatureDatabase::new();
        let mut current: Option<String> = None;
        let mut orphan_lines = 0usize;

        for raw_line in text.split('\n') {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

            if let Some(option) = OPTION_REGEX.captures(line) {
                let key_str = &option[1];
                let value = option[2].to_string();

                let Some(section_name) = current.as_deref() else {
                    if self.strict_sections {
                        return Err(RsuaError::format(
                            UNKNOWN_SECTION,
                            key_str.parse().ok(),
                            "数据行不属于任何分区",
                        ));
                    }
                    orphan_lines += 1;
                    continue;
                };

                let key: u64 = key_str.parse().map_err(|_| {
                    RsuaError::format(section_name, None, format!("键 `{}` 超出范围", key_str))
                })?;

                Self::insert_value(&mut db, section_name, key, value)?;
            } else if let Some(section) = SECTION_REGEX.captures(line) {
                let name = section[1].to_string();
                if db.section(&name).is_some() {
                    warn!("分区 [{}] 重复声明，之前的内容被丢弃", name);
                }
                db.start_section(&name);
                current = Some(name);
            }
        }

        if orphan_lines > 0 {
            warn!("忽略 {} 条不属于任何分区的数据行", orphan_lines);
        }

        let stats = db.stats();
        debug!(
            "✅ 特征库加载完成，耗时{:?}，分区{}个、正则{}条、记录{}条",
            start.elapsed(),
            stats.sections,
            stats.patterns,
            stats.records
        );

        Ok(db)
    }

    /// 写入单个数据行：正则分区的首个字段在此编译，其余字段原样追加
    fn insert_value(
        db: &mut SignatureDatabase,
        section_name: &str,
        key: u64,
        value: String,
    ) -> RsuResult<()> {
        let Some(section) = db.section_mut(section_name) else {
            return Err(RsuaError::format(section_name, Some(key), "分区未初始化"));
        };

        match section {
            Section::Patterns(patterns) => {
                if let Some(entry) = patterns.get_mut(key) {
                    entry.fields.push(value);
                } else {
                    let pattern = PatternCompiler::compile(&value)
                        .map_err(|e| RsuaError::format(section_name, Some(key), e.to_string()))?;
                    patterns.push(PatternEntry {
                        key,
                        pattern,
                        fields: Vec::new(),
                    });
                }
            }
            Section::Records(records) => records.append(key, value),
        }

        Ok(())
    }

    /// 将特征库回写为 ini 文本（分区与键均按声明顺序）
    pub fn dump(db: &SignatureDatabase) -> String {
        let mut out = String::new();

        for (name, section) in db.sections() {
            let _ = writeln!(out, "[{}]", name);
            match section {
                Section::Patterns(patterns) => {
                    for entry in patterns.iter() {
                        Self::write_line(&mut out, entry.key, entry.pattern.raw());
                        for field in &entry.fields {
                            Self::write_line(&mut out, entry.key, field);
                        }
                    }
                }
                Section::Records(records) => {
                    for (id, fields) in records.iter() {
                        for field in fields {
                            Self::write_line(&mut out, id, field);
                        }
                    }
                }
            }
            out.push('\n');
        }

        out
    }

    fn write_line(out: &mut String, key: u64, value: &str) {
        let _ = writeln!(out, "{}[] = \"{}\"", key, value);
    }
}
