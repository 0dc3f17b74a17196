//! 特征库数据模型定义
//! 仅存储特征库数据，构建完成后只读，可在多线程间共享

use std::collections::HashMap;

use super::result::UaField;
use crate::compiler::CompiledPattern;

// 分区名称
pub const ROBOTS: &str = "robots";
pub const BROWSER: &str = "browser";
pub const BROWSER_TYPE: &str = "browser_type";
pub const BROWSER_REG: &str = "browser_reg";
pub const BROWSER_OS: &str = "browser_os";
pub const OS: &str = "os";
pub const OS_REG: &str = "os_reg";
pub const DEVICE: &str = "device";
pub const DEVICE_REG: &str = "device_reg";

/// 需要在加载时编译正则的有序分区
pub const PATTERN_SECTIONS: [&str; 3] = [BROWSER_REG, OS_REG, DEVICE_REG];

use UaField::*;

/// robots 记录字段表（跳过首位的UA原文，第7位为系统ID，不输出）
pub const ROBOT_SCHEMA: [Option<UaField>; 8] = [
    Some(UaFamily),
    Some(UaName),
    Some(UaUrl),
    Some(UaCompany),
    Some(UaCompanyUrl),
    Some(UaIcon),
    None,
    Some(UaInfoUrl),
];

/// browser 记录字段表（跳过首位的浏览器类型ID）
pub const BROWSER_SCHEMA: [Option<UaField>; 6] = [
    Some(UaFamily),
    Some(UaUrl),
    Some(UaCompany),
    Some(UaCompanyUrl),
    Some(UaIcon),
    Some(UaInfoUrl),
];

/// os 记录字段表
pub const OS_SCHEMA: [Option<UaField>; 6] = [
    Some(OsFamily),
    Some(OsName),
    Some(OsUrl),
    Some(OsCompany),
    Some(OsCompanyUrl),
    Some(OsIcon),
];

/// device 记录字段表
pub const DEVICE_SCHEMA: [Option<UaField>; 3] = [
    Some(DeviceType),
    Some(DeviceIcon),
    Some(DeviceInfoUrl),
];

/// 解析数字ID（延迟到分类阶段，容忍非关键字段的格式漂移）
pub fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// 有序正则分区中的单条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub key: u64,
    pub pattern: CompiledPattern,
    // 正则之后的字段，首个为目标ID
    pub fields: Vec<String>,
}

impl PatternEntry {
    pub fn target_id(&self) -> Option<u64> {
        self.fields.first().and_then(|id| parse_id(id))
    }
}

/// 有序正则分区（声明顺序即匹配优先级）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSection {
    entries: Vec<PatternEntry>,
    index: HashMap<u64, usize>,
}

impl PatternSection {
    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter()
    }

    pub fn get(&self, key: u64) -> Option<&PatternEntry> {
        self.index.get(&key).map(|&idx| &self.entries[idx])
    }

    /// 按声明顺序返回第一个命中的记录
    pub fn first_match(&self, input: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.pattern.is_match(input))
    }

    /// 按声明顺序返回所有命中的记录
    pub fn matches<'a>(&'a self, input: &'a str) -> impl Iterator<Item = &'a PatternEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.pattern.is_match(input))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get_mut(&mut self, key: u64) -> Option<&mut PatternEntry> {
        self.index.get(&key).map(|&idx| &mut self.entries[idx])
    }

    pub(crate) fn push(&mut self, entry: PatternEntry) {
        self.index.insert(entry.key, self.entries.len());
        self.entries.push(entry);
    }
}

/// 键值记录分区（ID -> 字段元组），保留键的声明顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSection {
    order: Vec<u64>,
    records: HashMap<u64, Vec<String>>,
}

impl RecordSection {
    pub fn get(&self, id: u64) -> Option<&[String]> {
        self.records.get(&id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// 按声明顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[String])> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|fields| (*id, fields.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 同一键的多行追加为多字段，首次出现确定顺序
    pub(crate) fn append(&mut self, id: u64, value: String) {
        match self.records.get_mut(&id) {
            Some(fields) => fields.push(value),
            None => {
                self.order.push(id);
                self.records.insert(id, vec![value]);
            }
        }
    }
}

/// 特征库分区
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Patterns(PatternSection),
    Records(RecordSection),
}

impl Section {
    /// 按分区名创建空分区
    pub fn for_name(name: &str) -> Self {
        if PATTERN_SECTIONS.contains(&name) {
            Section::Patterns(PatternSection::default())
        } else {
            Section::Records(RecordSection::default())
        }
    }

    pub fn as_patterns(&self) -> Option<&PatternSection> {
        match self {
            Section::Patterns(patterns) => Some(patterns),
            Section::Records(_) => None,
        }
    }

    pub fn as_records(&self) -> Option<&RecordSection> {
        match self {
            Section::Records(records) => Some(records),
            Section::Patterns(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Section::Patterns(patterns) => patterns.len(),
            Section::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 特征库统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub sections: usize,
    pub patterns: usize,
    pub records: usize,
}

/// 完整特征库
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureDatabase {
    sections: HashMap<String, Section>,
    // 分区声明顺序（回写时使用）
    order: Vec<String>,
    version: Option<String>,
}

impl SignatureDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn patterns(&self, name: &str) -> Option<&PatternSection> {
        self.section(name).and_then(Section::as_patterns)
    }

    pub fn records(&self, name: &str) -> Option<&RecordSection> {
        self.section(name).and_then(Section::as_records)
    }

    /// 读取记录分区中的单条记录
    pub fn record(&self, section: &str, id: u64) -> Option<&[String]> {
        self.records(section).and_then(|records| records.get(id))
    }

    /// 按声明顺序遍历分区
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.order
            .iter()
            .filter_map(|name| self.sections.get(name).map(|section| (name.as_str(), section)))
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn stats(&self) -> DatabaseStats {
        let mut stats = DatabaseStats {
            sections: self.sections.len(),
            ..Default::default()
        };
        for section in self.sections.values() {
            match section {
                Section::Patterns(patterns) => stats.patterns += patterns.len(),
                Section::Records(records) => stats.records += records.len(),
            }
        }
        stats
    }

    /// 开始（或重新开始）一个分区，重复的分区头会清空之前的内容
    pub(crate) fn start_section(&mut self, name: &str) {
        if !self.sections.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.sections.insert(name.to_string(), Section::for_name(name));
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }
}
