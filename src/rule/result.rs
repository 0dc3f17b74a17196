//! 解析结果模型
//! 只保存实际解析出的字段，未命中的字段不存在（不做空值填充）

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::RsuaError;

/// 结果字段（固定词表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UaField {
    #[serde(rename = "type")]
    Type,
    UaFamily,
    UaName,
    UaUrl,
    UaCompany,
    UaCompanyUrl,
    UaIcon,
    UaInfoUrl,
    OsFamily,
    OsName,
    OsUrl,
    OsCompany,
    OsCompanyUrl,
    OsIcon,
    DeviceType,
    DeviceIcon,
    DeviceInfoUrl,
}

impl UaField {
    pub const ALL: [UaField; 17] = [
        UaField::Type,
        UaField::UaFamily,
        UaField::UaName,
        UaField::UaUrl,
        UaField::UaCompany,
        UaField::UaCompanyUrl,
        UaField::UaIcon,
        UaField::UaInfoUrl,
        UaField::OsFamily,
        UaField::OsName,
        UaField::OsUrl,
        UaField::OsCompany,
        UaField::OsCompanyUrl,
        UaField::OsIcon,
        UaField::DeviceType,
        UaField::DeviceIcon,
        UaField::DeviceInfoUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UaField::Type => "type",
            UaField::UaFamily => "ua_family",
            UaField::UaName => "ua_name",
            UaField::UaUrl => "ua_url",
            UaField::UaCompany => "ua_company",
            UaField::UaCompanyUrl => "ua_company_url",
            UaField::UaIcon => "ua_icon",
            UaField::UaInfoUrl => "ua_info_url",
            UaField::OsFamily => "os_family",
            UaField::OsName => "os_name",
            UaField::OsUrl => "os_url",
            UaField::OsCompany => "os_company",
            UaField::OsCompanyUrl => "os_company_url",
            UaField::OsIcon => "os_icon",
            UaField::DeviceType => "device_type",
            UaField::DeviceIcon => "device_icon",
            UaField::DeviceInfoUrl => "device_info_url",
        }
    }
}

impl fmt::Display for UaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UaField {
    type Err = RsuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UaField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RsuaError::InvalidInput(format!("未知字段：{}", s)))
    }
}

/// 单个 User-Agent 的解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UaInfo {
    fields: BTreeMap<UaField, String>,
}

impl UaInfo {
    pub fn get(&self, field: UaField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// 按字段名读取（未知字段名视为不存在）
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        name.parse::<UaField>().ok().and_then(|field| self.get(field))
    }

    pub fn contains(&self, field: UaField) -> bool {
        self.fields.contains_key(&field)
    }

    /// 字段不存在时写入，返回是否写入
    pub fn insert_if_absent(&mut self, field: UaField, value: String) -> bool {
        match self.fields.entry(field) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// 合并另一组字段（已有字段保持不变）
    pub fn merge(&mut self, other: UaInfo) {
        for (field, value) in other.fields {
            self.fields.entry(field).or_insert(value);
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn is_robot(&self) -> bool {
        self.get(UaField::Type) == Some("Robot")
    }

    pub fn iter(&self) -> impl Iterator<Item = (UaField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// 转换为字段名 -> 值的映射
    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(field, value)| (field.as_str().to_string(), value.to_string()))
            .collect()
    }

    pub fn to_json(&self) -> crate::error::RsuResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ======== 为 UaInfo 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for UaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [UaField::UaName, UaField::OsName, UaField::DeviceType]
            .into_iter()
            .filter_map(|field| self.get(field))
            .filter(|value| !value.is_empty())
            .collect();

        if parts.is_empty() {
            write!(f, "unknown")
        } else {
            write!(f, "{}", parts.join(" / "))
        }
    }
}
