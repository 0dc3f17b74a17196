//! 分类器：对单个 User-Agent 执行有序匹配流程
//! robots 精确匹配 → 浏览器正则 → 系统（browser_os 优先，其次正则） → 设备（正则，其次按浏览器类型兜底）
//! 每个阶段只依赖 (特征库, 输入, 上一阶段结果)，不修改特征库

use crate::macros::trace;

use crate::config::{ClassifierConfig, DeviceFallback};
use crate::rule::model::{
    self, BROWSER, BROWSER_OS, BROWSER_REG, BROWSER_SCHEMA, BROWSER_TYPE, DEVICE, DEVICE_REG,
    DEVICE_SCHEMA, OS, OS_REG, OS_SCHEMA, ROBOTS, ROBOT_SCHEMA,
};
use crate::rule::{SignatureDatabase, UaField, UaInfo};
use crate::utils::FieldMapper;

/// robots 命中时写入的类型
pub const ROBOT_TYPE: &str = "Robot";

/// 兜底为通用 "Other" 设备的浏览器类型
const OTHER_DEVICE_TYPES: [&str; 4] = ["Other", "Library", "Validator", "Useragent Anonymizer"];
/// 兜底为 "Mobile" 设备的浏览器类型
const MOBILE_DEVICE_TYPES: [&str; 2] = ["Mobile Browser", "Wap Browser"];

/// 浏览器阶段的结果，供系统/设备阶段使用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserMatch {
    // 命中正则的目标浏览器ID（ID无法解析时为 None）
    pub browser_id: Option<u64>,
    // 分组1捕获的明细串（通常为版本号）
    pub detail: String,
    // browser_type 表中解析出的浏览器类型
    pub browser_type: Option<String>,
    pub info: UaInfo,
}

/// 单次分类（随调用创建，随调用销毁）
pub struct Classifier<'a> {
    db: &'a SignatureDatabase,
    config: &'a ClassifierConfig,
    ua: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(db: &'a SignatureDatabase, config: &'a ClassifierConfig, ua: &'a str) -> Self {
        Self { db, config, ua }
    }

    /// 执行完整流程
    pub fn classify(&self) -> UaInfo {
        if self.ua.is_empty() {
            return UaInfo::default();
        }

        if let Some(robot) = self.robot_check() {
            return robot;
        }

        // 没有任何浏览器正则命中时直接返回空结果
        let Some(browser) = self.browser_match() else {
            return UaInfo::default();
        };

        let os = self.os_match(&browser);
        let device = self.device_match(&browser);

        let mut info = browser.info;
        info.merge(os);
        info.merge(device);
        info
    }

    /// robots 精确匹配（按声明顺序，首个命中即返回）
    pub fn robot_check(&self) -> Option<UaInfo> {
        let robots = self.db.records(ROBOTS)?;
        let (id, record) = robots
            .iter()
            .find(|(_, record)| record.first().is_some_and(|ua| ua == self.ua))?;

        trace!("robots 命中：id={}", id);
        let mut info = UaInfo::default();
        info.insert_if_absent(UaField::Type, ROBOT_TYPE.to_string());
        FieldMapper::apply(&mut info, &ROBOT_SCHEMA, &record[1..]);
        Some(info)
    }

    /// 浏览器匹配：browser_reg 首个命中即停止
    pub fn browser_match(&self) -> Option<BrowserMatch> {
        let entry = self.db.patterns(BROWSER_REG)?.first_match(self.ua)?;

        let mut result = BrowserMatch {
            browser_id: entry.target_id(),
            detail: entry.pattern.detail(self.ua).unwrap_or_default(),
            ..Default::default()
        };
        trace!(
            "browser_reg 命中：key={}，浏览器ID={:?}，明细={}",
            entry.key,
            result.browser_id,
            result.detail
        );

        // 浏览器ID不在 browser 表中：浏览器字段为空，不提前返回空结果，继续后续阶段
        let Some(record) = result.browser_id.and_then(|id| self.db.record(BROWSER, id)) else {
            return Some(result);
        };

        FieldMapper::apply(&mut result.info, &BROWSER_SCHEMA, record.get(1..).unwrap_or_default());

        result.browser_type = record
            .first()
            .and_then(|type_id| model::parse_id(type_id))
            .and_then(|type_id| self.db.record(BROWSER_TYPE, type_id))
            .and_then(|type_record| type_record.first())
            .cloned();
        if let Some(browser_type) = &result.browser_type {
            result.info.insert_if_absent(UaField::Type, browser_type.clone());
        }

        if let Some(name) = record.get(1) {
            result.info.insert_if_absent(UaField::UaName, format!("{} {}", name, result.detail));
        }

        Some(result)
    }

    /// 系统匹配：browser_os 存在关联时跳过正则
    pub fn os_match(&self, browser: &BrowserMatch) -> UaInfo {
        let mut info = UaInfo::default();

        if let Some(association) = browser.browser_id.and_then(|id| self.db.record(BROWSER_OS, id)) {
            let record = association
                .first()
                .and_then(|os_id| model::parse_id(os_id))
                .and_then(|os_id| self.db.record(OS, os_id));
            match record {
                Some(record) => {
                    FieldMapper::apply(&mut info, &OS_SCHEMA, record);
                }
                None => trace!("browser_os 关联的系统ID不存在：{:?}", association.first()),
            }
            return info;
        }

        let Some(os_reg) = self.db.patterns(OS_REG) else {
            return info;
        };

        // 命中但系统ID无法解析的记录跳过，继续向后查找
        let record = os_reg
            .matches(self.ua)
            .find_map(|entry| entry.target_id().and_then(|id| self.db.record(OS, id)));
        if let Some(record) = record {
            FieldMapper::apply(&mut info, &OS_SCHEMA, record);
        }

        info
    }

    /// 设备匹配：device_reg 无命中时按浏览器类型兜底
    pub fn device_match(&self, browser: &BrowserMatch) -> UaInfo {
        let mut info = UaInfo::default();
        let mut matched = false;

        if let Some(device_reg) = self.db.patterns(DEVICE_REG) {
            for entry in device_reg.matches(self.ua) {
                matched = true;
                if let Some(record) = entry.target_id().and_then(|id| self.db.record(DEVICE, id)) {
                    FieldMapper::apply(&mut info, &DEVICE_SCHEMA, record);
                    return info;
                }
            }
        }

        // 有正则命中但设备ID均无法解析：不走兜底
        if matched {
            trace!("device_reg 命中但设备ID不存在，设备字段留空");
            return info;
        }

        let fallback_id = fallback_device_id(browser.browser_type.as_deref(), &self.config.fallback);
        if let Some(record) = self.db.record(DEVICE, fallback_id) {
            FieldMapper::apply(&mut info, &DEVICE_SCHEMA, record);
        }

        info
    }
}

/// 按浏览器类型推断兜底设备ID（未知类型按桌面浏览器处理）
pub fn fallback_device_id(browser_type: Option<&str>, fallback: &DeviceFallback) -> u64 {
    match browser_type {
        Some(t) if OTHER_DEVICE_TYPES.contains(&t) => fallback.other,
        Some(t) if MOBILE_DEVICE_TYPES.contains(&t) => fallback.mobile,
        _ => fallback.browser,
    }
}
