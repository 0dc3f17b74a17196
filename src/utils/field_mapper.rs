//! 记录字段映射工具
//! 按分区字段表将特征库记录逐位写入解析结果（不覆盖已有字段）

use crate::rule::{UaField, UaInfo};

/// 记录字段映射工具
pub struct FieldMapper;

impl FieldMapper {
    /// 按字段表写入记录
    ///
    /// `schema` 与 `values` 按位置对应，`None` 表示该位置不输出；
    /// 记录长度不足时缺失的字段直接省略。返回实际写入的字段数。
    pub fn apply(info: &mut UaInfo, schema: &[Option<UaField>], values: &[String]) -> usize {
        let mut written = 0;
        for (field, value) in schema.iter().zip(values) {
            let Some(field) = field else {
                continue;
            };
            if info.insert_if_absent(*field, value.clone()) {
                written += 1;
            }
        }
        written
    }
}
