//! 工具模块：捕获分组提取、记录字段映射
pub mod capture_extractor;
pub mod field_mapper;

pub use self::capture_extractor::CaptureExtractor;
pub use self::field_mapper::FieldMapper;
